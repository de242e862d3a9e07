use serde::{Deserialize, Serialize};
use xrjoy_common::{Pose, glam::Vec3};

/// Button and analog state of one controller, captured after an action sync.
///
/// The serialized field names are the contract with the downstream bridge and
/// must not be renamed. `button_a_x` and `button_b_y` carry A/B on the right
/// hand and X/Y on the left hand.
#[derive(Serialize, Deserialize, Clone, Copy, Default, PartialEq, Debug)]
pub struct ControllerInput {
    pub trigger: f32,
    pub squeeze: f32,
    pub thumbstick_x: f32,
    pub thumbstick_y: f32,
    pub thumbstick_click: bool,
    pub button_a_x: bool,
    pub button_b_y: bool,
    pub menu: bool,
}

/// Pose of a tracked space plus its velocities. Velocities the runtime
/// reported as invalid are zeroed.
#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug)]
pub struct PoseMotion {
    pub pose: Pose,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
}
