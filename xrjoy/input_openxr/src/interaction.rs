use crate::{
    profiles::{self, ActionId},
    spaces::TrackingSpaces,
};
use openxr as xr;
use xrjoy_common::{
    Side,
    anyhow::{Context, Result},
    debug, info, paths, warn,
};
use xrjoy_packets::ControllerInput;

pub struct ControllerActions {
    pub aim_pose: xr::Action<xr::Posef>,
    pub grip_pose: xr::Action<xr::Posef>,
    pub trigger: xr::Action<f32>,
    pub squeeze: xr::Action<f32>,
    pub thumbstick: xr::Action<xr::Vector2f>,
    pub thumbstick_click: xr::Action<bool>,
    pub button_a: xr::Action<bool>,
    pub button_b: xr::Action<bool>,
    pub button_x: xr::Action<bool>,
    pub button_y: xr::Action<bool>,
    pub menu: xr::Action<bool>,
}

/// Controller action set of a session, with bindings suggested for all
/// supported interaction profiles and the set attached.
pub struct InteractionContext {
    pub(crate) xr_session: xr::Session<xr::AnyGraphics>,
    pub action_set: xr::ActionSet,
    pub actions: ControllerActions,
    pub(crate) hand_subaction_paths: [xr::Path; 2],
}

impl InteractionContext {
    pub fn new<G>(xr_session: xr::Session<G>) -> Result<Self> {
        let xr_session = xr_session.into_any_graphics();
        let xr_instance = xr_session.instance();

        let action_set = xr_instance
            .create_action_set("controller_data", "Controller Data", 1)
            .context("Failed to create controller action set")?;

        let left_hand_path = xr_instance.string_to_path(paths::LEFT_HAND_PATH)?;
        let right_hand_path = xr_instance.string_to_path(paths::RIGHT_HAND_PATH)?;
        let hand_subaction_paths = [left_hand_path, right_hand_path];

        let actions = ControllerActions {
            aim_pose: action_set.create_action("aim_pose", "Aim Pose", &hand_subaction_paths)?,
            grip_pose: action_set.create_action("grip_pose", "Grip Pose", &hand_subaction_paths)?,
            trigger: action_set.create_action("trigger", "Trigger", &hand_subaction_paths)?,
            squeeze: action_set.create_action("squeeze", "Squeeze", &hand_subaction_paths)?,
            thumbstick: action_set.create_action(
                "thumbstick",
                "Thumbstick",
                &hand_subaction_paths,
            )?,
            thumbstick_click: action_set.create_action(
                "thumbstick_click",
                "Thumbstick Click",
                &hand_subaction_paths,
            )?,
            button_a: action_set.create_action("button_a", "Button A", &[right_hand_path])?,
            button_b: action_set.create_action("button_b", "Button B", &[right_hand_path])?,
            button_x: action_set.create_action("button_x", "Button X", &[left_hand_path])?,
            button_y: action_set.create_action("button_y", "Button Y", &[left_hand_path])?,
            menu: action_set.create_action("menu", "Menu", &[left_hand_path])?,
        };

        profiles::suggest_controller_bindings(xr_instance, &actions)?;

        xr_session
            .attach_action_sets(&[&action_set])
            .context("Failed to attach controller action set to the session")?;

        Ok(Self {
            xr_session,
            action_set,
            actions,
            hand_subaction_paths,
        })
    }

    /// Creates the reference space and the per-hand aim/grip action spaces.
    pub fn setup_spaces(&self) -> Result<TrackingSpaces> {
        TrackingSpaces::new(self)
    }

    /// Refreshes the state of all controller actions. Must run once per frame
    /// before poses or inputs are queried for that frame.
    pub fn sync_actions(&self) -> Result<()> {
        self.xr_session
            .sync_actions(&[xr::ActiveActionSet::new(&self.action_set)])
            .context("Failed to sync controller actions")?;

        Ok(())
    }

    /// Snapshot of button and analog state for one hand. Channels that are
    /// inactive or fail to query report their released value.
    pub fn hand_input(&self, side: Side) -> ControllerInput {
        let session = &self.xr_session;
        let actions = &self.actions;
        let path = self.hand_subaction_paths[side as usize];

        let stick = vector_channel(side, "thumbstick", actions.thumbstick.state(session, path));

        let (button_a_x, button_b_y, menu) = shared_buttons(side, |id| {
            let (channel, action) = match id {
                ActionId::ButtonA => ("button_a", &actions.button_a),
                ActionId::ButtonB => ("button_b", &actions.button_b),
                ActionId::ButtonX => ("button_x", &actions.button_x),
                ActionId::ButtonY => ("button_y", &actions.button_y),
                ActionId::Menu => ("menu", &actions.menu),
                _ => return false,
            };

            binary_channel(side, channel, action.state(session, path))
        });

        ControllerInput {
            trigger: scalar_channel(side, "trigger", actions.trigger.state(session, path)),
            squeeze: scalar_channel(side, "squeeze", actions.squeeze.state(session, path)),
            thumbstick_x: stick.x,
            thumbstick_y: stick.y,
            thumbstick_click: binary_channel(
                side,
                "thumbstick_click",
                actions.thumbstick_click.state(session, path),
            ),
            button_a_x,
            button_b_y,
            menu,
        }
    }

    /// Path of the interaction profile the runtime bound for this hand, or
    /// `None` when no profile is bound or the query fails.
    pub fn current_interaction_profile(&self, side: Side) -> Option<String> {
        match self.interaction_profile_name(side) {
            Ok(name) => name,
            Err(e) => {
                warn!(
                    "Could not query {} hand interaction profile: {e}",
                    side.as_str()
                );

                None
            }
        }
    }

    pub fn log_interaction_profiles(&self) {
        for side in [Side::Left, Side::Right] {
            match self.current_interaction_profile(side) {
                Some(name) => info!("{} hand interaction profile: {name}", side.as_str()),
                None => info!("{} hand interaction profile: none bound", side.as_str()),
            }
        }
    }

    fn interaction_profile_name(&self, side: Side) -> xr::Result<Option<String>> {
        let profile = self
            .xr_session
            .current_interaction_profile(self.hand_subaction_paths[side as usize])?;

        if profile == xr::Path::NULL {
            return Ok(None);
        }

        Ok(Some(self.xr_session.instance().path_to_string(profile)?))
    }
}

/// Picks the boolean channels that fill `button_a_x`, `button_b_y` and `menu`
/// for one hand and reads them through `read`.
fn shared_buttons(side: Side, mut read: impl FnMut(ActionId) -> bool) -> (bool, bool, bool) {
    match side {
        Side::Left => (read(ActionId::ButtonX), read(ActionId::ButtonY), read(ActionId::Menu)),
        // Menu is only bound on the left controller
        Side::Right => (read(ActionId::ButtonA), read(ActionId::ButtonB), false),
    }
}

fn scalar_channel(side: Side, channel: &str, state: xr::Result<xr::ActionState<f32>>) -> f32 {
    match state {
        Ok(state) => {
            debug!(
                "{} {channel}: active={}, value={}",
                side.as_str(),
                state.is_active,
                state.current_state
            );

            if state.is_active {
                state.current_state
            } else {
                0.0
            }
        }
        Err(e) => {
            debug!("{} {channel} query failed: {e}", side.as_str());

            0.0
        }
    }
}

fn binary_channel(side: Side, channel: &str, state: xr::Result<xr::ActionState<bool>>) -> bool {
    match state {
        Ok(state) => {
            debug!(
                "{} {channel}: active={}, value={}",
                side.as_str(),
                state.is_active,
                state.current_state
            );

            state.is_active && state.current_state
        }
        Err(e) => {
            debug!("{} {channel} query failed: {e}", side.as_str());

            false
        }
    }
}

fn vector_channel(
    side: Side,
    channel: &str,
    state: xr::Result<xr::ActionState<xr::Vector2f>>,
) -> xr::Vector2f {
    match state {
        Ok(state) => {
            debug!(
                "{} {channel}: active={}, x={}, y={}",
                side.as_str(),
                state.is_active,
                state.current_state.x,
                state.current_state.y
            );

            if state.is_active {
                state.current_state
            } else {
                xr::Vector2f { x: 0.0, y: 0.0 }
            }
        }
        Err(e) => {
            debug!("{} {channel} query failed: {e}", side.as_str());

            xr::Vector2f { x: 0.0, y: 0.0 }
        }
    }
}
