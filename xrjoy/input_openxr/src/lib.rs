mod interaction;
mod profiles;
mod spaces;

pub use interaction::{ControllerActions, InteractionContext};
pub use profiles::{ActionId, CONTROLLER_PROFILES, ProfileInfo};
pub use spaces::{HandSpaces, TrackingSpaces};

use openxr as xr;
use std::time::Duration;
use xrjoy_common::{
    Pose,
    glam::{Quat, Vec3},
};

pub fn from_xr_vec3(v: xr::Vector3f) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn from_xr_quat(q: xr::Quaternionf) -> Quat {
    Quat::from_xyzw(q.x, q.y, q.z, q.w)
}

pub fn from_xr_pose(pose: xr::Posef) -> Pose {
    Pose {
        orientation: from_xr_quat(pose.orientation),
        position: from_xr_vec3(pose.position),
    }
}

fn to_xr_time(timestamp: Duration) -> xr::Time {
    xr::Time::from_nanos(timestamp.as_nanos() as _)
}
