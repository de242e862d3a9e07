use crate::{from_xr_pose, from_xr_vec3, interaction::InteractionContext, to_xr_time};
use openxr as xr;
use std::time::Duration;
use xrjoy_common::{
    Pose,
    anyhow::{Context, Result},
    debug,
    glam::Vec3,
    info,
};
use xrjoy_packets::PoseMotion;

pub struct HandSpaces {
    pub aim: xr::Space,
    pub grip: xr::Space,
}

/// View reference space plus the per-hand action spaces, indexed left then
/// right. Created through [`InteractionContext::setup_spaces`], so the pose
/// actions always exist before their spaces.
pub struct TrackingSpaces {
    pub reference: xr::Space,
    pub hands: [HandSpaces; 2],
}

impl TrackingSpaces {
    pub(crate) fn new(ctx: &InteractionContext) -> Result<Self> {
        let reference = ctx
            .xr_session
            .create_reference_space(xr::ReferenceSpaceType::VIEW, xr::Posef::IDENTITY)
            .context("Failed to create view reference space")?;

        let [left_path, right_path] = ctx.hand_subaction_paths;
        let hands = [
            HandSpaces {
                aim: ctx.actions.aim_pose.create_space(
                    ctx.xr_session.clone(),
                    left_path,
                    xr::Posef::IDENTITY,
                )?,
                grip: ctx.actions.grip_pose.create_space(
                    ctx.xr_session.clone(),
                    left_path,
                    xr::Posef::IDENTITY,
                )?,
            },
            HandSpaces {
                aim: ctx.actions.aim_pose.create_space(
                    ctx.xr_session.clone(),
                    right_path,
                    xr::Posef::IDENTITY,
                )?,
                grip: ctx.actions.grip_pose.create_space(
                    ctx.xr_session.clone(),
                    right_path,
                    xr::Posef::IDENTITY,
                )?,
            },
        ];

        Ok(Self { reference, hands })
    }

    /// Pose of `space` relative to the reference space, or `None` when the
    /// runtime cannot locate it with a valid position.
    pub fn locate_pose(&self, space: &xr::Space, time: Duration) -> Option<Pose> {
        let (location, _) = space.relate(&self.reference, to_xr_time(time)).ok()?;

        pose_from_location(&location)
    }

    /// Like [`Self::locate_pose`] but keeps the velocities the runtime
    /// reported alongside the pose.
    pub fn locate_motion(&self, space: &xr::Space, time: Duration) -> Option<PoseMotion> {
        let (location, velocity) = space.relate(&self.reference, to_xr_time(time)).ok()?;
        let pose = pose_from_location(&location)?;
        let (linear_velocity, angular_velocity) = velocity_vectors(&velocity);

        Some(PoseMotion {
            pose,
            linear_velocity,
            angular_velocity,
        })
    }

    /// Logs the current pose of `space`, with linear velocity when the
    /// runtime reports a valid one.
    pub fn log_pose(&self, name: &str, space: &xr::Space, time: Duration) {
        match space.relate(&self.reference, to_xr_time(time)) {
            Ok((location, velocity)) => {
                let Some(pose) = pose_from_location(&location) else {
                    return;
                };

                let p = pose.position;
                let q = pose.orientation;
                let mut line = format!(
                    "{name} pos: ({:.3}, {:.3}, {:.3}) rot: ({:.3}, {:.3}, {:.3}, {:.3})",
                    p.x, p.y, p.z, q.x, q.y, q.z, q.w
                );

                if velocity
                    .velocity_flags
                    .contains(xr::SpaceVelocityFlags::LINEAR_VALID)
                {
                    let v = from_xr_vec3(velocity.linear_velocity);
                    line.push_str(&format!(" lin vel: ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z));
                }

                info!("{line}");
            }
            Err(e) => debug!("{name} locate failed: {e}"),
        }
    }
}

fn pose_from_location(location: &xr::SpaceLocation) -> Option<Pose> {
    location
        .location_flags
        .contains(xr::SpaceLocationFlags::POSITION_VALID)
        .then(|| from_xr_pose(location.pose))
}

fn velocity_vectors(velocity: &xr::SpaceVelocity) -> (Vec3, Vec3) {
    let linear = if velocity
        .velocity_flags
        .contains(xr::SpaceVelocityFlags::LINEAR_VALID)
    {
        from_xr_vec3(velocity.linear_velocity)
    } else {
        Vec3::ZERO
    };

    let angular = if velocity
        .velocity_flags
        .contains(xr::SpaceVelocityFlags::ANGULAR_VALID)
    {
        from_xr_vec3(velocity.angular_velocity)
    } else {
        Vec3::ZERO
    };

    (linear, angular)
}
