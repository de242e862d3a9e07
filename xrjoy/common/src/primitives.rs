use std::ops::Mul;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug)]
pub struct Pose {
    pub orientation: Quat, // NB: default Quat is identity
    pub position: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    };

    pub fn inverse(&self) -> Pose {
        Pose {
            orientation: self.orientation.conjugate(),
            position: -self.position,
        }
    }
}

impl Mul<Pose> for Pose {
    type Output = Pose;

    fn mul(self, rhs: Pose) -> Pose {
        Pose {
            orientation: self.orientation * rhs.orientation,
            position: self.position + self.orientation * rhs.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn default_pose_is_identity() {
        let pose = Pose::default();

        assert_eq!(pose.orientation, Pose::IDENTITY.orientation);
        assert_eq!(pose.position, Pose::IDENTITY.position);
    }

    #[test]
    fn inverse_negates_components() {
        let pose = Pose {
            orientation: Quat::from_rotation_y(0.5),
            position: Vec3::new(1.0, 2.0, 3.0),
        };

        let inverse = pose.inverse();

        assert_eq!(inverse.orientation, pose.orientation.conjugate());
        assert_eq!(inverse.position, -pose.position);
    }

    #[test]
    fn multiply_rotates_the_offset() {
        let transform = Pose {
            orientation: Quat::from_rotation_y(FRAC_PI_2),
            position: Vec3::new(1.0, 0.0, 0.0),
        };
        let local = Pose {
            orientation: Quat::IDENTITY,
            position: Vec3::new(0.0, 0.0, -1.0),
        };

        let combined = transform * local;

        // A quarter turn around Y maps -Z onto -X, which cancels the offset
        assert!(combined.position.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(
            combined
                .orientation
                .abs_diff_eq(Quat::from_rotation_y(FRAC_PI_2), 1e-6)
        );
    }
}
