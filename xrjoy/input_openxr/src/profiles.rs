use crate::interaction::ControllerActions;
use openxr as xr;
use xrjoy_common::{anyhow::Result, info, warn};

/// Logical controller channels that binding table rows can target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionId {
    AimPose,
    GripPose,
    Trigger,
    Squeeze,
    Thumbstick,
    ThumbstickClick,
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    Menu,
}

pub struct ProfileInfo {
    pub path: &'static str,
    /// The runtime must accept this profile's bindings for setup to succeed.
    pub required: bool,
    pub bindings: &'static [(ActionId, &'static str)],
}

pub const OCULUS_TOUCH_PROFILE_PATH: &str = "/interaction_profiles/oculus/touch_controller";
pub const META_TOUCH_PLUS_PROFILE_PATH: &str = "/interaction_profiles/meta/touch_controller_plus";
pub const FB_TOUCH_PRO_PROFILE_PATH: &str = "/interaction_profiles/facebook/touch_controller_pro";
pub const KHR_SIMPLE_PROFILE_PATH: &str = "/interaction_profiles/khr/simple_controller";

const TOUCH_BINDINGS: &[(ActionId, &str)] = &[
    (ActionId::AimPose, "/user/hand/left/input/aim/pose"),
    (ActionId::AimPose, "/user/hand/right/input/aim/pose"),
    (ActionId::GripPose, "/user/hand/left/input/grip/pose"),
    (ActionId::GripPose, "/user/hand/right/input/grip/pose"),
    (ActionId::Trigger, "/user/hand/left/input/trigger/value"),
    (ActionId::Trigger, "/user/hand/right/input/trigger/value"),
    (ActionId::Squeeze, "/user/hand/left/input/squeeze/value"),
    (ActionId::Squeeze, "/user/hand/right/input/squeeze/value"),
    (ActionId::Thumbstick, "/user/hand/left/input/thumbstick"),
    (ActionId::Thumbstick, "/user/hand/right/input/thumbstick"),
    (ActionId::ThumbstickClick, "/user/hand/left/input/thumbstick/click"),
    (ActionId::ThumbstickClick, "/user/hand/right/input/thumbstick/click"),
    (ActionId::ButtonA, "/user/hand/right/input/a/click"),
    (ActionId::ButtonB, "/user/hand/right/input/b/click"),
    (ActionId::ButtonX, "/user/hand/left/input/x/click"),
    (ActionId::ButtonY, "/user/hand/left/input/y/click"),
    (ActionId::Menu, "/user/hand/left/input/menu/click"),
];

// The simple controller has no analog inputs; select/click is carried on the
// thumbstick click channel.
const SIMPLE_BINDINGS: &[(ActionId, &str)] = &[
    (ActionId::AimPose, "/user/hand/left/input/aim/pose"),
    (ActionId::AimPose, "/user/hand/right/input/aim/pose"),
    (ActionId::GripPose, "/user/hand/left/input/grip/pose"),
    (ActionId::GripPose, "/user/hand/right/input/grip/pose"),
    (ActionId::ThumbstickClick, "/user/hand/left/input/select/click"),
    (ActionId::ThumbstickClick, "/user/hand/right/input/select/click"),
];

/// Profiles are suggested in this order. The Touch profile is the baseline;
/// the later entries widen runtime compatibility and may be rejected.
pub const CONTROLLER_PROFILES: &[ProfileInfo] = &[
    ProfileInfo {
        path: OCULUS_TOUCH_PROFILE_PATH,
        required: true,
        bindings: TOUCH_BINDINGS,
    },
    ProfileInfo {
        path: META_TOUCH_PLUS_PROFILE_PATH,
        required: false,
        bindings: TOUCH_BINDINGS,
    },
    ProfileInfo {
        path: FB_TOUCH_PRO_PROFILE_PATH,
        required: false,
        bindings: TOUCH_BINDINGS,
    },
    ProfileInfo {
        path: KHR_SIMPLE_PROFILE_PATH,
        required: false,
        bindings: SIMPLE_BINDINGS,
    },
];

pub(crate) fn suggest_controller_bindings(
    instance: &xr::Instance,
    actions: &ControllerActions,
) -> Result<()> {
    for profile in CONTROLLER_PROFILES {
        match suggest_profile(instance, actions, profile) {
            Ok(()) => info!("Suggested bindings for {}", profile.path),
            Err(e) if profile.required => {
                return Err(e.context(format!("Failed to suggest bindings for {}", profile.path)));
            }
            Err(e) => warn!("Interaction profile {} not available: {e}", profile.path),
        }
    }

    Ok(())
}

fn suggest_profile(
    instance: &xr::Instance,
    actions: &ControllerActions,
    profile: &ProfileInfo,
) -> Result<()> {
    let mut bindings = Vec::with_capacity(profile.bindings.len());
    for &(target, path) in profile.bindings {
        let path = instance.string_to_path(path)?;
        bindings.push(match target {
            ActionId::AimPose => xr::Binding::new(&actions.aim_pose, path),
            ActionId::GripPose => xr::Binding::new(&actions.grip_pose, path),
            ActionId::Trigger => xr::Binding::new(&actions.trigger, path),
            ActionId::Squeeze => xr::Binding::new(&actions.squeeze, path),
            ActionId::Thumbstick => xr::Binding::new(&actions.thumbstick, path),
            ActionId::ThumbstickClick => xr::Binding::new(&actions.thumbstick_click, path),
            ActionId::ButtonA => xr::Binding::new(&actions.button_a, path),
            ActionId::ButtonB => xr::Binding::new(&actions.button_b, path),
            ActionId::ButtonX => xr::Binding::new(&actions.button_x, path),
            ActionId::ButtonY => xr::Binding::new(&actions.button_y, path),
            ActionId::Menu => xr::Binding::new(&actions.menu, path),
        });
    }

    let profile_path = instance.string_to_path(profile.path)?;
    instance.suggest_interaction_profile_bindings(profile_path, &bindings)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(bindings: &[(ActionId, &'static str)], target: ActionId) -> Vec<&'static str> {
        bindings
            .iter()
            .filter(|(t, _)| *t == target)
            .map(|(_, path)| *path)
            .collect()
    }

    #[test]
    fn profiles_are_tried_in_priority_order() {
        let paths = CONTROLLER_PROFILES
            .iter()
            .map(|p| p.path)
            .collect::<Vec<_>>();

        assert_eq!(
            paths,
            [
                OCULUS_TOUCH_PROFILE_PATH,
                META_TOUCH_PLUS_PROFILE_PATH,
                FB_TOUCH_PRO_PROFILE_PATH,
                KHR_SIMPLE_PROFILE_PATH,
            ]
        );
    }

    #[test]
    fn only_the_baseline_profile_is_required() {
        assert!(CONTROLLER_PROFILES[0].required);
        assert!(CONTROLLER_PROFILES[1..].iter().all(|p| !p.required));
    }

    #[test]
    fn touch_profiles_bind_every_channel() {
        for profile in &CONTROLLER_PROFILES[..3] {
            assert_eq!(profile.bindings.len(), 17, "{}", profile.path);

            for target in [
                ActionId::AimPose,
                ActionId::GripPose,
                ActionId::Trigger,
                ActionId::Squeeze,
                ActionId::Thumbstick,
                ActionId::ThumbstickClick,
            ] {
                let rows = rows_for(profile.bindings, target);
                assert!(rows.iter().any(|p| p.starts_with("/user/hand/left/")));
                assert!(rows.iter().any(|p| p.starts_with("/user/hand/right/")));
            }

            for target in [
                ActionId::ButtonA,
                ActionId::ButtonB,
                ActionId::ButtonX,
                ActionId::ButtonY,
                ActionId::Menu,
            ] {
                assert_eq!(rows_for(profile.bindings, target).len(), 1);
            }
        }
    }

    #[test]
    fn face_buttons_stay_on_their_controller() {
        for profile in CONTROLLER_PROFILES {
            for &(target, path) in profile.bindings {
                match target {
                    ActionId::ButtonA | ActionId::ButtonB => {
                        assert!(path.starts_with("/user/hand/right/"), "{path}");
                    }
                    ActionId::ButtonX | ActionId::ButtonY | ActionId::Menu => {
                        assert!(path.starts_with("/user/hand/left/"), "{path}");
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn simple_profile_has_no_analog_bindings() {
        let simple = &CONTROLLER_PROFILES[3];

        assert!(rows_for(simple.bindings, ActionId::Trigger).is_empty());
        assert!(rows_for(simple.bindings, ActionId::Squeeze).is_empty());
        assert!(rows_for(simple.bindings, ActionId::Thumbstick).is_empty());

        assert_eq!(
            rows_for(simple.bindings, ActionId::ThumbstickClick),
            [
                "/user/hand/left/input/select/click",
                "/user/hand/right/input/select/click",
            ]
        );
    }
}
