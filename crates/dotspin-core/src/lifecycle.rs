//! Attachment/visibility state machine driving the animation

use std::fmt;

use crate::view::Visibility;

/// Where the indicator is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    #[default]
    Detached,
    AttachedVisible,
    AttachedHidden,
}

/// Host event fed to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Attached to the display tree while having the given visibility
    Attached(Visibility),
    Detached,
    VisibilityChanged(Visibility),
}

/// What the animation must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCommand {
    Start,
    Stop,
}

impl LifecycleState {
    /// Apply an event, returning the next state and the animation command
    pub fn transition(self, event: LifecycleEvent) -> (Self, Option<AnimationCommand>) {
        use AnimationCommand::{Start, Stop};
        use LifecycleEvent::{Attached, Detached, VisibilityChanged};
        use LifecycleState::{AttachedHidden, AttachedVisible};

        match (self, event) {
            (Self::Detached, Attached(v)) if v.is_visible() => (AttachedVisible, Some(Start)),
            (Self::Detached, Attached(_)) => (AttachedHidden, None),
            (Self::Detached, Detached | VisibilityChanged(_)) => (Self::Detached, None),

            (AttachedVisible, Detached) => (Self::Detached, Some(Stop)),
            (AttachedVisible, VisibilityChanged(v)) if !v.is_visible() => {
                (AttachedHidden, Some(Stop))
            }

            (AttachedHidden, Detached) => (Self::Detached, None),
            (AttachedHidden, VisibilityChanged(v)) if v.is_visible() => {
                (AttachedVisible, Some(Start))
            }

            // Repeated attach or a visibility change within the same class
            (state, _) => (state, None),
        }
    }

    pub fn is_attached(self) -> bool {
        self != Self::Detached
    }

    /// The only state in which the animation runs
    pub fn is_animating(self) -> bool {
        self == Self::AttachedVisible
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => write!(f, "detached"),
            Self::AttachedVisible => write!(f, "attached, visible"),
            Self::AttachedHidden => write!(f, "attached, hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnimationCommand::*;
    use LifecycleEvent::*;
    use LifecycleState::*;

    #[test]
    fn test_documented_transitions() {
        assert_eq!(
            LifecycleState::Detached.transition(Attached(Visibility::Visible)),
            (AttachedVisible, Some(Start))
        );
        assert_eq!(
            AttachedVisible.transition(LifecycleEvent::Detached),
            (LifecycleState::Detached, Some(Stop))
        );
        assert_eq!(
            AttachedVisible.transition(VisibilityChanged(Visibility::Invisible)),
            (AttachedHidden, Some(Stop))
        );
        assert_eq!(
            AttachedHidden.transition(VisibilityChanged(Visibility::Visible)),
            (AttachedVisible, Some(Start))
        );
    }

    #[test]
    fn test_attach_while_hidden_does_not_start() {
        assert_eq!(
            LifecycleState::Detached.transition(Attached(Visibility::Gone)),
            (AttachedHidden, None)
        );
        assert_eq!(
            AttachedHidden.transition(LifecycleEvent::Detached),
            (LifecycleState::Detached, None)
        );
    }

    #[test]
    fn test_same_class_visibility_changes_are_noops() {
        assert_eq!(
            AttachedVisible.transition(VisibilityChanged(Visibility::Visible)),
            (AttachedVisible, None)
        );
        assert_eq!(
            AttachedHidden.transition(VisibilityChanged(Visibility::Gone)),
            (AttachedHidden, None)
        );
        assert_eq!(
            LifecycleState::Detached.transition(VisibilityChanged(Visibility::Visible)),
            (LifecycleState::Detached, None)
        );
    }

    #[test]
    fn test_attach_visible_hide_show_detach_sequence() {
        let events = [
            Attached(Visibility::Visible),
            VisibilityChanged(Visibility::Visible),
            VisibilityChanged(Visibility::Invisible),
            VisibilityChanged(Visibility::Visible),
            LifecycleEvent::Detached,
        ];

        let mut state = LifecycleState::default();
        let mut commands = Vec::new();
        for event in events {
            let (next, command) = state.transition(event);
            state = next;
            commands.extend(command);
        }

        assert_eq!(commands, vec![Start, Stop, Start, Stop]);
        assert_eq!(state, LifecycleState::Detached);
        assert!(!state.is_animating());
    }
}
