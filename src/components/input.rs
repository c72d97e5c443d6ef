use serde::{Deserialize, Serialize};

/// Logical control channels supplied by the embedding input collaborator.
///
/// Six directional rate controls, two throttle controls, and the reset
/// command. Each is a boolean "currently held" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    PitchForward,
    PitchBack,
    RollLeft,
    RollRight,
    YawLeft,
    YawRight,
    ThrottleUp,
    ThrottleDown,
    Reset,
}

impl Control {
    pub const ALL: [Control; 9] = [
        Control::PitchForward,
        Control::PitchBack,
        Control::RollLeft,
        Control::RollRight,
        Control::YawLeft,
        Control::YawRight,
        Control::ThrottleUp,
        Control::ThrottleDown,
        Control::Reset,
    ];

    fn index(self) -> usize {
        match self {
            Control::PitchForward => 0,
            Control::PitchBack => 1,
            Control::RollLeft => 2,
            Control::RollRight => 3,
            Control::YawLeft => 4,
            Control::YawRight => 5,
            Control::ThrottleUp => 6,
            Control::ThrottleDown => 7,
            Control::Reset => 8,
        }
    }
}

/// Held state of every control channel.
///
/// The embedding collaborator mutates this between ticks from its key
/// events; the core reads it through [`InputState::snapshot`] so one tick
/// always computes from a single consistent sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; 9],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.held[control.index()] = true;
    }

    pub fn release(&mut self, control: Control) {
        self.held[control.index()] = false;
    }

    pub fn set(&mut self, control: Control, held: bool) {
        self.held[control.index()] = held;
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Release every channel.
    pub fn clear(&mut self) {
        self.held = [false; 9];
    }

    /// A consistent copy for the duration of one tick's computation.
    pub fn snapshot(&self) -> InputState {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_roundtrip() {
        let mut input = InputState::new();
        assert!(!input.is_held(Control::ThrottleUp));

        input.press(Control::ThrottleUp);
        input.press(Control::YawLeft);
        assert!(input.is_held(Control::ThrottleUp));
        assert!(input.is_held(Control::YawLeft));

        input.release(Control::ThrottleUp);
        assert!(!input.is_held(Control::ThrottleUp));
        assert!(input.is_held(Control::YawLeft));

        input.clear();
        for control in Control::ALL {
            assert!(!input.is_held(control));
        }
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut input = InputState::new();
        input.press(Control::PitchForward);

        let snapshot = input.snapshot();
        input.release(Control::PitchForward);
        input.press(Control::Reset);

        assert!(snapshot.is_held(Control::PitchForward));
        assert!(!snapshot.is_held(Control::Reset));
    }
}
