//! Keyboard bindings and per-frame action sampling

use bevy::prelude::*;

/// Named boolean actions the character understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Run,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Run,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::Left => "left",
            Action::Right => "right",
            Action::Run => "run",
        }
    }
}

/// Snapshot of every action for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionSample {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

impl ActionSample {
    pub fn set(&mut self, action: Action, active: bool) {
        match action {
            Action::Forward => self.forward = active,
            Action::Backward => self.backward = active,
            Action::Left => self.left = active,
            Action::Right => self.right = active,
            Action::Run => self.run = active,
        }
    }
}

/// Maps raw key codes to actions.
///
/// Several keys may drive the same action; the action is active while any of them is held.
#[derive(Resource, Clone, Debug)]
pub struct KeyboardMap {
    bindings: Vec<(Action, Vec<KeyCode>)>,
}

impl Default for KeyboardMap {
    fn default() -> Self {
        Self::new([
            (Action::Forward, vec![KeyCode::ArrowUp, KeyCode::KeyW]),
            (Action::Backward, vec![KeyCode::ArrowDown, KeyCode::KeyS]),
            (Action::Left, vec![KeyCode::ArrowLeft, KeyCode::KeyA]),
            (Action::Right, vec![KeyCode::ArrowRight, KeyCode::KeyD]),
            (Action::Run, vec![KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        ])
    }
}

impl KeyboardMap {
    /// Build a map from `(action, keys)` pairs. Actions left out read as released.
    pub fn new(bindings: impl IntoIterator<Item = (Action, Vec<KeyCode>)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn keys(&self, action: Action) -> &[KeyCode] {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Which action (if any) a key drives
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
    }

    /// Read the current state of every action. Unbound actions read as `false`.
    pub fn sample(&self, keyboard: &ButtonInput<KeyCode>) -> ActionSample {
        let mut sample = ActionSample::default();
        for action in Action::ALL {
            let keys = self.keys(action);
            sample.set(action, !keys.is_empty() && keyboard.any_pressed(keys.iter().copied()));
        }
        sample
    }
}

/// Discrete planar direction requested this tick (not normalized)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementIntent {
    pub x: i8,
    pub z: i8,
}

impl MovementIntent {
    /// Later checks overwrite earlier ones: backward beats forward, left beats right.
    pub fn from_actions(actions: &ActionSample) -> Self {
        let mut intent = Self::default();
        if actions.forward {
            intent.z = 1;
        }
        if actions.backward {
            intent.z = -1;
        }
        if actions.right {
            intent.x = -1;
        }
        if actions.left {
            intent.x = 1;
        }
        intent
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.z == 0
    }

    /// Facing angle around +Y, `atan2(x, z)`
    pub fn heading(&self) -> f32 {
        (self.x as f32).atan2(self.z as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard_with(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        for key in keys {
            keyboard.press(*key);
        }
        keyboard
    }

    #[test]
    fn test_default_bindings_sample_either_key() {
        let map = KeyboardMap::default();

        let sample = map.sample(&keyboard_with(&[KeyCode::KeyW, KeyCode::ShiftRight]));
        assert!(sample.forward);
        assert!(sample.run);
        assert!(!sample.backward && !sample.left && !sample.right);

        let sample = map.sample(&keyboard_with(&[KeyCode::ArrowLeft]));
        assert!(sample.left);
        assert!(!sample.forward);
    }

    #[test]
    fn test_unbound_actions_read_false() {
        let map = KeyboardMap::new(Vec::<(Action, Vec<KeyCode>)>::new());
        let sample = map.sample(&keyboard_with(&[KeyCode::KeyW, KeyCode::ShiftLeft]));
        assert_eq!(sample, ActionSample::default());

        // an action bound to no keys also reads false
        let map = KeyboardMap::new([(Action::Forward, Vec::<KeyCode>::new())]);
        assert!(!map.sample(&keyboard_with(&[KeyCode::KeyW])).forward);
    }

    #[test]
    fn test_custom_bindings() {
        let map = KeyboardMap::new([(Action::Run, vec![KeyCode::Space])]);

        assert_eq!(map.action_for(KeyCode::Space), Some(Action::Run));
        assert_eq!(map.action_for(KeyCode::ShiftLeft), None);
        assert!(map.keys(Action::Forward).is_empty());
        assert!(map.sample(&keyboard_with(&[KeyCode::Space])).run);
    }

    #[test]
    fn test_intent_left_and_right() {
        let left = ActionSample { left: true, ..default() };
        assert_eq!(MovementIntent::from_actions(&left).x, 1);

        let right = ActionSample { right: true, ..default() };
        assert_eq!(MovementIntent::from_actions(&right).x, -1);

        // left is checked last
        let both = ActionSample { left: true, right: true, ..default() };
        assert_eq!(MovementIntent::from_actions(&both).x, 1);
    }

    #[test]
    fn test_intent_backward_overrides_forward() {
        let forward = ActionSample { forward: true, ..default() };
        assert_eq!(MovementIntent::from_actions(&forward).z, 1);

        let both = ActionSample { forward: true, backward: true, ..default() };
        assert_eq!(MovementIntent::from_actions(&both).z, -1);
    }

    #[test]
    fn test_heading() {
        let strafe = MovementIntent { x: 1, z: 0 };
        assert!((strafe.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

        let ahead = MovementIntent { x: 0, z: 1 };
        assert_eq!(ahead.heading(), 0.0);
        assert!(MovementIntent::default().is_zero());
    }
}
