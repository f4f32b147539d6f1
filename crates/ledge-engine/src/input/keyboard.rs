use std::collections::HashSet;

use crate::input::queue::{InputEvent, InputQueue};

/// Held-key state reconstructed from the event stream.
///
/// The host delivers discrete key transitions. Games that want "is this key
/// held right now" polling feed the frame's events through this tracker and
/// query it during update. Applying the same queue twice is harmless, which
/// matters because updates run per fixed step while the queue clears per
/// frame.
#[derive(Debug, Default)]
pub struct KeyboardState {
    down: HashSet<u32>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a frame's key transitions into the held state.
    /// Non-key events are ignored.
    pub fn apply(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    self.down.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.down.remove(&key_code);
                }
                InputEvent::Custom { .. } => {}
            }
        }
    }

    pub fn is_down(&self, key_code: u32) -> bool {
        self.down.contains(&key_code)
    }

    /// Release everything, e.g. when the host loses focus.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_LEFT: u32 = 37;
    const KEY_RIGHT: u32 = 39;

    #[test]
    fn key_down_until_released() {
        let mut keys = KeyboardState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_LEFT });
        keys.apply(&q);
        assert!(keys.is_down(KEY_LEFT));
        assert!(!keys.is_down(KEY_RIGHT));

        q.clear();
        q.push(InputEvent::KeyUp { key_code: KEY_LEFT });
        keys.apply(&q);
        assert!(!keys.is_down(KEY_LEFT));
    }

    #[test]
    fn applying_the_same_frame_twice_is_idempotent() {
        let mut keys = KeyboardState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_RIGHT });
        keys.apply(&q);
        keys.apply(&q);
        assert!(keys.is_down(KEY_RIGHT));

        q.clear();
        q.push(InputEvent::KeyUp { key_code: KEY_RIGHT });
        keys.apply(&q);
        keys.apply(&q);
        assert!(!keys.is_down(KEY_RIGHT));
    }

    #[test]
    fn down_and_up_in_one_frame_ends_released() {
        let mut keys = KeyboardState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: KEY_LEFT });
        q.push(InputEvent::KeyUp { key_code: KEY_LEFT });
        keys.apply(&q);
        assert!(!keys.is_down(KEY_LEFT));
    }

    #[test]
    fn custom_events_do_not_touch_keys() {
        let mut keys = KeyboardState::new();
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom {
            kind: 1,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        keys.apply(&q);
        assert!(!keys.is_down(KEY_LEFT));
    }
}
