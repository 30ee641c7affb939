use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Returns `true` when the event should close the window: Escape, pressed.
///
/// Uses the physical key so the binding does not depend on keyboard layout.
/// Key repeats count as presses.
pub fn is_exit_key(key: PhysicalKey, state: ElementState) -> bool {
    state == ElementState::Pressed && key == PhysicalKey::Code(KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_exits() {
        assert!(is_exit_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed));
    }

    #[test]
    fn escape_release_is_ignored() {
        assert!(!is_exit_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Released));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(!is_exit_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed));
        assert!(!is_exit_key(PhysicalKey::Code(KeyCode::Enter), ElementState::Pressed));
    }
}
