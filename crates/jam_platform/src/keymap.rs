//! Physical key codes from winit to game keys. Layout-independent, so WASD
//! stays in place on AZERTY and friends (Q/Z are mapped for the same reason).

use jam_core::input::Key;
use winit::keyboard::KeyCode;

pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Key::Enter),
        KeyCode::F3 => Some(Key::F3),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::KeyZ => Some(Key::Z),
        KeyCode::KeyP => Some(Key::P),
        KeyCode::KeyT => Some(Key::T),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jam_core::input::Direction;

    #[test]
    fn movement_keys_map_to_directions() {
        let cases = [
            (KeyCode::ArrowLeft, Direction::Left),
            (KeyCode::KeyA, Direction::Left),
            (KeyCode::KeyQ, Direction::Left),
            (KeyCode::KeyW, Direction::Up),
            (KeyCode::KeyZ, Direction::Up),
            (KeyCode::KeyS, Direction::Down),
            (KeyCode::KeyD, Direction::Right),
        ];
        for (code, direction) in cases {
            let key = map_key(code).expect("mapped key");
            assert_eq!(key.direction(), Some(direction), "{code:?}");
        }
    }

    #[test]
    fn both_enter_keys_map_to_enter() {
        assert_eq!(map_key(KeyCode::Enter), Some(Key::Enter));
        assert_eq!(map_key(KeyCode::NumpadEnter), Some(Key::Enter));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::KeyM), None);
        assert_eq!(map_key(KeyCode::F12), None);
    }
}
