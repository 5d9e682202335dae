use crate::config::DriverConfig;
use snakehost_core::engine::keycode;
use std::collections::HashMap;
use tracing::warn;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps physical keys to the legacy numeric codes the engine consumes.
///
/// Every mapped press is forwarded; a key with no entry has no meaning
/// to the engine and is dropped. Config `[bindings]` entries override
/// or extend the built-in table by key name.
#[derive(Debug)]
pub struct Keymap {
    map: HashMap<KeyCode, u8>,
}

impl Keymap {
    pub fn from_config(config: &DriverConfig) -> Self {
        let mut map: HashMap<KeyCode, u8> = named_keys()
            .iter()
            .map(|&(_, key, code)| (key, code))
            .collect();

        for (name, &code) in &config.bindings {
            match parse_key_name(name) {
                Some(key) => {
                    map.insert(key, code);
                }
                None => warn!("Unknown key name '{}' in bindings", name),
            }
        }

        Self { map }
    }

    pub fn code_for(&self, key: &PhysicalKey) -> Option<u8> {
        match key {
            PhysicalKey::Code(code) => self.map.get(code).copied(),
            PhysicalKey::Unidentified(_) => None,
        }
    }
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    named_keys()
        .iter()
        .find(|(key_name, _, _)| *key_name == name)
        .map(|&(_, key, _)| key)
}

/// Name, physical key, and default legacy code for every key the
/// driver captures. Codes follow the keyboard-event convention the
/// engine was written against (arrows 37-40, space 32, letters 65-90).
fn named_keys() -> &'static [(&'static str, KeyCode, u8)] {
    &[
        ("ArrowLeft", KeyCode::ArrowLeft, keycode::ARROW_LEFT),
        ("ArrowUp", KeyCode::ArrowUp, keycode::ARROW_UP),
        ("ArrowRight", KeyCode::ArrowRight, keycode::ARROW_RIGHT),
        ("ArrowDown", KeyCode::ArrowDown, keycode::ARROW_DOWN),
        ("Space", KeyCode::Space, keycode::SPACE),
        ("Enter", KeyCode::Enter, 13),
        ("Escape", KeyCode::Escape, 27),
        ("Tab", KeyCode::Tab, 9),
        ("Backspace", KeyCode::Backspace, 8),
        ("ShiftLeft", KeyCode::ShiftLeft, 16),
        ("ControlLeft", KeyCode::ControlLeft, 17),
        ("Digit0", KeyCode::Digit0, 48),
        ("Digit1", KeyCode::Digit1, 49),
        ("Digit2", KeyCode::Digit2, 50),
        ("Digit3", KeyCode::Digit3, 51),
        ("Digit4", KeyCode::Digit4, 52),
        ("Digit5", KeyCode::Digit5, 53),
        ("Digit6", KeyCode::Digit6, 54),
        ("Digit7", KeyCode::Digit7, 55),
        ("Digit8", KeyCode::Digit8, 56),
        ("Digit9", KeyCode::Digit9, 57),
        ("KeyA", KeyCode::KeyA, 65),
        ("KeyB", KeyCode::KeyB, 66),
        ("KeyC", KeyCode::KeyC, 67),
        ("KeyD", KeyCode::KeyD, 68),
        ("KeyE", KeyCode::KeyE, 69),
        ("KeyF", KeyCode::KeyF, 70),
        ("KeyG", KeyCode::KeyG, 71),
        ("KeyH", KeyCode::KeyH, 72),
        ("KeyI", KeyCode::KeyI, 73),
        ("KeyJ", KeyCode::KeyJ, 74),
        ("KeyK", KeyCode::KeyK, 75),
        ("KeyL", KeyCode::KeyL, 76),
        ("KeyM", KeyCode::KeyM, keycode::KEY_M),
        ("KeyN", KeyCode::KeyN, 78),
        ("KeyO", KeyCode::KeyO, 79),
        ("KeyP", KeyCode::KeyP, 80),
        ("KeyQ", KeyCode::KeyQ, 81),
        ("KeyR", KeyCode::KeyR, keycode::KEY_R),
        ("KeyS", KeyCode::KeyS, 83),
        ("KeyT", KeyCode::KeyT, 84),
        ("KeyU", KeyCode::KeyU, 85),
        ("KeyV", KeyCode::KeyV, 86),
        ("KeyW", KeyCode::KeyW, keycode::KEY_W),
        ("KeyX", KeyCode::KeyX, 88),
        ("KeyY", KeyCode::KeyY, 89),
        ("KeyZ", KeyCode::KeyZ, 90),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_legacy_codes() {
        let keymap = Keymap::from_config(&DriverConfig::default());
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::ArrowLeft)),
            Some(37)
        );
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::ArrowUp)),
            Some(38)
        );
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::ArrowRight)),
            Some(39)
        );
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::ArrowDown)),
            Some(40)
        );
    }

    #[test]
    fn config_override_wins_over_builtin() {
        let mut config = DriverConfig::default();
        config.bindings.insert("KeyR".to_string(), 114);
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::KeyR)),
            Some(114)
        );
    }

    #[test]
    fn unknown_binding_name_is_ignored() {
        let mut config = DriverConfig::default();
        config.bindings.insert("KeyNope".to_string(), 1);
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.code_for(&PhysicalKey::Code(KeyCode::Space)),
            Some(32)
        );
    }
}
