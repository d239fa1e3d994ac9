use global_hotkey::hotkey::{Code, Modifiers};

use crate::hotkey::HotkeyError;

fn invalid(combo: &str, reason: impl Into<String>) -> HotkeyError {
    HotkeyError::InvalidCombo {
        combo: combo.to_string(),
        reason: reason.into(),
    }
}

fn modifier(name: &str) -> Option<Modifiers> {
    match name {
        "ctrl" | "control" => Some(Modifiers::CONTROL),
        "alt" | "option" => Some(Modifiers::ALT),
        "shift" => Some(Modifiers::SHIFT),
        "cmd" | "super" | "meta" | "win" => Some(Modifiers::SUPER),
        _ => None,
    }
}

fn letter(c: char) -> Option<Code> {
    let code = match c {
        'a' => Code::KeyA,
        'b' => Code::KeyB,
        'c' => Code::KeyC,
        'd' => Code::KeyD,
        'e' => Code::KeyE,
        'f' => Code::KeyF,
        'g' => Code::KeyG,
        'h' => Code::KeyH,
        'i' => Code::KeyI,
        'j' => Code::KeyJ,
        'k' => Code::KeyK,
        'l' => Code::KeyL,
        'm' => Code::KeyM,
        'n' => Code::KeyN,
        'o' => Code::KeyO,
        'p' => Code::KeyP,
        'q' => Code::KeyQ,
        'r' => Code::KeyR,
        's' => Code::KeyS,
        't' => Code::KeyT,
        'u' => Code::KeyU,
        'v' => Code::KeyV,
        'w' => Code::KeyW,
        'x' => Code::KeyX,
        'y' => Code::KeyY,
        'z' => Code::KeyZ,
        '0' => Code::Digit0,
        '1' => Code::Digit1,
        '2' => Code::Digit2,
        '3' => Code::Digit3,
        '4' => Code::Digit4,
        '5' => Code::Digit5,
        '6' => Code::Digit6,
        '7' => Code::Digit7,
        '8' => Code::Digit8,
        '9' => Code::Digit9,
        _ => return None,
    };
    Some(code)
}

fn named_key(name: &str) -> Option<Code> {
    let code = match name {
        "space" => Code::Space,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        _ => return None,
    };
    Some(code)
}

/// Parse a pynput-style combo: modifiers and named keys in angle brackets,
/// plain keys bare, joined by `+` (`<ctrl>+<alt>+d`, `<cmd>+<f9>`).
pub fn parse_combo(combo: &str) -> Result<(Modifiers, Code), HotkeyError> {
    let mut modifiers = Modifiers::empty();
    let mut key = None;

    for token in combo.split('+').map(|t| t.trim().to_lowercase()) {
        if token.is_empty() {
            return Err(invalid(combo, "empty key"));
        }

        let code = match token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            Some(name) => {
                if let Some(m) = modifier(name) {
                    modifiers |= m;
                    continue;
                }
                named_key(name).ok_or_else(|| invalid(combo, format!("unknown key <{name}>")))?
            }
            None => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        letter(c).ok_or_else(|| invalid(combo, format!("unsupported key '{c}'")))?
                    }
                    _ => return Err(invalid(combo, format!("unknown key '{token}'"))),
                }
            }
        };

        if key.replace(code).is_some() {
            return Err(invalid(combo, "more than one non-modifier key"));
        }
    }

    let code = key.ok_or_else(|| invalid(combo, "no key besides modifiers"))?;
    Ok((modifiers, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_combos() {
        assert_eq!(
            parse_combo("<ctrl>+<alt>+d").unwrap(),
            (Modifiers::CONTROL | Modifiers::ALT, Code::KeyD)
        );
        assert_eq!(
            parse_combo("<cmd>+<alt>+d").unwrap(),
            (Modifiers::SUPER | Modifiers::ALT, Code::KeyD)
        );
    }

    #[test]
    fn accepts_named_keys_and_loose_spelling() {
        assert_eq!(parse_combo("<F9>").unwrap(), (Modifiers::empty(), Code::F9));
        assert_eq!(
            parse_combo(" <Shift> + <space> ").unwrap(),
            (Modifiers::SHIFT, Code::Space)
        );
        assert_eq!(
            parse_combo("<control>+7").unwrap(),
            (Modifiers::CONTROL, Code::Digit7)
        );
    }

    #[test]
    fn rejects_bad_combos() {
        for combo in [
            "",
            "<ctrl>+<alt>",
            "<ctrl>+d+e",
            "<hyper>+d",
            "<ctrl>+enter",
            "<ctrl>++d",
            "<ctrl>+é",
        ] {
            assert!(
                matches!(parse_combo(combo), Err(HotkeyError::InvalidCombo { .. })),
                "{combo:?} should be rejected"
            );
        }
    }
}
