mod combo;
mod hotkey;

pub use combo::parse_combo;
pub use hotkey::{HotkeyError, HotkeyManager};
