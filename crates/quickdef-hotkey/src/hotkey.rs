use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};

use crate::combo::parse_combo;

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error("Invalid hotkey '{combo}': {reason}")]
    InvalidCombo { combo: String, reason: String },

    #[error("Failed to create hotkey manager: {0}")]
    Manager(#[source] global_hotkey::Error),

    #[error("Failed to register hotkey: {0}")]
    Register(#[source] global_hotkey::Error),
}

/// Process-wide registration of the popup shortcut, released on drop
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyManager {
    /// Register a pynput-style combo such as `<ctrl>+<alt>+d`
    pub fn with_combo(combo: &str) -> Result<Self, HotkeyError> {
        let (modifiers, code) = parse_combo(combo)?;
        Self::with_hotkey(modifiers, code)
    }

    /// Create with custom hotkey
    pub fn with_hotkey(modifiers: Modifiers, code: Code) -> Result<Self, HotkeyError> {
        let manager = GlobalHotKeyManager::new().map_err(HotkeyError::Manager)?;

        let modifiers = (!modifiers.is_empty()).then_some(modifiers);
        let hotkey = HotKey::new(modifiers, code);

        manager.register(hotkey).map_err(HotkeyError::Register)?;

        Ok(Self { manager, hotkey })
    }

    /// Check if hotkey was pressed since the last poll (non-blocking).
    /// Key releases and other hotkeys are drained and ignored.
    pub fn poll(&self) -> bool {
        let receiver = GlobalHotKeyEvent::receiver();
        let mut pressed = false;

        while let Ok(event) = receiver.try_recv() {
            if event.id == self.hotkey.id() {
                pressed |= event.state == HotKeyState::Pressed;
            } else {
                tracing::trace!(
                    "Ignoring hotkey event {:?}, expected {:?}",
                    event.id,
                    self.hotkey.id()
                );
            }
        }

        pressed
    }

    /// Whether key events only arrive on a thread running the platform's
    /// native event loop (Win32 message pump, macOS run loop). A plain
    /// polling thread sees no presses there.
    pub fn needs_event_loop() -> bool {
        cfg!(any(target_os = "windows", target_os = "macos"))
    }

    /// Get the hotkey ID for matching events
    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.hotkey);
    }
}
