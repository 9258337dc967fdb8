//! Keyboard shortcuts.

use crate::session::Controls;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Space: start when stopped, pause when running.
    StartPause,
    Reset,
    Lap,
    Fullscreen,
    Theme,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.code`. R and L are left alone when combined
    /// with Ctrl/Meta so browser reload and address-bar keys keep working.
    pub fn from_key(code: &str, ctrl: bool, meta: bool) -> Option<Self> {
        let modified = ctrl || meta;
        match code {
            "Space" => Some(Shortcut::StartPause),
            "KeyR" if !modified => Some(Shortcut::Reset),
            "KeyL" if !modified => Some(Shortcut::Lap),
            "KeyF" => Some(Shortcut::Fullscreen),
            "KeyT" => Some(Shortcut::Theme),
            _ => None,
        }
    }

    /// Whether the shortcut may fire given the current control state.
    pub fn is_enabled(self, controls: &Controls) -> bool {
        match self {
            Shortcut::StartPause => controls.start || controls.pause,
            Shortcut::Reset => controls.reset,
            Shortcut::Lap => controls.lap,
            Shortcut::Fullscreen | Shortcut::Theme => true,
        }
    }
}

/// Keys typed into text fields never trigger shortcuts.
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("INPUT") || tag_name.eq_ignore_ascii_case("TEXTAREA")
}
