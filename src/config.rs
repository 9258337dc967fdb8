//! Application-level configuration constants.

// Startup
pub const LOADING_DELAY_MS: u32 = 1_500;

// Browser events
pub const FULLSCREEN_CHANGE_EVENT: &str = "fullscreenchange";
/// Safari only fires the prefixed event.
pub const WEBKIT_FULLSCREEN_CHANGE_EVENT: &str = "webkitfullscreenchange";

// Text
pub const APP_TITLE: &str = "ChronoMaster Pro";
pub const CLEAR_LAPS_PROMPT: &str = "Are you sure you want to clear all lap times?";
pub const EMPTY_LAPS_MESSAGE: &str = "No lap times recorded yet";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullscreen_events_cover_safari() {
        assert_eq!(FULLSCREEN_CHANGE_EVENT, "fullscreenchange");
        assert_eq!(WEBKIT_FULLSCREEN_CHANGE_EVENT, "webkitfullscreenchange");
        assert_ne!(FULLSCREEN_CHANGE_EVENT, WEBKIT_FULLSCREEN_CHANGE_EVENT);
    }
}
