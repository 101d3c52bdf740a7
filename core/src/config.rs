use alloc::string::String;
use core::time::Duration;

pub const DEFAULT_APP_NAME: &str = "Emoji_App";

/// Runtime settings of the badge application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name shown in the menu title, also selects `apps/<name>/assets`.
    pub app_name: String,
    /// How long a received emoji stays on screen.
    pub auto_dismiss: Duration,
    /// Sleep between two iterations of the control loop.
    pub tick: Duration,
    /// Input is ignored for this long after a screen change.
    pub input_cooldown: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: String::from(DEFAULT_APP_NAME),
            auto_dismiss: Duration::from_secs(25),
            tick: Duration::from_millis(50),
            input_cooldown: Duration::from_millis(300),
        }
    }
}

impl Config {
    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = String::from(app_name);
        self
    }
}
