use crate::log::LogLevel;

pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_KEYSTROKE_MS: u32 = 50;
const DEFAULT_HOLD_MS: u32 = 1_500;
const LOG_LEVEL_VAR: Option<&str> = option_env!("PORTFOLIO_LOG_LEVEL");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub keystroke_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            keystroke_ms: DEFAULT_KEYSTROKE_MS,
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

/// Settings baked into the bundle at compile time. The page has no runtime
/// configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub typing: TypingConfig,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            log_level: parse_log_level(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
            typing: TypingConfig::default(),
        }
    }
}

fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    raw.map(str::trim)
        .and_then(LogLevel::from_str)
        .unwrap_or(default)
}
