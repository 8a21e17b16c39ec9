//! Engine configuration parsed from environment variables.

use tracing::warn;

use crate::consts::{DEFAULT_FONT_PX, DEFAULT_TEXT_PADDING};
use crate::input::Tool;
use crate::text::FixedMetrics;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown tool '{0}' (expected select, line, rectangle, ellipse, pen or text)")]
    UnknownTool(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Tool active when the engine starts.
    pub default_tool: Tool,
    /// Metrics used to hit-test text elements.
    pub text_metrics: FixedMetrics,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { default_tool: Tool::default(), text_metrics: FixedMetrics::default() }
    }
}

impl EngineConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SKETCHPAD_DEFAULT_TOOL`: a tool name, `pen` when absent
    /// - `SKETCHPAD_FONT_PX`: default 24
    /// - `SKETCHPAD_TEXT_PADDING`: default 4
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` if `SKETCHPAD_DEFAULT_TOOL` names no tool.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_tool = match std::env::var("SKETCHPAD_DEFAULT_TOOL") {
            Ok(raw) => parse_tool(&raw)?,
            Err(_) => Tool::default(),
        };
        let text_metrics = FixedMetrics {
            font_px: env_parse("SKETCHPAD_FONT_PX", DEFAULT_FONT_PX),
            padding: env_parse("SKETCHPAD_TEXT_PADDING", DEFAULT_TEXT_PADDING),
        };
        Ok(Self { default_tool, text_metrics })
    }
}

pub(crate) fn parse_tool(raw: &str) -> Result<Tool, ConfigError> {
    let name = raw.trim().to_ascii_lowercase();
    Tool::from_name(&name).ok_or(ConfigError::UnknownTool(name))
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Debug,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, raw = %raw, ?default, "invalid value; using default");
            default
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
