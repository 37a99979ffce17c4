use std::time::Duration;

use serde::Deserialize;

use crate::domain::parsing::SectionPattern;
use crate::infrastructure::llm::LlmClientOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Generation settings for the summarization model
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout_secs: u64,
}

/// Section header table; empty keeps the built-in academic headers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub patterns: Vec<SectionPattern>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 4096,
            request_timeout_secs: 120,
        }
    }
}

impl LlmConfig {
    pub fn client_options(&self) -> LlmClientOptions {
        LlmClientOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.llm.request_timeout_secs, 120);
        assert!(config.parser.patterns.is_empty());
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"{"logging": {"format": "json"}, "llm": {"max_tokens": 1024}}"#,
                config::FileFormat::Json,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.llm.request_timeout_secs, 120);
    }

    #[test]
    fn test_custom_patterns() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"{"parser": {"patterns": [{"pattern": "^Summary\\s*$", "name": "Summary"}]}}"#,
                config::FileFormat::Json,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(
            config.parser.patterns,
            vec![SectionPattern::new(r"^Summary\s*$", "Summary")]
        );
    }

    #[test]
    fn test_client_options() {
        let options = LlmConfig {
            temperature: 0.5,
            max_tokens: 100,
            request_timeout_secs: 7,
        }
        .client_options();

        assert_eq!(options.max_tokens, 100);
        assert_eq!(options.request_timeout, Duration::from_secs(7));
    }
}
