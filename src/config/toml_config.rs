use crate::core::validator::ValidationPolicy;
use crate::utils::error::{Result, SentimentError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "API")]
    pub api: ApiConfig,
    #[serde(rename = "Output")]
    pub output: OutputConfig,
    #[serde(rename = "InputValidation")]
    pub input_validation: InputValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    pub key_env_variable: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputValidationConfig {
    pub min_words: usize,
    pub max_words: usize,
    pub word_list: Option<String>,
    pub meaningful_ratio: Option<f64>,
    pub repetitive_length_threshold: Option<usize>,
    pub repetitive_distinct_threshold: Option<usize>,
    pub unrecognized_length_threshold: Option<usize>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SentimentError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SentimentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SentimentError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("API.url", &self.api.url)?;
        validation::validate_non_empty_string("API.key_env_variable", &self.api.key_env_variable)?;
        validation::validate_path("Output.directory", &self.output.directory)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_at_least("API.timeout_seconds", timeout, 1)?;
        }

        let iv = &self.input_validation;
        validation::validate_at_least("InputValidation.min_words", iv.min_words, 1)?;
        validation::validate_at_least("InputValidation.max_words", iv.max_words, iv.min_words)?;

        let thresholds = [
            ("InputValidation.repetitive_length_threshold", iv.repetitive_length_threshold),
            ("InputValidation.repetitive_distinct_threshold", iv.repetitive_distinct_threshold),
            ("InputValidation.unrecognized_length_threshold", iv.unrecognized_length_threshold),
        ];
        for (field, value) in thresholds {
            if let Some(value) = value {
                validation::validate_at_least(field, value, 1)?;
            }
        }

        if let Some(ratio) = iv.meaningful_ratio {
            validation::validate_range("InputValidation.meaningful_ratio", ratio, 0.0, 1.0)?;
        }
        if let Some(path) = &iv.word_list {
            validation::validate_path("InputValidation.word_list", path)?;
        }

        Ok(())
    }

    /// Reads the bearer token from the variable named by `API.key_env_variable`.
    pub fn api_key(&self) -> Result<String> {
        let var = &self.api.key_env_variable;
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(SentimentError::MissingCredential { var: var.clone() }),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api.url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    pub fn output_dir(&self) -> &str {
        &self.output.directory
    }

    pub fn word_list_path(&self) -> PathBuf {
        PathBuf::from(
            self.input_validation
                .word_list
                .as_deref()
                .unwrap_or(DEFAULT_WORD_LIST),
        )
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        let iv = &self.input_validation;
        let defaults = ValidationPolicy::new(iv.min_words, iv.max_words);
        ValidationPolicy {
            meaningful_ratio: iv.meaningful_ratio.unwrap_or(defaults.meaningful_ratio),
            repetitive_length_threshold: iv
                .repetitive_length_threshold
                .unwrap_or(defaults.repetitive_length_threshold),
            repetitive_distinct_threshold: iv
                .repetitive_distinct_threshold
                .unwrap_or(defaults.repetitive_distinct_threshold),
            unrecognized_length_threshold: iv
                .unrecognized_length_threshold
                .unwrap_or(defaults.unrecognized_length_threshold),
            ..defaults
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[API]
url = "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
key_env_variable = "HF_API_KEY"

[Output]
directory = "results"

[InputValidation]
min_words = 3
max_words = 100
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = AppConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.api.key_env_variable, "HF_API_KEY");
        assert_eq!(config.output_dir(), "results");
        assert_eq!(config.word_list_path(), PathBuf::from(DEFAULT_WORD_LIST));
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());

        let policy = config.validation_policy();
        assert_eq!(policy.min_words, 3);
        assert_eq!(policy.max_words, 100);
        assert_eq!(policy.meaningful_ratio, 0.6);
        assert_eq!(policy.repetitive_length_threshold, 10);
        assert_eq!(policy.repetitive_distinct_threshold, 4);
        assert_eq!(policy.unrecognized_length_threshold, 15);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let toml_content = r#"
[API]
url = "https://example.com"

[Output]
directory = "results"

[InputValidation]
min_words = 3
max_words = 100
"#;

        let err = AppConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, SentimentError::ConfigError { .. }));
        assert!(err.to_string().contains("key_env_variable"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let toml_content = r#"
[API]
url = "https://example.com"
key_env_variable = "HF_API_KEY"

[Output]
directory = "results"
"#;

        assert!(AppConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_policy_overrides() {
        let toml_content = format!(
            "{}meaningful_ratio = 0.8\nunrecognized_length_threshold = 20\nword_list = \"words.txt\"\n",
            BASIC
        );

        let config = AppConfig::from_toml_str(&toml_content).unwrap();
        let policy = config.validation_policy();

        assert_eq!(policy.meaningful_ratio, 0.8);
        assert_eq!(policy.unrecognized_length_threshold, 20);
        assert_eq!(policy.repetitive_length_threshold, 10);
        assert_eq!(config.word_list_path(), PathBuf::from("words.txt"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COMMENT_SENTIMENT_TEST_OUTPUT", "/tmp/sentiment-results");

        let toml_content = BASIC.replace(
            "directory = \"results\"",
            "directory = \"${COMMENT_SENTIMENT_TEST_OUTPUT}\"",
        );

        let config = AppConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.output_dir(), "/tmp/sentiment-results");

        std::env::remove_var("COMMENT_SENTIMENT_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str(&BASIC.replace("https://api-inference", "ftp://api"))
            .unwrap();
        assert!(config.validate().is_err());

        let config =
            AppConfig::from_toml_str(&BASIC.replace("max_words = 100", "max_words = 2")).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let toml_content = BASIC.replace(
            "key_env_variable = \"HF_API_KEY\"",
            "key_env_variable = \"HF_API_KEY\"\ntimeout_seconds = 0",
        );
        let config = AppConfig::from_toml_str(&toml_content).unwrap();
        match config.validate().unwrap_err() {
            SentimentError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "API.timeout_seconds")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let config = AppConfig::from_toml_str(&toml_content.replace("= 0", "= 30")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_thresholds_are_rejected() {
        for key in [
            "repetitive_length_threshold",
            "repetitive_distinct_threshold",
            "unrecognized_length_threshold",
        ] {
            let config =
                AppConfig::from_toml_str(&format!("{}{} = 0\n", BASIC, key)).unwrap();
            match config.validate().unwrap_err() {
                SentimentError::InvalidConfigValueError { field, .. } => {
                    assert_eq!(field, format!("InputValidation.{}", key))
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_api_key_lookup() {
        let toml_content = BASIC.replace("HF_API_KEY", "COMMENT_SENTIMENT_TEST_KEY");
        let config = AppConfig::from_toml_str(&toml_content).unwrap();

        std::env::remove_var("COMMENT_SENTIMENT_TEST_KEY");
        assert!(matches!(
            config.api_key(),
            Err(SentimentError::MissingCredential { .. })
        ));

        std::env::set_var("COMMENT_SENTIMENT_TEST_KEY", "   ");
        assert!(config.api_key().is_err());

        std::env::set_var("COMMENT_SENTIMENT_TEST_KEY", "hf_secret");
        assert_eq!(config.api_key().unwrap(), "hf_secret");

        std::env::remove_var("COMMENT_SENTIMENT_TEST_KEY");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_validation.min_words, 3);
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = AppConfig::from_file("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(err, SentimentError::ConfigError { .. }));
    }
}
