use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "comment-sentiment")]
#[command(about = "Classify the sentiment of a short comment via a remote inference API")]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["comment-sentiment"]);
        assert_eq!(config.config, "config.toml");
        assert!(!config.verbose);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from(["comment-sentiment", "-c", "alt.toml", "--verbose"]);
        assert_eq!(config.config, "alt.toml");
        assert!(config.verbose);
    }
}
