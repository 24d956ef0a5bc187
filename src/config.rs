use std::{env, path::PathBuf};

pub const DEFAULT_PROMPT: &str = ">> ";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub history: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            history: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ReplConfig {
    /// Reads `.env` if there is one, then the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ReplConfig::default();
        ReplConfig {
            prompt: lookup("RATIONAL_REPL_PROMPT")
                .filter(|prompt| !prompt.is_empty())
                .unwrap_or(defaults.prompt),
            history: lookup("RATIONAL_REPL_HISTORY")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            log_filter: lookup("RUST_LOG")
                .filter(|filter| !filter.is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReplConfig::from_lookup(|_| None);
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_lookup() {
        let vars: HashMap<&str, &str> = [
            ("RATIONAL_REPL_PROMPT", "q> "),
            ("RATIONAL_REPL_HISTORY", "/tmp/rational_history"),
            ("RUST_LOG", "rational_repl=trace"),
        ]
        .into_iter()
        .collect();

        let config = ReplConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.prompt, "q> ");
        assert_eq!(config.history, Some(PathBuf::from("/tmp/rational_history")));
        assert_eq!(config.log_filter, "rational_repl=trace");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = ReplConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.history, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
