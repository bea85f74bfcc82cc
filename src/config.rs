use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Move checked products to the end of the list
    #[serde(default = "default_move_checked_to_end")]
    pub move_checked_to_end: bool,
    /// Currency symbol appended to totals
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Override the platform data directory for the list database
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            move_checked_to_end: default_move_checked_to_end(),
            currency: default_currency(),
            data_dir: None,
        }
    }
}

fn default_move_checked_to_end() -> bool {
    true
}

fn default_currency() -> String {
    "€".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.move_checked_to_end);
        assert_eq!(config.currency, "€");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config: Config = serde_yaml::from_str(
            "move_checked_to_end: false\ncurrency: \"$\"\ndata_dir: /tmp/shoptui-test\n",
        )
        .unwrap();
        assert!(!config.move_checked_to_end);
        assert_eq!(config.currency, "$");
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/shoptui-test"));
    }
}
