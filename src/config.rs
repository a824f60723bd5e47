use crate::ai::model::GenerationParams;
use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "microsoft/phi-4";
pub const DEFAULT_LOG_FILE: &str = "edumate_debug.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model: String,
    pub generation: GenerationParams,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            generation: GenerationParams::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(model) = get("EDUMATE_MODEL") {
            config.model = model.trim().to_string();
        }
        if let Some(path) = get("EDUMATE_LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }

        let generation = &mut config.generation;
        override_parsed(&get, "EDUMATE_MAX_NEW_TOKENS", &mut generation.max_new_tokens)?;
        override_parsed(
            &get,
            "EDUMATE_NUM_RETURN_SEQUENCES",
            &mut generation.num_return_sequences,
        )?;
        override_parsed(&get, "EDUMATE_TEMPERATURE", &mut generation.temperature)?;
        override_parsed(&get, "EDUMATE_TOP_P", &mut generation.top_p)?;
        override_parsed(&get, "EDUMATE_TOP_K", &mut generation.top_k)?;

        if generation.num_return_sequences == 0 {
            return Err(invalid("EDUMATE_NUM_RETURN_SEQUENCES", "0"));
        }
        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(invalid("EDUMATE_TOP_P", &generation.top_p.to_string()));
        }

        Ok(config)
    }
}

fn override_parsed<T, G>(get: &G, key: &str, slot: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    if let Some(raw) = get(key) {
        *slot = raw.trim().parse().map_err(|_| invalid(key, &raw))?;
    }
    Ok(())
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generation.max_new_tokens, 20);
        assert_eq!(config.generation.num_return_sequences, 1);
        assert_eq!(config.generation.temperature, 0.5);
        assert_eq!(config.generation.top_p, 0.9);
        assert_eq!(config.generation.top_k, 20);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("EDUMATE_MODEL", "  some/model  "),
            ("EDUMATE_TEMPERATURE", "0.2"),
            ("EDUMATE_TOP_K", "5"),
            ("EDUMATE_LOG_FILE", "/tmp/edumate.log"),
        ]))
        .unwrap();
        assert_eq!(config.model, "some/model");
        assert_eq!(config.generation.temperature, 0.2);
        assert_eq!(config.generation.top_k, 5);
        assert_eq!(config.generation.max_new_tokens, 20);
        assert_eq!(config.log_file, PathBuf::from("/tmp/edumate.log"));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[("EDUMATE_MODEL", "   ")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("EDUMATE_TOP_K", "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "EDUMATE_TOP_K".to_string(),
                value: "many".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_sequences_rejected() {
        let result = Config::from_lookup(lookup_from(&[("EDUMATE_NUM_RETURN_SEQUENCES", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_top_p_out_of_range_rejected() {
        let result = Config::from_lookup(lookup_from(&[("EDUMATE_TOP_P", "1.5")]));
        assert!(result.is_err());
    }
}
