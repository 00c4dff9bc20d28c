use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use bestfit::engine::config::ScoringConfigBuilder;
use std::str::FromStr;
use tracing::debug;

/// Prefix shared by every environment variable the CLI reads.
pub const ENV_PREFIX: &str = "BEST_FITNESS_";

const WORST_VALUE_KEY: &str = "scoring.worst-value";
const PRETTY_KEY: &str = "output.pretty";
const STRICT_KEY: &str = "output.strict";

/// Resolves the final configuration.
///
/// `env` looks up an environment variable by its full name; the binary passes
/// `std::env::var`, tests pass a fixed table.
pub fn build_config<E>(args: &Cli, env: E) -> Result<AppConfig>
where
    E: Fn(&str) -> Option<String>,
{
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_env_values(file_config, &env)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let worst_value = args
        .worst_value
        .or(scoring_file.worst_value)
        .unwrap_or(defaults.worst_value);
    debug!(worst_value, "Resolved worst value.");

    let scoring = ScoringConfigBuilder::new()
        .worst_value(worst_value)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let output = OutputConfig {
        pretty: args.pretty || output_file.pretty.unwrap_or(defaults.pretty),
        strict: args.strict || output_file.strict.unwrap_or(defaults.strict),
    };

    Ok(AppConfig { scoring, output })
}

fn apply_env_values<E>(mut config: FileConfig, env: &E) -> Result<FileConfig>
where
    E: Fn(&str) -> Option<String>,
{
    for (suffix, key) in [
        ("WORST_VALUE", WORST_VALUE_KEY),
        ("PRETTY", PRETTY_KEY),
        ("STRICT", STRICT_KEY),
    ] {
        let var = format!("{ENV_PREFIX}{suffix}");
        if let Some(raw) = env(&var) {
            debug!("Applying {} from the environment.", var);
            config = apply_value(config, key, raw.trim(), &var)?;
        }
    }
    Ok(config)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        config = apply_value(config, key.trim(), value_str.trim(), key.trim())?;
    }
    Ok(config)
}

fn apply_value(mut config: FileConfig, key: &str, value_str: &str, source: &str) -> Result<FileConfig> {
    match key {
        WORST_VALUE_KEY => {
            config
                .scoring
                .get_or_insert_with(Default::default)
                .worst_value = Some(parse_value(value_str, "float", source)?);
        }
        PRETTY_KEY => {
            config.output.get_or_insert_with(Default::default).pretty =
                Some(parse_value(value_str, "boolean", source)?);
        }
        STRICT_KEY => {
            config.output.get_or_insert_with(Default::default).strict =
                Some(parse_value(value_str, "boolean", source)?);
        }
        _ => {
            return Err(CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                key
            )));
        }
    }
    Ok(config)
}

fn parse_value<T: FromStr>(value_str: &str, kind: &str, source: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, source, value_str))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let table: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| table.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let app = build_config(&Cli::default(), no_env).expect("build ok");
        assert_eq!(app.scoring.worst_value, f64::MAX);
        assert_eq!(app.output, OutputConfig::default());
    }

    #[test]
    fn reads_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("best.toml");
        fs::write(
            &cfg_path,
            r#"
            [scoring]
            worst-value = 1e10

            [output]
            pretty = true
            strict = true
            "#,
        )
        .unwrap();

        let args = Cli {
            config: Some(cfg_path),
            ..Cli::default()
        };
        let app = build_config(&args, no_env).expect("build ok");
        assert_eq!(app.scoring.worst_value, 1e10);
        assert!(app.output.pretty);
        assert!(app.output.strict);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("best.toml");
        fs::write(&cfg_path, "[scoring]\nworst = 1.0\n").unwrap();

        let args = Cli {
            config: Some(cfg_path),
            ..Cli::default()
        };
        let result = build_config(&args, no_env);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let args = Cli {
            config: Some(dir.path().join("absent.toml")),
            ..Cli::default()
        };
        assert!(matches!(build_config(&args, no_env), Err(CliError::Io(_))));
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("best.toml");
        fs::write(&cfg_path, "[scoring]\nworst-value = 1.0\n").unwrap();

        let args = Cli {
            config: Some(cfg_path),
            ..Cli::default()
        };
        let env = env_from(&[("BEST_FITNESS_WORST_VALUE", " 250.5 ")]);
        let app = build_config(&args, env).expect("build ok");
        assert_eq!(app.scoring.worst_value, 250.5);
    }

    #[test]
    fn set_values_override_env() {
        let args = Cli {
            set_values: vec![
                "scoring.worst-value=7".to_string(),
                "output.pretty=true".to_string(),
            ],
            ..Cli::default()
        };
        let env = env_from(&[("BEST_FITNESS_WORST_VALUE", "9")]);
        let app = build_config(&args, env).expect("build ok");
        assert_eq!(app.scoring.worst_value, 7.0);
        assert!(app.output.pretty);
    }

    #[test]
    fn cli_flag_overrides_everything() {
        let args = Cli {
            worst_value: Some(-3.0),
            set_values: vec!["scoring.worst-value=7".to_string()],
            ..Cli::default()
        };
        let env = env_from(&[("BEST_FITNESS_WORST_VALUE", "9")]);
        let app = build_config(&args, env).expect("build ok");
        assert_eq!(app.scoring.worst_value, -3.0);
    }

    #[test]
    fn output_flags_win_over_file_false() {
        let args = Cli {
            strict: true,
            set_values: vec!["output.strict=false".to_string()],
            ..Cli::default()
        };
        let app = build_config(&args, no_env).expect("build ok");
        assert!(app.output.strict);
    }

    #[test]
    fn malformed_set_pair_is_rejected() {
        let args = Cli {
            set_values: vec!["scoring.worst-value".to_string()],
            ..Cli::default()
        };
        let err = build_config(&args, no_env).unwrap_err();
        assert!(err.to_string().contains("Expected KEY=VALUE"));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let args = Cli {
            set_values: vec!["scoring.best-value=1".to_string()],
            ..Cli::default()
        };
        assert!(matches!(
            build_config(&args, no_env),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn unparsable_env_value_names_the_variable() {
        let env = env_from(&[("BEST_FITNESS_WORST_VALUE", "huge")]);
        let err = build_config(&Cli::default(), env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid float value for BEST_FITNESS_WORST_VALUE: huge"
        );
    }

    #[test]
    fn non_finite_worst_value_is_rejected() {
        for raw in ["NaN", "inf", "-inf"] {
            let env = env_from(&[("BEST_FITNESS_WORST_VALUE", raw)]);
            let result = build_config(&Cli::default(), env);
            assert!(matches!(result, Err(CliError::Config(_))), "accepted {raw}");
        }
    }
}
