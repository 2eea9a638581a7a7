use crate::aggregator::DEFAULT_TOP_N;
use crate::loader::{parse_date, DataShape, SourceSet};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing value for: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Dashboard configuration from environment variables, overridable by flags
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub shape: DataShape,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub top_n: usize,
    /// Print the snapshot as JSON instead of running the terminal UI
    pub json_output: bool,
    pub rust_log: Option<String>,
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `DATA_DIR` (default: data)
    /// - `DATA_SHAPE` (default: denormalized)
    /// - `START_DATE`, `END_DATE` as YYYY-MM-DD (default: data bounds)
    /// - `TOP_N` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir: PathBuf = env::var("DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let shape = match env::var("DATA_SHAPE") {
            Ok(raw) => DataShape::from_str(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!("DATA_SHAPE '{}' is not a known shape", raw))
            })?,
            Err(_) => DataShape::Denormalized,
        };

        let start_date = date_var("START_DATE")?;
        let end_date = date_var("END_DATE")?;

        let top_n = env::var("TOP_N")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_TOP_N);

        Ok(Self {
            data_dir,
            shape,
            start_date,
            end_date,
            top_n,
            json_output: false,
            rust_log: env::var("RUST_LOG").ok(),
        })
    }

    /// Apply `--data-dir`, `--shape`, `--start`, `--end`, `--top` and `--json`
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        if let Some(dir) = flag_value(args, "--data-dir")? {
            self.data_dir = dir.into();
        }
        if let Some(raw) = flag_value(args, "--shape")? {
            self.shape = DataShape::from_str(raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!("--shape '{}' is not a known shape", raw))
            })?;
        }
        if let Some(raw) = flag_value(args, "--start")? {
            self.start_date = Some(parse_date_value("--start", raw)?);
        }
        if let Some(raw) = flag_value(args, "--end")? {
            self.end_date = Some(parse_date_value("--end", raw)?);
        }
        if let Some(raw) = flag_value(args, "--top")? {
            self.top_n = raw
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue(format!("--top '{}'", raw)))?;
        }
        if args.iter().any(|a| a == "--json") {
            self.json_output = true;
        }

        Ok(self)
    }

    pub fn sources(&self) -> SourceSet {
        SourceSet::for_shape(self.shape, &self.data_dir)
    }
}

/// Value following `flag`, if the flag is present
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, ConfigError> {
    match args.iter().position(|a| a == flag) {
        Some(idx) => args
            .get(idx + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| ConfigError::MissingVariable(flag.to_string())),
        None => Ok(None),
    }
}

fn date_var(name: &str) -> Result<Option<NaiveDate>, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_date_value(name, &raw).map(Some),
        _ => Ok(None),
    }
}

fn parse_date_value(name: &str, raw: &str) -> Result<NaiveDate, ConfigError> {
    parse_date(raw).ok_or_else(|| {
        ConfigError::InvalidValue(format!("{} '{}' is not a YYYY-MM-DD date", name, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn base() -> DashboardConfig {
        DashboardConfig {
            data_dir: "data".into(),
            shape: DataShape::Denormalized,
            start_date: None,
            end_date: None,
            top_n: DEFAULT_TOP_N,
            json_output: false,
            rust_log: None,
        }
    }

    #[test]
    fn test_args_override() {
        let config = base()
            .apply_args(&args(&[
                "ecomdash", "--shape", "normalized", "--start", "2017-02-01", "--end",
                "2017-02-28", "--top", "5", "--json",
            ]))
            .unwrap();

        assert_eq!(config.shape, DataShape::Normalized);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2017, 2, 1));
        assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2017, 2, 28));
        assert_eq!(config.top_n, 5);
        assert!(config.json_output);
        assert!(config.sources().required("orders").is_err());
    }

    #[test]
    fn test_invalid_args() {
        assert!(matches!(
            base().apply_args(&args(&["ecomdash", "--start", "01/02/2017"])),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            base().apply_args(&args(&["ecomdash", "--shape", "sqlite"])),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            base().apply_args(&args(&["ecomdash", "--end"])),
            Err(ConfigError::MissingVariable(_))
        ));
    }

    #[test]
    fn test_env_config() {
        // Test: custom configuration from env vars
        env::set_var("DATA_DIR", "/tmp/olist");
        env::set_var("DATA_SHAPE", "normalized");
        env::set_var("START_DATE", "2017-01-01");
        env::set_var("TOP_N", "3");

        let config = DashboardConfig::from_env().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/olist"));
        assert_eq!(config.shape, DataShape::Normalized);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2017, 1, 1));
        assert_eq!(config.top_n, 3);

        // Cleanup
        env::remove_var("DATA_DIR");
        env::remove_var("DATA_SHAPE");
        env::remove_var("START_DATE");
        env::remove_var("TOP_N");
    }
}
