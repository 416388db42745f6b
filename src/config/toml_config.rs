use crate::config::{select_sections, DEFAULT_ITERATIONS};
use crate::domain::model::Section;
use crate::domain::ports::TourSettings;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{
    validate_iterations, validate_non_empty, validate_non_empty_string, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub tour: TourConfig,
    pub performance: Option<PerformanceConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourConfig {
    pub name: Option<String>,
    pub sections: Option<Vec<Section>>,
    pub skip: Option<Vec<Section>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceConfig {
    pub iterations: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TOUR_ITERATIONS})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Command-line flags win over file values.
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::cli::CliConfig) {
        if let Some(iterations) = cli.iterations {
            self.performance
                .get_or_insert_with(PerformanceConfig::default)
                .iterations = Some(iterations);
            tracing::info!("🔧 Iterations overridden to: {}", iterations);
        }
        if cli.monitor {
            self.monitoring
                .get_or_insert_with(MonitoringConfig::default)
                .enabled = true;
        }
        if !cli.sections.is_empty() {
            self.tour.sections = Some(cli.sections.clone());
        }
        if !cli.skip.is_empty() {
            self.tour.skip = Some(cli.skip.clone());
        }
    }

    pub fn verbose_logging(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_level.as_deref())
            .is_some_and(|level| matches!(level, "debug" | "trace"))
    }

    pub fn name(&self) -> &str {
        self.tour.name.as_deref().unwrap_or("default")
    }
}

impl TourSettings for TomlConfig {
    fn sections(&self) -> Vec<Section> {
        select_sections(
            self.tour.sections.as_deref().unwrap_or_default(),
            self.tour.skip.as_deref().unwrap_or_default(),
        )
    }

    fn iterations(&self) -> usize {
        self.performance
            .as_ref()
            .and_then(|p| p.iterations)
            .unwrap_or(DEFAULT_ITERATIONS)
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.tour.name {
            validate_non_empty_string("tour.name", name)?;
        }
        if self.tour.sections.as_ref().is_some_and(|s| s.is_empty()) {
            return Err(TourError::ConfigValidationError {
                field: "tour.sections".to_string(),
                message: "List is empty; omit it to run every section".to_string(),
            });
        }
        validate_iterations("performance.iterations", self.iterations())?;
        validate_non_empty("tour.sections", &self.sections())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[tour]
name = "nightly-smoke"
sections = ["json", "variables"]

[performance]
iterations = 2500

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), "nightly-smoke");
        assert_eq!(config.sections(), vec![Section::Variables, Section::Json]);
        assert_eq!(config.iterations(), 2500);
        assert!(config.monitoring_enabled());
        assert!(config.verbose_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.sections(), Section::ALL.to_vec());
        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert!(!config.monitoring_enabled());
        assert!(!config.verbose_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SCRIPT_TOUR_TEST_ITERATIONS", "777");

        let toml_content = r#"
[performance]
iterations = ${SCRIPT_TOUR_TEST_ITERATIONS}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.iterations(), 777);

        std::env::remove_var("SCRIPT_TOUR_TEST_ITERATIONS");
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let result = TomlConfig::from_toml_str("[tour]\nsections = [\"networking\"]\n");
        assert!(matches!(result, Err(TourError::TomlError(_))));
    }

    #[test]
    fn test_config_validation() {
        let zero = TomlConfig::from_toml_str("[performance]\niterations = 0\n").unwrap();
        assert!(zero.validate().is_err());

        let empty_list = TomlConfig::from_toml_str("[tour]\nsections = []\n").unwrap();
        assert!(empty_list.validate().is_err());

        let blank_name = TomlConfig::from_toml_str("[tour]\nname = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[tour]
name = "file-test"
skip = ["performance", "date-time"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), "file-test");
        assert_eq!(config.sections().len(), 11);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/tour.toml");
        assert!(matches!(result, Err(TourError::IoError(_))));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str("[performance]\niterations = 10\n").unwrap();
        let cli = crate::config::cli::CliConfig::parse_from([
            "script-tour",
            "--iterations",
            "42",
            "--monitor",
            "--skip",
            "json",
        ]);
        config.apply_overrides(&cli);

        assert_eq!(config.iterations(), 42);
        assert!(config.monitoring_enabled());
        assert!(!config.sections().contains(&Section::Json));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_sections_replace_file_sections() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str("[tour]\nsections = [\"json\"]\n").unwrap();
        assert_eq!(config.sections(), vec![Section::Json]);

        let cli = crate::config::cli::CliConfig::parse_from([
            "script-tour",
            "--sections",
            "variables",
        ]);
        config.apply_overrides(&cli);

        assert_eq!(config.sections(), vec![Section::Variables]);
        assert!(config.validate().is_ok());
    }
}
