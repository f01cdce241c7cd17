pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::UserProfile;
#[cfg(feature = "cli")]
use crate::utils::error::{GuideError, Result};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "edu-guide")]
#[command(about = "Recommend universities from a static catalog")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog JSON file (overrides the config file)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Preferred location, or "Any"
    #[arg(long)]
    pub location: Option<String>,

    /// Maximum annual tuition
    #[arg(long)]
    pub max_budget: Option<f64>,

    #[arg(long, required_unless_present = "career_path")]
    pub core_field: Option<String>,

    #[arg(long, required_unless_present = "career_path")]
    pub career_goal: Option<String>,

    /// Self-assessed English level, 1-10
    #[arg(long, required_unless_present = "career_path")]
    pub english_proficiency: Option<u8>,

    /// Show the career path for a field instead of recommending
    #[arg(long, value_name = "FIELD")]
    pub career_path: Option<String>,

    /// Number of universities to return (overrides the config file)
    #[arg(long)]
    pub top_n: Option<usize>,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Save the result for later lookup
    #[arg(long)]
    pub save: bool,

    /// Directory for saved results (overrides the config file)
    #[arg(long)]
    pub results_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔後套用命令列覆蓋
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog.path = catalog.clone();
        }
        if let Some(top_n) = self.top_n {
            config.recommend.top_n = top_n;
        }
        if let Some(dir) = &self.results_dir {
            config.output.results_dir = Some(dir.clone());
        }

        Ok(config)
    }

    pub fn profile(&self) -> Result<UserProfile> {
        let missing = |field: &str| GuideError::MissingConfigError {
            field: field.to_string(),
        };

        Ok(UserProfile {
            location: self.location.clone(),
            max_budget: self.max_budget,
            core_field: self.core_field.clone().ok_or_else(|| missing("core_field"))?,
            career_goal: self.career_goal.clone().ok_or_else(|| missing("career_goal"))?,
            english_proficiency: self
                .english_proficiency
                .ok_or_else(|| missing("english_proficiency"))?,
        })
    }
}
