use crate::core::career::CareerPaths;
use crate::core::conversation::AnswerOptions;
use crate::core::scoring::ScoringTables;
use crate::core::ConfigProvider;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_path, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATALOG_PATH: &str = "data/universities.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub recommend: RecommendConfig,
    pub output: OutputConfig,
    pub scoring: ScoringTables,
    pub careers: CareerPaths,
    pub conversation: AnswerOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CATALOG_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    pub top_n: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: crate::core::engine::DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_dir: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuideError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GuideError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_PATH})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GuideError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog.path)?;
        validate_file_extensions("catalog.path", std::slice::from_ref(&self.catalog.path), &["json"])?;
        validate_positive_number("recommend.top_n", self.recommend.top_n, 1)?;

        if let Some(dir) = &self.output.results_dir {
            validate_path("output.results_dir", dir)?;
        }

        validate_range("scoring.english_threshold", self.scoring.english_threshold, 1, 10)?;

        for (goal, category) in &self.scoring.career_goals {
            if goal.trim().is_empty() || category.trim().is_empty() {
                return Err(GuideError::InvalidConfigValueError {
                    field: "scoring.career_goals".to_string(),
                    value: format!("{} = {}", goal, category),
                    reason: "Career goal and category must both be non-empty".to_string(),
                });
            }
        }

        self.careers.validate()?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    fn top_n(&self) -> usize {
        self.recommend.top_n
    }

    fn results_dir(&self) -> Option<&str> {
        self.output.results_dir.as_deref()
    }

    fn scoring_tables(&self) -> &ScoringTables {
        &self.scoring
    }

    fn career_paths(&self) -> &CareerPaths {
        &self.careers
    }

    fn answer_options(&self) -> &AnswerOptions {
        &self.conversation
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
