pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::Advisor;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    career::CareerPaths,
    catalog::CatalogStore,
    engine::{Recommender, DEFAULT_TOP_N},
    scoring::ScoringTables,
};
pub use crate::domain::model::{Recommendation, University, UserProfile};
pub use crate::domain::ports::Catalog;
pub use crate::utils::error::{GuideError, Result};
