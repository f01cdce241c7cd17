use crate::config::cli::LocalStorage;
use crate::core::career::CareerPaths;
use crate::core::catalog::CatalogStore;
use crate::core::engine::Recommender;
use crate::core::results::{ResultStore, SavedResult};
use crate::core::{Catalog, ConfigProvider};
use crate::domain::model::{CareerPath, Recommendation, University, UserProfile};
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Catalog, engine, career paths and optional result store wired together
/// from configuration.
pub struct Advisor {
    recommender: Recommender<Arc<CatalogStore>>,
    careers: CareerPaths,
    results: Option<ResultStore<LocalStorage>>,
    top_n: usize,
}

impl Advisor {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let catalog = Arc::new(CatalogStore::load(config.catalog_path()));
        if catalog.is_empty() {
            tracing::warn!("⚠️ Catalog is empty, every recommendation will be empty");
        }

        let results = config.results_dir().map(|dir| {
            tracing::debug!("Results will be stored under {}", dir);
            ResultStore::new(LocalStorage::new(dir))
        });

        let careers = config.career_paths().clone();
        if careers.is_empty() {
            tracing::warn!("⚠️ No career paths configured");
        }

        Self {
            recommender: Recommender::with_tables(catalog, config.scoring_tables().clone()),
            careers,
            results,
            top_n: config.top_n(),
        }
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        self.recommender.catalog()
    }

    /// Validates the profile, then ranks. `top_n` falls back to the configured value.
    pub fn recommend(
        &self,
        profile: &UserProfile,
        top_n: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        profile.validate()?;
        Ok(self
            .recommender
            .recommend(profile, top_n.unwrap_or(self.top_n)))
    }

    pub async fn save(
        &self,
        profile: &UserProfile,
        recommendations: &[Recommendation],
        result_id: Option<&str>,
    ) -> Result<String> {
        self.result_store()?
            .save(profile, recommendations, result_id)
            .await
    }

    pub async fn saved_result(&self, result_id: &str) -> Result<Option<SavedResult>> {
        self.result_store()?.get(result_id).await
    }

    pub fn lookup(&self, id: u32) -> Option<Arc<University>> {
        self.catalog().get_by_id(id)
    }

    pub fn career_path(&self, field: &str) -> Option<&CareerPath> {
        self.careers.career_path(field)
    }

    pub fn career_fields(&self) -> impl Iterator<Item = &str> {
        self.careers.fields()
    }

    fn result_store(&self) -> Result<&ResultStore<LocalStorage>> {
        self.results
            .as_ref()
            .ok_or_else(|| GuideError::MissingConfigError {
                field: "output.results_dir".to_string(),
            })
    }
}
