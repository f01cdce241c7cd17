use crate::domain::model::University;
use crate::utils::error::Result;
use std::sync::Arc;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_path(&self) -> &str;
    fn top_n(&self) -> usize;
    fn results_dir(&self) -> Option<&str>;
    fn scoring_tables(&self) -> &crate::core::scoring::ScoringTables;
    fn career_paths(&self) -> &crate::core::career::CareerPaths;
    fn answer_options(&self) -> &crate::core::conversation::AnswerOptions;
}

/// Read-only university source consumed by the recommendation engine.
pub trait Catalog: Send + Sync {
    /// All records in load order.
    fn list_all(&self) -> &[Arc<University>];
    fn get_by_id(&self, id: u32) -> Option<Arc<University>>;
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn list_all(&self) -> &[Arc<University>] {
        (**self).list_all()
    }

    fn get_by_id(&self, id: u32) -> Option<Arc<University>> {
        (**self).get_by_id(id)
    }
}
