use crate::core::filter::hard_filter;
use crate::core::scoring::{score, ScoringTables};
use crate::domain::model::{Recommendation, University, UserProfile};
use crate::domain::ports::Catalog;
use std::sync::Arc;

pub const DEFAULT_TOP_N: usize = 3;

/// Filters, scores and ranks `candidates`. Equal scores keep the order of
/// `candidates`.
pub fn rank(
    candidates: &[Arc<University>],
    profile: &UserProfile,
    tables: &ScoringTables,
    top_n: usize,
) -> Vec<Recommendation> {
    let survivors = hard_filter(candidates, profile);
    tracing::debug!(
        "{} of {} universities passed the hard filter",
        survivors.len(),
        candidates.len()
    );

    let mut scored: Vec<Recommendation> = survivors
        .into_iter()
        .map(|university| {
            let breakdown = score(university, profile, tables);
            Recommendation::new(Arc::clone(university), breakdown)
        })
        .collect();

    // sort_by 是穩定排序，同分時保留目錄順序
    scored.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    scored.truncate(top_n);
    scored
}

/// Stateless recommendation engine over a shared read-only catalog.
#[derive(Debug, Clone)]
pub struct Recommender<C: Catalog> {
    catalog: C,
    tables: ScoringTables,
}

impl<C: Catalog> Recommender<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_tables(catalog, ScoringTables::default())
    }

    pub fn with_tables(catalog: C, tables: ScoringTables) -> Self {
        Self { catalog, tables }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn recommend(&self, profile: &UserProfile, top_n: usize) -> Vec<Recommendation> {
        let results = rank(self.catalog.list_all(), profile, &self.tables, top_n);
        tracing::info!(
            "🎓 Recommended {} universities (top_n = {})",
            results.len(),
            top_n
        );
        results
    }

    pub fn recommend_default(&self, profile: &UserProfile) -> Vec<Recommendation> {
        self.recommend(profile, DEFAULT_TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogStore;
    use crate::domain::model::{Faculty, Major, TuitionFees};

    fn uni(id: u32, location: &str, categories: &[&str], min: f64, max: f64) -> University {
        University {
            id,
            location: Some(location.to_string()),
            tuition_fees: Some(TuitionFees {
                range_min: Some(min),
                range_max: Some(max),
            }),
            faculties: vec![Faculty {
                majors: categories
                    .iter()
                    .map(|c| Major {
                        category_km: Some(c.to_string()),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            location: Some("Any".to_string()),
            max_budget: Some(2000.0),
            core_field: "law".to_string(),
            career_goal: "none".to_string(),
            english_proficiency: 3,
        }
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let store = CatalogStore::from_universities(vec![
            uni(5, "A", &["law"], 100.0, 1000.0),
            uni(2, "B", &["law"], 100.0, 1000.0),
            uni(9, "C", &["law", "law"], 100.0, 1000.0),
            uni(1, "D", &["law"], 100.0, 1000.0),
        ]);
        let recommender = Recommender::new(store);

        let results = recommender.recommend(&profile(), 10);
        let ids: Vec<u32> = results.iter().map(|r| r.university.id).collect();
        assert_eq!(ids, vec![9, 5, 2, 1]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let store = CatalogStore::from_universities(
            (1..=6).map(|id| uni(id, "A", &["law"], 100.0, 1000.0)).collect(),
        );
        let recommender = Recommender::new(store);

        assert_eq!(recommender.recommend_default(&profile()).len(), DEFAULT_TOP_N);
        assert_eq!(recommender.recommend(&profile(), 5).len(), 5);
        assert!(recommender.recommend(&profile(), 0).is_empty());
    }

    #[test]
    fn test_empty_catalog_gives_empty_result() {
        let recommender = Recommender::new(CatalogStore::default());
        assert!(recommender.recommend(&profile(), 3).is_empty());
    }

    #[test]
    fn test_total_matches_breakdown() {
        let store = CatalogStore::from_universities(vec![uni(1, "A", &["law"], 100.0, 1000.0)]);
        let recommender = Recommender::new(store);

        let results = recommender.recommend(&profile(), 3);
        assert_eq!(results[0].total_score, results[0].breakdown.total());
        // 5 (一個主修) + 20 (預算充裕)
        assert_eq!(results[0].total_score, 25);
    }
}
