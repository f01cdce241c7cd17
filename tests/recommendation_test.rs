use edu_guide::{Catalog, CatalogStore, Recommender, TomlConfig, UserProfile};
use std::sync::Arc;

const CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");
const SCORING_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/scoring.toml");

fn recommender() -> Recommender<Arc<CatalogStore>> {
    let catalog = Arc::new(CatalogStore::load(CATALOG_PATH));
    let config = TomlConfig::from_file(SCORING_PATH).unwrap();
    Recommender::with_tables(catalog, config.scoring)
}

fn engineer_profile() -> UserProfile {
    UserProfile {
        location: Some("Phnom Penh".to_string()),
        max_budget: Some(1000.0),
        core_field: "engineering".to_string(),
        career_goal: "engineer".to_string(),
        english_proficiency: 9,
    }
}

fn ids(recommender: &Recommender<Arc<CatalogStore>>, profile: &UserProfile, top_n: usize) -> Vec<u32> {
    recommender
        .recommend(profile, top_n)
        .iter()
        .map(|r| r.university.id)
        .collect()
}

#[test]
fn test_specialist_school_ranks_first() {
    let recommender = recommender();
    let results = recommender.recommend(&engineer_profile(), 3);

    assert_eq!(results.len(), 3);
    let top = &results[0];
    assert_eq!(top.university.id, 10);
    // 2 個主修 *5 + 職涯 25 + 預算 10 + 英語 15 + 專長 20
    assert_eq!(top.breakdown.major_match, 10);
    assert_eq!(top.breakdown.career_alignment, 25);
    assert_eq!(top.breakdown.budget_headroom, 10);
    assert_eq!(top.breakdown.english_readiness, 15);
    assert_eq!(top.breakdown.specialization, 20);
    assert_eq!(top.total_score, 80);

    assert_eq!(results[1].university.id, 20);
    assert_eq!(results[1].total_score, 45);
    assert!(results[0].total_score > results[1].total_score);
}

#[test]
fn test_equal_scores_follow_catalog_order() {
    let recommender = recommender();
    assert_eq!(ids(&recommender, &engineer_profile(), 3), vec![10, 20, 60]);
    assert_eq!(ids(&recommender, &engineer_profile(), 2), vec![10, 20]);
}

#[test]
fn test_results_respect_hard_filters() {
    let recommender = recommender();
    let profile = engineer_profile();
    let results = recommender.recommend(&profile, 10);

    assert!(!results.is_empty());
    for rec in &results {
        assert_eq!(rec.university.location.as_deref(), Some("Phnom Penh"));
        assert!(rec.university.range_min().unwrap() <= 1000.0);
    }
    // 40 號最低學費 1200，超出預算
    assert!(results.iter().all(|r| r.university.id != 40));
}

#[test]
fn test_never_more_than_top_n_or_survivors() {
    let recommender = recommender();
    let profile = engineer_profile();

    for top_n in 0..8 {
        let results = recommender.recommend(&profile, top_n);
        assert!(results.len() <= top_n);
        assert!(results.len() <= 3);
    }
}

#[test]
fn test_output_is_sorted_and_idempotent() {
    let recommender = recommender();
    let profile = UserProfile {
        location: Some("Any".to_string()),
        max_budget: None,
        core_field: "law".to_string(),
        career_goal: "lawyer".to_string(),
        english_proficiency: 5,
    };

    let first = recommender.recommend(&profile, 6);
    let second = recommender.recommend(&profile, 6);
    assert_eq!(first, second);

    assert!(first
        .windows(2)
        .all(|pair| pair[0].total_score >= pair[1].total_score));

    let order: Vec<u32> = first.iter().map(|r| r.university.id).collect();
    assert_eq!(order, vec![40, 10, 20, 30, 50, 60]);
    assert_eq!(first[0].total_score, 50);
}

#[test]
fn test_budget_below_every_minimum_is_empty() {
    let recommender = recommender();
    let profile = UserProfile {
        max_budget: Some(300.0),
        ..engineer_profile()
    };

    assert!(recommender.recommend(&profile, 3).is_empty());
}

#[test]
fn test_unmapped_career_goal_scores_zero_for_alignment() {
    let recommender = recommender();
    let profile = UserProfile {
        career_goal: "astronaut".to_string(),
        ..engineer_profile()
    };

    let results = recommender.recommend(&profile, 3);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.breakdown.career_alignment == 0));
    assert_eq!(results[0].university.id, 10);
    assert_eq!(results[0].total_score, 55);
}

#[test]
fn test_lookup_miss_is_distinct_from_sparse_record() {
    let recommender = recommender();
    let catalog = recommender.catalog();

    assert!(catalog.get_by_id(999).is_none());

    let sparse = catalog.get_by_id(50).unwrap();
    assert!(sparse.faculties.is_empty());
    assert_eq!(sparse.location.as_deref(), Some("Battambang"));
}

#[test]
fn test_shared_catalog_across_threads() {
    let recommender = Arc::new(recommender());
    let expected = ids(&recommender, &engineer_profile(), 3);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let recommender = Arc::clone(&recommender);
            std::thread::spawn(move || ids(&recommender, &engineer_profile(), 3))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
