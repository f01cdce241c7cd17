use crate::domain::model::{University, UserProfile};
use std::sync::Arc;

pub fn matches_location(university: &University, location: Option<&str>) -> bool {
    match location {
        Some(wanted) => university.location.as_deref() == Some(wanted),
        None => true,
    }
}

/// Floor check: the cheapest track must fit the budget. Records without a
/// known minimum are kept.
pub fn within_budget(university: &University, max_budget: Option<f64>) -> bool {
    match (max_budget, university.range_min()) {
        (Some(budget), Some(range_min)) => range_min <= budget,
        _ => true,
    }
}

/// Drops candidates that fail any active predicate, keeping catalog order.
pub fn hard_filter<'a>(
    candidates: &'a [Arc<University>],
    profile: &UserProfile,
) -> Vec<&'a Arc<University>> {
    let location = profile.location_filter();
    candidates
        .iter()
        .filter(|u| matches_location(u, location))
        .filter(|u| within_budget(u, profile.max_budget))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TuitionFees;

    fn uni(id: u32, location: Option<&str>, range_min: Option<f64>) -> Arc<University> {
        Arc::new(University {
            id,
            location: location.map(str::to_string),
            tuition_fees: Some(TuitionFees {
                range_min,
                range_max: None,
            }),
            ..Default::default()
        })
    }

    fn profile(location: Option<&str>, max_budget: Option<f64>) -> UserProfile {
        UserProfile {
            location: location.map(str::to_string),
            max_budget,
            core_field: "engineering".to_string(),
            career_goal: "engineer".to_string(),
            english_proficiency: 5,
        }
    }

    fn ids(filtered: &[&Arc<University>]) -> Vec<u32> {
        filtered.iter().map(|u| u.id).collect()
    }

    fn catalog() -> Vec<Arc<University>> {
        vec![
            uni(1, Some("Phnom Penh"), Some(500.0)),
            uni(2, Some("Siem Reap"), Some(300.0)),
            uni(3, Some("Phnom Penh"), Some(1500.0)),
            uni(4, None, Some(100.0)),
            uni(5, Some("phnom penh"), Some(100.0)),
        ]
    }

    #[test]
    fn test_location_is_exact_and_case_sensitive() {
        let catalog = catalog();
        let filtered = hard_filter(&catalog, &profile(Some("Phnom Penh"), None));
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_any_and_empty_location_skip_filter() {
        let catalog = catalog();
        assert_eq!(hard_filter(&catalog, &profile(Some("Any"), None)).len(), 5);
        assert_eq!(hard_filter(&catalog, &profile(Some(""), None)).len(), 5);
        assert_eq!(hard_filter(&catalog, &profile(None, None)).len(), 5);
    }

    #[test]
    fn test_budget_floor_is_inclusive() {
        let catalog = catalog();
        let filtered = hard_filter(&catalog, &profile(None, Some(500.0)));
        assert_eq!(ids(&filtered), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_unknown_minimum_is_not_excluded() {
        let catalog = vec![Arc::new(University {
            id: 9,
            ..Default::default()
        })];
        assert_eq!(hard_filter(&catalog, &profile(None, Some(10.0))).len(), 1);
    }

    #[test]
    fn test_filters_combine_and_preserve_order() {
        let catalog = catalog();
        let filtered = hard_filter(&catalog, &profile(Some("Phnom Penh"), Some(1000.0)));
        assert_eq!(ids(&filtered), vec![1]);
    }
}
