use crate::domain::model::{ScoreBreakdown, University, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const MAJOR_MATCH_POINTS: u32 = 5;
pub const MAJOR_MATCH_CAP: u32 = 30;
pub const CAREER_ALIGNMENT_POINTS: u32 = 25;
pub const AMPLE_HEADROOM: f64 = 500.0;
pub const AMPLE_HEADROOM_POINTS: u32 = 20;
pub const SOME_HEADROOM_POINTS: u32 = 10;
pub const ENGLISH_READINESS_POINTS: u32 = 15;
pub const SPECIALIZATION_POINTS: u32 = 20;
pub const DEFAULT_ENGLISH_THRESHOLD: u8 = 8;

/// Lookup data behind the scoring terms, kept apart from the scoring rules so
/// it can be swapped through configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    /// career goal label -> subject category
    pub career_goals: BTreeMap<String, String>,
    /// subject category -> specialist university ids
    pub specialists: BTreeMap<String, Vec<u32>>,
    pub english_medium: BTreeSet<u32>,
    pub english_threshold: u8,
}

impl Default for ScoringTables {
    fn default() -> Self {
        let career_goals = [
            ("វិស្វករ", "វិស្វកម្ម"),
            ("អ្នកគ្រប់គ្រង", "ធុរកិច្ច"),
            ("វេជ្ជបណ្ឌិត", "វេជ្ជសាស្ត្រ"),
            ("គ្រូបង្រៀន", "អប់រំ"),
            ("អ្នកច្បាប់", "ច្បាប់"),
        ]
        .into_iter()
        .map(|(goal, category)| (goal.to_string(), category.to_string()))
        .collect();

        let specialists = [
            ("វិស្វកម្ម", vec![10, 27]),
            ("បច្ចេកវិទ្យា", vec![10, 27]),
            ("វេជ្ជសាស្ត្រ", vec![14, 15]),
            ("សុខភាព", vec![14, 15]),
            ("ច្បាប់", vec![12]),
            ("ធុរកិច្ច", vec![16, 35]),
        ]
        .into_iter()
        .map(|(category, ids)| (category.to_string(), ids))
        .collect();

        Self {
            career_goals,
            specialists,
            english_medium: [4, 28, 36, 32].into_iter().collect(),
            english_threshold: DEFAULT_ENGLISH_THRESHOLD,
        }
    }
}

impl ScoringTables {
    pub fn target_category(&self, career_goal: &str) -> Option<&str> {
        self.career_goals.get(career_goal).map(String::as_str)
    }

    /// A catalog flag or a table entry is enough.
    pub fn is_specialist(&self, university: &University, field: &str) -> bool {
        university.specialist_fields.iter().any(|f| f == field)
            || self
                .specialists
                .get(field)
                .is_some_and(|ids| ids.contains(&university.id))
    }

    pub fn is_english_medium(&self, university: &University) -> bool {
        university.english_medium || self.english_medium.contains(&university.id)
    }
}

pub fn major_match_score(university: &University, core_field: &str) -> u32 {
    let count = university
        .majors()
        .filter(|major| major.category_km.as_deref() == Some(core_field))
        .count() as u32;
    count.saturating_mul(MAJOR_MATCH_POINTS).min(MAJOR_MATCH_CAP)
}

pub fn career_alignment_score(
    university: &University,
    career_goal: &str,
    tables: &ScoringTables,
) -> u32 {
    let Some(target) = tables.target_category(career_goal) else {
        return 0;
    };

    if university
        .majors()
        .any(|major| major.category_km.as_deref() == Some(target))
    {
        CAREER_ALIGNMENT_POINTS
    } else {
        0
    }
}

pub fn budget_headroom_score(university: &University, max_budget: Option<f64>) -> u32 {
    let (Some(budget), Some(range_max)) = (max_budget, university.range_max()) else {
        return 0;
    };

    let buffer = budget - range_max;
    if buffer > AMPLE_HEADROOM {
        AMPLE_HEADROOM_POINTS
    } else if buffer > 0.0 {
        SOME_HEADROOM_POINTS
    } else {
        0
    }
}

pub fn english_readiness_score(
    university: &University,
    english_proficiency: u8,
    tables: &ScoringTables,
) -> u32 {
    if english_proficiency >= tables.english_threshold && tables.is_english_medium(university) {
        ENGLISH_READINESS_POINTS
    } else {
        0
    }
}

pub fn specialization_score(university: &University, core_field: &str, tables: &ScoringTables) -> u32 {
    if tables.is_specialist(university, core_field) {
        SPECIALIZATION_POINTS
    } else {
        0
    }
}

/// Scores one candidate. Every term is evaluated; none can exclude.
pub fn score(university: &University, profile: &UserProfile, tables: &ScoringTables) -> ScoreBreakdown {
    ScoreBreakdown {
        major_match: major_match_score(university, &profile.core_field),
        career_alignment: career_alignment_score(university, &profile.career_goal, tables),
        budget_headroom: budget_headroom_score(university, profile.max_budget),
        english_readiness: english_readiness_score(university, profile.english_proficiency, tables),
        specialization: specialization_score(university, &profile.core_field, tables),
    }
}
