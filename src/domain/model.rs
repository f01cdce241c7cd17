use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_amount, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Location value meaning "no location preference".
pub const ANY_LOCATION: &str = "Any";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuitionFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Major {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_km: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_km: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_km: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub majors: Vec<Major>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
}

/// One catalog entry. Everything except `id` is optional so that incomplete
/// records still load and simply score lower.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_km: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition_fees: Option<TuitionFees>,
    #[serde(default)]
    pub faculties: Vec<Faculty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub english_medium: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialist_fields: Vec<String>,
}

impl University {
    pub fn range_min(&self) -> Option<f64> {
        self.tuition_fees.as_ref().and_then(|fees| fees.range_min)
    }

    pub fn range_max(&self) -> Option<f64> {
        self.tuition_fees.as_ref().and_then(|fees| fees.range_max)
    }

    /// Majors across all faculties, in catalog order.
    pub fn majors(&self) -> impl Iterator<Item = &Major> {
        self.faculties.iter().flat_map(|faculty| faculty.majors.iter())
    }

    pub fn display_name(&self) -> String {
        self.name_km
            .clone()
            .or_else(|| self.name_en.clone())
            .unwrap_or_else(|| format!("University #{}", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<f64>,
    pub core_field: String,
    pub career_goal: String,
    pub english_proficiency: u8,
}

impl UserProfile {
    /// The location to filter on, if any. Empty strings and the "Any"
    /// sentinel both mean no preference.
    pub fn location_filter(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|location| !location.is_empty() && *location != ANY_LOCATION)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub major_match: u32,
    pub career_alignment: u32,
    pub budget_headroom: u32,
    pub english_readiness: u32,
    pub specialization: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.major_match
            + self.career_alignment
            + self.budget_headroom
            + self.english_readiness
            + self.specialization
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub university: Arc<University>,
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
}

impl Recommendation {
    pub fn new(university: Arc<University>, breakdown: ScoreBreakdown) -> Self {
        Self {
            university,
            total_score: breakdown.total(),
            breakdown,
        }
    }
}

/// One rung of a career ladder: roles and a salary band, both free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerLevel {
    pub title: String,
    pub roles: String,
    pub salary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub entry_level: CareerLevel,
    pub mid_level: CareerLevel,
    pub senior_level: CareerLevel,
    #[serde(default)]
    pub future_trend: String,
}

impl CareerPath {
    /// Entry, mid and senior levels in that order.
    pub fn levels(&self) -> [&CareerLevel; 3] {
        [&self.entry_level, &self.mid_level, &self.senior_level]
    }
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<()> {
        if let Some(budget) = self.max_budget {
            validate_positive_amount("max_budget", budget)?;
        }
        validate_non_empty_string("core_field", &self.core_field)?;
        validate_non_empty_string("career_goal", &self.career_goal)?;
        validate_range("english_proficiency", self.english_proficiency, 1, 10)?;
        Ok(())
    }
}
