use crate::domain::model::{CareerLevel, CareerPath};
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Career ladders keyed by subject category. A `[careers]` table in the
/// configuration replaces the built-in set as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareerPaths {
    paths: BTreeMap<String, CareerPath>,
}

impl CareerPaths {
    pub fn new(paths: BTreeMap<String, CareerPath>) -> Self {
        Self { paths }
    }

    /// `None` when no ladder is known for `field`.
    pub fn career_path(&self, field: &str) -> Option<&CareerPath> {
        self.paths.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn level(title: &str, roles: &str, salary: &str) -> CareerLevel {
    CareerLevel {
        title: title.to_string(),
        roles: roles.to_string(),
        salary: salary.to_string(),
    }
}

impl Default for CareerPaths {
    fn default() -> Self {
        let mut paths = BTreeMap::new();

        paths.insert(
            "បច្ចេកវិទ្យា".to_string(),
            CareerPath {
                title: "🚀 ស្វែងយល់ពីអាជីពក្នុងវិស័យបច្ចេកវិទ្យា".to_string(),
                entry_level: level(
                    "កម្រិតដំបូង (0-2 ឆ្នាំ)",
                    "Software Developer, IT Support, QA Tester",
                    "$400 - $700",
                ),
                mid_level: level(
                    "កម្រិតកណ្តាល (3-5 ឆ្នាំ)",
                    "Senior Developer, DevOps Engineer, Project Manager",
                    "$800 - $1,500",
                ),
                senior_level: level(
                    "កម្រិតខ្ពស់ (5+ ឆ្នាំ)",
                    "Tech Lead, IT Manager, Solutions Architect",
                    "$1,500+",
                ),
                future_trend: "ជំនាញ FinTech, E-commerce និង Data Science កំពុងមានតម្រូវការខ្ពស់។"
                    .to_string(),
            },
        );

        paths.insert(
            "ធុរកិច្ច".to_string(),
            CareerPath {
                title: "📈 ស្វែងយល់ពីអាជីពក្នុងវិស័យធុរកិច្ច".to_string(),
                entry_level: level(
                    "កម្រិតដំបូង (0-2 ឆ្នាំ)",
                    "Marketing Officer, Accountant, HR Assistant",
                    "$350 - $600",
                ),
                mid_level: level(
                    "កម្រិតកណ្តាល (3-5 ឆ្នាំ)",
                    "Senior Accountant, Marketing Manager, Operations Manager",
                    "$700 - $1,400",
                ),
                senior_level: level(
                    "កម្រិតខ្ពស់ (5+ ឆ្នាំ)",
                    "Finance Director, Head of Marketing, COO",
                    "$1,400+",
                ),
                future_trend:
                    "ជំនាញ Digital Marketing និង Data Analysis for Business កំពុងមានតម្រូវការខ្លាំង។"
                        .to_string(),
            },
        );

        paths.insert(
            "សុខាភិបាល".to_string(),
            CareerPath {
                title: "🩺 ស្វែងយល់ពីអាជីពក្នុងវិស័យសុខាភិបាល".to_string(),
                entry_level: level(
                    "កម្រិតដំបូង",
                    "គិលានុបដ្ឋាក, ជំនួយការមន្ទីរពិសោធន៍",
                    "$300 - $550",
                ),
                mid_level: level(
                    "កម្រិតកណ្តាល",
                    "ប្រធានគិលានុបដ្ឋាក, អ្នកឯកទេសមន្ទីរពិសោធន៍, វេជ្ជបណ្ឌិតទូទៅ",
                    "$600 - $1,200+",
                ),
                senior_level: level(
                    "កម្រិតខ្ពស់",
                    "ប្រធានផ្នែក, វេជ្ជបណ្ឌិតឯកទេស, អ្នកគ្រប់គ្រងមន្ទីរពេទ្យ",
                    "ប្រែប្រួលខ្លាំង",
                ),
                future_trend: "វិស័យសុខភាពសាធារណៈ និងការគ្រប់គ្រងប្រព័ន្ធសុខាភិបាលកំពុងរីកចម្រើន។"
                    .to_string(),
            },
        );

        Self { paths }
    }
}

impl Validate for CareerPaths {
    fn validate(&self) -> Result<()> {
        for (field, path) in &self.paths {
            if field.trim().is_empty() {
                return Err(GuideError::InvalidConfigValueError {
                    field: "careers".to_string(),
                    value: field.clone(),
                    reason: "Career field name cannot be empty".to_string(),
                });
            }

            validate_non_empty_string(&format!("careers.{}.title", field), &path.title)?;
            for level in path.levels() {
                validate_non_empty_string(&format!("careers.{}.roles", field), &level.roles)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_cover_builtin_fields() {
        let careers = CareerPaths::default();

        assert_eq!(careers.len(), 3);
        let fields: Vec<&str> = careers.fields().collect();
        assert!(fields.contains(&"បច្ចេកវិទ្យា"));
        assert!(fields.contains(&"ធុរកិច្ច"));
        assert!(fields.contains(&"សុខាភិបាល"));
        assert!(careers.validate().is_ok());
    }

    #[test]
    fn test_lookup_known_field() {
        let careers = CareerPaths::default();
        let tech = careers.career_path("បច្ចេកវិទ្យា").unwrap();

        assert_eq!(tech.entry_level.salary, "$400 - $700");
        assert_eq!(tech.senior_level.roles, "Tech Lead, IT Manager, Solutions Architect");
        assert!(tech.future_trend.contains("Data Science"));
    }

    #[test]
    fn test_unknown_field_is_none() {
        let careers = CareerPaths::default();

        assert!(careers.career_path("ច្បាប់").is_none());
        assert!(careers.career_path("").is_none());
    }

    #[test]
    fn test_blank_roles_fail_validation() {
        let mut path = CareerPaths::default()
            .career_path("ធុរកិច្ច")
            .cloned()
            .unwrap();
        path.mid_level.roles = " ".to_string();

        let careers = CareerPaths::new(BTreeMap::from([("ធុរកិច្ច".to_string(), path)]));
        assert!(careers.validate().is_err());
    }
}
