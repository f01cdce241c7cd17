use crate::domain::model::{CareerPath, Recommendation};
use crate::utils::error::{GuideError, Result};

const CSV_HEADER: [&str; 12] = [
    "rank",
    "id",
    "name",
    "location",
    "range_min",
    "range_max",
    "total_score",
    "major_match",
    "career_alignment",
    "budget_headroom",
    "english_readiness",
    "specialization",
];

const CAREER_CSV_HEADER: [&str; 4] = ["level", "title", "roles", "salary"];
const CAREER_LEVELS: [&str; 3] = ["entry", "mid", "senior"];

pub fn to_json(recommendations: &[Recommendation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recommendations)?)
}

pub fn to_csv(recommendations: &[Recommendation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    let optional = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    for (index, rec) in recommendations.iter().enumerate() {
        let uni = &rec.university;
        let b = &rec.breakdown;
        writer.write_record([
            (index + 1).to_string(),
            uni.id.to_string(),
            uni.display_name(),
            uni.location.clone().unwrap_or_default(),
            optional(uni.range_min()),
            optional(uni.range_max()),
            rec.total_score.to_string(),
            b.major_match.to_string(),
            b.career_alignment.to_string(),
            b.budget_headroom.to_string(),
            b.english_readiness.to_string(),
            b.specialization.to_string(),
        ])?;
    }

    finish_csv(writer)
}

pub fn career_path_to_json(path: &CareerPath) -> Result<String> {
    Ok(serde_json::to_string_pretty(path)?)
}

/// One row per career level. The path title and trend are left to the JSON form.
pub fn career_path_to_csv(path: &CareerPath) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CAREER_CSV_HEADER)?;

    for (name, level) in CAREER_LEVELS.iter().zip(path.levels()) {
        writer.write_record([
            *name,
            level.title.as_str(),
            level.roles.as_str(),
            level.salary.as_str(),
        ])?;
    }

    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = writer.into_inner().map_err(|e| GuideError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;

    String::from_utf8(data).map_err(|e| GuideError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
