use crate::domain::model::{Recommendation, UserProfile};
use crate::domain::ports::Storage;
use crate::utils::error::{GuideError, Result};
use crate::utils::validation::validate_identifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResult {
    pub result_id: String,
    pub user_profile: UserProfile,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
}

/// 將推薦結果存成 JSON，供網頁端依 id 讀取
pub struct ResultStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ResultStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(result_id: &str) -> String {
        format!("result_{}.json", result_id)
    }

    /// Saves a run and returns its id. A random id is generated when none is given.
    pub async fn save(
        &self,
        user_profile: &UserProfile,
        recommendations: &[Recommendation],
        result_id: Option<&str>,
    ) -> Result<String> {
        let result_id = match result_id {
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().simple().to_string(),
        };
        validate_identifier("result_id", &result_id)?;

        let saved = SavedResult {
            result_id: result_id.clone(),
            user_profile: user_profile.clone(),
            recommendations: recommendations.to_vec(),
            timestamp: Utc::now(),
        };

        let data = serde_json::to_vec_pretty(&saved)?;
        let file_name = Self::file_name(&result_id);
        tracing::debug!("Writing result file {} ({} bytes)", file_name, data.len());
        self.storage.write_file(&file_name, &data).await?;

        tracing::info!("💾 Results saved as {}", file_name);
        Ok(result_id)
    }

    /// Missing results are `Ok(None)`; unreadable or malformed ones are errors.
    pub async fn get(&self, result_id: &str) -> Result<Option<SavedResult>> {
        validate_identifier("result_id", result_id)?;

        let file_name = Self::file_name(result_id);
        let data = match self.storage.read_file(&file_name).await {
            Ok(data) => data,
            Err(GuideError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Result file not found: {}", file_name);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let saved = serde_json::from_slice(&data)?;
        Ok(Some(saved))
    }
}
