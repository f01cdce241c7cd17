use crate::domain::model::University;
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// In-memory university catalog, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    universities: Vec<Arc<University>>,
    id_index: HashMap<u32, Arc<University>>,
}

impl CatalogStore {
    /// 載入失敗時回傳空目錄並記錄錯誤，不中斷呼叫端
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::info!(
                    "📚 Loaded {} universities from {}",
                    store.len(),
                    path.display()
                );
                store
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load catalog from {}: {} (continuing with an empty catalog)",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let universities: Vec<University> = serde_json::from_str(content)?;
        Ok(Self::from_universities(universities))
    }

    pub fn from_universities(universities: Vec<University>) -> Self {
        let universities: Vec<Arc<University>> = universities.into_iter().map(Arc::new).collect();
        let id_index = Self::build_id_index(&universities);
        Self {
            universities,
            id_index,
        }
    }

    // 重複的 id：後出現的記錄覆蓋索引，列舉順序不變
    fn build_id_index(universities: &[Arc<University>]) -> HashMap<u32, Arc<University>> {
        let mut index = HashMap::with_capacity(universities.len());
        for university in universities {
            if index.insert(university.id, Arc::clone(university)).is_some() {
                tracing::warn!(
                    "⚠️ Duplicate university id {} in catalog, later record wins for lookup",
                    university.id
                );
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

impl Catalog for CatalogStore {
    fn list_all(&self) -> &[Arc<University>] {
        &self.universities
    }

    fn get_by_id(&self, id: u32) -> Option<Arc<University>> {
        self.id_index.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {"id": 3, "location": "Phnom Penh", "tuition_fees": {"range_min": 400, "range_max": 900}},
        {"id": 1, "location": "Siem Reap"},
        {"id": 2}
    ]"#;

    #[test]
    fn test_list_all_preserves_load_order() {
        let store = CatalogStore::from_json_str(SAMPLE).unwrap();
        let ids: Vec<u32> = store.list_all().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_by_id_hit_and_miss() {
        let store = CatalogStore::from_json_str(SAMPLE).unwrap();

        let found = store.get_by_id(2).unwrap();
        assert_eq!(found.id, 2);
        assert!(found.location.is_none());
        assert!(found.faculties.is_empty());

        assert!(store.get_by_id(99).is_none());
    }

    #[test]
    fn test_load_missing_file_yields_empty_catalog() {
        let store = CatalogStore::load("/definitely/not/here/universities.json");
        assert!(store.is_empty());
        assert!(store.get_by_id(1).is_none());
    }

    #[test]
    fn test_load_malformed_json_yields_empty_catalog() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{ not json ").unwrap();

        let store = CatalogStore::load(temp_file.path());
        assert!(store.is_empty());
        assert!(CatalogStore::try_load(temp_file.path()).is_err());
    }

    #[test]
    fn test_duplicate_ids_keep_order_and_last_wins_lookup() {
        let store = CatalogStore::from_json_str(
            r#"[{"id": 7, "location": "A"}, {"id": 7, "location": "B"}]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_by_id(7).unwrap().location.as_deref(), Some("B"));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = CatalogStore::load(temp_file.path());
        assert_eq!(store.len(), 3);
        assert_eq!(store.get_by_id(3).unwrap().range_max(), Some(900.0));
    }
}
