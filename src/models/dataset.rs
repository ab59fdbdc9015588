use serde::{Deserialize, Serialize};

/// Dataset público que el backend sabe importar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub people_count: u32,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub source: Option<String>,
}

impl DatasetInfo {
    pub fn people_label(&self) -> String {
        format!("👥 {} people", self.people_count)
    }

    pub fn size_label(&self) -> String {
        format!("📦 {}", self.size)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatasetsPayload {
    pub datasets: Vec<DatasetInfo>,
}

#[derive(Debug, Serialize)]
pub struct DownloadDatasetRequest<'a> {
    pub dataset_name: &'a str,
}
