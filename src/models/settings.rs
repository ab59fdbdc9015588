use serde::{Deserialize, Serialize};

/// Configuración del servidor (solo lectura)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub datasets_dir: String,
    pub models_dir: String,
    pub logs_dir: String,
    pub camera_enabled: bool,
}

impl SystemSettings {
    /// Filas (etiqueta, valor) para la vista
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Datasets directory", self.datasets_dir.clone()),
            ("Models directory", self.models_dir.clone()),
            ("Logs directory", self.logs_dir.clone()),
            (
                "Camera",
                if self.camera_enabled { "Enabled" } else { "Disabled" }.to_string(),
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsPayload {
    pub settings: Option<SystemSettings>,
}
