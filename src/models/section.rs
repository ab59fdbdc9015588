use serde::{Deserialize, Serialize};

/// Secciones de la SPA - exactamente una activa
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Attendance,
    Persons,
    Logs,
    Datasets,
    Settings,
}

impl Section {
    /// Orden del menú lateral
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Attendance,
        Section::Persons,
        Section::Logs,
        Section::Datasets,
        Section::Settings,
    ];

    /// Clave estable (id del elemento y `data-section` del botón)
    pub fn key(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Attendance => "attendance",
            Section::Persons => "persons",
            Section::Logs => "logs",
            Section::Datasets => "datasets",
            Section::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Título del header
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Attendance => "Mark Attendance",
            Section::Persons => "Persons",
            Section::Logs => "Attendance Logs",
            Section::Datasets => "Dataset Management",
            Section::Settings => "Settings",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Dashboard => "📊 Dashboard",
            Section::Attendance => "📷 Attendance",
            Section::Persons => "👥 Persons",
            Section::Logs => "📋 Logs",
            Section::Datasets => "📦 Datasets",
            Section::Settings => "⚙️ Settings",
        }
    }
}

/// Modales (overlays) de la app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    AddPerson,
    UploadImages,
}

impl ModalId {
    pub const ALL: [ModalId; 2] = [ModalId::AddPerson, ModalId::UploadImages];

    pub fn element_id(self) -> &'static str {
        match self {
            ModalId::AddPerson => "add-person-modal",
            ModalId::UploadImages => "upload-images-modal",
        }
    }
}

/// Pestañas de la sección de datasets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DatasetTab {
    #[default]
    Available,
    Upload,
}

impl DatasetTab {
    pub const ALL: [DatasetTab; 2] = [DatasetTab::Available, DatasetTab::Upload];

    pub fn label(self) -> &'static str {
        match self {
            DatasetTab::Available => "Available Datasets",
            DatasetTab::Upload => "Upload Local Dataset",
        }
    }
}
