// ============================================================================
// APP STATE - Estado de la página (Rc<RefCell>, un solo hilo de UI)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use crate::models::{
    AttendanceLog, DashboardCounters, DatasetInfo, DatasetTab, ModalId, NotificationStack,
    NotificationTiming, Person, Section, SelectedPerson, SystemSettings,
};
use crate::state::tasks::TaskScopes;
use crate::utils::time::today_iso;

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo
    FullRender,
}

/// Parte de la página que hay que sincronizar con el estado
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Sección activa, botón activo y título
    Navigation,
    Modal(ModalId),
    Dashboard,
    Persons,
    /// Limpiar el formulario de alta de persona
    PersonFormCleared,
    Logs,
    Datasets,
    DatasetTab,
    /// Hover de drag & drop sobre la zona de subida
    DropZone,
    /// Limpiar el input de archivo del dataset
    DatasetUploadCleared,
    /// Label de estado + última persona reconocida
    Attendance,
    Camera,
    Settings,
    Clock,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    // Navegación
    pub active_section: Rc<RefCell<Section>>,

    // Modales
    pub open_modals: Rc<RefCell<HashSet<ModalId>>>,
    pub selected_person: Rc<RefCell<Option<SelectedPerson>>>,

    // Recursos
    pub persons: Rc<RefCell<Vec<Person>>>,
    pub logs: Rc<RefCell<Vec<AttendanceLog>>>,
    pub log_date: Rc<RefCell<String>>,
    pub log_person_filter: Rc<RefCell<Option<String>>>,
    /// Fecha de la última carga de logs aplicada
    pub logs_loaded_for: Rc<RefCell<Option<String>>>,
    pub datasets: Rc<RefCell<Vec<DatasetInfo>>>,
    pub dataset_tab: Rc<RefCell<DatasetTab>>,
    pub drop_zone_hover: Rc<RefCell<bool>>,
    pub settings: Rc<RefCell<Option<SystemSettings>>>,

    // Dashboard + asistencia
    pub dashboard: Rc<RefCell<DashboardCounters>>,
    pub attendance_status: Rc<RefCell<String>>,
    pub last_person: Rc<RefCell<Option<String>>>,
    pub marking_in_flight: Rc<RefCell<bool>>,
    pub clock_label: Rc<RefCell<String>>,

    pub notifications: Rc<RefCell<NotificationStack>>,
    pub scopes: TaskScopes,
}

impl AppState {
    /// Crear nuevo estado de aplicación (fecha de logs = hoy)
    pub fn new(timing: NotificationTiming) -> Self {
        Self::with_log_date(today_iso(), timing)
    }

    pub fn with_log_date(log_date: String, timing: NotificationTiming) -> Self {
        Self {
            active_section: Rc::new(RefCell::new(Section::Dashboard)),
            open_modals: Rc::new(RefCell::new(HashSet::new())),
            selected_person: Rc::new(RefCell::new(None)),
            persons: Rc::new(RefCell::new(Vec::new())),
            logs: Rc::new(RefCell::new(Vec::new())),
            log_date: Rc::new(RefCell::new(log_date)),
            log_person_filter: Rc::new(RefCell::new(None)),
            logs_loaded_for: Rc::new(RefCell::new(None)),
            datasets: Rc::new(RefCell::new(Vec::new())),
            dataset_tab: Rc::new(RefCell::new(DatasetTab::default())),
            drop_zone_hover: Rc::new(RefCell::new(false)),
            settings: Rc::new(RefCell::new(None)),
            dashboard: Rc::new(RefCell::new(DashboardCounters::default())),
            attendance_status: Rc::new(RefCell::new("Ready".to_string())),
            last_person: Rc::new(RefCell::new(None)),
            marking_in_flight: Rc::new(RefCell::new(false)),
            clock_label: Rc::new(RefCell::new(String::new())),
            notifications: Rc::new(RefCell::new(NotificationStack::new(timing))),
            scopes: TaskScopes::new(),
        }
    }

    pub fn active_section(&self) -> Section {
        *self.active_section.borrow()
    }

    pub fn is_modal_open(&self, modal: ModalId) -> bool {
        self.open_modals.borrow().contains(&modal)
    }

    pub fn selected_person(&self) -> Option<SelectedPerson> {
        self.selected_person.borrow().clone()
    }

    pub fn log_date(&self) -> String {
        self.log_date.borrow().clone()
    }

    pub fn attendance_status(&self) -> String {
        self.attendance_status.borrow().clone()
    }

    pub fn last_person(&self) -> Option<String> {
        self.last_person.borrow().clone()
    }

    pub fn set_attendance_status(&self, status: &str) {
        *self.attendance_status.borrow_mut() = status.to_string();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NotificationTiming::default())
    }
}
