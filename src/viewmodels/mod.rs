// ============================================================================
// VIEWMODELS - Lógica de presentación, sin DOM
// ============================================================================
// Cada viewmodel recibe el `AppContext` y solo habla con los traits de
// plataforma, así que se prueba entero con los fakes de `testing`.
// ============================================================================

pub mod context;
pub mod camera_viewmodel;
pub mod modal_viewmodel;
pub mod navigation_viewmodel;
pub mod dashboard_viewmodel;
pub mod attendance_viewmodel;
pub mod persons_viewmodel;
pub mod logs_viewmodel;
pub mod datasets_viewmodel;
pub mod settings_viewmodel;
pub mod clock_viewmodel;

pub use context::AppContext;
pub use modal_viewmodel::ModalViewModel;
pub use navigation_viewmodel::NavigationViewModel;
pub use dashboard_viewmodel::DashboardViewModel;
pub use attendance_viewmodel::AttendanceViewModel;
pub use persons_viewmodel::PersonsViewModel;
pub use logs_viewmodel::LogsViewModel;
pub use datasets_viewmodel::DatasetsViewModel;
pub use settings_viewmodel::SettingsViewModel;
pub use clock_viewmodel::ClockViewModel;
