pub mod api;
pub mod section;
pub mod person;
pub mod attendance;
pub mod dataset;
pub mod settings;
pub mod camera;
pub mod notification;

pub use api::{Ack, ApiError, ApiResult};
pub use section::{DatasetTab, ModalId, Section};
pub use person::{CreatedPerson, NewPersonRequest, Person, PersonsPayload, SelectedPerson};
pub use attendance::{
    AttendanceLog, AttendanceOutcome, AttendanceStatsPayload, DashboardCounters, LogsPayload,
    LogsQuery, MarkAttendancePayload, ModelStatusPayload, TrainPayload,
};
pub use dataset::{DatasetInfo, DatasetsPayload};
pub use settings::{SettingsPayload, SystemSettings};
pub use camera::{CameraError, CameraPhase, CapturedFrame};
pub use notification::{Notification, NotificationStack, NotificationTiming, Severity};
