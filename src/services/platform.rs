// ============================================================================
// PLATFORM - Contratos entre viewmodels y el navegador
// ============================================================================
// Los viewmodels solo conocen estos traits; el navegador (gloo-net, web-sys)
// se inyecta vía `Platform`. En tests se sustituyen por fakes en memoria.
// ============================================================================

use crate::models::{
    Ack, ApiResult, AttendanceStatsPayload, CameraError, CapturedFrame, CreatedPerson,
    DatasetsPayload, LogsPayload, LogsQuery, MarkAttendancePayload, ModelStatusPayload,
    Notification, PersonsPayload, SettingsPayload, TrainPayload,
};
use crate::state::IncrementalUpdate;

/// Archivo elegido por el usuario (input file o drag & drop)
pub trait UploadFile {
    fn name(&self) -> String;
}

/// Backend REST (`/api`). Un método por endpoint.
#[allow(async_fn_in_trait)]
pub trait AttendanceApi {
    type File: UploadFile;

    async fn list_persons(&self) -> ApiResult<PersonsPayload>;
    async fn create_person(&self, name: &str) -> ApiResult<CreatedPerson>;
    async fn delete_person(&self, person_id: &str) -> ApiResult<Ack>;
    async fn upload_image(&self, person_id: &str, file: &Self::File) -> ApiResult<Ack>;

    async fn model_status(&self) -> ApiResult<ModelStatusPayload>;
    async fn train_model(&self) -> ApiResult<TrainPayload>;

    async fn attendance_stats(&self) -> ApiResult<AttendanceStatsPayload>;
    async fn mark_attendance(&self, image_base64: &str) -> ApiResult<MarkAttendancePayload>;
    async fn attendance_logs(&self, query: &LogsQuery) -> ApiResult<LogsPayload>;

    async fn available_datasets(&self) -> ApiResult<DatasetsPayload>;
    async fn download_dataset(&self, dataset_name: &str) -> ApiResult<Ack>;
    async fn import_local_dataset(&self, file: &Self::File) -> ApiResult<Ack>;

    async fn settings(&self) -> ApiResult<SettingsPayload>;
}

/// Dispositivo de captura de video
#[allow(async_fn_in_trait)]
pub trait CameraDevice {
    type Stream;

    /// Pedir acceso solo a video
    async fn request_video(&self) -> Result<Self::Stream, CameraError>;

    /// Enlazar el stream al elemento de previsualización
    fn bind_preview(&self, stream: &Self::Stream) -> Result<(), CameraError>;

    /// Dibujar el frame actual a resolución nativa y codificarlo
    fn capture(&self, stream: &Self::Stream, mime: &str) -> Result<CapturedFrame, CameraError>;

    /// Detener todas las pistas del stream
    fn release(&self, stream: Self::Stream);
}

/// Superficie de render
pub trait Ui {
    fn update(&self, update: IncrementalUpdate);
    fn show_notification(&self, notification: &Notification);
}

/// Agrupa las implementaciones concretas de una plataforma
pub trait Platform: 'static {
    type Api: AttendanceApi;
    type Camera: CameraDevice;
    type Ui: Ui;
}
