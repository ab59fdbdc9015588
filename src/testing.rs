// ============================================================================
// TESTING - Fakes en memoria para los traits de plataforma (solo cfg(test))
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use serde::de::DeserializeOwned;
use crate::models::api::decode_envelope;
use crate::models::{
    Ack, ApiError, ApiResult, AttendanceStatsPayload, CameraError, CapturedFrame, CreatedPerson,
    DatasetsPayload, LogsPayload, LogsQuery, MarkAttendancePayload, ModelStatusPayload,
    Notification, NotificationTiming, PersonsPayload, SettingsPayload, Severity, TrainPayload,
};
use crate::services::platform::{AttendanceApi, CameraDevice, Platform, Ui, UploadFile};
use crate::state::{AppState, IncrementalUpdate};
use crate::viewmodels::context::{AppContext, ControllerOptions};

pub const TEST_LOG_DATE: &str = "2024-05-01";

/// Cede el control una vez, para que `join!` pueda intercalar tareas
#[derive(Default)]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

// ============================================================================
// API
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FakeFile(pub String);

impl UploadFile for FakeFile {
    fn name(&self) -> String {
        self.0.clone()
    }
}

#[derive(Clone)]
enum Reply {
    Body(String),
    Fail(ApiError),
}

/// Backend guionizado. Las claves son `"MÉTODO /ruta"`, con los parámetros
/// como query (`"GET /attendance-logs?date=2024-05-01"`). Una clave con query
/// sin respuesta propia usa la de su ruta; sin ninguna, `{"status":"success"}`.
#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<HashMap<String, Reply>>,
    calls: RefCell<Vec<String>>,
    last_image: RefCell<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, key: &str, body: serde_json::Value) {
        self.replies
            .borrow_mut()
            .insert(key.to_string(), Reply::Body(body.to_string()));
    }

    pub fn fail(&self, key: &str, error: ApiError) {
        self.replies
            .borrow_mut()
            .insert(key.to_string(), Reply::Fail(error));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Llamadas a una ruta, con o sin query
    pub fn count(&self, key: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == key || call.starts_with(&format!("{}?", key)))
            .count()
    }

    pub fn last_image(&self) -> Option<String> {
        self.last_image.borrow().clone()
    }

    async fn call<T: DeserializeOwned>(&self, key: String) -> ApiResult<T> {
        self.calls.borrow_mut().push(key.clone());
        YieldNow::default().await;

        let path = key.split('?').next().unwrap_or(&key).to_string();
        let reply = {
            let replies = self.replies.borrow();
            replies.get(&key).or_else(|| replies.get(&path)).cloned()
        };
        match reply {
            Some(Reply::Body(body)) => decode_envelope(200, "OK", &body),
            Some(Reply::Fail(error)) => Err(error),
            None => decode_envelope(200, "OK", r#"{"status":"success"}"#),
        }
    }
}

impl AttendanceApi for FakeApi {
    type File = FakeFile;

    async fn list_persons(&self) -> ApiResult<PersonsPayload> {
        self.call("GET /persons".to_string()).await
    }

    async fn create_person(&self, name: &str) -> ApiResult<CreatedPerson> {
        self.call(format!("POST /persons?name={}", name)).await
    }

    async fn delete_person(&self, person_id: &str) -> ApiResult<Ack> {
        self.call(format!("DELETE /persons/{}", person_id)).await
    }

    async fn upload_image(&self, person_id: &str, file: &FakeFile) -> ApiResult<Ack> {
        self.call(format!("POST /upload-image?person_id={}&file={}", person_id, file.0))
            .await
    }

    async fn model_status(&self) -> ApiResult<ModelStatusPayload> {
        self.call("GET /model-status".to_string()).await
    }

    async fn train_model(&self) -> ApiResult<TrainPayload> {
        self.call("POST /train-model".to_string()).await
    }

    async fn attendance_stats(&self) -> ApiResult<AttendanceStatsPayload> {
        self.call("GET /attendance-stats".to_string()).await
    }

    async fn mark_attendance(&self, image_base64: &str) -> ApiResult<MarkAttendancePayload> {
        *self.last_image.borrow_mut() = Some(image_base64.to_string());
        self.call("POST /mark-attendance".to_string()).await
    }

    async fn attendance_logs(&self, query: &LogsQuery) -> ApiResult<LogsPayload> {
        let params: Vec<String> = query
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        self.call(format!("GET /attendance-logs?{}", params.join("&"))).await
    }

    async fn available_datasets(&self) -> ApiResult<DatasetsPayload> {
        self.call("GET /datasets/available".to_string()).await
    }

    async fn download_dataset(&self, dataset_name: &str) -> ApiResult<Ack> {
        self.call(format!("POST /datasets/download?dataset_name={}", dataset_name))
            .await
    }

    async fn import_local_dataset(&self, file: &FakeFile) -> ApiResult<Ack> {
        self.call(format!("POST /datasets/import-local?file={}", file.0)).await
    }

    async fn settings(&self) -> ApiResult<SettingsPayload> {
        self.call("GET /settings".to_string()).await
    }
}

// ============================================================================
// CÁMARA
// ============================================================================

#[derive(Default)]
pub struct FakeCamera {
    failure: RefCell<Option<CameraError>>,
    requests: Cell<u32>,
    bound: Cell<u32>,
    captures: Cell<u32>,
    released: Cell<u32>,
}

impl FakeCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: CameraError) -> Self {
        let camera = Self::default();
        camera.set_failure(Some(error));
        camera
    }

    pub fn set_failure(&self, error: Option<CameraError>) {
        *self.failure.borrow_mut() = error;
    }

    pub fn requests(&self) -> u32 {
        self.requests.get()
    }

    pub fn bound(&self) -> u32 {
        self.bound.get()
    }

    pub fn captures(&self) -> u32 {
        self.captures.get()
    }

    pub fn released(&self) -> u32 {
        self.released.get()
    }
}

impl CameraDevice for FakeCamera {
    type Stream = u32;

    async fn request_video(&self) -> Result<u32, CameraError> {
        self.requests.set(self.requests.get() + 1);
        YieldNow::default().await;
        let failure = self.failure.borrow().clone();
        match failure {
            Some(error) => Err(error),
            None => Ok(self.requests.get()),
        }
    }

    fn bind_preview(&self, _stream: &u32) -> Result<(), CameraError> {
        self.bound.set(self.bound.get() + 1);
        Ok(())
    }

    fn capture(&self, _stream: &u32, mime: &str) -> Result<CapturedFrame, CameraError> {
        self.captures.set(self.captures.get() + 1);
        Ok(CapturedFrame {
            data_url: format!("data:{};base64,ZmFrZQ==", mime),
            width: 640,
            height: 480,
        })
    }

    fn release(&self, _stream: u32) {
        self.released.set(self.released.get() + 1);
    }
}

// ============================================================================
// UI
// ============================================================================

#[derive(Default)]
pub struct RecordingUi {
    updates: RefCell<Vec<IncrementalUpdate>>,
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingUi {
    pub fn updates(&self) -> Vec<IncrementalUpdate> {
        self.updates.borrow().clone()
    }

    pub fn saw(&self, update: IncrementalUpdate) -> bool {
        self.updates.borrow().contains(&update)
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.notifications
            .borrow()
            .iter()
            .map(|n| (n.severity, n.message.clone()))
            .collect()
    }

    pub fn clear(&self) {
        self.updates.borrow_mut().clear();
        self.notifications.borrow_mut().clear();
    }
}

impl Ui for RecordingUi {
    fn update(&self, update: IncrementalUpdate) {
        self.updates.borrow_mut().push(update);
    }

    fn show_notification(&self, notification: &Notification) {
        self.notifications.borrow_mut().push(notification.clone());
    }
}

pub struct TestPlatform;

impl Platform for TestPlatform {
    type Api = FakeApi;
    type Camera = FakeCamera;
    type Ui = RecordingUi;
}

pub fn context() -> AppContext<TestPlatform> {
    context_with(ControllerOptions::default())
}

pub fn context_with(options: ControllerOptions) -> AppContext<TestPlatform> {
    AppContext::new(
        AppState::with_log_date(TEST_LOG_DATE.to_string(), NotificationTiming::default()),
        FakeApi::new(),
        FakeCamera::new(),
        RecordingUi::default(),
        options,
    )
}
