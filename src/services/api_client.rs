// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye la request, la envía y decodifica el
// envelope `{status, message, ...}`. Sin timeout ni cancelación: la petición
// resuelve, falla o queda pendiente.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::models::api::decode_envelope;
use crate::models::attendance::MarkAttendanceRequest;
use crate::models::dataset::DownloadDatasetRequest;
use crate::models::{
    Ack, ApiError, ApiResult, AttendanceStatsPayload, CreatedPerson, DatasetsPayload,
    LogsPayload, LogsQuery, MarkAttendancePayload, ModelStatusPayload, NewPersonRequest,
    PersonsPayload, SettingsPayload, TrainPayload,
};
use crate::services::platform::{AttendanceApi, UploadFile};

impl UploadFile for File {
    fn name(&self) -> String {
        File::name(self)
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Leer el cuerpo y decodificar el envelope (también en 4xx/5xx)
    async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        decode_envelope(status, &status_text, &body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> ApiResult<T> {
        let response = Request::post(&self.url(path))
            .body(form)
            .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    fn file_form(file: &File) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        Ok(form)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

impl AttendanceApi for ApiClient {
    type File = File;

    async fn list_persons(&self) -> ApiResult<PersonsPayload> {
        self.get("/persons").await
    }

    async fn create_person(&self, name: &str) -> ApiResult<CreatedPerson> {
        log::info!("👤 [API] Creando persona: {}", name);
        let request = NewPersonRequest {
            name: name.to_string(),
        };
        self.post_json("/persons", &request).await
    }

    async fn delete_person(&self, person_id: &str) -> ApiResult<Ack> {
        log::info!("🗑️ [API] Eliminando persona: {}", person_id);
        let response = Request::delete(&self.url(&format!("/persons/{}", person_id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn upload_image(&self, person_id: &str, file: &File) -> ApiResult<Ack> {
        log::info!("📤 [API] Subiendo imagen {} para {}", file.name(), person_id);
        let form = Self::file_form(file)?;
        form.append_with_str("person_id", person_id).map_err(js_error)?;
        self.post_form("/upload-image", form).await
    }

    async fn model_status(&self) -> ApiResult<ModelStatusPayload> {
        self.get("/model-status").await
    }

    async fn train_model(&self) -> ApiResult<TrainPayload> {
        log::info!("🧠 [API] Entrenando modelo");
        let response = Request::post(&self.url("/train-model"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn attendance_stats(&self) -> ApiResult<AttendanceStatsPayload> {
        self.get("/attendance-stats").await
    }

    async fn mark_attendance(&self, image_base64: &str) -> ApiResult<MarkAttendancePayload> {
        log::info!("📸 [API] Enviando frame ({} bytes)", image_base64.len());
        let request = MarkAttendanceRequest {
            image: image_base64,
        };
        self.post_json("/mark-attendance", &request).await
    }

    async fn attendance_logs(&self, query: &LogsQuery) -> ApiResult<LogsPayload> {
        let response = Request::get(&self.url("/attendance-logs"))
            .query(query.query_pairs())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn available_datasets(&self) -> ApiResult<DatasetsPayload> {
        self.get("/datasets/available").await
    }

    async fn download_dataset(&self, dataset_name: &str) -> ApiResult<Ack> {
        log::info!("📦 [API] Descargando dataset: {}", dataset_name);
        let request = DownloadDatasetRequest { dataset_name };
        self.post_json("/datasets/download", &request).await
    }

    async fn import_local_dataset(&self, file: &File) -> ApiResult<Ack> {
        log::info!("📦 [API] Importando dataset local: {}", file.name());
        let form = Self::file_form(file)?;
        self.post_form("/datasets/import-local", form).await
    }

    async fn settings(&self) -> ApiResult<SettingsPayload> {
        self.get("/settings").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let client = ApiClient::with_base_url("http://10.0.0.2:5000/api/");
        assert_eq!(client.base_url(), "http://10.0.0.2:5000/api");
        assert_eq!(client.url("/persons"), "http://10.0.0.2:5000/api/persons");
    }
}
