// ============================================================================
// API ENVELOPE - Respuesta común del backend ({status, message, ...payload})
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Campo `status` de todas las respuestas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Warning,
    Error,
    #[serde(other)]
    Unknown,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Success => "success",
            ApiStatus::Warning => "warning",
            ApiStatus::Error => "error",
            ApiStatus::Unknown => "unknown",
        }
    }
}

/// Respuesta del backend: status + message opcional + payload aplanado.
/// Los payloads usan `#[serde(default)]` para que una respuesta de error
/// (sin los campos del payload) siga siendo decodificable.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Convierte un status != success en `ApiError::Rejected`
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self.message,
            })
        }
    }
}

/// Confirmación genérica de escritura (delete/upload/import/download)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub image_id: Option<String>,
    pub path: Option<String>,
}

/// Errores de la capa HTTP
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red (fetch rechazado)
    Network(String),
    /// Respuesta no-2xx sin cuerpo JSON interpretable
    Http { status: u16, message: String },
    /// Cuerpo ilegible en una respuesta 2xx
    Parse(String),
    /// El backend respondió con status != success
    Rejected {
        status: ApiStatus,
        message: Option<String>,
    },
}

impl ApiError {
    /// Mensaje para el usuario: el del servidor si existe
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Rejected { status, message } => match message {
                Some(msg) => write!(f, "Request {}: {}", status.as_str(), msg),
                None => write!(f, "Request {}", status.as_str()),
            },
        }
    }
}

impl std::error::Error for ApiError {}

/// Resultado de una llamada: `Err` solo para fallos de transporte/parseo,
/// el status de aplicación viaja dentro de `ApiResponse`.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Decodificar el cuerpo de una respuesta HTTP.
///
/// El backend responde JSON también en 4xx/5xx (p.ej. `warning` con 404 cuando
/// no reconoce una cara), así que el status HTTP solo importa si el cuerpo no
/// se puede leer.
pub fn decode_envelope<T: DeserializeOwned>(
    http_status: u16,
    status_text: &str,
    body: &str,
) -> ApiResult<T> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&http_status) => Err(ApiError::Parse(e.to_string())),
        Err(_) => {
            let message = if status_text.is_empty() {
                "Unknown error".to_string()
            } else {
                status_text.to_string()
            };
            Err(ApiError::Http {
                status: http_status,
                message,
            })
        }
    }
}
