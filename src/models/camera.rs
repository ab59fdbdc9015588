/// Frame capturado, listo para enviar como `image` (data URL base64)
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Estado de la sesión de cámara
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    Absent,
    Acquiring,
    Active,
    Failed,
}

impl CameraPhase {
    pub fn label(&self) -> &'static str {
        match self {
            CameraPhase::Absent => "Camera off",
            CameraPhase::Acquiring => "Starting camera...",
            CameraPhase::Active => "Camera ready",
            CameraPhase::Failed => "Camera unavailable",
        }
    }
}

/// Errores de acceso/captura de cámara
#[derive(Debug, Clone, PartialEq)]
pub enum CameraError {
    /// El navegador no expone mediaDevices
    Unsupported,
    PermissionDenied(String),
    DeviceUnavailable(String),
    CaptureFailed(String),
}

impl CameraError {
    /// Clasificar un DOMException de getUserMedia por su `name`
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                CameraError::PermissionDenied(message.to_string())
            }
            "NotFoundError" | "NotReadableError" | "OverconstrainedError" | "AbortError"
            | "DevicesNotFoundError" | "TrackStartError" => {
                CameraError::DeviceUnavailable(message.to_string())
            }
            "TypeError" if message.is_empty() => CameraError::Unsupported,
            _ => CameraError::DeviceUnavailable(format!("{}: {}", name, message)),
        }
    }
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::Unsupported => write!(f, "Camera API not supported by this browser"),
            CameraError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            CameraError::DeviceUnavailable(msg) => write!(f, "No camera available: {}", msg),
            CameraError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_dom_exceptions() {
        assert_eq!(
            CameraError::from_dom_exception("NotAllowedError", "Permission dismissed"),
            CameraError::PermissionDenied("Permission dismissed".to_string())
        );
        assert_eq!(
            CameraError::from_dom_exception("NotFoundError", "Requested device not found"),
            CameraError::DeviceUnavailable("Requested device not found".to_string())
        );
        assert_eq!(
            CameraError::from_dom_exception("Weird", "x"),
            CameraError::DeviceUnavailable("Weird: x".to_string())
        );
    }
}
