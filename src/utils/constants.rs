/// Contenedor raíz donde se monta la app
pub const APP_ROOT_ID: &str = "app";

/// `<video>` de previsualización de la cámara
pub const CAMERA_VIDEO_ID: &str = "camera-feed";

pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Clase CSS que marca sección/botón/modal/pestaña activos
pub const ACTIVE_CLASS: &str = "active";

/// Feedback visual al arrastrar un archivo sobre la zona de subida
pub const DRAG_OVER_CLASS: &str = "drag-over";

pub const TOAST_LEAVING_CLASS: &str = "toast--leaving";

pub const LOGS_EMPTY_PLACEHOLDER: &str = "No attendance records for this date";
