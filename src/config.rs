use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    pub clock_tick_ms: u32,
    /// Detener la cámara al salir de la sección de asistencia
    pub release_camera_on_leave: bool,
    /// Mostrar toast también cuando falla una lectura (por defecto solo consola)
    pub notify_read_failures: bool,
    pub capture_mime: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            enable_logging: true,
            notification_display_ms: 3000,
            notification_exit_ms: 300,
            clock_tick_ms: 1000,
            release_camera_on_leave: false,
            notify_read_failures: false,
            capture_mime: "image/jpeg".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            notification_display_ms: parse_or(
                option_env!("NOTIFICATION_DISPLAY_MS"),
                defaults.notification_display_ms,
            ),
            notification_exit_ms: parse_or(
                option_env!("NOTIFICATION_EXIT_MS"),
                defaults.notification_exit_ms,
            ),
            clock_tick_ms: parse_or(option_env!("CLOCK_TICK_MS"), defaults.clock_tick_ms),
            release_camera_on_leave: parse_or(
                option_env!("RELEASE_CAMERA_ON_LEAVE"),
                defaults.release_camera_on_leave,
            ),
            notify_read_failures: parse_or(
                option_env!("NOTIFY_READ_FAILURES"),
                defaults.notify_read_failures,
            ),
            capture_mime: option_env!("CAPTURE_MIME")
                .map(str::to_string)
                .unwrap_or(defaults.capture_mime),
        }
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.notification_display_ms, 3000);
        assert_eq!(config.notification_exit_ms, 300);
        assert!(!config.release_camera_on_leave);
        assert!(!config.notify_read_failures);
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 42 "), 7), 42);
        assert!(parse_or::<bool>(Some("true"), false));
        assert_eq!(parse_or::<u32>(None, 9), 9);
    }

    #[test]
    fn logging_switch_lowers_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
