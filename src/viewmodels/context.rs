// ============================================================================
// APP CONTEXT - Estado + servicios inyectados en cada viewmodel
// ============================================================================
// Sustituye a las variables globales: quien necesite la API, la cámara o la
// persona seleccionada lo recibe aquí, nunca lo lee de un ámbito ambiente.
// ============================================================================

use std::rc::Rc;
use crate::config::{AppConfig, CONFIG};
use crate::models::{ApiError, Notification, Severity};
use crate::services::platform::{Platform, Ui};
use crate::state::{AppState, IncrementalUpdate};
use crate::utils::time::now_ms;
use crate::viewmodels::camera_viewmodel::CameraSessionManager;

/// Opciones de comportamiento (derivadas de `AppConfig`)
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerOptions {
    pub release_camera_on_leave: bool,
    pub notify_read_failures: bool,
    pub capture_mime: String,
}

impl ControllerOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            release_camera_on_leave: config.release_camera_on_leave,
            notify_read_failures: config.notify_read_failures,
            capture_mime: config.capture_mime.clone(),
        }
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

pub struct AppContext<P: Platform> {
    pub state: AppState,
    pub api: Rc<P::Api>,
    pub camera: Rc<CameraSessionManager<P::Camera>>,
    pub ui: Rc<P::Ui>,
    pub options: ControllerOptions,
}

// Manual: derive exigiría `P: Clone`
impl<P: Platform> Clone for AppContext<P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: self.api.clone(),
            camera: self.camera.clone(),
            ui: self.ui.clone(),
            options: self.options.clone(),
        }
    }
}

impl<P: Platform> AppContext<P> {
    pub fn new(
        state: AppState,
        api: P::Api,
        camera: P::Camera,
        ui: P::Ui,
        options: ControllerOptions,
    ) -> Self {
        Self {
            state,
            api: Rc::new(api),
            camera: Rc::new(CameraSessionManager::new(camera)),
            ui: Rc::new(ui),
            options,
        }
    }

    /// Contexto con las opciones de `CONFIG`
    pub fn from_config(state: AppState, api: P::Api, camera: P::Camera, ui: P::Ui) -> Self {
        Self::new(state, api, camera, ui, ControllerOptions::from_config(&CONFIG))
    }

    pub fn refresh(&self, update: IncrementalUpdate) {
        self.ui.update(update);
    }

    /// Mostrar un toast. Los toasts terminados se purgan en cada alta.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let now = now_ms();
        let notification = {
            let mut stack = self.state.notifications.borrow_mut();
            stack.sweep(now);
            stack.push(message, severity, now)
        };
        self.ui.show_notification(&notification);
        notification
    }

    pub fn dismiss_notification(&self, id: u64) -> bool {
        self.state.notifications.borrow_mut().dismiss(id)
    }

    /// Fallo de lectura: consola siempre, toast solo si está activado
    pub fn report_read_failure(&self, what: &str, error: &ApiError) {
        log::error!("❌ [API] Error cargando {}: {}", what, error);
        if self.options.notify_read_failures {
            self.notify(
                format!("Could not load {}: {}", what, error.user_message()),
                Severity::Warning,
            );
        }
    }
}
