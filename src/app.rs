// ============================================================================
// APP - Aplicación principal: plataforma web + montaje del DOM
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::incremental::{apply_all, apply_update};
use crate::dom::{append_child, clear_children, get_element_by_id, on_document_click, ViewRegistry};
use crate::models::{ModalId, Notification, NotificationStack, NotificationTiming};
use crate::services::{ApiClient, Platform, Ui, WebCamera};
use crate::state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::constants::APP_ROOT_ID;
use crate::viewmodels::{
    AppContext, ClockViewModel, DashboardViewModel, DatasetsViewModel, LogsViewModel,
    ModalViewModel, PersonsViewModel, SettingsViewModel,
};
use crate::views::{render_shell, show_toast};

/// Navegador real: gloo-net + getUserMedia + DOM
pub struct WebPlatform;

impl Platform for WebPlatform {
    type Api = ApiClient;
    type Camera = WebCamera;
    type Ui = DomUi;
}

pub type WebContext = AppContext<WebPlatform>;

/// Ui que redirige cada cambio al `App` global
pub struct DomUi {
    notifications: Rc<RefCell<NotificationStack>>,
}

impl DomUi {
    pub fn new(notifications: Rc<RefCell<NotificationStack>>) -> Self {
        Self { notifications }
    }
}

impl Ui for DomUi {
    fn update(&self, update: IncrementalUpdate) {
        crate::rerender_app_with_type(UpdateType::Incremental(update));
    }

    fn show_notification(&self, notification: &Notification) {
        let Some(container) = crate::with_app(|app| app.toast_container()) else {
            log::warn!("⚠️ [TOAST] Contenedor no montado: {}", notification.message);
            return;
        };
        if let Err(e) = show_toast(&container, notification, self.notifications.clone()) {
            log::error!("❌ [TOAST] Error mostrando notificación: {:?}", e);
        }
    }
}

/// Aplicación principal
pub struct App {
    ctx: WebContext,
    registry: ViewRegistry,
}

impl App {
    /// Crear la aplicación y montar el DOM en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let timing = NotificationTiming {
            display_ms: CONFIG.notification_display_ms,
            exit_ms: CONFIG.notification_exit_ms,
        };
        let state = AppState::new(timing);
        let ui = DomUi::new(state.notifications.clone());
        let api = ApiClient::new();
        log::info!("🌐 [APP] API base URL: {}", api.base_url());
        let api_base_url = api.base_url().to_string();
        let ctx = WebContext::from_config(state, api, WebCamera::new(), ui);

        let (shell, registry) = render_shell(&ctx, &api_base_url)?;
        clear_children(&root);
        append_child(&root, &shell)?;

        install_outside_click(&ctx)?;

        Ok(Self { ctx, registry })
    }

    /// Reloj + cargas iniciales. Se llama con la App ya guardada en `APP`,
    /// así el primer tick ya encuentra el DOM montado.
    pub fn bootstrap(&self) {
        start_clock(&self.ctx);
        let ctx = self.ctx.clone();
        spawn_local(async move {
            log::info!("🚀 [APP] Cargando datos iniciales...");
            let dashboard = DashboardViewModel::new(ctx.clone());
            let persons = PersonsViewModel::new(ctx.clone());
            let datasets = DatasetsViewModel::new(ctx.clone());
            let logs = LogsViewModel::new(ctx.clone());
            let settings = SettingsViewModel::new(ctx);
            futures::join!(
                dashboard.refresh(),
                persons.load(),
                datasets.load(),
                logs.load(),
                settings.load(),
            );
            log::info!("✅ [APP] Datos iniciales cargados");
        });
    }

    pub fn context(&self) -> WebContext {
        self.ctx.clone()
    }

    pub fn toast_container(&self) -> Element {
        self.registry.toasts.clone()
    }

    pub fn modal_for_target(&self, target: &Element) -> Option<ModalId> {
        self.registry.modal_for_target(target)
    }

    /// Actualizar solo la parte afectada
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        apply_update(&self.registry, &self.ctx, update)
    }

    /// Sincronizar toda la página con el estado
    pub fn render(&self) -> Result<(), JsValue> {
        apply_all(&self.registry, &self.ctx)
    }
}

/// Click sobre el fondo de un modal abierto lo cierra
fn install_outside_click(ctx: &WebContext) -> Result<(), JsValue> {
    let ctx = ctx.clone();
    on_document_click(move |event| {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let modal = crate::with_app(|app| app.modal_for_target(&target)).flatten();
        ModalViewModel::new(ctx.clone()).handle_outside_click(modal);
    })?;
    Ok(())
}

fn start_clock(ctx: &WebContext) {
    let clock = ClockViewModel::new(ctx.clone());
    clock.tick_now();
    Interval::new(CONFIG.clock_tick_ms, move || clock.tick_now()).forget();
}
