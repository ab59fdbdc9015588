// ============================================================================
// ATTENDANCE DASHBOARD - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación con el navegador (API, cámara)
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod config;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

// Instancia global de App (un solo hilo de UI)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Attendance Dashboard - Rust Puro + MVVM");

    let app = App::new()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Lo que cambió antes de guardar la App se sincroniza ahora
    rerender_app();
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            app.bootstrap();
        }
    });

    Ok(())
}

/// Acceso de solo lectura a la App montada
pub(crate) fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow().as_ref().map(f))
}

/// Re-sincronizar toda la página
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    let result = with_app(|app| match update_type {
        UpdateType::Incremental(update) => {
            log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", update);
            app.update_incremental(update)
        }
        UpdateType::FullRender => {
            log::debug!("🔄 [RERENDER] Sincronización completa");
            app.render()
        }
    });
    match result {
        Some(Ok(())) => {}
        Some(Err(e)) => log::error!("❌ [UPDATE] Error actualizando el DOM: {:?}", e),
        None => log::warn!("⚠️ [UPDATE] App no está inicializada"),
    }
}

/// Navegación llamable desde JavaScript (`navigate("logs")`)
#[wasm_bindgen]
pub fn navigate(section: String) {
    let Some(ctx) = with_app(|app| app.context()) else {
        log::warn!("⚠️ [NAV] App no está inicializada");
        return;
    };
    spawn_local(async move {
        let nav = viewmodels::NavigationViewModel::new(ctx);
        let hook = nav.navigate_to_key(&section);
        nav.run_entry_hook(hook).await;
    });
}
