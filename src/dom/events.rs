// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - closure.forget() deja vivo el closure de Rust aunque el elemento se destruya.
//   Solo se registran listeners en elementos que viven toda la sesión; lo que se
//   re-renderiza (tarjetas, toasts) usa un listener delegado en su contenedor.
// - Para listeners globales (document): solo se registran UNA VEZ al inicio de la app,
//   protegidos con un flag para que no se acumulen.
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, File, MouseEvent};
use crate::dom::document;

thread_local! {
    static DOCUMENT_CLICK_INSTALLED: Cell<bool> = Cell::new(false);
}

fn listen<E, F>(target: &web_sys::EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: 'static,
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Click delegado: un solo listener en `container` para los hijos que
/// coinciden con `selector`, aunque se re-rendericen. Recibe el hijo.
pub fn on_click_within<F>(container: &Element, selector: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Element) + 'static,
{
    let selector = selector.to_string();
    listen(container, "click", move |e: MouseEvent| {
        let matched = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|t| t.closest(&selector).ok().flatten());
        if let Some(el) = matched {
            handler(el);
        }
    })
}

/// `change` (date pickers, inputs de archivo)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// `submit` de un formulario, sin recargar la página
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Zona de drag & drop: cancela la navegación por defecto del navegador
/// y avisa del hover (`true` al entrar, `false` al salir o soltar).
pub fn on_file_drop<H, D>(zone: &Element, hover: H, drop: D) -> Result<(), JsValue>
where
    H: Fn(bool) + Clone + 'static,
    D: Fn(Vec<File>) + 'static,
{
    let hover_over = hover.clone();
    listen(zone, "dragover", move |e: DragEvent| {
        e.prevent_default();
        hover_over(true);
    })?;

    let hover_leave = hover.clone();
    listen(zone, "dragleave", move |_e: DragEvent| {
        hover_leave(false);
    })?;

    listen(zone, "drop", move |e: DragEvent| {
        e.prevent_default();
        hover(false);
        let files = e
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        drop(files);
    })
}

/// Click global en el document. Se instala una sola vez por página.
pub fn on_document_click<F>(handler: F) -> Result<bool, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    if DOCUMENT_CLICK_INSTALLED.with(|flag| flag.replace(true)) {
        log::warn!("⚠️ [EVENTS] Listener global de click ya instalado");
        return Ok(false);
    }
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    listen(&doc, "click", handler)?;
    Ok(true)
}
