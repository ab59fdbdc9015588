// ============================================================================
// NOTIFICATION VIEW - Toast con temporizadores propios
// ============================================================================
// visible → (display_ms) clase de salida → (exit_ms) eliminado del DOM.
// Un click lo cierra antes de tiempo (un solo listener en el contenedor).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{append_child, on_click_within, sync_class, ElementBuilder};
use crate::models::{Notification, NotificationStack};
use crate::utils::constants::TOAST_LEAVING_CLASS;

const TOAST_ID_ATTR: &str = "data-toast-id";

pub fn show_toast(
    container: &Element,
    notification: &Notification,
    stack: Rc<RefCell<NotificationStack>>,
) -> Result<(), JsValue> {
    let timing = stack.borrow().timing();
    let id = notification.id;

    let toast = ElementBuilder::new("div")?
        .class(notification.severity.class_name())
        .attr("role", "status")?
        .attr(TOAST_ID_ATTR, &id.to_string())?
        .attr("style", &format!("background: {};", notification.severity.color()))?
        .text(&notification.message)
        .build();
    append_child(container, &toast)?;

    // Cada toast lleva su propio reloj: la cantidad de toasts no retrasa nada
    spawn_local(async move {
        TimeoutFuture::new(timing.display_ms).await;
        sync_class(&toast, TOAST_LEAVING_CLASS, true);
        TimeoutFuture::new(timing.exit_ms).await;
        stack.borrow_mut().dismiss(id);
        toast.remove();
    });

    Ok(())
}

/// Id del toast (atributo `data-toast-id`)
pub fn parse_toast_id(raw: Option<String>) -> Option<u64> {
    raw?.trim().parse().ok()
}

/// Click sobre cualquier toast del contenedor lo cierra
pub fn install_toast_dismiss(ctx: &WebContext, container: &Element) -> Result<(), JsValue> {
    let ctx = ctx.clone();
    on_click_within(container, &format!("[{}]", TOAST_ID_ATTR), move |toast| {
        if let Some(id) = parse_toast_id(toast.get_attribute(TOAST_ID_ATTR)) {
            ctx.dismiss_notification(id);
        }
        toast.remove();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_id_comes_from_the_attribute() {
        assert_eq!(parse_toast_id(Some("7".to_string())), Some(7));
        assert_eq!(parse_toast_id(Some("toast".to_string())), None);
        assert_eq!(parse_toast_id(None), None);
    }
}
