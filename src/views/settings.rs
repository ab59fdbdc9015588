// ============================================================================
// SETTINGS VIEW - Configuración del servidor en solo lectura
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{append_child, clear_children, text_element, ElementBuilder};
use crate::models::{Section, SystemSettings};

pub struct SettingsView {
    pub section: Element,
    body: Element,
    api_base_url: String,
}

impl SettingsView {
    pub fn sync(&self, settings: Option<&SystemSettings>) -> Result<(), JsValue> {
        clear_children(&self.body);
        let mut rows = vec![("API endpoint", self.api_base_url.clone())];
        match settings {
            Some(settings) => rows.extend(settings.rows()),
            None => rows.push(("Server", "Not loaded".to_string())),
        }
        for (label, value) in rows {
            let row = ElementBuilder::new("div")?
                .class("setting-row")
                .child(&text_element("span", "setting-label", label)?)?
                .child(&text_element("span", "setting-value", &value)?)?
                .build();
            append_child(&self.body, &row)?;
        }
        Ok(())
    }
}

pub fn render_settings(ctx: &WebContext, api_base_url: &str) -> Result<SettingsView, JsValue> {
    let body = ElementBuilder::new("div")?.class("settings-list").build();
    let section = ElementBuilder::new("section")?
        .id(Section::Settings.key())?
        .class("content-section")
        .child(&text_element("h3", "", "System Settings")?)?
        .child(&body)?
        .build();

    let view = SettingsView {
        section,
        body,
        api_base_url: api_base_url.to_string(),
    };
    view.sync(ctx.state.settings.borrow().as_ref())?;
    Ok(view)
}
