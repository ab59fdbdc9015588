// ============================================================================
// SHELL VIEW - Sidebar + header + secciones + modales + toasts
// ============================================================================

use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{text_element, ElementBuilder, SectionHandle, ViewRegistry};
use crate::models::Section;
use crate::utils::constants::TOAST_CONTAINER_ID;
use crate::viewmodels::NavigationViewModel;
use crate::views::attendance::render_attendance;
use crate::views::dashboard::render_dashboard;
use crate::views::datasets::render_datasets;
use crate::views::logs::render_logs;
use crate::views::notification::install_toast_dismiss;
use crate::views::modals::{render_add_person_modal, render_upload_images_modal};
use crate::views::persons::render_persons;
use crate::views::settings::render_settings;

fn nav_button(ctx: &WebContext, section: Section) -> Result<Element, JsValue> {
    let ctx = ctx.clone();
    ElementBuilder::new("button")?
        .class("nav-btn")
        .attr("data-section", section.key())?
        .text(section.nav_label())
        .on_click(move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                NavigationViewModel::new(ctx).navigate(section).await;
            });
        })
        .map(ElementBuilder::build)
}

/// Construye toda la página una sola vez y devuelve los handles
pub fn render_shell(
    ctx: &WebContext,
    api_base_url: &str,
) -> Result<(Element, ViewRegistry), JsValue> {
    let dashboard = render_dashboard(ctx)?;
    let attendance = render_attendance(ctx)?;
    let persons = render_persons(ctx)?;
    let logs = render_logs(ctx)?;
    let datasets = render_datasets(ctx)?;
    let settings = render_settings(ctx, api_base_url)?;
    let add_person = render_add_person_modal(ctx)?;
    let upload_images = render_upload_images_modal(ctx)?;

    // Sidebar
    let nav = ElementBuilder::new("nav")?.class("nav-menu").build();
    let mut sections = HashMap::new();
    for section in Section::ALL {
        let button = nav_button(ctx, section)?;
        nav.append_child(&button)?;
        let element = match section {
            Section::Dashboard => dashboard.section.clone(),
            Section::Attendance => attendance.section.clone(),
            Section::Persons => persons.section.clone(),
            Section::Logs => logs.section.clone(),
            Section::Datasets => datasets.section.clone(),
            Section::Settings => settings.section.clone(),
        };
        sections.insert(
            section,
            SectionHandle {
                section: element,
                nav_button: button,
            },
        );
    }
    let sidebar = ElementBuilder::new("aside")?
        .class("sidebar")
        .child(&text_element("div", "logo", "👤 FaceAttend")?)?
        .child(&nav)?
        .build();

    // Header
    let title = text_element("h2", "page-title", Section::Dashboard.title())?;
    let header_clock = text_element("span", "header-clock", "")?;
    let header = ElementBuilder::new("header")?
        .class("top-bar")
        .children([&title, &header_clock])?
        .build();

    let content = ElementBuilder::new("div")?
        .class("content")
        .children([
            &dashboard.section,
            &attendance.section,
            &persons.section,
            &logs.section,
            &datasets.section,
            &settings.section,
        ])?
        .build();
    let main = ElementBuilder::new("main")?
        .class("main-content")
        .children([&header, &content])?
        .build();

    let toasts = ElementBuilder::new("div")?
        .class("toast-container")
        .id(TOAST_CONTAINER_ID)?
        .build();
    install_toast_dismiss(ctx, &toasts)?;

    let root = ElementBuilder::new("div")?
        .class("app-container")
        .children([&sidebar, &main, &add_person.element, &upload_images.element, &toasts])?
        .build();

    let registry = ViewRegistry {
        sections,
        title,
        header_clock,
        dashboard,
        attendance,
        persons,
        logs,
        datasets,
        settings,
        add_person,
        upload_images,
        toasts,
    };
    Ok((root, registry))
}
