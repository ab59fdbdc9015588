// ============================================================================
// DASHBOARD VIEW - Tarjetas de estadísticas + acciones rápidas
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{set_text_content, text_element, ElementBuilder};
use crate::models::{DashboardCounters, ModalId, Section};
use crate::viewmodels::{DashboardViewModel, ModalViewModel, NavigationViewModel};

pub struct DashboardView {
    pub section: Element,
    total_persons: Element,
    model_status: Element,
    faces_encoded: Element,
    present_today: Element,
}

impl DashboardView {
    pub fn sync(&self, counters: &DashboardCounters) {
        set_text_content(&self.total_persons, &counters.total_persons_label());
        set_text_content(&self.model_status, counters.model_status_label());
        set_text_content(&self.faces_encoded, &counters.faces_encoded_label());
        set_text_content(&self.present_today, &counters.present_today_label());
    }
}

fn stat_card(icon: &str, label: &str) -> Result<(Element, Element), JsValue> {
    let value = text_element("div", "stat-value", "-")?;
    let card = ElementBuilder::new("div")?
        .class("stat-card")
        .child(&text_element("div", "stat-icon", icon)?)?
        .child(
            &ElementBuilder::new("div")?
                .class("stat-info")
                .child(&text_element("div", "stat-label", label)?)?
                .child(&value)?
                .build(),
        )?
        .build();
    Ok((card, value))
}

pub fn render_dashboard(ctx: &WebContext) -> Result<DashboardView, JsValue> {
    let (persons_card, total_persons) = stat_card("👥", "Total Persons")?;
    let (model_card, model_status) = stat_card("🧠", "Model Status")?;
    let (faces_card, faces_encoded) = stat_card("🖼️", "Faces Encoded")?;
    let (present_card, present_today) = stat_card("✅", "Present Today")?;

    let stats = ElementBuilder::new("div")?
        .class("stats-grid")
        .children([&persons_card, &model_card, &faces_card, &present_card])?
        .build();

    let train_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("🧠 Train Model")
            .on_click(move |_| {
                let ctx = ctx.clone();
                spawn_local(async move {
                    DashboardViewModel::new(ctx).train_model().await;
                });
            })?
            .build()
    };

    let attendance_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("📷 Mark Attendance")
            .on_click(move |_| {
                let ctx = ctx.clone();
                spawn_local(async move {
                    NavigationViewModel::new(ctx).navigate(Section::Attendance).await;
                });
            })?
            .build()
    };

    let add_person_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("➕ Add Person")
            .on_click(move |_| {
                ModalViewModel::new(ctx.clone()).open(ModalId::AddPerson);
            })?
            .build()
    };

    let actions = ElementBuilder::new("div")?
        .class("quick-actions")
        .child(&text_element("h3", "", "Quick Actions")?)?
        .children([&train_btn, &attendance_btn, &add_person_btn])?
        .build();

    let section = ElementBuilder::new("section")?
        .id(Section::Dashboard.key())?
        .class("content-section")
        .child(&stats)?
        .child(&actions)?
        .build();

    let view = DashboardView {
        section,
        total_persons,
        model_status,
        faces_encoded,
        present_today,
    };
    view.sync(&ctx.state.dashboard.borrow());
    Ok(view)
}
