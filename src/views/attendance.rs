// ============================================================================
// ATTENDANCE VIEW - Cámara en vivo + botón de captura
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{set_text_content, sync_class, text_element, ElementBuilder};
use crate::models::{CameraPhase, Section};
use crate::state::AppState;
use crate::utils::constants::CAMERA_VIDEO_ID;
use crate::viewmodels::AttendanceViewModel;

pub struct AttendanceView {
    pub section: Element,
    clock: Element,
    camera_status: Element,
    status: Element,
    last_person: Element,
    capture_btn: Element,
}

impl AttendanceView {
    pub fn sync(&self, state: &AppState) {
        set_text_content(&self.status, &state.attendance_status());
        set_text_content(&self.last_person, &state.last_person().unwrap_or_else(|| "-".to_string()));
        let busy = *state.marking_in_flight.borrow();
        sync_class(&self.capture_btn, "is-busy", busy);
    }

    pub fn sync_camera(&self, phase: CameraPhase) {
        set_text_content(&self.camera_status, phase.label());
        sync_class(&self.camera_status, "camera-failed", phase == CameraPhase::Failed);
    }

    pub fn sync_clock(&self, label: &str) {
        set_text_content(&self.clock, label);
    }
}

pub fn render_attendance(ctx: &WebContext) -> Result<AttendanceView, JsValue> {
    let video = ElementBuilder::new("video")?
        .id(CAMERA_VIDEO_ID)?
        .class("camera-feed")
        .attr("autoplay", "")?
        .attr("playsinline", "")?
        .attr("muted", "")?
        .build();
    let camera_status = text_element("div", "camera-status", CameraPhase::Absent.label())?;

    let capture_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-primary btn-capture")
            .text("📸 Capture & Mark Attendance")
            .on_click(move |_| {
                let ctx = ctx.clone();
                spawn_local(async move {
                    AttendanceViewModel::new(ctx).capture_and_mark().await;
                });
            })?
            .build()
    };

    let camera_panel = ElementBuilder::new("div")?
        .class("camera-container")
        .children([&video, &camera_status, &capture_btn])?
        .build();

    let clock = text_element("div", "info-value", "")?;
    let status = text_element("div", "info-value", "")?;
    let last_person = text_element("div", "info-value", "-")?;

    let info_row = |label: &str, value: &Element| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("div")?
            .class("info-item")
            .child(&text_element("div", "info-label", label)?)?
            .child(value)?
            .build())
    };

    let info_panel = ElementBuilder::new("div")?
        .class("attendance-info")
        .child(&info_row("Current Time", &clock)?)?
        .child(&info_row("Status", &status)?)?
        .child(&info_row("Last Recognized", &last_person)?)?
        .build();

    let section = ElementBuilder::new("section")?
        .id(Section::Attendance.key())?
        .class("content-section")
        .child(
            &ElementBuilder::new("div")?
                .class("attendance-layout")
                .children([&camera_panel, &info_panel])?
                .build(),
        )?
        .build();

    let view = AttendanceView {
        section,
        clock,
        camera_status,
        status,
        last_person,
        capture_btn,
    };
    view.sync(&ctx.state);
    view.sync_camera(ctx.camera.phase());
    Ok(view)
}
