// ============================================================================
// LOGS VIEW - Tabla de asistencia de una fecha
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::app::WebContext;
use crate::dom::{append_child, as_input, clear_children, on_change, text_element, ElementBuilder};
use crate::models::{AttendanceLog, Section};
use crate::utils::constants::LOGS_EMPTY_PLACEHOLDER;
use crate::viewmodels::LogsViewModel;

const LOG_COLUMNS: [&str; 4] = ["Name", "Check-in", "Check-out", "Duration"];

/// Fila de la tabla ya formateada
#[derive(Debug, Clone, PartialEq)]
pub enum LogRow {
    Record([String; 4]),
    Placeholder(&'static str),
}

/// Sin registros → una sola fila de aviso
pub fn log_rows(logs: &[AttendanceLog]) -> Vec<LogRow> {
    if logs.is_empty() {
        return vec![LogRow::Placeholder(LOGS_EMPTY_PLACEHOLDER)];
    }
    logs.iter()
        .map(|log| {
            LogRow::Record([
                log.person_name.clone(),
                log.check_in_label(),
                log.check_out_label(),
                log.duration_label(),
            ])
        })
        .collect()
}

pub struct LogsView {
    pub section: Element,
    date_input: HtmlInputElement,
    tbody: Element,
}

impl LogsView {
    pub fn sync(&self, date: &str, logs: &[AttendanceLog]) -> Result<(), JsValue> {
        if self.date_input.value() != date {
            self.date_input.set_value(date);
        }
        clear_children(&self.tbody);
        for row in log_rows(logs) {
            let tr = ElementBuilder::new("tr")?.build();
            match row {
                LogRow::Record(cells) => {
                    for cell in cells.iter() {
                        append_child(&tr, &text_element("td", "", cell)?)?;
                    }
                }
                LogRow::Placeholder(text) => {
                    let td = ElementBuilder::new("td")?
                        .class("empty-row")
                        .attr("colspan", &LOG_COLUMNS.len().to_string())?
                        .text(text)
                        .build();
                    append_child(&tr, &td)?;
                }
            }
            append_child(&self.tbody, &tr)?;
        }
        Ok(())
    }
}

pub fn render_logs(ctx: &WebContext) -> Result<LogsView, JsValue> {
    let date_el = ElementBuilder::new("input")?
        .class("log-date")
        .attr("type", "date")?
        .build();
    let date_input = as_input(&date_el)?;
    {
        let ctx = ctx.clone();
        let input = date_input.clone();
        on_change(&date_el, move |_| {
            let ctx = ctx.clone();
            let value = input.value();
            spawn_local(async move {
                LogsViewModel::new(ctx).change_date(&value).await;
            });
        })?;
    }

    let filter_el = ElementBuilder::new("input")?
        .class("log-filter")
        .attr("type", "text")?
        .attr("placeholder", "Filter by person")?
        .build();
    let filter_input = as_input(&filter_el)?;

    let refresh_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("🔄 Load")
            .on_click(move |_| {
                let ctx = ctx.clone();
                let filter = filter_input.value();
                spawn_local(async move {
                    let vm = LogsViewModel::new(ctx);
                    vm.set_person_filter(Some(filter));
                    vm.load().await;
                });
            })?
            .build()
    };

    let controls = ElementBuilder::new("div")?
        .class("logs-controls")
        .children([&date_el, &filter_el, &refresh_btn])?
        .build();

    let head_row = ElementBuilder::new("tr")?.build();
    for column in LOG_COLUMNS {
        append_child(&head_row, &text_element("th", "", column)?)?;
    }
    let thead = ElementBuilder::new("thead")?.child(&head_row)?.build();
    let tbody = ElementBuilder::new("tbody")?.build();
    let table = ElementBuilder::new("table")?
        .class("logs-table")
        .children([&thead, &tbody])?
        .build();

    let section = ElementBuilder::new("section")?
        .id(Section::Logs.key())?
        .class("content-section")
        .children([&controls, &table])?
        .build();

    let view = LogsView {
        section,
        date_input,
        tbody,
    };
    view.sync(&ctx.state.log_date(), &ctx.state.logs.borrow())?;
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_logs_render_single_placeholder() {
        assert_eq!(
            log_rows(&[]),
            vec![LogRow::Placeholder("No attendance records for this date")]
        );
    }

    #[test]
    fn missing_checkout_and_duration_render_dash() {
        let log = AttendanceLog {
            person_name: "Alice".to_string(),
            timestamp: "not a time".to_string(),
            checkout_time: None,
            duration: Some("".to_string()),
        };
        assert_eq!(
            log_rows(&[log]),
            vec![LogRow::Record([
                "Alice".to_string(),
                "not a time".to_string(),
                "-".to_string(),
                "-".to_string(),
            ])]
        );
    }
}
