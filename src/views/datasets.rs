// ============================================================================
// DATASETS VIEW - Pestañas: datasets públicos / subida de archivo local
// ============================================================================

use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, HtmlInputElement};
use crate::app::WebContext;
use crate::dom::{
    append_child, as_input, clear_children, input_files, on_change, on_click_within, on_file_drop,
    sync_class, text_element, ElementBuilder,
};
use crate::models::{DatasetInfo, DatasetTab, Section};
use crate::utils::constants::{ACTIVE_CLASS, DRAG_OVER_CLASS};
use crate::viewmodels::DatasetsViewModel;

const DOWNLOAD_ATTR: &str = "data-dataset-id";

struct TabHandle {
    button: Element,
    panel: Element,
}

pub struct DatasetsView {
    pub section: Element,
    tabs: HashMap<DatasetTab, TabHandle>,
    grid: Element,
    drop_zone: Element,
    file_input: HtmlInputElement,
}

impl DatasetsView {
    pub fn sync_tab(&self, active: DatasetTab) {
        for (tab, handle) in &self.tabs {
            let on = *tab == active;
            sync_class(&handle.button, ACTIVE_CLASS, on);
            sync_class(&handle.panel, ACTIVE_CLASS, on);
        }
    }

    pub fn sync_hover(&self, hover: bool) {
        sync_class(&self.drop_zone, DRAG_OVER_CLASS, hover);
    }

    pub fn clear_upload(&self) {
        self.file_input.set_value("");
    }

    pub fn render_cards(&self, datasets: &[DatasetInfo]) -> Result<(), JsValue> {
        clear_children(&self.grid);
        for dataset in datasets {
            append_child(&self.grid, &render_dataset_card(dataset)?)?;
        }
        Ok(())
    }
}

fn render_dataset_card(dataset: &DatasetInfo) -> Result<Element, JsValue> {
    let download_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr(DOWNLOAD_ATTR, &dataset.id)?
        .text("Download")
        .build();

    let meta = ElementBuilder::new("div")?
        .class("dataset-meta")
        .child(&text_element("p", "", &dataset.people_label())?)?
        .child(&text_element("p", "", &dataset.size_label())?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("dataset-card")
        .child(&text_element("h4", "", &dataset.name)?)?
        .child(&text_element("p", "", &dataset.description)?)?
        .child(&meta)?
        .child(&download_btn)?
        .build())
}

fn spawn_upload(ctx: &WebContext, file: Option<File>) {
    let ctx = ctx.clone();
    spawn_local(async move {
        DatasetsViewModel::new(ctx).upload(file.as_ref()).await;
    });
}

pub fn render_datasets(ctx: &WebContext) -> Result<DatasetsView, JsValue> {
    // Pestaña "Available" (las tarjetas cambian, el listener del grid no)
    let grid = ElementBuilder::new("div")?.class("datasets-grid").build();
    {
        let ctx = ctx.clone();
        on_click_within(&grid, &format!("[{}]", DOWNLOAD_ATTR), move |button| {
            let Some(dataset_id) = button.get_attribute(DOWNLOAD_ATTR) else {
                return;
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                DatasetsViewModel::new(ctx).download(&dataset_id).await;
            });
        })?;
    }
    let available_panel = ElementBuilder::new("div")?
        .class("tab-content")
        .child(&grid)?
        .build();

    // Pestaña "Upload"
    let file_el = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("accept", ".zip,.tar,.tar.gz")?
        .build();
    let file_input = as_input(&file_el)?;
    {
        let ctx = ctx.clone();
        let input = file_input.clone();
        on_change(&file_el, move |_| {
            spawn_upload(&ctx, input_files(&input).into_iter().next());
        })?;
    }

    let drop_zone = ElementBuilder::new("div")?
        .class("upload-area")
        .child(&text_element("div", "upload-icon", "📁")?)?
        .child(&text_element("p", "", "Drag & drop a dataset archive here, or choose a file")?)?
        .child(&file_el)?
        .build();
    {
        let hover_ctx = ctx.clone();
        let drop_ctx = ctx.clone();
        on_file_drop(
            &drop_zone,
            move |hover| DatasetsViewModel::new(hover_ctx.clone()).set_drop_hover(hover),
            move |files| spawn_upload(&drop_ctx, files.into_iter().next()),
        )?;
    }

    let upload_panel = ElementBuilder::new("div")?
        .class("tab-content")
        .child(&drop_zone)?
        .build();

    let tab_bar = ElementBuilder::new("div")?.class("tabs").build();
    let mut tabs = HashMap::new();
    for (tab, panel) in [
        (DatasetTab::Available, available_panel),
        (DatasetTab::Upload, upload_panel),
    ] {
        let ctx = ctx.clone();
        let button = ElementBuilder::new("button")?
            .class("tab-btn")
            .text(tab.label())
            .on_click(move |_| DatasetsViewModel::new(ctx.clone()).select_tab(tab))?
            .build();
        append_child(&tab_bar, &button)?;
        tabs.insert(tab, TabHandle { button, panel });
    }

    let section = ElementBuilder::new("section")?
        .id(Section::Datasets.key())?
        .class("content-section")
        .child(&tab_bar)?
        .build();
    for tab in DatasetTab::ALL {
        if let Some(handle) = tabs.get(&tab) {
            append_child(&section, &handle.panel)?;
        }
    }

    let view = DatasetsView {
        section,
        tabs,
        grid,
        drop_zone,
        file_input,
    };
    view.sync_tab(*ctx.state.dataset_tab.borrow());
    view.render_cards(&ctx.state.datasets.borrow())?;
    Ok(view)
}
