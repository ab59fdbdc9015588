// ============================================================================
// MODALS VIEW - Alta de persona + subida de imágenes
// ============================================================================
// El fondo (`.modal`) es el elemento que recibe el click "fuera"; el contenido
// va dentro de `.modal-content`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, Url};
use crate::app::WebContext;
use crate::dom::{
    append_child, as_input, clear_children, input_files, on_change, on_submit, sync_class,
    set_text_content, text_element, ElementBuilder,
};
use crate::models::{ModalId, SelectedPerson};
use crate::utils::constants::ACTIVE_CLASS;
use crate::viewmodels::{ModalViewModel, PersonsViewModel};

fn modal_shell(id: ModalId, title: &str, body: &[&Element]) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(&text_element("h3", "modal-title", title)?)?
        .children(body.iter().copied())?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("modal")
        .id(id.element_id())?
        .child(&content)?
        .build())
}

fn cancel_button(ctx: &WebContext, modal: ModalId) -> Result<Element, JsValue> {
    let ctx = ctx.clone();
    Ok(ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text("Cancel")
        .on_click(move |_| ModalViewModel::new(ctx.clone()).close(modal))?
        .build())
}

// ============================================================================
// ADD PERSON
// ============================================================================

pub struct AddPersonModal {
    pub element: Element,
    name_input: HtmlInputElement,
}

impl AddPersonModal {
    pub fn sync(&self, open: bool) {
        sync_class(&self.element, ACTIVE_CLASS, open);
        if open {
            let _ = self.name_input.focus();
        }
    }

    pub fn clear(&self) {
        self.name_input.set_value("");
    }
}

pub fn render_add_person_modal(ctx: &WebContext) -> Result<AddPersonModal, JsValue> {
    let name_el = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "Full name")?
        .attr("required", "")?
        .build();
    let name_input = as_input(&name_el)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Add Person")
        .build();
    let buttons = ElementBuilder::new("div")?
        .class("modal-actions")
        .child(&submit)?
        .child(&cancel_button(ctx, ModalId::AddPerson)?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("modal-form")
        .child(&name_el)?
        .child(&buttons)?
        .build();
    {
        let ctx = ctx.clone();
        let input = name_input.clone();
        on_submit(&form, move || {
            let ctx = ctx.clone();
            let name = input.value();
            spawn_local(async move {
                PersonsViewModel::new(ctx).add_person(&name).await;
            });
        })?;
    }

    let element = modal_shell(ModalId::AddPerson, "Add New Person", &[&form])?;
    Ok(AddPersonModal {
        element,
        name_input,
    })
}

// ============================================================================
// UPLOAD IMAGES
// ============================================================================

pub struct UploadImagesModal {
    pub element: Element,
    target_name: Element,
    files_input: HtmlInputElement,
    preview: Element,
    preview_urls: Rc<RefCell<Vec<String>>>,
}

impl UploadImagesModal {
    pub fn sync(&self, open: bool, person: Option<&SelectedPerson>) {
        sync_class(&self.element, ACTIVE_CLASS, open);
        if open {
            let name = person.map(|p| p.name.as_str()).unwrap_or("-");
            set_text_content(&self.target_name, name);
        } else {
            self.files_input.set_value("");
            clear_preview(&self.preview, &self.preview_urls);
        }
    }
}

fn clear_preview(preview: &Element, urls: &Rc<RefCell<Vec<String>>>) {
    for url in urls.borrow_mut().drain(..) {
        let _ = Url::revoke_object_url(&url);
    }
    clear_children(preview);
}

/// Miniaturas de los archivos elegidos (object URLs)
fn render_preview(
    preview: &Element,
    urls: &Rc<RefCell<Vec<String>>>,
    input: &HtmlInputElement,
) -> Result<(), JsValue> {
    clear_preview(preview, urls);
    for file in input_files(input) {
        let url = Url::create_object_url_with_blob(&file)?;
        let img = ElementBuilder::new("img")?
            .attr("src", &url)?
            .attr("alt", &file.name())?
            .build();
        append_child(preview, &img)?;
        urls.borrow_mut().push(url);
    }
    Ok(())
}

pub fn render_upload_images_modal(ctx: &WebContext) -> Result<UploadImagesModal, JsValue> {
    let target_name = text_element("strong", "modal-person-name", "-")?;
    let target = ElementBuilder::new("p")?
        .text("Upload face images for ")
        .child(&target_name)?
        .build();

    let files_el = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .attr("multiple", "")?
        .build();
    let files_input = as_input(&files_el)?;
    let preview = ElementBuilder::new("div")?.class("preview-images").build();
    let preview_urls = Rc::new(RefCell::new(Vec::new()));
    {
        let preview = preview.clone();
        let urls = preview_urls.clone();
        let input = files_input.clone();
        on_change(&files_el, move |_| {
            if let Err(e) = render_preview(&preview, &urls, &input) {
                log::error!("❌ [UPLOAD] Error generando previsualización: {:?}", e);
            }
        })?;
    }

    let upload_btn = {
        let ctx = ctx.clone();
        let input = files_input.clone();
        ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "button")?
            .text("Upload")
            .on_click(move |_| {
                let ctx = ctx.clone();
                let files = input_files(&input);
                spawn_local(async move {
                    PersonsViewModel::new(ctx).upload_images(&files).await;
                });
            })?
            .build()
    };
    let buttons = ElementBuilder::new("div")?
        .class("modal-actions")
        .child(&upload_btn)?
        .child(&cancel_button(ctx, ModalId::UploadImages)?)?
        .build();

    let element = modal_shell(
        ModalId::UploadImages,
        "Upload Images",
        &[&target, &files_el, &preview, &buttons],
    )?;
    Ok(UploadImagesModal {
        element,
        target_name,
        files_input,
        preview,
        preview_urls,
    })
}
