// ============================================================================
// PERSONS VIEW - Grid de tarjetas de persona
// ============================================================================
// Las tarjetas se regeneran en cada carga; los clicks de sus botones los
// atiende un único listener delegado en el grid.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::app::WebContext;
use crate::dom::{append_child, clear_children, on_click_within, text_element, window, ElementBuilder};
use crate::models::{ModalId, Person, Section};
use crate::viewmodels::{ModalViewModel, PersonsViewModel};

const DELETE_CONFIRM: &str = "Are you sure you want to delete this person?";
const ACTION_ATTR: &str = "data-action";
const PERSON_ID_ATTR: &str = "data-person-id";

/// Botones de una tarjeta de persona
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    UploadImages,
    Delete,
}

impl CardAction {
    pub fn attr(self) -> &'static str {
        match self {
            CardAction::UploadImages => "upload-images",
            CardAction::Delete => "delete",
        }
    }

    pub fn from_attr(raw: &str) -> Option<Self> {
        [CardAction::UploadImages, CardAction::Delete]
            .into_iter()
            .find(|a| a.attr() == raw)
    }
}

/// Persona de la tarjeta pulsada (el grid puede haber cambiado desde el render)
pub fn person_by_id<'a>(persons: &'a [Person], id: &str) -> Option<&'a Person> {
    persons.iter().find(|p| p.id == id)
}

pub struct PersonsView {
    pub section: Element,
    grid: Element,
}

impl PersonsView {
    /// Reemplazar el contenido del grid por completo
    pub fn render_cards(&self, persons: &[Person]) -> Result<(), JsValue> {
        clear_children(&self.grid);
        if persons.is_empty() {
            append_child(&self.grid, &text_element("p", "empty-state", "No persons registered yet")?)?;
            return Ok(());
        }
        for person in persons {
            append_child(&self.grid, &render_person_card(person)?)?;
        }
        Ok(())
    }
}

fn action_button(action: CardAction, class: &str, title: &str, icon: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr(ACTION_ATTR, action.attr())?
        .attr("title", title)?
        .text(icon)
        .build())
}

fn render_person_card(person: &Person) -> Result<Element, JsValue> {
    let upload_btn = action_button(CardAction::UploadImages, "btn-icon", "Upload images", "📷")?;
    let delete_btn = action_button(CardAction::Delete, "btn-icon btn-danger", "Delete person", "🗑️")?;

    let info = ElementBuilder::new("div")?
        .class("person-info")
        .child(&text_element("div", "person-name", &person.name)?)?
        .child(&text_element(
            "div",
            "person-images",
            &format!("Images: {}", person.image_count),
        )?)?
        .child(
            &ElementBuilder::new("div")?
                .class("person-actions")
                .children([&upload_btn, &delete_btn])?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("person-card")
        .attr(PERSON_ID_ATTR, &person.id)?
        .child(&text_element("div", "person-avatar", "👤")?)?
        .child(&info)?
        .build())
}

fn handle_card_action(ctx: &WebContext, button: Element) {
    let Some(action) = button.get_attribute(ACTION_ATTR).as_deref().and_then(CardAction::from_attr) else {
        return;
    };
    let Some(person_id) = button
        .closest(&format!("[{}]", PERSON_ID_ATTR))
        .ok()
        .flatten()
        .and_then(|card| card.get_attribute(PERSON_ID_ATTR))
    else {
        return;
    };

    match action {
        CardAction::UploadImages => {
            let person = person_by_id(&ctx.state.persons.borrow(), &person_id).cloned();
            match person {
                Some(person) => ModalViewModel::new(ctx.clone()).open_upload_for(&person),
                None => log::warn!("⚠️ [PERSONS] Persona {} ya no está en la lista", person_id),
            }
        }
        CardAction::Delete => {
            let confirmed = window()
                .and_then(|w| w.confirm_with_message(DELETE_CONFIRM).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let ctx = ctx.clone();
            spawn_local(async move {
                PersonsViewModel::new(ctx).delete_person(&person_id).await;
            });
        }
    }
}

pub fn render_persons(ctx: &WebContext) -> Result<PersonsView, JsValue> {
    let add_btn = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("➕ Add Person")
            .on_click(move |_| {
                ModalViewModel::new(ctx.clone()).open(ModalId::AddPerson);
            })?
            .build()
    };

    let toolbar = ElementBuilder::new("div")?
        .class("section-toolbar")
        .child(&add_btn)?
        .build();
    let grid = ElementBuilder::new("div")?.class("persons-grid").build();
    {
        let ctx = ctx.clone();
        on_click_within(&grid, &format!("[{}]", ACTION_ATTR), move |button| {
            handle_card_action(&ctx, button)
        })?;
    }

    let section = ElementBuilder::new("section")?
        .id(Section::Persons.key())?
        .class("content-section")
        .children([&toolbar, &grid])?
        .build();

    let view = PersonsView { section, grid };
    view.render_cards(&ctx.state.persons.borrow())?;
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            image_count: 0,
        }
    }

    #[test]
    fn card_actions_round_trip_through_the_attribute() {
        for action in [CardAction::UploadImages, CardAction::Delete] {
            assert_eq!(CardAction::from_attr(action.attr()), Some(action));
        }
        assert_eq!(CardAction::from_attr("edit"), None);
    }

    #[test]
    fn clicked_card_resolves_against_current_list() {
        let persons = vec![person("p1", "Alice"), person("p2", "Bob")];
        assert_eq!(person_by_id(&persons, "p2").map(|p| p.name.as_str()), Some("Bob"));
        assert!(person_by_id(&persons, "gone").is_none());
    }
}
