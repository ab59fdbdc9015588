// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Poner o quitar una clase según `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

/// `set_class` para sincronizar vistas: el fallo se registra, no se propaga
pub fn sync_class(element: &Element, class: &str, on: bool) -> bool {
    class_applied(class, set_class(element, class, on))
}

fn class_applied<E: std::fmt::Debug>(class: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ [DOM] No se pudo cambiar la clase {:?}: {:?}", class, e);
            false
        }
    }
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor (los listeners de los hijos se liberan con ellos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Castear a `<input>`
pub fn as_input(element: &Element) -> Result<HtmlInputElement, JsValue> {
    element
        .clone()
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("Element is not an <input>"))
}

/// Archivos seleccionados en un `<input type="file">`
pub fn input_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_class_toggle_is_reported() {
        assert!(class_applied::<String>("active", Ok(())));
        assert!(!class_applied("active", Err("DOMTokenList unavailable".to_string())));
    }
}
