// ============================================================================
// MODAL VIEWMODEL - Abrir/cerrar overlays
// ============================================================================
// Sin pila ni exclusión mutua: cada modal es abierto/cerrado por separado.
// ============================================================================

use crate::models::{ModalId, Person, SelectedPerson};
use crate::services::platform::Platform;
use crate::state::IncrementalUpdate;
use crate::viewmodels::context::AppContext;

pub struct ModalViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> ModalViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    pub fn open(&self, modal: ModalId) {
        self.ctx.state.open_modals.borrow_mut().insert(modal);
        self.ctx.refresh(IncrementalUpdate::Modal(modal));
    }

    /// Modal de subida: fija antes la persona destino
    pub fn open_upload_for(&self, person: &Person) {
        *self.ctx.state.selected_person.borrow_mut() = Some(SelectedPerson::from(person));
        self.open(ModalId::UploadImages);
    }

    pub fn close(&self, modal: ModalId) {
        let was_open = self.ctx.state.open_modals.borrow_mut().remove(&modal);
        if was_open {
            self.ctx.refresh(IncrementalUpdate::Modal(modal));
        }
    }

    pub fn is_open(&self, modal: ModalId) -> bool {
        self.ctx.state.is_modal_open(modal)
    }

    /// Click global: `target` es el modal cuyo fondo es exactamente el
    /// elemento clicado (None si se clicó cualquier otra cosa).
    pub fn handle_outside_click(&self, target: Option<ModalId>) -> bool {
        match target {
            Some(modal) if self.is_open(modal) => {
                self.close(modal);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::context;

    fn alice() -> Person {
        Person {
            id: "p1".to_string(),
            name: "Alice".to_string(),
            image_count: 0,
        }
    }

    #[test]
    fn open_upload_captures_person_context() {
        let ctx = context();
        let vm = ModalViewModel::new(ctx.clone());
        vm.open_upload_for(&alice());
        assert!(vm.is_open(ModalId::UploadImages));
        assert_eq!(
            ctx.state.selected_person(),
            Some(SelectedPerson {
                id: "p1".to_string(),
                name: "Alice".to_string()
            })
        );

        let bob = Person {
            id: "p2".to_string(),
            name: "Bob".to_string(),
            image_count: 1,
        };
        vm.open_upload_for(&bob);
        assert_eq!(ctx.state.selected_person().map(|p| p.id), Some("p2".to_string()));
    }

    #[test]
    fn modals_are_independent() {
        let vm = ModalViewModel::new(context());
        vm.open(ModalId::AddPerson);
        vm.open(ModalId::UploadImages);
        vm.close(ModalId::AddPerson);
        assert!(!vm.is_open(ModalId::AddPerson));
        assert!(vm.is_open(ModalId::UploadImages));
    }

    #[test]
    fn outside_click_closes_only_backdrop_target() {
        let ctx = context();
        let vm = ModalViewModel::new(ctx.clone());
        vm.open(ModalId::AddPerson);

        // Click dentro del contenido: no hay modal objetivo
        assert!(!vm.handle_outside_click(None));
        assert!(vm.is_open(ModalId::AddPerson));

        assert!(vm.handle_outside_click(Some(ModalId::AddPerson)));
        assert!(!vm.is_open(ModalId::AddPerson));
        assert!(ctx.ui.saw(IncrementalUpdate::Modal(ModalId::AddPerson)));

        // Modal ya cerrado
        assert!(!vm.handle_outside_click(Some(ModalId::AddPerson)));
    }
}
