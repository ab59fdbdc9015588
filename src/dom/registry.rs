// ============================================================================
// VIEW REGISTRY - Handles tipados resueltos una vez al arrancar
// ============================================================================
// Section → (sección, botón de navegación), ModalId → fondo del modal, y las
// vistas de cada sección. Nada se busca por id en tiempo de ejecución.
// ============================================================================

use std::collections::HashMap;
use web_sys::Element;
use crate::dom::{set_text_content, sync_class};
use crate::models::{ModalId, Section};
use crate::utils::constants::ACTIVE_CLASS;
use crate::views::attendance::AttendanceView;
use crate::views::dashboard::DashboardView;
use crate::views::datasets::DatasetsView;
use crate::views::logs::LogsView;
use crate::views::modals::{AddPersonModal, UploadImagesModal};
use crate::views::persons::PersonsView;
use crate::views::settings::SettingsView;

pub struct SectionHandle {
    pub section: Element,
    pub nav_button: Element,
}

pub struct ViewRegistry {
    pub sections: HashMap<Section, SectionHandle>,
    pub title: Element,
    pub header_clock: Element,
    pub dashboard: DashboardView,
    pub attendance: AttendanceView,
    pub persons: PersonsView,
    pub logs: LogsView,
    pub datasets: DatasetsView,
    pub settings: SettingsView,
    pub add_person: AddPersonModal,
    pub upload_images: UploadImagesModal,
    pub toasts: Element,
}

impl ViewRegistry {
    /// Exactamente un par sección/botón con la clase activa
    pub fn show_section(&self, active: Section) {
        for (section, handle) in &self.sections {
            let on = *section == active;
            sync_class(&handle.section, ACTIVE_CLASS, on);
            sync_class(&handle.nav_button, ACTIVE_CLASS, on);
        }
        set_text_content(&self.title, active.title());
    }

    pub fn modal_element(&self, modal: ModalId) -> &Element {
        match modal {
            ModalId::AddPerson => &self.add_person.element,
            ModalId::UploadImages => &self.upload_images.element,
        }
    }

    /// Modal cuyo fondo es exactamente `target`
    pub fn modal_for_target(&self, target: &Element) -> Option<ModalId> {
        ModalId::ALL
            .into_iter()
            .find(|modal| self.modal_element(*modal) == target)
    }
}
