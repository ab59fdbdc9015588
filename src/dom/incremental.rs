// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza la parte que cambió, leyendo del estado y escribiendo en los
// handles del registro.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::app::WebContext;
use crate::dom::registry::ViewRegistry;
use crate::models::ModalId;
use crate::state::IncrementalUpdate;

/// Aplicar una actualización concreta
pub fn apply_update(
    registry: &ViewRegistry,
    ctx: &WebContext,
    update: IncrementalUpdate,
) -> Result<(), JsValue> {
    let state = &ctx.state;
    match update {
        IncrementalUpdate::Navigation => registry.show_section(state.active_section()),
        IncrementalUpdate::Modal(ModalId::AddPerson) => {
            registry.add_person.sync(state.is_modal_open(ModalId::AddPerson));
        }
        IncrementalUpdate::Modal(ModalId::UploadImages) => {
            registry.upload_images.sync(
                state.is_modal_open(ModalId::UploadImages),
                state.selected_person().as_ref(),
            );
        }
        IncrementalUpdate::Dashboard => registry.dashboard.sync(&state.dashboard.borrow()),
        IncrementalUpdate::Persons => {
            registry.persons.render_cards(&state.persons.borrow())?;
        }
        IncrementalUpdate::PersonFormCleared => registry.add_person.clear(),
        IncrementalUpdate::Logs => {
            registry.logs.sync(&state.log_date(), &state.logs.borrow())?;
        }
        IncrementalUpdate::Datasets => {
            registry.datasets.render_cards(&state.datasets.borrow())?;
        }
        IncrementalUpdate::DatasetTab => registry.datasets.sync_tab(*state.dataset_tab.borrow()),
        IncrementalUpdate::DropZone => registry.datasets.sync_hover(*state.drop_zone_hover.borrow()),
        IncrementalUpdate::DatasetUploadCleared => registry.datasets.clear_upload(),
        IncrementalUpdate::Attendance => registry.attendance.sync(state),
        IncrementalUpdate::Camera => registry.attendance.sync_camera(ctx.camera.phase()),
        IncrementalUpdate::Settings => {
            registry.settings.sync(state.settings.borrow().as_ref())?;
        }
        IncrementalUpdate::Clock => {
            let label = state.clock_label.borrow().clone();
            crate::dom::set_text_content(&registry.header_clock, &label);
            registry.attendance.sync_clock(&label);
        }
    }
    Ok(())
}

/// Sincronizar todo (render completo sobre el DOM ya construido)
pub fn apply_all(registry: &ViewRegistry, ctx: &WebContext) -> Result<(), JsValue> {
    let updates = [
        IncrementalUpdate::Navigation,
        IncrementalUpdate::Modal(ModalId::AddPerson),
        IncrementalUpdate::Modal(ModalId::UploadImages),
        IncrementalUpdate::Dashboard,
        IncrementalUpdate::Persons,
        IncrementalUpdate::Logs,
        IncrementalUpdate::Datasets,
        IncrementalUpdate::DatasetTab,
        IncrementalUpdate::DropZone,
        IncrementalUpdate::Attendance,
        IncrementalUpdate::Camera,
        IncrementalUpdate::Settings,
        IncrementalUpdate::Clock,
    ];
    for update in updates {
        apply_update(registry, ctx, update)?;
    }
    Ok(())
}
