// ============================================================================
// PERSONS VIEWMODEL - Lista de personas + alta/baja/subida de imágenes
// ============================================================================

use crate::models::{ModalId, Person, Severity};
use crate::services::platform::{AttendanceApi, Platform, UploadFile};
use crate::state::IncrementalUpdate;
use crate::viewmodels::context::AppContext;
use crate::viewmodels::dashboard_viewmodel::DashboardViewModel;
use crate::viewmodels::modal_viewmodel::ModalViewModel;

/// Resultado de subir un lote de imágenes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub failed: Vec<String>,
}

pub struct PersonsViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> PersonsViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    /// Cargar la lista (gana la última petición)
    pub async fn load(&self) {
        let token = self.ctx.state.scopes.persons.begin();
        let result = self.ctx.api.list_persons().await;
        if !token.is_current() {
            log::debug!("⏭️ [PERSONS] Respuesta obsoleta descartada");
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                log::info!("👥 [PERSONS] {} personas", payload.persons.len());
                *self.ctx.state.persons.borrow_mut() = payload.persons;
                self.ctx.refresh(IncrementalUpdate::Persons);
            }
            Err(e) => self.ctx.report_read_failure("persons", &e),
        }
    }

    #[cfg(test)]
    pub fn persons(&self) -> Vec<Person> {
        self.ctx.state.persons.borrow().clone()
    }

    /// Alta de persona. Devuelve `true` si el backend la creó.
    pub async fn add_person(&self, raw_name: &str) -> bool {
        let name = raw_name.trim();
        if name.is_empty() {
            self.ctx.notify("Please enter a name", Severity::Error);
            return false;
        }

        match self.ctx.api.create_person(name).await.and_then(|r| r.into_result()) {
            Ok(created) => {
                log::info!("✅ [PERSONS] Creada: {} ({:?})", name, created.person_id);
                self.ctx.notify("Person added successfully!", Severity::Success);
                self.ctx.refresh(IncrementalUpdate::PersonFormCleared);
                ModalViewModel::new(self.ctx.clone()).close(ModalId::AddPerson);
                let dashboard = DashboardViewModel::new(self.ctx.clone());
                futures::join!(self.load(), dashboard.refresh());
                true
            }
            Err(e) => {
                self.ctx.notify(
                    format!("Error adding person: {}", e.user_message()),
                    Severity::Error,
                );
                false
            }
        }
    }

    /// Baja de persona (la vista ya pidió confirmación)
    pub async fn delete_person(&self, person_id: &str) -> bool {
        match self
            .ctx
            .api
            .delete_person(person_id)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(_) => {
                log::info!("🗑️ [PERSONS] Eliminada: {}", person_id);
                self.ctx.notify("Person deleted successfully", Severity::Success);
                let dashboard = DashboardViewModel::new(self.ctx.clone());
                futures::join!(self.load(), dashboard.refresh());
                true
            }
            Err(e) => {
                self.ctx.notify(
                    format!("Error deleting person: {}", e.user_message()),
                    Severity::Error,
                );
                false
            }
        }
    }

    /// Subir imágenes para la persona del modal (una petición por archivo)
    pub async fn upload_images(&self, files: &[<P::Api as AttendanceApi>::File]) -> UploadSummary {
        let mut summary = UploadSummary::default();

        if files.is_empty() {
            self.ctx
                .notify("Please select at least one image", Severity::Error);
            return summary;
        }
        let Some(person) = self.ctx.state.selected_person() else {
            log::warn!("⚠️ [PERSONS] Subida sin persona seleccionada");
            self.ctx.notify("No person selected", Severity::Error);
            return summary;
        };

        for file in files {
            let name = file.name();
            match self
                .ctx
                .api
                .upload_image(&person.id, file)
                .await
                .and_then(|r| r.into_result())
            {
                Ok(_) => summary.uploaded += 1,
                Err(e) => {
                    log::error!("❌ [PERSONS] Fallo subiendo {}: {}", name, e);
                    self.ctx.notify(
                        format!("Failed to upload {}: {}", name, e.user_message()),
                        Severity::Error,
                    );
                    summary.failed.push(name);
                }
            }
        }

        if summary.uploaded > 0 {
            self.ctx
                .notify("Images uploaded successfully!", Severity::Success);
            ModalViewModel::new(self.ctx.clone()).close(ModalId::UploadImages);
            self.load().await;
        }
        summary
    }
}
