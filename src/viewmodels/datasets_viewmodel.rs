// ============================================================================
// DATASETS VIEWMODEL - Datasets públicos + importación de archivo local
// ============================================================================

use crate::models::{DatasetInfo, DatasetTab, Severity};
use crate::services::platform::{AttendanceApi, Platform, UploadFile};
use crate::state::IncrementalUpdate;
use crate::viewmodels::context::AppContext;
use crate::viewmodels::dashboard_viewmodel::DashboardViewModel;
use crate::viewmodels::persons_viewmodel::PersonsViewModel;

pub struct DatasetsViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> DatasetsViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    pub async fn load(&self) {
        let token = self.ctx.state.scopes.datasets.begin();
        let result = self.ctx.api.available_datasets().await;
        if !token.is_current() {
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                log::info!("📦 [DATASETS] {} datasets disponibles", payload.datasets.len());
                *self.ctx.state.datasets.borrow_mut() = payload.datasets;
                self.ctx.refresh(IncrementalUpdate::Datasets);
            }
            Err(e) => self.ctx.report_read_failure("datasets", &e),
        }
    }

    #[cfg(test)]
    pub fn datasets(&self) -> Vec<DatasetInfo> {
        self.ctx.state.datasets.borrow().clone()
    }

    pub fn select_tab(&self, tab: DatasetTab) {
        let changed = {
            let mut current = self.ctx.state.dataset_tab.borrow_mut();
            let changed = *current != tab;
            *current = tab;
            changed
        };
        if changed {
            self.ctx.refresh(IncrementalUpdate::DatasetTab);
        }
    }

    /// Feedback visual del drag & drop
    pub fn set_drop_hover(&self, hover: bool) {
        let changed = self.ctx.state.drop_zone_hover.replace(hover) != hover;
        if changed {
            self.ctx.refresh(IncrementalUpdate::DropZone);
        }
    }

    /// Importación en el servidor de un dataset público (por id)
    pub async fn download(&self, dataset_id: &str) -> bool {
        self.ctx
            .notify("Downloading dataset... Please wait", Severity::Info);
        match self
            .ctx
            .api
            .download_dataset(dataset_id)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(_) => {
                self.ctx
                    .notify("Dataset downloaded successfully!", Severity::Success);
                self.refresh_dependents().await;
                true
            }
            Err(e) => {
                self.ctx.notify(
                    format!("Error downloading dataset: {}", e.user_message()),
                    Severity::Error,
                );
                false
            }
        }
    }

    /// Subida de un archivo local (input o drop). Sin archivo no hace nada.
    pub async fn upload(&self, file: Option<&<P::Api as AttendanceApi>::File>) -> bool {
        self.set_drop_hover(false);
        let Some(file) = file else {
            return false;
        };

        log::info!("📦 [DATASETS] Subiendo {}", file.name());
        self.ctx.notify("Uploading dataset...", Severity::Info);
        match self
            .ctx
            .api
            .import_local_dataset(file)
            .await
            .and_then(|r| r.into_result())
        {
            Ok(_) => {
                self.ctx
                    .notify("Dataset uploaded successfully!", Severity::Success);
                self.ctx.refresh(IncrementalUpdate::DatasetUploadCleared);
                self.refresh_dependents().await;
                true
            }
            Err(e) => {
                self.ctx.notify(
                    format!("Error uploading dataset: {}", e.user_message()),
                    Severity::Error,
                );
                false
            }
        }
    }

    /// Un dataset importado añade personas: dashboard + lista
    async fn refresh_dependents(&self) {
        let dashboard = DashboardViewModel::new(self.ctx.clone());
        let persons = PersonsViewModel::new(self.ctx.clone());
        futures::join!(dashboard.refresh(), persons.load());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiError;
    use crate::testing::{context, FakeFile};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn load_renders_cards() {
        let vm = DatasetsViewModel::new(context());
        vm.ctx.api.reply(
            "GET /datasets/available",
            json!({"status": "success", "datasets": [
                {"id": "lfw", "name": "LFW", "description": "Labeled Faces in the Wild",
                 "people_count": 5749, "size": "173 MB"}
            ]}),
        );

        block_on(vm.load());

        let datasets = vm.datasets();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].people_label(), "👥 5749 people");
        assert!(vm.ctx.ui.saw(IncrementalUpdate::Datasets));
    }

    #[test]
    fn download_sends_id_and_refreshes_dashboard_and_persons() {
        let vm = DatasetsViewModel::new(context());

        assert!(block_on(vm.download("lfw")));

        assert_eq!(vm.ctx.api.count("POST /datasets/download?dataset_name=lfw"), 1);
        assert_eq!(vm.ctx.api.count("GET /persons"), 2);
        assert_eq!(vm.ctx.api.count("GET /model-status"), 1);
        assert_eq!(
            vm.ctx.ui.messages(),
            vec![
                (Severity::Info, "Downloading dataset... Please wait".to_string()),
                (Severity::Success, "Dataset downloaded successfully!".to_string()),
            ]
        );
    }

    #[test]
    fn download_failure_reports_and_skips_refresh() {
        let vm = DatasetsViewModel::new(context());
        vm.ctx.api.fail(
            "POST /datasets/download",
            ApiError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            },
        );

        assert!(!block_on(vm.download("lfw")));
        assert_eq!(vm.ctx.api.count("GET /persons"), 0);
        assert_eq!(
            vm.ctx.ui.messages().last(),
            Some(&(
                Severity::Error,
                "Error downloading dataset: HTTP 502: Bad Gateway".to_string()
            ))
        );
    }

    #[test]
    fn upload_without_file_is_noop() {
        let vm = DatasetsViewModel::new(context());
        assert!(!block_on(vm.upload(None)));
        assert!(vm.ctx.api.calls().is_empty());
        assert!(vm.ctx.ui.messages().is_empty());
    }

    #[test]
    fn upload_clears_input_on_success() {
        let vm = DatasetsViewModel::new(context());
        vm.set_drop_hover(true);
        let archive = FakeFile("faces.zip".to_string());

        assert!(block_on(vm.upload(Some(&archive))));

        assert_eq!(vm.ctx.api.count("POST /datasets/import-local?file=faces.zip"), 1);
        assert!(vm.ctx.ui.saw(IncrementalUpdate::DatasetUploadCleared));
        assert!(!*vm.ctx.state.drop_zone_hover.borrow());
    }

    #[test]
    fn tab_and_hover_only_refresh_on_change() {
        let vm = DatasetsViewModel::new(context());
        vm.select_tab(DatasetTab::Available);
        vm.set_drop_hover(false);
        assert!(vm.ctx.ui.updates().is_empty());

        vm.select_tab(DatasetTab::Upload);
        vm.set_drop_hover(true);
        assert_eq!(
            vm.ctx.ui.updates(),
            vec![IncrementalUpdate::DatasetTab, IncrementalUpdate::DropZone]
        );
    }
}
