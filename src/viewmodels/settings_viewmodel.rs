// ============================================================================
// SETTINGS VIEWMODEL - Configuración del servidor (solo lectura)
// ============================================================================

use crate::models::SystemSettings;
use crate::services::platform::{AttendanceApi, Platform};
use crate::state::{still_wanted, IncrementalUpdate, TaskToken};
use crate::viewmodels::context::AppContext;

pub struct SettingsViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> SettingsViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    pub async fn load(&self) {
        self.load_scoped(None).await;
    }

    pub async fn load_for_navigation(&self, navigation: TaskToken) {
        self.load_scoped(Some(navigation)).await;
    }

    async fn load_scoped(&self, navigation: Option<TaskToken>) {
        let token = self.ctx.state.scopes.settings.begin();
        let result = self.ctx.api.settings().await;
        if !still_wanted(&token, navigation.as_ref()) {
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                *self.ctx.state.settings.borrow_mut() = payload.settings;
                self.ctx.refresh(IncrementalUpdate::Settings);
            }
            Err(e) => self.ctx.report_read_failure("settings", &e),
        }
    }

    pub fn settings(&self) -> Option<SystemSettings> {
        self.ctx.state.settings.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::testing::context_with;
    use crate::viewmodels::context::ControllerOptions;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn load_stores_server_settings() {
        let vm = SettingsViewModel::new(crate::testing::context());
        vm.ctx.api.reply(
            "GET /settings",
            json!({"status": "success", "settings": {
                "datasets_dir": "datasets", "models_dir": "models",
                "logs_dir": "logs", "camera_enabled": true
            }}),
        );

        block_on(vm.load());

        let settings = vm.settings().unwrap();
        assert_eq!(settings.models_dir, "models");
        assert_eq!(settings.rows()[3], ("Camera", "Enabled".to_string()));
    }

    #[test]
    fn read_failure_toast_is_opt_in() {
        let options = ControllerOptions {
            notify_read_failures: true,
            ..ControllerOptions::default()
        };
        let vm = SettingsViewModel::new(context_with(options));
        vm.ctx.api.reply("GET /settings", json!({"status": "error", "message": "disabled"}));

        block_on(vm.load());

        assert_eq!(vm.settings(), None);
        assert_eq!(
            vm.ctx.ui.messages(),
            vec![(Severity::Warning, "Could not load settings: disabled".to_string())]
        );
    }
}
