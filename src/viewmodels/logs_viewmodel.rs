// ============================================================================
// LOGS VIEWMODEL - Registros de asistencia de una fecha
// ============================================================================
// La fecha vive en el estado (por defecto hoy). Cambiarla o volver a entrar
// en la sección vuelve a pedir los logs de esa fecha exacta.
// ============================================================================

use crate::models::{AttendanceLog, LogsQuery};
use crate::services::platform::{AttendanceApi, Platform};
use crate::state::{still_wanted, IncrementalUpdate, TaskToken};
use crate::utils::time::parse_log_date;
use crate::viewmodels::context::AppContext;

pub struct LogsViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> LogsViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    /// Fijar la fecha (`YYYY-MM-DD`). Una fecha inválida se ignora.
    pub fn set_date(&self, raw: &str) -> bool {
        match parse_log_date(raw) {
            Some(date) => {
                *self.ctx.state.log_date.borrow_mut() = date.format("%Y-%m-%d").to_string();
                true
            }
            None => {
                log::warn!("⚠️ [LOGS] Fecha inválida: {:?}", raw);
                false
            }
        }
    }

    pub fn set_person_filter(&self, person: Option<String>) {
        *self.ctx.state.log_person_filter.borrow_mut() = person
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
    }

    pub fn query(&self) -> LogsQuery {
        LogsQuery::new(
            self.ctx.state.log_date(),
            self.ctx.state.log_person_filter.borrow().clone(),
        )
    }

    /// Cambio de fecha desde el input + recarga
    pub async fn change_date(&self, raw: &str) {
        if self.set_date(raw) {
            self.load().await;
        }
    }

    pub async fn load(&self) {
        self.load_scoped(None).await;
    }

    /// Carga disparada al entrar en la sección: se descarta si el usuario
    /// navega a otra parte antes de la respuesta.
    pub async fn load_for_navigation(&self, navigation: TaskToken) {
        self.load_scoped(Some(navigation)).await;
    }

    async fn load_scoped(&self, navigation: Option<TaskToken>) {
        let token = self.ctx.state.scopes.logs.begin();
        let query = self.query();
        log::info!("📋 [LOGS] Cargando logs de {}", query.date);

        let result = self.ctx.api.attendance_logs(&query).await;
        if !still_wanted(&token, navigation.as_ref()) {
            log::debug!("⏭️ [LOGS] Respuesta obsoleta para {} descartada", query.date);
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                *self.ctx.state.logs.borrow_mut() = payload.logs;
                *self.ctx.state.logs_loaded_for.borrow_mut() = Some(query.date);
                self.ctx.refresh(IncrementalUpdate::Logs);
            }
            Err(e) => self.ctx.report_read_failure("logs", &e),
        }
    }

    #[cfg(test)]
    pub fn logs(&self) -> Vec<AttendanceLog> {
        self.ctx.state.logs.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, TEST_LOG_DATE};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn load_uses_state_date() {
        let vm = LogsViewModel::new(context());
        block_on(vm.load());
        assert_eq!(
            vm.ctx.api.calls(),
            vec![format!("GET /attendance-logs?date={}", TEST_LOG_DATE)]
        );
        assert_eq!(
            *vm.ctx.state.logs_loaded_for.borrow(),
            Some(TEST_LOG_DATE.to_string())
        );
    }

    #[test]
    fn changing_date_fetches_exactly_that_date() {
        let vm = LogsViewModel::new(context());
        vm.ctx.api.reply(
            "GET /attendance-logs?date=2024-06-15",
            json!({"status": "success", "logs": [
                {"person_name": "Alice", "timestamp": "2024-06-15T09:01:00",
                 "checkout_time": null, "duration": null}
            ]}),
        );

        block_on(vm.change_date("2024-06-15"));

        assert_eq!(
            vm.ctx.api.calls(),
            vec!["GET /attendance-logs?date=2024-06-15".to_string()]
        );
        assert_eq!(vm.logs().len(), 1);
        assert_eq!(vm.logs()[0].person_name, "Alice");
    }

    #[test]
    fn invalid_date_is_ignored() {
        let vm = LogsViewModel::new(context());
        block_on(vm.change_date("15/06/2024"));
        assert!(vm.ctx.api.calls().is_empty());
        assert_eq!(vm.ctx.state.log_date(), TEST_LOG_DATE);
    }

    #[test]
    fn person_filter_is_sent_when_present() {
        let vm = LogsViewModel::new(context());
        vm.set_person_filter(Some(" Bob ".to_string()));
        block_on(vm.load());
        vm.set_person_filter(Some("   ".to_string()));
        block_on(vm.load());
        assert_eq!(
            vm.ctx.api.calls(),
            vec![
                format!("GET /attendance-logs?date={}&person_id=Bob", TEST_LOG_DATE),
                format!("GET /attendance-logs?date={}", TEST_LOG_DATE),
            ]
        );
    }

    #[test]
    fn latest_date_wins() {
        let vm = LogsViewModel::new(context());
        vm.ctx.api.reply(
            "GET /attendance-logs?date=2024-06-01",
            json!({"status": "success", "logs": [
                {"person_name": "Old", "timestamp": "2024-06-01T08:00:00"}
            ]}),
        );
        vm.ctx.api.reply(
            "GET /attendance-logs?date=2024-06-02",
            json!({"status": "success", "logs": []}),
        );

        block_on(async {
            vm.set_date("2024-06-01");
            let first = vm.load();
            futures::pin_mut!(first);
            // Primer poll: la petición del día 1 queda en vuelo
            assert!(futures::poll!(first.as_mut()).is_pending());
            vm.set_date("2024-06-02");
            futures::join!(first, vm.load());
        });

        assert!(vm.logs().is_empty());
        assert_eq!(
            *vm.ctx.state.logs_loaded_for.borrow(),
            Some("2024-06-02".to_string())
        );
    }

    #[test]
    fn navigation_away_drops_entry_load() {
        let ctx = context();
        let vm = LogsViewModel::new(ctx.clone());
        vm.ctx.api.reply(
            "GET /attendance-logs",
            json!({"status": "success", "logs": [
                {"person_name": "Alice", "timestamp": "2024-05-01T09:00:00"}
            ]}),
        );

        let nav = ctx.state.scopes.navigation.begin();
        block_on(async {
            let load = vm.load_for_navigation(nav);
            futures::pin_mut!(load);
            assert!(futures::poll!(load.as_mut()).is_pending());
            // El usuario se va a otra sección antes de la respuesta
            ctx.state.scopes.navigation.begin();
            load.await;
        });

        assert!(vm.logs().is_empty());
        assert!(!ctx.ui.saw(IncrementalUpdate::Logs));
    }
}
