// ============================================================================
// DASHBOARD VIEWMODEL - Contadores + entrenamiento del modelo
// ============================================================================
// Cada contador es una lectura independiente con su propio scope: si una
// falla, los demás se actualizan igual.
// ============================================================================

use crate::models::Severity;
use crate::services::platform::{AttendanceApi, Platform};
use crate::state::IncrementalUpdate;
use crate::viewmodels::context::AppContext;

pub struct DashboardViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> DashboardViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    /// Personas, estado del modelo y presentes hoy, en paralelo
    pub async fn refresh(&self) {
        futures::join!(
            self.refresh_person_count(),
            self.refresh_model_status(),
            self.refresh_present_today()
        );
    }

    pub async fn refresh_person_count(&self) {
        let token = self.ctx.state.scopes.person_count.begin();
        let result = self.ctx.api.list_persons().await;
        if !token.is_current() {
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                self.ctx.state.dashboard.borrow_mut().total_persons = Some(payload.persons.len());
                self.ctx.refresh(IncrementalUpdate::Dashboard);
            }
            Err(e) => self.ctx.report_read_failure("person stats", &e),
        }
    }

    pub async fn refresh_model_status(&self) {
        let token = self.ctx.state.scopes.model_status.begin();
        let result = self.ctx.api.model_status().await;
        if !token.is_current() {
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                {
                    let mut counters = self.ctx.state.dashboard.borrow_mut();
                    counters.model_trained = Some(payload.is_trained);
                    if let Some(stats) = payload.stats {
                        counters.faces_encoded = Some(stats.total_encoded_faces);
                    }
                }
                self.ctx.refresh(IncrementalUpdate::Dashboard);
            }
            Err(e) => self.ctx.report_read_failure("model status", &e),
        }
    }

    pub async fn refresh_present_today(&self) {
        let token = self.ctx.state.scopes.present_today.begin();
        let result = self.ctx.api.attendance_stats().await;
        if !token.is_current() {
            return;
        }
        match result.and_then(|r| r.into_result()) {
            Ok(payload) => {
                let present = payload.stats.map(|s| s.total_present).unwrap_or(0);
                self.ctx.state.dashboard.borrow_mut().present_today = Some(present);
                self.ctx.refresh(IncrementalUpdate::Dashboard);
            }
            Err(e) => self.ctx.report_read_failure("today stats", &e),
        }
    }

    /// Reentrenar el modelo (puede tardar: aviso previo)
    pub async fn train_model(&self) {
        self.ctx.notify("Training model... Please wait", Severity::Info);
        match self.ctx.api.train_model().await.and_then(|r| r.into_result()) {
            Ok(payload) => {
                let encoded = payload.stats.map(|s| s.faces_encoded).unwrap_or(0);
                log::info!("🧠 [MODEL] Entrenado: {} caras", encoded);
                self.ctx.notify(
                    format!("Model trained successfully! Faces encoded: {}", encoded),
                    Severity::Success,
                );
                self.refresh_model_status().await;
            }
            Err(e) => {
                self.ctx.notify(
                    format!("Error training model: {}", e.user_message()),
                    Severity::Error,
                );
            }
        }
    }
}
