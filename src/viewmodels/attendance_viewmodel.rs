// ============================================================================
// ATTENDANCE VIEWMODEL - Cámara + marcado de asistencia
// ============================================================================
// Un intento por captura, sin reintento automático. Tres resultados:
// reconocido, no reconocido (warning) o error.
// ============================================================================

use crate::models::{AttendanceOutcome, CameraPhase, Severity};
use crate::services::platform::{AttendanceApi, Platform};
use crate::state::IncrementalUpdate;
use crate::viewmodels::context::AppContext;
use crate::viewmodels::dashboard_viewmodel::DashboardViewModel;

pub struct AttendanceViewModel<P: Platform> {
    ctx: AppContext<P>,
}

impl<P: Platform> AttendanceViewModel<P> {
    pub fn new(ctx: AppContext<P>) -> Self {
        Self { ctx }
    }

    /// Hook de entrada a la sección: pedir la cámara si hace falta
    pub async fn ensure_camera(&self) -> CameraPhase {
        let result = self.ctx.camera.ensure_camera().await;
        self.ctx.refresh(IncrementalUpdate::Camera);
        match result {
            Ok(phase) => phase,
            Err(e) => {
                self.ctx
                    .notify(format!("Cannot access camera: {}", e), Severity::Error);
                CameraPhase::Failed
            }
        }
    }

    /// Botón "Capture": captura un frame y lo envía. `None` si no se envió nada.
    pub async fn capture_and_mark(&self) -> Option<AttendanceOutcome> {
        if *self.ctx.state.marking_in_flight.borrow() {
            log::warn!("⚠️ [ATTENDANCE] Marcado en curso, captura ignorada");
            return None;
        }

        let frame = match self.ctx.camera.capture_frame(&self.ctx.options.capture_mime) {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                self.ctx.notify("Camera is not ready yet", Severity::Warning);
                return None;
            }
            Err(e) => {
                self.ctx
                    .notify(format!("Error capturing image: {}", e), Severity::Error);
                return None;
            }
        };

        log::info!("📸 [ATTENDANCE] Frame {}x{} capturado", frame.width, frame.height);
        Some(self.mark_attendance(&frame.data_url).await)
    }

    pub async fn mark_attendance(&self, image_base64: &str) -> AttendanceOutcome {
        *self.ctx.state.marking_in_flight.borrow_mut() = true;
        self.ctx.state.set_attendance_status("Processing...");
        self.ctx.refresh(IncrementalUpdate::Attendance);

        let result = self.ctx.api.mark_attendance(image_base64).await;
        let outcome = AttendanceOutcome::from_result(result);

        *self.ctx.state.marking_in_flight.borrow_mut() = false;
        self.ctx.state.set_attendance_status(outcome.status_label());

        match &outcome {
            AttendanceOutcome::Recognized { person } => {
                log::info!("✅ [ATTENDANCE] Reconocido: {}", person);
                *self.ctx.state.last_person.borrow_mut() = Some(person.clone());
                self.ctx.refresh(IncrementalUpdate::Attendance);
                self.ctx.notify(
                    format!("Attendance marked for {}", person),
                    Severity::Success,
                );
                DashboardViewModel::new(self.ctx.clone())
                    .refresh_present_today()
                    .await;
            }
            AttendanceOutcome::NotRecognized => {
                self.ctx.refresh(IncrementalUpdate::Attendance);
                self.ctx
                    .notify("Face not recognized. Please try again.", Severity::Warning);
            }
            AttendanceOutcome::Failed { message } => {
                log::error!("❌ [ATTENDANCE] {}", message);
                self.ctx.refresh(IncrementalUpdate::Attendance);
                self.ctx.notify(
                    format!("Error marking attendance: {}", message),
                    Severity::Error,
                );
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiError, CameraError};
    use crate::testing::context;
    use futures::executor::block_on;
    use serde_json::json;

    fn with_camera() -> AttendanceViewModel<crate::testing::TestPlatform> {
        let ctx = context();
        let vm = AttendanceViewModel::new(ctx);
        assert_eq!(block_on(vm.ensure_camera()), CameraPhase::Active);
        vm
    }

    #[test]
    fn recognized_face_sets_last_person_and_refreshes_present_count() {
        let vm = with_camera();
        vm.ctx.api.reply(
            "POST /mark-attendance",
            json!({"status": "success", "person": "Alice", "timestamp": "2024-05-01T09:00:00"}),
        );
        vm.ctx.api.reply(
            "GET /attendance-stats",
            json!({"status": "success", "stats": {"total_present": 3}}),
        );

        let outcome = block_on(vm.capture_and_mark());

        assert_eq!(
            outcome,
            Some(AttendanceOutcome::Recognized {
                person: "Alice".to_string()
            })
        );
        assert_eq!(vm.ctx.state.last_person(), Some("Alice".to_string()));
        assert_eq!(vm.ctx.state.attendance_status(), "✅ Marked!");
        assert_eq!(vm.ctx.api.count("GET /attendance-stats"), 1);
        assert_eq!(vm.ctx.state.dashboard.borrow().present_today, Some(3));
        assert!(vm
            .ctx
            .api
            .last_image()
            .is_some_and(|img| img.starts_with("data:image/jpeg;base64,")));
        assert!(vm
            .ctx
            .ui
            .messages()
            .contains(&(Severity::Success, "Attendance marked for Alice".to_string())));
    }

    #[test]
    fn warning_changes_no_counters() {
        let vm = with_camera();
        vm.ctx.api.reply(
            "POST /mark-attendance",
            json!({"status": "warning", "message": "Face not recognized"}),
        );
        let before = vm.ctx.state.dashboard.borrow().clone();

        let outcome = block_on(vm.capture_and_mark());

        assert_eq!(outcome, Some(AttendanceOutcome::NotRecognized));
        assert_eq!(vm.ctx.state.attendance_status(), "⚠️ Not Recognized");
        assert_eq!(vm.ctx.state.last_person(), None);
        assert_eq!(*vm.ctx.state.dashboard.borrow(), before);
        assert_eq!(vm.ctx.api.count("GET /attendance-stats"), 0);
    }

    #[test]
    fn transport_failure_shows_error_status() {
        let vm = with_camera();
        vm.ctx
            .api
            .fail("POST /mark-attendance", ApiError::Network("connection refused".to_string()));

        let outcome = block_on(vm.capture_and_mark());

        assert!(matches!(outcome, Some(AttendanceOutcome::Failed { .. })));
        assert_eq!(vm.ctx.state.attendance_status(), "❌ Error");
        assert_eq!(vm.ctx.api.count("GET /attendance-stats"), 0);
        assert!(!*vm.ctx.state.marking_in_flight.borrow());
        assert_eq!(
            vm.ctx.ui.messages().last(),
            Some(&(
                Severity::Error,
                "Error marking attendance: Network error: connection refused".to_string()
            ))
        );
    }

    #[test]
    fn capture_without_camera_sends_nothing() {
        let vm = AttendanceViewModel::new(context());

        assert_eq!(block_on(vm.capture_and_mark()), None);
        assert_eq!(vm.ctx.api.count("POST /mark-attendance"), 0);
        assert_eq!(
            vm.ctx.ui.messages(),
            vec![(Severity::Warning, "Camera is not ready yet".to_string())]
        );
    }

    #[test]
    fn second_capture_while_in_flight_is_ignored() {
        let vm = with_camera();
        let (first, second) = block_on(async { futures::join!(vm.capture_and_mark(), vm.capture_and_mark()) });
        assert!(first.is_some());
        assert_eq!(second, None);
        assert_eq!(vm.ctx.api.count("POST /mark-attendance"), 1);
    }

    #[test]
    fn camera_denied_raises_error_notification() {
        let vm = AttendanceViewModel::new(context());
        vm.ctx
            .camera
            .device()
            .set_failure(Some(CameraError::PermissionDenied("Permission denied".to_string())));

        assert_eq!(block_on(vm.ensure_camera()), CameraPhase::Failed);
        assert_eq!(
            vm.ctx.ui.messages(),
            vec![(
                Severity::Error,
                "Cannot access camera: Permission denied: Permission denied".to_string()
            )]
        );
        assert!(vm.ctx.ui.saw(IncrementalUpdate::Camera));
    }
}
