// ============================================================================
// CAMERA SESSION MANAGER - Una sola sesión de cámara por página
// ============================================================================
// Absent → Acquiring → Active | Failed. Mientras hay una petición en curso o
// la sesión está activa, `ensure_camera` no vuelve a pedir el dispositivo.
// Un fallo no se reintenta solo: hace falta otra entrada a la sección.
// ============================================================================

use std::cell::{Cell, RefCell};
use crate::models::{CameraError, CameraPhase, CapturedFrame};
use crate::services::platform::CameraDevice;

enum CameraSession<S> {
    Absent,
    Acquiring,
    Active(S),
    Failed(CameraError),
}

pub struct CameraSessionManager<D: CameraDevice> {
    device: D,
    session: RefCell<CameraSession<D::Stream>>,
    acquisitions: Cell<u32>,
    /// `release()` llegó mientras la petición estaba en curso
    release_requested: Cell<bool>,
}

impl<D: CameraDevice> CameraSessionManager<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            session: RefCell::new(CameraSession::Absent),
            acquisitions: Cell::new(0),
            release_requested: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn phase(&self) -> CameraPhase {
        match &*self.session.borrow() {
            CameraSession::Absent => CameraPhase::Absent,
            CameraSession::Acquiring => CameraPhase::Acquiring,
            CameraSession::Active(_) => CameraPhase::Active,
            CameraSession::Failed(_) => CameraPhase::Failed,
        }
    }

    #[cfg(test)]
    pub fn last_error(&self) -> Option<CameraError> {
        match &*self.session.borrow() {
            CameraSession::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }

    /// Peticiones de dispositivo hechas desde que se creó la página
    #[cfg(test)]
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions.get()
    }

    /// Adquirir la cámara si no está activa ni en curso.
    /// Devuelve la fase resultante; `Err` solo si esta llamada hizo la petición y falló.
    pub async fn ensure_camera(&self) -> Result<CameraPhase, CameraError> {
        {
            let mut session = self.session.borrow_mut();
            match &*session {
                CameraSession::Active(_) => return Ok(CameraPhase::Active),
                CameraSession::Acquiring => {
                    // Volver a entrar anula un release pendiente
                    self.release_requested.set(false);
                    return Ok(CameraPhase::Acquiring);
                }
                CameraSession::Failed(previous) => {
                    log::info!("📷 [CAMERA] Reintentando tras error: {}", previous);
                    *session = CameraSession::Acquiring;
                }
                CameraSession::Absent => {
                    *session = CameraSession::Acquiring;
                }
            }
        }
        self.acquisitions.set(self.acquisitions.get() + 1);
        self.release_requested.set(false);

        match self.device.request_video().await {
            Ok(stream) => {
                if self.release_requested.replace(false) {
                    log::info!("📷 [CAMERA] Liberada antes de terminar la adquisición");
                    self.device.release(stream);
                    *self.session.borrow_mut() = CameraSession::Absent;
                    return Ok(CameraPhase::Absent);
                }
                if let Err(e) = self.device.bind_preview(&stream) {
                    log::error!("❌ [CAMERA] No se pudo enlazar la previsualización: {}", e);
                    self.device.release(stream);
                    *self.session.borrow_mut() = CameraSession::Failed(e.clone());
                    return Err(e);
                }
                log::info!("✅ [CAMERA] Cámara activa");
                *self.session.borrow_mut() = CameraSession::Active(stream);
                Ok(CameraPhase::Active)
            }
            Err(e) => {
                log::error!("❌ [CAMERA] Acceso denegado o sin dispositivo: {}", e);
                self.release_requested.set(false);
                *self.session.borrow_mut() = CameraSession::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Capturar el frame actual. `Ok(None)` si la cámara no está activa.
    pub fn capture_frame(&self, mime: &str) -> Result<Option<CapturedFrame>, CameraError> {
        match &*self.session.borrow() {
            CameraSession::Active(stream) => self.device.capture(stream, mime).map(Some),
            _ => {
                log::warn!("⚠️ [CAMERA] Captura ignorada: la cámara no está activa");
                Ok(None)
            }
        }
    }

    /// Detener la sesión. Si la adquisición está en curso, se libera al llegar.
    pub fn release(&self) {
        let previous = std::mem::replace(&mut *self.session.borrow_mut(), CameraSession::Absent);
        match previous {
            CameraSession::Active(stream) => self.device.release(stream),
            CameraSession::Acquiring => {
                self.release_requested.set(true);
                *self.session.borrow_mut() = CameraSession::Acquiring;
            }
            CameraSession::Absent | CameraSession::Failed(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeCamera;
    use futures::executor::block_on;

    #[test]
    fn ensure_twice_acquires_once() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        assert_eq!(block_on(manager.ensure_camera()), Ok(CameraPhase::Active));
        assert_eq!(block_on(manager.ensure_camera()), Ok(CameraPhase::Active));
        assert_eq!(manager.acquisitions(), 1);
        assert_eq!(manager.device().requests(), 1);
        assert_eq!(manager.device().bound(), 1);
    }

    #[test]
    fn concurrent_ensure_while_acquiring_requests_once() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        let (first, second) = block_on(async {
            futures::join!(manager.ensure_camera(), manager.ensure_camera())
        });
        assert_eq!(first, Ok(CameraPhase::Active));
        assert_eq!(second, Ok(CameraPhase::Acquiring));
        assert_eq!(manager.device().requests(), 1);
        assert_eq!(manager.phase(), CameraPhase::Active);
    }

    #[test]
    fn failure_is_not_retried_until_next_ensure() {
        let manager = CameraSessionManager::new(FakeCamera::failing(CameraError::PermissionDenied(
            "denied".to_string(),
        )));
        assert!(block_on(manager.ensure_camera()).is_err());
        assert_eq!(manager.phase(), CameraPhase::Failed);
        assert_eq!(manager.device().requests(), 1);
        assert!(manager.last_error().is_some());

        manager.device().set_failure(None);
        assert_eq!(block_on(manager.ensure_camera()), Ok(CameraPhase::Active));
        assert_eq!(manager.device().requests(), 2);
    }

    #[test]
    fn capture_without_session_is_a_noop() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        assert_eq!(manager.capture_frame("image/jpeg"), Ok(None));
        assert_eq!(manager.device().captures(), 0);

        block_on(manager.ensure_camera()).unwrap();
        let frame = manager.capture_frame("image/jpeg").unwrap().unwrap();
        assert!(frame.data_url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(manager.device().captures(), 1);
    }

    #[test]
    fn release_stops_tracks_and_allows_reacquire() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        block_on(manager.ensure_camera()).unwrap();
        manager.release();
        assert_eq!(manager.phase(), CameraPhase::Absent);
        assert_eq!(manager.device().released(), 1);

        block_on(manager.ensure_camera()).unwrap();
        assert_eq!(manager.device().requests(), 2);
    }

    #[test]
    fn release_during_acquisition_drops_stream_on_arrival() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        let (phase, ()) = block_on(async {
            futures::join!(manager.ensure_camera(), async { manager.release() })
        });
        assert_eq!(phase, Ok(CameraPhase::Absent));
        assert_eq!(manager.phase(), CameraPhase::Absent);
        assert_eq!(manager.device().released(), 1);
        assert_eq!(manager.device().bound(), 0);
    }

    #[test]
    fn reentering_while_acquiring_cancels_pending_release() {
        let manager = CameraSessionManager::new(FakeCamera::new());
        let (first, (), second) = block_on(async {
            futures::join!(
                manager.ensure_camera(),
                async { manager.release() },
                manager.ensure_camera()
            )
        });
        assert_eq!(first, Ok(CameraPhase::Active));
        assert_eq!(second, Ok(CameraPhase::Acquiring));
        assert_eq!(manager.phase(), CameraPhase::Active);
        assert_eq!(manager.device().requests(), 1);
        assert_eq!(manager.device().released(), 0);
        assert_eq!(manager.device().bound(), 1);
    }
}
