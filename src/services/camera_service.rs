// ============================================================================
// CAMERA SERVICE - getUserMedia + captura en canvas fuera de pantalla
// ============================================================================
// Solo habla con el navegador. Quién pide la cámara, cuándo y cuántas veces
// lo decide `CameraSessionManager`.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use crate::models::{CameraError, CapturedFrame};
use crate::services::platform::CameraDevice;
use crate::utils::constants::CAMERA_VIDEO_ID;

/// Cámara del navegador enlazada a un `<video>` por id
pub struct WebCamera {
    video_id: String,
}

impl WebCamera {
    pub fn new() -> Self {
        Self::with_video_id(CAMERA_VIDEO_ID)
    }

    pub fn with_video_id(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
        }
    }

    fn video_element(&self) -> Result<HtmlVideoElement, CameraError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.video_id))
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
            .ok_or_else(|| {
                CameraError::CaptureFailed(format!("Video element #{} not found", self.video_id))
            })
    }
}

impl Default for WebCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Leer `name` y `message` de un DOMException (o de cualquier Error JS)
fn classify_js_error(err: &JsValue) -> CameraError {
    let field = |key: &str| {
        js_sys::Reflect::get(err, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    CameraError::from_dom_exception(&field("name"), &field("message"))
}

impl CameraDevice for WebCamera {
    type Stream = MediaStream;

    async fn request_video(&self) -> Result<MediaStream, CameraError> {
        let window = web_sys::window().ok_or(CameraError::Unsupported)?;
        let media_devices = window
            .navigator()
            .media_devices()
            .map_err(|_| CameraError::Unsupported)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::FALSE);

        let promise = media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| classify_js_error(&e))?;

        log::info!("📷 [CAMERA] Solicitando acceso a la cámara");
        let stream = JsFuture::from(promise)
            .await
            .map_err(|e| classify_js_error(&e))?;

        stream
            .dyn_into::<MediaStream>()
            .map_err(|_| CameraError::DeviceUnavailable("getUserMedia returned no stream".to_string()))
    }

    fn bind_preview(&self, stream: &MediaStream) -> Result<(), CameraError> {
        let video = self.video_element()?;
        video.set_src_object(Some(stream));
        // play() devuelve una promesa; el autoplay rechazado no invalida el stream
        if let Err(e) = video.play() {
            log::warn!("⚠️ [CAMERA] play() falló: {:?}", e);
        }
        Ok(())
    }

    fn capture(&self, _stream: &MediaStream, mime: &str) -> Result<CapturedFrame, CameraError> {
        let video = self.video_element()?;
        let (width, height) = (video.video_width(), video.video_height());
        if width == 0 || height == 0 {
            return Err(CameraError::CaptureFailed("Video not ready yet".to_string()));
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CameraError::CaptureFailed("No document".to_string()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| CameraError::CaptureFailed(format!("{:?}", e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CameraError::CaptureFailed("Canvas cast failed".to_string()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CameraError::CaptureFailed(format!("{:?}", e)))?
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| CameraError::CaptureFailed("2d context unavailable".to_string()))?;
        ctx.draw_image_with_html_video_element(&video, 0.0, 0.0)
            .map_err(|e| CameraError::CaptureFailed(format!("{:?}", e)))?;

        let data_url = canvas
            .to_data_url_with_type(mime)
            .map_err(|e| CameraError::CaptureFailed(format!("{:?}", e)))?;

        Ok(CapturedFrame {
            data_url,
            width,
            height,
        })
    }

    fn release(&self, stream: MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        if let Ok(video) = self.video_element() {
            video.set_src_object(None);
        }
        log::info!("📷 [CAMERA] Cámara liberada");
    }
}
