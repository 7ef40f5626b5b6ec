use eframe::egui::{self, ColorImage};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::app_types::{EnhanceRequest, EnhanceUpdate};
use crate::client::EnhanceService;
use crate::error::EnhanceResult;

/// decode image bytes into an unmultiplied RGBA ColorImage
pub fn decode_preview(bytes: &[u8]) -> Option<ColorImage> {
    profiling::scope!("decode_preview");
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let rgba8 = img.to_rgba8();
            let (w, h) = (rgba8.width() as usize, rgba8.height() as usize);
            Some(ColorImage::from_rgba_unmultiplied([w, h], rgba8.as_raw()))
        }
        Err(e) => {
            tracing::warn!("could not decode image for preview: {e}");
            None
        }
    }
}

/// run one enhancement on a background thread
/// the outcome comes back on `update_tx`; the request is never cancelled
pub fn spawn_enhancement(
    ctx: &egui::Context,
    service: Arc<dyn EnhanceService>,
    request: EnhanceRequest,
    update_tx: mpsc::Sender<EnhanceUpdate>,
) -> EnhanceResult<thread::JoinHandle<()>> {
    let ctx = ctx.clone();
    let handle = thread::Builder::new()
        .name(format!("enhance-{}", request.id))
        .spawn(move || {
            let update = run_enhancement(service.as_ref(), &request);
            // receiver gone means the app is shutting down
            let _ = update_tx.send(update);
            ctx.request_repaint();
        })?;
    Ok(handle)
}

/// the work done on the worker thread, separated so it runs without a UI
pub fn run_enhancement(service: &dyn EnhanceService, request: &EnhanceRequest) -> EnhanceUpdate {
    profiling::scope!("run_enhancement");
    tracing::info!(id = request.id, kind = request.kind.endpoint_suffix(), "enhancement started");
    let result = service.enhance(request);
    let preview = result.as_ref().ok().and_then(|img| decode_preview(&img.bytes));

    EnhanceUpdate {
        request_id: request.id,
        kind: request.kind,
        result,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_types::{EnhancedImage, EnhancementKind};
    use crate::error::EnhanceError;
    use std::io::Cursor;

    struct FixedService(Result<Vec<u8>, String>);

    impl EnhanceService for FixedService {
        fn enhance(&self, _request: &EnhanceRequest) -> EnhanceResult<EnhancedImage> {
            match &self.0 {
                Ok(bytes) => Ok(EnhancedImage { base64: "x".into(), bytes: bytes.clone() }),
                Err(msg) => Err(EnhanceError::Service(msg.clone())),
            }
        }
    }

    fn png_2x1() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn request() -> EnhanceRequest {
        EnhanceRequest {
            id: 7,
            kind: EnhancementKind::Double,
            file_name: "a.png".into(),
            bytes: vec![],
            mime: None,
        }
    }

    #[test]
    fn test_success_decodes_preview() {
        let update = run_enhancement(&FixedService(Ok(png_2x1())), &request());
        assert_eq!(update.request_id, 7);
        assert!(update.result.is_ok());
        let preview = update.preview.unwrap();
        assert_eq!(preview.size, [2, 1]);
    }

    #[test]
    fn test_undecodable_payload_still_succeeds() {
        let update = run_enhancement(&FixedService(Ok(vec![1, 2, 3])), &request());
        assert!(update.result.is_ok());
        assert!(update.preview.is_none());
    }

    #[test]
    fn test_failure_has_no_preview() {
        let update = run_enhancement(&FixedService(Err("bad format".into())), &request());
        assert!(update.preview.is_none());
        assert_eq!(update.result.unwrap_err().user_message(), "Error: bad format");
    }

    #[test]
    fn test_spawned_worker_reports_back() {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::channel();
        let service: Arc<dyn EnhanceService> = Arc::new(FixedService(Ok(png_2x1())));

        let handle = spawn_enhancement(&ctx, service, request(), tx).unwrap();
        handle.join().unwrap();

        let update = rx.recv().unwrap();
        assert_eq!(update.kind, EnhancementKind::Double);
        assert!(update.preview.is_some());
    }
}
