use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crate::app_types::{EnhanceUpdate, EnhancementKind, UiEvent, UploadedFile};
use crate::client::{EnhanceService, HttpEnhanceService};
use crate::enhance_thread::{decode_preview, spawn_enhancement};
use crate::error::EnhanceResult;
use crate::session::Session;
use crate::settings::AppSettings;
use crate::slider::CompareSlider;

/// lazily built HTTP service, rebuilt when the URL or timeout setting changes
struct ServiceSlot {
    server_url: String,
    timeout: Option<Duration>,
    service: Arc<dyn EnhanceService>,
}

/// whether `event` may run; an open alert blocks everything except its own dismissal
fn accepts_event(alert_open: bool, event: &UiEvent) -> bool {
    !alert_open || *event == UiEvent::AlertDismissed
}

pub struct ImageLiftApp {
    // Textures shown in the UI
    original_tex: Option<TextureHandle>,
    enhanced_tex: Option<TextureHandle>,

    // Original image size in pixels
    original_dims: [usize; 2],

    session: Session,
    slider: CompareSlider,

    // Communication with request workers
    update_tx: mpsc::Sender<EnhanceUpdate>,
    update_rx: mpsc::Receiver<EnhanceUpdate>,
    service: Option<ServiceSlot>,

    // Settings UI state
    show_settings: bool,
    settings: AppSettings,
    settings_path: PathBuf,
}

impl ImageLiftApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings, settings_path: PathBuf) -> Self {
        let (update_tx, update_rx) = mpsc::channel();
        tracing::info!(server = %settings.server_url, "ImageLift started");

        Self {
            original_tex: None,
            enhanced_tex: None,
            original_dims: [0, 0],
            session: Session::new(),
            slider: CompareSlider::new(),
            update_tx,
            update_rx,
            service: None,
            show_settings: false,
            settings,
            settings_path,
        }
    }

    /// route one UI event to its handler
    fn dispatch(&mut self, ctx: &egui::Context, event: UiEvent) {
        profiling::scope!("dispatch");
        if !accepts_event(self.session.alert().is_some(), &event) {
            tracing::debug!(?event, "ignored while alert is open");
            return;
        }

        match event {
            UiEvent::OpenFileDialog => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("image", &["png", "jpg", "jpeg", "bmp", "tiff", "gif", "webp"])
                    .pick_file()
                {
                    self.load_original(ctx, &path);
                }
            }
            UiEvent::FileChosen(path) => self.load_original(ctx, &path),
            UiEvent::EnhanceRequested(kind) => self.request_enhancement(ctx, kind),
            UiEvent::DownloadRequested => self.download(),
            UiEvent::AlertDismissed => self.session.dismiss_alert(),
            UiEvent::ToggleSettings => self.show_settings = !self.show_settings,
            UiEvent::SaveSettings => {
                if let Err(e) = self.settings.save(&self.settings_path) {
                    tracing::error!("failed to save settings: {e}");
                    self.session.raise(&e);
                }
            }
            UiEvent::ResetSettings => self.settings = AppSettings::default(),
        }
    }

    /// read the file into memory and upload the preview texture
    fn load_original(&mut self, ctx: &egui::Context, path: &Path) {
        profiling::scope!("load_original");
        let file = match UploadedFile::read(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!(path = %path.display(), "could not read image: {e}");
                self.session.raise(&e);
                return;
            }
        };

        match decode_preview(&file.bytes) {
            Some(img) => {
                self.original_dims = img.size;
                self.original_tex = Some(ctx.load_texture("original", img, TextureOptions::LINEAR));
            }
            None => {
                // still submittable, the service decides whether it is an image
                self.original_dims = [0, 0];
                self.original_tex = None;
            }
        }
        self.session.upload(file);
    }

    fn service(&mut self) -> EnhanceResult<Arc<dyn EnhanceService>> {
        let timeout = self.settings.request_timeout();
        if let Some(slot) = &self.service {
            if slot.server_url == self.settings.server_url && slot.timeout == timeout {
                return Ok(Arc::clone(&slot.service));
            }
        }

        let service: Arc<dyn EnhanceService> =
            Arc::new(HttpEnhanceService::new(self.settings.server_url.clone(), timeout)?);
        self.service = Some(ServiceSlot {
            server_url: self.settings.server_url.clone(),
            timeout,
            service: Arc::clone(&service),
        });
        Ok(service)
    }

    fn request_enhancement(&mut self, ctx: &egui::Context, kind: EnhancementKind) {
        // raises the "upload first" alert itself
        let Ok(request) = self.session.prepare_request(kind) else {
            return;
        };

        let spawned = self
            .service()
            .and_then(|service| spawn_enhancement(ctx, service, request, self.update_tx.clone()));
        if let Err(e) = spawned {
            self.session.apply_outcome(kind, Err(e));
        }
    }

    /// Process results from request workers, oldest first, so the last one to arrive wins
    fn poll_enhance_updates(&mut self, ctx: &egui::Context) {
        profiling::scope!("poll_enhance_updates");
        while let Ok(update) = self.update_rx.try_recv() {
            tracing::debug!(id = update.request_id, "request finished");
            if self.session.apply_outcome(update.kind, update.result) {
                if let Some(src) = self.session.enhanced_src() {
                    tracing::debug!(src_len = src.len(), "enhanced source replaced");
                }
                self.update_enhanced_texture(ctx, update.preview);
            }
        }
    }

    fn update_enhanced_texture(&mut self, ctx: &egui::Context, preview: Option<ColorImage>) {
        profiling::scope!("update_enhanced_texture");
        let Some(img) = preview else {
            self.enhanced_tex = None;
            return;
        };

        if let Some(tex) = self.enhanced_tex.as_mut() {
            tex.set(img, TextureOptions::LINEAR);
        } else {
            self.enhanced_tex = Some(ctx.load_texture("enhanced", img, TextureOptions::LINEAR));
        }
    }

    fn download(&mut self) {
        if !self.session.download_visible() {
            return;
        }
        let Some(image) = self.session.enhanced().cloned() else {
            return;
        };
        let Some(path) = crate::download::pick_download_path() else {
            return;
        };
        if let Err(e) = crate::download::write_enhanced(&image, &path) {
            tracing::error!(path = %path.display(), "failed to save enhanced image: {e}");
            self.session.raise(&e);
        }
    }
}

impl eframe::App for ImageLiftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        // Poll for results from background requests
        self.poll_enhance_updates(ctx);

        let mut events = Vec::new();
        let alert_open = self.session.alert().is_some();

        crate::ui::handle_keyboard_input(ctx, alert_open, &mut events);

        crate::ui::render_toolbar(ctx, &self.session, !alert_open, self.show_settings, &mut events);

        crate::ui::render_status_bar(
            ctx,
            &self.session,
            &self.settings.server_url,
            self.original_dims,
            &self.slider,
        );

        crate::ui::render_central_panel(
            ctx,
            &self.original_tex,
            &self.enhanced_tex,
            &self.session,
            &mut self.slider,
            &self.settings,
            !alert_open,
            &mut events,
        );

        if self.show_settings {
            crate::ui::show_settings_window(
                ctx,
                &mut self.show_settings,
                &mut self.settings,
                !alert_open,
                &mut events,
            );
        }

        if let Some(message) = self.session.alert() {
            crate::ui::show_alert(ctx, message, &mut events);
        }

        for event in events {
            self.dispatch(ctx, event);
        }

        // keep the spinner turning while requests are outstanding
        if self.session.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
