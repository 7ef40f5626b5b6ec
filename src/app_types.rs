use std::path::{Path, PathBuf};

use eframe::egui::ColorImage;

use crate::error::EnhanceResult;

/// server-side transform selecting which endpoint is called
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnhancementKind {
    Double,
    Quadruple,
    SameSize,
}

impl EnhancementKind {
    pub const ALL: [EnhancementKind; 3] = [
        EnhancementKind::Double,
        EnhancementKind::Quadruple,
        EnhancementKind::SameSize,
    ];

    /// identifier used in `/enhance_image_{type}`
    pub fn endpoint_suffix(self) -> &'static str {
        match self {
            EnhancementKind::Double => "2x",
            EnhancementKind::Quadruple => "4x",
            EnhancementKind::SameSize => "same_size",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnhancementKind::Double => "Enhance 2×",
            EnhancementKind::Quadruple => "Enhance 4×",
            EnhancementKind::SameSize => "Enhance (same size)",
        }
    }
}

/// an image file picked by the user, held verbatim in memory
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<&'static str>,
}

impl UploadedFile {
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_owned());
        let mime = guess_mime(&path);
        Self { path, file_name, bytes, mime }
    }

    /// read the whole file; the content is not validated
    pub fn read(path: &Path) -> EnhanceResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(path, bytes))
    }
}

fn guess_mime(path: &Path) -> Option<&'static str> {
    image::ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// a successful enhancement as returned by the service
#[derive(Clone, Debug, PartialEq)]
pub struct EnhancedImage {
    /// the `enhanced_image` field, untouched
    pub base64: String,
    /// decoded payload, written verbatim on download
    pub bytes: Vec<u8>,
}

impl EnhancedImage {
    /// source string the enhanced layer is displayed from
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.base64)
    }
}

/// request handed to the worker thread
#[derive(Clone, Debug)]
pub struct EnhanceRequest {
    pub id: u64,
    pub kind: EnhancementKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<&'static str>,
}

// messages from worker thread to UI
pub struct EnhanceUpdate {
    pub request_id: u64,
    pub kind: EnhancementKind,
    pub result: EnhanceResult<EnhancedImage>,
    pub preview: Option<ColorImage>,  // decoded on the worker so the UI thread only uploads
}

/// everything the UI panels can ask the app to do during one frame
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    OpenFileDialog,
    FileChosen(PathBuf),
    EnhanceRequested(EnhancementKind),
    DownloadRequested,
    AlertDismissed,
    ToggleSettings,
    SaveSettings,
    ResetSettings,
}
