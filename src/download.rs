use std::path::{Path, PathBuf};

use crate::app_types::EnhancedImage;
use crate::error::EnhanceResult;

/// file name offered in the save dialog
pub const DOWNLOAD_FILE_NAME: &str = "enhanced_image.png";

/// ask where to save; None when the dialog is cancelled
pub fn pick_download_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(DOWNLOAD_FILE_NAME)
        .add_filter("png", &["png"])
        .save_file()
}

/// write the decoded payload exactly as received
pub fn write_enhanced(image: &EnhancedImage, path: &Path) -> EnhanceResult<()> {
    profiling::scope!("write_enhanced");
    std::fs::write(path, &image.bytes)?;
    tracing::info!(path = %path.display(), bytes = image.bytes.len(), "enhanced image saved");
    Ok(())
}
