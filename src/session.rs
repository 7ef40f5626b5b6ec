use tracing::{info, warn};

use crate::app_types::{EnhanceRequest, EnhancedImage, EnhancementKind, UploadedFile};
use crate::error::{EnhanceError, EnhanceResult};

/// upload/enhance/download state, independent of any rendering
///
/// The app owns exactly one of these. Every user-visible failure ends up in
/// `alert` and leaves the displayed images alone.
#[derive(Default)]
pub struct Session {
    upload: Option<UploadedFile>,
    enhanced: Option<EnhancedImage>,
    enhanced_kind: Option<EnhancementKind>,
    download_visible: bool,
    alert: Option<String>,
    next_request_id: u64,
    in_flight: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// select a new file; the previous enhanced image stays on screen until a new one arrives
    pub fn upload(&mut self, file: UploadedFile) {
        info!(file = %file.file_name, bytes = file.bytes.len(), "image selected");
        self.upload = Some(file);
    }

    pub fn uploaded(&self) -> Option<&UploadedFile> {
        self.upload.as_ref()
    }

    /// build the request for `kind`, or raise the "upload first" alert when nothing is selected
    pub fn prepare_request(&mut self, kind: EnhancementKind) -> EnhanceResult<EnhanceRequest> {
        let Some(file) = &self.upload else {
            let err = EnhanceError::NoFileSelected;
            self.raise(&err);
            return Err(err);
        };

        self.next_request_id += 1;
        if self.in_flight > 0 {
            warn!(
                outstanding = self.in_flight,
                kind = kind.endpoint_suffix(),
                "enhancement requested while another is in flight; last response to arrive wins"
            );
        }
        self.in_flight += 1;

        Ok(EnhanceRequest {
            id: self.next_request_id,
            kind,
            file_name: file.file_name.clone(),
            bytes: file.bytes.clone(),
            mime: file.mime,
        })
    }

    /// apply a finished request; returns true when the enhanced image changed
    pub fn apply_outcome(
        &mut self,
        kind: EnhancementKind,
        result: EnhanceResult<EnhancedImage>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(image) => {
                info!(kind = kind.endpoint_suffix(), bytes = image.bytes.len(), "enhancement applied");
                self.enhanced = Some(image);
                self.enhanced_kind = Some(kind);
                self.download_visible = true;
                true
            }
            Err(err) => {
                tracing::error!(kind = kind.endpoint_suffix(), error = %err, "enhancement failed");
                self.raise(&err);
                false
            }
        }
    }

    pub fn enhanced(&self) -> Option<&EnhancedImage> {
        self.enhanced.as_ref()
    }

    pub fn enhanced_kind(&self) -> Option<EnhancementKind> {
        self.enhanced_kind
    }

    /// data URL of the displayed enhanced image
    pub fn enhanced_src(&self) -> Option<String> {
        self.enhanced.as_ref().map(EnhancedImage::data_url)
    }

    pub fn download_visible(&self) -> bool {
        self.download_visible
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// show `err` to the user; a newer alert replaces an unacknowledged one
    pub fn raise(&mut self, err: &EnhanceError) {
        self.alert = Some(err.user_message());
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> UploadedFile {
        UploadedFile::from_bytes("dog.png", vec![9, 9, 9])
    }

    fn enhanced(b64: &str) -> EnhancedImage {
        EnhancedImage { base64: b64.into(), bytes: vec![1] }
    }

    #[test]
    fn test_no_file_raises_upload_first() {
        let mut s = Session::new();
        let err = s.prepare_request(EnhancementKind::Double).unwrap_err();
        assert!(matches!(err, EnhanceError::NoFileSelected));
        assert_eq!(s.alert(), Some("Please upload an image first."));
        assert_eq!(s.in_flight(), 0);
    }

    #[test]
    fn test_request_carries_raw_upload() {
        let mut s = Session::new();
        s.upload(file());
        let req = s.prepare_request(EnhancementKind::SameSize).unwrap();
        assert_eq!(req.kind, EnhancementKind::SameSize);
        assert_eq!(req.bytes, vec![9, 9, 9]);
        assert_eq!(req.file_name, "dog.png");
        assert_eq!(req.mime, Some("image/png"));
        assert_eq!(s.alert(), None);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut s = Session::new();
        s.upload(file());
        let a = s.prepare_request(EnhancementKind::Double).unwrap();
        let b = s.prepare_request(EnhancementKind::Quadruple).unwrap();
        assert!(b.id > a.id);
        assert_eq!(s.in_flight(), 2);
    }

    #[test]
    fn test_success_sets_src_and_shows_download() {
        let mut s = Session::new();
        s.upload(file());
        s.prepare_request(EnhancementKind::Double).unwrap();
        assert!(!s.download_visible());

        assert!(s.apply_outcome(EnhancementKind::Double, Ok(enhanced("AAAA"))));
        assert_eq!(s.enhanced_src().as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(s.download_visible());
        assert_eq!(s.enhanced_kind(), Some(EnhancementKind::Double));
        assert_eq!(s.in_flight(), 0);
    }

    #[test]
    fn test_failure_alerts_and_keeps_previous_image() {
        let mut s = Session::new();
        s.upload(file());
        s.apply_outcome(EnhancementKind::Double, Ok(enhanced("AAAA")));

        let changed = s.apply_outcome(
            EnhancementKind::Quadruple,
            Err(EnhanceError::Service("bad format".into())),
        );
        assert!(!changed);
        assert_eq!(s.alert(), Some("Error: bad format"));
        assert_eq!(s.enhanced_src().as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(s.enhanced_kind(), Some(EnhancementKind::Double));
        assert_eq!(s.uploaded().map(|f| f.file_name.as_str()), Some("dog.png"));
    }

    #[test]
    fn test_last_response_wins() {
        let mut s = Session::new();
        s.upload(file());
        s.prepare_request(EnhancementKind::Double).unwrap();
        s.prepare_request(EnhancementKind::Quadruple).unwrap();

        // 4x finishes first, 2x second
        s.apply_outcome(EnhancementKind::Quadruple, Ok(enhanced("NHg=")));
        s.apply_outcome(EnhancementKind::Double, Ok(enhanced("Mng=")));
        assert_eq!(s.enhanced_kind(), Some(EnhancementKind::Double));
        assert_eq!(s.enhanced_src().as_deref(), Some("data:image/png;base64,Mng="));
    }

    #[test]
    fn test_new_upload_keeps_enhanced_image() {
        let mut s = Session::new();
        s.upload(file());
        s.apply_outcome(EnhancementKind::Double, Ok(enhanced("AAAA")));
        s.upload(UploadedFile::from_bytes("other.jpg", vec![4]));
        assert!(s.enhanced().is_some());
        assert!(s.download_visible());
    }

    #[test]
    fn test_dismiss_alert() {
        let mut s = Session::new();
        s.raise(&EnhanceError::Transport("timed out".into()));
        assert_eq!(s.alert(), Some("An error occurred: timed out"));
        s.dismiss_alert();
        assert_eq!(s.alert(), None);
    }
}
