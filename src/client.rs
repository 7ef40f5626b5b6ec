//! HTTP side of an enhancement: request building and response classification.

use std::time::Duration;

use base64::Engine as _;
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;

use crate::app_types::{EnhanceRequest, EnhancedImage, EnhancementKind};
use crate::error::{EnhanceError, EnhanceResult};

/// multipart field the service reads the upload from
pub const IMAGE_FIELD: &str = "image";

/// seam between the request worker and the network
pub trait EnhanceService: Send + Sync {
    fn enhance(&self, request: &EnhanceRequest) -> EnhanceResult<EnhancedImage>;
}

/// `{server_url}/enhance_image_{type}`
pub fn endpoint_url(server_url: &str, kind: EnhancementKind) -> String {
    format!(
        "{}/enhance_image_{}",
        server_url.trim_end_matches('/'),
        kind.endpoint_suffix()
    )
}

#[derive(Deserialize)]
struct ResponseBody {
    enhanced_image: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// classify a finished HTTP exchange
///
/// Success needs a 2xx status and a string `enhanced_image` that is valid base64.
/// Failures prefer `error`, then `message` (the service uses both shapes), and
/// fall back to `undefined` when neither is present.
pub fn interpret_response(status: u16, body: &[u8]) -> EnhanceResult<EnhancedImage> {
    let parsed: ResponseBody = serde_json::from_slice(body).map_err(|e| {
        EnhanceError::MalformedResponse(format!("HTTP {status}: response is not JSON ({e})"))
    })?;

    if !(200..300).contains(&status) {
        let msg = parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| "undefined".to_owned());
        return Err(EnhanceError::Service(msg));
    }

    let payload = parsed.enhanced_image.ok_or_else(|| {
        EnhanceError::MalformedResponse("response has no enhanced_image".to_owned())
    })?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| EnhanceError::MalformedResponse(format!("enhanced_image is not base64: {e}")))?;

    Ok(EnhancedImage { base64: payload, bytes })
}

/// blocking reqwest client talking to a live service
pub struct HttpEnhanceService {
    server_url: String,
    client: Client,
}

impl HttpEnhanceService {
    /// `timeout` of None waits indefinitely
    pub fn new(server_url: impl Into<String>, timeout: Option<Duration>) -> EnhanceResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { server_url: server_url.into(), client })
    }
}

impl EnhanceService for HttpEnhanceService {
    fn enhance(&self, request: &EnhanceRequest) -> EnhanceResult<EnhancedImage> {
        profiling::scope!("http_enhance");
        let url = endpoint_url(&self.server_url, request.kind);

        let mut part = multipart::Part::bytes(request.bytes.clone())
            .file_name(request.file_name.clone());
        if let Some(mime) = request.mime {
            part = part.mime_str(mime)?;
        }
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        tracing::info!(%url, bytes = request.bytes.len(), "posting enhancement request");
        let response = self.client.post(&url).multipart(form).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        tracing::debug!(status, body_len = body.len(), "enhancement response received");

        interpret_response(status, &body)
    }
}
