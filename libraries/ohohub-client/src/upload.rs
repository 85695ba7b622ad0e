//! Audio upload operations.

use crate::client::read_envelope;
use crate::error::{ClientError, Result};
use crate::types::{UploadRequest, UploadResponse};
use crate::validation::AudioFile;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, warn};

/// Upload client for the Ohohub API.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Send a validated upload as a multipart form.
    ///
    /// The server's acknowledgement is returned as-is, including
    /// `success: false` answers.
    pub async fn upload_audio(&self, request: &UploadRequest) -> Result<UploadResponse> {
        let file_part = Part::bytes(request.audio.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)?;

        let form = Form::new()
            .part("audioFile", file_part)
            .text("postTitle", request.post_title.clone())
            .text("xId", request.x_id.clone())
            .text("deletePassword", request.delete_password.clone())
            .text("allowPromotion", request.allow_promotion.to_string())
            .text("gender", request.gender.as_str());

        let url = format!("{}/api/upload-audio", self.base_url);
        debug!(url = %url, file = %request.file_name, size = request.audio.len(), "Uploading audio");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let ack: UploadResponse = read_envelope(response, "upload").await?;

        if ack.success {
            info!(file = %request.file_name, size = request.audio.len(), "Audio uploaded");
        } else {
            warn!(file = %request.file_name, error = ?ack.error, "Upload rejected by server");
        }

        Ok(ack)
    }
}

/// Read an audio file from disk for the upload form.
///
/// The MIME type is guessed from the extension.
pub async fn load_audio_file(path: &Path) -> Result<AudioFile> {
    if !path.exists() {
        return Err(ClientError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio")
        .to_string();

    let data = tokio::fs::read(path).await?;

    Ok(AudioFile {
        file_name,
        mime_type: mime_type_for_file(path).to_string(),
        data,
    })
}

/// Get MIME type for audio file.
fn mime_type_for_file(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/m4a",
        Some("mp4") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
