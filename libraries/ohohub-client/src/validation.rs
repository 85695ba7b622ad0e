//! Upload form validation
//!
//! Every field is checked and all failures are reported together so the
//! form can show them inline. Only a clean form becomes an
//! [`UploadRequest`].

use crate::types::UploadRequest;
use ohohub_core::{password, Gender};
use std::fmt;
use thiserror::Error;

/// Largest accepted audio file (50 MiB)
pub const MAX_AUDIO_FILE_SIZE: usize = 50 * 1024 * 1024;

/// MIME types accepted for the audio file
pub const ALLOWED_AUDIO_TYPES: [&str; 5] = [
    "audio/mp3",
    "audio/mpeg",
    "audio/wav",
    "audio/m4a",
    "audio/mp4",
];

pub const MAX_TITLE_LENGTH: usize = 50;
pub const MAX_X_ID_LENGTH: usize = 15;
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// Form field names, as sent in the multipart body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadField {
    AudioFile,
    PostTitle,
    XId,
    DeletePassword,
    Gender,
}

impl UploadField {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadField::AudioFile => "audioFile",
            UploadField::PostTitle => "postTitle",
            UploadField::XId => "xId",
            UploadField::DeletePassword => "deletePassword",
            UploadField::Gender => "gender",
        }
    }
}

impl fmt::Display for UploadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: UploadField,
    pub message: String,
}

/// All field failures of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("upload form has {} invalid field(s): {}", .errors.len(), summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Message for `field`, if it failed
    pub fn get(&self, field: UploadField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: UploadField, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

/// Audio file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Raw upload form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub audio_file: Option<AudioFile>,
    pub post_title: String,
    pub x_id: String,
    /// Plain delete-password as typed
    pub delete_password: String,
    pub allow_promotion: bool,
    /// `male` or `female`; empty when nothing is selected
    pub gender: String,
}

impl UploadForm {
    /// Check every field, reporting the first failed rule per field
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if let Some(message) = check_audio_file(self.audio_file.as_ref()) {
            errors.push(UploadField::AudioFile, message);
        }
        if let Some(message) = check_title(&self.post_title) {
            errors.push(UploadField::PostTitle, message);
        }
        if let Some(message) = check_x_id(&self.x_id) {
            errors.push(UploadField::XId, message);
        }
        if let Some(message) = check_password(&self.delete_password) {
            errors.push(UploadField::DeletePassword, message);
        }
        if let Err(message) = parse_gender(&self.gender) {
            errors.push(UploadField::Gender, message);
        }

        errors
    }

    /// Validate and convert into a sendable request
    ///
    /// The delete-password is salted and hashed on the way out.
    pub fn validate(self) -> Result<UploadRequest, ValidationErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(file), Ok(gender)) = (self.audio_file, parse_gender(&self.gender)) else {
            return Err(errors);
        };

        Ok(UploadRequest {
            file_name: file.file_name,
            mime_type: file.mime_type,
            audio: file.data,
            post_title: self.post_title,
            x_id: self.x_id,
            delete_password: password::prepare_for_storage(&self.delete_password),
            allow_promotion: self.allow_promotion,
            gender,
        })
    }
}

fn check_audio_file(file: Option<&AudioFile>) -> Option<&'static str> {
    let Some(file) = file else {
        return Some("Select an audio file");
    };
    if !ALLOWED_AUDIO_TYPES.contains(&file.mime_type.as_str()) {
        return Some("Only MP3, WAV and M4A files can be uploaded");
    }
    if file.data.len() > MAX_AUDIO_FILE_SIZE {
        return Some("File size must be 50MB or less");
    }
    None
}

fn check_title(title: &str) -> Option<&'static str> {
    if title.is_empty() {
        Some("Title is required")
    } else if title.chars().count() > MAX_TITLE_LENGTH {
        Some("Title must be 50 characters or less")
    } else if title.trim().is_empty() {
        Some("Title cannot be only whitespace")
    } else {
        None
    }
}

fn check_x_id(x_id: &str) -> Option<&'static str> {
    if x_id.chars().count() > MAX_X_ID_LENGTH {
        Some("X ID must be 15 characters or less")
    } else if !x_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some("X ID may only contain letters, digits and underscores")
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Delete password is required")
    } else if password.chars().count() > MAX_PASSWORD_LENGTH {
        Some("Password must be 50 characters or less")
    } else if password.chars().any(|c| c.is_whitespace() || is_emoji(c)) {
        Some("Password cannot contain spaces or emoji")
    } else {
        None
    }
}

fn parse_gender(gender: &str) -> Result<Gender, &'static str> {
    if gender.is_empty() {
        return Err("Select a gender");
    }
    gender.parse().map_err(|_| "Select a valid gender")
}

/// Emoticons, pictographs, transport symbols and regional indicators
fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F600}'..='\u{1F64F}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F1E0}'..='\u{1F1FF}'
    )
}
