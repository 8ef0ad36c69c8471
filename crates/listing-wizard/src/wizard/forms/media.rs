use serde::{Deserialize, Serialize};

use super::super::domain::FormIssue;
use super::FormRules;

/// Upload ceiling shared by every file input in the wizard.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extra photo slots rendered next to the cover.
pub const MAX_ADDITIONAL_PHOTOS: usize = 6;

/// Reference to a locally picked file. Contents never leave the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl MediaRef {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }

    fn essence(&self) -> Option<String> {
        self.content_type
            .parse::<mime::Mime>()
            .ok()
            .map(|parsed| parsed.essence_str().to_ascii_lowercase())
    }

    pub fn is_pdf(&self) -> bool {
        self.essence().as_deref() == Some(mime::APPLICATION_PDF.essence_str())
    }

    /// JPG or PNG; browsers still report `image/jpg` for some files.
    pub fn is_photo(&self) -> bool {
        match self.essence() {
            Some(essence) => {
                essence == mime::IMAGE_JPEG.essence_str()
                    || essence == mime::IMAGE_PNG.essence_str()
                    || essence == "image/jpg"
            }
            None => false,
        }
    }

    pub const fn within_size_limit(&self) -> bool {
        self.size_bytes <= MAX_UPLOAD_BYTES
    }

    /// Checks a picked photo before it is accepted into a gallery slot.
    pub fn photo_issue(&self) -> Option<FormIssue> {
        if !self.is_photo() {
            return Some(FormIssue::new("photo", "Please upload only JPG or PNG files"));
        }
        if !self.within_size_limit() {
            return Some(FormIssue::new("photo", "File size should be less than 10MB"));
        }
        None
    }
}

/// Gallery submission: a featured cover and optional extra photos.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryPayload {
    pub cover: Option<MediaRef>,
    #[serde(default)]
    pub more: Vec<MediaRef>,
}

impl GalleryPayload {
    pub fn with_cover(cover: MediaRef) -> Self {
        Self {
            cover: Some(cover),
            more: Vec::new(),
        }
    }

    pub const fn has_cover(&self) -> bool {
        self.cover.is_some()
    }
}

impl FormRules for GalleryPayload {
    // A missing cover is accepted here; the controller gates advancing on it.
    fn issues(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        if let Some(issue) = self.cover.as_ref().and_then(MediaRef::photo_issue) {
            issues.push(FormIssue::new("cover", issue.message));
        }

        if self.more.len() > MAX_ADDITIONAL_PHOTOS {
            issues.push(FormIssue::new("more", "You can add up to 6 more photos"));
        }

        if let Some(issue) = self.more.iter().find_map(MediaRef::photo_issue) {
            issues.push(FormIssue::new("more", issue.message));
        }

        issues
    }
}
