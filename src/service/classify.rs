//! Media category classification for inbound attachments.

/// Media category derived from an attachment's declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Image,
    Audio,
    Video,
}

impl MediaCategory {
    /// Classifies a declared content-type string.
    ///
    /// Checks, in order, whether the string is prefixed by `image/`, `audio/`
    /// or `video/`; the first match wins. A missing or non-matching content
    /// type yields `None` rather than an error.
    ///
    /// # Arguments
    /// - `content_type` - The content type reported by Discord, if any
    ///
    /// # Returns
    /// - `Some(MediaCategory)` - The matching category
    /// - `None` - Content type is absent or not a supported media type
    pub fn from_content_type(content_type: Option<&str>) -> Option<Self> {
        let content_type = content_type?;

        if content_type.starts_with("image/") {
            Some(Self::Image)
        } else if content_type.starts_with("audio/") {
            Some(Self::Audio)
        } else if content_type.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// Configured target file extension per media category.
#[derive(Debug, Clone)]
pub struct TargetFormats {
    pub image: String,
    pub audio: String,
    pub video: String,
}

impl TargetFormats {
    /// Returns the target extension configured for the given category.
    pub fn extension_for(&self, category: MediaCategory) -> &str {
        match category {
            MediaCategory::Image => &self.image,
            MediaCategory::Audio => &self.audio,
            MediaCategory::Video => &self.video,
        }
    }
}
