//! Image attachments selected during registration.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use usra_common::{AppError, AppResult};

/// A selected image file held in memory until upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name as selected.
    pub file_name: String,
    /// MIME content type.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

impl Attachment {
    /// Build an attachment from an uploaded file part.
    ///
    /// Only MIME-level filtering is applied (`image/*`); there is no
    /// size cap. The picker copy in the original UI advertised a 2MB
    /// limit that was never enforced, and that behavior is kept.
    pub fn from_upload(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> AppResult<Self> {
        let content_type = content_type.into();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "Only image uploads are accepted, got {content_type}"
            )));
        }

        Ok(Self {
            file_name: file_name.into(),
            content_type,
            data,
        })
    }
}

/// A named attachment slot on the registration draft.
///
/// Setting a file marks the slot as set immediately; the preview data
/// URI is derived separately and the slot is fully usable before any
/// preview exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSlot {
    attachment: Option<Attachment>,
    preview: Option<String>,
}

impl AttachmentSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attachment: None,
            preview: None,
        }
    }

    /// Set or clear the slot's file.
    ///
    /// `Some(file)` stores the handle for later upload and drops any
    /// stale preview; `None` clears both the handle and the preview and
    /// resets the slot to its inactive state.
    pub fn set_file(&mut self, file: Option<Attachment>) {
        self.preview = None;
        self.attachment = file;
    }

    /// The stored attachment, if any.
    #[must_use]
    pub const fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Whether a file is currently set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.attachment.is_some()
    }

    /// The derived preview data URI, if one has been derived.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Derive (and cache) a `data:` URI preview for display.
    ///
    /// Encoding runs off the async worker so large images do not stall
    /// the caller's task.
    pub async fn derive_preview(&mut self) -> AppResult<Option<&str>> {
        if self.preview.is_none() {
            if let Some(attachment) = &self.attachment {
                let content_type = attachment.content_type.clone();
                let data = attachment.data.clone();
                let encoded = tokio::task::spawn_blocking(move || BASE64.encode(data))
                    .await
                    .map_err(|e| AppError::Internal(format!("Preview task failed: {e}")))?;
                self.preview = Some(format!("data:{content_type};base64,{encoded}"));
            }
        }
        Ok(self.preview.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png() -> Attachment {
        Attachment::from_upload("badge.png", "image/png", vec![0x89, b'P', b'N', b'G']).unwrap()
    }

    #[test]
    fn test_non_image_rejected() {
        let result = Attachment::from_upload("notes.pdf", "application/pdf", vec![1, 2, 3]);
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_set_before_preview() {
        let mut slot = AttachmentSlot::new();
        slot.set_file(Some(png()));

        // The attachment counts as set even though no preview exists yet.
        assert!(slot.is_set());
        assert!(slot.preview().is_none());
    }

    #[tokio::test]
    async fn test_preview_is_data_uri() {
        let mut slot = AttachmentSlot::new();
        slot.set_file(Some(png()));

        let preview = slot.derive_preview().await.unwrap().unwrap().to_string();
        assert!(preview.starts_with("data:image/png;base64,"));

        // Cached on second call.
        assert_eq!(slot.derive_preview().await.unwrap(), Some(preview.as_str()));
    }

    #[tokio::test]
    async fn test_clearing_resets_handle_and_preview() {
        let mut slot = AttachmentSlot::new();
        slot.set_file(Some(png()));
        slot.derive_preview().await.unwrap();

        slot.set_file(None);
        assert!(!slot.is_set());
        assert!(slot.preview().is_none());
    }

    #[test]
    fn test_replacing_file_drops_stale_preview() {
        let mut slot = AttachmentSlot::new();
        slot.set_file(Some(png()));

        let other =
            Attachment::from_upload("other.jpg", "image/jpeg", vec![0xFF, 0xD8]).unwrap();
        slot.set_file(Some(other));
        assert!(slot.is_set());
        assert!(slot.preview().is_none());
    }

    #[test]
    fn test_empty_slot_has_no_preview() {
        let slot = AttachmentSlot::new();
        assert!(!slot.is_set());
        assert!(slot.preview().is_none());
    }
}
