//! Reply assembly for conversion requests.
//!
//! `ResponseBuilder` drives the whole pipeline for one interaction: classify
//! each attachment, fetch its bytes, convert them, and collect the results
//! into the reply content and output files. Fetch and conversion failures are
//! caught per attachment, logged, and degrade into status text; they never
//! escape to the event handler.

use std::sync::Arc;

use serenity::all::Attachment;

use crate::error::AppError;
use crate::service::classify::{MediaCategory, TargetFormats};
use crate::service::convert::MediaConverter;
use crate::service::fetch::AttachmentFetcher;

const NO_ATTACHMENTS: &str = "No attachments/files found!";
const UNSUPPORTED_TYPE: &str = "Neither audio, video nor image!";
const BATCH_FAILED: &str =
    "Failed to convert files, likely one of the files has an unsupported format";
const SINGLE_FAILED: &str = "Failed to convert file, likely it has an unsupported format";

/// An inbound attachment, reduced to what the pipeline needs.
#[derive(Debug, Clone)]
pub struct AttachmentRef {
    /// CDN URL the binary content can be fetched from
    pub url: String,
    /// Content type as declared by Discord, if any
    pub content_type: Option<String>,
    /// Original file name
    pub name: String,
}

impl From<&Attachment> for AttachmentRef {
    fn from(attachment: &Attachment) -> Self {
        Self {
            url: attachment.url.clone(),
            content_type: attachment.content_type.clone(),
            name: attachment.filename.clone(),
        }
    }
}

/// A successfully converted file ready to be sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Original attachment name with the target extension appended
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Content and files for exactly one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotResponse {
    pub content: String,
    pub files: Vec<OutputFile>,
}

impl BotResponse {
    fn text(content: &str) -> Self {
        Self {
            content: content.to_string(),
            files: Vec::new(),
        }
    }
}

/// Builds replies for both command variants.
pub struct ResponseBuilder {
    fetcher: Arc<dyn AttachmentFetcher>,
    converter: Arc<dyn MediaConverter>,
    targets: TargetFormats,
}

impl ResponseBuilder {
    pub fn new(
        fetcher: Arc<dyn AttachmentFetcher>,
        converter: Arc<dyn MediaConverter>,
        targets: TargetFormats,
    ) -> Self {
        Self {
            fetcher,
            converter,
            targets,
        }
    }

    /// Builds the reply for a context-menu invocation over a target message.
    ///
    /// Iterates the message's attachments in order. Unsupported attachments
    /// set an index-annotated notice (later notices overwrite earlier ones);
    /// supported ones are fetched and converted, with failures logged and
    /// skipped. If conversions were attempted but none produced a file, the
    /// content becomes a generic failure notice.
    ///
    /// # Arguments
    /// - `attachments` - The target message's attachments, in message order
    ///
    /// # Returns
    /// - `BotResponse` - Trimmed content (possibly empty) plus zero or more
    ///   converted files
    pub async fn for_message_attachments(&self, attachments: &[AttachmentRef]) -> BotResponse {
        let mut content = if attachments.is_empty() {
            NO_ATTACHMENTS.to_string()
        } else {
            String::new()
        };

        let mut files = Vec::new();
        let mut attempted = 0usize;

        for (index, attachment) in attachments.iter().enumerate() {
            match MediaCategory::from_content_type(attachment.content_type.as_deref()) {
                Some(category) => {
                    attempted += 1;

                    let extension = self.targets.extension_for(category);
                    match self.fetch_and_convert(attachment, extension).await {
                        Ok(file) => files.push(file),
                        Err(err) => {
                            tracing::error!(
                                "Failed to convert attachment '{}': {}",
                                attachment.name,
                                err
                            );
                        }
                    }
                }
                None => {
                    content = format!("{}. {}", index + 1, UNSUPPORTED_TYPE);
                }
            }
        }

        if attempted > 0 && files.is_empty() {
            content = BATCH_FAILED.to_string();
        }

        BotResponse {
            content: content.trim().to_string(),
            files,
        }
    }

    /// Builds the reply for a slash-command invocation with one optional
    /// attachment.
    ///
    /// # Arguments
    /// - `attachment` - The attachment supplied by the invoking user, if any
    ///
    /// # Returns
    /// - `BotResponse` - Exactly one file and empty content on success,
    ///   otherwise a notice and no files
    pub async fn for_single_attachment(&self, attachment: Option<&AttachmentRef>) -> BotResponse {
        let Some(attachment) = attachment else {
            return BotResponse::text(NO_ATTACHMENTS);
        };

        let Some(category) = MediaCategory::from_content_type(attachment.content_type.as_deref())
        else {
            return BotResponse::text(UNSUPPORTED_TYPE);
        };

        let extension = self.targets.extension_for(category);
        match self.fetch_and_convert(attachment, extension).await {
            Ok(file) => BotResponse {
                content: String::new(),
                files: vec![file],
            },
            Err(err) => {
                tracing::error!(
                    "Failed to convert attachment '{}': {}",
                    attachment.name,
                    err
                );
                BotResponse::text(SINGLE_FAILED)
            }
        }
    }

    /// Fetches one attachment's bytes and converts them.
    async fn fetch_and_convert(
        &self,
        attachment: &AttachmentRef,
        extension: &str,
    ) -> Result<OutputFile, AppError> {
        let input = self.fetcher.fetch(&attachment.url).await?;
        let bytes = self.converter.convert(&input, extension).await?;

        Ok(OutputFile {
            name: format!("{}.{}", attachment.name, extension),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::convert::ConvertError;
    use crate::error::fetch::FetchError;

    /// Returns the request URL's bytes as the attachment content, so each
    /// stubbed attachment gets distinct, recognizable bytes.
    struct UrlEchoFetcher;

    #[async_trait]
    impl AttachmentFetcher for UrlEchoFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(url.as_bytes().to_vec())
        }
    }

    /// Prefixes the input with a marker instead of transcoding it.
    struct StubConverter;

    #[async_trait]
    impl MediaConverter for StubConverter {
        async fn convert(&self, input: &[u8], _extension: &str) -> Result<Vec<u8>, ConvertError> {
            Ok([b"converted:", input].concat())
        }
    }

    /// Fails every conversion, simulating a crashed transcoder.
    struct FailingConverter;

    #[async_trait]
    impl MediaConverter for FailingConverter {
        async fn convert(&self, _input: &[u8], _extension: &str) -> Result<Vec<u8>, ConvertError> {
            Err(ConvertError::Timeout(Duration::from_secs(1)))
        }
    }

    /// Fails only for inputs containing "bad", so one attachment in a batch
    /// can fail while the others convert.
    struct SelectiveConverter;

    #[async_trait]
    impl MediaConverter for SelectiveConverter {
        async fn convert(&self, input: &[u8], _extension: &str) -> Result<Vec<u8>, ConvertError> {
            if input.windows(3).any(|window| window == b"bad") {
                Err(ConvertError::Timeout(Duration::from_secs(1)))
            } else {
                Ok(input.to_vec())
            }
        }
    }

    fn targets() -> TargetFormats {
        TargetFormats {
            image: "webp".to_string(),
            audio: "ogg".to_string(),
            video: "webm".to_string(),
        }
    }

    fn builder(converter: impl MediaConverter + 'static) -> ResponseBuilder {
        ResponseBuilder::new(Arc::new(UrlEchoFetcher), Arc::new(converter), targets())
    }

    fn attachment(url: &str, content_type: Option<&str>, name: &str) -> AttachmentRef {
        AttachmentRef {
            url: url.to_string(),
            content_type: content_type.map(str::to_string),
            name: name.to_string(),
        }
    }

    /// Tests the context-menu variant with no attachments on the message.
    ///
    /// Expected: "No attachments/files found!" and zero files.
    #[tokio::test]
    async fn message_without_attachments() {
        let response = builder(StubConverter).for_message_attachments(&[]).await;

        assert_eq!(response.content, "No attachments/files found!");
        assert!(response.files.is_empty());
    }

    /// Tests the context-menu variant with one convertible image.
    ///
    /// Expected: one output file named after the original plus the configured
    /// image extension, and empty content.
    #[tokio::test]
    async fn message_with_one_image() {
        let attachments = [attachment(
            "https://cdn.test/photo.png",
            Some("image/png"),
            "photo.png",
        )];
        let response = builder(StubConverter)
            .for_message_attachments(&attachments)
            .await;

        assert_eq!(response.content, "");
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.files[0].name, "photo.png.webp");
        assert_eq!(response.files[0].bytes, b"converted:https://cdn.test/photo.png");
    }

    /// Tests the context-menu variant with a non-media attachment.
    ///
    /// Expected: an index-annotated notice and zero files.
    #[tokio::test]
    async fn message_with_unsupported_attachment() {
        let attachments = [attachment(
            "https://cdn.test/notes.txt",
            Some("text/plain"),
            "notes.txt",
        )];
        let response = builder(StubConverter)
            .for_message_attachments(&attachments)
            .await;

        assert_eq!(response.content, "1. Neither audio, video nor image!");
        assert!(response.files.is_empty());
    }

    /// Tests that a later unsupported attachment overwrites the notice of an
    /// earlier one instead of appending to it.
    ///
    /// Expected: only the last notice survives, alongside the converted file.
    #[tokio::test]
    async fn later_unsupported_notice_overwrites_earlier() {
        let attachments = [
            attachment("https://cdn.test/notes.txt", Some("text/plain"), "notes.txt"),
            attachment("https://cdn.test/photo.png", Some("image/png"), "photo.png"),
            attachment("https://cdn.test/doc.pdf", Some("application/pdf"), "doc.pdf"),
        ];
        let response = builder(StubConverter)
            .for_message_attachments(&attachments)
            .await;

        assert_eq!(response.content, "3. Neither audio, video nor image!");
        assert_eq!(response.files.len(), 1);
    }

    /// Tests a batch where one of two conversions fails.
    ///
    /// Expected: the surviving file is returned and the content stays empty,
    /// since at least one file was produced.
    #[tokio::test]
    async fn message_with_one_of_two_conversions_failing() {
        let attachments = [
            attachment("https://cdn.test/good.png", Some("image/png"), "good.png"),
            attachment("https://cdn.test/bad.png", Some("image/png"), "bad.png"),
        ];
        let response = builder(SelectiveConverter)
            .for_message_attachments(&attachments)
            .await;

        assert_eq!(response.content, "");
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.files[0].name, "good.png.webp");
    }

    /// Tests a batch where every conversion fails.
    ///
    /// Expected: the generic batch failure notice and zero files.
    #[tokio::test]
    async fn message_where_all_conversions_fail() {
        let attachments = [attachment(
            "https://cdn.test/photo.png",
            Some("image/png"),
            "photo.png",
        )];
        let response = builder(FailingConverter)
            .for_message_attachments(&attachments)
            .await;

        assert_eq!(
            response.content,
            "Failed to convert files, likely one of the files has an unsupported format"
        );
        assert!(response.files.is_empty());
    }

    /// Tests the slash-command variant with no attachment supplied.
    ///
    /// Expected: "No attachments/files found!" and zero files.
    #[tokio::test]
    async fn single_without_attachment() {
        let response = builder(StubConverter).for_single_attachment(None).await;

        assert_eq!(response.content, "No attachments/files found!");
        assert!(response.files.is_empty());
    }

    /// Tests the slash-command variant with a convertible audio file.
    ///
    /// Expected: exactly one output file and empty content.
    #[tokio::test]
    async fn single_with_convertible_attachment() {
        let track = attachment("https://cdn.test/track.mp3", Some("audio/mpeg"), "track.mp3");
        let response = builder(StubConverter)
            .for_single_attachment(Some(&track))
            .await;

        assert_eq!(response.content, "");
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.files[0].name, "track.mp3.ogg");
    }

    /// Tests the slash-command variant with a non-media attachment.
    ///
    /// Expected: the position-free unsupported notice and zero files.
    #[tokio::test]
    async fn single_with_unsupported_attachment() {
        let notes = attachment("https://cdn.test/notes.txt", Some("text/plain"), "notes.txt");
        let response = builder(StubConverter)
            .for_single_attachment(Some(&notes))
            .await;

        assert_eq!(response.content, "Neither audio, video nor image!");
        assert!(response.files.is_empty());
    }

    /// Tests the slash-command variant when the conversion fails.
    ///
    /// Expected: the single-file failure notice and zero files.
    #[tokio::test]
    async fn single_with_failing_conversion() {
        let photo = attachment("https://cdn.test/photo.png", Some("image/png"), "photo.png");
        let response = builder(FailingConverter)
            .for_single_attachment(Some(&photo))
            .await;

        assert_eq!(
            response.content,
            "Failed to convert file, likely it has an unsupported format"
        );
        assert!(response.files.is_empty());
    }
}
