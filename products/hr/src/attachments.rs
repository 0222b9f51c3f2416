use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use entity::Attachment;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Per-file ceiling enforced on upload intake.
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// The tuple handed over by the client's file-reading boundary.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadInput {
    pub name: String,
    pub content_type: String,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
    /// Size declared by the client, in bytes.
    pub size: u64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("file exceeds the {MAX_ATTACHMENT_BYTES} byte limit")]
    TooLarge { size: u64 },
    #[error("payload is not a base64 data: URI")]
    NotDataUri,
    #[error("payload is not valid base64")]
    InvalidBase64,
    #[error("declared size {declared} does not match decoded length {actual}")]
    SizeMismatch { declared: u64, actual: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedUpload {
    pub name: String,
    pub reason: UploadError,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadBatch {
    pub accepted: Vec<Attachment>,
    pub rejected: Vec<RejectedUpload>,
}

/// Screens a batch of uploads. A rejected file never fails the batch: the
/// remaining files are still accepted, and every rejection is returned with
/// its reason so the client can warn the user.
pub fn accept_uploads(inputs: Vec<UploadInput>) -> UploadBatch {
    let mut batch = UploadBatch::default();
    for input in inputs {
        match screen_upload(&input) {
            Ok(attachment) => batch.accepted.push(attachment),
            Err(reason) => {
                warn!(file = %input.name, error = %reason, "upload rejected");
                batch.rejected.push(RejectedUpload {
                    name: input.name,
                    reason,
                });
            }
        }
    }
    batch
}

fn screen_upload(input: &UploadInput) -> Result<Attachment, UploadError> {
    // Declared size first: a 6 MB file is rejected without decoding it.
    if input.size > MAX_ATTACHMENT_BYTES {
        return Err(UploadError::TooLarge { size: input.size });
    }
    let payload = decode_data_url(&input.data_url)?;
    let actual = payload.len() as u64;
    if actual > MAX_ATTACHMENT_BYTES {
        return Err(UploadError::TooLarge { size: actual });
    }
    if actual != input.size {
        return Err(UploadError::SizeMismatch {
            declared: input.size,
            actual,
        });
    }
    Ok(Attachment {
        id: Uuid::new_v4().to_string(),
        name: input.name.clone(),
        content_type: input.content_type.clone(),
        data_url: input.data_url.clone(),
        size: actual,
    })
}

fn decode_data_url(data_url: &str) -> Result<Vec<u8>, UploadError> {
    let rest = data_url.strip_prefix("data:").ok_or(UploadError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(UploadError::NotDataUri)?;
    if !header.ends_with(";base64") {
        return Err(UploadError::NotDataUri);
    }
    STANDARD
        .decode(payload)
        .map_err(|_| UploadError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, bytes: &[u8]) -> UploadInput {
        UploadInput {
            name: name.into(),
            content_type: "application/octet-stream".into(),
            data_url: format!("data:application/octet-stream;base64,{}", STANDARD.encode(bytes)),
            size: bytes.len() as u64,
        }
    }

    #[test]
    fn oversized_file_is_rejected_while_batch_partner_succeeds() {
        let small = upload("small.pdf", &vec![0u8; 1024 * 1024]);
        let mut large = upload("large.pdf", &[1, 2, 3]);
        large.size = 6 * 1024 * 1024;

        let batch = accept_uploads(vec![large, small]);
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.accepted[0].name, "small.pdf");
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].name, "large.pdf");
        assert!(matches!(batch.rejected[0].reason, UploadError::TooLarge { .. }));
    }

    #[test]
    fn accepted_attachment_gets_an_id_and_decoded_size() {
        let batch = accept_uploads(vec![upload("doc.txt", b"hello attachments")]);
        assert!(batch.rejected.is_empty());
        let attachment = &batch.accepted[0];
        assert!(!attachment.id.is_empty());
        assert_eq!(attachment.size, 17);
        assert_eq!(attachment.content_type, "application/octet-stream");
    }

    #[test]
    fn non_data_uri_payload_is_rejected() {
        let mut input = upload("doc.txt", b"x");
        input.data_url = "https://example.test/doc.txt".into();
        let batch = accept_uploads(vec![input]);
        assert_eq!(batch.rejected[0].reason, UploadError::NotDataUri);
    }

    #[test]
    fn garbage_base64_is_rejected() {
        let mut input = upload("doc.txt", b"x");
        input.data_url = "data:text/plain;base64,@@not-base64@@".into();
        input.size = 1;
        let batch = accept_uploads(vec![input]);
        assert_eq!(batch.rejected[0].reason, UploadError::InvalidBase64);
    }

    #[test]
    fn declared_size_must_match_payload() {
        let mut input = upload("doc.txt", b"four");
        input.size = 40;
        let batch = accept_uploads(vec![input]);
        assert_eq!(
            batch.rejected[0].reason,
            UploadError::SizeMismatch { declared: 40, actual: 4 }
        );
    }
}
