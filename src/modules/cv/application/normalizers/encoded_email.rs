use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{DocumentNormalizer, NormalizeError};
use crate::cv::domain::entities::CvDocument;

const FIELD: &str = "profile.encoded_email";

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodedEmailNormalizer;

impl DocumentNormalizer for EncodedEmailNormalizer {
    fn name(&self) -> &'static str {
        "encoded_email"
    }

    fn normalize(&self, document: &mut CvDocument) -> Result<(), NormalizeError> {
        let Some(profile) = document.profile.as_mut() else {
            return Ok(());
        };

        let email = match profile.encoded_email.as_deref() {
            Some(encoded) if !encoded.trim().is_empty() => decode_email(encoded)?,
            _ => return Ok(()),
        };

        profile.email = email;
        Ok(())
    }
}

/// Standard (padded) base64 into UTF-8 text. Surrounding whitespace is ignored.
pub fn decode_email(encoded: &str) -> Result<String, NormalizeError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| NormalizeError::InvalidBase64 {
            field: FIELD,
            message: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|_| NormalizeError::InvalidUtf8 { field: FIELD })
}
