//! Persisted Models
//!
//! Shapes written to local storage.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One entry of the `tasks` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// One entry of the `drawings` array: a PNG data URI.
/// The URI is also the identity; equal images are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingRecord {
    pub image_url: String,
}

impl DrawingRecord {
    /// Accept a canvas export only if it is a decodable PNG data URI
    pub fn from_data_uri(uri: String) -> Result<Self> {
        let payload = uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or_else(|| AppError::InvalidImage("not a PNG data URI".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| AppError::InvalidImage(e.to_string()))?;
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(AppError::InvalidImage("missing PNG signature".to_string()));
        }
        Ok(Self { image_url: uri })
    }
}

#[cfg(test)]
pub(crate) fn sample_png_uri(tag: u8) -> String {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(&[0, 0, 0, 13, tag]);
    format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_record_json_shape() {
        let record = TaskRecord {
            text: "Buy milk".to_string(),
            completed: false,
            created_at: "Today 10:00".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"text":"Buy milk","completed":false,"createdAt":"Today 10:00"}"#);
    }

    #[test]
    fn test_task_record_missing_fields_default() {
        let record: TaskRecord = serde_json::from_str(r#"{"text":"old"}"#).unwrap();
        assert!(!record.completed);
        assert_eq!(record.created_at, "");
    }

    #[test]
    fn test_drawing_record_is_plain_string() {
        let uri = sample_png_uri(1);
        let record = DrawingRecord::from_data_uri(uri.clone()).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), format!("\"{}\"", uri));
    }

    #[test]
    fn test_drawing_record_rejects_bad_data() {
        assert!(matches!(
            DrawingRecord::from_data_uri("data:,".to_string()),
            Err(AppError::InvalidImage(_))
        ));
        assert!(DrawingRecord::from_data_uri(format!("{}!!!", PNG_DATA_URI_PREFIX)).is_err());
        let jpeg = format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode([0xFF, 0xD8, 0xFF]));
        assert!(DrawingRecord::from_data_uri(jpeg).is_err());
    }
}
