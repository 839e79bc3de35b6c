//! Media kinds accepted by the detector

use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::types::{ScanError, ScanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Text,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Image,
        MediaType::Video,
        MediaType::Audio,
        MediaType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Text => "text",
        }
    }

    /// Media type for an upload file extension (case-insensitive, no dot)
    pub fn from_extension(ext: &str) -> ScanResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "png" | "gif" => Ok(MediaType::Image),
            "mp4" | "webm" | "ogg" => Ok(MediaType::Video),
            "mp3" | "wav" => Ok(MediaType::Audio),
            "txt" | "md" => Ok(MediaType::Text),
            _ => Err(ScanError::InvalidMediaType(format!(".{}", ext))),
        }
    }

    /// Media type inferred from a file name
    pub fn from_path(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Err(ScanError::InvalidMediaType(format!(
                "no file extension on {}",
                path.display()
            ))),
        }
    }

    /// Value stored in `detection_method`
    pub fn detection_method(&self) -> String {
        match self {
            MediaType::Text => "heuristic-text".to_string(),
            other => format!("ml-model-{}", other.as_str()),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            "text" => Ok(MediaType::Text),
            _ => Err(ScanError::InvalidMediaType(s.to_string())),
        }
    }
}
