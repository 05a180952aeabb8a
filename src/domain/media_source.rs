use serde::Deserialize;

/// Where the audio comes from. A platform video needs an external extractor
/// to turn the page URL into a media stream; a direct media URL points at
/// the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    PlatformVideo,
    DirectMedia,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::PlatformVideo => "platform_video",
            SourceKind::DirectMedia => "direct_media",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaSource {
    pub url: String,
    pub kind: SourceKind,
}

impl MediaSource {
    pub fn new(url: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}
