//! Type definitions for yt-grab
//!
//! Source of truth for all data structures.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, YtGrabError};

// ============================================
// Quality Types
// ============================================

/// Quality preset offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum QualitySelector {
    #[serde(rename = "360p")]
    #[value(name = "360p")]
    P360,
    #[serde(rename = "480p")]
    #[value(name = "480p")]
    P480,
    #[serde(rename = "720p")]
    #[value(name = "720p")]
    P720,
    #[serde(rename = "1080p")]
    #[value(name = "1080p")]
    P1080,
    /// Best m4a audio, converted to mp3
    #[serde(rename = "audio")]
    #[value(name = "audio", alias = "mp3")]
    AudioOnly,
    /// Best video and best audio, merged into mp4
    #[default]
    #[serde(rename = "video")]
    #[value(name = "video", alias = "mp4")]
    VideoPlusAudio,
}

impl QualitySelector {
    /// All presets in menu order
    pub const ALL: [QualitySelector; 6] = [
        Self::P360,
        Self::P480,
        Self::P720,
        Self::P1080,
        Self::AudioOnly,
        Self::VideoPlusAudio,
    ];

    /// Human-readable label shown in menus and status lines
    pub fn label(self) -> &'static str {
        match self {
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::AudioOnly => "MP3 only (audio)",
            Self::VideoPlusAudio => "MP4 only (video+audio)",
        }
    }

    /// Position in [`QualitySelector::ALL`]
    pub fn menu_index(self) -> usize {
        Self::ALL.iter().position(|q| *q == self).unwrap_or_default()
    }
}

impl std::fmt::Display for QualitySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// yt-dlp arguments derived from a quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// yt-dlp format selection expression
    pub selector: &'static str,
    /// Pass `-x --audio-format mp3`
    pub extract_audio: bool,
    /// Container for merged video+audio
    pub container: &'static str,
}

// ============================================
// Download Types
// ============================================

/// One user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    quality: QualitySelector,
    output_name: Option<String>,
}

impl DownloadRequest {
    /// Build a request, rejecting a blank URL
    pub fn new(url: &str, quality: QualitySelector, output_name: Option<&str>) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(YtGrabError::EmptyUrl);
        }

        let output_name = output_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            url: url.to_string(),
            quality,
            output_name,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn quality(&self) -> QualitySelector {
        self.quality
    }

    /// Trimmed output name, `None` when blank
    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }
}

/// Outcome of one yt-dlp run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub exit_code: i32,
    /// stdout followed by stderr
    pub log: String,
}

impl DownloadResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Turn a non-zero exit into [`YtGrabError::InvocationFailure`]
    pub fn into_result(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(YtGrabError::InvocationFailure {
                exit_code: self.exit_code,
                log: self.log,
            })
        }
    }
}

// ============================================
// Metadata Types
// ============================================

/// What the extractor reports about a URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub duration_seconds: Option<u64>,
    pub approximate_size_bytes: Option<u64>,
}

impl VideoMetadata {
    /// Duration as "M min S sec"
    pub fn duration_display(&self) -> Option<String> {
        self.duration_seconds
            .map(|secs| format!("{} min {} sec", secs / 60, secs % 60))
    }

    /// Size in binary megabytes, two decimals
    pub fn size_display_mb(&self) -> Option<String> {
        self.approximate_size_bytes
            .map(|bytes| format!("{:.2}", bytes as f64 / (1024.0 * 1024.0)))
    }
}

// ============================================
// History Types
// ============================================

/// A successfully downloaded URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    /// When the download finished
    pub downloaded_at: DateTime<Local>,
}

// ============================================
// Config Types
// ============================================

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// yt-dlp executable name or path
    pub ytdlp_path: String,
    /// Preset preselected in the quality menu
    pub default_quality: QualitySelector,
    /// Working directory for downloads (empty = current directory)
    pub download_dir: String,
    /// Look up title/duration/size before downloading
    pub probe_metadata: bool,
    /// Editor command (default: "nvim")
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ytdlp_path: "yt-dlp".into(),
            default_quality: QualitySelector::default(),
            download_dir: String::new(),
            probe_metadata: true,
            editor: "nvim".into(),
        }
    }
}

// ============================================
// Selector Types
// ============================================

/// Item displayed in selector menu
#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    /// Display text
    pub label: String,
    /// Underlying value
    pub value: T,
}

// ============================================
// State Machine Types
// ============================================

/// Interactive shell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Main menu
    Init,
    /// Collect URL, quality and filename, then download
    Download,
    /// Show download history
    History,
    /// Exit application
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_display_splits_minutes() {
        let meta = VideoMetadata {
            duration_seconds: Some(125),
            ..Default::default()
        };
        assert_eq!(meta.duration_display().as_deref(), Some("2 min 5 sec"));
    }

    #[test]
    fn test_size_display_uses_binary_megabytes() {
        let meta = VideoMetadata {
            approximate_size_bytes: Some(104_857_600),
            ..Default::default()
        };
        assert_eq!(meta.size_display_mb().as_deref(), Some("100.00"));

        let meta = VideoMetadata {
            approximate_size_bytes: Some(1_572_864),
            ..Default::default()
        };
        assert_eq!(meta.size_display_mb().as_deref(), Some("1.50"));
    }

    #[test]
    fn test_absent_fields_have_no_display() {
        let meta = VideoMetadata::default();
        assert!(meta.duration_display().is_none());
        assert!(meta.size_display_mb().is_none());
    }

    #[test]
    fn test_request_rejects_blank_url() {
        let err = DownloadRequest::new("   ", QualitySelector::P720, None).unwrap_err();
        assert!(matches!(err, YtGrabError::EmptyUrl));
    }

    #[test]
    fn test_request_trims_output_name() {
        let req = DownloadRequest::new(" https://x/1 ", QualitySelector::P720, Some("  clip ")).unwrap();
        assert_eq!(req.url(), "https://x/1");
        assert_eq!(req.output_name(), Some("clip"));

        let req = DownloadRequest::new("https://x/1", QualitySelector::P720, Some("   ")).unwrap();
        assert_eq!(req.output_name(), None);
    }

    #[test]
    fn test_non_zero_exit_becomes_invocation_failure() {
        let result = DownloadResult {
            exit_code: 1,
            log: "ERROR: boom".into(),
        };
        match result.into_result() {
            Err(YtGrabError::InvocationFailure { exit_code, log }) => {
                assert_eq!(exit_code, 1);
                assert_eq!(log, "ERROR: boom");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_quality_names_round_trip_through_config() {
        let json = serde_json::to_string(&QualitySelector::AudioOnly).unwrap();
        assert_eq!(json, "\"audio\"");
        let parsed: QualitySelector = serde_json::from_str("\"1080p\"").unwrap();
        assert_eq!(parsed, QualitySelector::P1080);
        assert!(serde_json::from_str::<QualitySelector>("\"4k\"").is_err());
    }

    #[test]
    fn test_quality_cli_names() {
        assert_eq!(QualitySelector::from_str("720p", true).unwrap(), QualitySelector::P720);
        assert_eq!(QualitySelector::from_str("mp3", true).unwrap(), QualitySelector::AudioOnly);
        assert!(QualitySelector::from_str("8k", true).is_err());
    }

    #[test]
    fn test_default_quality_is_video_plus_audio() {
        assert_eq!(QualitySelector::default(), QualitySelector::VideoPlusAudio);
        assert_eq!(QualitySelector::VideoPlusAudio.menu_index(), 5);
        assert_eq!(QualitySelector::AudioOnly.label(), "MP3 only (audio)");
    }
}
