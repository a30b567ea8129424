//! Quality preset to yt-dlp format mapping

use crate::types::{FormatSpec, QualitySelector};

/// Container forced for merged video+audio
pub const OUTPUT_CONTAINER: &str = "mp4";

/// Audio format produced by `-x` extraction
pub const AUDIO_FORMAT: &str = "mp3";

/// Resolve a quality preset to yt-dlp format arguments
pub fn resolve(quality: QualitySelector) -> FormatSpec {
    let (selector, extract_audio) = match quality {
        QualitySelector::P360 => ("bestvideo[height=360]+bestaudio", false),
        QualitySelector::P480 => ("bestvideo[height=480]+bestaudio", false),
        QualitySelector::P720 => ("bestvideo[height=720]+bestaudio", false),
        QualitySelector::P1080 => ("bestvideo[height=1080]+bestaudio", false),
        QualitySelector::AudioOnly => ("bestaudio[ext=m4a]", true),
        QualitySelector::VideoPlusAudio => ("bestvideo+bestaudio", false),
    };

    FormatSpec {
        selector,
        extract_audio,
        container: OUTPUT_CONTAINER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        let expected = [
            (QualitySelector::P360, "bestvideo[height=360]+bestaudio", false),
            (QualitySelector::P480, "bestvideo[height=480]+bestaudio", false),
            (QualitySelector::P720, "bestvideo[height=720]+bestaudio", false),
            (QualitySelector::P1080, "bestvideo[height=1080]+bestaudio", false),
            (QualitySelector::AudioOnly, "bestaudio[ext=m4a]", true),
            (QualitySelector::VideoPlusAudio, "bestvideo+bestaudio", false),
        ];

        for (quality, selector, extract_audio) in expected {
            let spec = resolve(quality);
            assert_eq!(spec.selector, selector, "{quality}");
            assert_eq!(spec.extract_audio, extract_audio, "{quality}");
            assert_eq!(spec.container, "mp4");
        }
    }

    #[test]
    fn test_default_preset_resolves_to_best_merge() {
        assert_eq!(resolve(QualitySelector::default()).selector, "bestvideo+bestaudio");
    }
}
