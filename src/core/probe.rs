//! Metadata lookup via yt-dlp, without downloading

use serde::Deserialize;

use super::ytdlp::YtDlp;
use crate::error::ProbeError;
use crate::types::VideoMetadata;

/// Subset of yt-dlp's info JSON we display.
/// Numbers may come back as floats, so everything numeric is `f64`.
#[derive(Debug, Default, Deserialize)]
struct RawInfo {
    title: Option<String>,
    duration: Option<f64>,
    filesize: Option<f64>,
    filesize_approx: Option<f64>,
}

/// Positive whole value, or `None`. Zero counts as unknown.
fn positive(value: Option<f64>) -> Option<u64> {
    value.filter(|v| v.is_finite() && *v >= 1.0).map(|v| v as u64)
}

impl From<RawInfo> for VideoMetadata {
    fn from(raw: RawInfo) -> Self {
        Self {
            title: raw.title,
            duration_seconds: positive(raw.duration),
            approximate_size_bytes: positive(raw.filesize).or_else(|| positive(raw.filesize_approx)),
        }
    }
}

fn probe_args(url: &str) -> Vec<String> {
    ["--dump-single-json", "--skip-download", "--no-warnings", url]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Parse yt-dlp's `--dump-single-json` output
pub fn parse_info(json: &str) -> Result<VideoMetadata, ProbeError> {
    let raw: RawInfo = serde_json::from_str(json.trim())
        .map_err(|e| ProbeError::new(format!("invalid info JSON: {}", e)))?;
    Ok(raw.into())
}

/// Ask yt-dlp what is behind `url`
pub async fn probe(ytdlp: &YtDlp, url: &str) -> Result<VideoMetadata, ProbeError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ProbeError::new("empty URL"));
    }

    let output = ytdlp
        .run(&probe_args(url))
        .await
        .map_err(|e| ProbeError::new(e.to_string()))?;

    if output.code != Some(0) {
        let reason = output.stderr.trim();
        tracing::warn!(url, code = ?output.code, reason, "metadata probe failed");
        return Err(ProbeError::new(if reason.is_empty() {
            format!("{} exited with code {:?}", ytdlp.program(), output.code)
        } else {
            reason.to_string()
        }));
    }

    parse_info(&output.stdout).inspect_err(|e| tracing::warn!(url, error = %e, "metadata probe failed"))
}
