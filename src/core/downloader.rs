//! Downloader module - yt-dlp integration

use super::format::{self, AUDIO_FORMAT};
use super::ytdlp::{ProcessOutput, YtDlp};
use crate::error::Result;
use crate::types::{DownloadRequest, DownloadResult};

/// Build the yt-dlp argument list for a request
pub fn build_args(request: &DownloadRequest) -> Vec<String> {
    let spec = format::resolve(request.quality());

    let mut args: Vec<String> = vec![
        "-f".into(),
        spec.selector.into(),
        "--merge-output-format".into(),
        spec.container.into(),
        request.url().into(),
    ];

    // Output template; yt-dlp picks the extension
    if let Some(name) = request.output_name() {
        args.extend(["-o".to_string(), format!("{}.%(ext)s", name)]);
    }

    if spec.extract_audio {
        args.extend(["-x", "--audio-format", AUDIO_FORMAT].map(String::from));
    }

    args
}

/// stdout then stderr, skipping whichever is empty
fn combine_log(output: &ProcessOutput) -> String {
    [output.stdout.trim_end(), output.stderr.trim_end()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run one download to completion
pub async fn invoke(ytdlp: &YtDlp, request: &DownloadRequest) -> Result<DownloadResult> {
    let output = ytdlp.run(&build_args(request)).await?;

    Ok(DownloadResult {
        exit_code: output.code.unwrap_or(-1),
        log: combine_log(&output),
    })
}
