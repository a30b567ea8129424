//! One interactive session: the downloader handle plus everything it remembers

use super::downloader;
use super::probe;
use super::ytdlp::YtDlp;
use crate::error::{ProbeError, Result};
use crate::storage::history::History;
use crate::types::{Config, DownloadRequest, DownloadResult, VideoMetadata};
use crate::utils::paths::{ensure_dir, resolve_download_dir};

pub struct Session {
    ytdlp: YtDlp,
    history: History,
    last_metadata: Option<VideoMetadata>,
}

impl Session {
    pub fn new(ytdlp: YtDlp) -> Self {
        Self {
            ytdlp,
            history: History::new(),
            last_metadata: None,
        }
    }

    /// Set up yt-dlp from `cfg`: create the download directory and check the binary exists
    pub async fn open(cfg: &Config) -> Result<Self> {
        let mut ytdlp = YtDlp::new(cfg.ytdlp_path.clone());
        if let Some(dir) = resolve_download_dir(&cfg.download_dir) {
            ensure_dir(&dir).await?;
            ytdlp = ytdlp.working_dir(dir);
        }
        ytdlp.ensure_available().await?;

        Ok(Self::new(ytdlp))
    }

    /// Look up `url` and remember the result. A failure clears what was remembered.
    pub async fn probe(&mut self, url: &str) -> std::result::Result<&VideoMetadata, ProbeError> {
        self.last_metadata = None;
        let metadata = probe::probe(&self.ytdlp, url).await?;
        Ok(self.last_metadata.insert(metadata))
    }

    /// Download once. Only a zero exit adds the URL to history.
    pub async fn download(&mut self, request: &DownloadRequest) -> Result<DownloadResult> {
        let result = downloader::invoke(&self.ytdlp, request).await?.into_result()?;
        self.history.append(request.url());
        Ok(result)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_metadata(&self) -> Option<&VideoMetadata> {
        self.last_metadata.as_ref()
    }
}
