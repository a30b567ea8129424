//! yt-grab - paste a link, pick a quality, grab it
//!
//! A small terminal front-end over yt-dlp with per-session download history.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yt_grab::core::session::Session;
use yt_grab::error::YtGrabError;
use yt_grab::storage::config;
use yt_grab::types::{AppState, Config, DownloadRequest, MenuItem, QualitySelector};
use yt_grab::ui::{prompt, render};

/// Paste a link, pick a quality, grab it with yt-dlp.
#[derive(Parser, Debug)]
#[command(name = "yt-grab")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Video URL (omit to start the interactive shell)
    url: Option<String>,

    /// Quality preset
    #[arg(short, long, value_enum)]
    quality: Option<QualitySelector>,

    /// Output filename, without extension
    #[arg(short, long)]
    output: Option<String>,

    /// Skip the metadata lookup before downloading
    #[arg(long)]
    no_probe: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Edit the configuration file
    #[arg(short, long)]
    edit: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "yt_grab=debug" } else { "yt_grab=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Probe `url` and print what came back, or a warning
async fn show_metadata(session: &mut Session, url: &str) {
    let spinner = render::spinner("Fetching video info...");
    let probed = session.probe(url).await;
    spinner.finish_and_clear();

    match probed {
        Ok(meta) => render::metadata(meta),
        Err(_) => render::probe_warning(),
    }
}

/// Run one download and print its log and outcome
async fn run_download(session: &mut Session, request: &DownloadRequest) -> Result<(), YtGrabError> {
    render::starting(request.quality());

    let spinner = render::spinner("Downloading... Please wait.");
    let result = session.download(request).await;
    spinner.finish_and_clear();

    match &result {
        Ok(done) => {
            render::log(&done.log);
            render::success();
        }
        Err(YtGrabError::InvocationFailure { log, .. }) => {
            render::log(log);
            render::failure();
        }
        Err(e) => render::error(e),
    }

    result.map(|_| ())
}

/// Download a single URL given on the command line
async fn one_shot(session: &mut Session, cli: &Cli, cfg: &Config, probe: bool, url: &str) -> Result<(), YtGrabError> {
    let quality = cli.quality.unwrap_or(cfg.default_quality);
    let request = DownloadRequest::new(url, quality, cli.output.as_deref())
        .inspect_err(|_| render::empty_url_warning())?;

    if probe {
        show_metadata(session, request.url()).await;
    }

    run_download(session, &request).await
}

/// Menu-driven loop; nothing that goes wrong here ends the session
async fn interactive(session: &mut Session, cfg: &Config, probe: bool) {
    let mut state = AppState::Init;

    while state != AppState::Exit {
        match state {
            AppState::Init => {
                let menu_items = vec![
                    MenuItem { label: "⬇️  Download a video".into(), value: AppState::Download },
                    MenuItem { label: "📜 View download history".into(), value: AppState::History },
                    MenuItem { label: "👋 Exit".into(), value: AppState::Exit },
                ];

                state = prompt::select(&menu_items, "Select Action", 0).unwrap_or(AppState::Exit);
            }

            AppState::Download => {
                state = AppState::Init;

                let url = match prompt::text("Enter video URL") {
                    Ok(url) => url,
                    Err(e) => {
                        render::prompt_error(&e);
                        continue;
                    }
                };
                if url.trim().is_empty() {
                    render::empty_url_warning();
                    continue;
                }

                if probe {
                    show_metadata(session, &url).await;
                }

                let Some(quality) = prompt::choose_quality(cfg.default_quality) else {
                    continue;
                };
                let filename = match prompt::text("Optional: output filename (without extension)") {
                    Ok(filename) => filename,
                    Err(e) => {
                        render::prompt_error(&e);
                        continue;
                    }
                };

                let request = match DownloadRequest::new(&url, quality, Some(&filename)) {
                    Ok(request) => request,
                    Err(e) => {
                        render::error(&e);
                        continue;
                    }
                };

                if let Err(e) = run_download(session, &request).await {
                    tracing::debug!(error = %e, "download did not complete");
                }

                if !session.history().is_empty() {
                    println!();
                    render::history(session.history());
                }
            }

            AppState::History => {
                render::history(session.history());
                render::last_lookup(session.last_metadata());
                state = AppState::Init;
            }

            AppState::Exit => break,
        }
    }
}

/// Everything after argument parsing. Failures are shown before they are returned.
async fn run(cli: &Cli) -> Result<(), YtGrabError> {
    // Handle --edit flag; a broken config file must still be editable
    if cli.edit {
        let cfg = config::load_config().await.unwrap_or_default();
        return config::edit_config(&cfg.editor).await.inspect_err(render::error);
    }

    let cfg = config::load_config().await.inspect_err(render::error)?;
    let mut session = Session::open(&cfg).await.inspect_err(render::error)?;
    let probe = cfg.probe_metadata && !cli.no_probe;

    match cli.url.as_deref() {
        Some(url) => one_shot(&mut session, cli, &cfg, probe, url).await,
        None => {
            interactive(&mut session, &cfg, probe).await;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli).await {
        tracing::debug!(error = %e, status = e.exit_status(), "exiting");
        std::process::exit(e.exit_status());
    }
}
