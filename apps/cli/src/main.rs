use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use markup::EntitySanitizer;
use shared::domain::Signals;
use tracing::debug;

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(about = "Render context-aware announcements for a host page")]
struct Cli {
    /// Category records, overriding the configured path.
    #[arg(long)]
    categories: Option<String>,
    /// Announcement records, overriding the configured path.
    #[arg(long)]
    announcements: Option<String>,
    /// Treat the request as coming from an authenticated user.
    #[arg(long)]
    authenticated: bool,
    /// Project the current request belongs to, if any.
    #[arg(long)]
    project_id: Option<i64>,
    /// Host page the content would be injected into.
    #[arg(long, default_value = "index.php")]
    page: String,
    /// Action query parameter of the current request.
    #[arg(long)]
    action: Option<String>,
    /// Print the content tree as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings();

    tracing_subscriber::fmt()
        .with_env_filter(if settings.debug { "debug" } else { "info" })
        .with_writer(std::io::stderr)
        .init();

    let categories_path = cli.categories.clone().or(settings.categories_path.clone());
    let announcements_path = cli
        .announcements
        .clone()
        .or(settings.announcements_path.clone());
    let (Some(categories_path), Some(announcements_path)) =
        (categories_path, announcements_path)
    else {
        debug!("no announcement source configured, nothing to render");
        return Ok(());
    };

    let snapshot = source::load_snapshot(
        Path::new(&categories_path),
        Path::new(&announcements_path),
    )
    .context("loading announcement records")?;
    let snapshot = source::filter_current(snapshot, Utc::now());

    let signals = Signals {
        authenticated: cli.authenticated,
        project_id: cli.project_id,
        page: cli.page,
        action: cli.action,
    };

    let options = settings.render_options();
    let Some(content) = engine::run(
        &snapshot.categories,
        &snapshot.announcements,
        &signals,
        &options,
        &EntitySanitizer,
    ) else {
        debug!("no announcement content for this context");
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    if !settings.custom_css.is_empty() {
        println!("<style type=\"text/css\">{}</style>", settings.custom_css);
    }
    println!("{}", markup::render_html(&content));
    Ok(())
}
