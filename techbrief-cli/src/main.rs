//! TechBrief CLI: print articles, build share links, copy breakdown points.
//!
//! Commands:
//! - `show`: print the article as plain text
//! - `share`: print a share-intent URL for the article
//! - `copy`: copy one breakdown point to the clipboard
//! - `validate`: load and validate an article file

mod render;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use techbrief_core::sample::sample_article;
use techbrief_core::share::{share_url, SharePlatform};
use techbrief_core::{
    load_article, Article, BreakdownList, Clipboard, DetailTab, MemoryClipboard, SystemClipboard,
};

#[derive(Parser)]
#[command(
    name = "techbrief",
    about = "TechBrief CLI: newsletter articles with expandable breakdowns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the article as plain text.
    Show {
        /// Article file (TOML). Defaults to the built-in issue.
        #[arg(long)]
        article: Option<PathBuf>,

        /// Expand every breakdown point.
        #[arg(long, default_value_t = false)]
        expand_all: bool,

        /// Detail view for expanded points: details, metadata or links.
        #[arg(long, default_value = "details")]
        tab: DetailTab,
    },
    /// Print a share link for the article.
    Share {
        /// twitter (or x) / linkedin
        platform: SharePlatform,

        /// Article file (TOML). Defaults to the built-in issue.
        #[arg(long)]
        article: Option<PathBuf>,

        /// Page URL being shared.
        #[arg(long)]
        url: String,
    },
    /// Copy a breakdown point (1-based) to the clipboard.
    Copy {
        index: usize,

        /// Article file (TOML). Defaults to the built-in issue.
        #[arg(long)]
        article: Option<PathBuf>,

        /// Print what would be copied without touching the clipboard.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Load and validate an article file.
    Validate { path: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            article,
            expand_all,
            tab,
        } => run_show(article.as_deref(), expand_all, tab),
        Commands::Share {
            platform,
            article,
            url,
        } => run_share(platform, article.as_deref(), &url),
        Commands::Copy {
            index,
            article,
            dry_run,
        } => run_copy(index, article.as_deref(), dry_run),
        Commands::Validate { path } => run_validate(&path),
    }
}

fn article_or_sample(path: Option<&Path>) -> Result<Article> {
    match path {
        Some(path) => load_article(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(sample_article()),
    }
}

fn run_show(path: Option<&Path>, expand_all: bool, tab: DetailTab) -> Result<()> {
    let article = article_or_sample(path)?;
    let mut list = BreakdownList::new(article.breakdown.clone());
    for position in 0..list.len() {
        if let Some(item) = list.get_mut(position) {
            item.select_tab(tab);
            if expand_all {
                item.toggle_expand();
            }
        }
    }
    print!("{}", render::render_article(&article, &list));
    Ok(())
}

fn run_share(platform: SharePlatform, path: Option<&Path>, url: &str) -> Result<()> {
    let article = article_or_sample(path)?;
    println!("{}", share_url(platform, &article.title, url));
    Ok(())
}

fn run_copy(index: usize, path: Option<&Path>, dry_run: bool) -> Result<()> {
    let article = article_or_sample(path)?;
    if index == 0 || index > article.breakdown.len() {
        bail!(
            "point {index} out of range (article has {} points)",
            article.breakdown.len()
        );
    }
    let position = index - 1;
    let mut list = BreakdownList::new(article.breakdown.clone());

    // The contents must outlive this process.
    let mut clipboard: Box<dyn Clipboard> = if dry_run {
        Box::new(MemoryClipboard::new())
    } else {
        if cfg!(target_os = "linux") {
            eprintln!("Waiting for a clipboard manager to take the text...");
        }
        Box::new(SystemClipboard::waiting())
    };
    list.copy_point(position, &mut *clipboard, Instant::now())
        .context("copying to clipboard")?;
    list.teardown();
    tracing::debug!(position, dry_run, "point copied");

    let point = &article.breakdown[position].point;
    if dry_run {
        println!("Would copy: {point}");
    } else {
        println!("Copied: {point}");
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let article = load_article(path).with_context(|| format!("validating {}", path.display()))?;
    let links: usize = article
        .breakdown
        .iter()
        .map(|entry| entry.metadata.related_links.len())
        .sum();
    println!(
        "OK: \"{}\" ({} breakdown points, {} related links)",
        article.title,
        article.breakdown.len(),
        links
    );
    Ok(())
}
