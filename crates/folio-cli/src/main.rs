//! Folio CLI
//!
//! Thin wrapper around folio-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Print a collection as JSON (falls back to bundled data offline)
//! folio fetch photos
//!
//! # Search work entries, newest first
//! folio search tesla --collection work --sort newest
//!
//! # Simulate the gallery's progressive loading
//! folio pages --collection photos --year 2023 --loads 2
//!
//! # Rewrite a CDN URL to a named variant
//! folio cdn https://res.cloudinary.com/demo/image/upload/v1/a.jpg --variant high
//!
//! # List filter values for a facet
//! folio facets year
//!
//! # Work, projects and education in date order
//! folio timeline --sort oldest
//!
//! # Blog content (no offline fallback)
//! folio blog list --tag rust
//! folio blog show hello-world
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::records::BlogPostSummary;
use folio_core::skills::extract_skills_now;
use folio_core::wordcloud::layout;
use folio_core::{
    facet, facet_values, CategoryFilter, Collection, DataProvider, FolioConfig, GalleryQuery,
    Identified, ImageVariant, MediaItem, PortfolioEntry, ProgressiveLoader, Searchable,
    sort_by_date, SortDirection,
};
use serde::Serialize;

/// Folio - portfolio content from the command line
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio content from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API base URL; overrides the config file and FOLIO_API_BASE_URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a content collection as JSON
    Fetch {
        collection: Collection,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Free-text search with optional year/topic filters
    Search {
        query: String,
        #[arg(short, long, default_value = "photos")]
        collection: Collection,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate load-more triggers and print the visible count after each
    Pages {
        #[arg(short, long, default_value = "photos")]
        collection: Collection,
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        topic: Option<String>,
        /// Items per batch (default from config)
        #[arg(short, long)]
        batch_size: Option<usize>,
        /// Number of load-more triggers
        #[arg(short, long, default_value_t = 3)]
        loads: usize,
    },

    /// Rewrite an image URL to a CDN variant
    Cdn {
        url: String,
        #[arg(long, default_value = "thumbnail")]
        variant: ImageVariant,
        /// Override the variant's default width
        #[arg(short, long)]
        width: Option<u32>,
    },

    /// List the values of a facet (year, topic, ...)
    Facets {
        facet: String,
        #[arg(short, long, default_value = "photos")]
        collection: Collection,
    },

    /// Work, projects and education in date order
    Timeline {
        #[arg(short, long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,
    },

    /// Weighted skills from work and project history
    Skills {
        /// Number of skills to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Images in a CDN folder
    Images { folder: String },

    /// Blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },
}

#[derive(Subcommand)]
enum BlogAction {
    /// List posts, optionally only those with a tag
    List {
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one post
    Show { slug: String },
    /// List all tags
    Tags,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Newest,
    Oldest,
}

impl From<SortArg> for SortDirection {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortDirection::Descending,
            SortArg::Oldest => SortDirection::Ascending,
        }
    }
}

/// One-line rendering for listings
trait Row {
    fn row(&self) -> String;
}

impl Row for MediaItem {
    fn row(&self) -> String {
        let tags: Vec<&str> = self.category_tags().collect();
        format!("{}  {}  [{}]", self.id, self.title(), tags.join(", "))
    }
}

impl Row for PortfolioEntry {
    fn row(&self) -> String {
        let mut line = format!("{}  {}", self.id(), self.title);
        if let Some(company) = &self.company {
            line.push_str(&format!(" @ {}", company));
        }
        let period = self.period();
        if !period.is_empty() {
            line.push_str(&format!("  ({})", period));
        }
        line
    }
}

/// A loaded collection, typed by its shape
enum Records {
    Media(Vec<MediaItem>),
    Entries(Vec<PortfolioEntry>),
}

async fn load(provider: &DataProvider, collection: Collection) -> Result<Records> {
    let records = match collection {
        Collection::Photos => Records::Media(provider.fetch_photo_items().await?),
        Collection::Work => Records::Entries(provider.fetch_work().await?),
        Collection::Projects => Records::Entries(provider.fetch_projects().await?),
        Collection::Education => Records::Entries(provider.fetch_education().await?),
    };
    Ok(records)
}

fn category_filter(year: Option<String>, topic: Option<String>) -> CategoryFilter {
    let mut filter = CategoryFilter::new();
    if let Some(year) = year {
        filter.set(facet::YEAR, year);
    }
    if let Some(topic) = topic {
        filter.set(facet::TOPIC, topic);
    }
    filter
}

fn print_matches<T>(items: Vec<T>, query: &GalleryQuery, json: bool) -> Result<()>
where
    T: Searchable + Row + Serialize,
{
    let view = query.apply(&items.into());
    if json {
        let matches: Vec<&T> = view.iter().collect();
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for item in view.iter() {
        println!("{}", item.row());
    }
    println!();
    println!("{} match(es)", view.len());
    Ok(())
}

async fn print_pages<T: Searchable>(
    items: Vec<T>,
    query: &GalleryQuery,
    batch_size: usize,
    loads: usize,
    config: &FolioConfig,
) {
    let view = query.apply(&items.into());
    let mut loader = ProgressiveLoader::new(batch_size);
    loader.track(&view);

    println!("{} item(s), batch size {}", view.len(), loader.batch_size());
    println!(
        "initial: visible {}/{}  has_more={}",
        loader.visible_count(),
        loader.total(),
        loader.has_more()
    );

    for n in 1..=loads {
        match loader.request_more() {
            Some(ticket) => {
                tokio::time::sleep(config.gallery.load_delay()).await;
                loader.commit(ticket);
                println!(
                    "load {}: visible {}/{}  has_more={}",
                    n,
                    loader.visible_count(),
                    loader.total(),
                    loader.has_more()
                );
            }
            None => {
                println!("load {}: nothing more to load", n);
            }
        }
    }
}

fn print_posts(posts: &[BlogPostSummary]) {
    for post in posts {
        let date = post.display_date();
        println!("{}  {}  {}", post.slug, post.title, date);
        if !post.tags.is_empty() {
            println!("    tags: {}", post.tags.join(", "));
        }
    }
    println!();
    println!("{} post(s)", posts.len());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = FolioConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(url) = cli.api_base_url {
        config.api_base_url = Some(url);
    }

    let provider = DataProvider::from_config(&config)?;
    tracing::info!(base_url = ?provider.base_url(), "Provider ready");

    match cli.command {
        Commands::Fetch {
            collection,
            compact,
        } => {
            let value = provider.fetch_collection_value(collection).await?;
            let text = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            println!("{}", text);
        }

        Commands::Search {
            query,
            collection,
            year,
            topic,
            sort,
            json,
        } => {
            let gallery_query = GalleryQuery {
                text: query,
                categories: category_filter(year, topic),
                sort: sort.map(SortDirection::from),
            };
            match load(&provider, collection).await? {
                Records::Media(items) => print_matches(items, &gallery_query, json)?,
                Records::Entries(items) => print_matches(items, &gallery_query, json)?,
            }
        }

        Commands::Pages {
            collection,
            query,
            year,
            topic,
            batch_size,
            loads,
        } => {
            let batch_size = batch_size.unwrap_or(config.gallery.batch_size);
            anyhow::ensure!(batch_size > 0, "batch size must be at least 1");
            let gallery_query = GalleryQuery {
                text: query,
                categories: category_filter(year, topic),
                sort: None,
            };
            match load(&provider, collection).await? {
                Records::Media(items) => {
                    print_pages(items, &gallery_query, batch_size, loads, &config).await
                }
                Records::Entries(items) => {
                    print_pages(items, &gallery_query, batch_size, loads, &config).await
                }
            }
        }

        Commands::Facets { facet, collection } => {
            let values = match load(&provider, collection).await? {
                Records::Media(items) => facet_values(&items, &facet),
                Records::Entries(items) => facet_values(&items, &facet),
            };
            for value in values {
                println!("{}", value);
            }
        }

        Commands::Timeline { sort } => {
            let mut entries = provider.fetch_timeline().await?;
            sort_by_date(&mut entries, sort.into());
            for entry in &entries {
                let year = entry.milestone_year().unwrap_or_else(|| "----".to_string());
                println!("{:>4}  {}  ({})  {}", year, entry.title, entry.organization(), entry.detail_path());
            }
            println!();
            println!("{} milestone(s)", entries.len());
        }

        Commands::Skills { limit } => {
            let (work, projects) = tokio::join!(provider.fetch_work(), provider.fetch_projects());
            let skills = extract_skills_now(&work?, &projects?);
            for word in layout(&skills).into_iter().take(limit) {
                println!(
                    "{:<24} value={:<3} recency={:<3} size={:.0}px",
                    word.word.text, word.word.value, word.word.recency, word.font_size_px
                );
            }
        }

        Commands::Images { folder } => {
            let images = provider
                .fetch_folder_images(&folder)
                .await
                .with_context(|| format!("failed to list images in '{}'", folder))?;
            for image in &images {
                println!("{}", image.to_media_item().row());
            }
            println!();
            println!("{} image(s)", images.len());
        }

        Commands::Blog { action } => match action {
            BlogAction::List { tag } => {
                let posts = match &tag {
                    Some(tag) => provider.fetch_blog_posts_by_tag(tag).await,
                    None => provider.fetch_blog_posts().await,
                }
                .context("failed to load blog posts")?;
                print_posts(&posts);
            }
            BlogAction::Show { slug } => {
                let post = provider
                    .fetch_blog_post(&slug)
                    .await
                    .with_context(|| format!("failed to load blog post '{}'", slug))?;
                println!("{}", post.summary.title);
                println!("{}", post.summary.display_date());
                println!();
                println!("{}", post.content);
            }
            BlogAction::Tags => {
                let tags = provider
                    .fetch_blog_tags()
                    .await
                    .context("failed to load blog tags")?;
                for tag in tags {
                    println!("{}", tag);
                }
            }
        },

        Commands::Cdn {
            url,
            variant,
            width,
        } => {
            let width = width.unwrap_or_else(|| variant.default_width());
            println!("{}", variant.apply_with_width(&url, width));
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
