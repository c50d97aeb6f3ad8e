use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, Condition, Listing, ListingType, format_time_ago};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterCriteria, SortKey, browse, parse_selector};
use session::{InboxTab, NotificationInbox};
use sources::{CatalogSource, ListingSource, Scope};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// SwapIt - browse a local swap and donation marketplace
#[derive(Parser)]
#[command(name = "swapit")]
#[command(about = "Browse, filter and sort SwapIt listings", long_about = None)]
struct Cli {
    /// Directory holding listings.json and notifications.json.
    /// The built-in sample catalog is used when omitted.
    #[arg(short, long, env = "SWAPIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort listings
    Browse {
        /// Case-insensitive text matched against title, description and category
        #[arg(short, long, default_value = "")]
        query: String,

        /// Exact category ("any" for no restriction)
        #[arg(long, default_value = "any")]
        category: String,

        /// new, like_new, good, fair, poor ("any" for no restriction)
        #[arg(long, default_value = "any")]
        condition: String,

        /// swap or donation ("any" for no restriction)
        #[arg(long, default_value = "any")]
        listing_type: String,

        /// Only show boosted listings
        #[arg(long)]
        boosted_only: bool,

        /// newest, oldest, boosted or distance
        #[arg(long)]
        sort: Option<SortKey>,
    },

    /// Show a single listing
    Show {
        /// Listing ID
        #[arg(long)]
        id: String,
    },

    /// Show notifications
    Notifications {
        /// all, unread, or a notification kind such as swap_request
        #[arg(long, default_value = "all")]
        tab: InboxTab,
    },

    /// List categories with their listing counts
    Categories,

    /// Measure browse latency over the loaded catalog
    Benchmark {
        /// Number of browse runs
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = match &cli.data_dir {
        Some(dir) => {
            println!("Loading listings from {}...", dir.display());
            Catalog::load_from_dir(dir)
                .with_context(|| format!("Failed to load catalog from {}", dir.display()))?
        }
        None => Catalog::sample(Utc::now()),
    };
    let catalog = Arc::new(catalog);
    let (listings, notifications) = catalog.counts();
    println!(
        "{} Loaded {} listings and {} notifications in {:?}",
        "✓".green(),
        listings,
        notifications,
        start.elapsed()
    );

    match cli.command {
        Commands::Browse {
            query,
            category,
            condition,
            listing_type,
            boosted_only,
            sort,
        } => {
            let criteria =
                build_criteria(query, &category, &condition, &listing_type, boosted_only, sort)?;
            handle_browse(catalog, &criteria)?
        }
        Commands::Show { id } => handle_show(&catalog, &id)?,
        Commands::Notifications { tab } => handle_notifications(&catalog, tab),
        Commands::Categories => handle_categories(&catalog),
        Commands::Benchmark { iterations } => handle_benchmark(catalog, iterations)?,
    }

    Ok(())
}

/// Turn raw selector strings into criteria
fn build_criteria(
    query: String,
    category: &str,
    condition: &str,
    listing_type: &str,
    boosted_only: bool,
    sort: Option<SortKey>,
) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new().with_query(query);
    if let Some(category) = parse_selector(category) {
        criteria = criteria.with_category(category);
    }
    if let Some(condition) = parse_selector(condition) {
        let condition: Condition = condition.parse().context("Invalid --condition")?;
        criteria = criteria.with_condition(condition);
    }
    if let Some(listing_type) = parse_selector(listing_type) {
        let listing_type: ListingType = listing_type.parse().context("Invalid --listing-type")?;
        criteria = criteria.with_listing_type(listing_type);
    }
    if boosted_only {
        criteria = criteria.boosted_only();
    }
    criteria.sort = sort;
    Ok(criteria)
}

/// Handle the 'browse' command
fn handle_browse(catalog: Arc<Catalog>, criteria: &FilterCriteria) -> Result<()> {
    let source = CatalogSource::new(catalog);
    let listings = source
        .listings(&Scope::All)
        .with_context(|| format!("Failed to fetch listings from {}", source.name()))?;

    tracing::debug!("Browsing {} listings with {:?}", listings.len(), criteria);
    let visible = browse(&listings, criteria);

    println!(
        "{}",
        format!("{} items found", visible.len()).bold().blue()
    );
    print_filter_badges(criteria);

    if visible.is_empty() {
        println!("No items found. Try adjusting your search or filters.");
        return Ok(());
    }

    let now = Utc::now();
    for listing in visible {
        print_listing_row(listing, now);
    }
    Ok(())
}

fn print_filter_badges(criteria: &FilterCriteria) {
    if criteria.active_filter_count() == 0 {
        return;
    }
    let mut badges = Vec::new();
    if !criteria.query.is_empty() {
        badges.push(format!("\"{}\"", criteria.query));
    }
    if let Some(category) = &criteria.category {
        badges.push(category.clone());
    }
    if let Some(condition) = criteria.condition {
        badges.push(condition.label().to_string());
    }
    if let Some(listing_type) = criteria.listing_type {
        badges.push(listing_type.to_string());
    }
    if criteria.boosted_only {
        badges.push("Boosted".to_string());
    }
    println!("{}Filters: {}", "• ".green(), badges.join(", ").cyan());
}

fn print_listing_row(listing: &Listing, now: chrono::DateTime<Utc>) {
    let boost = if listing.boosted {
        "★ ".yellow().to_string()
    } else {
        "  ".to_string()
    };
    println!(
        "{}{} {} [{} · {} · {}] {} - {}",
        boost,
        format!("#{}", listing.id).green(),
        listing.title.bold(),
        listing.category,
        listing.condition,
        listing.listing_type,
        listing.location,
        format_time_ago(listing.created_at, now).dimmed()
    );
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str) -> Result<()> {
    let listing = catalog
        .get_listing(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;

    println!("{}", listing.title.bold().blue());
    if listing.boosted {
        println!("{}", "★ Boosted".yellow());
    }
    println!("{}Category: {}", "• ".green(), listing.category);
    println!("{}Condition: {}", "• ".green(), listing.condition);
    println!("{}Type: {}", "• ".green(), listing.listing_type);
    println!("{}Location: {}", "• ".green(), listing.location);
    println!("{}Owner: {}", "• ".green(), listing.owner_id);
    println!("{}Status: {:?}", "• ".green(), listing.status);
    println!(
        "{}Posted: {}",
        "• ".green(),
        format_time_ago(listing.created_at, Utc::now())
    );
    if !listing.images.is_empty() {
        println!("{}Images: {}", "• ".green(), listing.images.len());
    }
    println!();
    println!("{}", listing.description);
    Ok(())
}

/// Handle the 'notifications' command
fn handle_notifications(catalog: &Catalog, tab: InboxTab) {
    let inbox = NotificationInbox::new(catalog.notifications().to_vec());

    println!(
        "{}",
        format!("Notifications ({} unread)", inbox.unread_count())
            .bold()
            .blue()
    );

    let shown = inbox.filter(tab);
    if shown.is_empty() {
        println!("No notifications.");
        return;
    }

    let now = Utc::now();
    for notification in shown {
        let marker = if notification.read {
            "  ".to_string()
        } else {
            "● ".cyan().to_string()
        };
        println!(
            "{}{} {} - {}",
            marker,
            notification.title.bold(),
            format!("[{}]", notification.kind.as_str()).dimmed(),
            format_time_ago(notification.created_at, now).dimmed()
        );
        println!("    {}", notification.content);
    }
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for (category, count) in catalog.categories() {
        println!("{}{}: {}", "• ".green(), category, count);
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: Arc<Catalog>, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(anyhow!("--iterations must be at least 1"));
    }

    let criteria = FilterCriteria::new()
        .with_query("e")
        .sorted_by(SortKey::BoostedFirst);

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        let visible = browse(catalog.listings(), &criteria);
        std::hint::black_box(visible);
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / iterations as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];

    println!("Benchmark results ({} listings):", catalog.listings().len());
    println!("Iterations: {}", iterations);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} browses/second",
        iterations as f64 / total_time.as_secs_f64().max(f64::EPSILON)
    );

    Ok(())
}
