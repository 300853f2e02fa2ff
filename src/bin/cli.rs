//! Storefront CLI
//!
//! Loads the homepage data from a running backend, the same way the
//! storefront page does, and prints what the page would render.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront::{
    HomeDataAggregator, HomeOptions, HttpStorefrontApi, StorefrontApi,
    error::Result,
    models::{Config, ProductId},
    services::{CategoryIcon, ReadGuard, ReviewSummaryCache},
};

/// Storefront homepage data loader
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Storefront homepage data loader")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "storefront.toml")]
    config: PathBuf,

    /// Override the backend origin from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load banner, categories, featured products and their ratings
    Home {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up review summaries for the given product ids
    Reviews {
        #[arg(required = true)]
        ids: Vec<u64>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    log::info!("Using backend {}", config.api.base_url);
    let api: Arc<dyn StorefrontApi> = Arc::new(HttpStorefrontApi::new(&config.api)?);

    match cli.command {
        Command::Home { json } => {
            let home = HomeDataAggregator::new(api, &HomeOptions::from_config(&config));
            home.load().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&home.snapshot())?);
                return Ok(());
            }

            let banner = home.main_banner();
            match home.banner_urls() {
                Some(urls) => {
                    log::info!("Banner: {} ({})", urls.desktop, banner.button_text);
                    log::info!("Mobile banner: {}", urls.mobile);
                }
                None => log::info!("Banner: none"),
            }

            let categories = home.categories();
            log::info!("Categories ({}):", categories.len());
            for category in &categories {
                let icon = match home.category_icon(category) {
                    CategoryIcon::Image { url, .. } => format!("image {url}"),
                    CategoryIcon::Named { name } => format!("icon {name}"),
                    CategoryIcon::Builtin { icon } => format!("builtin {}", icon.name()),
                };
                log::info!("    {} -> {} [{}]", category.name, category.href(), icon);
            }

            let products = home.featured_products();
            log::info!("Featured products ({}):", products.len());
            for product in &products {
                let rating = home.product_rating(product.id);
                let name = product
                    .field("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("-");
                log::info!(
                    "    #{} {} ({:.1} from {} reviews)",
                    product.id,
                    name,
                    rating.rating,
                    rating.count
                );
            }
        }

        Command::Reviews { ids } => {
            let ids: Vec<ProductId> = ids.into_iter().map(ProductId).collect();
            let cache = ReviewSummaryCache::new(api, ReadGuard::new(config.api.timeout()));
            let found = cache.refresh_batch(&ids).await?;
            log::info!("Found summaries for {} of {} products", found, ids.len());

            for id in ids {
                let rating = cache.rating(id);
                log::info!("    #{}: {:.1} ({} reviews)", id, rating.rating, rating.count);
            }
        }

        Command::Validate => {
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    log::info!("Done!");

    Ok(())
}
