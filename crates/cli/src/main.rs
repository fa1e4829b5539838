use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use helpcenter_client::HelpCenterClient;
use helpcenter_core::{ConfigError, WidgetConfig};
use helpcenter_widget::Widget;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "helpcenter")]
#[command(about = "Browse and search a Zendesk help center from the terminal", long_about = None)]
struct Cli {
    /// Help-center tenant, e.g. `acme` for acme.zendesk.com (or $HELPCENTER_SUBDOMAIN)
    #[arg(long, global = true)]
    subdomain: Option<String>,
    /// Content locale (or $HELPCENTER_LOCALE, default en-us)
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Replace the whole API root (proxies, testing)
    #[arg(long, global = true, hide = true)]
    base_url: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Html, global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Rendered widget markup
    Html,
    /// Breadcrumb and numbered interactive items
    Text,
    /// View state and affordances as JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all categories with their sections
    Home,
    /// Show one section and its articles
    Section {
        id: u64,
        /// Category name for the breadcrumb
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one article
    Article { id: u64 },
    /// Search articles (at least 3 characters)
    Search {
        /// Text to search for (at least 3 characters)
        query: String,
    },
    /// Interactive drill-down navigation
    Browse,
}

/// Environment first, then command-line flags on top.
fn build_config(cli: &Cli) -> Result<WidgetConfig, ConfigError> {
    let mut config = match cli.subdomain.as_deref() {
        Some(subdomain) => WidgetConfig::new(subdomain)?.with_env_overrides(),
        None => WidgetConfig::from_env()?,
    };
    if let Some(locale) = &cli.locale {
        config = config.with_locale(locale);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let client = HelpCenterClient::new(&config)?;
    tracing::debug!(?client, "help center client ready");
    let widget = Widget::new(Arc::new(client), config);

    match cli.command {
        Commands::Home => commands::view::run_home(&widget, cli.format).await,
        Commands::Section { id, category } => {
            commands::view::run_section(&widget, id, category, cli.format).await
        },
        Commands::Article { id } => commands::view::run_article(&widget, id, cli.format).await,
        Commands::Search { query } => commands::view::run_search(&widget, &query, cli.format).await,
        Commands::Browse => commands::browse::run(&widget).await,
    }
}
