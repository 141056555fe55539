use clap::{Args, Parser, Subcommand};
use newsdesk::model::Category;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsdesk", bin_name = "newsdesk", version)]
#[command(about = "Write, store and render articles for a local news site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish a new article
    #[command(alias = "p")]
    Publish(PublishArgs),

    /// List published articles, newest first
    #[command(alias = "ls")]
    List,

    /// Print the reader view of an article
    #[command(alias = "v")]
    Show {
        /// Article id (see `newsdesk list`)
        id: u64,
    },

    /// Print the homepage hero and grid
    Home,

    /// Write the site (index, article pages, stylesheet) to a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (slot-key, quota-bytes, site-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Headline
    #[arg(long, default_value = "")]
    pub headline: String,

    /// Reporter name for the byline
    #[arg(long, default_value = "")]
    pub reporter: String,

    /// Section: local, breaking, weather, sports, politics, business, entertainment, community
    #[arg(long, default_value = "local")]
    pub category: Category,

    /// Image caption
    #[arg(long, default_value = "")]
    pub caption: String,

    /// Article body as HTML
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the HTML body from a file (`-` for stdin)
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Image file to embed in the article
    #[arg(long)]
    pub image: Option<PathBuf>,
}
