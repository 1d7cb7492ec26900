use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(about = "Static HTML SEO audit: scores, recommendations and readability")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for reports
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Audit a single HTML file
    Page {
        /// HTML file to audit
        file: PathBuf,

        /// Logical URL of the page (used for HTTPS and internal-link checks)
        #[arg(short, long, default_value = "")]
        url: String,
    },

    /// Audit every HTML file under a directory
    Site {
        /// Site root directory
        dir: PathBuf,

        /// Identifier for the site report [default: local]
        #[arg(long)]
        site_id: Option<String>,

        /// Public base URL of the site [default: none, pages use relative paths]
        #[arg(short, long)]
        base_url: Option<String>,

        /// Number of pages analysed concurrently [default: 4]
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// JSON configuration file; DIR and any option given above take precedence
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a sitemap.xml for a site directory
    Sitemap {
        /// Site root directory
        dir: PathBuf,

        /// Public base URL of the site
        #[arg(short, long)]
        base_url: String,
    },

    /// Print a robots.txt referencing the sitemap
    Robots {
        /// Public base URL of the site
        #[arg(short, long)]
        base_url: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}
