use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    about = "Summarize tab-delimited web server logs: unique URLs, top domains and top crawlers",
    version,
    long_about = None
)]
pub struct Args {
    /// Log files to read, processed in order
    pub files: Vec<PathBuf>,

    /// Number of top domains to display
    #[arg(short = 'd', long, default_value_t = 10)]
    pub top_domains: usize,

    /// Number of top crawler IPs to display
    #[arg(short = 'c', long, default_value_t = 5)]
    pub top_crawlers: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub const USAGE: &str = "Usage: logtally log1.txt log2.txt ...";
