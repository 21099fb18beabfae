use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::time::Duration;
use websearch::{
    ClientOptions, RequestGateway, format_result_item, interactive::InteractiveSearch, logging,
};

#[derive(Parser)]
#[command(
    name = "websearch",
    version,
    about = "Interactive terminal client for a distributed web search backend",
    long_about = None
)]
struct Cli {
    /// Search query
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Backend base URL
    #[arg(short, long, env = "WEBSEARCH_ENDPOINT", default_value = "http://localhost:8000")]
    endpoint: String,

    /// Results requested per page fetch
    #[arg(long, default_value = "10")]
    page_size: usize,

    /// Zero-based page to fetch in one-shot mode
    #[arg(short = 'p', long, default_value = "0")]
    page: usize,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Interactive search mode (TUI)
    #[arg(short = 'i', long)]
    interactive: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing();

    let options = ClientOptions {
        endpoint: cli.endpoint.clone(),
        page_size: cli.page_size,
        timeout_secs: cli.timeout,
        verbose: cli.verbose,
    };

    // Interactive mode
    if cli.interactive {
        let mut interactive = InteractiveSearch::new(options);
        return interactive.run();
    }

    // One-shot mode - query is required
    let query = cli
        .query
        .ok_or_else(|| anyhow::anyhow!("Query argument is required (use --interactive for interactive mode)"))?;

    if cli.verbose {
        eprintln!("Endpoint: {}", options.endpoint);
        eprintln!("Query: {query:?} (page {})", cli.page);
    }

    let gateway = RequestGateway::new(&options.endpoint, Duration::from_secs(options.timeout_secs))?;
    let offset = cli.page * options.page_size;
    let results = gateway.search(&query, offset)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(handle, "No results found.")?;
            } else {
                for item in &results {
                    writeln!(handle, "{}\n", format_result_item(item, !cli.no_color))?;
                }
                eprintln!("({} results on page {})", results.len(), cli.page);
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &results)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
