use std::io;
use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use ottawa_cli::{config, prompt, render};

/// Ottawa Ankle Rules self-assessment. Advisory only, not a diagnosis.
#[derive(Debug, Parser)]
#[command(name = "ottawa-check", version)]
struct Args {
    /// Reference content JSON (zones, guidance, wording).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Print the result summary as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Write the built-in reference content to the content path and exit.
    #[arg(long)]
    init_content: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.init_content {
        let path = match args.content {
            Some(path) => path,
            None => config::content_path()?,
        };
        return config::write_default_content(&path);
    }

    let content = config::load_content(args.content.as_deref())?;
    let summary = prompt::run(&content, &mut io::stdin().lock(), &mut io::stdout())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::render_summary(&summary));
    }
    Ok(())
}
