use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Extract markdown quiz questions into JSON")]
struct Cli {
    /// Input Markdown file (defaults to README.md)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file (defaults to docs/quiz.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to quiz.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> quiz::Result<()> {
    let config = match &cli.config {
        Some(path) => quiz::Config::from_file(path)?,
        None => quiz::Config::load(Path::new("quiz.toml"))?,
    };

    let input = cli.input.unwrap_or(config.paths.input);
    let output = cli.output.unwrap_or(config.paths.output);

    let count = quiz::extract_file(&input, &output, &config.markup)?;

    println!("Wrote {} items: {}", output.display(), count);
    Ok(())
}
