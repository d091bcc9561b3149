use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "crest", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wave SVG from a configuration JSON.
    Render(RenderArgs),
    /// Print the default configuration as JSON.
    Config,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input configuration JSON; omit to render the default configuration.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output SVG path, or '-' for stdout.
    #[arg(long, default_value = "-")]
    out: PathBuf,

    /// Override the configured seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Config => cmd_config(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.in_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            crest::WaveConfig::from_json_str(&raw)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => crest::WaveConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let svg = crest::render(&config)?;

    if args.out.as_os_str() == "-" {
        println!("{svg}");
        return Ok(());
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let config = crest::WaveConfig::default();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
