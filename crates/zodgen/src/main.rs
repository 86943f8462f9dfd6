//! zodgen CLI entry point.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zodgen::config::{self, Config};
use zodgen::protocol::{self, Manifest};
use zodgen_dmmf::ConfigValue;

/// Generate Zod validation schemas from a Prisma datamodel.
#[derive(Parser, Debug)]
#[command(name = "zodgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate schemas from a DMMF JSON file
    Generate(GenerateArgs),
    /// Speak the Prisma generator protocol on stdin/stderr
    Serve,
    /// Print the generator manifest
    Manifest,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// DMMF JSON file, use - for stdin
    #[arg(short, long)]
    schema: PathBuf,

    /// TOML file with generator options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override a generator option, e.g. --set multipleFiles=true
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = config::parse_assignment)]
    overrides: Vec<(String, String)>,
}

fn init_tracing(ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zodgen=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .init();
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let content = if args.schema.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.schema)
            .with_context(|| format!("failed to read {}", args.schema.display()))?
    };
    let datamodel = zodgen_dmmf::parse_datamodel(&content)
        .with_context(|| format!("failed to parse {}", args.schema.display()))?;

    let mut raw = match &args.config {
        Some(path) => config::load_file(path)?,
        None => config::RawConfig::new(),
    };
    for (key, value) in args.overrides {
        raw.insert(key, ConfigValue::Single(value));
    }
    let config = Config::from_raw(&raw, args.output);

    zodgen::generate::generate(&datamodel, &config)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => {
            init_tracing(true);
            run_generate(args)?;
        }
        Command::Serve => {
            // stderr doubles as the response channel.
            init_tracing(false);
            let stdin = std::io::stdin();
            protocol::serve(stdin.lock(), std::io::stderr())
                .context("generator protocol failed")?;
        }
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&Manifest::default())?);
        }
    }

    Ok(())
}
