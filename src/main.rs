mod config;
mod error;
mod formulas;
mod i18n;
mod instructions;
mod layout;
mod protection;
mod reader;
mod sheets;
mod styles;
mod template;
mod writer;

use clap::Parser;
use config::GeneratorConfig;
use i18n::Language;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog-template")]
#[command(version, about = "Generate the product catalog data-entry Excel template")]
pub struct Args {
    /// Template language code (he, en)
    #[arg(short, long, default_value = "he")]
    pub lang: String,

    /// Generate every supported language
    #[arg(long, conflicts_with = "lang")]
    pub all: bool,

    /// Output directory (default: public/templates)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logo for the instructions sheet, skipped when missing
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Re-read each written file and verify its sheets
    #[arg(long)]
    pub check: bool,

    /// Print detailed progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> error::Result<()> {
    let mut config = GeneratorConfig::default();
    if let Some(dir) = args.output {
        config.output_dir = dir;
    }
    if let Some(logo) = args.logo {
        config.logo_path = logo;
    }

    let (languages, paths) = if args.all {
        (Language::ALL.to_vec(), template::generate_all(&config)?)
    } else {
        let language = Language::from_code(&args.lang)?;
        (vec![language], vec![template::generate(language, &config)?])
    };

    for (language, path) in languages.into_iter().zip(&paths) {
        if args.check {
            let expected = template::build(language, &config).layout;
            let summary = reader::check(path, &expected)?;
            info!(path = %path.display(), sheets = summary.len(), "check passed");
        }
        println!("{}", path.display());
    }

    Ok(())
}
