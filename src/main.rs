//! tyre-page-gen - generate tyre size landing page copy from the command line
//!
//! `generate` prints one page as Markdown, `inspect` shows how a size is
//! parsed and classified, `bulk` turns a CSV of sizes into a zip archive.

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use tyre_page_gen::{assemble, bulk_from_csv, GeneratorConfig, Segment, TyreSize};

/// Command-line arguments for tyre-page-gen
#[derive(Parser, Debug)]
#[command(name = "tyre-page-gen")]
#[command(about = "Tyre size page generator")]
#[command(version)]
struct Cli {
    /// TOML config overriding brand and default schema selection
    #[arg(short, long, global = true, env = "TYRE_PAGE_GEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the page for one size
    Generate {
        /// Tyre size, e.g. "225 45 19" or 225/45R19
        size: String,

        /// Write .md, .docx and .jsonld files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        schemas: SchemaFlags,
    },
    /// Show the canonical size, segment and suggested alternates
    Inspect {
        size: String,
    },
    /// Generate pages for every size in a CSV and zip them
    Bulk {
        /// CSV with a "Tyre Size" column, or sizes anywhere in its cells
        input: PathBuf,

        /// Archive path
        #[arg(short, long, default_value = "tyre-pages.zip")]
        out: PathBuf,

        #[command(flatten)]
        schemas: SchemaFlags,
    },
}

#[derive(Args, Debug)]
struct SchemaFlags {
    /// Skip the Product JSON-LD
    #[arg(long)]
    no_product: bool,

    /// Skip the FAQ JSON-LD
    #[arg(long)]
    no_faq: bool,

    /// Include the LocalBusiness JSON-LD (for store pages)
    #[arg(long)]
    local_business: bool,
}

impl SchemaFlags {
    fn apply(&self, config: &mut GeneratorConfig) {
        if self.no_product {
            config.options.include_product_schema = false;
        }
        if self.no_faq {
            config.options.include_faq_schema = false;
        }
        if self.local_business {
            config.options.include_local_business_schema = true;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Command::Generate { size, out_dir, schemas } => {
            schemas.apply(&mut config);
            let page = assemble(&size, &config)?;
            println!("{}", page.markdown);
            for (kind, doc) in &page.schemas {
                println!("\n{}:\n{}", kind.label(), serde_json::to_string_pretty(doc)?);
            }
            eprintln!("{}", page.summary());

            if let Some(dir) = out_dir {
                write_files(&dir, &page.files()?)?;
            }
        }
        Command::Inspect { size } => {
            let size: TyreSize = size.parse()?;
            let segment = Segment::of(&size);
            let others: Vec<String> = tyre_page_gen::suggest(&size, segment)
                .iter()
                .map(TyreSize::canonical)
                .collect();
            println!("Size:        {}", size);
            println!("Segment:     {}", segment);
            println!("Proof point: {}", segment.proof_point(size.aspect()));
            println!("Suggestions: {}", others.join(", "));
        }
        Command::Bulk { input, out, schemas } => {
            schemas.apply(&mut config);
            let file = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let output = bulk_from_csv(BufReader::new(file), &config)?;
            fs::write(&out, output.archive()?)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!("Wrote {} sizes to {}", output.sizes.len(), out.display());
            println!("Found {} valid sizes", output.sizes.len());
        }
    }

    Ok(())
}

fn write_files(dir: &Path, files: &indexmap::IndexMap<String, Vec<u8>>) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (name, bytes) in files {
        let path = dir.join(name);
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}
