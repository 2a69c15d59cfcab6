// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use soln_compose::utils::logging::{format_info, format_success};
use soln_compose::{
    DocumentAssembler, ManifestExporter, MetadataOverrides, ProblemType, SolutionCollection,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "soln_compose")]
#[command(version = "0.1.0")]
#[command(about = "Build LaTeX solution manuals from trees of per-problem markdown files", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a collection to a LaTeX document
    Build {
        /// Path to the collection's meta.yml
        meta: PathBuf,

        /// Which solution files to render: "prob" or "ex"
        #[arg(short, long, default_value = "prob")]
        problem_type: String,

        /// Output .tex path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render without a bibliography even when the metadata declares one
        #[arg(long)]
        no_bib: bool,
    },

    /// Print a summary of a collection
    Info {
        /// Path to the collection's meta.yml
        meta: PathBuf,
    },

    /// Export a JSON manifest of the collection's metadata and files
    Export {
        /// Path to the collection's meta.yml
        meta: PathBuf,

        #[arg(short, long, default_value = "manifest.json")]
        output: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    soln_compose::utils::logging::init_logger(cli.color, cli.verbose);

    match cli.command {
        Commands::Build {
            meta,
            problem_type,
            output,
            no_bib,
        } => cmd_build(&meta, &problem_type, output.as_deref(), no_bib),
        Commands::Info { meta } => cmd_info(&meta),
        Commands::Export {
            meta,
            output,
            pretty,
        } => cmd_export(&meta, &output, pretty),
    }
}

fn cmd_build(
    meta: &std::path::Path,
    problem_type: &str,
    output: Option<&std::path::Path>,
    no_bib: bool,
) -> Result<()> {
    let problem_type: ProblemType = problem_type.parse()?;

    let mut collection =
        SolutionCollection::from_meta_file(meta).context("Failed to load collection")?;

    if no_bib {
        collection = collection.with_overrides(MetadataOverrides {
            references_file: Some(None),
            ..Default::default()
        });
    }

    info!(
        "Building {} document for {}",
        problem_type.label(),
        collection.meta().name
    );

    let assembler = DocumentAssembler::new();
    match output {
        Some(outfile) => {
            assembler
                .assemble_to_file(&collection, problem_type, outfile)
                .context("Document assembly failed")?;
            println!(
                "{}",
                format_success(&format!("Wrote {}", outfile.display()))
            );
        }
        None => {
            let rendered = assembler
                .assemble(&collection, problem_type)
                .context("Document assembly failed")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

fn cmd_info(meta: &std::path::Path) -> Result<()> {
    let collection =
        SolutionCollection::from_meta_file(meta).context("Failed to load collection")?;

    println!("{}", format_info(&collection.describe()?));
    println!("  Book: {} by {}", collection.meta().book, collection.meta().author);
    println!("  Category: {}", collection.meta().category);

    for problem_type in [ProblemType::Problem, ProblemType::Exercise] {
        let grouping = collection.files_for(problem_type)?;
        for (key, files) in grouping {
            println!(
                "  {} {}: {} {}(s)",
                collection.meta().section_prefix,
                key,
                files.len(),
                problem_type.label().to_lowercase()
            );
        }
    }

    Ok(())
}

fn cmd_export(meta: &std::path::Path, output: &std::path::Path, pretty: bool) -> Result<()> {
    let collection =
        SolutionCollection::from_meta_file(meta).context("Failed to load collection")?;

    ManifestExporter::write(&collection, output, pretty).context("Manifest export failed")?;
    println!(
        "{}",
        format_success(&format!("Exported {}", output.display()))
    );

    Ok(())
}
