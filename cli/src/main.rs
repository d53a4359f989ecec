//! samplepdf CLI - fixture PDF generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use samplepdf::fixtures::{self, DEFAULT_OUTPUT_DIR};
use samplepdf::{
    render_file_with_options, Document, Fixture, GenerateOptions, GeneratedFile, PageSize, PdfInfo,
    RenderOptions,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "samplepdf")]
#[command(version)]
#[command(about = "Generate paginated Portuguese fixture PDFs for retrieval demos", long_about = None)]
struct Cli {
    /// Output directory for the fixtures
    #[arg(value_name = "OUTPUT", env = "SAMPLEPDF_OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixture PDFs
    #[command(alias = "gen")]
    Generate {
        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "SAMPLEPDF_OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// Only generate these fixtures (name or file name)
        #[arg(long, value_name = "NAME", num_args = 1..)]
        only: Vec<String>,

        /// Render one fixture at a time
        #[arg(long)]
        sequential: bool,

        /// Write uncompressed content streams
        #[arg(long)]
        uncompressed: bool,
    },

    /// Render a JSON block list to a PDF
    Render {
        /// JSON file with a block array or a full document
        #[arg(value_name = "BLOCKS")]
        input: PathBuf,

        /// Output PDF (defaults to the input name with a .pdf extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page size: letter, legal, a4 or WIDTHxHEIGHT in points
        #[arg(long, value_name = "SIZE")]
        page_size: Option<String>,

        /// Document title for the info dictionary
        #[arg(long)]
        title: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        uncompressed: bool,
    },

    /// Show page count, metadata and word count of a PDF
    Info {
        /// PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also print the extracted text
        #[arg(long, conflicts_with = "json")]
        text: bool,
    },

    /// List the built-in fixtures
    List,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            output,
            only,
            sequential,
            uncompressed,
        }) => cmd_generate(output.as_deref(), &only, sequential, uncompressed),
        Some(Commands::Render {
            input,
            output,
            page_size,
            title,
            uncompressed,
        }) => cmd_render(
            &input,
            output.as_deref(),
            page_size.as_deref(),
            title,
            uncompressed,
        ),
        Some(Commands::Info { input, json, text }) => cmd_info(&input, json, text),
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Default behavior: generate everything
        None => cmd_generate(cli.output.as_deref(), &[], false, false),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    output: Option<&Path>,
    only: &[String],
    sequential: bool,
    uncompressed: bool,
) -> CliResult {
    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let selected = if only.is_empty() {
        Fixture::ALL.to_vec()
    } else {
        only.iter()
            .map(|name| name.parse::<Fixture>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut options = GenerateOptions::new()
        .with_fixtures(selected)
        .with_render_options(RenderOptions::new().with_compression(!uncompressed));
    if sequential {
        options = options.sequential();
    }

    println!(
        "{} {} PDF(s) in {}",
        "Generating".cyan().bold(),
        options.fixtures.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Laying out and writing pages...");
    pb.enable_steady_tick(std::time::Duration::from_millis(80));

    log::debug!("fixtures: {:?}", options.fixtures);
    let files = fixtures::generate(&output_dir, &options);
    pb.finish_and_clear();
    let files = files?;

    for file in &files {
        print_generated(file);
    }

    let pages: usize = files.iter().map(|f| f.pages).sum();
    println!(
        "\n{} {} PDF(s), {} pages, in {}",
        "Done!".green().bold(),
        files.len(),
        pages,
        output_dir.display()
    );

    Ok(())
}

fn print_generated(file: &GeneratedFile) {
    let name = file
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "  {} {} {}",
        "✓".green(),
        name.bold(),
        format!(
            "({} pages, {:.1} KB) {}",
            file.pages,
            file.bytes as f64 / 1024.0,
            file.fixture.description()
        )
        .dimmed()
    );
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    page_size: Option<&str>,
    title: Option<String>,
    uncompressed: bool,
) -> CliResult {
    let json = fs::read_to_string(input)?;
    let mut doc = Document::from_json(&json)?;
    log::debug!("loaded {} block(s) from {}", doc.blocks.len(), input.display());

    if let Some(size) = page_size {
        doc.page_setup = doc.page_setup.with_size(size.parse::<PageSize>()?);
    }
    if let Some(title) = title {
        doc.metadata.title = Some(title);
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("pdf"));
    let options = RenderOptions::new().with_compression(!uncompressed);

    let path = render_file_with_options(&doc, &output, &options)?;
    let info = PdfInfo::load(&path)?;

    println!(
        "{} {} ({} pages)",
        "Saved to".green(),
        path.display(),
        info.page_count
    );

    Ok(())
}

fn cmd_info(input: &Path, json: bool, text: bool) -> CliResult {
    let info = PdfInfo::load(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.version);
    println!("{}: {}", "Pages".bold(), info.page_count);

    let fields = [
        ("Title", &info.title),
        ("Subject", &info.subject),
        ("Author", &info.author),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label.bold(), value);
        }
    }

    if let Some(first) = info.pages.first() {
        println!(
            "{}: {:.0} x {:.0} pt",
            "Page size".bold(),
            first.width,
            first.height
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let plain = info.plain_text();
    println!("{}: {}", "Words".bold(), info.word_count());
    println!("{}: {}", "Characters".bold(), plain.chars().count());
    for page in &info.pages {
        println!(
            "  {} page {}: {} lines",
            "├─".dimmed(),
            page.number,
            page.lines.len()
        );
    }

    if text {
        println!();
        println!("{}", plain);
    }

    Ok(())
}

fn cmd_list() {
    println!("{}", "Fixtures".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for fixture in Fixture::ALL {
        println!(
            "  {:<12} {:<24} {}",
            fixture.name().bold(),
            fixture.file_name(),
            fixture.description().dimmed()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "samplepdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Paginated fixture PDF generator");
    println!();
    println!("Producer: {}", samplepdf::render::PRODUCER.dimmed());
    println!("License: MIT");
}
