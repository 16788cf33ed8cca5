use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;

use crate::core::BundleAnalyzer;
use crate::formatters::{CsvReportFormatter, JsonReportFormatter, ListFormatter, MarkdownFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "iconsift",
    version = "0.1.0",
    author = "iconsift developers",
    about = "Extract usable Font Awesome icon classes from a local CSS bundle"
)]
struct Cli {
    /// Path to fontawesome-all.min.css
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "assets/css/fontawesome-all.min.css"
    )]
    css: PathBuf,

    /// Primary output list file (all base icons)
    #[arg(short, long, value_name = "FILE", default_value = "icon_list.txt")]
    out: PathBuf,

    /// Brands-only output list file
    #[arg(long, value_name = "FILE", default_value = "brands_list.txt")]
    brands_out: PathBuf,

    /// Non-brands (solid/regular) output list file
    #[arg(long, value_name = "FILE", default_value = "solids_list.txt")]
    solids_out: PathBuf,

    /// Optional markdown table output file
    #[arg(long, value_name = "FILE")]
    markdown: Option<PathBuf>,

    /// Optional JSON report output file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Optional CSV report output file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        css,
        out,
        brands_out,
        solids_out,
        markdown,
        json,
        csv,
    } = cli;

    let start_time = Instant::now();

    println!("ICONSIFT - Font Awesome bundle inventory");
    println!("Input: {}", css.display());

    let analyzer = BundleAnalyzer::new();
    let inventory = analyzer.analyze(&css)?;

    let list = ListFormatter::new();
    list.format_to_file(&inventory.icons, &out)?;
    list.format_to_file(&inventory.brands, &brands_out)?;
    list.format_to_file(&inventory.non_brands, &solids_out)?;

    println!("Total icons: {}", inventory.total());
    println!(
        "Brands: {} | Non-brands: {}",
        inventory.brand_count(),
        inventory.non_brand_count()
    );
    println!(
        "Wrote: {}, {}, {}",
        out.display(),
        brands_out.display(),
        solids_out.display()
    );

    if let Some(markdown_path) = markdown {
        MarkdownFormatter::new().format_to_file(&inventory.icons, &markdown_path)?;
        println!("Wrote markdown table: {}", markdown_path.display());
    }

    if let Some(json_path) = json {
        JsonReportFormatter::new().format_to_file(&inventory, &json_path)?;
        println!("Wrote JSON: {}", json_path.display());
    }

    if let Some(csv_path) = csv {
        CsvReportFormatter::new().format_to_file(&inventory, &csv_path)?;
        println!("Wrote CSV: {}", csv_path.display());
    }

    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
