//! Influencer Dashboard CLI — terminal front-end for the derived views
//!
//! Loads the roster CSV locally and prints the view bundle of a selection.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use influencer_dashboard::{compute_views, load_csv, Dataset, ViewBundle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "influencer-dashboard-cli", version, about = "Influencer Dashboard CLI")]
struct Cli {
    /// CSV file with the influencer roster
    #[arg(long, global = true, env = "DASHBOARD_DATA",
          default_value = influencer_dashboard::config::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable handles
    Handles,
    /// Show every view for one influencer
    Views {
        /// Handle to select (defaults to the first row)
        handle: Option<String>,
    },
    /// Report duplicate handles and mismatched brand/category lists
    Quality,
    /// Start an interactive selection loop
    Shell,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = load_csv(&cli.data)
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
        .and_then(|dataset| match cli.command {
            Commands::Handles => run_handles(&dataset, &cli.format),
            Commands::Views { handle } => run_views(&dataset, handle.as_deref(), &cli.format),
            Commands::Quality => run_quality(&dataset, &cli.format),
            Commands::Shell => run_shell(&dataset, &cli.format),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_handles(dataset: &Dataset, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let handles: Vec<_> = dataset.handles().collect();
            println!("{}", serde_json::to_string_pretty(&handles)?);
        }
        OutputFormat::Csv => {
            let rows = dataset.records().iter().map(|record| {
                vec![
                    record.handle.to_string(),
                    record.influencer_name.clone().unwrap_or_default(),
                    record.platform.clone().unwrap_or_default(),
                ]
            });
            print_csv(&["handle", "influencer_name", "platform"], rows);
        }
        OutputFormat::Table => {
            let mut table = new_table(&["#", "Handle", "Name", "Platform"]);
            for (row, record) in dataset.records().iter().enumerate() {
                table.add_row(vec![
                    (row + 1).to_string(),
                    record.handle.to_string(),
                    record.influencer_name.clone().unwrap_or_default(),
                    record.platform.clone().unwrap_or_default(),
                ]);
            }
            println!("{}", table);
            println!("{} influencer(s)", dataset.len());
        }
    }
    Ok(())
}

fn run_views(
    dataset: &Dataset,
    handle: Option<&str>,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = match handle {
        Some(handle) => handle,
        None => dataset
            .default_selection()
            .map(|handle| handle.as_str())
            .ok_or("dataset is empty")?,
    };

    let bundle = compute_views(dataset, handle)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bundle)?),
        OutputFormat::Table => print_bundle(&bundle),
        OutputFormat::Csv => print_bundle_csv(&bundle),
    }
    Ok(())
}

fn run_quality(dataset: &Dataset, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let report = dataset.data_quality();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => {
            let duplicates = report.duplicate_handles.iter().map(|handle| {
                vec![
                    handle.to_string(),
                    "duplicate_handle".to_string(),
                    String::new(),
                    String::new(),
                ]
            });
            let degraded = report.degraded.iter().map(|degraded| {
                vec![
                    degraded.handle.to_string(),
                    "token_count_mismatch".to_string(),
                    degraded.brand_tokens.to_string(),
                    degraded.category_tokens.to_string(),
                ]
            });
            print_csv(
                &["handle", "issue", "brand_tokens", "category_tokens"],
                duplicates.chain(degraded),
            );
        }
        OutputFormat::Table => {
            println!("Records:    {}", report.records);
            println!(
                "Duplicates: {}",
                report
                    .duplicate_handles
                    .iter()
                    .map(|h| h.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            if !report.degraded.is_empty() {
                let mut table = new_table(&["Handle", "Brands", "Categories"]);
                for degraded in &report.degraded {
                    table.add_row(vec![
                        degraded.handle.to_string(),
                        degraded.brand_tokens.to_string(),
                        degraded.category_tokens.to_string(),
                    ]);
                }
                println!("{}", table);
            }
            println!("{} degraded record(s)", report.degraded.len());
        }
    }
    Ok(())
}

fn run_shell(dataset: &Dataset, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    println!("Influencer Dashboard Shell");
    println!("Type a handle to select it, or :help for commands. :quit to exit.\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("dashboard> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :handles  — List handles");
                println!("  :quality  — Show data-quality report");
                println!("  :quit     — Exit shell");
                println!("  <handle>  — Show views for an influencer");
            }
            ":handles" => {
                if let Err(e) = run_handles(dataset, format) {
                    eprintln!("Error: {}", e);
                }
            }
            ":quality" => {
                if let Err(e) = run_quality(dataset, format) {
                    eprintln!("Error: {}", e);
                }
            }
            handle => {
                if let Err(e) = run_views(dataset, Some(handle), format) {
                    eprintln!("Error: {}", e);
                }
            }
        }
    }

    println!("Bye!");
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn print_bundle(bundle: &ViewBundle) {
    let kpis = &bundle.kpis;
    let mut table = new_table(&["Event Count", "Unique Users", "Total Brand Collabs"]);
    table.add_row(vec![
        kpis.event_count.to_string(),
        kpis.unique_user_count.to_string(),
        kpis.total_brand_collabs.to_string(),
    ]);
    println!("{}", table);

    println!("\nBrand Collaborations");
    let mut table = new_table(&["Brand", "Category"]);
    for collab in &bundle.collaborations {
        table.add_row(vec![collab.brand.clone(), collab.category.clone()]);
    }
    println!("{}", table);

    println!("\nCategory Breakdown");
    let mut table = new_table(&["Category", "Count"]);
    for (category, count) in bundle.category_counts.iter() {
        table.add_row(vec![category.to_string(), count.to_string()]);
    }
    println!("{}", table);

    println!("\nBrand Collaborations Treemap");
    let mut table = new_table(&["Category", "Brand", "Weight"]);
    for leaf in bundle.hierarchy.leaves() {
        table.add_row(vec![
            leaf.category.to_string(),
            leaf.brand.to_string(),
            leaf.weight.to_string(),
        ]);
    }
    println!("{}", table);

    println!("\nEvent Count vs Unique Users");
    let projection = &bundle.global_projection;
    let mut table = new_table(&["", "Handle", "Event Count", "Unique Users"]);
    for point in projection.points.iter() {
        let marker = if projection.is_highlighted(point) { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            point.handle.to_string(),
            point.event_count.to_string(),
            point.unique_user_count.to_string(),
        ]);
    }
    println!("{}", table);
}

/// One CSV block per view, separated by blank lines
fn print_bundle_csv(bundle: &ViewBundle) {
    let kpis = &bundle.kpis;
    print_csv(
        &["event_count", "unique_user_count", "total_brand_collabs"],
        std::iter::once(vec![
            kpis.event_count.to_string(),
            kpis.unique_user_count.to_string(),
            kpis.total_brand_collabs.to_string(),
        ]),
    );

    println!();
    print_csv(
        &["brand", "category"],
        bundle
            .collaborations
            .iter()
            .map(|collab| vec![collab.brand.clone(), collab.category.clone()]),
    );

    println!();
    print_csv(
        &["category", "count"],
        bundle
            .category_counts
            .iter()
            .map(|(category, count)| vec![category.to_string(), count.to_string()]),
    );

    println!();
    print_csv(
        &["category", "brand", "weight"],
        bundle.hierarchy.leaves().map(|leaf| {
            vec![
                leaf.category.to_string(),
                leaf.brand.to_string(),
                leaf.weight.to_string(),
            ]
        }),
    );

    println!();
    let projection = &bundle.global_projection;
    print_csv(
        &["handle", "event_count", "unique_user_count", "highlighted"],
        projection.points.iter().map(|point| {
            vec![
                point.handle.to_string(),
                point.event_count.to_string(),
                point.unique_user_count.to_string(),
                projection.is_highlighted(point).to_string(),
            ]
        }),
    );
}

fn print_csv(header: &[&str], rows: impl Iterator<Item = Vec<String>>) {
    println!("{}", header.join(","));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| format_csv_value(cell)).collect();
        println!("{}", cells.join(","));
    }
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
