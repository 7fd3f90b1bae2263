//! CSV Sorter CLI - list active patrons grouped by tier
//!
//! # Commands
//!
//! ```bash
//! csv-sorter sort patrons.csv        # Write patrons_sort.txt next to the input
//! csv-sorter preview patrons.csv     # Print the report instead of writing it
//! csv-sorter list                    # Show CSV files in the current directory
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! csv-sorter parse patrons.csv       # Dump the parsed table as JSON
//! ```

use clap::{Parser, Subcommand};
use csv_sorter::{
    config::default_search_dir, generate_with, list_csv_files, parse_csv_file, render_report,
    ReportOptions,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "csv-sorter")]
#[command(about = "List active patrons from a CSV export, grouped by tier", long_about = None)]
struct Cli {
    /// Don't print progress messages
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the tier report next to the CSV file
    Sort {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: <input>_sort.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the tier report without writing any file
    Preview {
        /// Input CSV file
        input: PathBuf,

        /// Print the grouped report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a CSV file and output the table as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List CSV files in a directory
    List {
        /// Directory to scan (default: $CSV_SORTER_DIR or the current directory)
        dir: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    csv_sorter::logs::set_echo(!cli.quiet);

    let result = match cli.command {
        Commands::Sort {
            input,
            output,
            dry_run,
        } => cmd_sort(&input, ReportOptions { output_path: output, dry_run }),

        Commands::Preview { input, json } => cmd_preview(&input, json),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::List { dir } => cmd_list(dir),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_sort(input: &Path, options: ReportOptions) -> Result<(), Box<dyn std::error::Error>> {
    let result = generate_with(input, &options)?;

    if !result.written {
        print!("{}", result.report.text);
        return Ok(());
    }

    let file_name = result
        .output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.output_path.display().to_string());
    println!("'Name' column exported as {}.", file_name);

    Ok(())
}

fn cmd_preview(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = render_report(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.text);
    }

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let table = parse_csv_file(input)?;
    eprintln!("   Columns: {}", table.headers.join(", "));
    eprintln!("✅ Parsed {} rows", table.row_count());

    let json = serde_json::to_string_pretty(&table)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_list(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match dir {
        Some(d) => d,
        None => default_search_dir()?,
    };

    let files = list_csv_files(&dir)
        .map_err(|e| format!("Cannot list '{}': {}", dir.display(), e))?;

    if files.is_empty() {
        eprintln!("📋 No CSV files in {}", dir.display());
        return Ok(());
    }

    eprintln!("📋 CSV files in {} ({}):", dir.display(), files.len());
    for file in files {
        println!("{}", file.display());
    }

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_defaults() {
        let cli = Cli::try_parse_from(["csv-sorter", "sort", "patrons.csv"]).unwrap();

        assert!(!cli.quiet);
        match cli.command {
            Commands::Sort { input, output, dry_run } => {
                assert_eq!(input, PathBuf::from("patrons.csv"));
                assert!(output.is_none());
                assert!(!dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_sort_with_options() {
        let cli = Cli::try_parse_from([
            "csv-sorter", "sort", "patrons.csv", "-o", "tiers.txt", "--dry-run", "-q",
        ])
        .unwrap();

        assert!(cli.quiet);
        match cli.command {
            Commands::Sort { output, dry_run, .. } => {
                assert_eq!(output, Some(PathBuf::from("tiers.txt")));
                assert!(dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_list_without_dir() {
        let cli = Cli::try_parse_from(["csv-sorter", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { dir: None }));
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["csv-sorter", "sort"]).is_err());
        assert!(Cli::try_parse_from(["csv-sorter", "preview"]).is_err());
    }
}
