use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use menu_harmonizer::models::analysis::MAX_MENU_TEXT_CHARS;
use menu_harmonizer::models::preference::{AllergySet, Preference};
use menu_harmonizer::services::analysis::analyze_menu;

/// Recommend an entree, main course and beverage from a menu text file.
#[derive(Parser)]
#[command(name = "harmonize", version)]
#[command(about = "Menu harmonization from recognized menu text", long_about = None)]
struct Cli {
    /// Menu text file, one item per line ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Food preference (seafood/land/vegetarian/balanced, or the Portuguese tags)
    #[arg(short, long, default_value = "balanced")]
    preference: Preference,

    /// Declared allergy; repeat for several (shellfish, nuts, dairy, gluten, eggs, soy, fish)
    #[arg(short, long = "allergy")]
    allergies: Vec<String>,

    /// Brazilian state code for regional adjustment (e.g. SP, RJ)
    #[arg(short, long)]
    region: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = match read_input(&cli.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    if text.chars().count() > MAX_MENU_TEXT_CHARS {
        eprintln!("Menu text exceeds {MAX_MENU_TEXT_CHARS} characters");
        return ExitCode::FAILURE;
    }

    let allergies = AllergySet::from_tags(&cli.allergies);
    let analysis = analyze_menu(&text, cli.preference, &allergies, cli.region.as_deref());

    for warning in &analysis.warnings {
        tracing::warn!("{warning}");
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&analysis)
    } else {
        serde_json::to_string(&analysis)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize analysis: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: &PathBuf) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}
