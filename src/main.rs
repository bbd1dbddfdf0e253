use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use stepview::app::App;
use stepview::config::Config;
use stepview::logging;
use stepview::stepper::{facet_row, NavButtons, StepFacets, StepperOptions};
use stepview::ui::terminal_guard::install_panic_hook;

#[derive(Parser)]
#[command(name = "stepview")]
#[command(about = "Terminal wizard with a step progress indicator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the step facets and button row for a stepper state
    Facets {
        /// Number of steps
        #[arg(short, long)]
        steps: usize,

        /// Active step (0-based)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        active: i64,

        /// Mark every step completed
        #[arg(long)]
        all_completed: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate the configured stepper
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Facets {
            steps,
            active,
            all_completed,
            json,
        }) => {
            cmd_facets(steps, active, all_completed, json)?;
        }
        Some(Commands::Check) => {
            cmd_check(&config)?;
        }
        None => {
            run_tui(config, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    install_panic_hook();

    let mut app = App::new(config)?;
    let result = app.run().await;

    logging::report_log_file(log_file_path.as_deref());

    let outcome = result?;
    if outcome.submitted {
        println!("Submitted.");
        for (label, value) in &outcome.values {
            println!("  {label}: {value}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct FacetReport {
    active_step: usize,
    steps: Vec<StepFacets>,
    buttons: NavButtons,
}

fn cmd_facets(steps: usize, active: i64, all_completed: bool, json: bool) -> Result<()> {
    let options = StepperOptions::new(steps)
        .active_step(active)
        .all_completed(all_completed);
    let active = options.validate()?;

    let report = FacetReport {
        active_step: active,
        steps: facet_row(active, all_completed, steps),
        buttons: NavButtons::select(active, steps, options.button_flags()),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize facets")?;
        println!("{out}");
        return Ok(());
    }

    println!("{:<6} {:<6} {:<6} {:<7} {:<10}", "STEP", "FIRST", "LAST", "ACTIVE", "COMPLETED");
    for (i, f) in report.steps.iter().enumerate() {
        println!(
            "{:<6} {:<6} {:<6} {:<7} {:<10}",
            i, f.is_first, f.is_last, f.is_active, f.is_completed
        );
    }
    println!();
    println!(
        "Buttons: {} | {}",
        report.buttons.left.kind, report.buttons.right.kind
    );
    Ok(())
}

fn cmd_check(config: &Config) -> Result<()> {
    let steps = config.effective_steps();
    let options = config.stepper_options();
    let active = options.validate().context("Invalid stepper configuration")?;

    println!("Stepper configuration OK");
    println!("  Steps:        {}", options.number_of_steps);
    println!("  Active step:  {active}");
    println!("  Buttons:      {}", if options.show_buttons { "shown" } else { "hidden" });
    println!("  All complete: {}", options.all_completed);
    for (i, step) in steps.iter().enumerate() {
        let input = if step.input { " (input)" } else { "" };
        println!("  {:>2}. {}{}", i + 1, step.label, input);
    }
    if steps.len() != options.number_of_steps {
        println!(
            "  Note: {} steps described, {} configured",
            steps.len(),
            options.number_of_steps
        );
    }
    Ok(())
}
