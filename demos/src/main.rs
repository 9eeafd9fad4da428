//! rackpath — route across a warehouse floor plan.
//!
//! Loads a JSON [`FloorPlan`], visits its waypoints (plus any given on the
//! command line) between start and goal, and prints the path as JSON.
//!
//! ```text
//! rackpath demos/warehouse.json --waypoint 4,7
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use rackpath_core::{Cell, FloorPlan};
use rackpath_paths::{MultiTargetRouter, RouteError};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Default, PartialEq)]
struct Args {
    plan_path: Option<String>,
    start: Option<Cell>,
    goal: Option<Cell>,
    waypoints: Vec<Cell>,
    help: bool,
}

fn parse_cell(s: &str) -> Result<Cell> {
    let Some((row, col)) = s.split_once(',') else {
        bail!("expected ROW,COL, got {s:?}");
    };
    let row: i32 = row.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    let col: i32 = col.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    Ok(Cell::new(row, col))
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--start" | "-s" | "--goal" | "-g" | "--waypoint" | "-w" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("{} needs a ROW,COL value", args[i]);
                };
                let cell = parse_cell(value)?;
                match args[i].as_str() {
                    "--start" | "-s" => result.start = Some(cell),
                    "--goal" | "-g" => result.goal = Some(cell),
                    _ => result.waypoints.push(cell),
                }
                i += 1;
            }
            "--help" | "-h" => result.help = true,
            other if !other.starts_with('-') && result.plan_path.is_none() => {
                result.plan_path = Some(other.to_string());
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    Ok(result)
}

fn print_help() {
    println!("rackpath - shortest routes across a warehouse floor");
    println!();
    println!("USAGE:");
    println!("    rackpath [OPTIONS] [PLAN.json]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --start <ROW,COL>      Override the plan's start cell");
    println!("    -g, --goal <ROW,COL>       Override the plan's goal cell");
    println!("    -w, --waypoint <ROW,COL>   Add a waypoint (repeatable)");
    println!("    -h, --help                 Print help information");
    println!();
    println!("Without PLAN.json an empty 20x20 floor is used.");
    println!("Set RUST_LOG=debug to see the chosen stop order.");
}

// ============================================================================
// Plan loading
// ============================================================================

fn load_plan(args: &Args) -> Result<FloorPlan> {
    let mut plan = match &args.plan_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read floor plan {path}"))?;
            let plan: FloorPlan = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse floor plan {path}"))?;
            log::info!("Loaded floor plan from {path}");
            plan
        }
        None => {
            log::info!("No floor plan given, using an empty floor");
            FloorPlan::default()
        }
    };

    if let Some(start) = args.start {
        plan.start = Some(start);
    }
    if let Some(goal) = args.goal {
        plan.goal = Some(goal);
    }
    plan.waypoints.extend(args.waypoints.iter().copied());
    Ok(plan)
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn run(args: &Args) -> Result<ExitCode> {
    let plan = load_plan(args)?;
    let floor = plan.to_floor().context("invalid floor plan")?;

    let mut router = MultiTargetRouter::new();
    match router.route_floor(&floor, &plan.waypoints) {
        Ok(path) => {
            log::info!(
                "Route found: {} steps through {} waypoints",
                path.steps(),
                plan.waypoints.len()
            );
            let body = serde_json::json!({ "path": path });
            let mut out = std::io::stdout().lock();
            serde_json::to_writer(&mut out, &body)?;
            writeln!(out)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ RouteError::NoPathFound { .. }) => {
            log::warn!("{e}");
            println!("No path found");
            Ok(ExitCode::FAILURE)
        }
        Err(e @ RouteError::InvalidRequest(_)) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e:#}");
            print_help();
            return ExitCode::from(2);
        }
    };
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
