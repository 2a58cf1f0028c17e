//! Command-line front end: plan one trip and print it as JSON.

use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

use hos_trip_planner::{PlannerSettings, ProviderConfig, TripPlanner, TripRequest};

#[derive(Debug, Parser)]
#[command(name = "plan-trip", about = "Plan a truck trip with fuel stops and duty logs")]
struct Args {
    /// Where the driver is now.
    #[arg(long)]
    current: String,

    #[arg(long)]
    pickup: String,

    #[arg(long)]
    dropoff: String,

    /// Hours already used in the current 70-hour/8-day cycle.
    #[arg(long, default_value_t = 0.0)]
    cycle_used_hours: f64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let request = TripRequest::new(args.current, args.pickup, args.dropoff, args.cycle_used_hours);

    let planner = match TripPlanner::from_config(&ProviderConfig::from_env(), PlannerSettings::default()) {
        Ok(planner) => planner,
        Err(err) => {
            error!(error = %err, "could not start planner");
            return ExitCode::FAILURE;
        }
    };

    let plan = match planner.plan(&request) {
        Ok(plan) => plan,
        Err(err) => {
            error!(error = %err, "trip planning error");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&plan)
    } else {
        serde_json::to_string(&plan)
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "could not serialize trip plan");
            ExitCode::FAILURE
        }
    }
}
