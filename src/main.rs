use nbsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "orbital.yaml")]
    file_name: String,

    /// How long to run, in wall-clock seconds
    #[arg(short, default_value_t = 10.0)]
    duration: f64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Headless driver: rendering is an external collaborator, so this binary
/// just feeds real frame times into the fixed-step loop and reports
/// throughput. A frontend would call `Scenario::advance` the same way once
/// per frame and draw `scenario.system()` afterwards.
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    log::info!(
        "running {} bodies for {:.1}s of wall time",
        scenario.system.bodies.len(),
        args.duration
    );

    let start = Instant::now();
    let mut last_frame = start;
    let mut last_report = start;
    let mut ticks_since_report: u64 = 0;
    let mut total_ticks: u64 = 0;

    while start.elapsed().as_secs_f64() < args.duration {
        // Emulate a ~120 Hz frame boundary
        std::thread::sleep(Duration::from_micros(8_333));

        let now = Instant::now();
        let frame_dt = (now - last_frame).as_secs_f64();
        last_frame = now;

        let ticks = u64::from(scenario.advance(frame_dt));
        ticks_since_report += ticks;
        total_ticks += ticks;

        if now - last_report >= Duration::from_secs(1) {
            log::info!(
                "t = {:.2}, {} ticks in the last second",
                scenario.system.t,
                ticks_since_report
            );
            ticks_since_report = 0;
            last_report = now;
        }
    }

    log::info!(
        "done: {} ticks, simulated t = {:.2}",
        total_ticks,
        scenario.system.t
    );

    Ok(())
}
