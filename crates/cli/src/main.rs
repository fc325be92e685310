use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use enroll_gate_core::detection::infrastructure::replay_detection_source::ReplayDetectionSource;
use enroll_gate_core::session::capture_session::{CaptureSession, EvaluatedSample};
use enroll_gate_core::session::session_config::SessionConfig;
use enroll_gate_core::session::session_logger::SummarySessionLogger;
use enroll_gate_core::trace::capture_trace::CaptureTrace;
use enroll_gate_core::trace::trace_frame_source::TraceFrameSource;

/// Replays a recorded enrollment capture through the frame quality gate.
#[derive(Parser)]
#[command(name = "enroll-gate")]
struct Cli {
    /// Capture trace (JSON) to replay.
    trace: PathBuf,

    /// Session config file (JSON). Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mean luma (0-255) at or below which a frame is too dark.
    #[arg(long)]
    dark_threshold: Option<f64>,

    /// Smallest accepted face-to-frame size ratio.
    #[arg(long)]
    min_size_ratio: Option<f64>,

    /// Size ratio at or above which a face is rejected as too far.
    #[arg(long)]
    max_size_ratio: Option<f64>,

    /// Centering tolerance as a fraction of the shorter frame side.
    #[arg(long)]
    centering_factor: Option<f64>,

    /// Minimum detection confidence, in percent (0-100).
    #[arg(long)]
    confidence: Option<u32>,

    /// Milliseconds between evaluated samples.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print one JSON object per evaluated sample.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let trace = CaptureTrace::load(&cli.trace)?;
    log::info!(
        "Replaying {} frames from {}",
        trace.frames.len(),
        cli.trace.display()
    );

    let detector = ReplayDetectionSource::new(Arc::new(trace.detections_by_timestamp()));
    let mut session = CaptureSession::new(
        Box::new(TraceFrameSource::new(&trace)),
        Box::new(detector),
        &config,
        Box::new(SummarySessionLogger::new()),
    );

    let json = cli.json;
    let mut write_error = None;
    let summary = session.run(|sample| match print_sample(sample, json) {
        Ok(()) => true,
        Err(e) => {
            write_error = Some(e);
            false
        }
    })?;
    if let Some(e) = write_error {
        return Err(e);
    }

    if !json {
        println!(
            "{} frames, {} evaluated, {} accepted, {} repeated frames skipped",
            summary.frames_seen, summary.evaluations, summary.accepted, summary.duplicate_frames
        );
    }
    Ok(())
}

fn print_sample(sample: &EvaluatedSample, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(sample)?);
    } else {
        println!(
            "{:>8}ms  {:<32} {}",
            sample.timestamp_ms,
            sample.verdict.to_string(),
            sample.instruction
        );
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<SessionConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    let thresholds = &mut config.thresholds;
    if let Some(v) = cli.dark_threshold {
        thresholds.dark_threshold = v;
    }
    if let Some(v) = cli.min_size_ratio {
        thresholds.min_size_ratio = v;
    }
    if let Some(v) = cli.max_size_ratio {
        thresholds.max_size_ratio = v;
    }
    if let Some(v) = cli.centering_factor {
        thresholds.centering_factor = v;
    }
    if let Some(v) = cli.confidence {
        thresholds.confidence_threshold = v;
    }
    if let Some(v) = cli.interval_ms {
        config.sampling_interval_ms = v;
    }

    config.validate()?;
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.trace.exists() {
        return Err(format!("Trace file not found: {}", cli.trace.display()).into());
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(format!("Config file not found: {}", path.display()).into());
        }
    }
    Ok(())
}
