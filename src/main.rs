//! Command-line entry point: writes one `<name>_alert.wav` per built-in
//! profile.

use alarm_tones::{ALARM_PROFILES, NamedProfile, find_profile, generate_all};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "alarm-tones", version, about = "Generate alarm-tone WAV files")]
struct Args {
    /// Directory to write WAV files into (created if missing)
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Only generate the named profile (repeatable)
    #[arg(short, long = "profile", value_name = "NAME")]
    profiles: Vec<String>,

    /// Print the profile table and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn select_profiles(names: &[String]) -> Result<Vec<NamedProfile>> {
    if names.is_empty() {
        return Ok(ALARM_PROFILES.to_vec());
    }
    names
        .iter()
        .map(|name| match find_profile(name) {
            Some(profile) => Ok(*profile),
            None => {
                let known: Vec<_> = ALARM_PROFILES.iter().map(|p| p.name).collect();
                bail!("unknown profile '{name}' (known: {})", known.join(", "))
            }
        })
        .collect()
}

fn print_table() {
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>10} {:>6}",
        "name", "base Hz", "overlay", "dur ms", "xfade ms", "loops"
    );
    for NamedProfile { name, profile } in ALARM_PROFILES {
        println!(
            "{:<10} {:>8} {:>8} {:>8} {:>10} {:>6}",
            name,
            profile.base_freq,
            profile.overlay_freq,
            profile.duration_ms,
            profile.crossfade_ms,
            profile.loop_count
        );
    }
}

/// Writes the selected profiles into `out_dir`. Returns whether every
/// export succeeded.
fn export(profiles: &[NamedProfile], out_dir: &Path) -> Result<bool> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let report = generate_all(profiles, out_dir);
    for failure in &report.failures {
        eprintln!("error: {failure}");
    }
    tracing::info!(
        exported = report.exported.len(),
        failed = report.failures.len(),
        "batch finished"
    );
    Ok(report.is_success())
}

fn run(args: Args) -> Result<bool> {
    if args.list {
        print_table();
        return Ok(true);
    }

    let profiles = select_profiles(&args.profiles)?;
    export(&profiles, &args.out_dir)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
