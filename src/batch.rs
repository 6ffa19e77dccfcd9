//! Batch driver: renders and exports every profile in a table.
//!
//! Profiles are independent. A failure in one is recorded and the rest still
//! run; the caller decides what a partial failure means.

use crate::constants::{CHANNELS, OUTPUT_SUFFIX, SAMPLE_RATE};
use crate::error::{ProfileError, Stage};
use crate::export::export_wav;
use crate::profiles::NamedProfile;
use std::path::{Path, PathBuf};

/// Path of the WAV file for profile `name` inside `dir`.
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{OUTPUT_SUFFIX}"))
}

/// A successfully exported alarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Exported {
    pub profile: String,
    pub path: PathBuf,
    pub frames: usize,
    pub duration_ms: f64,
}

/// Outcome of a batch run, in table order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub exported: Vec<Exported>,
    pub failures: Vec<ProfileError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders one profile and writes it to `out_dir`.
pub fn export_profile(profile: &NamedProfile, out_dir: &Path) -> Result<Exported, ProfileError> {
    let span = tracing::info_span!("profile", name = profile.name);
    let _enter = span.enter();

    let alarm = profile.render(SAMPLE_RATE)?;
    let path = output_path(out_dir, profile.name);
    export_wav(&alarm, &path, CHANNELS)
        .map_err(|e| ProfileError::new(profile.name, Stage::Export, e))?;

    tracing::info!(
        path = %path.display(),
        duration_ms = alarm.duration_ms(),
        "exported alarm"
    );
    Ok(Exported {
        profile: profile.name.to_string(),
        path,
        frames: alarm.frames(),
        duration_ms: alarm.duration_ms(),
    })
}

/// Exports every profile in `profiles` to `out_dir`, continuing past
/// failures.
pub fn generate_all(profiles: &[NamedProfile], out_dir: &Path) -> BatchReport {
    let results = run(profiles, out_dir);

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(exported) => report.exported.push(exported),
            Err(err) => {
                tracing::error!(profile = %err.profile, stage = %err.stage, "{err}");
                report.failures.push(err);
            }
        }
    }
    report
}

#[cfg(feature = "parallel")]
fn run(profiles: &[NamedProfile], out_dir: &Path) -> Vec<Result<Exported, ProfileError>> {
    use rayon::prelude::*;

    profiles
        .par_iter()
        .map(|profile| export_profile(profile, out_dir))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run(profiles: &[NamedProfile], out_dir: &Path) -> Vec<Result<Exported, ProfileError>> {
    profiles
        .iter()
        .map(|profile| export_profile(profile, out_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{ALARM_PROFILES, AlarmProfile};

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), "critical");
        assert_eq!(path, Path::new("out").join("critical_alert.wav"));
    }

    #[test]
    fn test_generate_all_writes_every_profile() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate_all(ALARM_PROFILES, dir.path());
        assert!(report.is_success());
        assert_eq!(report.exported.len(), ALARM_PROFILES.len());
        for (exported, profile) in report.exported.iter().zip(ALARM_PROFILES) {
            assert_eq!(exported.profile, profile.name);
            assert!(exported.path.exists());
        }
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = [
            NamedProfile {
                name: "bad",
                profile: AlarmProfile {
                    loop_count: 0,
                    ..ALARM_PROFILES[0].profile
                },
            },
            ALARM_PROFILES[0],
        ];
        let report = generate_all(&profiles, dir.path());
        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].profile, "bad");
        assert_eq!(report.exported.len(), 1);
        assert!(output_path(dir.path(), "critical").exists());
        assert!(!output_path(dir.path(), "bad").exists());
    }
}
