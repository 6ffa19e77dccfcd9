use alarm_tones::{
    ALARM_PROFILES, AlarmProfile, NamedProfile, Stage, ToneError, find_profile, generate_all,
    ms_to_samples, output_path,
};
use hound::{SampleFormat, WavReader};

const RATE: u32 = 44100;

fn read_samples(path: &std::path::Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

fn rms(samples: &[i16]) -> f64 {
    let sum: f64 = samples.iter().map(|&s| (s as f64).powi(2)).sum();
    (sum / samples.len() as f64).sqrt()
}

#[test]
fn test_critical_alert_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let critical = *find_profile("critical").unwrap();
    let report = generate_all(&[critical], dir.path());
    assert!(report.is_success());

    let path = output_path(dir.path(), "critical");
    assert!(path.ends_with("critical_alert.wav"));
    let (spec, samples) = read_samples(&path);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);

    // Each loop is an 800 ms beep followed by the 800 ms silent overlay
    let tone = ms_to_samples(800, RATE);
    let segment = 2 * tone;
    assert_eq!(samples.len(), 3 * segment);
    let duration_ms = samples.len() as f64 * 1000.0 / RATE as f64;
    assert!((duration_ms - 4800.0).abs() <= 1000.0 / RATE as f64);
    assert!((report.exported[0].duration_ms - duration_ms).abs() < 1e-9);

    let fade = ms_to_samples(200, RATE);
    let window = ms_to_samples(10, RATE);
    for l in 0..3 {
        let beep_start = (l * segment).max(fade);
        let beep_end = l * segment + tone;
        for chunk in samples[beep_start..beep_end].chunks_exact(window) {
            assert!(rms(chunk) > 20000.0, "beep in loop {l} should be loud");
        }
        let gap = &samples[l * segment + tone..(l + 1) * segment];
        assert!(gap.iter().all(|&s| s == 0), "overlay in loop {l} should be silent");
    }

    // Fade-in starts from silence
    assert_eq!(samples[0], 0);
    assert!(rms(&samples[..window]) < rms(&samples[fade..fade + window]));
}

#[test]
fn test_reruns_are_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    assert!(generate_all(ALARM_PROFILES, first.path()).is_success());
    assert!(generate_all(ALARM_PROFILES, second.path()).is_success());

    for profile in ALARM_PROFILES {
        let a = std::fs::read(output_path(first.path(), profile.name)).unwrap();
        let b = std::fs::read(output_path(second.path(), profile.name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", profile.name);
    }
}

#[test]
fn test_rerun_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    assert!(generate_all(ALARM_PROFILES, dir.path()).is_success());
    let path = output_path(dir.path(), "normal");
    let before = std::fs::read(&path).unwrap();
    assert!(generate_all(ALARM_PROFILES, dir.path()).is_success());
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_every_profile_length() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate_all(ALARM_PROFILES, dir.path());
    assert_eq!(report.exported.len(), 3);
    for (exported, profile) in report.exported.iter().zip(ALARM_PROFILES) {
        let p = profile.profile;
        let expected = p.loop_count as usize * 2 * ms_to_samples(p.duration_ms, RATE);
        assert_eq!(exported.frames, expected);
        let (_, samples) = read_samples(&exported.path);
        assert_eq!(samples.len(), expected);
    }
}

#[test]
fn test_single_loop_profile() {
    let dir = tempfile::tempdir().unwrap();
    let once = NamedProfile {
        name: "once",
        profile: AlarmProfile {
            loop_count: 1,
            ..ALARM_PROFILES[0].profile
        },
    };
    let report = generate_all(&[once], dir.path());
    assert!(report.is_success());
    let (_, samples) = read_samples(&output_path(dir.path(), "once"));
    assert_eq!(samples.len(), 2 * ms_to_samples(800, RATE));
}

#[test]
fn test_unwritable_directory_reports_every_profile() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("file");
    std::fs::write(&not_a_dir, b"").unwrap();

    let report = generate_all(ALARM_PROFILES, &not_a_dir);
    assert!(!report.is_success());
    assert!(report.exported.is_empty());
    assert_eq!(report.failures.len(), ALARM_PROFILES.len());
    for (failure, profile) in report.failures.iter().zip(ALARM_PROFILES) {
        assert_eq!(failure.profile, profile.name);
        assert_eq!(failure.stage, Stage::Export);
        assert!(matches!(failure.source, ToneError::Io { .. }));
    }
}

#[test]
fn test_oversized_crossfade_is_reported_as_crossfade_error() {
    let dir = tempfile::tempdir().unwrap();
    let overlap = NamedProfile {
        name: "overlap",
        profile: AlarmProfile {
            base_freq: 1000.0,
            overlay_freq: 0.0,
            duration_ms: 100,
            crossfade_ms: 150,
            loop_count: 1,
        },
    };
    let report = generate_all(&[overlap], dir.path());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stage, Stage::Join);
    assert!(matches!(
        report.failures[0].source,
        ToneError::InvalidCrossfade { .. }
    ));
    assert!(!output_path(dir.path(), "overlap").exists());
}
