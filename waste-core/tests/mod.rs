use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use waste_core::config::{Config, RedrawMode};
use waste_core::error::{ConfigError, InitError};
use waste_core::layout::{Layout, Rect};
use waste_core::mute::{MuteSwitch, Playback};
use waste_core::pacing::FramePacer;
use waste_core::WasteCounter;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Counter Tests
// ============================================================================

#[test]
fn test_counter_starts_at_zero() {
    let counter = WasteCounter::start(Instant::now());
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.label(), "0");
}

#[test]
fn test_counter_waits_a_full_second() {
    let t0 = Instant::now();
    let mut counter = WasteCounter::start(t0);
    assert_eq!(counter.tick(t0 + ms(999)), None);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_counter_ticks_at_one_second() {
    let t0 = Instant::now();
    let mut counter = WasteCounter::start(t0);
    assert_eq!(counter.tick(t0 + ms(1000)), Some(1));
    assert_eq!(counter.label(), "1");
}

#[test]
fn test_counter_stall_adds_whole_seconds_and_drops_remainder() {
    let t0 = Instant::now();
    let mut counter = WasteCounter::start(t0);
    assert_eq!(counter.tick(t0 + ms(2500)), Some(2));

    // The timer restarted at 2500ms, so 3400ms is not yet a full second later.
    assert_eq!(counter.tick(t0 + ms(3400)), None);
    assert_eq!(counter.tick(t0 + ms(3500)), Some(3));
}

#[test]
fn test_counter_next_due_follows_last_tick() {
    let t0 = Instant::now();
    let mut counter = WasteCounter::start(t0);
    assert_eq!(counter.next_due(), t0 + ms(1000));
    counter.tick(t0 + ms(1200));
    assert_eq!(counter.next_due(), t0 + ms(2200));
}

#[test]
fn test_counter_never_decreases() {
    let t0 = Instant::now();
    let mut counter = WasteCounter::start(t0);
    let mut last = 0;
    for step in 1..=50u64 {
        counter.tick(t0 + ms(step * 337));
        assert!(counter.count() >= last);
        last = counter.count();
    }
    assert!(last > 0);
}

#[test]
fn test_counter_ignores_clock_going_backwards() {
    let t0 = Instant::now() + ms(5000);
    let mut counter = WasteCounter::start(t0);
    assert_eq!(counter.tick(t0 - ms(3000)), None);
    assert_eq!(counter.count(), 0);
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_layout_upper_line() {
    let layout = Layout::new(800, 600);
    assert_eq!(layout.upper(200, 40), Rect::new(300, 210, 200, 40));
}

#[test]
fn test_layout_lower_line() {
    let layout = Layout::new(800, 600);
    assert_eq!(layout.lower(260, 40), Rect::new(270, 350, 260, 40));
}

#[test]
fn test_layout_counter_centered() {
    let layout = Layout::new(800, 600);
    let rect = layout.counter(45, 95);
    assert_eq!(rect, Rect::new(378, 253, 45, 95));
}

#[test]
fn test_layout_odd_sizes_use_integer_halving() {
    let layout = Layout::new(801, 601);
    // 801 / 2 - 51 / 2 = 400 - 25
    assert_eq!(layout.counter(51, 11).x, 375);
    assert_eq!(layout.counter(51, 11).y, 295);
}

#[test]
fn test_layout_text_wider_than_window() {
    let layout = Layout::new(100, 600);
    let rect = layout.upper(300, 40);
    assert_eq!(rect.x, -100);
    assert_eq!(rect.x + rect.w, 200);
}

#[test]
fn test_layout_custom_margin() {
    let layout = Layout::with_margin(800, 600, 50);
    assert_eq!(layout.upper(10, 10).y, 50);
    let lower = layout.lower(10, 10);
    assert_eq!(lower.y + lower.h, 550);
}

// ============================================================================
// Pacing Tests
// ============================================================================

#[test]
fn test_pacer_budget_for_60_fps() {
    let pacer = FramePacer::from_fps(60);
    assert_eq!(pacer.budget(), Some(ms(16)));
}

#[test]
fn test_pacer_remaining_time() {
    let pacer = FramePacer::from_fps(60);
    let start = Instant::now();
    assert_eq!(pacer.remaining(start, start + ms(6)), Some(ms(10)));
}

#[test]
fn test_pacer_budget_spent() {
    let pacer = FramePacer::from_fps(60);
    let start = Instant::now();
    assert_eq!(pacer.remaining(start, start + ms(16)), None);
    assert_eq!(pacer.remaining(start, start + ms(40)), None);
}

#[test]
fn test_pacer_unpaced() {
    let pacer = FramePacer::from_fps(0);
    let start = Instant::now();
    assert_eq!(pacer.budget(), None);
    assert_eq!(pacer.remaining(start, start), None);
    assert_eq!(pacer.deadline(start), start);
}

#[test]
fn test_pacer_deadline() {
    let pacer = FramePacer::from_fps(10);
    let start = Instant::now();
    assert_eq!(pacer.deadline(start), start + ms(100));
}

// ============================================================================
// Mute Tests
// ============================================================================

#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl Playback for Recorder {
    fn pause(&mut self) {
        self.calls.push("pause");
    }

    fn resume(&mut self) {
        self.calls.push("resume");
    }
}

#[test]
fn test_mute_apply_when_unmuted_does_nothing() {
    let mut rec = Recorder::default();
    MuteSwitch::new(false).apply(&mut rec);
    assert!(rec.calls.is_empty());
}

#[test]
fn test_mute_apply_when_muted_pauses() {
    let mut rec = Recorder::default();
    MuteSwitch::new(true).apply(&mut rec);
    assert_eq!(rec.calls, vec!["pause"]);
}

#[test]
fn test_mute_toggle_alternates() {
    let mut rec = Recorder::default();
    let mut switch = MuteSwitch::new(false);
    assert!(switch.toggle(&mut rec));
    assert!(!switch.toggle(&mut rec));
    assert!(switch.toggle(&mut rec));
    assert_eq!(rec.calls, vec!["pause", "resume", "pause"]);
    assert!(switch.is_muted());
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_init_error_message_format() {
    let err = InitError::Fonts("No such file or directory (os error 2)".to_string());
    assert_eq!(
        err.to_string(),
        "Can't load required fonts (No such file or directory (os error 2))"
    );
}

#[test]
fn test_init_error_descriptions() {
    let cases = [
        (InitError::EventLoop("x".into()), "Can't init event loop (x)"),
        (InitError::Window("x".into()), "Can't create window (x)"),
        (InitError::Renderer("x".into()), "Can't create renderer (x)"),
        (InitError::AudioDevice("x".into()), "Can't open audio device (x)"),
        (InitError::Music("x".into()), "Can't load required sounds (x)"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_config_error_wraps_into_init_error() {
    let err: InitError = Config::from_toml_str("width = \"wide\"").unwrap_err().into();
    assert!(matches!(err, InitError::Config(ConfigError::Parse(_))));
    assert!(err.to_string().starts_with("Can't load configuration (invalid TOML"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.title, "Waste");
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.fps, 60);
    assert_eq!(config.normal_font_size, 30.0);
    assert_eq!(config.counter_font_size, 80.0);
    assert_eq!(config.font_path, PathBuf::from("res/DroidSans.ttf"));
    assert_eq!(config.music_path, PathBuf::from("res/music.wav"));
    assert!(!config.muted);
    assert_eq!(config.redraw, RedrawMode::EveryFrame);
}

#[test]
fn test_config_partial_toml() {
    let config = Config::from_toml_str("muted = true\nfps = 30\nredraw = \"on-change\"").unwrap();
    assert!(config.muted);
    assert_eq!(config.fps, 30);
    assert_eq!(config.redraw, RedrawMode::OnChange);
    assert_eq!(config.title, "Waste");
}

#[test]
fn test_config_empty_toml_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_config_load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.toml");
    std::fs::write(&path, "title = \"Still Wasting\"\nwidth = 1024\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.title, "Still Wasting");
    assert_eq!(config.width, 1024);
    assert_eq!(config.height, 600);
}

#[test]
fn test_config_load_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Config::load(Some(&path)).unwrap_err();
    match err {
        ConfigError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected Read error, got {other:?}"),
    }
}

#[test]
fn test_config_rebase_assets() {
    let mut config = Config::default();
    config.rebase_assets(Path::new("/opt/waste/share"));
    assert_eq!(config.font_path, PathBuf::from("/opt/waste/share/DroidSans.ttf"));
    assert_eq!(config.music_path, PathBuf::from("/opt/waste/share/music.wav"));
}

#[test]
fn test_config_rejects_zero_font_size() {
    let err = Config::from_toml_str("normal_font_size = 0.0").unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "normal_font_size"),
        other => panic!("Expected Invalid error, got {other:?}"),
    }
}

#[test]
fn test_config_rejects_negative_and_nan_font_sizes() {
    assert!(matches!(
        Config::from_toml_str("counter_font_size = -80.0"),
        Err(ConfigError::Invalid { field: "counter_font_size", .. })
    ));
    assert!(matches!(
        Config::from_toml_str("counter_font_size = nan"),
        Err(ConfigError::Invalid { field: "counter_font_size", .. })
    ));
    assert!(matches!(
        Config::from_toml_str("normal_font_size = inf"),
        Err(ConfigError::Invalid { field: "normal_font_size", .. })
    ));
}

#[test]
fn test_config_rejects_zero_window_size() {
    assert!(matches!(
        Config::from_toml_str("width = 0"),
        Err(ConfigError::Invalid { field: "width", .. })
    ));
    assert!(matches!(
        Config::from_toml_str("height = 0"),
        Err(ConfigError::Invalid { field: "height", .. })
    ));
}

#[test]
fn test_invalid_config_is_a_fatal_init_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.toml");
    std::fs::write(&path, "counter_font_size = 0.0\n").unwrap();

    let err: InitError = Config::load(Some(&path)).unwrap_err().into();
    assert!(matches!(err, InitError::Config(ConfigError::Invalid { .. })));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().starts_with("Can't load configuration (invalid `counter_font_size`"));
}
