//! 起動パラメータ（CLI フラグ + config.json）のマージ検証

use crate::adapter::FileConfig;
use crate::cli::Config;
use crate::resolve_launch;
use crate::screen::View;

#[test]
fn test_defaults_when_nothing_is_given() {
    let launch = resolve_launch(&Config::default(), &FileConfig::default()).unwrap();
    assert_eq!(launch.offset.offset_ms(), 0);
    assert_eq!(launch.view, View::Clock);
    assert_eq!(launch.tick_ms, 50);
    assert!(!launch.once);
}

#[test]
fn test_cli_flags_override_file_config() {
    let config = Config {
        offset_hours: Some(1),
        fps: Some(10),
        view: Some(View::Stopwatch),
        ..Default::default()
    };
    let file = FileConfig {
        offset_hours: Some(5),
        offset_minutes: Some(15),
        fps: Some(30),
        view: Some("calendar".to_string()),
    };
    let launch = resolve_launch(&config, &file).unwrap();
    // hours は CLI、minutes はファイルから
    assert_eq!(launch.offset.hours(), 1);
    assert_eq!(launch.offset.minutes(), 15);
    assert_eq!(launch.tick_ms, 100);
    assert_eq!(launch.view, View::Stopwatch);
}

#[test]
fn test_file_config_fills_missing_flags() {
    let file = FileConfig {
        offset_hours: Some(2),
        offset_minutes: Some(30),
        fps: None,
        view: Some("settings".to_string()),
    };
    let launch = resolve_launch(&Config::default(), &file).unwrap();
    assert_eq!(launch.offset.offset_ms(), 9_000_000);
    assert_eq!(launch.view, View::Settings);
}

#[test]
fn test_out_of_range_offset_is_usage_error() {
    let config = Config {
        offset_hours: Some(20),
        ..Default::default()
    };
    let err = resolve_launch(&config, &FileConfig::default()).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("hours"));

    let config = Config {
        offset_minutes: Some(-60),
        ..Default::default()
    };
    let err = resolve_launch(&config, &FileConfig::default()).unwrap_err();
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_fps_outside_bounds_is_usage_error() {
    for fps in [0u32, 61, 1_000] {
        let config = Config {
            fps: Some(fps),
            ..Default::default()
        };
        let err = resolve_launch(&config, &FileConfig::default()).unwrap_err();
        assert!(err.is_usage(), "fps={}", fps);
    }
}

#[test]
fn test_unknown_view_in_file_falls_back_to_clock() {
    let file = FileConfig {
        view: Some("planner".to_string()),
        ..Default::default()
    };
    let launch = resolve_launch(&Config::default(), &file).unwrap();
    assert_eq!(launch.view, View::Clock);
}

#[test]
fn test_tick_is_derived_from_fps() {
    let config = Config {
        fps: Some(60),
        ..Default::default()
    };
    let launch = resolve_launch(&config, &FileConfig::default()).unwrap();
    assert_eq!(launch.tick_ms, 1_000 / 60);
}
