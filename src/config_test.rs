use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_lock()` so no other test touches the environment.
unsafe fn clear_iso_env() {
    unsafe {
        std::env::remove_var("ISO_WIDTH");
        std::env::remove_var("ISO_HEIGHT");
        std::env::remove_var("ISO_BOARD_SIZE");
        std::env::remove_var("ISO_MOVES");
        std::env::remove_var("ISO_ZOOM_CLICKS");
        std::env::remove_var("ISO_FORMAT");
        std::env::remove_var("ISO_OUTPUT");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_lock();
    unsafe { clear_iso_env() };

    let cfg = DemoConfig::from_env().unwrap();
    assert_eq!(cfg, DemoConfig::default());
    assert_eq!(cfg.board_size, DEFAULT_BOARD_SIZE);
    assert_eq!(cfg.format, OutputFormat::Svg);
    assert_eq!(cfg.output, OutputTarget::Stdout);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_iso_env();
        std::env::set_var("ISO_WIDTH", "1024");
        std::env::set_var("ISO_HEIGHT", " 768 ");
        std::env::set_var("ISO_BOARD_SIZE", "10");
        std::env::set_var("ISO_MOVES", "wwr");
        std::env::set_var("ISO_ZOOM_CLICKS", "-3");
        std::env::set_var("ISO_FORMAT", "json");
        std::env::set_var("ISO_OUTPUT", "/tmp/board.json");
    }

    let cfg = DemoConfig::from_env().unwrap();
    assert!((cfg.width - 1024.0).abs() < f64::EPSILON);
    assert!((cfg.height - 768.0).abs() < f64::EPSILON);
    assert_eq!(cfg.board_size, 10);
    assert_eq!(cfg.moves, "wwr");
    assert_eq!(cfg.zoom_clicks, -3);
    assert_eq!(cfg.format, OutputFormat::Json);
    assert_eq!(cfg.output, OutputTarget::File(PathBuf::from("/tmp/board.json")));

    unsafe { clear_iso_env() };
}

#[test]
fn from_env_bad_number_errors() {
    let _guard = env_lock();
    unsafe {
        clear_iso_env();
        std::env::set_var("ISO_BOARD_SIZE", "twenty");
    }

    let err = DemoConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid ISO_BOARD_SIZE"));

    unsafe { clear_iso_env() };
}

#[test]
fn from_env_unknown_format_errors() {
    let _guard = env_lock();
    unsafe {
        clear_iso_env();
        std::env::set_var("ISO_FORMAT", "png");
    }

    let err = DemoConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unsupported ISO_FORMAT"));

    unsafe { clear_iso_env() };
}

#[test]
fn parse_output_dash_is_stdout() {
    assert_eq!(parse_output(Some("-")), OutputTarget::Stdout);
    assert_eq!(parse_output(None), OutputTarget::Stdout);
    assert_eq!(parse_output(Some("out.svg")), OutputTarget::File(PathBuf::from("out.svg")));
}
