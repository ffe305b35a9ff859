//! End-to-end chart rendering into a temporary directory

use mvperf_core::charts::{render_performance_chart, render_scalability_chart};
use mvperf_core::{derive_metrics, render_all, ChartSettings, Error, CONFIGURATIONS, SCALABILITY};
use std::fs;
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Low resolution keeps the bitmaps small
fn settings_in(dir: &TempDir) -> ChartSettings {
    ChartSettings {
        output_dir: dir.path().to_path_buf(),
        dpi: 40,
        ..Default::default()
    }
}

fn assert_png(path: &std::path::Path) {
    let bytes = fs::read(path).unwrap();
    assert!(!bytes.is_empty(), "{} is empty", path.display());
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_render_all_writes_both_figures() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    let metrics = derive_metrics(&CONFIGURATIONS);

    let paths = render_all(&settings, &metrics, &SCALABILITY).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], dir.path().join("performance_analysis.png"));
    assert_eq!(paths[1], dir.path().join("scalability_analysis.png"));
    for path in &paths {
        assert_png(path);
    }
}

#[test]
fn test_render_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    fs::write(settings.scalability_path(), b"stale").unwrap();

    let path = render_scalability_chart(&settings, &SCALABILITY).unwrap();

    assert_png(&path);
}

#[test]
fn test_render_creates_missing_output_dir() {
    let dir = TempDir::new().unwrap();
    let settings = ChartSettings {
        output_dir: dir.path().join("nested").join("charts"),
        dpi: 40,
        ..Default::default()
    };
    let metrics = derive_metrics(&CONFIGURATIONS);

    let path = render_performance_chart(&settings, &metrics).unwrap();

    assert!(path.starts_with(dir.path().join("nested")));
    assert_png(&path);
}

#[test]
fn test_render_without_configurations_fails() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);

    let err = render_performance_chart(&settings, &[]).unwrap_err();

    assert!(matches!(err, Error::InvalidSetting(_)));
    assert!(!settings.performance_path().exists());
}

#[test]
fn test_render_rejects_zero_dpi() {
    let dir = TempDir::new().unwrap();
    let settings = ChartSettings {
        dpi: 0,
        ..settings_in(&dir)
    };

    let err = render_scalability_chart(&settings, &SCALABILITY).unwrap_err();

    assert!(err.to_string().contains("dpi"));
}
