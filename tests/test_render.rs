// Integration tests for the export collaborator: rendering must produce a
// JPEG artifact for populated and empty histograms alike, and must overwrite
// an existing file unconditionally.

use std::fs;
use std::path::PathBuf;

use flowgen::{render_histogram, Histogram, Model, PlotOptions, Settings};

fn temp_artifact(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flowgen_{}", name))
}

fn assert_is_jpeg(path: &PathBuf) {
    let bytes = fs::read(path).expect("artifact should be readable");
    assert!(bytes.len() > 2, "artifact should not be empty");
    assert_eq!(
        &bytes[..2],
        &[0xFF, 0xD8],
        "artifact should carry the JPEG magic bytes"
    );
}

#[test]
fn test_render_populated_histogram() {
    let mut settings = Settings::new(10, 200, 0.1);
    settings.seed = Some(5);
    let hist = Model { settings }.run();

    let path = temp_artifact("render_populated.jpg");
    render_histogram(&hist, &path, &PlotOptions::default()).expect("render should succeed");

    assert_is_jpeg(&path);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_render_empty_histogram() {
    // An all-zero histogram still renders (unit y range fallback).
    let hist = Histogram::new(100, 0.0, 2.0 * std::f64::consts::PI);

    let path = temp_artifact("render_empty.jpg");
    render_histogram(&hist, &path, &PlotOptions::default()).expect("render should succeed");

    assert_is_jpeg(&path);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_render_overwrites_existing_file() {
    let path = temp_artifact("render_overwrite.jpg");
    fs::write(&path, b"not an image").expect("seed file should be writable");

    let mut settings = Settings::new(5, 100, 0.0);
    settings.seed = Some(11);
    let hist = Model { settings }.run();

    render_histogram(&hist, &path, &PlotOptions::default()).expect("render should succeed");

    assert_is_jpeg(&path);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_render_without_stats_block() {
    let mut settings = Settings::new(5, 100, 0.1);
    settings.seed = Some(13);
    let hist = Model { settings }.run();

    let options = PlotOptions {
        show_stats: false,
        show_fit: false,
        y_axis_minimum: 0.0,
    };
    let path = temp_artifact("render_no_stats.jpg");
    render_histogram(&hist, &path, &options).expect("render should succeed");

    assert_is_jpeg(&path);
    let _ = fs::remove_file(&path);
}
