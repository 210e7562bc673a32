use image::Rgb;
use pwa_icon_gen::{
    palette::{blend, lerp},
    Style,
};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_icon_gen(args: &[&str], output_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pwa-icon-gen"))
        .args(args)
        .arg("-o")
        .arg(output_dir)
        .output()
        .expect("Failed to run pwa-icon-gen command")
}

/// Runs `pwa-icon-gen --style green --design rounded --sizes 48 96` and checks
/// that both PNGs exist with the right dimensions.
#[test]
fn test_generates_requested_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let output = run_icon_gen(
        &[
            "--style", "green", "--design", "rounded", "--sizes", "48", "96",
        ],
        &output_dir,
    );

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("pwa-icon-gen command failed");
    }

    for size in [48u32, 96] {
        let icon_path = output_dir.join(format!("icon-{size}x{size}.png"));
        assert!(icon_path.exists(), "{} should exist", icon_path.display());

        let icon = image::open(&icon_path).expect("Failed to load generated icon");
        assert_eq!(icon.width(), size);
        assert_eq!(icon.height(), size);
        assert_eq!(icon.to_rgb8().get_pixel(0, 0).0, [16, 185, 129]);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rounded icons with green style"));
    assert!(stdout.contains("icon-96x96.png"));
    assert!(stdout.contains("Tips:"));
    assert!(stdout.contains("--design rounded|minimal|radial"));
}

#[test]
fn test_default_sizes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let output = run_icon_gen(&["--text", "Ab", "--start", "#000000"], &output_dir);
    assert!(output.status.success(), "default invocation failed");

    for size in [192, 512] {
        assert!(output_dir.join(format!("icon-{size}x{size}.png")).exists());
    }
    let icon = image::open(output_dir.join("icon-192x192.png")).expect("Failed to load icon");
    assert_eq!(icon.to_rgb8().get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn test_rejects_unknown_style_before_rendering() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let output = run_icon_gen(&["--style", "plaid"], &output_dir);
    assert!(!output.status.success());
    assert!(!output_dir.exists(), "nothing should be written");
}

#[test]
fn test_rejects_zero_size_and_bad_color() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let zero = run_icon_gen(&["--sizes", "0"], &output_dir);
    assert!(!zero.status.success());

    let color = run_icon_gen(&["--end", "definitely-not-a-color"], &output_dir);
    assert!(!color.status.success());
    assert!(!output_dir.exists());
}

#[test]
fn test_settings_file_is_applied() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("settings.json");
    let plain_dir = temp_dir.path().join("plain");
    let configured_dir = temp_dir.path().join("configured");

    let plain = run_icon_gen(&["--sizes", "64"], &plain_dir);
    assert!(plain.status.success());

    std::fs::write(&config, r#"{ "font_paths": [], "border_min": 4 }"#)
        .expect("Failed to write settings");
    let configured = run_icon_gen(
        &["--sizes", "64", "--config", config.to_str().expect("utf-8 path")],
        &configured_dir,
    );
    assert!(configured.status.success());

    let load = |dir: &Path| {
        image::open(dir.join("icon-64x64.png"))
            .expect("Failed to load icon")
            .to_rgb8()
    };
    let plain_icon = load(&plain_dir);
    let configured_icon = load(&configured_dir);

    // (5, 32) is inside the ring only when it is at least 4px wide
    let palette = Style::Gradient.palette();
    let row = lerp(palette.start, palette.end, 32.0 / 64.0);
    assert_eq!(*plain_icon.get_pixel(5, 32), row);
    assert_eq!(
        *configured_icon.get_pixel(5, 32),
        blend(row, Rgb([255, 255, 255]), 100)
    );

    std::fs::write(&config, r#"{ "border_colour": 4 }"#).expect("Failed to write settings");
    let rejected = run_icon_gen(
        &["--config", config.to_str().expect("utf-8 path")],
        temp_dir.path().join("other").as_path(),
    );
    assert!(!rejected.status.success());
}
