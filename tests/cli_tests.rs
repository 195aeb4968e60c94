use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn oskforge() -> Command {
    let mut cmd = Command::cargo_bin("oskforge").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_validate_bundled_keymap() {
    let out = stdout_of(oskforge().arg("validate"));
    assert!(out.contains("Keymap 'en_us' OK"), "stdout: {}", out);
}

#[test]
fn test_validate_rejects_bad_keymap() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{ "kbMargins": { "left": -0.1 }, "totalKeyWidth": 1, "totalRowHeight": 1 }"#,
    )
    .unwrap();

    let output = oskforge()
        .args(["validate", "--keymap", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_layout_json() {
    let out = stdout_of(oskforge().args([
        "layout",
        "--json",
        "--canvas-width",
        "1080",
        "--canvas-height",
        "1440",
    ]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["origin"]["x"], 22);
    assert_eq!(value["origin"]["y"], 864);
    assert_eq!(value["widthScale"], 103);
}

#[test]
fn test_layout_table_lists_keys() {
    let out = stdout_of(oskforge().arg("layout"));
    assert!(out.contains("CPLK"));
    assert!(out.contains("(pad)"));
}

#[test]
fn test_hit_reports_keys_and_debounce() {
    let out = stdout_of(oskforge().args(["hit", "27,869@0", "27,869@10", "1000,1300@20"]));
    assert!(out.contains("Q"));
    assert!(out.contains("debounce detected"));
    assert!(out.contains("RET"));
}

#[test]
fn test_hit_rejects_malformed_point() {
    let output = oskforge().args(["hit", "27;869"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_render_writes_png() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("en_us.png");

    let stdout = stdout_of(oskforge().args(["render", "--out", out.to_str().unwrap()]));
    assert!(stdout.contains("Rendered 'en_us'"), "stdout: {}", stdout);

    let decoded = image::open(&out).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1036, 547));
}

#[test]
fn test_render_fails_on_missing_font() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("en_us.png");

    let output = oskforge()
        .args(["render", "--out", out.to_str().unwrap()])
        .args(["--font", dir.path().join("missing.ttf").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!out.exists());
}
