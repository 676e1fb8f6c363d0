use std::path::PathBuf;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_pointmorph")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "pointmorph.exe"
            } else {
                "pointmorph"
            });
            p
        })
}

#[test]
fn cli_shape_writes_parseable_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("cloud.json");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(bin_path())
        .args([
            "shape", "--kind", "gear", "--count", "100", "--seed", "7", "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());

    let raw = std::fs::read_to_string(&out_path).unwrap();
    let dump: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(dump["kind"], "gear");
    assert_eq!(dump["count"], 100);
    assert_eq!(dump["points"].as_array().unwrap().len(), 100);
}

#[test]
fn cli_frame_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("frame.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(bin_path())
        .args([
            "frame",
            "--variant",
            "hero",
            "--progress",
            "0.4",
            "--device",
            "mobile",
            "--width",
            "96",
            "--height",
            "96",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
}
