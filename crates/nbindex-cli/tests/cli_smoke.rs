//! End-to-end smoke tests for the `nbindex` binary.

use std::process::Output;

use assert_cmd::Command;

fn nbindex(args: &[&str]) -> Output {
    Command::cargo_bin("nbindex")
        .expect("binary builds")
        .args(args)
        .output()
        .expect("binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn lookup_hit_prints_the_unit() {
    let out = nbindex(&["lookup", "PairwiseDistance"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "00_distance.ipynb");
}

#[test]
fn lookup_miss_exits_one_with_a_friendly_message() {
    let out = nbindex(&["lookup", "DoesNotExist"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("no documentation available"), "{stderr}");
}

#[test]
fn modules_lists_generation_order() {
    let out = nbindex(&["modules"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "distance.py");
}

#[test]
fn urls_are_byte_exact() {
    let out = nbindex(&["--json", "urls"]);
    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(parsed["doc_url"], "https://eschmidt42.github.io/md/");
    assert_eq!(parsed["git_url"], "https://github.com/eschmidt42/md/tree/master/");
}

#[test]
fn doc_link_composes_from_the_doc_root() {
    let out = nbindex(&["doc-link", "Hull"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out).trim(),
        "https://eschmidt42.github.io/md/distance.html#Hull"
    );
}

#[test]
fn source_link_points_into_the_repository() {
    let out = nbindex(&["source-link", "Hull"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out).trim(),
        "https://github.com/eschmidt42/md/tree/master/distance.py"
    );
}

#[test]
fn check_passes_on_the_builtin_snapshot() {
    let out = nbindex(&["check"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("ok:"));
}

#[test]
fn snapshot_flag_queries_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.toml");
    std::fs::write(
        &path,
        r#"
            modules = ["geometry.py"]
            doc_url = "https://example.org/docs/"
            git_url = "https://example.org/repo/"

            [index]
            "Mesh" = "03_geometry.ipynb"
        "#,
    )
    .unwrap();

    let path = path.to_string_lossy().into_owned();
    let out = nbindex(&["--snapshot", &path, "lookup", "Mesh"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "03_geometry.ipynb");

    let out = nbindex(&["--snapshot", &path, "modules"]);
    assert_eq!(stdout(&out).trim(), "geometry.py");
}

#[test]
fn malformed_snapshot_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "modules = [\"distance.py\"]\n").unwrap();

    let path = path.to_string_lossy().into_owned();
    let out = nbindex(&["--snapshot", &path, "lookup", "Hull"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to load snapshot"), "{stderr}");
}
