use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GOOD_PAGE: &str = r#"<!doctype html>
<html data-theme="dark">
<head>
  <meta name="compression" content="gzip">
  <link rel="stylesheet" href="styles.min.css">
  <script src="app.min.js" defer></script>
</head>
<body>
  <img src="hero.webp">
  <img src="icon.avif">
</body>
</html>
"#;

const AVERAGE_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <meta name="compression" content="gzip">
  <script src="app.js"></script>
</head>
<body>
  <img src="photo.jpg">
</body>
</html>
"#;

fn greenscan() -> Command {
    Command::cargo_bin("greenscan").expect("binary should compile")
}

fn write_page(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("page should write");
    path
}

#[test]
fn analyze_good_page_exits_zero_with_good_rating() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "good.html", GOOD_PAGE);

    greenscan()
        .arg("analyze")
        .arg(&page)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Rating: ✓ good (100%)"))
        .stdout(predicate::str::contains("- [✓] imageOptimization"));
}

#[test]
fn analyze_average_page_exits_one() {
    // compressionEnabled and reducedRequests pass, nothing else: 40%.
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "average.html", AVERAGE_PAGE);

    greenscan()
        .arg("analyze")
        .arg(&page)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("average (40%)"))
        .stdout(predicate::str::contains("- [✗] imageOptimization"));
}

#[test]
fn analyze_empty_page_scores_zero_and_exits_two() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "empty.html", "");

    greenscan()
        .arg("analyze")
        .arg(&page)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("poor (0%)"))
        .stdout(predicate::str::contains("- [✗] reducedRequests"));
}

#[test]
fn analyze_json_format_emits_original_casing() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "good.html", GOOD_PAGE);

    greenscan()
        .arg("analyze")
        .arg(&page)
        .args(["--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 100"))
        .stdout(predicate::str::contains("\"rating\": \"good\""))
        .stdout(predicate::str::contains("\"imageOptimization\": true"));
}

#[test]
fn analyze_respects_config_default_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "good.html", GOOD_PAGE);
    fs::write(
        dir.path().join("greenscan.toml"),
        r#"
[report]
format = "json"
"#,
    )
    .expect("config should write");

    greenscan()
        .arg("analyze")
        .arg(&page)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"rating\": \"good\""));
}

#[test]
fn score_accepts_snapshot_json() {
    // 3 of 4 scripts async/defer and 2 of 3 images optimized: the snapshot
    // passes imageOptimization, reducedRequests and energyEfficientDesign.
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_page(
        &dir,
        "snapshot.json",
        r#"{
  "images": [{"src": "a.webp"}, {"src": "b.webp"}, {"src": "c.jpg"}],
  "scripts": [
    {"src": "app.js", "async_or_defer": true},
    {"async_or_defer": true},
    {"async_or_defer": true},
    {}
  ]
}"#,
    );

    greenscan()
        .arg("score")
        .arg(&snapshot)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("average (60%)"))
        .stdout(predicate::str::contains("- [✓] energyEfficientDesign"));
}

#[test]
fn score_rejects_malformed_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let snapshot = write_page(&dir, "snapshot.json", "{not json");

    greenscan()
        .arg("score")
        .arg(&snapshot)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot parse error"));
}

#[test]
fn batch_scores_each_document_and_dedups_identical_content() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_page(&dir, "a.html", GOOD_PAGE);
    write_page(&dir, "b.html", GOOD_PAGE);
    write_page(&dir, "notes.txt", "not a page");

    greenscan()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("a.html"))
        .stdout(predicate::str::contains("b.html"))
        .stdout(predicate::str::contains("2 document(s), 1 unique"));
}

#[test]
fn batch_exit_code_reflects_worst_rating() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_page(&dir, "good.html", GOOD_PAGE);
    write_page(&dir, "empty.html", "");

    greenscan()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("good"))
        .stdout(predicate::str::contains("poor"));
}

#[test]
fn batch_handles_directory_without_documents() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_page(&dir, "notes.txt", "not a page");

    greenscan()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("batch: no documents found"));
}

#[test]
fn batch_rejects_file_argument() {
    let dir = TempDir::new().expect("temp dir should be created");
    let page = write_page(&dir, "good.html", GOOD_PAGE);

    greenscan()
        .arg("batch")
        .arg(&page)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn batch_json_format_emits_records() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_page(&dir, "good.html", GOOD_PAGE);

    greenscan()
        .arg("batch")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"content_sha256\""))
        .stdout(predicate::str::contains("\"rating\": \"good\""));
}

#[test]
fn badge_prints_glyph_and_color_for_each_rating() {
    let dir = TempDir::new().expect("temp dir should be created");
    let good = write_page(&dir, "good.html", GOOD_PAGE);
    let empty = write_page(&dir, "empty.html", "");

    greenscan()
        .arg("badge")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ #22C55E good"));

    greenscan()
        .arg("badge")
        .arg(&empty)
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ #EF4444 poor"));
}
