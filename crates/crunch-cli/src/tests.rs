use crate::build::{self, BuildOptions};
use crunch_core::BuildConfig;
use std::path::Path;

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn setup(config: &str) -> (tempfile::TempDir, BuildConfig) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.js", "var counter = START;");
    write(dir.path(), "src/b.js", "if (DEBUG) { counter += STEP; }");
    write(dir.path(), "crunch.json", config);
    let config = BuildConfig::load(dir.path().join("crunch.json")).unwrap();
    (dir, config)
}

const CONFIG: &str = r#"{
    "input": {"sources": ["src/a.js", "src/b.js"]},
    "output": {"compact": "build/out.js", "debug": "build/debug.js"},
    "constants": {"START": 10, "STEP": 2, "DEBUG": true}
}"#;

#[tokio::test]
async fn test_read_sources_keeps_order() {
    let (dir, config) = setup(CONFIG);
    let text = build::read_sources(&config.input.sources).await.unwrap();
    assert_eq!(text, "var counter = START;\nif (DEBUG) { counter += STEP; }");
    drop(dir);
}

#[tokio::test]
async fn test_run_writes_both_variants() {
    let (dir, config) = setup(CONFIG);
    let summary = build::run(&config, &BuildOptions::default()).await.unwrap();

    let debug = std::fs::read_to_string(dir.path().join("build/debug.js")).unwrap();
    assert_eq!(debug, "var counter = 10;\nif (true) { counter += 2; }");
    let compact = std::fs::read_to_string(dir.path().join("build/out.js")).unwrap();
    assert_eq!(compact, "var a = 10;\nif (true) { a += 2; }");

    assert_eq!(summary.debug_len, debug.len());
    assert_eq!(summary.audited, dir.path().join("build/out.js"));
    assert_eq!(summary.size.size, compact.len() as u64);
    assert!(!summary.size.is_over());
}

#[tokio::test]
async fn test_run_no_minify_writes_debug_twice() {
    let (dir, config) = setup(CONFIG);
    let options = BuildOptions { no_minify: true, ..Default::default() };
    build::run(&config, &options).await.unwrap();
    let compact = std::fs::read_to_string(dir.path().join("build/out.js")).unwrap();
    let debug = std::fs::read_to_string(dir.path().join("build/debug.js")).unwrap();
    assert_eq!(compact, debug);
}

#[tokio::test]
async fn test_over_budget_is_advisory() {
    let (dir, config) = setup(CONFIG);
    let options = BuildOptions { max_bytes: Some(4), ..Default::default() };
    let summary = build::run(&config, &options).await.unwrap();
    assert!(summary.size.is_over());
    assert!(dir.path().join("build/out.js").exists());
}

#[tokio::test]
async fn test_audits_existing_artifact() {
    let (dir, config) = setup(CONFIG);
    write(dir.path(), "build/game.zip", "0123456789");
    let options = BuildOptions { artifact: Some(dir.path().join("build/game.zip")), ..Default::default() };
    let summary = build::run(&config, &options).await.unwrap();
    assert_eq!(summary.size.size, 10);
}

#[tokio::test]
async fn test_missing_artifact_falls_back_to_compact() {
    let (dir, config) = setup(CONFIG);
    let options = BuildOptions { artifact: Some(dir.path().join("nope.zip")), ..Default::default() };
    let summary = build::run(&config, &options).await.unwrap();
    assert_eq!(summary.audited, dir.path().join("build/out.js"));
}

#[tokio::test]
async fn test_missing_source_writes_nothing() {
    let (dir, mut config) = setup(CONFIG);
    config.input.sources.push(dir.path().join("src/missing.js"));
    let err = build::run(&config, &BuildOptions::default()).await.unwrap_err();
    assert!(format!("{err:#}").contains("missing.js"));
    assert!(!dir.path().join("build/out.js").exists());
}

#[tokio::test]
async fn test_no_sources_is_an_error() {
    let config = BuildConfig::default();
    assert!(build::run(&config, &BuildOptions::default()).await.is_err());
}

// ========== Logging ==========

#[test]
fn test_default_filter_is_scoped_to_crunch() {
    let d = crate::logging::directives(false, None);
    assert_eq!(d, crate::logging::DEFAULT_DIRECTIVES);
    assert!(d.split(',').all(|part| part.starts_with("crunch")));
    assert!(tracing_subscriber::EnvFilter::try_new(&d).is_ok());
}

#[test]
fn test_filter_env_and_verbose() {
    use crate::logging::directives;
    assert_eq!(directives(false, Some("crunch_compactor=debug")), "crunch_compactor=debug");
    assert_eq!(directives(false, Some("  ")), crate::logging::DEFAULT_DIRECTIVES);
    assert!(directives(true, Some("warn")).contains("crunch_compactor=debug"));
}
