use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SIGNUP: &str = "tests/fixtures/signup.html";
const TODO: &str = "tests/fixtures/todo.html";

/// Run the binary with an isolated config directory.
fn run_which_query(config_home: &Path, args: &[&str]) -> (String, String, bool) {
    let bin = env!("CARGO_BIN_EXE_which-query");
    let output = std::process::Command::new(bin)
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("WHICH_QUERY_DEBUG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run which-query");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (stdout, stderr, output.status.success())
}

fn run_ok(config_home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_which_query(config_home, args);
    assert!(success, "which-query failed: {}", stderr);
    stdout
}

#[test]
fn test_plain_suggestion() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[SIGNUP, "button"]);
    assert_eq!(out, "screen.getByRole('button', {name: 'Sign up'})\n");
}

#[test]
fn test_nth_match() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[SIGNUP, "img", "--nth", "1"]);
    assert_eq!(out, "screen.getByAltText('Secure checkout')\n");
}

#[test]
fn test_single_variant() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[SIGNUP, "button", "--variant", "queryBy"]);
    assert_eq!(out, "screen.queryByRole('button', {name: 'Sign up'})\n");
}

#[test]
fn test_all_variants_have_headers() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[SIGNUP, "button", "--all-variants"]);
    let headers: Vec<&str> = out.lines().filter(|l| l.starts_with("// ")).collect();
    assert_eq!(
        headers,
        vec!["// getBy", "// queryBy", "// findBy", "// getAllBy", "// queryAllBy", "// findAllBy"]
    );
    assert!(out.contains("screen.findAllByRole('button', {name: 'Sign up'})"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[TODO, "button", "--nth", "2", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["target"], "button");
    assert_eq!(json["results"][0]["variant"], "getBy");
    assert_eq!(
        json["results"][0]["suggestion"],
        "within( screen.getByRole('listitem', {name: 'Item 3 Delete'}) )\n.getByRole('button', {name: 'Delete'})"
    );
}

#[test]
fn test_json_debug_highlights() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &[TODO, "button", "--json", "--debug"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let highlights = json["results"][0]["highlights"].as_array().unwrap();
    assert_eq!(highlights[0]["kind"], "target");
    assert_eq!(highlights[1]["kind"], "unique_ancestor");
    assert_eq!(highlights[1]["style"], "color:aqua; background-color:blue;");
}

#[test]
fn test_no_suggestion_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let out = run_ok(dir.path(), &["tests/fixtures/anonymous.html", "span"]);
    assert_eq!(out, "No suggestion found\n");
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("suggestion.txt");
    run_ok(dir.path(), &[SIGNUP, "h1", "-o", target.to_str().unwrap()]);
    assert_eq!(
        fs::read_to_string(target).unwrap(),
        "screen.getByRole('heading', {name: 'Create your account'})"
    );
}

#[test]
fn test_invalid_variant() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_which_query(dir.path(), &[SIGNUP, "button", "--variant", "getEvery"]);
    assert!(!success);
    assert!(stderr.contains("getEvery"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_which_query(dir.path(), &["does/not/exist.html", "p"]);
    assert!(!success);
    assert!(stderr.contains("Path not found"), "stderr: {}", stderr);
}

#[test]
fn test_missing_selector() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, success) = run_which_query(dir.path(), &[SIGNUP]);
    assert!(!success);
    assert!(stderr.contains("FILE and SELECTOR are required"));
}

#[test]
fn test_options_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");
    let out = run_ok(dir.path(), &["options", "--config", config.to_str().unwrap()]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["debug_enabled"], false);
    assert!(config.exists());
}

#[test]
fn test_options_persist_debug_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");
    let config = config.to_str().unwrap();
    run_ok(dir.path(), &["options", "--debug", "true", "--config", config]);

    // The persisted flag turns on highlights without --debug
    let out = run_ok(dir.path(), &[TODO, "button", "--json", "--config", config]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let highlights = json["results"][0]["highlights"].as_array().unwrap();
    assert!(!highlights.is_empty());
}

#[test]
fn test_options_rejects_non_boolean() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.json");
    let (_, stderr, success) =
        run_which_query(dir.path(), &["options", "--debug", "maybe", "--config", config.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("Invalid boolean"));
}

#[test]
fn test_default_config_location() {
    let dir = TempDir::new().unwrap();
    run_ok(dir.path(), &[SIGNUP, "button"]);
    assert!(dir.path().join("which-query").join("settings.json").exists());
}
