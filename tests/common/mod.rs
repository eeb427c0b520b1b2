/// Shared helpers for the end-to-end tests.
///
/// Every run happens inside a fresh temp directory used as the working
/// directory, so the default relative paths resolve there.
use std::path::Path;
use std::process::{Command, Output};

/// Run `metagen` with `args` in `dir`. Returns the full Output.
pub fn run_metagen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_metagen"))
        .args(args)
        .current_dir(dir)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("failed to run metagen")
}

/// Run `metagen` and assert it exited successfully. Returns stdout.
pub fn metagen_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_metagen(dir, args);
    assert!(
        output.status.success(),
        "metagen {:?} exited with {}: stderr={}",
        args,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("metagen output was not valid UTF-8")
}

/// Parse `dir/name` and return its `metadata` object.
pub fn read_metadata(dir: &Path, name: &str) -> serde_json::Map<String, serde_json::Value> {
    let text = std::fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("failed to read {name}: {e}"));
    let mut doc: serde_json::Value =
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("{name} is not JSON: {e}"));
    match doc.get_mut("metadata").map(serde_json::Value::take) {
        Some(serde_json::Value::Object(m)) => m,
        other => panic!("{name} has no metadata object: {other:?}"),
    }
}

/// Keys of a metadata object, in file order.
pub fn keys(m: &serde_json::Map<String, serde_json::Value>) -> Vec<&str> {
    m.keys().map(String::as_str).collect()
}

/// Assert `value` is a list of 0–3 integers in 0..=9.
pub fn assert_label_list(key: &str, value: &serde_json::Value) {
    let list = value
        .as_array()
        .unwrap_or_else(|| panic!("{key}: expected array, got {value}"));
    assert!(list.len() <= 3, "{key}: too many labels: {value}");
    for v in list {
        let n = v
            .as_u64()
            .unwrap_or_else(|| panic!("{key}: expected integer, got {v}"));
        assert!(n <= 9, "{key}: label out of range: {n}");
    }
}

/// Assert `value` is a 2-element list of floats in [0, 1).
pub fn assert_point(key: &str, value: &serde_json::Value) {
    let list = value
        .as_array()
        .unwrap_or_else(|| panic!("{key}: expected array, got {value}"));
    assert_eq!(list.len(), 2, "{key}: expected [x, y], got {value}");
    for v in list {
        let f = v
            .as_f64()
            .unwrap_or_else(|| panic!("{key}: expected number, got {v}"));
        assert!((0.0..1.0).contains(&f), "{key}: coordinate out of range: {f}");
    }
}
