use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

const REFERENCE_LOCALE: &str = "en";

fn flatten(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&path, v, out);
            }
        }
        _ => {
            out.insert(prefix.to_string());
        }
    }
}

fn catalog_keys(path: &Path) -> BTreeSet<String> {
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("couldn't read {}: {e}", path.display()));
    let value: Value = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("couldn't parse {}: {e}", path.display()));
    let mut keys = BTreeSet::new();
    flatten("", &value, &mut keys);
    keys
}

fn main() {
    // Every locale catalog must define exactly the keys of the reference catalog
    println!("cargo:rerun-if-changed=messages");
    println!("cargo:rerun-if-changed=build.rs");

    let dir = Path::new("messages");
    let reference = catalog_keys(&dir.join(format!("{REFERENCE_LOCALE}.json")));

    let mut problems = Vec::new();
    let entries = fs::read_dir(dir).expect("messages directory should exist");
    for entry in entries {
        let path = entry.expect("should be able to read messages entry").path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let keys = catalog_keys(&path);
        for missing in reference.difference(&keys) {
            problems.push(format!("{}: missing key {missing}", path.display()));
        }
        for extra in keys.difference(&reference) {
            problems.push(format!("{}: key {extra} not in {REFERENCE_LOCALE}.json", path.display()));
        }
    }

    if !problems.is_empty() {
        panic!("message catalogs are out of sync:\n{}", problems.join("\n"));
    }
}
