use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SEVERITIES: [&str; 5] = ["system", "success", "warning", "error", "info"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScriptCommand {
    command: String,
    delay_ms: u64,
    severity: String,
    #[serde(default)]
    output: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BootScriptFile {
    schema_version: u32,
    #[serde(default)]
    command: Vec<ScriptCommand>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("boot_sequence.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let script: BootScriptFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if script.schema_version != 1 {
        panic!(
            "boot script schema mismatch in {}: expected 1 found {}",
            path.display(),
            script.schema_version
        );
    }
    for (index, entry) in script.command.iter().enumerate() {
        if entry.command.trim().is_empty() {
            panic!("boot script command #{index} in {} is empty", path.display());
        }
        if !SEVERITIES.contains(&entry.severity.as_str()) {
            panic!(
                "boot script command #{index} in {} has unknown severity `{}`",
                path.display(),
                entry.severity
            );
        }
    }

    let json = serde_json::to_string_pretty(&script.command).expect("serialize boot script");
    let generated = format!(
        "/// Build-time generated boot script JSON.\n\
pub const BOOT_SCRIPT_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("boot_script_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
