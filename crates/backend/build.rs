//! Copies the workspace `config.toml` next to the backend binary, where
//! `shared::config::load_config` looks for it.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("config.toml");

    if source_config.exists() {
        if let Err(e) = fs::copy(&source_config, target_dir.join("config.toml")) {
            println!("cargo:warning=Failed to copy config.toml: {}", e);
        }
    } else {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
    }
}
