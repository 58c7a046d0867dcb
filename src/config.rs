//! Run configuration, resolved once at startup and passed to each stage.
//!
//! `JSON_dir` and `target_dirPath` keep their historical names from the build
//! scripts that invoke this tool. Both must be set explicitly; the "."
//! fallback is always rejected.

use std::env;
use std::path::PathBuf;

/// Name of the emitted module. Downstream imports reference it verbatim.
pub const OUTPUT_FILENAME: &str = "chainId-const.ts";

/// Descriptor count the input set is currently pinned to. Bump when networks
/// are added or retired upstream; any other drift aborts the run.
pub const EXPECTED_CHAIN_COUNT: usize = 1897;

pub const JSON_DIR_VAR: &str = "JSON_dir";
pub const TARGET_DIR_VAR: &str = "target_dirPath";

const UNSET_DIR: &str = ".";

#[derive(Debug, Clone)]
pub struct Config {
    pub json_dir: PathBuf,
    pub target_dir: PathBuf,
    pub output_filename: String,
    pub expected_count: usize,
}

impl Config {
    /// Resolve from the process environment. Fails when either directory
    /// variable is missing or left at the "." default, before any I/O.
    pub fn from_env() -> Result<Config, String> {
        let json_dir = env::var(JSON_DIR_VAR).unwrap_or_else(|_| UNSET_DIR.to_string());
        let target_dir = env::var(TARGET_DIR_VAR).unwrap_or_else(|_| UNSET_DIR.to_string());

        if json_dir == UNSET_DIR || target_dir == UNSET_DIR {
            return Err(format!(
                "unexpected JSON input dir or target dir: set {JSON_DIR_VAR} and {TARGET_DIR_VAR} to explicit paths"
            ));
        }

        Ok(Config {
            json_dir: PathBuf::from(json_dir),
            target_dir: PathBuf::from(target_dir),
            output_filename: OUTPUT_FILENAME.to_string(),
            expected_count: EXPECTED_CHAIN_COUNT,
        })
    }
}
