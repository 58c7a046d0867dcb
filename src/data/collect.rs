//! Scan the descriptor directory and keep every usable `{name, chainId}`
//! pair. Files that are not valid JSON are skipped with a stderr
//! diagnostic; files that parse but fail the field checks are skipped
//! quietly.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::data::chain::ChainRecord;
use crate::CompileError;

/// Collect records from every `*.json` file directly inside `dir`. The
/// extension match is exact (no `.JSON`), the scan is non-recursive, and
/// files are visited in name order so diagnostics and tie ordering are
/// deterministic run to run. Listing or read failures abort the run;
/// malformed content only costs the one file.
pub fn collect_chain_records(dir: &Path) -> Result<Vec<ChainRecord>, CompileError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(CompileError::Scan)? {
        let entry = entry.map_err(CompileError::Scan)?;
        let path = entry.path();
        if path.extension().map_or(false, |e| e == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let content = fs::read_to_string(&path).map_err(CompileError::Read)?;
        match serde_json::from_str::<Value>(&content) {
            Ok(doc) => {
                if let Some(record) = ChainRecord::from_value(&doc) {
                    records.push(record);
                }
            }
            Err(err) => {
                eprintln!("failed to parse JSON in file: {} - {}", path.display(), err);
            }
        }
    }
    Ok(records)
}
