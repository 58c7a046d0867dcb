//! Compile per-chain JSON descriptor files into one sorted data module.
//!
//! Reads a directory of chain descriptors (one JSON document per network),
//! keeps the ones carrying a usable `name` + `chainId` pair, sorts them by
//! chain id and writes a single `export const sortedChainData = [...]` module
//! for the app's in-memory chain lookup. One pass, no state between runs.

pub mod config;
pub mod data;
pub mod emit;

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::data::collect::collect_chain_records;
use crate::data::validate::sort_and_check;
use crate::emit::write_chain_module;

#[derive(Debug)]
pub enum CompileError {
    Scan(std::io::Error),
    Read(std::io::Error),
    CountMismatch { expected: usize, found: usize },
    Serialize(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(err) => write!(f, "failed to list descriptor directory: {err}"),
            Self::Read(err) => write!(f, "failed to read descriptor file: {err}"),
            Self::CountMismatch { expected, found } => write!(
                f,
                "chain length has changed: expected {expected} descriptors, found {found}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize chain data: {err}"),
            Self::Write(err) => write!(f, "failed to write chain module: {err}"),
        }
    }
}

/// Run the whole pipeline: collect descriptors from `config.json_dir`, sort
/// and count-check them, then write the module into `config.target_dir`.
/// Nothing is written unless the count check passes. Returns the full path
/// of the emitted file.
pub fn compile(config: &Config) -> Result<PathBuf, CompileError> {
    let records = collect_chain_records(&config.json_dir)?;
    let sorted = sort_and_check(records, config.expected_count)?;
    write_chain_module(&sorted, &config.target_dir, &config.output_filename)
}
