//! Render the sorted collection as one exported TypeScript constant.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::chain::ChainRecord;
use crate::CompileError;

/// Write `export const sortedChainData = [...]` to `target_dir/filename`,
/// creating or fully overwriting the file. The array is pretty-printed with
/// two-space indentation. Returns the full output path.
pub fn write_chain_module(
    records: &[ChainRecord],
    target_dir: &Path,
    filename: &str,
) -> Result<PathBuf, CompileError> {
    let json = serde_json::to_string_pretty(records).map_err(CompileError::Serialize)?;
    let module = format!("export const sortedChainData = {json};\n");
    let target = target_dir.join(filename);
    fs::write(&target, module).map_err(CompileError::Write)?;
    Ok(target)
}
