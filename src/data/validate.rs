//! Ordering and the pinned descriptor-count check.

use crate::data::chain::ChainRecord;
use crate::CompileError;

/// Sort ascending by chain id and require the pinned descriptor count.
///
/// A mismatch means the input set drifted (files added, removed or newly
/// unparseable) and aborts the run before any output is written. The sort
/// is stable, so records sharing a chain id keep their file-name scan order.
pub fn sort_and_check(
    mut records: Vec<ChainRecord>,
    expected: usize,
) -> Result<Vec<ChainRecord>, CompileError> {
    records.sort_by_key(|record| record.chain_id);
    if records.len() != expected {
        return Err(CompileError::CountMismatch {
            expected,
            found: records.len(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, chain_id: i64) -> ChainRecord {
        ChainRecord {
            name: name.to_string(),
            chain_id,
        }
    }

    #[test]
    fn sorts_ascending_by_chain_id() {
        let records = vec![record("c", 137), record("a", 1), record("b", 56)];
        let sorted = sort_and_check(records, 3).expect("count matches");
        let ids: Vec<i64> = sorted.iter().map(|r| r.chain_id).collect();
        assert_eq!(ids, vec![1, 56, 137]);
    }

    #[test]
    fn ties_keep_their_incoming_order() {
        let records = vec![record("first", 5), record("second", 5), record("zero", 1)];
        let sorted = sort_and_check(records, 3).expect("count matches");
        assert_eq!(sorted[1].name, "first");
        assert_eq!(sorted[2].name, "second");
    }

    #[test]
    fn count_mismatch_reports_expected_and_found() {
        let records = vec![record("a", 1), record("b", 2)];
        let err = sort_and_check(records, 3).expect_err("count is off by one");
        match err {
            CompileError::CountMismatch { expected, found } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        let records = vec![record("a", 1), record("b", 2), record("c", 3), record("d", 4)];
        assert!(sort_and_check(records, 3).is_err());
    }
}
