//! One chain descriptor: the `name` + `chainId` pair kept from each input
//! file. Everything else in the upstream documents is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of one blockchain network, exactly as it appears in the emitted
/// module. `chainId` keeps its wire spelling there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub name: String,
    #[serde(rename = "chainId")]
    pub chain_id: i64,
}

impl ChainRecord {
    /// Extract a record from one parsed descriptor document. Returns `None`
    /// when `name` is missing, not a string or empty, or when `chainId` is
    /// missing or not an integer. Such documents are skipped without a
    /// diagnostic.
    pub fn from_value(value: &Value) -> Option<ChainRecord> {
        let name = value.get("name").and_then(Value::as_str)?;
        if name.is_empty() {
            return None;
        }
        let chain_id = value.get("chainId").and_then(Value::as_i64)?;
        Some(ChainRecord {
            name: name.to_string(),
            chain_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_name_and_chain_id() {
        let doc = json!({"name": "Ethereum Mainnet", "chainId": 1, "rpc": ["https://x"]});
        let record = ChainRecord::from_value(&doc).expect("descriptor should be usable");
        assert_eq!(record.name, "Ethereum Mainnet");
        assert_eq!(record.chain_id, 1);
    }

    #[test]
    fn rejects_missing_or_non_integer_chain_id() {
        assert_eq!(ChainRecord::from_value(&json!({"name": "Gamma"})), None);
        assert_eq!(
            ChainRecord::from_value(&json!({"name": "Gamma", "chainId": "5"})),
            None
        );
        assert_eq!(
            ChainRecord::from_value(&json!({"name": "Gamma", "chainId": 5.5})),
            None
        );
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        assert_eq!(ChainRecord::from_value(&json!({"chainId": 7})), None);
        assert_eq!(
            ChainRecord::from_value(&json!({"name": "", "chainId": 7})),
            None
        );
        assert_eq!(
            ChainRecord::from_value(&json!({"name": 7, "chainId": 7})),
            None
        );
    }

    #[test]
    fn serializes_with_wire_field_name() {
        let record = ChainRecord {
            name: "Beta".to_string(),
            chain_id: 1,
        };
        let payload = serde_json::to_string(&record).expect("record should serialize");
        assert_eq!(payload, "{\"name\":\"Beta\",\"chainId\":1}");
    }
}
