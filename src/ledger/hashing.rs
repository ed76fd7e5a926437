use sha2::{Digest, Sha256};

use super::Block;

/// Canonical JSON form of a block: compact separators, field names
/// sorted lexicographically at every nesting level. Two blocks with
/// identical field values always produce identical bytes regardless
/// of construction order.
///
/// Routing the block through `serde_json::Value` is what gives the
/// sorted keys: the default `Map` is a `BTreeMap`, so object keys come
/// out ordered at every depth.
pub fn canonical_json(block: &Block) -> String {
    let value = serde_json::to_value(block).expect("block is always JSON-representable");
    serde_json::to_string(&value).expect("canonical value serializes")
}

/// SHA-256 of the canonical block bytes, as a lowercase 64-char hex
/// string. Pure; the only time-dependent input is the timestamp field
/// already embedded in the block.
pub fn digest(block: &Block) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_json(block).as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF, PreviousHash};
    use crate::transaction::Transaction;

    fn fixed_block(proof: u64, previous_hash: PreviousHash, txs: Vec<Transaction>) -> Block {
        Block {
            index: 2,
            timestamp: 1_700_000_000.25,
            transactions: txs,
            proof,
            previous_hash,
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let b = fixed_block(
            42,
            PreviousHash::Digest("abc".into()),
            vec![Transaction::new("alice", "bob", 5.0)],
        );
        assert_eq!(digest(&b), digest(&b));
        assert_eq!(digest(&b), digest(&b.clone()));
    }

    #[test]
    fn digest_is_64_hex_chars() {
        let b = fixed_block(42, PreviousHash::Digest("abc".into()), vec![]);
        let d = digest(&b);
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn genesis_sentinel_serializes_as_bare_integer() {
        let b = Block {
            index: 1,
            timestamp: 0.0,
            transactions: vec![],
            proof: GENESIS_PROOF,
            previous_hash: PreviousHash::Sentinel(GENESIS_PREVIOUS_HASH),
        };
        assert_eq!(
            canonical_json(&b),
            r#"{"index":1,"previous_hash":1,"proof":100,"timestamp":0.0,"transactions":[]}"#
        );
        // Pinned vector so the canonical encoding can never drift silently.
        assert_eq!(
            digest(&b),
            "96695d3c3de043d1c2fb23b449337d255df85d35875858f59ef67fd106857fd6"
        );
    }

    #[test]
    fn keys_are_sorted_at_every_nesting_level() {
        let b = Block {
            index: 2,
            timestamp: 0.0,
            transactions: vec![Transaction::new("alice", "bob", 5.0)],
            proof: 12345,
            previous_hash: PreviousHash::Digest(
                "00000048d6817634ba23bf017a747e65a715681753321ea19c19a0c5fa71dbaa".into(),
            ),
        };
        let json = canonical_json(&b);
        assert!(json.contains(r#"{"amount":5.0,"recipient":"bob","sender":"alice"}"#));
        assert_eq!(
            digest(&b),
            "04a832be42af021a2cead8188c912a26de5e7cc291d6c4eacfb046c7b6c7512c"
        );
    }

    #[test]
    fn digest_changes_when_any_field_changes() {
        let base = fixed_block(
            42,
            PreviousHash::Digest("abc".into()),
            vec![Transaction::new("alice", "bob", 5.0)],
        );
        let d0 = digest(&base);

        let mut b = base.clone();
        b.index = 3;
        assert_ne!(d0, digest(&b));

        let mut b = base.clone();
        b.timestamp += 0.000001;
        assert_ne!(d0, digest(&b));

        let mut b = base.clone();
        b.proof = 43;
        assert_ne!(d0, digest(&b));

        let mut b = base.clone();
        b.previous_hash = PreviousHash::Digest("abd".into());
        assert_ne!(d0, digest(&b));

        let mut b = base.clone();
        b.transactions[0].amount = 6.0;
        assert_ne!(d0, digest(&b));

        let mut b = base.clone();
        b.transactions.push(Transaction::new("carol", "dave", 1.0));
        assert_ne!(d0, digest(&b));
    }
}
