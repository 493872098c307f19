//! Proptest generators for property-based testing.

use proptest::prelude::*;

use lostfound_core::{Payload, PayloadValue, ReportEntry, ReportKind};

/// Generate a ReportKind.
pub fn report_kind() -> impl Strategy<Value = ReportKind> {
    prop_oneof![Just(ReportKind::Lost), Just(ReportKind::Found)]
}

/// Generate text that exercises the escaping rules: ASCII, control
/// characters, quotes, backslashes, BMP and astral code points.
pub fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,24}",
        "[a-z\"\\\\\n\t\u{7f}]{0,12}",
        any::<String>(),
    ]
}

/// Generate a payload value.
pub fn payload_value() -> impl Strategy<Value = PayloadValue> {
    prop_oneof![
        Just(PayloadValue::Null),
        any::<bool>().prop_map(PayloadValue::Bool),
        any::<i64>().prop_map(PayloadValue::Int),
        text().prop_map(PayloadValue::Text),
    ]
}

/// Generate a payload with up to `max_keys` keys.
pub fn payload(max_keys: usize) -> impl Strategy<Value = Payload> {
    prop::collection::btree_map("[a-z_]{1,12}", payload_value(), 0..=max_keys)
        .prop_map(|map| map.into_iter().collect())
}

/// Generate a report submission entry.
pub fn report_entry() -> impl Strategy<Value = ReportEntry> {
    (
        1u64..=10_000,
        report_kind(),
        proptest::option::of(text()),
        proptest::option::of("(BUS|TRAIN|METRO)00[1-4]"),
    )
        .prop_map(|(id, kind, item_name, vehicle_id)| ReportEntry {
            report_id: id,
            report_type: kind,
            item_name,
            vehicle_id,
            timestamp: "2025-01-15 10:00:00".to_string(),
            extra: Default::default(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lostfound_core::{canonical_payload_json, is_chain_valid, Block, PreviousHash};
    use lostfound_ledger::{Ledger, LedgerConfig, SteppingTimeSource};

    fn stepping_ledger() -> Ledger {
        Ledger::with_time_source(
            LedgerConfig::default(),
            Arc::new(SteppingTimeSource::new(
                crate::fixtures::epoch(),
                chrono::TimeDelta::seconds(1),
            )),
        )
    }

    proptest! {
        #[test]
        fn test_block_hash_deterministic(
            index in 0u64..1000,
            ts in "[0-9: -]{0,26}",
            data in payload(8),
        ) {
            let a = Block::new(index, ts.clone(), data.clone(), PreviousHash::Genesis);
            let b = Block::new(index, ts, data, PreviousHash::Genesis);
            prop_assert_eq!(a.hash(), b.hash());
        }

        #[test]
        fn test_insertion_order_irrelevant(data in payload(10)) {
            let reversed: Payload = data
                .iter()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            prop_assert_eq!(canonical_payload_json(&data), canonical_payload_json(&reversed));
        }

        #[test]
        fn test_canonical_output_is_ascii(data in payload(6)) {
            let json = canonical_payload_json(&data);
            prop_assert!(json.bytes().all(|b| (0x20..=0x7e).contains(&b)));
        }

        #[test]
        fn test_canonical_output_is_valid_json(data in payload(6)) {
            let json = canonical_payload_json(&data);
            let parsed: Payload = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, data);
        }

        #[test]
        fn test_appends_are_monotonic_and_linked(
            entries in prop::collection::vec(report_entry(), 1..12),
        ) {
            let ledger = stepping_ledger();
            for (i, entry) in entries.iter().enumerate() {
                let receipt = ledger.append_report(entry);
                prop_assert_eq!(receipt.index, i as u64 + 1);
            }

            let blocks = ledger.blocks();
            prop_assert_eq!(blocks.len(), entries.len() + 1);
            for pair in blocks.windows(2) {
                prop_assert_eq!(pair[1].index(), pair[0].index() + 1);
                prop_assert!(pair[1].previous_hash().links_to(pair[0].hash()));
            }
            prop_assert!(ledger.is_valid());
        }

        #[test]
        fn test_any_payload_edit_is_detected(
            entries in prop::collection::vec(report_entry(), 1..8),
            pick in any::<prop::sample::Index>(),
            value in payload_value(),
        ) {
            let ledger = stepping_ledger();
            for entry in &entries {
                ledger.append_report(entry);
            }

            let mut blocks = ledger.blocks();
            let target = 1 + pick.index(entries.len());
            let original = blocks[target].clone();
            let mut edited = original.payload().clone();
            edited.insert("item_name", value);
            prop_assume!(&edited != original.payload());

            blocks[target] = Block::from_parts(
                original.index(),
                original.timestamp(),
                edited,
                *original.previous_hash(),
                *original.hash(),
            );
            prop_assert!(!is_chain_valid(&blocks));
        }

        #[test]
        fn test_any_hash_edit_is_detected(
            entries in prop::collection::vec(report_entry(), 1..8),
            pick in any::<prop::sample::Index>(),
            forged in any::<[u8; 32]>(),
        ) {
            let ledger = stepping_ledger();
            for entry in &entries {
                ledger.append_report(entry);
            }

            let mut blocks = ledger.blocks();
            let target = 1 + pick.index(entries.len());
            let original = blocks[target].clone();
            prop_assume!(original.hash().as_bytes() != &forged);

            blocks[target] = Block::from_parts(
                original.index(),
                original.timestamp(),
                original.payload().clone(),
                *original.previous_hash(),
                forged.into(),
            );
            prop_assert!(!is_chain_valid(&blocks));
        }

        #[test]
        fn test_report_entry_payload_roundtrip(entry in report_entry()) {
            let parsed = ReportEntry::from_payload(&entry.to_payload()).unwrap();
            prop_assert_eq!(parsed, entry);
        }
    }
}
