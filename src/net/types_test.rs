use super::*;
use serde_json::json;

// =============================================================
// Column
// =============================================================

#[test]
fn column_label_prefers_arabic_name() {
    let column = Column::new("Date").localized("التاريخ");
    assert_eq!(column.label(), "التاريخ");
}

#[test]
fn column_label_falls_back_to_english() {
    assert_eq!(Column::new("ID").label(), "ID");
}

#[test]
fn column_label_ignores_empty_arabic_name() {
    assert_eq!(Column::new("Status").localized("").label(), "Status");
}

#[test]
fn column_deserializes_camel_case_and_optional_arabic() {
    let columns: Vec<Column> = serde_json::from_value(json!([
        { "englishName": "ID" },
        { "englishName": "Date", "arabicName": "التاريخ" }
    ]))
    .unwrap();
    assert_eq!(columns, vec![Column::new("ID"), Column::new("Date").localized("التاريخ")]);
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_counter_treats_null_as_absent() {
    let stats = decode_stats(json!({ "totalOrders": 12, "todayOrders": null })).unwrap();
    assert_eq!(stats.counter(Counter::TotalOrders), Some(&json!(12)));
    assert_eq!(stats.counter(Counter::TodayOrders), None);
    assert_eq!(stats.counter(Counter::PendingOrders), None);
}

#[test]
fn counter_keys_match_payload_names() {
    let keys: Vec<_> = Counter::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(keys, ["totalOrders", "todayOrders", "pendingOrders", "confirmedOrders"]);
    for (i, counter) in Counter::ALL.iter().enumerate() {
        assert_eq!(counter.index(), i);
    }
}

#[test]
fn decode_stats_rejects_non_object() {
    let err = decode_stats(json!([1, 2, 3])).unwrap_err();
    assert!(err.is_parse());
}

// =============================================================
// Orders / columns decoding
// =============================================================

#[test]
fn decode_orders_unwraps_envelope_in_order() {
    let rows = decode_orders(json!({
        "orders": [ { "ID": 2 }, { "ID": 1 } ],
        "total": 2
    }))
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("ID"), Some(&json!(2)));
    assert_eq!(rows[1].get("ID"), Some(&json!(1)));
}

#[test]
fn decode_orders_requires_orders_member() {
    let err = decode_orders(json!({ "rows": [] })).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("GET orders"));
}

#[test]
fn decode_columns_rejects_object() {
    assert!(decode_columns(json!({ "englishName": "ID" })).unwrap_err().is_parse());
}

// =============================================================
// display_value
// =============================================================

#[test]
fn display_value_formats_scalars() {
    assert_eq!(display_value(&json!("abc")), "abc");
    assert_eq!(display_value(&json!(42)), "42");
    assert_eq!(display_value(&json!(1.5)), "1.5");
    assert_eq!(display_value(&json!(true)), "true");
    assert_eq!(display_value(&json!(null)), "");
}
