use memory_bank::{Category, MemoryItem, MemoryValue};

#[test]
fn test_memory_item_creation() {
    let value = MemoryValue::new("Morning pages", &["write 3 pages".to_string()]).unwrap();
    let item = MemoryItem::new(value);

    assert_eq!(item.value.description, "Morning pages");
    assert_eq!(item.value.details, vec!["write 3 pages"]);
}

#[test]
fn test_memory_item_ids_are_unique() {
    let a = MemoryItem::new(MemoryValue::new("a", &[]).unwrap());
    let b = MemoryItem::new(MemoryValue::new("a", &[]).unwrap());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_memory_item_serialization() {
    let value = MemoryValue::new("Networking", &["reached out to two people".to_string()]).unwrap();
    let item = MemoryItem::new(value);

    let serialized = serde_json::to_string(&item).unwrap();
    let deserialized: MemoryItem = serde_json::from_str(&serialized).unwrap();

    assert_eq!(deserialized, item);
    // Timestamp travels as an ISO-8601 string.
    let iso = item
        .timestamp
        .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true);
    assert!(serialized.contains(&iso));
}

#[test]
fn test_category_round_trip() {
    for category in Category::DISPLAY_ORDER {
        let json = serde_json::to_string(&category).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}
