use imu_ops::Key;
use imu_store::{Entity, EntityId, Error};
use serde_json::json;

// ── Entity ───────────────────────────────────────────────────────

#[test]
fn from_value_accepts_objects() {
    let e = Entity::from_value(json!({"id": 1, "name": "Walter"})).unwrap();
    assert_eq!(e.get("name"), Some(&json!("Walter")));
    assert_eq!(e.fields().len(), 2);
}

#[test]
fn from_value_rejects_non_objects() {
    let err = Entity::from_value(json!([1])).unwrap_err();
    assert!(matches!(err, Error::NotAnObject("array")));
    assert!(Entity::try_from(json!("x")).is_err());
}

#[test]
fn id_absent_or_null_is_none() {
    assert_eq!(Entity::new().id(), None);
    let e = Entity::from_value(json!({"id": null})).unwrap();
    assert_eq!(e.id(), None);
    assert_eq!(e.key(), None);
}

#[test]
fn key_normalizes_id() {
    let e = Entity::new().with_id(42);
    assert_eq!(e.key(), Some(Key::from("42")));
}

#[test]
fn with_id_overwrites() {
    let e = Entity::new().with_id(1).with_id("two");
    assert_eq!(e.id(), Some(&json!("two")));
}

#[test]
fn pointer_helpers() {
    let e = Entity::from_value(json!({
        "firstName": "Donald",
        "age": 35,
        "bowling": {"team": "Lebowski", "average": 180.5}
    }))
    .unwrap();
    assert_eq!(e.get_str("/firstName"), Some("Donald"));
    assert_eq!(e.get_str("/bowling/team"), Some("Lebowski"));
    assert_eq!(e.get_number("/age"), Some(35.0));
    assert_eq!(e.get_number("/bowling/average"), Some(180.5));
    assert_eq!(e.get_str("/age"), None);
    assert_eq!(e.get_str("/missing"), None);
    assert_eq!(e.get_str("firstName"), None);
}

#[test]
fn pointer_decodes_escaped_top_level_keys() {
    let e = Entity::from_value(json!({
        "a/b": "slash",
        "t~x": "tilde",
        "~1": "literal",
        "nested/key": {"in~side": 3}
    }))
    .unwrap();
    assert_eq!(e.get_str("/a~1b"), Some("slash"));
    assert_eq!(e.get_str("/t~0x"), Some("tilde"));
    assert_eq!(e.get_str("/~01"), Some("literal"));
    assert_eq!(e.get_number("/nested~1key/in~0side"), Some(3.0));
    assert_eq!(e.get_str("/a/b"), None);
}

#[test]
fn serializes_as_plain_object() {
    let e = Entity::new().with_id(7).with("firstName", "Maude");
    assert_eq!(e.clone().into_value(), json!({"id": 7, "firstName": "Maude"}));
    let parsed: Entity = serde_json::from_value(json!({"id": 7, "firstName": "Maude"})).unwrap();
    assert_eq!(parsed, e);
}

// ── EntityId ─────────────────────────────────────────────────────

#[test]
fn entity_id_new_is_unique() {
    assert_ne!(EntityId::new(), EntityId::new());
}

#[test]
fn entity_id_is_v4() {
    let s = EntityId::new().to_string();
    assert_eq!(s.as_bytes()[14], b'4');
    assert!(matches!(s.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
}

#[test]
fn entity_id_display_is_lowercase_hyphenated() {
    let s = EntityId::new().to_string();
    assert_eq!(s.len(), 36);
    assert_eq!(s.matches('-').count(), 4);
    assert!(s.chars().all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn entity_id_into_json_string() {
    let id = EntityId::new();
    assert_eq!(serde_json::Value::from(id), json!(id.to_string()));
}
