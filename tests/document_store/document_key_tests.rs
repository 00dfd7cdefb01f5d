use kidtrack_gateway::document_store::domain::model::value_objects::{
    collection_name::CollectionName,
    document_key::{DocumentKey, is_valid_path_segment},
};

#[test]
fn generated_keys_are_twenty_alphanumerics() {
    let key = DocumentKey::generate();

    assert_eq!(key.value().len(), 20);
    assert!(key.value().chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(key, DocumentKey::generate());
}

#[test]
fn keys_must_be_a_single_path_segment() {
    assert!(DocumentKey::new("v1").is_ok());
    assert!(DocumentKey::new("bus 12").is_ok());
    assert!(DocumentKey::new("").is_err());
    assert!(DocumentKey::new("a/b").is_err());
    assert!(DocumentKey::new(".").is_err());
    assert!(DocumentKey::new("..").is_err());
    assert!(DocumentKey::new("x".repeat(1501)).is_err());
}

#[test]
fn collection_names_follow_the_same_rules() {
    assert_eq!(CollectionName::new("bookings").expect("valid").value(), "bookings");
    assert!(CollectionName::new("bookings/extra").is_err());
    assert!(!is_valid_path_segment(""));
}
