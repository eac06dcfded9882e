use super::*;

#[test]
fn test_parse_trims_tag() {
    let id = AssetId::parse("  LAP-0042 ").unwrap();
    assert_eq!(id.as_str(), "LAP-0042");
    assert_eq!(id.to_string(), "LAP-0042");
}

#[test]
fn test_parse_rejects_blank() {
    assert!(AssetId::parse("").is_none());
    assert!(AssetId::parse("   ").is_none());
}

#[test]
fn test_generated_ids_are_unique_uuids() {
    let a = AssetId::generate();
    let b = AssetId::generate();
    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
}

#[test]
fn test_asset_id_serde_transparent() {
    let id = AssetId::parse("PRN-7").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"PRN-7\"");

    let back: AssetId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
