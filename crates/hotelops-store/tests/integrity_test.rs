// Integration tests for referential integrity checks

mod common;

use common::seeded_client;
use hotelops_core::model::RoomRef;
use hotelops_core::ExErrorKind;
use hotelops_store::integrity::{self, Reference};

#[test]
fn test_existing_references_pass() {
    let client = seeded_client();
    for reference in [
        Reference::Hotel(1),
        Reference::Room(RoomRef::new(1, 101)),
        Reference::Company(7),
        Reference::Staff(600),
    ] {
        assert!(integrity::exists(&client, reference).unwrap(), "{:?}", reference);
        integrity::require(&client, reference).unwrap();
    }
}

#[test]
fn test_room_must_belong_to_hotel() {
    let client = seeded_client();
    // room 201 exists, but at hotel 2
    let err = integrity::require(&client, Reference::Room(RoomRef::new(1, 201))).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("Room"));
    assert_eq!(err.entity_id(), Some("1/201"));
}

#[test]
fn test_missing_hotel_message() {
    let client = seeded_client();
    let err = integrity::require(&client, Reference::Hotel(99)).unwrap_err();
    assert_eq!(err.message(), "Hotel id: 99 not found");
}

#[test]
fn test_role_of() {
    let client = seeded_client();
    assert_eq!(integrity::role_of(&client, 500).unwrap().as_deref(), Some("Manager"));
    assert_eq!(integrity::role_of(&client, 42).unwrap(), None);
}

#[test]
fn test_require_manager() {
    let client = seeded_client();
    integrity::require_manager(&client, 500).unwrap();

    let denied = integrity::require_manager(&client, 600).unwrap_err();
    assert_eq!(denied.kind(), ExErrorKind::RoleDenied);
    assert!(denied.message().starts_with("Only managers can raise a repair request"));

    let missing = integrity::require_manager(&client, 42).unwrap_err();
    assert_eq!(missing.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_role_match_is_exact() {
    let client = seeded_client();
    client
        .connection()
        .execute(
            "INSERT INTO Staff (SSN, fName, lName, role, employerID)
             VALUES (700, 'Lower', 'Case', 'manager', 1)",
            [],
        )
        .unwrap();
    let err = integrity::require_manager(&client, 700).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::RoleDenied);
}
