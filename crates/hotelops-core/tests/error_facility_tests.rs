use hotelops_core::errors::{ExError, ExErrorKind, HotelOpsError};

#[test]
fn test_hotel_not_found_maps_to_not_found_kind() {
    let ex_err: ExError = HotelOpsError::HotelNotFound { hotel_id: 9 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity(), Some("Hotel"));
    assert_eq!(ex_err.entity_id(), Some("9"));
    assert_eq!(ex_err.message(), "Hotel id: 9 not found");
}

#[test]
fn test_room_not_found_carries_composite_key() {
    let ex_err: ExError = HotelOpsError::RoomNotFound {
        hotel_id: 1,
        room_no: 101,
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity(), Some("Room"));
    assert_eq!(ex_err.entity_id(), Some("1/101"));
}

#[test]
fn test_role_denied_is_distinct_from_not_found() {
    let ex_err: ExError = HotelOpsError::RoleDenied {
        ssn: 77,
        role: "Cleaner".to_string(),
        required: "Manager".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::RoleDenied);
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_ROLE_DENIED");
    assert!(ex_err.message().contains("Only managers"));
    assert!(ex_err.message().contains("Cleaner"));
}

#[test]
fn test_customer_not_found_uses_full_name() {
    let ex_err: ExError = HotelOpsError::CustomerNotFound {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
    .into();

    assert_eq!(ex_err.entity_id(), Some("Ada Lovelace"));
}

#[test]
fn test_input_closed_kind() {
    let ex_err: ExError = HotelOpsError::InputClosed.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InputClosed);
}

#[test]
fn test_io_error_converts_through_domain_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let domain: HotelOpsError = io.into();
    let ex_err: ExError = domain.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert!(ex_err.message().contains("pipe closed"));
}

#[test]
fn test_builder_context_round_trips() {
    let err = ExError::new(ExErrorKind::Statement)
        .with_op("add_booking")
        .with_entity("Booking")
        .with_entity_id("3")
        .with_message("FOREIGN KEY constraint failed");

    assert_eq!(err.op(), Some("add_booking"));
    assert_eq!(err.entity(), Some("Booking"));
    assert_eq!(err.entity_id(), Some("3"));
    assert_eq!(err.message(), "FOREIGN KEY constraint failed");
    assert!(err.request_id().is_none());
}
