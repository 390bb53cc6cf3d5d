use super::*;

#[test]
fn required_trims() {
    assert_eq!(required("title", "  Học ngành CNTT  "), Ok("Học ngành CNTT".to_owned()));
}

#[test]
fn required_rejects_blank() {
    assert_eq!(required("title", ""), Err(ServiceError::Empty { field: "title" }));
    assert_eq!(required("body", " \n\t "), Err(ServiceError::Empty { field: "body" }));
}

#[test]
fn new_ids_differ() {
    assert_ne!(new_id(), new_id());
}

#[test]
fn error_display() {
    assert_eq!(ServiceError::Empty { field: "name" }.to_string(), "name must not be empty");
    let err = not_found("topic", Uuid::nil());
    assert!(err.to_string().contains("topic"));
    assert!(err.to_string().contains("00000000-0000-0000-0000-000000000000"));
}
