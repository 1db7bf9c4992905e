use super::*;

#[test]
fn test_app_error_status_codes() {
    assert_eq!(AppError::Unauthorized("test".into()).status_code(), 401);
    assert_eq!(AppError::NotFound("test".into()).status_code(), 404);
    assert_eq!(AppError::Validation(vec![]).status_code(), 400);
    assert_eq!(AppError::Conflict("test".into()).status_code(), 409);
    assert_eq!(AppError::Database("test".into()).status_code(), 500);
    assert_eq!(AppError::Internal("test".into()).status_code(), 500);
}

#[test]
fn test_app_error_error_codes() {
    assert_eq!(
        AppError::Unauthorized("test".into()).error_code(),
        "unauthorized"
    );
    assert_eq!(AppError::NotFound("test".into()).error_code(), "not_found");
    assert_eq!(
        AppError::Validation(vec![]).error_code(),
        "validation_failed"
    );
    assert_eq!(AppError::Conflict("test".into()).error_code(), "conflict");
    assert_eq!(
        AppError::Database("test".into()).error_code(),
        "database_error"
    );
    assert_eq!(
        AppError::Internal("test".into()).error_code(),
        "internal_error"
    );
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::Unauthorized("msg".into())),
        "Authentication failed: msg"
    );
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Conflict("msg".into())),
        "Conflict: msg"
    );
    assert_eq!(
        format!("{}", AppError::Database("msg".into())),
        "Database error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_validation_display_lists_every_field() {
    let err = AppError::Validation(vec![
        FieldError::new("value", "must be positive"),
        FieldError::new("date", "must be YYYY-MM-DD"),
    ]);

    assert_eq!(
        err.to_string(),
        "Validation error: value: must be positive; date: must be YYYY-MM-DD"
    );
}

#[test]
fn test_invalid_field_shorthand() {
    let err = AppError::invalid_field("status", "unknown status");
    match err {
        AppError::Validation(fields) => {
            assert_eq!(fields, vec![FieldError::new("status", "unknown status")]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_server_error_classification() {
    assert!(AppError::Database("x".into()).is_server_error());
    assert!(AppError::Internal("x".into()).is_server_error());
    assert!(!AppError::NotFound("x".into()).is_server_error());
    assert!(!AppError::Unauthorized("x".into()).is_server_error());
}
