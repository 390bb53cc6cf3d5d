use super::*;

fn identity() -> Identity {
    Identity {
        uid: "uid-1".into(),
        email: Some("an@example.edu".into()),
        display_name: Some("An".into()),
        photo_url: None,
        method: SignInMethod::Password,
        id_token: "id-token-secret".into(),
        refresh_token: "refresh-secret".into(),
    }
}

// =============================================================================
// Identity::label
// =============================================================================

#[test]
fn label_prefers_display_name() {
    assert_eq!(identity().label(), "An");
}

#[test]
fn label_falls_back_to_email_then_uid() {
    let mut user = identity();
    user.display_name = Some("  ".into());
    assert_eq!(user.label(), "an@example.edu");
    user.email = None;
    assert_eq!(user.label(), "uid-1");
}

#[test]
fn debug_redacts_tokens() {
    let debug = format!("{:?}", identity());
    assert!(debug.contains("uid-1"));
    assert!(!debug.contains("id-token-secret"));
    assert!(!debug.contains("refresh-secret"));
}

#[test]
fn identity_deserializes_without_tokens() {
    let json = r#"{"uid":"u","email":null,"display_name":null,"photo_url":null,"method":"google"}"#;
    let user: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(user.method, SignInMethod::Google);
    assert!(user.id_token.is_empty());
}

// =============================================================================
// AuthState
// =============================================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

// =============================================================================
// IdentityError display
// =============================================================================

#[test]
fn provider_error_displays_message_verbatim() {
    let err = IdentityError::Provider("EMAIL_EXISTS".into());
    assert_eq!(err.to_string(), "EMAIL_EXISTS");
}

#[test]
fn response_error_display_has_status() {
    let err = IdentityError::Response { status: 503, body: "down".into() };
    assert!(err.to_string().contains("503"));
}
