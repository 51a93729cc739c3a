//! Session state tests
//!
//! The gate is polymorphic over an explicit session value; nothing of the
//! app renders until one exists.

use likeit_console_web::auth::{sign_in, SessionState, SignInError};
use rstest::rstest;

#[rstest]
fn test_default_session_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
}

#[rstest]
fn test_sign_in_requires_username() {
    let result = sign_in("", "hunter2");
    assert_eq!(result.unwrap_err(), SignInError::MissingUsername);

    let result = sign_in("   ", "hunter2");
    assert_eq!(result.unwrap_err(), SignInError::MissingUsername);
}

#[rstest]
fn test_sign_in_requires_password() {
    let result = sign_in("ada", "");
    assert_eq!(result.unwrap_err(), SignInError::MissingPassword);
}

#[rstest]
fn test_sign_in_establishes_a_session() {
    let session = sign_in("  ada  ", "hunter2").expect("credentials present");
    assert_eq!(session.username, "ada");

    let state = SessionState::Authenticated(session);
    assert!(state.is_authenticated());
}
