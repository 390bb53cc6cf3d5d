use safespace::store::MemoryStore;

use super::*;

// =============================================================================
// error output
// =============================================================================

#[test]
fn provider_error_displays_verbatim() {
    let message = "WEAK_PASSWORD : Password should be at least 6 characters";
    let err = CliError::from(IdentityError::Provider(message.to_owned()));
    assert_eq!(err.to_string(), message);
}

#[test]
fn not_signed_in_names_login_route() {
    let err = CliError::NotSignedIn(views::Route::Login.path());
    assert_eq!(err.to_string(), "not signed in; continue at /login");
}

#[test]
fn service_error_displays_its_message() {
    let err = CliError::from(ServiceError::Empty { field: "text" });
    assert_eq!(err.to_string(), "text must not be empty");
}

// =============================================================================
// question numbers
// =============================================================================

#[test]
fn question_numbers_are_one_based() {
    assert_eq!(question_index(1), Ok(0));
    assert_eq!(question_index(QUESTIONS.len()), Ok(QUESTIONS.len() - 1));
}

#[test]
fn question_zero_is_out_of_range() {
    assert_eq!(
        question_index(0),
        Err(ServiceError::OutOfRange { field: "questions", index: 0, len: 6 })
    );
}

#[test]
fn question_past_last_is_out_of_range() {
    assert_eq!(
        question_index(7),
        Err(ServiceError::OutOfRange { field: "questions", index: 7, len: 6 })
    );
}

// =============================================================================
// command routing
// =============================================================================

#[test]
fn feature_commands_parse_as_gated() {
    let cli = Cli::try_parse_from(["safespace", "feed", "list"]).unwrap();
    assert!(matches!(cli.command, Command::Gated(GatedCommand::Feed(_))));

    let cli = Cli::try_parse_from(["safespace", "quiz", "submit", "1,3"]).unwrap();
    match cli.command {
        Command::Gated(GatedCommand::Quiz(QuizCommand {
            command: QuizSubcommand::Submit { checked },
        })) => assert_eq!(checked, vec![1, 3]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn account_commands_parse_ungated() {
    let cli = Cli::try_parse_from(["safespace", "screen", "chán sống"]).unwrap();
    assert!(matches!(cli.command, Command::Screen { .. }));
    let cli = Cli::try_parse_from(["safespace", "whoami"]).unwrap();
    assert!(matches!(cli.command, Command::Whoami));
}

// =============================================================================
// provider fallback
// =============================================================================

#[tokio::test]
async fn missing_firebase_config_refuses_sign_in() {
    let mut session = AuthSession::new(provider(None), Arc::new(MemoryStore::new()));
    session.restore();
    let err = session.sign_in("an@example.edu", "secret1").await.unwrap_err();
    assert!(matches!(err, IdentityError::NotConfigured));
    assert!(matches!(require_user(&session), Err(CliError::NotSignedIn("/login"))));
}

#[tokio::test]
async fn sign_out_without_provider_still_succeeds() {
    let mut session = AuthSession::new(provider(None), Arc::new(MemoryStore::new()));
    session.restore();
    session.sign_out().await.unwrap();
    assert!(session.current().is_none());
}
