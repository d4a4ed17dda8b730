use super::*;
use crate::net::error::ApiError;

fn healthy_view() -> LoginView {
    let mut view = LoginView::default();
    view.apply_health(HealthState { status: HealthStatus::Ok, message: messages::HEALTH_OK.to_owned() });
    view
}

fn with_credentials(mut view: LoginView, username: &str, password: &str) -> LoginView {
    view.credentials.set(Field::Username, username.to_owned());
    view.credentials.set(Field::Password, password.to_owned());
    view
}

fn user(role: Option<&str>, email: Option<&str>) -> User {
    User { id: 42, username: "ana".to_owned(), role: role.map(str::to_owned), email: email.map(str::to_owned) }
}

// =============================================================
// Health gating
// =============================================================

#[test]
fn submit_while_checking_is_blocked() {
    let mut view = with_credentials(LoginView::default(), "ana", "pw");
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error.as_deref(), Some(messages::API_UNAVAILABLE));
    assert!(!view.loading);
}

#[test]
fn submit_while_unhealthy_is_blocked() {
    let mut view = LoginView::default();
    view.apply_health(HealthState { status: HealthStatus::Error, message: "down".to_owned() });
    let mut view = with_credentials(view, "ana", "pw");
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error.as_deref(), Some(messages::API_UNAVAILABLE));
}

#[test]
fn health_is_applied_only_once() {
    let mut view = healthy_view();
    view.apply_health(HealthState { status: HealthStatus::Error, message: "late".to_owned() });
    assert_eq!(view.health.status, HealthStatus::Ok);
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn empty_username_is_rejected() {
    let mut view = with_credentials(healthy_view(), "", "pw");
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error.as_deref(), Some(messages::CREDENTIALS_REQUIRED));
    assert!(!view.loading);
}

#[test]
fn whitespace_username_is_rejected() {
    let mut view = with_credentials(healthy_view(), "   \t", "pw");
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error.as_deref(), Some(messages::CREDENTIALS_REQUIRED));
}

#[test]
fn empty_password_is_rejected() {
    let mut view = with_credentials(healthy_view(), "ana", "");
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error.as_deref(), Some(messages::CREDENTIALS_REQUIRED));
}

#[test]
fn whitespace_password_is_sent_as_typed() {
    let mut view = with_credentials(healthy_view(), "  ana ", "  ");
    let attempt = view.begin_submit().unwrap();
    assert_eq!(attempt, LoginAttempt { username: "ana".to_owned(), password: "  ".to_owned() });
}

#[test]
fn valid_submit_sets_loading_and_clears_error() {
    let mut view = with_credentials(healthy_view(), "ana", "pw");
    view.error = Some("old".to_owned());
    assert!(view.begin_submit().is_some());
    assert!(view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.submit_label(), messages::SUBMIT_BUSY);
}

#[test]
fn submit_while_loading_is_ignored() {
    let mut view = with_credentials(healthy_view(), "ana", "pw");
    assert!(view.begin_submit().is_some());
    assert_eq!(view.begin_submit(), None);
    assert_eq!(view.error, None);
    assert!(view.loading);
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_stores_user_and_releases_form() {
    let mut view = with_credentials(healthy_view(), "ana", "pw");
    view.begin_submit();
    view.finish_submit(Ok(LoginResponse { user: user(Some("admin"), None) }));
    assert_eq!(view.user, Some(user(Some("admin"), None)));
    assert_eq!(view.error, None);
    assert!(!view.loading);
    assert_eq!(view.submit_label(), messages::SUBMIT_IDLE);
}

#[test]
fn api_failure_shows_message_and_clears_user() {
    let mut view = with_credentials(healthy_view(), "ana", "pw");
    view.user = Some(user(None, None));
    view.begin_submit();
    view.finish_submit(Err(ClientError::Api(ApiError { status: 401, message: "Credenciales inválidas".to_owned() })));
    assert_eq!(view.user, None);
    assert_eq!(view.error.as_deref(), Some("Credenciales inválidas"));
    assert!(!view.loading);
}

#[test]
fn unexpected_failure_shows_generic_message() {
    let mut view = with_credentials(healthy_view(), "ana", "pw");
    view.begin_submit();
    view.finish_submit(Err(ClientError::Decode("missing field `user`".to_owned())));
    assert_eq!(view.error.as_deref(), Some(messages::UNEXPECTED_ERROR));
    assert!(!view.loading);
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn feedback_empty_by_default() {
    assert_eq!(LoginView::default().feedback(), Feedback::Empty);
}

#[test]
fn feedback_error_hides_welcome_card() {
    let mut view = healthy_view();
    view.user = Some(user(None, None));
    view.error = Some(messages::CREDENTIALS_REQUIRED.to_owned());
    assert_eq!(view.feedback(), Feedback::Error(messages::CREDENTIALS_REQUIRED));
}

#[test]
fn welcome_card_shows_role_and_email() {
    let card = WelcomeCard::for_user(&user(Some("vendedor"), Some("ana@vivero.test")));
    assert_eq!(card.heading, "¡Bienvenido, ana!");
    assert_eq!(card.role, "Rol: vendedor");
    assert_eq!(card.email.as_deref(), Some("Email: ana@vivero.test"));
}

#[test]
fn welcome_card_without_role_or_email() {
    let card = WelcomeCard::for_user(&user(None, None));
    assert_eq!(card.role, "Rol: Sin rol");
    assert_eq!(card.email, None);
}

#[test]
fn welcome_card_omits_empty_email() {
    let card = WelcomeCard::for_user(&user(None, Some("")));
    assert_eq!(card.email, None);
}
