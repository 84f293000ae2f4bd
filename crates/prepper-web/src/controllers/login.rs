//! Login page and form submission.

use prepper_auth::application::login::{self, LoginOutcome};
use prepper_auth::domain::credentials::Credentials;
use prepper_core::error::DomainError;
use prepper_views::layout::Notice;
use prepper_views::login::login_view;

use crate::page::Page;
use crate::state::AppState;

/// The login form, showing the last failure once.
pub fn login_page(state: &AppState) -> Page {
    let error = state.session.take_login_error();
    Page::content("Login", login_view(error.as_deref()))
}

/// Submits the login form. Success goes to the front page; any failure
/// goes back to the form with a message.
pub async fn submit_login(state: &AppState, username: &str, password: &str) -> Page {
    let credentials = Credentials::new(username, password);
    let message = match login::login(state.auth.as_ref(), &state.tokens, &credentials).await {
        Ok(LoginOutcome::Authenticated) => {
            state
                .session
                .push_notice(Notice::success("Du er nu logget ind"));
            return Page::redirect("/");
        }
        Ok(LoginOutcome::Rejected(message)) => message,
        Err(DomainError::Validation(_)) => "Udfyld brugernavn og adgangskode".to_owned(),
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            "Login er ikke tilgængeligt lige nu. Prøv igen senere.".to_owned()
        }
    };
    state.session.set_login_error(message);
    Page::redirect("/login")
}
