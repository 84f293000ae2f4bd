//! Logout.

use prepper_auth::application::login;
use prepper_views::layout::Notice;

use crate::page::Page;
use crate::state::AppState;

/// Forgets the session token and returns to the front page.
pub fn logout(state: &AppState) -> Page {
    match login::logout(&state.tokens) {
        Ok(()) => state.session.push_notice(Notice::success("Du er nu logget ud")),
        Err(e) => {
            tracing::error!(error = %e, "failed to remove auth token");
            state
                .session
                .push_notice(Notice::error("Du kunne ikke logges ud. Prøv igen."));
        }
    }
    Page::redirect("/")
}
