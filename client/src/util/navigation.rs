//! Session-aware navigation helpers shared by the root app and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page's logo returns home, and several buttons record the page the
//! member was last on. Routing these through one place keeps the stored
//! session record and the reactive login flag in step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, HOME_PAGE, SessionState};
use crate::util::browser::now_ms;

/// Write (or clear) the stored session and update the context flag.
///
/// `page` overrides the recorded page; without it the page is derived from
/// `current_path`.
pub fn save_session(session: RwSignal<SessionState>, logged_in: bool, page: Option<&str>, current_path: &str) {
    session::persist(logged_in, page, current_path, now_ms());
    session.set(SessionState { logged_in });
}

/// Navigate to the landing page, recording `home` as the last page when logged in.
pub fn go_home<F>(session: RwSignal<SessionState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if session.get_untracked().logged_in {
        save_session(session, true, Some(HOME_PAGE), "/");
    }
    navigate("/", NavigateOptions::default());
}

/// Restore the stored session whenever the route changes, resuming the
/// dashboard when the member left from there.
pub fn install_session_restore<P, F>(session: RwSignal<SessionState>, pathname: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname();
        let Some(record) = session::restore(now_ms()) else {
            return;
        };
        if !session.get_untracked().logged_in {
            session.set(SessionState { logged_in: true });
        }
        if session::should_resume_dashboard(&record, &path) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}
