//! Route guarding.
//!
//! [`ProtectedRoute`] wraps routed page content and decides, on every render
//! pass, whether to show it or redirect. The decision itself lives in
//! [`evaluate`], a pure function over an explicit [`AuthSnapshot`], so the
//! contract is testable without mounting a context provider.

use crate::services::context::{AuthSnapshot, AuthState};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

/// Redirect target for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";
/// Redirect target for authenticated users without the admin role.
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the protected children.
    Render,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// Decides what a guarded route should do. Checks run in order, first match
/// wins: missing token, then missing admin role, then render.
///
/// Token presence is the only authentication signal at this layer; an empty
/// string counts as absent. The admin flag is consulted only for admin-only
/// routes, and only when a token exists.
pub fn evaluate(auth: &AuthSnapshot, admin_page: bool) -> GuardDecision {
    if auth.token.as_deref().is_none_or(str::is_empty) {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if admin_page && !auth.is_admin {
        return GuardDecision::Redirect(ACCESS_DENIED_PATH);
    }
    GuardDecision::Render
}

/// Gate for routed content. Renders `children` when access is granted,
/// otherwise replaces the current history entry with the redirect target.
///
/// A missing auth context is treated as an anonymous session rather than a
/// bug, so the outcome stays the conservative one: redirect to login.
#[component]
pub fn ProtectedRoute(children: Element, #[props(default)] admin_page: bool) -> Element {
    let nav = use_navigator();
    let snapshot =
        try_consume_context::<AuthState>().map_or_else(AuthSnapshot::anonymous, |auth| auth.snapshot());

    match evaluate(&snapshot, admin_page) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(path) => {
            nav.replace(path);
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(token: Option<&str>, is_admin: bool) -> AuthSnapshot {
        AuthSnapshot {
            token: token.map(str::to_string),
            is_admin,
        }
    }

    #[test]
    fn missing_token_always_redirects_to_login() {
        for admin_page in [false, true] {
            for is_admin in [false, true] {
                assert_eq!(
                    evaluate(&snapshot(None, is_admin), admin_page),
                    GuardDecision::Redirect(LOGIN_PATH),
                );
            }
        }
    }

    #[test]
    fn empty_token_counts_as_absent() {
        assert_eq!(
            evaluate(&snapshot(Some(""), true), true),
            GuardDecision::Redirect(LOGIN_PATH),
        );
        assert_eq!(
            evaluate(&snapshot(Some(""), false), false),
            GuardDecision::Redirect(LOGIN_PATH),
        );
    }

    #[test]
    fn authenticated_user_reaches_regular_pages() {
        for is_admin in [false, true] {
            assert_eq!(
                evaluate(&snapshot(Some("abc"), is_admin), false),
                GuardDecision::Render,
            );
        }
    }

    #[test]
    fn admin_page_rejects_non_admins() {
        assert_eq!(
            evaluate(&snapshot(Some("abc"), false), true),
            GuardDecision::Redirect(ACCESS_DENIED_PATH),
        );
    }

    #[test]
    fn admin_page_admits_admins() {
        assert_eq!(
            evaluate(&snapshot(Some("abc"), true), true),
            GuardDecision::Render,
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let auth = snapshot(Some("abc"), false);
        assert_eq!(evaluate(&auth, true), evaluate(&auth, true));
        assert_eq!(evaluate(&auth, false), evaluate(&auth, false));

        let anonymous = snapshot(None, false);
        assert_eq!(evaluate(&anonymous, false), evaluate(&anonymous, false));
    }

    #[test]
    fn anonymous_fallback_redirects_to_login() {
        assert_eq!(
            evaluate(&AuthSnapshot::anonymous(), false),
            GuardDecision::Redirect(LOGIN_PATH),
        );
    }
}
