//! Route Metadata & Guards
//!
//! Each route declares what it needs (`RouteMeta`); the guard is a pure
//! decision over that declaration and the current session, wrapped in a thin
//! component that redirects. The route table itself lives in `app.rs`.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::stores;

/// Per-route declaration consumed by the guard and the title effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: &'static str,
    pub requires_auth: bool,
    pub guest_only: bool,
}

impl RouteMeta {
    pub const fn public(title: &'static str) -> Self {
        Self {
            title,
            requires_auth: false,
            guest_only: false,
        }
    }

    pub const fn authenticated(title: &'static str) -> Self {
        Self {
            title,
            requires_auth: true,
            guest_only: false,
        }
    }

    pub const fn guest(title: &'static str) -> Self {
        Self {
            title,
            requires_auth: false,
            guest_only: true,
        }
    }
}

pub const HOME_META: RouteMeta = RouteMeta::public("首页");
pub const TODAY_META: RouteMeta = RouteMeta::public("今日精选");
pub const SEARCH_META: RouteMeta = RouteMeta::public("搜索");
pub const CATEGORIES_META: RouteMeta = RouteMeta::public("分类");
pub const ARTICLE_META: RouteMeta = RouteMeta::public("文章详情");
pub const LOGIN_META: RouteMeta = RouteMeta::guest("登录");
pub const REGISTER_META: RouteMeta = RouteMeta::guest("注册");
pub const PROFILE_META: RouteMeta = RouteMeta::authenticated("个人资料");
pub const ADMIN_META: RouteMeta = RouteMeta::authenticated("管理后台");
pub const NOT_FOUND_META: RouteMeta = RouteMeta::public("页面未找到");

/// Outcome of evaluating a navigation against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send to the login view, remembering where the user wanted to go.
    RedirectToLogin { return_to: String },
    /// Guest-only view while authenticated; go home instead.
    RedirectHome,
}

pub fn guard_decision(
    meta: &RouteMeta,
    is_authenticated: bool,
    requested_path: &str,
) -> GuardDecision {
    if meta.requires_auth && !is_authenticated {
        GuardDecision::RedirectToLogin {
            return_to: requested_path.to_string(),
        }
    } else if meta.guest_only && is_authenticated {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Allow
    }
}

/// Login path carrying the originally requested path as a query value.
pub fn login_redirect_path(return_to: &str) -> String {
    format!(
        "/login?redirect={}",
        utf8_percent_encode(return_to, NON_ALPHANUMERIC)
    )
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(&format!("{title} - AI 新闻"));
    }
}

/// Wraps a routed view: sets the document title, resolves a token-restored
/// session to a profile, and enforces the route's declared requirements.
#[component]
pub fn Guarded(meta: RouteMeta, children: ChildrenFn) -> impl IntoView {
    let auth = stores::use_auth_store();
    let location = use_location();
    set_document_title(meta.title);

    // A reload leaves a token with no profile; kick the fetch off before any
    // gated view settles. If the token is stale the fetch logs the session
    // out and the decision below re-evaluates reactively.
    Effect::new(move |_| {
        stores::resolve_session(auth);
    });

    move || {
        let decision = guard_decision(
            &meta,
            stores::is_authenticated(&auth),
            &location.pathname.get(),
        );
        match decision {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::RedirectToLogin { return_to } => {
                view! { <Redirect path=login_redirect_path(&return_to)/> }.into_any()
            }
            GuardDecision::RedirectHome => view! { <Redirect path="/"/> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_auth_redirects_anonymous_with_return_path() {
        let decision = guard_decision(&ADMIN_META, false, "/admin");
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                return_to: "/admin".to_string()
            }
        );
    }

    #[test]
    fn test_requires_auth_allows_authenticated() {
        assert_eq!(guard_decision(&ADMIN_META, true, "/admin"), GuardDecision::Allow);
    }

    #[test]
    fn test_guest_only_redirects_authenticated_home() {
        assert_eq!(
            guard_decision(&LOGIN_META, true, "/login"),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn test_guest_only_allows_anonymous() {
        assert_eq!(
            guard_decision(&LOGIN_META, false, "/login"),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_public_routes_always_allow() {
        assert_eq!(guard_decision(&HOME_META, false, "/"), GuardDecision::Allow);
        assert_eq!(guard_decision(&HOME_META, true, "/"), GuardDecision::Allow);
    }

    #[test]
    fn test_login_redirect_path_encodes_target() {
        assert_eq!(
            login_redirect_path("/article/15"),
            "/login?redirect=%2Farticle%2F15"
        );
    }
}
