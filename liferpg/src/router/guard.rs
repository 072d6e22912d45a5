//! Navigation guard: the sole route-level authorization point.

use std::sync::Arc;

use crate::api::AuthApi;
use crate::client::RpgClient;
use crate::error::{Error, Result};
use crate::session::Session;

use super::{resolve, Route, ADMIN_ROOT, APP_ROOT, APP_TITLE, LOGIN_PATH, ROUTES};

/// Guard verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Commit the navigation.
    Allow,
    /// Abandon the attempt and navigate to the given path instead.
    Redirect(String),
}

/// Result of evaluating one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Canonical path of the attempted target (after static redirects).
    pub path: String,
    /// Document title for the attempted target.
    pub title: String,
    pub decision: Decision,
}

impl Navigation {
    fn allow(path: &str, title: String) -> Self {
        Self {
            path: path.to_owned(),
            title,
            decision: Decision::Allow,
        }
    }

    fn redirect(path: &str, title: String, to: &str) -> Self {
        Self {
            path: path.to_owned(),
            title,
            decision: Decision::Redirect(to.to_owned()),
        }
    }
}

/// Router: evaluates every navigation against the session before commit.
///
/// Individual pages perform no further checks. The guard also lazily
/// hydrates the session (profile, then menus) on the first authenticated
/// navigation.
pub struct Router {
    session: Arc<Session>,
    auth: AuthApi,
}

impl Router {
    /// Create a router sharing the client's session.
    pub fn new(client: &RpgClient) -> Self {
        Self {
            session: client.session().clone(),
            auth: client.auth(),
        }
    }

    /// The declared page tree.
    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    /// Evaluate one navigation attempt.
    ///
    /// Mirrors the per-navigation state machine: title first, then the
    /// public branch, then authentication, hydration and authorization.
    pub async fn before_each(&self, to: &str) -> Navigation {
        let (path, route) = resolve(to);
        let title = document_title(route.meta.title);

        // public targets; a logged-in user hitting the login page is sent
        // to their home
        if !route.meta.requires_auth {
            if path == LOGIN_PATH && self.session.is_logged_in() {
                let home = if self.session.is_admin() {
                    ADMIN_ROOT
                } else {
                    APP_ROOT
                };
                return Navigation::redirect(path, title, resolve(home).0);
            }
            return Navigation::allow(path, title);
        }

        if !self.session.is_logged_in() {
            return Navigation::redirect(path, title, LOGIN_PATH);
        }

        // first authenticated navigation: hydrate profile, then menus.
        // A profile fetch failure is the one place a stale persisted
        // token is detected and purged.
        if self.session.user_info().is_none() {
            if self.auth.fetch_user_info().await.is_err() {
                return Navigation::redirect(path, title, LOGIN_PATH);
            }
            let _ = self.auth.fetch_menus().await;
        }

        if route.meta.requires_admin && !self.session.is_admin() {
            return Navigation::redirect(path, title, resolve(APP_ROOT).0);
        }

        Navigation::allow(path, title)
    }

    /// Evaluate a target and follow guard redirects to a terminal allow.
    pub async fn navigate(&self, to: &str) -> Result<Navigation> {
        let mut target = to.to_owned();

        // the guard's redirect graph is tiny; anything deeper is a bug
        for _ in 0..8 {
            let navigation = self.before_each(&target).await;
            match navigation.decision {
                Decision::Allow => return Ok(navigation),
                Decision::Redirect(ref next) => target = next.clone(),
            }
        }

        Err(Error::InvalidArgument(format!("redirect loop at {target}")))
    }
}

/// Document title for a route: `"<title> - Life RPG"`, or the bare app
/// title when the route has none.
pub(crate) fn document_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{title} - {APP_TITLE}"),
        None => APP_TITLE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserInfo};
    use crate::session::MemoryTokenStorage;
    use pretty_assertions::assert_eq;

    fn profile(role_key: &str) -> UserInfo {
        UserInfo {
            id: 1,
            username: "tester".into(),
            role: Some(Role {
                key: role_key.into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    async fn router_with(token: &str, role_key: Option<&str>) -> Router {
        let session = Arc::new(Session::new(Arc::new(MemoryTokenStorage::new())));
        if let Some(key) = role_key {
            session.establish(token, profile(key)).await;
        }
        let client = RpgClient::builder().session(session).build().unwrap();
        Router::new(&client)
    }

    #[tokio::test]
    async fn test_anonymous_to_protected_redirects_to_login() {
        let router = router_with("", None).await;
        let nav = router.before_each("/admin/dashboard").await;
        assert_eq!(nav.decision, Decision::Redirect("/login".into()));
        assert_eq!(nav.title, "仪表盘 - Life RPG");
    }

    #[tokio::test]
    async fn test_anonymous_to_login_allowed() {
        let router = router_with("", None).await;
        let nav = router.before_each("/login").await;
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.title, "Life RPG");
    }

    #[tokio::test]
    async fn test_logged_in_admin_leaves_login_for_admin_root() {
        let router = router_with("abc", Some("admin")).await;
        let nav = router.before_each("/login").await;
        assert_eq!(nav.decision, Decision::Redirect("/admin/dashboard".into()));
    }

    #[tokio::test]
    async fn test_logged_in_user_leaves_login_for_app_root() {
        let router = router_with("abc", Some("user")).await;
        let nav = router.before_each("/login").await;
        assert_eq!(nav.decision, Decision::Redirect("/app/home".into()));
    }

    #[tokio::test]
    async fn test_admin_path_allowed_for_admin() {
        let router = router_with("abc", Some("admin")).await;
        let nav = router.before_each("/admin/dashboard").await;
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.title, "仪表盘 - Life RPG");
    }

    #[tokio::test]
    async fn test_admin_path_bounces_non_admin_to_app_home() {
        let router = router_with("abc", Some("user")).await;
        let nav = router.before_each("/admin/system/user").await;
        assert_eq!(nav.decision, Decision::Redirect("/app/home".into()));
    }

    #[tokio::test]
    async fn test_app_path_allowed_for_non_admin() {
        let router = router_with("abc", Some("user")).await;
        let nav = router.before_each("/app/quest").await;
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.title, "任务大厅 - Life RPG");
    }

    #[tokio::test]
    async fn test_navigate_follows_redirect_chain() {
        let router = router_with("abc", Some("user")).await;
        // "/" → "/login" → app home for a logged-in non-admin
        let nav = router.navigate("/").await.unwrap();
        assert_eq!(nav.path, "/app/home");
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.title, "首页 - Life RPG");
    }

    #[tokio::test]
    async fn test_anonymous_unknown_path_redirects_to_login() {
        let router = router_with("", None).await;
        let nav = router.before_each("/no/such/page").await;
        assert_eq!(nav.decision, Decision::Redirect("/login".into()));
        assert_eq!(nav.title, "Life RPG");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(Some("商店")), "商店 - Life RPG");
        assert_eq!(document_title(None), "Life RPG");
    }
}
