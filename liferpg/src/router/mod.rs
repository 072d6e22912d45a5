//! Route tree and navigation guard.

mod guard;

pub use guard::{Decision, Navigation, Router};

/// Base document title.
pub const APP_TITLE: &str = "Life RPG";

/// Public login page.
pub const LOGIN_PATH: &str = "/login";
/// Admin console root (redirects to the dashboard).
pub const ADMIN_ROOT: &str = "/admin";
/// Mobile app root (redirects to home).
pub const APP_ROOT: &str = "/app";

/// Per-route metadata consulted by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only routes explicitly marked public skip the auth branch.
    pub requires_auth: bool,
    pub requires_admin: bool,
    /// Page title; `None` falls back to [`APP_TITLE`].
    pub title: Option<&'static str>,
}

/// A declared page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// Catch-all for unknown paths. Its meta is unset in the page tree, which
/// falls through to the authenticated branch of the guard.
pub const NOT_FOUND: Route = Route {
    path: "",
    name: "NotFound",
    meta: RouteMeta {
        requires_auth: true,
        requires_admin: false,
        title: None,
    },
};

const fn public(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        meta: RouteMeta {
            requires_auth: false,
            requires_admin: false,
            title: None,
        },
    }
}

const fn admin(path: &'static str, name: &'static str, title: &'static str) -> Route {
    Route {
        path,
        name,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: true,
            title: Some(title),
        },
    }
}

const fn app(path: &'static str, name: &'static str, title: &'static str) -> Route {
    Route {
        path,
        name,
        meta: RouteMeta {
            requires_auth: true,
            requires_admin: false,
            title: Some(title),
        },
    }
}

/// The page tree: one public entry, the admin console subtree and the
/// mobile app subtree.
pub const ROUTES: &[Route] = &[
    public(LOGIN_PATH, "Login"),
    // admin console
    admin("/admin/dashboard", "Dashboard", "仪表盘"),
    admin("/admin/system/user", "SystemUser", "用户管理"),
    admin("/admin/system/role", "SystemRole", "角色管理"),
    admin("/admin/system/menu", "SystemMenu", "菜单管理"),
    admin("/admin/game/task", "GameTask", "任务管理"),
    admin("/admin/game/reward", "GameReward", "奖励管理"),
    admin("/admin/announcement", "Announcement", "公告管理"),
    admin("/admin/theme", "Theme", "H5主题配置"),
    // mobile app
    app("/app/home", "AppHome", "首页"),
    app("/app/quest", "AppQuest", "任务大厅"),
    app("/app/shop", "AppShop", "商店"),
    app("/app/profile", "AppProfile", "我的"),
];

/// Static redirects, applied before the guard sees a target.
pub const REDIRECTS: &[(&str, &str)] = &[
    ("/", LOGIN_PATH),
    (ADMIN_ROOT, "/admin/dashboard"),
    (APP_ROOT, "/app/home"),
];

/// Normalize a raw target: strip query/fragment and a trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Resolve a target path: follow static redirects, then match a route.
///
/// Returns the canonical path and the matched route; unknown paths fall
/// back to [`NOT_FOUND`].
pub fn resolve(path: &str) -> (&str, Route) {
    let mut current = normalize(path);

    // the redirect table is acyclic, one pass per entry suffices
    for _ in 0..REDIRECTS.len() {
        match REDIRECTS.iter().find(|(from, _)| *from == current) {
            Some((_, to)) => current = to,
            None => break,
        }
    }

    match ROUTES.iter().find(|r| r.path == current) {
        Some(route) => (route.path, *route),
        None => (normalize(path), NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        let (path, route) = resolve("/admin/dashboard");
        assert_eq!(path, "/admin/dashboard");
        assert_eq!(route.name, "Dashboard");
        assert!(route.meta.requires_admin);
    }

    #[test]
    fn test_resolve_redirects() {
        assert_eq!(resolve("/").0, "/login");
        assert_eq!(resolve("/admin").0, "/admin/dashboard");
        assert_eq!(resolve("/app").0, "/app/home");
    }

    #[test]
    fn test_resolve_normalizes() {
        assert_eq!(resolve("/app/home/").0, "/app/home");
        assert_eq!(resolve("/app/quest?tab=daily").0, "/app/quest");
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let (path, route) = resolve("/does/not/exist");
        assert_eq!(path, "/does/not/exist");
        assert_eq!(route.name, "NotFound");
        // unset meta falls through to the authenticated branch
        assert!(route.meta.requires_auth);
        assert!(!route.meta.requires_admin);
    }

    #[test]
    fn test_login_is_public() {
        let (_, route) = resolve("/login");
        assert!(!route.meta.requires_auth);
    }

    #[test]
    fn test_subtrees_are_disjoint() {
        for route in ROUTES {
            if route.path.starts_with("/admin/") {
                assert!(route.meta.requires_admin, "{} must be admin-only", route.path);
            }
            if route.path.starts_with("/app/") {
                assert!(!route.meta.requires_admin, "{} must not be admin-only", route.path);
                assert!(route.meta.requires_auth, "{} must require auth", route.path);
            }
        }
    }
}
