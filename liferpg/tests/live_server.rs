//! End-to-end tests against an in-process stub of the backend.

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use serde_json::{json, Value};

use liferpg::{
    Decision, MemoryTokenStorage, Notifier, RpgClient, Session, TokenStorage, Router as RpgRouter,
};

const TOKEN: &str = "tok-1";
/// Valid token whose menu endpoint is broken, for degrade-gracefully tests.
const MENULESS_TOKEN: &str = "tok-menuless";

/// Notifier that records every call for assertions.
#[derive(Debug, Default)]
struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    redirects: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_owned());
    }

    fn force_redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_owned());
    }
}

fn ok(data: Value) -> Response {
    Json(json!({"code": 0, "message": "success", "data": data})).into_response()
}

fn business_error(code: i64, message: &str) -> Response {
    Json(json!({"code": code, "message": message, "data": null})).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"code": 401, "message": "unauthorized", "data": null})),
    )
        .into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn admin_user() -> Value {
    json!({
        "id": 1,
        "username": "admin",
        "nickname": "管理员",
        "avatar": "",
        "roleId": 1,
        "role": {"id": 1, "name": "管理员", "key": "admin", "sort": 0, "status": 1, "remark": ""},
        "gold": 100,
        "exp": 50,
        "level": 2,
        "status": 1
    })
}

async fn handle_login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" {
        ok(json!({"token": TOKEN, "userInfo": admin_user()}))
    } else {
        business_error(1001, "用户名或密码错误")
    }
}

async fn handle_user_info(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(TOKEN | MENULESS_TOKEN) => ok(admin_user()),
        _ => unauthorized(),
    }
}

async fn handle_menus(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(MENULESS_TOKEN) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"code": -1, "message": "菜单服务不可用", "data": null})),
        )
            .into_response(),
        Some(TOKEN) => ok(json!([{
            "id": 1, "parentId": 0, "name": "dashboard", "path": "/admin/dashboard",
            "component": "Dashboard", "icon": "odometer", "sort": 1, "type": 2,
            "permission": "", "visible": 1, "status": 1, "children": null
        }])),
        _ => unauthorized(),
    }
}

async fn handle_user_list(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(TOKEN) => ok(json!({
            "list": [admin_user()],
            "total": 1,
            "page": 1,
            "pageSize": 10
        })),
        _ => unauthorized(),
    }
}

async fn handle_announcement_feed() -> Response {
    // gorm serializes an empty result set as null
    ok(json!(null))
}

async fn handle_task_complete(Path(id): Path<u64>) -> Response {
    ok(json!({
        "goldReward": 10,
        "expReward": 5,
        "newGold": 110,
        "newExp": 55,
        "newLevel": 2,
        "levelUp": false,
        "taskId": id
    }))
}

async fn spawn_server() -> String {
    let app = axum::Router::new()
        .route("/api/auth/login", post(handle_login))
        .route("/api/auth/info", get(handle_user_info))
        .route("/api/auth/menus", get(handle_menus))
        .route("/api/users", get(handle_user_list))
        .route("/api/app/announcements", get(handle_announcement_feed))
        .route("/api/app/tasks/{id}/complete", post(handle_task_complete));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    format!("http://{addr}/api")
}

struct Harness {
    client: RpgClient,
    storage: Arc<MemoryTokenStorage>,
    notifier: Arc<RecordingNotifier>,
}

async fn harness(stored_token: Option<&str>) -> Harness {
    let base_url = spawn_server().await;
    let storage = Arc::new(match stored_token {
        Some(token) => MemoryTokenStorage::with_token(token),
        None => MemoryTokenStorage::new(),
    });
    let session = Arc::new(Session::restore(storage.clone()).await);
    let notifier = Arc::new(RecordingNotifier::default());

    let client = RpgClient::builder()
        .base_url(base_url)
        .session(session)
        .notifier(notifier.clone())
        .build()
        .expect("client build failed");

    Harness {
        client,
        storage,
        notifier,
    }
}

#[tokio::test]
async fn test_login_populates_and_persists_session() {
    let h = harness(None).await;
    assert!(!h.client.is_logged_in());

    let response = h
        .client
        .auth()
        .login("admin", "secret")
        .await
        .expect("login failed");

    assert_eq!(response.token, TOKEN);
    assert!(h.client.is_logged_in());

    let session = h.client.session();
    assert_eq!(session.token(), TOKEN);
    assert_eq!(session.username(), "admin");
    assert!(session.is_admin());
    assert_eq!(session.gold(), 100);

    // token survives a restart
    assert_eq!(h.storage.load().await, Some(TOKEN.to_owned()));
}

#[tokio::test]
async fn test_login_rejection_notifies_and_leaves_session_empty() {
    let h = harness(None).await;

    let err = h
        .client
        .auth()
        .login("admin", "wrong")
        .await
        .expect_err("login should be rejected");

    assert_eq!(err.message(), Some("用户名或密码错误"));
    assert!(!h.client.is_logged_in());
    assert_eq!(h.storage.load().await, None);
    assert_eq!(
        h.notifier.errors.lock().unwrap().as_slice(),
        ["用户名或密码错误"]
    );
}

#[tokio::test]
async fn test_user_list_unwraps_page_envelope() {
    let h = harness(Some(TOKEN)).await;

    let page = h
        .client
        .users()
        .list()
        .page(1)
        .send()
        .await
        .expect("list failed");

    assert_eq!(page.total, 1);
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].username, "admin");
}

#[tokio::test]
async fn test_null_list_payload_becomes_empty() {
    let h = harness(Some(TOKEN)).await;

    let feed = h
        .client
        .announcements()
        .feed()
        .await
        .expect("feed failed");

    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_expired_token_clears_session_and_redirects() {
    let h = harness(Some("stale")).await;
    assert!(h.client.is_logged_in());

    let err = h
        .client
        .users()
        .list()
        .send()
        .await
        .expect_err("stale token should be rejected");

    assert!(err.is_auth_error());
    assert!(!h.client.is_logged_in());
    assert_eq!(h.storage.load().await, None);
    assert_eq!(
        h.notifier.errors.lock().unwrap().as_slice(),
        ["登录已过期，请重新登录"]
    );
    assert_eq!(h.notifier.redirects.lock().unwrap().as_slice(), ["/login"]);
}

#[tokio::test]
async fn test_task_completion_updates_session_stats() {
    let h = harness(None).await;
    h.client
        .auth()
        .login("admin", "secret")
        .await
        .expect("login failed");

    let outcome = h.client.tasks().complete(5).await.expect("complete failed");

    assert_eq!(outcome.gold_reward, 10);
    assert_eq!(outcome.new_gold, 110);

    let session = h.client.session();
    assert_eq!(session.gold(), 110);
    assert_eq!(session.exp(), 55);
    assert_eq!(session.level(), 2);
}

#[tokio::test]
async fn test_guard_hydrates_profile_and_menus_on_first_navigation() {
    let h = harness(Some(TOKEN)).await;
    let session = h.client.session().clone();
    assert!(session.user_info().is_none());

    let router = RpgRouter::new(&h.client);
    let nav = router.before_each("/admin/dashboard").await;

    assert_eq!(nav.decision, Decision::Allow);
    assert_eq!(nav.title, "仪表盘 - Life RPG");
    assert!(session.is_admin());
    assert_eq!(session.menus().len(), 1);
}

#[tokio::test]
async fn test_menu_failure_is_swallowed_and_keeps_session() {
    let h = harness(Some(MENULESS_TOKEN)).await;

    let router = RpgRouter::new(&h.client);
    let nav = router.before_each("/app/home").await;

    // the profile loaded, the broken menu endpoint only degrades the menus
    assert_eq!(nav.decision, Decision::Allow);
    assert!(h.client.is_logged_in());
    let session = h.client.session();
    assert!(session.user_info().is_some());
    assert!(session.menus().is_empty());
    assert_eq!(h.storage.load().await, Some(MENULESS_TOKEN.to_owned()));
}

#[tokio::test]
async fn test_guard_purges_stale_token_on_failed_hydration() {
    let h = harness(Some("stale")).await;

    let router = RpgRouter::new(&h.client);
    let nav = router.before_each("/app/home").await;

    assert_eq!(nav.decision, Decision::Redirect("/login".into()));
    assert!(!h.client.is_logged_in());
    assert_eq!(h.storage.load().await, None);
}
