//! User-facing notification surface.

/// Default user-facing messages, matching what the backend speaks.
pub mod messages {
    /// Fallback when a business failure carries no message.
    pub const REQUEST_FAILED: &str = "请求失败";
    /// Shown when a 401 invalidates the session.
    pub const SESSION_EXPIRED: &str = "登录已过期，请重新登录";
    /// Shown on a 403.
    pub const PERMISSION_DENIED: &str = "权限不足";
    /// Fallback for other non-2xx statuses.
    pub const SERVER_ERROR: &str = "服务器错误";
    /// Shown when no response was received at all.
    pub const NETWORK_ERROR: &str = "网络错误，请检查网络连接";
}

/// Sink for transient error messages and forced navigation.
///
/// Calls are fire-and-forget: nothing is queued or acknowledged, and the
/// most recent message wins visually. Every transport or business failure
/// produces exactly one `error` call.
pub trait Notifier: Send + Sync {
    /// Show a transient error message.
    fn error(&self, message: &str);

    /// Force a full reload at the given path, discarding all in-memory
    /// state. Only the 401 handler uses this.
    fn force_redirect(&self, _path: &str) {}
}

/// Notifier that routes messages through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn force_redirect(&self, path: &str) {
        log::warn!("forced redirect to {path}");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Notifier;
    use std::sync::Mutex;

    /// Records every notification for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub errors: Mutex<Vec<String>>,
        pub redirects: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_owned());
        }

        fn force_redirect(&self, path: &str) {
            self.redirects.lock().unwrap().push(path.to_owned());
        }
    }
}
