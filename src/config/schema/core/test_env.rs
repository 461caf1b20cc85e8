//! Env-var fixtures for the `LINKSCANNER_*` override tests. The process
//! environment is global to the test binary, so every test touching these
//! variables holds `ENV_LOCK` for its whole body.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

pub(super) const OVERRIDE_VARS: [&str; 3] = [
    "LINKSCANNER_FIX_WWW",
    "LINKSCANNER_PROTOCOLS",
    "LINKSCANNER_FORMAT",
];

pub(super) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Take `ENV_LOCK`, surviving a previous test that panicked while holding it.
pub(super) fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores one variable to its prior value on drop.
pub(super) struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub(super) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub(super) fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: ENV_LOCK is still held by the enclosing test.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Clear every override so a test starts from file/default values only.
/// Guards declared after this one drop first, so the originals come back last.
pub(super) fn clear_overrides() -> Vec<EnvVarGuard> {
    OVERRIDE_VARS.into_iter().map(EnvVarGuard::unset).collect()
}
