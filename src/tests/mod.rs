use std::process::Command;
use std::sync::{Mutex, MutexGuard};


// Tests that read or write process environment variables take this lock so
// they do not interleave.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Collect a command's argument vector for assertions.
pub fn argv(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
