//! Advisory pid lock next to the ideas file.
//!
//! Mutating commands hold `<store>.lock` for their whole run so two shells
//! cannot interleave full-file rewrites. Read-only commands never lock.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Removes the lock file when dropped.
#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// `ideas_db.json` → `ideas_db.json.lock`.
#[must_use]
pub fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut name = store_path
        .file_name()
        .map_or_else(|| OsString::from("ideas"), ToOwned::to_owned);
    name.push(".lock");
    store_path.with_file_name(name)
}

/// Wait for and take the lock guarding `store_path`.
pub async fn acquire_for_store(store_path: &Path) -> anyhow::Result<WriteLockGuard> {
    let lock_path = lock_path_for(store_path);
    let started = Instant::now();

    loop {
        match try_acquire(&lock_path) {
            Ok(guard) => {
                tracing::debug!(path = %lock_path.display(), "write lock acquired");
                return Ok(guard);
            }
            Err(LockState::Stale(pid)) => {
                tracing::warn!(pid, path = %lock_path.display(), "removing stale write lock");
                let _ = std::fs::remove_file(&lock_path);
            }
            Err(state) => {
                if started.elapsed() >= LOCK_WAIT_TIMEOUT {
                    return Err(timeout_error(&state, &lock_path));
                }
                tokio::time::sleep(LOCK_RETRY_DELAY).await;
            }
        }
    }
}

fn timeout_error(state: &LockState, lock_path: &Path) -> anyhow::Error {
    match state {
        LockState::HeldBy(pid) => anyhow::anyhow!(
            "another ideaflow process is writing (pid {pid}); try again after it finishes"
        ),
        _ => anyhow::anyhow!(
            "could not acquire write lock at {}; remove it if no ideaflow process is running",
            lock_path.display()
        ),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LockState {
    HeldBy(u32),
    Stale(u32),
    Unknown,
}

fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    match OpenOptions::new().create_new(true).write(true).open(lock_path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(WriteLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut contents = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut contents))
                .is_err()
            {
                return Err(LockState::Unknown);
            }

            match contents.trim().parse::<u32>().ok() {
                Some(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Some(pid) => Err(LockState::Stale(pid)),
                None => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}
