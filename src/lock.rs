//! Single-instance guard: an exclusive, non-blocking advisory lock on a
//! well-known file. The file's content is never interpreted; only the lock
//! matters. Released when the guard drops or the process dies.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("another instance already holds {0}")]
    AlreadyHeld(PathBuf),
    #[error("lock file error: {0}")]
    Io(#[from] io::Error),
}

pub struct InstanceLock {
    _file: std::fs::File,
}

pub fn default_lock_path() -> PathBuf {
    std::env::temp_dir().join("sorter.lock")
}

impl InstanceLock {
    #[cfg(unix)]
    pub fn acquire(path: &Path) -> Result<Self, LockError> {
        use std::os::unix::io::AsRawFd;

        let file = OpenOptions::new().write(true).create(true).open(path)?;
        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc == 0 {
            return Ok(Self { _file: file });
        }
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EWOULDBLOCK) {
            Err(LockError::AlreadyHeld(path.to_path_buf()))
        } else {
            Err(LockError::Io(err))
        }
    }

    #[cfg(windows)]
    pub fn acquire(path: &Path) -> Result<Self, LockError> {
        use std::os::windows::fs::OpenOptionsExt;

        const ERROR_SHARING_VIOLATION: i32 = 32;
        match OpenOptions::new()
            .write(true)
            .create(true)
            .share_mode(0)
            .open(path)
        {
            Ok(file) => Ok(Self { _file: file }),
            Err(err) if err.raw_os_error() == Some(ERROR_SHARING_VIOLATION) => {
                Err(LockError::AlreadyHeld(path.to_path_buf()))
            }
            Err(err) => Err(LockError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_first_is_held() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sorter.lock");

        let first = InstanceLock::acquire(&path).expect("first acquire");
        assert!(matches!(
            InstanceLock::acquire(&path),
            Err(LockError::AlreadyHeld(_))
        ));

        drop(first);
        InstanceLock::acquire(&path).expect("reacquire after release");
    }

    #[test]
    fn acquire_creates_the_lock_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sorter.lock");

        let _lock = InstanceLock::acquire(&path).expect("acquire");
        assert!(path.exists());
    }
}
