use directories::UserDirs;
use log::error;
use std::path::{Path, PathBuf};

/// One drop target: a fixed label and the directory it files into.
pub struct Zone {
    pub label: &'static str,
    pub dir: PathBuf,
}

/// The four fixed categories. Target directories come from the platform's
/// user-dirs database, falling back to the conventional name under home.
pub fn default_zones() -> Vec<Zone> {
    let user_dirs = UserDirs::new();
    let home = user_dirs
        .as_ref()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    let resolve = |known: Option<&Path>, fallback: &str| {
        known
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join(fallback))
    };

    vec![
        Zone {
            label: "Photos",
            dir: resolve(user_dirs.as_ref().and_then(|d| d.picture_dir()), "Pictures"),
        },
        Zone {
            label: "Videos",
            dir: resolve(user_dirs.as_ref().and_then(|d| d.video_dir()), "Videos"),
        },
        Zone {
            label: "Documents",
            dir: resolve(user_dirs.as_ref().and_then(|d| d.document_dir()), "Documents"),
        },
        Zone {
            label: "Downloads",
            dir: resolve(user_dirs.as_ref().and_then(|d| d.download_dir()), "Downloads"),
        },
    ]
}

/// Create missing target directories. A zone whose directory cannot be
/// created is kept; every drop on it will surface the error instead.
pub fn ensure_target_dirs(zones: &[Zone]) {
    for zone in zones {
        if let Err(err) = std::fs::create_dir_all(&zone.dir) {
            error!("failed to create {}: {}", zone.dir.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_categories_in_order() {
        let zones = default_zones();
        let labels: Vec<_> = zones.iter().map(|z| z.label).collect();
        assert_eq!(labels, ["Photos", "Videos", "Documents", "Downloads"]);
    }

    #[test]
    fn target_dirs_are_absolute_and_distinct() {
        if UserDirs::new().is_none() {
            // No detectable home dir; nothing sensible to assert.
            return;
        }
        let zones = default_zones();
        for zone in &zones {
            assert!(zone.dir.is_absolute(), "{} not absolute", zone.dir.display());
        }
        for (i, a) in zones.iter().enumerate() {
            for b in &zones[i + 1..] {
                assert_ne!(a.dir, b.dir);
            }
        }
    }
}
