use log::{error, info};
use mouse_position::mouse_position::Mouse;
use std::path::Path;

/// Open a directory in the platform's default file browser. Fire-and-forget;
/// a failure is worth a log line and nothing more.
pub fn open_folder(dir: &Path) {
    match open::that(dir) {
        Ok(()) => info!("opened folder {}", dir.display()),
        Err(err) => error!("failed to open {}: {}", dir.display(), err),
    }
}

/// Global cursor position in physical screen coordinates, if the platform
/// can report it.
pub fn global_cursor() -> Option<(i32, i32)> {
    match Mouse::get_mouse_position() {
        Mouse::Position { x, y } => Some((x, y)),
        Mouse::Error => None,
    }
}
