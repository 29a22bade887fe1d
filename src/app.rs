mod state;
mod style;
mod ui;

use crate::zones;
use eframe::egui;
use state::ZoneState;
use std::time::{Duration, Instant};

pub const WINDOW_WIDTH: f32 = 100.0;
pub const WINDOW_HEIGHT: f32 = 300.0;

// Pointer within this margin left of the window still counts as "near".
pub const PROXIMITY_MARGIN: f32 = 10.0;
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const STARTUP_TOAST_DURATION: Duration = Duration::from_secs(1);

pub struct DockApp {
    zones: Vec<ZoneState>,
    // Window-local zone rects from the last drawn frame, for drop hit-tests.
    zone_rects: Vec<egui::Rect>,
    // Last known window rect in global points; kept while the window is
    // hidden so the proximity poll still has bounds to test against.
    dock_rect: Option<egui::Rect>,
    positioned: bool,
    is_visible: bool,
    last_poll: Instant,
    started: Instant,
}

impl DockApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let zones = zones::default_zones();
        zones::ensure_target_dirs(&zones);

        Self {
            zones: zones.into_iter().map(ZoneState::new).collect(),
            zone_rects: Vec::new(),
            dock_rect: None,
            positioned: false,
            is_visible: true,
            last_poll: Instant::now(),
            started: Instant::now(),
        }
    }

    fn set_visible(&mut self, ctx: &egui::Context, show: bool) {
        if self.is_visible != show {
            self.is_visible = show;
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(show));
        }
    }
}
