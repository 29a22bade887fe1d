#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod classify;
mod lock;
mod place;
mod system;
mod zones;

use crate::app::{DockApp, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::lock::{default_lock_path, InstanceLock};
use eframe::egui;
use log::{error, info};
use std::time::{Duration, Instant};

const APP_NAME: &str = "Sorter";
const NOTICE_DURATION: Duration = Duration::from_secs(2);

fn main() -> eframe::Result<()> {
    env_logger::init();

    let lock_path = default_lock_path();
    let _lock = match InstanceLock::acquire(&lock_path) {
        Ok(lock) => lock,
        Err(err) => {
            error!("{err}");
            show_notice("Another instance of Sorter is already running");
            std::process::exit(1);
        }
    };
    info!("instance lock held at {}", lock_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_taskbar(false)
            .with_visible(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(DockApp::new(cc)))),
    )
}

/// Brief undecorated notice near the pointer, auto-dismissed. Used only on
/// the already-running path, before any dock window exists.
fn show_notice(message: &'static str) {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([280.0, 48.0])
        .with_resizable(false)
        .with_decorations(false)
        .with_always_on_top()
        .with_taskbar(false);
    if let Some((x, y)) = system::global_cursor() {
        viewport = viewport.with_position(egui::pos2(
            (x as f32 - 140.0).max(0.0),
            (y as f32 - 56.0).max(0.0),
        ));
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let opened = Instant::now();
    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(NoticeApp { message, opened }))),
    );
    if let Err(err) = result {
        error!("failed to show notice window: {err}");
    }
}

struct NoticeApp {
    message: &'static str,
    opened: Instant,
}

impl eframe::App for NoticeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.opened.elapsed() >= NOTICE_DURATION {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| ui.label(self.message));
        });
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
