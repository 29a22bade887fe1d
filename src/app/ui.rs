use super::state::Feedback;
use super::style::{
    DockTheme, CONTENT_PADDING, PANEL_ROUNDING, ZONE_ROUNDING, ZONE_SPACING,
};
use super::{
    DockApp, POLL_INTERVAL, PROXIMITY_MARGIN, STARTUP_TOAST_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::classify::{self, DropAction, Payload};
use crate::{place, system};
use eframe::egui;
use log::{error, info, warn};
use std::time::{Duration, Instant};

impl eframe::App for DockApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.position_on_edge(ctx);
        self.handle_drops(ctx);
        self.update_proximity(ctx);
        self.draw_panel(ctx);
        self.draw_startup_toast(ctx);

        // The proximity poll is repaint-driven; keep frames coming even when
        // no input arrives.
        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

impl DockApp {
    /// Flush against the right edge of the primary monitor, vertically
    /// centered. Runs once, on the first frame that reports a monitor size.
    fn position_on_edge(&mut self, ctx: &egui::Context) {
        if self.positioned {
            if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
                self.dock_rect = Some(rect);
            }
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        let pos = egui::pos2(
            monitor.x - WINDOW_WIDTH,
            (monitor.y - WINDOW_HEIGHT) * 0.5,
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        self.dock_rect = Some(egui::Rect::from_min_size(
            pos,
            egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT),
        ));
        self.positioned = true;
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        let mut payloads: Vec<Payload> = Vec::new();

        for file in ctx.input(|i| i.raw.dropped_files.clone()) {
            if let Some(path) = file.path {
                payloads.push(Payload::Text(path.to_string_lossy().into_owned()));
            } else if let Some(bytes) = file.bytes {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                if !text.trim().is_empty() {
                    payloads.push(payload_from_drag_text(text));
                }
            }
        }

        // Some backends deliver text/uri-list and plain-text drag data as
        // paste events rather than dropped files.
        let pasted: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Paste(text) if !text.trim().is_empty() => Some(text.clone()),
                    _ => None,
                })
                .collect()
        });
        payloads.extend(pasted.into_iter().map(payload_from_drag_text));

        if payloads.is_empty() {
            return;
        }

        let Some(zone_idx) = self.zone_under_pointer(ctx) else {
            warn!("drop received outside any zone; ignoring");
            return;
        };

        let now = Instant::now();
        let mut all_ok = true;
        for payload in &payloads {
            all_ok &= self.run_actions(zone_idx, payload);
        }
        self.zones[zone_idx].feedback = if all_ok {
            Feedback::success(now)
        } else {
            Feedback::error(now)
        };
        ctx.request_repaint();
    }

    /// Execute every action a payload classifies into, against one zone.
    /// Failures are contained here: logged, reflected in the return value,
    /// never propagated.
    fn run_actions(&mut self, zone_idx: usize, payload: &Payload) -> bool {
        let actions = classify::classify(payload);
        if actions.is_empty() {
            warn!("received empty drag payload");
            return false;
        }

        let label = self.zones[zone_idx].zone.label;
        let dir = self.zones[zone_idx].zone.dir.clone();
        let mut all_ok = true;
        for action in actions {
            let outcome = match action {
                DropAction::MoveFile(src) => place::move_into(&src, &dir),
                DropAction::Download(url) => place::download_into(&url, &dir),
                DropAction::SaveText(text) => place::save_text(&text, &dir),
            };
            match outcome {
                Ok(dest) => info!("placed {} into {}", dest.display(), label),
                Err(err) => {
                    error!("drop on {} failed: {}", label, err);
                    all_ok = false;
                }
            }
        }
        all_ok
    }

    fn zone_under_pointer(&self, ctx: &egui::Context) -> Option<usize> {
        let pos = ctx.input(|i| i.pointer.latest_pos())?;
        self.zone_rects.iter().position(|rect| rect.contains(pos))
    }

    /// Poll the global cursor at ~10 Hz and show the window when the pointer
    /// is inside its bounds (extended a little to the left), hide otherwise.
    /// Best-effort behavior; nothing correctness-bearing hangs off it.
    fn update_proximity(&mut self, ctx: &egui::Context) {
        if self.last_poll.elapsed() < POLL_INTERVAL {
            return;
        }
        self.last_poll = Instant::now();

        // Leave the window up while the startup toast shows.
        if self.started.elapsed() < STARTUP_TOAST_DURATION {
            return;
        }
        // Never hide under an in-flight drag.
        if ctx.input(|i| !i.raw.hovered_files.is_empty()) {
            self.set_visible(ctx, true);
            return;
        }

        let Some(rect) = self.dock_rect else {
            return;
        };
        let Some((x, y)) = system::global_cursor() else {
            return;
        };
        let scale = ctx.pixels_per_point().max(0.1);
        let cursor = egui::pos2(x as f32 / scale, y as f32 / scale);

        let near = cursor.x >= rect.min.x - PROXIMITY_MARGIN
            && cursor.x < rect.max.x
            && cursor.y >= rect.min.y
            && cursor.y < rect.max.y;
        self.set_visible(ctx, near);
    }

    fn draw_panel(&mut self, ctx: &egui::Context) {
        let theme = DockTheme::default();
        let panel_frame = egui::Frame::none()
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::NONE);

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, PANEL_ROUNDING, theme.panel_bg);
                ui.painter().rect_stroke(
                    rect,
                    PANEL_ROUNDING,
                    egui::Stroke::new(1.0, theme.panel_border),
                );

                let now = Instant::now();
                let mut any_flash = false;
                let zone_count = self.zones.len();
                let zone_h = (rect.height()
                    - CONTENT_PADDING * 2.0
                    - ZONE_SPACING * (zone_count as f32 - 1.0))
                    / zone_count as f32;
                let zone_w = rect.width() - CONTENT_PADDING * 2.0;

                self.zone_rects.clear();
                for idx in 0..zone_count {
                    let min = egui::pos2(
                        rect.min.x + CONTENT_PADDING,
                        rect.min.y + CONTENT_PADDING + idx as f32 * (zone_h + ZONE_SPACING),
                    );
                    let zone_rect = egui::Rect::from_min_size(min, egui::vec2(zone_w, zone_h));
                    self.zone_rects.push(zone_rect);

                    let resp = ui.interact(
                        zone_rect,
                        ui.make_persistent_id(("drop_zone", idx)),
                        egui::Sense::click(),
                    );

                    if self.zones[idx].feedback.tick(now) {
                        any_flash = true;
                    }
                    let fill = match self.zones[idx].feedback {
                        Feedback::Flash { error: false, .. } => theme.zone_success,
                        Feedback::Flash { error: true, .. } => theme.zone_error,
                        Feedback::Idle if resp.hovered() => theme.zone_hover,
                        Feedback::Idle => theme.zone_bg,
                    };
                    ui.painter().rect_filled(zone_rect, ZONE_ROUNDING, fill);
                    ui.painter().rect_stroke(
                        zone_rect,
                        ZONE_ROUNDING,
                        egui::Stroke::new(1.0, theme.zone_border),
                    );
                    ui.painter().text(
                        zone_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        self.zones[idx].zone.label,
                        egui::FontId::proportional(13.0),
                        theme.label_color,
                    );

                    if resp.clicked() {
                        system::open_folder(&self.zones[idx].zone.dir);
                    }
                    resp.context_menu(|ui| {
                        if ui.button("Close").clicked() {
                            info!("exiting via context menu");
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                            ui.close_menu();
                        }
                    });
                }

                if any_flash {
                    ctx.request_repaint_after(Duration::from_millis(50));
                }
            });
    }

    fn draw_startup_toast(&self, ctx: &egui::Context) {
        if self.started.elapsed() >= STARTUP_TOAST_DURATION {
            return;
        }
        let theme = DockTheme::default();
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("startup_toast"))
            .fixed_pos(egui::pos2(screen.center().x - 44.0, screen.top() + 6.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.toast_bg)
                    .rounding(6.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 5.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Sorter is active")
                                .color(theme.toast_text)
                                .size(11.0),
                        );
                    });
            });
        ctx.request_repaint();
    }
}

/// Multi-line drag text with scheme-bearing lines is a URI list (comment
/// lines per the uri-list format are skipped); anything else is plain text.
fn payload_from_drag_text(text: String) -> Payload {
    let uris: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.contains("://"))
        .map(str::to_string)
        .collect();
    if uris.is_empty() {
        Payload::Text(text)
    } else {
        Payload::Uris(uris)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_list_text_becomes_uri_payload() {
        let text = "# dragged from browser\nfile:///tmp/a.png\nhttps://example.com/b.png\n";
        assert_eq!(
            payload_from_drag_text(text.to_string()),
            Payload::Uris(vec![
                "file:///tmp/a.png".to_string(),
                "https://example.com/b.png".to_string(),
            ])
        );
    }

    #[test]
    fn plain_text_stays_text() {
        assert_eq!(
            payload_from_drag_text("grocery list".to_string()),
            Payload::Text("grocery list".to_string())
        );
    }
}
