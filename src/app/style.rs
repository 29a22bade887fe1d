use eframe::egui::Color32;

pub const CONTENT_PADDING: f32 = 8.0;
pub const ZONE_SPACING: f32 = 10.0;
pub const PANEL_ROUNDING: f32 = 12.0;
pub const ZONE_ROUNDING: f32 = 8.0;

#[derive(Clone, Copy)]
pub struct DockTheme {
    pub panel_bg: Color32,
    pub panel_border: Color32,
    pub zone_bg: Color32,
    pub zone_hover: Color32,
    pub zone_border: Color32,
    pub zone_success: Color32,
    pub zone_error: Color32,
    pub label_color: Color32,
    pub toast_bg: Color32,
    pub toast_text: Color32,
}

impl Default for DockTheme {
    fn default() -> Self {
        Self {
            panel_bg: Color32::from_rgba_premultiplied(14, 20, 31, 200),
            panel_border: Color32::from_rgba_premultiplied(161, 179, 201, 36),
            zone_bg: Color32::from_rgba_premultiplied(24, 36, 50, 170),
            zone_hover: Color32::from_rgba_premultiplied(35, 53, 74, 196),
            zone_border: Color32::from_rgba_premultiplied(147, 169, 194, 78),
            zone_success: Color32::from_rgb(76, 175, 80),
            zone_error: Color32::from_rgb(244, 67, 54),
            label_color: Color32::from_rgb(242, 248, 255),
            toast_bg: Color32::from_rgba_premultiplied(8, 12, 18, 236),
            toast_text: Color32::from_rgb(245, 250, 255),
        }
    }
}
