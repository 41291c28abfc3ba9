//! Visual styling for the knob panel.
//!
//! The theme only feeds presentation — spacing, colors, fonts — and is never
//! consulted by the registry.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the panel and the content it hosts.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel/fieldset background color.
    pub panel_bg: Color32,
    /// Accent color for focused and hovered controls.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Group headings and secondary text.
    pub text_secondary: Color32,
    /// Fieldset and input border color.
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 250),
            panel_bg: Color32::from_rgb(255, 255, 255),
            accent: Color32::from_rgb(70, 130, 220),
            text_primary: Color32::from_rgb(35, 35, 40),
            text_secondary: Color32::from_rgb(110, 110, 120),
            border: Color32::from_rgb(210, 210, 216),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::light();

        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.panel_bg;

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(3);

        visuals.widgets.inactive.bg_fill = Color32::from_rgb(240, 240, 243);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(3);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(232, 236, 244);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(3);

        visuals.widgets.active.bg_fill = Color32::from_rgb(224, 230, 242);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.corner_radius = CornerRadius::same(3);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(8.0, 5.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.spacing.button_padding = egui::vec2(8.0, 3.0);

        ctx.set_style(style);
    }
}
