//! Demo application: a preview card configured entirely through knobs.

use egui::{CentralPanel, Color32, Context, Margin, RichText, ScrollArea};
use knobkit_gui::{KnobPanel, Theme};

/// Main application state.
pub struct DemoApp {
    panel: KnobPanel,
    theme: Theme,
}

impl DemoApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, zoom: f32) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        cc.egui_ctx.set_pixels_per_point(zoom);

        Self {
            panel: KnobPanel::new(),
            theme,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let theme = &self.theme;
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Component preview");
            ui.add_space(8.0);
            ScrollArea::vertical().show(ui, |ui| {
                self.panel.show(ui, |ui, knobs| {
                    let title = knobs.text("title", "Hello");
                    let subtitle = knobs.text("subtitle", "A configurable card");

                    let layout = knobs.group("layout");
                    let padding = layout.number("padding", "12");
                    let wide = layout.bool("wide", false);

                    let style = knobs.group("style");
                    let variant = style.one_of(
                        "variant",
                        Some("primary"),
                        &[
                            ("primary", "Primary"),
                            ("outline", "Outline"),
                            ("ghost", "Ghost"),
                        ],
                    );

                    let tags = knobs.array("tags", &[]);

                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    card(
                        ui,
                        theme,
                        &title,
                        &subtitle,
                        &padding,
                        wide,
                        variant.as_deref(),
                        tags.as_deref(),
                    );
                });
            });
        });
    }
}

/// The component under preview. Every visual property comes from a knob.
#[allow(clippy::too_many_arguments)]
fn card(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    subtitle: &str,
    padding: &str,
    wide: bool,
    variant: Option<&str>,
    tags: Option<&[String]>,
) {
    let pad: i8 = padding.parse().unwrap_or(12);
    let accent = match variant {
        Some("primary") => theme.accent,
        Some("outline") => theme.text_secondary,
        Some("ghost") | None => Color32::TRANSPARENT,
        Some(_) => theme.text_secondary,
    };
    let width = if wide { ui.available_width() } else { 320.0 };

    egui::Frame::group(ui.style())
        .inner_margin(Margin::same(pad))
        .fill(theme.panel_bg)
        .stroke(egui::Stroke::new(1.5, accent))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.label(RichText::new(title).heading());
            ui.label(RichText::new(subtitle).color(theme.text_secondary));
            if let Some(tags) = tags {
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in tags {
                        ui.small_button(tag.as_str());
                    }
                });
            }
        });
}
