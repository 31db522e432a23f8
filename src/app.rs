//! Contains all application code, including application state and drawing logic

mod canvas;
mod simulation;

use canvas::Canvas;
use simulation::Simulation;
use simulation::spectrum::SpectralBand;
use simulation::variables::{SCREEN_DISTANCE, SLIT_WIDTH, SLIT_WIDTH_STEP, WAVELENGTH};

use egui::{Align2, Color32, Pos2, Rect, Response, Stroke, Style, pos2};
use strum::IntoEnumIterator;

// world-space layout of the schematic
const SCHEMATIC: Rect = Rect {
    min: pos2(0.0, -1.0),
    max: pos2(10.0, 1.0),
};
const SOURCE: Pos2 = pos2(0.6, 0.0);
const SLIT_X: f32 = 4.0;
const SCREEN_X: f32 = 9.4;
// opening height per millimetre of slit width
const SLIT_SCALE: f32 = 2.0;

fn rgb(colour: (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(colour.0, colour.1, colour.2)
}

pub struct DiffractionApp {
    simulation: Simulation,
    show_envelope: bool,
}

impl DiffractionApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Starting diffraction viewer");
        Self {
            simulation: Simulation::new(),
            show_envelope: true,
        }
    }

    fn draw_schematic(&self, ui: &egui::Ui, extent: Rect) {
        let canvas = Canvas::new(ui, extent, SCHEMATIC);
        let colour = rgb(self.simulation.colour());
        canvas.fill_background(Color32::BLACK);

        // source and incoming beam
        canvas.draw_line(SOURCE, pos2(SLIT_X, 0.0), Stroke::new(3.0, colour));
        canvas.draw_filled_circle(SOURCE, 0.25, Color32::from_rgb(253, 224, 71));

        // barrier with the opening cut out of it
        let half_gap = self.simulation.parameters().slit_width as f32 * SLIT_SCALE / 2.0;
        let barrier = Color32::from_rgb(70, 70, 70);
        canvas.draw_rect(
            Rect::from_min_max(pos2(SLIT_X - 0.05, half_gap), pos2(SLIT_X + 0.05, SCHEMATIC.max.y)),
            barrier,
        );
        canvas.draw_rect(
            Rect::from_min_max(pos2(SLIT_X - 0.05, SCHEMATIC.min.y), pos2(SLIT_X + 0.05, -half_gap)),
            barrier,
        );

        // spread towards the screen
        let spread = Stroke::new(1.0, Color32::from_white_alpha(40));
        canvas.draw_line(pos2(SLIT_X, 0.0), pos2(SCREEN_X, SCHEMATIC.max.y * 0.9), spread);
        canvas.draw_line(pos2(SLIT_X, 0.0), pos2(SCREEN_X, SCHEMATIC.min.y * 0.9), spread);

        let column = Rect::from_min_max(
            pos2(SCREEN_X, SCHEMATIC.min.y * 0.9),
            pos2(SCREEN_X + 0.15, SCHEMATIC.max.y * 0.9),
        );
        canvas.draw_rect(column.expand(0.02), Color32::from_rgb(200, 200, 200));
        let intensities: Vec<f32> = self
            .simulation
            .pattern()
            .values()
            .iter()
            .map(|&i| i as f32)
            .collect();
        canvas.draw_intensity_strip(column, &intensities, colour);

        canvas.draw_label(pos2(SOURCE.x, SCHEMATIC.min.y), Align2::CENTER_BOTTOM, "Source");
        canvas.draw_label(pos2(SLIT_X, SCHEMATIC.min.y), Align2::CENTER_BOTTOM, "Slit");
        canvas.draw_label(pos2(SCREEN_X, SCHEMATIC.min.y), Align2::RIGHT_BOTTOM, "Screen");
    }

    fn draw_pattern(&self, ui: &egui::Ui, extent: Rect) {
        let pattern = self.simulation.pattern();
        let angles: Vec<f32> = pattern.angles().iter().map(|&t| t as f32).collect();
        let intensities: Vec<f32> = pattern.values().iter().map(|&i| i as f32).collect();

        let first = pattern.angle_at(0) as f32;
        let last = pattern.angle_at(pattern.len() - 1) as f32;
        let step = angles[1] - angles[0];
        let top = 1.05 * pattern.max() as f32;
        let range = Rect::from_min_max(pos2(first - step, 0.0), pos2(last + step, top));
        let canvas = Canvas::new(ui, extent, range);
        let colour = rgb(self.simulation.colour());

        canvas.fill_background(Color32::BLACK);
        canvas.draw_grid_lines(0.025, 0.25);
        canvas.draw_axes();
        canvas.draw_bars(&angles, &intensities, colour);
        if self.show_envelope {
            canvas.draw_points(&angles, &intensities, Color32::WHITE);
        }

        canvas.draw_label(pos2(first, 0.0), Align2::LEFT_BOTTOM, format!("{first:.2} rad"));
        let centre = pattern.angle_at(pattern.centre()) as f32;
        canvas.draw_label(pos2(centre, 0.0), Align2::CENTER_BOTTOM, "0");
        canvas.draw_label(pos2(last, 0.0), Align2::RIGHT_BOTTOM, format!("{last:.2} rad"));
    }
}

impl eframe::App for DiffractionApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // draws experiment parameters at the top of the window
        let settings = egui::TopBottomPanel::top("settings");
        let settings_drawn: Response = settings
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("λ").on_hover_text("Wavelength of light");
                    ui.add(
                        egui::Slider::new(
                            &mut self.simulation.wavelength,
                            WAVELENGTH.min..=WAVELENGTH.max,
                        )
                        .step_by(1.0)
                        .suffix(" nm"),
                    );
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        swatch.center(),
                        7.0,
                        rgb(self.simulation.colour()),
                    );

                    let current = self.simulation.band();
                    egui::ComboBox::from_id_salt("band")
                        .selected_text(
                            current.map_or_else(|| "Invisible".to_owned(), |band| band.to_string()),
                        )
                        .show_ui(ui, |ui| {
                            for band in SpectralBand::iter() {
                                let (lower, upper) = band.range();
                                if ui
                                    .selectable_label(current == Some(band), band.to_string())
                                    .on_hover_text(format!("{lower:.0}–{upper:.0} nm"))
                                    .clicked()
                                {
                                    self.simulation.wavelength = band.centre().round();
                                }
                            }
                        });
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        self.simulation.wavelength = WAVELENGTH.default;
                    }

                    ui.separator();

                    ui.label("a").on_hover_text("Slit width");
                    ui.add(
                        egui::Slider::new(
                            &mut self.simulation.slit_width,
                            SLIT_WIDTH.min..=SLIT_WIDTH.max,
                        )
                        .step_by(SLIT_WIDTH_STEP)
                        .suffix(" mm"),
                    );
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        self.simulation.slit_width = SLIT_WIDTH.default;
                    }

                    ui.separator();

                    ui.label("L").on_hover_text("Distance to screen");
                    ui.add(
                        egui::DragValue::new(&mut self.simulation.screen_distance)
                            .range(SCREEN_DISTANCE.min..=SCREEN_DISTANCE.max)
                            .suffix(" mm"),
                    );
                    if ui.button("↺").on_hover_text("Reset").clicked() {
                        self.simulation.screen_distance = SCREEN_DISTANCE.default;
                    }
                });
            })
            .response;

        // edits above take effect before anything below is drawn
        if let Err(err) = self.simulation.update() {
            log::warn!("Keeping previous parameters: {err}");
        }

        let controls = egui::TopBottomPanel::bottom("controls");
        let controls_drawn: Response = controls
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "y = λL/a = ±{:.2} mm",
                        self.simulation.first_minimum()
                    ))
                    .on_hover_text("Distance from centre to first minimum");

                    ui.separator();

                    ui.label(self.simulation.parameters().to_string());

                    ui.separator();

                    ui.checkbox(&mut self.show_envelope, "Envelope")
                        .on_hover_text("Overlay the sinc² curve on the bars");
                    if ui.button("⟲").on_hover_text("Reset all parameters").clicked() {
                        self.simulation.reset();
                    }
                });
            })
            .response;

        let canvas_extent = Rect::from_two_pos(
            Pos2::new(ctx.screen_rect().left(), settings_drawn.rect.bottom()),
            Pos2::new(ctx.screen_rect().right(), controls_drawn.rect.top()),
        )
        .shrink(8.0);
        let split = canvas_extent.top() + canvas_extent.height() * 0.4;
        let schematic_extent = Rect::from_min_max(
            canvas_extent.min,
            pos2(canvas_extent.right(), split - 4.0),
        );
        let pattern_extent = Rect::from_min_max(
            pos2(canvas_extent.left(), split + 4.0),
            canvas_extent.max,
        );

        // draws the experiment and its pattern in the main panel of the window
        let style = Style::default();
        egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&style))
            .show(ctx, |ui| {
                self.draw_schematic(ui, schematic_extent);
                self.draw_pattern(ui, pattern_extent);
            });
    }
}
