//! Helper struct for drawing objects in world space onto the screen.
//! Unlike a plot, x and y are scaled independently so `range` always fills `screen_extent`.
//! World y points up.

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Ui, epaint::CircleShape, pos2};

const GRID_COLOUR: Color32 = Color32::from_rgb(30, 30, 30);
const AXIS_COLOUR: Color32 = Color32::from_rgb(90, 90, 90);

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    range: Rect,
    x_scale: f32,
    y_scale: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(ui: &'a Ui, screen_extent: Rect, range: Rect) -> Self {
        Canvas {
            ui,
            screen_extent,
            range,
            x_scale: screen_extent.width() / range.width(),
            y_scale: screen_extent.height() / range.height(),
        }
    }

    fn world_to_screen_pos(&self, pos: Pos2) -> Pos2 {
        pos2(self.world_to_screen_x(pos.x), self.world_to_screen_y(pos.y))
    }

    fn world_to_screen_x(&self, x: f32) -> f32 {
        self.screen_extent.min.x + self.x_scale * (x - self.range.min.x)
    }

    fn world_to_screen_y(&self, y: f32) -> f32 {
        self.screen_extent.max.y - self.y_scale * (y - self.range.min.y)
    }

    fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_two_pos(
            self.world_to_screen_pos(rect.min),
            self.world_to_screen_pos(rect.max),
        )
    }

    pub fn fill_background(&self, colour: Color32) {
        self.ui.painter().rect_filled(self.screen_extent, 4.0, colour);
    }

    /// Radius is in world x units.
    pub fn draw_filled_circle(&self, pos: Pos2, radius: f32, colour: Color32) {
        let screen_pos = self.world_to_screen_pos(pos);
        let screen_radius = radius * self.x_scale;
        self.ui
            .painter()
            .add(CircleShape::filled(screen_pos, screen_radius, colour));
    }

    pub fn draw_rect(&self, rect: Rect, colour: Color32) {
        self.ui
            .painter()
            .rect_filled(self.world_to_screen_rect(rect), 0.0, colour);
    }

    pub fn draw_line(&self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.ui.painter().line_segment(
            [self.world_to_screen_pos(from), self.world_to_screen_pos(to)],
            stroke,
        );
    }

    pub fn draw_label(&self, pos: Pos2, anchor: Align2, text: impl ToString) {
        self.ui.painter().text(
            self.world_to_screen_pos(pos),
            anchor,
            text,
            FontId::proportional(13.0),
            Color32::GRAY,
        );
    }

    pub fn draw_grid_lines(&self, x_step: f32, y_step: f32) {
        let stroke = Stroke::new(1.0, GRID_COLOUR);

        let mut y = y_step * (self.range.min.y / y_step).ceil();
        while y <= self.range.max.y {
            self.ui.painter().hline(
                self.screen_extent.x_range(),
                self.world_to_screen_y(y),
                stroke,
            );
            y += y_step;
        }
        let mut x = x_step * (self.range.min.x / x_step).ceil();
        while x <= self.range.max.x {
            self.ui.painter().vline(
                self.world_to_screen_x(x),
                self.screen_extent.y_range(),
                stroke,
            );
            x += x_step;
        }
    }

    /// Vertical axis through x = 0 and a baseline at the bottom of the range.
    pub fn draw_axes(&self) {
        let stroke = Stroke::new(2.0, AXIS_COLOUR);
        self.ui.painter().vline(
            self.world_to_screen_x(0.0),
            self.screen_extent.y_range(),
            stroke,
        );
        self.ui.painter().hline(
            self.screen_extent.x_range(),
            self.world_to_screen_y(self.range.min.y),
            stroke,
        );
    }

    /// One bar per point, centred on its x position and rising from the bottom of the range.
    /// Bars fade with their height so weak fringes read as dim.
    pub fn draw_bars(&self, x_points: &[f32], heights: &[f32], colour: Color32) {
        if (x_points.len() < 2) || (x_points.len() != heights.len()) {
            log::error!("Slices passed to draw_bars have invalid sizes");
            return;
        }
        let half_width = (x_points[1] - x_points[0]) / 2.0;
        for (x, h) in x_points.iter().zip(heights) {
            let bar = Rect::from_min_max(
                pos2(x - half_width, self.range.min.y),
                pos2(x + half_width, self.range.min.y + h),
            );
            self.draw_rect(bar, fade(colour, *h));
        }
    }

    /// Paints `intensities` along a vertical strip, first sample at the bottom.
    pub fn draw_intensity_strip(&self, column: Rect, intensities: &[f32], colour: Color32) {
        if intensities.is_empty() {
            log::error!("Empty slice passed to draw_intensity_strip");
            return;
        }
        let cell = column.height() / intensities.len() as f32;
        for (i, intensity) in intensities.iter().enumerate() {
            let y = column.min.y + i as f32 * cell;
            let rect = Rect::from_min_max(pos2(column.min.x, y), pos2(column.max.x, y + cell));
            self.draw_rect(rect, fade(colour, *intensity));
        }
    }

    pub fn draw_points(&self, x_points: &[f32], y_points: &[f32], colour: Color32) {
        if (x_points.len() < 2) || (x_points.len() != y_points.len()) {
            log::error!("Slices passed to draw_points have invalid sizes");
            return;
        }
        let screen_points = x_points
            .iter()
            .zip(y_points)
            .map(|(x, y)| pos2(self.world_to_screen_x(*x), self.world_to_screen_y(*y)))
            .collect();
        self.ui
            .painter()
            .line(screen_points, Stroke::new(1.5, colour));
    }
}

fn fade(colour: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(colour.r(), colour.g(), colour.b(), alpha)
}
