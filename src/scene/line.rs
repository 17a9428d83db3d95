//! Straight line segment actor

use crate::rendering::Renderer;
use crate::scene::Actor;

/// Draws a straight run of unit-step pixels outward from an anchor point.
///
/// Angles are in degrees with 0° pointing up and positive angles turning
/// clockwise. The anchor cell itself is not plotted; the first pixel lands
/// one step away from it.
pub struct Line {
    x: f64,
    y: f64,
    angle: f64,
    length: u32,
    brightness: f64,
    children: Vec<Box<dyn Actor>>,
}

impl Line {
    pub fn new(x: f64, y: f64, angle: f64, length: u32, brightness: f64) -> Self {
        Self {
            x,
            y,
            angle,
            length,
            brightness,
            children: Vec::new(),
        }
    }

    /// Unit step for this line's angle. The y component is negated because
    /// buffer rows grow downward while 0° means "up".
    pub fn direction(&self) -> (f64, f64) {
        let rad = self.angle.to_radians();
        (rad.sin(), -rad.cos())
    }
}

impl Actor for Line {
    fn draw(&mut self, renderer: &mut Renderer) {
        renderer.move_to(self.x, self.y, true);
        let (dx, dy) = self.direction();
        for _ in 0..self.length {
            renderer.move_to(dx, dy, false);
            renderer.plot_pixel(self.brightness);
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Box<dyn Actor>> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::RasterBuffer;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "direction {:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn direction_follows_clock_convention() {
        assert_close(Line::new(0.0, 0.0, 0.0, 1, 1.0).direction(), (0.0, -1.0));
        assert_close(Line::new(0.0, 0.0, 90.0, 1, 1.0).direction(), (1.0, 0.0));
        assert_close(Line::new(0.0, 0.0, 180.0, 1, 1.0).direction(), (0.0, 1.0));
        assert_close(Line::new(0.0, 0.0, 270.0, 1, 1.0).direction(), (-1.0, 0.0));
    }

    #[test]
    fn draw_skips_anchor_and_covers_length() {
        let mut renderer = Renderer::new(RasterBuffer::new(20, 20).unwrap());
        let mut line = Line::new(5.0, 5.0, 180.0, 4, 0.5);
        line.draw(&mut renderer);

        let buffer = renderer.into_buffer();
        assert_eq!(buffer.get(5, 5), Some(0.0));
        for step in 1..=4 {
            assert_eq!(buffer.get(5, 5 + step), Some(0.5), "step {}", step);
        }
        assert_eq!(buffer.get(5, 10), Some(0.0));
    }

    #[test]
    fn zero_length_line_plots_nothing() {
        let mut renderer = Renderer::new(RasterBuffer::new(8, 8).unwrap());
        let mut line = Line::new(4.0, 4.0, 90.0, 0, 1.0);
        line.draw(&mut renderer);

        let buffer = renderer.into_buffer();
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(buffer.get(col, row), Some(0.0));
            }
        }
    }
}
