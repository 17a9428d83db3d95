//! Analog clock face actor

use log::debug;

use crate::rendering::Renderer;
use crate::scene::{Actor, Line};

/// Angle increment in radians used to sweep the face circle.
const FACE_ANGLE_STEP: f64 = 0.01;

/// (length, brightness) per hand. The second hand is the longest and the
/// faintest; the hour hand the shortest and boldest.
const HOUR_HAND: (u32, f64) = (10, 0.75);
const MINUTE_HAND: (u32, f64) = (15, 0.5);
const SECOND_HAND: (u32, f64) = (20, 0.25);

/// Draws the clock: a full-brightness circle centered on the grid, then
/// three hand lines spawned as children so the traversal draws them after
/// the face.
///
/// Hands are appended hour, minute, second, so with last-write-wins plotting
/// the second hand ends up on top where they cross.
pub struct ClockFace {
    time: i64,
    radius: f64,
    children: Vec<Box<dyn Actor>>,
}

impl ClockFace {
    /// `time` is a UNIX timestamp in seconds, read as UTC wall time. Callers
    /// that want local time shift the timestamp by their zone offset before
    /// passing it in, which is what the polling page does.
    pub fn new(time: i64, radius: f64) -> Self {
        Self {
            time,
            radius,
            children: Vec::new(),
        }
    }
}

impl Actor for ClockFace {
    fn draw(&mut self, renderer: &mut Renderer) {
        let (width, height) = renderer.size();
        let mid_x = (width as f64 / 2.0).ceil();
        let mid_y = (height as f64 / 2.0).ceil();

        // Face circle, swept in fixed angle steps.
        let mut angle = 0.0;
        while angle < std::f64::consts::TAU {
            let x = self.radius * angle.cos();
            let y = self.radius * angle.sin();
            renderer.move_to(mid_x + x, mid_y + y, true);
            renderer.plot_pixel(1.0);
            angle += FACE_ANGLE_STEP;
        }

        let (hour, minute, second) = wall_time(self.time);
        let (hour_angle, minute_angle, second_angle) = hand_angles(hour, minute, second);
        debug!(
            "clock face {:02}:{:02}:{:02} -> angles h={:.1} m={:.1} s={:.1}",
            hour, minute, second, hour_angle, minute_angle, second_angle
        );

        let (length, brightness) = HOUR_HAND;
        self.children
            .push(Box::new(Line::new(mid_x, mid_y, hour_angle, length, brightness)));
        let (length, brightness) = MINUTE_HAND;
        self.children
            .push(Box::new(Line::new(mid_x, mid_y, minute_angle, length, brightness)));
        let (length, brightness) = SECOND_HAND;
        self.children
            .push(Box::new(Line::new(mid_x, mid_y, second_angle, length, brightness)));
    }

    fn children_mut(&mut self) -> &mut Vec<Box<dyn Actor>> {
        &mut self.children
    }
}

/// Split a UNIX timestamp into (hour, minute, second) of its UTC day, with
/// the hour on the 12-hour dial (0 reads as 12).
pub fn wall_time(timestamp: i64) -> (u32, u32, u32) {
    let day_secs = timestamp.rem_euclid(86_400);
    let hour24 = (day_secs / 3_600) as u32;
    let minute = ((day_secs / 60) % 60) as u32;
    let second = (day_secs % 60) as u32;
    let hour = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (hour, minute, second)
}

/// Hand angles in degrees, 0° up, clockwise: (hour, minute, second).
///
/// Each slower hand is advanced only by the fraction of the immediately
/// faster one: the minute hand by seconds, the hour hand by minutes. The
/// hour hand ignores seconds entirely. That is the dial's historical
/// behavior and is kept as-is.
pub fn hand_angles(hour: u32, minute: u32, second: u32) -> (f64, f64, f64) {
    let second_angle = 6.0 * f64::from(second);
    let minute_angle = 6.0 * (f64::from(minute) + f64::from(second) / 60.0);
    let hour_angle = 30.0 * (f64::from(hour) + f64::from(minute) / 60.0);
    (hour_angle, minute_angle, second_angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_time_at_epoch_reads_noon_dial() {
        // midnight on the 24h clock is 12 on the dial
        assert_eq!(wall_time(0), (12, 0, 0));
        assert_eq!(wall_time(30), (12, 0, 30));
    }

    #[test]
    fn wall_time_afternoon_wraps_to_dial() {
        // 13:05:09 UTC
        let ts = 13 * 3_600 + 5 * 60 + 9;
        assert_eq!(wall_time(ts), (1, 5, 9));
        // exactly noon stays 12
        assert_eq!(wall_time(12 * 3_600), (12, 0, 0));
    }

    #[test]
    fn wall_time_handles_negative_timestamps() {
        // one second before the epoch is 23:59:59
        assert_eq!(wall_time(-1), (11, 59, 59));
    }

    #[test]
    fn hand_angles_at_noon_point_up() {
        let (h, m, s) = hand_angles(12, 0, 0);
        assert_eq!(h % 360.0, 0.0);
        assert_eq!(m, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn second_hand_at_half_minute_points_down() {
        let (_, _, s) = hand_angles(12, 0, 30);
        assert_eq!(s, 180.0);
    }

    #[test]
    fn slower_hands_carry_only_one_fraction() {
        // 3:30:30 -- minute hand picks up the half second-turn, hour hand
        // picks up the half minute-turn but never sees seconds
        let (h, m, _) = hand_angles(3, 30, 30);
        assert_eq!(m, 183.0);
        assert_eq!(h, 105.0);
        let (h2, _, _) = hand_angles(3, 30, 59);
        assert_eq!(h, h2);
    }
}
