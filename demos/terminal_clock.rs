//! Live clock in the terminal: redraws once per second until interrupted.
//!
//! ```text
//! cargo run --example terminal_clock
//! ```

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clockface::{render_clock, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RenderConfig::default();

    loop {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
        let frame = render_clock(now, &config)?;

        // Clear the screen and home the cursor before each frame.
        print!("\x1b[2J\x1b[H{}", frame);

        thread::sleep(Duration::from_secs(1));
    }
}
