//! Render a single clock frame to stdout.
//!
//! Pass a UNIX timestamp as the first argument, or omit it for "now":
//!
//! ```text
//! cargo run --example render_once -- 30
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use clockface::{render_clock, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
    };

    let text = render_clock(time, &RenderConfig::default())?;
    println!("{}", text);

    Ok(())
}
