use anyhow::Result;
use clap::Parser;

use clockface::server;
use clockface::RenderConfig;

/// Serve an ASCII art analog clock over HTTP.
#[derive(Parser, Debug)]
#[command(name = "clockface", version, about)]
struct Args {
    /// Port to listen on (localhost only)
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Grid width in cells (each cell is two characters wide in the output)
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 60)]
    height: usize,

    /// Radius of the clock face circle, in cells
    #[arg(long, default_value_t = 22.0)]
    radius: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = RenderConfig {
        width: args.width,
        height: args.height,
        face_radius: args.radius,
    };

    server::serve(config, args.port).await
}
