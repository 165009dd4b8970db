/// Cubeview Terminal - interactive wireframe cube
///
/// Renders the cube into the terminal and maps the viewer's slider
/// controls onto the keyboard:
///   - WASD / Arrow Keys: rotate about X and Y
///   - E/R: rotate about Z
///   - +/-: scale
///   - Space: toggle auto-rotate
///   - 0: reset view
///   - Q/ESC: quit
use clap::Parser;
use cubeview_core::ViewParams;
use cubeview_terminal::TerminalApp;
use log::info;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "cubeview-terminal", about = "Terminal wireframe cube viewer")]
struct Args {
    /// Initial rotation about the X axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation_x: f64,

    /// Initial rotation about the Y axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation_y: f64,

    /// Initial rotation about the Z axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation_z: f64,

    /// Initial uniform scale factor
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Start with auto-rotate enabled
    #[arg(long)]
    auto_rotate: bool,

    /// Target frame rate
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = ViewParams {
        rotation_x: args.rotation_x,
        rotation_y: args.rotation_y,
        rotation_z: args.rotation_z,
        scale: args.scale,
        auto_rotate: args.auto_rotate,
    };

    info!(
        "starting terminal viewer at {} fps, auto-rotate {}",
        args.fps,
        if params.auto_rotate { "on" } else { "off" }
    );

    let mut app = TerminalApp::new(params, args.fps)?;
    app.run()
}
