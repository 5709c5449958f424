//! Entry point for Kubik3D: headless spinning-cube demo.
//! Logging + CLI flags for surface size and frame count.

use anyhow::Result;
use renderer::{HeadlessBackend, Renderer};
use scene::spin::Spin;

/// Demo options, all overridable from the command line:
/// `--size=WxH`, `--width=`, `--height=`, `--frames=N`.
struct Options {
    width: u32,
    height: u32,
    frames: u32,
}

fn parse_args(args: impl Iterator<Item = String>) -> Options {
    let mut width = 1280_u32;
    let mut height = 720_u32;
    // Ten seconds at 60 fps.
    let mut frames = 600_u32;

    for arg in args {
        if let Some(v) = arg.strip_prefix("--size=") {
            if let Some((w, h)) = v.split_once(['x', 'X']) {
                if let (Ok(pw), Ok(ph)) = (w.parse(), h.parse()) {
                    width = pw;
                    height = ph;
                }
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            width = v.parse().unwrap_or(width);
        } else if let Some(v) = arg.strip_prefix("--height=") {
            height = v.parse().unwrap_or(height);
        } else if let Some(v) = arg.strip_prefix("--frames=") {
            frames = v.parse().unwrap_or(frames);
        } else if arg.starts_with("--") {
            eprintln!("[warn] Unknown flag '{}', ignoring.", arg);
        }
    }

    Options {
        width: width.max(1),
        height: height.max(1),
        frames: frames.max(1),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Options {
        width,
        height,
        frames,
    } = parse_args(std::env::args().skip(1));
    log::info!("Starting Kubik3D. surface={}x{}, frames={}", width, height, frames);

    let mut backend = HeadlessBackend::new();
    let renderer = Renderer::new(&mut backend, width, height)?;

    let mut spin = Spin::new();
    for frame in 0..frames {
        spin.advance();
        renderer.render_frame(&mut backend, &spin)?;
        log::debug!(
            "frame {}: angles=({:.2}, {:.2}, {:.2})",
            frame,
            spin.angle_x,
            spin.angle_y,
            spin.angle_z
        );
    }

    log::info!(
        "Rendered {} frames ({} passes). Graceful shutdown. Bye!",
        backend.frames_presented,
        backend.passes.len()
    );
    Ok(())
}
