//! Particle Links entry point
//!
//! Headless native driver: runs the frame loop against a `MeshSurface`,
//! with optional scripted clicks, and logs stats once per simulated second.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use glam::Vec2;

use particle_links::platform::{FrameClock, FramePacer};
use particle_links::renderer::MeshSurface;
use particle_links::{App, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// RNG seed (overrides the settings file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Click at the center of the area every N frames (0 = never)
    #[arg(long, default_value_t = 0)]
    spawn_every: u64,

    /// Ignore the frame limit and use a fixed 1/60 s step
    #[arg(long)]
    fast: bool,

    /// Write the effective settings to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    if let Some(path) = &args.write_config {
        if let Err(e) = settings.save(path) {
            log::error!("Failed to write settings: {}", e);
            process::exit(1);
        }
        return;
    }

    log::info!("{} (headless) starting...", settings.title);
    run(&args, settings);
}

fn run(args: &Args, settings: Settings) {
    let frame_limit = settings.frame_limit;
    let stats_every = u64::from(frame_limit.max(1));
    let center = settings.physics.bounds() / 2.0;

    let mut surface = MeshSurface::new(settings.circle_segments);
    let mut app = App::new(settings);
    let mut clock = FrameClock::new();
    let mut pacer = FramePacer::new(if args.fast { 0 } else { frame_limit });

    for frame in 0..args.frames {
        if args.spawn_every > 0 && frame % args.spawn_every == 0 {
            app.click(center + click_jitter(frame));
        }

        let dt = if args.fast { 1.0 / 60.0 } else { clock.restart() };
        if !app.frame(dt, &mut surface) {
            break;
        }

        if app.frame_count() % stats_every == 0 {
            log::info!(
                "frame {}: {} particles, {} links, {} vertices ({} bytes to upload)",
                app.frame_count(),
                app.system().len(),
                app.system().connections().len(),
                surface.vertex_count(),
                surface.line_bytes().len() + surface.triangle_bytes().len(),
            );
        }

        pacer.wait();
    }

    app.events_mut().close();
    app.frame(0.0, &mut surface);
    log::info!("Finished after {} frames", app.frame_count());
}

/// Deterministic offset so scripted clicks don't stack on one point
fn click_jitter(frame: u64) -> Vec2 {
    let t = frame as f32 * 0.7;
    Vec2::new(t.cos(), t.sin()) * 150.0
}
