//! Headless host simulator.
//!
//! Lays out one surface per gradient kind, animates them from a driver
//! thread, and runs a paced frame loop that resolves and "draws" each
//! surface into a terminal preview.

mod config;
mod driver;
mod pacer;
mod text_raster;

use anyhow::{Context, Result};
use gradia_engine::logging::{LoggingConfig, init_logging};
use gradia_engine::{Argb, FrameOutcome, GradientKind, GradientSurface, GradientUpdate, InstanceConfig};

use config::StudioConfig;
use pacer::FramePacer;
use text_raster::TextRasterizer;

const KINDS: [GradientKind; 3] = [GradientKind::Linear, GradientKind::Radial, GradientKind::Sweep];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_args(std::env::args().skip(1)).context("parsing arguments")?;
    log::info!(
        "studio: {} frames at {}x{}, {:?} per frame",
        config.frames,
        config.width,
        config.height,
        config.frame_interval
    );

    let instance_config = InstanceConfig::default().with_empty_fallback(Argb::BLACK, Argb::BLACK);
    let mut surfaces: Vec<GradientSurface<TextRasterizer>> = KINDS
        .iter()
        .map(|&kind| GradientSurface::with_config(kind, instance_config, TextRasterizer::new()))
        .collect();

    // The host's first layout pass has not happened yet; the first frame
    // must skip rather than draw against zero bounds.
    for surface in &mut surfaces {
        surface.apply(GradientUpdate::new().colors([Argb::BLACK, Argb::WHITE]));
    }

    let targets = surfaces.iter().map(|s| (s.instance().kind(), s.sender())).collect();
    let driver = driver::spawn(targets, config.frames * 2, config.frame_interval);

    let mut pacer = FramePacer::new(config.frame_interval);
    let mut skipped = 0u64;

    for _ in 0..config.frames {
        let ft = pacer.wait();
        if ft.frame_index == 1 {
            for surface in &mut surfaces {
                surface.layout(config.width, config.height);
            }
        }

        for surface in &mut surfaces {
            if surface.frame() == FrameOutcome::Skipped {
                skipped += 1;
            }
        }

        if config.preview_every > 0 && ft.frame_index > 0 && ft.frame_index % config.preview_every == 0 {
            print_preview(ft.frame_index, &surfaces);
        }
    }

    let mut rasterizers = Vec::with_capacity(surfaces.len());
    for surface in surfaces {
        let kind = surface.instance().kind();
        let stats = surface.instance().stats();
        println!(
            "{:<7} applies={:<4} resolves={:<4} rebuilds={:<4} deferred={:<3} pushed={:<4} coalesced={}",
            kind.name(),
            stats.applies,
            stats.resolves,
            stats.rebuilds,
            stats.deferred,
            stats.mailbox.pushed,
            stats.mailbox.coalesced,
        );
        rasterizers.push((kind, surface.destroy()));
    }

    let accepted = driver
        .join()
        .map_err(|_| anyhow::anyhow!("animation driver panicked"))?;

    for (kind, r) in &rasterizers {
        log::debug!("{}: {} native rebuilds, {} draws", kind.name(), r.rebuilds, r.draws);
    }
    println!("driver pushed {accepted} updates; {skipped} surface-frames skipped");
    Ok(())
}

fn print_preview(frame: u64, surfaces: &[GradientSurface<TextRasterizer>]) {
    println!("── frame {frame} ──");
    for surface in surfaces {
        println!("{}:", surface.instance().kind().name());
        for row in surface.rasterizer().render() {
            println!("  {row}");
        }
    }
}
