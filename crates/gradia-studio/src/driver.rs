//! Animation driver: the "other thread" of the simulation.
//!
//! Pushes one partial update per tick to each surface and never waits for
//! the frame loop, so bursts between two frames coalesce in the mailbox.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use gradia_engine::{Argb, GradientKind, GradientUpdate, UpdateSender};

const PALETTES: [[u32; 3]; 3] = [
    [0xFF10_1030, 0xFF30_80F0, 0xFFF0_F0FF],
    [0xFF00_0000, 0xFFF0_6020, 0xFFFF_FFFF],
    [0xFF20_2020, 0xFF20_C080, 0xFFE0_FFE0],
];

/// Spawns the driver. It runs `ticks` ticks, or until every surface is
/// destroyed, and returns how many updates were accepted.
pub fn spawn(targets: Vec<(GradientKind, UpdateSender)>, ticks: u64, interval: Duration) -> JoinHandle<u64> {
    thread::spawn(move || {
        let mut accepted = 0;
        for tick in 0..ticks {
            let mut alive = false;
            for (kind, tx) in &targets {
                if tx.push(update_for(*kind, tick)).is_ok() {
                    accepted += 1;
                    alive = true;
                }
            }
            if !alive {
                log::debug!("all surfaces gone after {tick} ticks");
                break;
            }
            // Twice the frame rate, so roughly every other push coalesces.
            thread::sleep(interval / 2);
        }
        accepted
    })
}

fn update_for(kind: GradientKind, tick: u64) -> GradientUpdate {
    let phase = tick as f64;
    let mut update = match kind {
        GradientKind::Linear => GradientUpdate::new().angle((phase * 3.0) % 360.0),
        GradientKind::Radial => {
            let pct = 35.0 + 15.0 * (phase / 20.0).sin();
            GradientUpdate::new().radius(format!("{pct:.1}%").as_str())
        }
        GradientKind::Sweep => GradientUpdate::new().start_angle((phase * 5.0) % 360.0).end_angle(360.0),
    };

    if tick % 60 == 0 {
        let palette = PALETTES[(tick / 60 % PALETTES.len() as u64) as usize];
        update = update.colors(palette.map(Argb)).positions(vec![0.0, 0.6, 1.0]);
    }
    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradia_engine::update::Patch;

    #[test]
    fn palette_changes_on_schedule() {
        assert!(update_for(GradientKind::Linear, 0).colors.is_present());
        assert!(update_for(GradientKind::Linear, 1).colors.is_absent());
        assert!(update_for(GradientKind::Linear, 60).colors.is_present());
    }

    #[test]
    fn each_kind_animates_its_own_field() {
        assert_eq!(update_for(GradientKind::Linear, 2).angle, Patch::Set(6.0));
        assert!(update_for(GradientKind::Radial, 2).radius.is_present());
        assert_eq!(update_for(GradientKind::Sweep, 2).start_angle, Patch::Set(10.0));
    }
}
