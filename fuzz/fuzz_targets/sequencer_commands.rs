#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use zenframe::core::FrameCore;
use zenframe::model::{ImageItem, PersistedState, PlayMode};

fuzz_target!(|data: &[u8]| {
    let seed = data.first().copied().unwrap_or_default() as u64;
    let mut core = FrameCore::with_rng(PersistedState::default(), SmallRng::seed_from_u64(seed));
    let len = data.len() % 24;
    core.append_items(
        (0..len)
            .map(|idx| ImageItem::from_path(format!("frame_{idx}.png")))
            .collect(),
    );

    for byte in data {
        match byte % 8 {
            0 => core.set_mode(PlayMode::ALL[(*byte as usize / 8) % PlayMode::ALL.len()]),
            1 | 2 => {
                let _ = core.advance();
            }
            3 => {
                let _ = core.retreat();
            }
            4 => {
                let _ = core.toggle_favorite();
            }
            5 => core.cycle_mode(),
            6 => {
                core.adjust_interval(f32::from(*byte) - 128.0);
            }
            _ => {
                let _ = core.reveal();
            }
        }

        if let Some(current) = core.current {
            assert!(current < core.items.len());
        }
        assert!(core.history().len() <= 50);
        assert!(core.history().to_vec().iter().all(|pos| *pos < core.items.len()));
    }
});
