//! Renders one roll of each preset category to a WAV file in the current
//! directory.
//!
//! Run with `cargo run --example export_wav --features wav-export`.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rfxr::{SoundParams, Synthesizer, WavSink, presets};

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(4242);

    let categories: [(&str, fn(&mut StdRng) -> SoundParams); 7] = [
        ("pickup_coin", presets::pickup_coin),
        ("laser_shoot", presets::laser_shoot),
        ("explosion", presets::explosion),
        ("powerup", presets::powerup),
        ("hit_hurt", presets::hit_hurt),
        ("jump", presets::jump),
        ("blip_select", presets::blip_select),
    ];

    let mut synth = Synthesizer::new();
    for (name, builder) in categories {
        let params = builder(&mut rng);
        let path = format!("{name}.wav");

        let mut sink = WavSink::create(&path)?;
        synth.init(&params);
        synth.start();
        while synth.synth_sample(4096, &mut sink) {}
        sink.finalize()?;

        println!("wrote {path}");
    }
    Ok(())
}
