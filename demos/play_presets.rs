//! Plays one fresh roll of each preset category through the default output
//! device.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rfxr::{SoundParams, Synthesizer, presets};

fn main() -> Result<()> {
    let mut rng = StdRng::from_entropy();

    let categories: [(&str, fn(&mut StdRng) -> SoundParams); 7] = [
        ("pickup/coin", presets::pickup_coin),
        ("laser/shoot", presets::laser_shoot),
        ("explosion", presets::explosion),
        ("powerup", presets::powerup),
        ("hit/hurt", presets::hit_hurt),
        ("jump", presets::jump),
        ("blip/select", presets::blip_select),
    ];

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let config = device.default_output_config()?;

    let mut synth = Synthesizer::new();
    for (name, builder) in categories {
        let params = builder(&mut rng);
        let mut samples: Vec<f64> = Vec::new();
        synth.init(&params);
        synth.start();
        while synth.synth_sample(4096, &mut samples) {}

        println!("{name}: {} samples", samples.len());
        match config.sample_format() {
            SampleFormat::F32 => play::<f32>(&device, &config.clone().into(), samples)?,
            SampleFormat::I16 => play::<i16>(&device, &config.clone().into(), samples)?,
            SampleFormat::U16 => play::<u16>(&device, &config.clone().into(), samples)?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format: {}",
                    sample_format
                ));
            }
        }
    }
    Ok(())
}

/// Streams a finished buffer to the device and blocks until it has played
/// out.
fn play<T>(device: &cpal::Device, config: &StreamConfig, samples: Vec<f64>) -> Result<()>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;
    let seconds = samples.len() as f64 / f64::from(config.sample_rate.0);
    let shared = Arc::new(Mutex::new((samples, 0usize)));

    let source = shared.clone();
    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut source = source.lock().unwrap();
            let (samples, pos) = &mut *source;
            for frame in data.chunks_mut(channels) {
                let value = samples.get(*pos).copied().unwrap_or(0.0);
                *pos += 1;
                let value: T = T::from_sample(value);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;
    stream.play()?;

    std::thread::sleep(Duration::from_secs_f64(seconds + 0.1));
    Ok(())
}
