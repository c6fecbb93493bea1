//! Rfxr - A procedural sound-effect synthesis library for Rust
//!
//! This library turns a compact set of numeric knobs into retro-flavored
//! sound effects: coin pickups, laser zaps, explosions, and anything in
//! between. A [`Synthesizer`] runs a fixed per-sample pipeline — pitch and
//! volume envelopes, vibrato, arpeggio, retrigger, two filters, and a phaser
//! — and pushes finished samples into any [`SampleSink`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rfxr::{Synthesizer, presets};
//!
//! let mut rng = StdRng::seed_from_u64(21);
//! let params = presets::pickup_coin(&mut rng);
//!
//! let mut synth = Synthesizer::new();
//! synth.init(&params);
//! synth.start();
//!
//! let mut samples: Vec<f64> = Vec::new();
//! while synth.synth_sample(1024, &mut samples) {}
//! assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
//! ```

pub mod history;
pub mod noise;
pub mod params;
pub mod presets;
pub mod sink;
pub mod synth;

// Re-export commonly used types at the crate root
pub use history::{History, HistoryEntry};
pub use noise::NoiseGenerator;
pub use params::{SoundParams, WaveForm};
#[cfg(feature = "wav-export")]
pub use sink::WavSink;
pub use sink::SampleSink;
pub use synth::Synthesizer;

/// Sample rate the pipeline's time constants are tuned for, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
