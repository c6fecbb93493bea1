//! The sample-synthesis engine.
//!
//! [`Synthesizer`] turns a [`SoundParams`] value into a deterministic stream
//! of audio samples, one sample at a time. Every sample runs the same fixed
//! pipeline: repeat → arpeggio → pitch slide → vibrato → envelope → duty
//! slide → oscillator → low-pass → high-pass → phaser → clamp → emit. The
//! ordering is load-bearing; the stages feed each other within a single
//! sample, and the audible character of the classic effect categories depends
//! on it.
//!
//! The engine is single-threaded and allocation-free after construction:
//! `synth_sample` is a pure CPU-bound call that fills its request before
//! returning. Concurrent notes require separate instances.

use std::f64::consts::TAU;

use crate::noise::NoiseGenerator;
use crate::params::{SoundParams, WaveForm};
use crate::sink::SampleSink;

/// Slots in the phaser delay line.
const PHASER_BUFFER_SIZE: usize = 1024;

/// Shortest representable oscillator period, in samples.
const MIN_PERIOD: i32 = 8;

/// Volume envelope stage. Stages always advance in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeStage {
    /// Volume ramps 0 → 1 linearly.
    Attack = 0,
    /// Volume holds at 1, plus an optional punch bump that decays away.
    Sustain = 1,
    /// Volume ramps 1 → 0 linearly; the note ends when this stage completes.
    Decay = 2,
}

/// A reusable sound-effect synthesizer.
///
/// One instance is created once and reused across notes: [`init`] recomputes
/// every derived constant from a parameter set, [`start`] rewinds the
/// playback state, and repeated [`synth_sample`] calls produce audio until
/// the engine reports completion.
///
/// Output is deterministic: the same parameters and the same sequence of
/// chunk requests always produce the same samples.
///
/// # Examples
///
/// ```
/// use rfxr::{SoundParams, Synthesizer};
///
/// let mut synth = Synthesizer::new();
/// synth.init(&SoundParams::default());
/// synth.start();
///
/// let mut buffer: Vec<f64> = Vec::new();
/// while synth.synth_sample(1024, &mut buffer) {}
/// assert!(!buffer.is_empty());
/// assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
///
/// [`init`]: Synthesizer::init
/// [`start`]: Synthesizer::start
/// [`synth_sample`]: Synthesizer::synth_sample
pub struct Synthesizer {
    params: SoundParams,
    configured: bool,
    playing: bool,

    // Derived constants, recomputed wholly on init() and read-only afterward.
    base_period: f64,
    max_period: f64,
    base_slide: f64,
    delta_slide: f64,
    base_duty: f64,
    duty_slide: f64,
    arp_mod: f64,
    arp_limit: i32,
    env_lengths: [i32; 3],
    base_lpf_cutoff: f64,
    lpf_sweep: f64,
    lpf_damping: f64,
    base_hpf_cutoff: f64,
    hpf_sweep: f64,
    vib_speed: f64,
    vib_amp: f64,
    base_phaser_offset: f64,
    phaser_sweep: f64,
    rep_limit: i32,

    // Runtime state, rewound by start() and mutated by the pipeline.
    phase: i32,
    fperiod: f64,
    fslide: f64,
    square_duty: f64,
    env_stage: EnvelopeStage,
    env_time: i32,
    env_vol: f64,
    noise_value: f64,
    lpf_pos: f64,
    lpf_vel: f64,
    lpf_cutoff: f64,
    hpf_pos: f64,
    hpf_cutoff: f64,
    vib_phase: f64,
    phaser_offset: f64,
    phaser_buffer: [f64; PHASER_BUFFER_SIZE],
    phaser_pos: usize,
    rep_time: i32,
    arp_time: i32,
    arp_pending: bool,
    noise: NoiseGenerator,
}

/// Squares a value while keeping its sign.
fn signed_square(value: f64) -> f64 {
    if value < 0.0 {
        -(value * value)
    } else {
        value * value
    }
}

impl Synthesizer {
    /// Creates an idle synthesizer. Nothing plays until [`init`] and
    /// [`start`] have both been called.
    ///
    /// [`init`]: Synthesizer::init
    /// [`start`]: Synthesizer::start
    pub fn new() -> Self {
        Self {
            params: SoundParams::default(),
            configured: false,
            playing: false,
            base_period: 0.0,
            max_period: 0.0,
            base_slide: 0.0,
            delta_slide: 0.0,
            base_duty: 0.0,
            duty_slide: 0.0,
            arp_mod: 0.0,
            arp_limit: 0,
            env_lengths: [0; 3],
            base_lpf_cutoff: 0.0,
            lpf_sweep: 0.0,
            lpf_damping: 0.0,
            base_hpf_cutoff: 0.0,
            hpf_sweep: 0.0,
            vib_speed: 0.0,
            vib_amp: 0.0,
            base_phaser_offset: 0.0,
            phaser_sweep: 0.0,
            rep_limit: 0,
            phase: 0,
            fperiod: 0.0,
            fslide: 0.0,
            square_duty: 0.0,
            env_stage: EnvelopeStage::Attack,
            env_time: 0,
            env_vol: 0.0,
            noise_value: 0.0,
            lpf_pos: 0.0,
            lpf_vel: 0.0,
            lpf_cutoff: 0.0,
            hpf_pos: 0.0,
            hpf_cutoff: 0.0,
            vib_phase: 0.0,
            phaser_offset: 0.0,
            phaser_buffer: [0.0; PHASER_BUFFER_SIZE],
            phaser_pos: 0,
            rep_time: 0,
            arp_time: 0,
            arp_pending: false,
            noise: NoiseGenerator::new(),
        }
    }

    /// Recomputes every derived synthesis constant from `params` and reseeds
    /// the noise source. Leaves the synthesizer configured but not playing;
    /// call [`start`] to arm playback.
    ///
    /// [`start`]: Synthesizer::start
    pub fn init(&mut self, params: &SoundParams) {
        self.params = *params;

        self.base_period = 100.0 / (params.base_frequency * params.base_frequency + 0.001);
        self.max_period = 100.0 / (params.frequency_limit * params.frequency_limit + 0.001);
        self.base_slide = 1.0 - params.frequency_slide.powi(3) * 0.01;
        self.delta_slide = -params.frequency_delta_slide.powi(3) * 0.000_001;

        self.base_duty = params.square_duty.clamp(0.0, 1.0);
        self.duty_slide = params.duty_sweep * 0.000_05;

        // The arpeggio knob reads as a musical interval: whole semitones,
        // up to two octaves in either direction.
        let semitones = (params.arpeggio_mod * 24.0).round();
        self.arp_mod = 2.0_f64.powf(-semitones / 12.0);
        self.arp_limit = if params.arpeggio_speed == 1.0 {
            0
        } else {
            ((1.0 - params.arpeggio_speed).powi(2) * 20_000.0 + 32.0) as i32
        };

        self.env_lengths = [
            (params.attack_time * params.attack_time * 100_000.0) as i32,
            (params.sustain_time * params.sustain_time * 100_000.0) as i32,
            (params.decay_time * params.decay_time * 100_000.0) as i32,
        ];

        self.base_lpf_cutoff = params.lpf_cutoff.powi(3) * 0.1;
        self.lpf_sweep = 1.0 + params.lpf_cutoff_sweep * 0.000_1;
        self.lpf_damping = (5.0 / (1.0 + params.lpf_resonance.powi(2) * 20.0)
            * (0.01 + self.base_lpf_cutoff))
            .min(0.8);

        self.base_hpf_cutoff = params.hpf_cutoff.powi(2) * 0.1;
        self.hpf_sweep = 1.0 + params.hpf_cutoff_sweep * 0.000_3;

        self.vib_speed = params.vibrato_speed.powi(2) * 0.01;
        self.vib_amp = params.vibrato_depth * 0.5;

        self.base_phaser_offset = signed_square(params.phaser_offset) * 1020.0;
        self.phaser_sweep = signed_square(params.phaser_sweep);

        self.rep_limit = if params.repeat_speed == 0.0 {
            0
        } else {
            ((1.0 - params.repeat_speed).powi(2) * 20_000.0 + 32.0) as i32
        };

        self.noise.reseed();
        self.configured = true;
        self.playing = false;
    }

    /// Rewinds the playback state and re-enters the playing state. Derived
    /// constants are restored from the snapshot taken by [`init`], not
    /// recomputed. Does nothing before the first `init`.
    ///
    /// [`init`]: Synthesizer::init
    pub fn start(&mut self) {
        if !self.configured {
            return;
        }

        self.phase = 0;
        self.fperiod = self.base_period;
        self.fslide = self.base_slide;
        self.square_duty = self.base_duty;

        self.env_stage = EnvelopeStage::Attack;
        self.env_time = 0;
        self.env_vol = 0.0;

        self.lpf_pos = 0.0;
        self.lpf_vel = 0.0;
        self.lpf_cutoff = self.base_lpf_cutoff;
        self.hpf_pos = 0.0;
        self.hpf_cutoff = self.base_hpf_cutoff;

        self.vib_phase = 0.0;

        self.phaser_offset = self.base_phaser_offset;
        self.phaser_buffer = [0.0; PHASER_BUFFER_SIZE];
        self.phaser_pos = 0;

        self.rep_time = 0;
        self.arp_time = 0;
        self.arp_pending = self.arp_limit != 0;

        self.noise.reseed();
        self.noise_value = self.noise.next_sample();

        self.playing = true;
    }

    /// Returns true while the current note still has samples to produce.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Produces up to `length` samples into `sink`.
    ///
    /// Returns `true` while samples remain to be produced on subsequent
    /// calls, `false` once the note has ended — either because the envelope's
    /// decay stage completed or because the pitch state degenerated
    /// numerically. Calling this before `init`/`start` is defined as an
    /// immediately-finished note: it returns `false` without writing.
    ///
    /// A zero-length request with no pending end condition returns `true`
    /// having written nothing.
    pub fn synth_sample<S: SampleSink + ?Sized>(&mut self, length: usize, sink: &mut S) -> bool {
        for _ in 0..length {
            if !self.playing {
                return false;
            }

            // Repeat: rewind oscillator phase and pitch without touching the
            // volume envelope.
            if self.rep_limit != 0 {
                self.rep_time += 1;
                if self.rep_time >= self.rep_limit {
                    self.rep_time = 0;
                    self.retrigger();
                }
            }

            // Arpeggio: a one-shot pitch jump. Once fired it stays off for
            // the rest of the note, even across repeat retriggers.
            if self.arp_pending {
                self.arp_time += 1;
                if self.arp_time >= self.arp_limit {
                    self.arp_pending = false;
                    self.fperiod *= self.arp_mod;
                }
            }

            // Pitch slide. The slide itself accelerates by the delta-slide,
            // so pitch change is quadratic over time.
            self.fslide += self.delta_slide;
            self.fperiod *= self.fslide;
            if !self.fperiod.is_finite() || self.fperiod <= 0.0 {
                self.playing = false;
                return false;
            }
            if self.fperiod > self.max_period {
                self.fperiod = self.max_period;
                // A configured pitch floor ends the note when reached.
                if self.params.frequency_limit > 0.0 {
                    self.playing = false;
                }
            }

            // Vibrato: an instantaneous perturbation of this sample's
            // effective period; fperiod itself is left untouched.
            let mut rperiod = self.fperiod;
            if self.vib_amp > 0.0 {
                self.vib_phase += self.vib_speed;
                rperiod = self.fperiod * (1.0 + self.vib_phase.sin() * self.vib_amp);
            }
            let period = (rperiod as i32).max(MIN_PERIOD);

            // Volume envelope.
            self.env_time += 1;
            if self.env_time > self.env_lengths[self.env_stage as usize] {
                self.env_time = 0;
                match self.env_stage {
                    EnvelopeStage::Attack => self.env_stage = EnvelopeStage::Sustain,
                    EnvelopeStage::Sustain => self.env_stage = EnvelopeStage::Decay,
                    EnvelopeStage::Decay => self.playing = false,
                }
            }
            let stage_len = self.env_lengths[self.env_stage as usize];
            // Zero-length stages contribute their end-point value instead of
            // dividing by zero.
            let t = if stage_len > 0 {
                f64::from(self.env_time) / f64::from(stage_len)
            } else {
                1.0
            };
            self.env_vol = match self.env_stage {
                EnvelopeStage::Attack => t,
                EnvelopeStage::Sustain => 1.0 + (1.0 - t) * 2.0 * self.params.sustain_punch,
                EnvelopeStage::Decay => {
                    if self.playing {
                        1.0 - t
                    } else {
                        0.0
                    }
                }
            };

            // Duty slide.
            self.square_duty = (self.square_duty + self.duty_slide).clamp(0.0, 1.0);

            // Oscillator. The noise kind redraws only when the phase wraps,
            // holding one value for the full period.
            self.phase += 1;
            if self.phase >= period {
                self.phase %= period;
                if self.params.wave_form == WaveForm::Noise {
                    self.noise_value = self.noise.next_sample();
                }
            }
            let fp = f64::from(self.phase) / f64::from(period);
            let mut sample = match self.params.wave_form {
                WaveForm::Square => {
                    if fp < self.square_duty {
                        1.0
                    } else {
                        -1.0
                    }
                }
                WaveForm::Sawtooth => 1.0 - fp * 2.0,
                WaveForm::Sine => (fp * TAU).sin(),
                WaveForm::Noise => self.noise_value,
            };

            // Low-pass: one pole with damping, cutoff sweeping every sample.
            // Skipped outright at the knob's disabled value so long notes
            // don't accumulate float drift through a no-op filter.
            if self.params.lpf_cutoff != 1.0 {
                self.lpf_cutoff = (self.lpf_cutoff * self.lpf_sweep).clamp(0.0, 0.1);
                self.lpf_vel += (sample - self.lpf_pos) * self.lpf_cutoff;
                self.lpf_vel -= self.lpf_vel * self.lpf_damping;
                self.lpf_pos += self.lpf_vel;
                sample = self.lpf_pos;
            }

            // High-pass: subtract a running low-frequency estimate.
            if self.params.hpf_cutoff != 0.0 {
                self.hpf_cutoff = (self.hpf_cutoff * self.hpf_sweep).clamp(0.000_01, 0.1);
                self.hpf_pos += (sample - self.hpf_pos) * self.hpf_cutoff;
                sample -= self.hpf_pos;
            }

            // Phaser: mix in a second tap read backward from a ring buffer.
            if self.params.phaser_offset != 0.0 || self.params.phaser_sweep != 0.0 {
                self.phaser_offset += self.phaser_sweep;
                let tap = (self.phaser_offset.abs() as usize).min(PHASER_BUFFER_SIZE - 1);
                self.phaser_buffer[self.phaser_pos] = sample;
                let read = (self.phaser_pos + PHASER_BUFFER_SIZE - tap) % PHASER_BUFFER_SIZE;
                sample += self.phaser_buffer[read];
                self.phaser_pos = (self.phaser_pos + 1) % PHASER_BUFFER_SIZE;
            }

            let out = (sample * self.env_vol).clamp(-1.0, 1.0);
            if !out.is_finite() {
                self.playing = false;
                return false;
            }
            sink.write(out);
        }
        self.playing
    }

    /// Rewinds oscillator phase and pitch state to their post-init base
    /// values. The envelope, filters, phaser, and arpeggio keep going.
    fn retrigger(&mut self) {
        self.phase = 0;
        self.fperiod = self.base_period;
        self.fslide = self.base_slide;
        self.square_duty = self.base_duty;
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
