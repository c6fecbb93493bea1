//! Sound effect parameter sets.
//!
//! A [`SoundParams`] value is the complete, immutable description of one
//! sound effect: which oscillator to run and how its pitch, volume, and
//! effects evolve over the lifetime of the note. The synthesizer derives all
//! of its internal constants from this struct on [`init`].
//!
//! [`init`]: crate::Synthesizer::init

/// Oscillator waveform kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveForm {
    /// Pulse wave with a controllable duty cycle.
    Square,
    /// Linear ramp from +1 to -1 over each period.
    Sawtooth,
    /// Sinusoid of the oscillator phase.
    Sine,
    /// One pseudo-random value held for each full oscillator period.
    Noise,
}

/// The immutable knob set describing one sound effect's timbre.
///
/// All knobs are normalized scalars: bipolar knobs (slides, sweeps, the
/// arpeggio modifier) live in [-1, 1], the rest in [0, 1]. The synthesizer
/// never rejects out-of-range values; it clamps internally where a runaway
/// knob could destabilize the pipeline.
///
/// # Examples
///
/// ```
/// use rfxr::{SoundParams, WaveForm};
///
/// let params = SoundParams {
///     wave_form: WaveForm::Sine,
///     base_frequency: 0.5,
///     decay_time: 0.3,
///     ..SoundParams::default()
/// };
/// assert_eq!(params.sustain_time, 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundParams {
    /// Oscillator waveform kind.
    pub wave_form: WaveForm,

    /// Attack stage length knob (squared scaling, so low values feel fast).
    pub attack_time: f64,
    /// Sustain stage length knob.
    pub sustain_time: f64,
    /// Decay stage length knob.
    pub decay_time: f64,
    /// Extra volume bump at the start of the sustain stage, decaying away
    /// over the stage.
    pub sustain_punch: f64,

    /// Base pitch knob. Higher values mean shorter oscillator periods.
    pub base_frequency: f64,
    /// Pitch floor. When positive, a downward slide that reaches this
    /// frequency ends the note.
    pub frequency_limit: f64,
    /// Linear pitch slide, applied every sample. Positive slides up.
    pub frequency_slide: f64,
    /// Slide acceleration, accumulated into the slide every sample.
    pub frequency_delta_slide: f64,

    /// Vibrato depth. Zero disables the vibrato stage entirely.
    pub vibrato_depth: f64,
    /// Vibrato oscillation speed.
    pub vibrato_speed: f64,

    /// Arpeggio pitch jump in a semitone-like scale: the knob maps to a whole
    /// number of semitones (±2 octaves over the knob range). Positive jumps
    /// up.
    pub arpeggio_mod: f64,
    /// How soon the arpeggio jump happens. 1.0 disables it entirely.
    pub arpeggio_speed: f64,

    /// Square wave duty cycle; 0.5 is a symmetric square.
    pub square_duty: f64,
    /// Per-sample drift of the duty cycle.
    pub duty_sweep: f64,

    /// Retrigger rate: resets oscillator phase and pitch to their start
    /// values without restarting the volume envelope. 0.0 disables.
    pub repeat_speed: f64,

    /// Phaser tap offset. Together with `phaser_sweep`, zero disables the
    /// phaser stage entirely.
    pub phaser_offset: f64,
    /// Per-sample drift of the phaser tap offset.
    pub phaser_sweep: f64,

    /// Low-pass filter cutoff. 1.0 means the filter is disabled.
    pub lpf_cutoff: f64,
    /// Per-sample multiplicative sweep of the low-pass cutoff.
    pub lpf_cutoff_sweep: f64,
    /// Low-pass resonance; higher values damp the filter less.
    pub lpf_resonance: f64,

    /// High-pass filter cutoff. 0.0 means the filter is disabled.
    pub hpf_cutoff: f64,
    /// Per-sample multiplicative sweep of the high-pass cutoff.
    pub hpf_cutoff_sweep: f64,
}

impl Default for SoundParams {
    /// The classic "new sound" state: a plain square blip with a short
    /// sustain and decay and both filters disabled.
    fn default() -> Self {
        Self {
            wave_form: WaveForm::Square,
            attack_time: 0.0,
            sustain_time: 0.3,
            decay_time: 0.4,
            sustain_punch: 0.0,
            base_frequency: 0.3,
            frequency_limit: 0.0,
            frequency_slide: 0.0,
            frequency_delta_slide: 0.0,
            vibrato_depth: 0.0,
            vibrato_speed: 0.0,
            arpeggio_mod: 0.0,
            arpeggio_speed: 0.0,
            square_duty: 0.5,
            duty_sweep: 0.0,
            repeat_speed: 0.0,
            phaser_offset: 0.0,
            phaser_sweep: 0.0,
            lpf_cutoff: 1.0,
            lpf_cutoff_sweep: 0.0,
            lpf_resonance: 0.0,
            hpf_cutoff: 0.0,
            hpf_cutoff_sweep: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square() {
        let params = SoundParams::default();
        assert_eq!(params.wave_form, WaveForm::Square);
    }

    #[test]
    fn test_default_filters_disabled() {
        let params = SoundParams::default();
        assert_eq!(params.lpf_cutoff, 1.0);
        assert_eq!(params.hpf_cutoff, 0.0);
    }

    #[test]
    fn test_default_has_audible_envelope() {
        let params = SoundParams::default();
        assert!(params.sustain_time > 0.0);
        assert!(params.decay_time > 0.0);
    }

    #[test]
    fn test_struct_update_syntax() {
        let params = SoundParams {
            base_frequency: 0.8,
            ..SoundParams::default()
        };
        assert_eq!(params.base_frequency, 0.8);
        assert_eq!(params.square_duty, 0.5);
    }
}
