//! Random parameter-set builders for the classic effect categories.
//!
//! Each builder rolls a fresh [`SoundParams`] in a recognizable family —
//! coin pickups, laser zaps, explosions, and so on — from a caller-supplied
//! random number generator. Pass a seeded RNG to make the rolls themselves
//! reproducible:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rfxr::presets;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let zap = presets::laser_shoot(&mut rng);
//! assert!(zap.decay_time >= 0.0);
//! ```

use rand::Rng;

use crate::params::{SoundParams, WaveForm};

/// A short coin/pickup chime: square wave, instant attack, punchy decay,
/// often with an upward arpeggio jump.
pub fn pickup_coin<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams {
        base_frequency: rng.gen_range(0.4..0.9),
        attack_time: 0.0,
        sustain_time: rng.gen_range(0.0..0.1),
        decay_time: rng.gen_range(0.1..0.5),
        sustain_punch: rng.gen_range(0.3..0.6),
        ..SoundParams::default()
    };
    if rng.gen_bool(0.5) {
        params.arpeggio_speed = rng.gen_range(0.5..0.7);
        params.arpeggio_mod = rng.gen_range(0.2..0.6);
    }
    params
}

/// A descending laser zap: square or sawtooth with a fast downward slide,
/// sometimes cut off at a pitch floor, sometimes phased.
pub fn laser_shoot<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams::default();

    params.wave_form = match rng.gen_range(0..3) {
        0 => WaveForm::Square,
        1 => WaveForm::Sawtooth,
        _ => WaveForm::Sine,
    };

    params.base_frequency = rng.gen_range(0.5..1.0);
    params.frequency_limit = (params.base_frequency - 0.2 - rng.gen_range(0.0..0.6)).max(0.2);
    params.frequency_slide = -0.15 - rng.gen_range(0.0..0.2);
    if rng.gen_range(0..3) == 0 {
        params.base_frequency = rng.gen_range(0.3..0.9);
        params.frequency_limit = rng.gen_range(0.0..0.1);
        params.frequency_slide = -0.35 - rng.gen_range(0.0..0.3);
    }

    if params.wave_form == WaveForm::Square {
        if rng.gen_bool(0.5) {
            params.square_duty = rng.gen_range(0.25..0.5);
            params.duty_sweep = rng.gen_range(0.0..0.2);
        } else {
            params.square_duty = rng.gen_range(0.05..0.3);
            params.duty_sweep = -rng.gen_range(0.0..0.7);
        }
    }

    params.attack_time = 0.0;
    params.sustain_time = 0.1 + rng.gen_range(0.0..0.2);
    params.decay_time = rng.gen_range(0.0..0.4);
    if rng.gen_bool(0.5) {
        params.sustain_punch = rng.gen_range(0.0..0.3);
    }
    if rng.gen_range(0..3) == 0 {
        params.phaser_offset = rng.gen_range(0.0..0.2);
        params.phaser_sweep = -rng.gen_range(0.0..0.2);
    }
    if rng.gen_bool(0.5) {
        params.hpf_cutoff = rng.gen_range(0.0..0.3);
    }
    params
}

/// A noise-based explosion with a falling rumble, heavy punch, and the
/// occasional retrigger or phaser smear.
pub fn explosion<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams {
        wave_form: WaveForm::Noise,
        ..SoundParams::default()
    };

    if rng.gen_bool(0.5) {
        params.base_frequency = rng.gen_range(0.1..0.5);
        params.frequency_slide = -0.1 + rng.gen_range(0.0..0.4);
    } else {
        params.base_frequency = rng.gen_range(0.2..0.9);
        params.frequency_slide = -0.2 - rng.gen_range(0.0..0.2);
    }
    params.base_frequency *= params.base_frequency;
    if rng.gen_range(0..5) == 0 {
        params.frequency_slide = 0.0;
    }
    if rng.gen_range(0..3) == 0 {
        params.repeat_speed = rng.gen_range(0.3..0.8);
    }

    params.attack_time = 0.0;
    params.sustain_time = 0.1 + rng.gen_range(0.0..0.3);
    params.decay_time = rng.gen_range(0.0..0.5);
    params.sustain_punch = 0.2 + rng.gen_range(0.0..0.6);

    if rng.gen_bool(0.5) {
        params.phaser_offset = -0.3 + rng.gen_range(0.0..0.9);
        params.phaser_sweep = -rng.gen_range(0.0..0.3);
    }
    if rng.gen_bool(0.5) {
        params.vibrato_depth = rng.gen_range(0.0..0.7);
        params.vibrato_speed = rng.gen_range(0.0..0.6);
    }
    if rng.gen_range(0..3) == 0 {
        params.arpeggio_speed = rng.gen_range(0.6..0.9);
        params.arpeggio_mod = rng.gen_range(-0.8..0.8);
    }
    params
}

/// A rising power-up arpeggio or slide, square or sawtooth.
pub fn powerup<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams::default();

    if rng.gen_bool(0.5) {
        params.wave_form = WaveForm::Sawtooth;
    } else {
        params.square_duty = 0.2 + rng.gen_range(0.0..0.3);
    }

    params.base_frequency = rng.gen_range(0.2..0.5);
    if rng.gen_bool(0.5) {
        params.frequency_slide = 0.1 + rng.gen_range(0.0..0.4);
        params.repeat_speed = rng.gen_range(0.4..0.8);
    } else {
        params.frequency_slide = 0.05 + rng.gen_range(0.0..0.2);
        if rng.gen_bool(0.5) {
            params.vibrato_depth = rng.gen_range(0.0..0.7);
            params.vibrato_speed = rng.gen_range(0.0..0.6);
        }
    }

    params.attack_time = 0.0;
    params.sustain_time = rng.gen_range(0.0..0.4);
    params.decay_time = 0.1 + rng.gen_range(0.0..0.4);
    params
}

/// A short impact thud: falling pitch, tiny sustain, quick decay.
pub fn hit_hurt<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams::default();

    params.wave_form = match rng.gen_range(0..3) {
        0 => WaveForm::Square,
        1 => WaveForm::Sawtooth,
        _ => WaveForm::Noise,
    };
    if params.wave_form == WaveForm::Square {
        params.square_duty = 0.2 + rng.gen_range(0.0..0.3);
    }

    params.base_frequency = rng.gen_range(0.2..0.8);
    params.frequency_slide = -0.3 - rng.gen_range(0.0..0.4);
    params.attack_time = 0.0;
    params.sustain_time = rng.gen_range(0.0..0.1);
    params.decay_time = 0.1 + rng.gen_range(0.0..0.2);
    if rng.gen_bool(0.5) {
        params.hpf_cutoff = rng.gen_range(0.0..0.3);
    }
    params
}

/// A bouncy jump blip: square wave sliding upward.
pub fn jump<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams {
        square_duty: 0.2 + rng.gen_range(0.0..0.3),
        base_frequency: rng.gen_range(0.3..0.6),
        frequency_slide: 0.1 + rng.gen_range(0.0..0.2),
        attack_time: 0.0,
        sustain_time: 0.1 + rng.gen_range(0.0..0.3),
        decay_time: 0.1 + rng.gen_range(0.0..0.2),
        ..SoundParams::default()
    };
    if rng.gen_bool(0.5) {
        params.hpf_cutoff = rng.gen_range(0.0..0.3);
    }
    if rng.gen_bool(0.5) {
        params.lpf_cutoff = 1.0 - rng.gen_range(0.0..0.6);
    }
    params
}

/// A tiny UI blip: square or sine, very short.
pub fn blip_select<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams::default();
    if rng.gen_bool(0.5) {
        params.wave_form = WaveForm::Sawtooth;
    } else {
        params.square_duty = 0.2 + rng.gen_range(0.0..0.3);
    }
    params.base_frequency = rng.gen_range(0.2..0.6);
    params.attack_time = 0.0;
    params.sustain_time = 0.1 + rng.gen_range(0.0..0.1);
    params.decay_time = rng.gen_range(0.0..0.2);
    params.hpf_cutoff = 0.1;
    params
}

/// A fully random parameter set, biased toward audible results: heavily
/// shaped rolls keep most knobs near zero, and a too-short envelope is
/// stretched so every roll makes a sound.
pub fn randomize<R: Rng>(rng: &mut R) -> SoundParams {
    let mut params = SoundParams {
        wave_form: match rng.gen_range(0..4) {
            0 => WaveForm::Square,
            1 => WaveForm::Sawtooth,
            2 => WaveForm::Sine,
            _ => WaveForm::Noise,
        },
        ..SoundParams::default()
    };

    params.base_frequency = rng.gen_range(-1.0..1.0_f64).powi(2);
    if rng.gen_bool(0.5) {
        params.base_frequency = rng.gen_range(-1.0..1.0_f64).powi(3) + 0.5;
    }
    params.frequency_limit = 0.0;
    params.frequency_slide = rng.gen_range(-1.0..1.0_f64).powi(5);
    if params.base_frequency > 0.7 && params.frequency_slide > 0.2 {
        params.frequency_slide = -params.frequency_slide;
    }
    if params.base_frequency < 0.2 && params.frequency_slide < -0.05 {
        params.frequency_slide = -params.frequency_slide;
    }
    params.frequency_delta_slide = rng.gen_range(-1.0..1.0_f64).powi(3);

    params.square_duty = rng.gen_range(0.0..1.0);
    params.duty_sweep = rng.gen_range(-1.0..1.0_f64).powi(3);

    params.vibrato_depth = rng.gen_range(-1.0..1.0_f64).powi(3).max(0.0);
    params.vibrato_speed = rng.gen_range(0.0..1.0);

    params.attack_time = rng.gen_range(-1.0..1.0_f64).powi(3).max(0.0);
    params.sustain_time = rng.gen_range(-1.0..1.0_f64).powi(2);
    params.decay_time = rng.gen_range(0.0..1.0);
    params.sustain_punch = rng.gen_range(0.0..0.8_f64).powi(2);
    if params.attack_time + params.sustain_time + params.decay_time < 0.2 {
        params.sustain_time += 0.2 + rng.gen_range(0.0..0.3);
        params.decay_time += 0.2 + rng.gen_range(0.0..0.3);
    }

    params.lpf_resonance = rng.gen_range(0.0..1.0);
    params.lpf_cutoff = 1.0 - rng.gen_range(0.0..1.0_f64).powi(3);
    params.lpf_cutoff_sweep = rng.gen_range(-1.0..1.0_f64).powi(3);
    if params.lpf_cutoff < 0.1 && params.lpf_cutoff_sweep < -0.05 {
        params.lpf_cutoff_sweep = -params.lpf_cutoff_sweep;
    }
    params.hpf_cutoff = rng.gen_range(0.0..1.0_f64).powi(5);
    params.hpf_cutoff_sweep = rng.gen_range(-1.0..1.0_f64).powi(5);

    params.phaser_offset = rng.gen_range(-1.0..1.0_f64).powi(3);
    params.phaser_sweep = rng.gen_range(-1.0..1.0_f64).powi(3);

    params.repeat_speed = rng.gen_range(0.0..1.0);
    params.arpeggio_speed = rng.gen_range(0.0..1.0);
    params.arpeggio_mod = rng.gen_range(-1.0..1.0);

    params
}

/// Nudges roughly half the knobs of an existing sound by a small random
/// amount, for exploring the neighborhood of a sound that is almost right.
pub fn mutate<R: Rng>(params: &mut SoundParams, rng: &mut R) {
    nudge(rng, &mut params.base_frequency);
    nudge(rng, &mut params.frequency_slide);
    nudge(rng, &mut params.frequency_delta_slide);
    nudge(rng, &mut params.square_duty);
    nudge(rng, &mut params.duty_sweep);
    nudge(rng, &mut params.vibrato_depth);
    nudge(rng, &mut params.vibrato_speed);
    nudge(rng, &mut params.attack_time);
    nudge(rng, &mut params.sustain_time);
    nudge(rng, &mut params.decay_time);
    nudge(rng, &mut params.sustain_punch);
    nudge(rng, &mut params.lpf_resonance);
    nudge(rng, &mut params.lpf_cutoff);
    nudge(rng, &mut params.lpf_cutoff_sweep);
    nudge(rng, &mut params.hpf_cutoff);
    nudge(rng, &mut params.hpf_cutoff_sweep);
    nudge(rng, &mut params.phaser_offset);
    nudge(rng, &mut params.phaser_sweep);
    nudge(rng, &mut params.repeat_speed);
    nudge(rng, &mut params.arpeggio_speed);
    nudge(rng, &mut params.arpeggio_mod);
}

fn nudge<R: Rng>(rng: &mut R, value: &mut f64) {
    if rng.gen_bool(0.5) {
        *value += rng.gen_range(-0.05..0.05);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_pickup_coin_in_domain() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = pickup_coin(&mut rng);
            assert!(params.base_frequency >= 0.4 && params.base_frequency < 0.9);
            assert!(params.decay_time > 0.0);
            assert_eq!(params.attack_time, 0.0);
        }
    }

    #[test]
    fn test_laser_shoot_slides_down() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = laser_shoot(&mut rng);
            assert!(params.frequency_slide < 0.0);
            assert!(params.frequency_limit >= 0.0);
        }
    }

    #[test]
    fn test_explosion_uses_noise() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = explosion(&mut rng);
            assert_eq!(params.wave_form, WaveForm::Noise);
            assert!(params.sustain_punch >= 0.2);
        }
    }

    #[test]
    fn test_powerup_slides_up() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = powerup(&mut rng);
            assert!(params.frequency_slide > 0.0);
        }
    }

    #[test]
    fn test_jump_has_audible_envelope() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = jump(&mut rng);
            assert!(params.sustain_time >= 0.1);
            assert!(params.decay_time >= 0.1);
        }
    }

    #[test]
    fn test_blip_select_has_highpass() {
        let mut rng = rng();
        for _ in 0..100 {
            let params = blip_select(&mut rng);
            assert_eq!(params.hpf_cutoff, 0.1);
        }
    }

    #[test]
    fn test_randomize_always_audible() {
        let mut rng = rng();
        for _ in 0..200 {
            let params = randomize(&mut rng);
            assert!(params.attack_time + params.sustain_time + params.decay_time >= 0.2);
            assert!(params.vibrato_depth >= 0.0);
            assert!(params.attack_time >= 0.0);
        }
    }

    #[test]
    fn test_mutate_stays_close() {
        let mut rng = rng();
        let original = SoundParams::default();
        let mut mutated = original;
        mutate(&mut mutated, &mut rng);
        assert!((mutated.base_frequency - original.base_frequency).abs() < 0.05);
        assert!((mutated.decay_time - original.decay_time).abs() < 0.05);
        assert_eq!(mutated.wave_form, original.wave_form);
    }

    #[test]
    fn test_same_seed_same_preset() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(explosion(&mut a), explosion(&mut b));
    }
}
