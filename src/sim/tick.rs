//! Per-frame simulation step
//!
//! One synchronous pass per display frame, driven by the elapsed wall-clock
//! delta. The driver clamps `dt` to [`crate::consts::MAX_FRAME_DT`] before
//! calling in; the engine itself never fails.

use super::state::{Phase, SimState};

/// Fatigue ramp: 0 at the moment the eyes open, saturating at 1 after
/// `ramp_secs` of sustained eyes-open time.
pub fn fatigue(time_without_blink: f32, ramp_secs: f32) -> f32 {
    (time_without_blink / ramp_secs).clamp(0.0, 1.0)
}

/// Advance the simulation by `dt` seconds. No-op unless running.
pub fn tick(state: &mut SimState, dt: f32) {
    if state.phase != Phase::Running {
        return;
    }

    let cfg = state.config;

    if state.blinking {
        state.time_blinking += dt;
        state.time_without_blink = 0.0;

        state.stamina = (state.stamina + cfg.stamina_regen_rate * dt).clamp(0.0, 100.0);
        // It moves while your eyes are closed
        state.distance =
            (state.distance - cfg.threat_advance_rate * dt).clamp(0.0, cfg.max_distance);
        state.blur = (state.blur - cfg.blur_rate * dt).clamp(0.0, cfg.max_blur);
        state.shake = (state.shake - cfg.shake_rate * dt).clamp(0.0, cfg.max_shake);
    } else {
        state.time_without_blink += dt;
        state.time_blinking = 0.0;

        state.stamina = (state.stamina - cfg.stamina_drain_rate * dt).clamp(0.0, 100.0);
        state.distance =
            (state.distance + cfg.threat_retreat_rate * dt).clamp(0.0, cfg.max_distance);

        // Distortion ramps in over sustained eyes-open time
        let fatigue = fatigue(state.time_without_blink, cfg.fatigue_ramp_secs);
        state.blur = (state.blur + cfg.blur_rate * fatigue * dt).clamp(0.0, cfg.max_blur);
        state.shake = (state.shake + cfg.shake_rate * fatigue * dt).clamp(0.0, cfg.max_shake);
    }

    if state.stamina <= 0.0 || state.distance <= 0.0 {
        state.phase = Phase::Caught;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Config;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn started() -> SimState {
        let mut state = SimState::new(Config::default());
        state.start();
        state
    }

    #[test]
    fn one_second_eyes_open_from_start() {
        let mut state = started();
        tick(&mut state, 1.0);

        assert!((state.stamina - 65.0).abs() < EPS);
        // Watching pushes the threat back, but distance is already maxed
        assert_eq!(state.distance, 100.0);
        assert!(state.running());
    }

    #[test]
    fn watching_recovers_distance() {
        let mut state = started();
        state.distance = 50.0;
        tick(&mut state, 1.0);
        assert!((state.distance - 52.0).abs() < EPS);
    }

    #[test]
    fn stamina_exhaustion_ends_the_run() {
        let mut state = started();

        // 2.8 s of eyes-open drain leaves stamina at 2.0
        for _ in 0..28 {
            tick(&mut state, 0.1);
        }
        assert!((state.stamina - 2.0).abs() < 1e-3);
        assert!(state.running());

        tick(&mut state, 0.1);
        assert_eq!(state.stamina, 0.0);
        assert_eq!(state.phase, Phase::Caught);

        // Terminal phase is absorbing: no further mutation
        let frozen = state.clone();
        tick(&mut state, 0.1);
        assert_eq!(state.distance, frozen.distance);
        assert_eq!(state.blur, frozen.blur);
        assert_eq!(state.time_without_blink, frozen.time_without_blink);
        assert_eq!(state.phase, Phase::Caught);
    }

    #[test]
    fn threat_contact_ends_the_run() {
        let mut state = started();
        state.distance = 0.5;
        state.set_blinking(true);

        tick(&mut state, 0.1);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.phase, Phase::Caught);
    }

    #[test]
    fn blinking_regenerates_but_draws_the_threat_in() {
        let mut state = started();

        // Drain a bit first so regen is observable
        for _ in 0..20 {
            tick(&mut state, 0.1);
        }
        assert!((state.stamina - 30.0).abs() < 1e-3);
        assert_eq!(state.distance, 100.0);

        state.set_blinking(true);
        tick(&mut state, 1.0);
        assert!((state.stamina - 55.0).abs() < 1e-3);
        assert!((state.distance - 90.0).abs() < 1e-3);
        assert!((state.time_blinking - 1.0).abs() < EPS);
        assert_eq!(state.time_without_blink, 0.0);
    }

    #[test]
    fn holding_blink_is_not_survival() {
        let mut state = started();
        state.set_blinking(true);

        // 100 distance at 10/s: contact at ~10 s with stamina still full
        let mut elapsed = 0.0f32;
        while state.running() && elapsed < 60.0 {
            tick(&mut state, 0.1);
            elapsed += 0.1;
        }

        assert_eq!(state.phase, Phase::Caught);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.stamina, 100.0);
        assert!((9.5..10.5).contains(&elapsed));
    }

    #[test]
    fn fatigue_saturates_at_ramp_time() {
        assert_eq!(fatigue(0.0, 6.0), 0.0);
        assert!((fatigue(3.0, 6.0) - 0.5).abs() < EPS);
        assert_eq!(fatigue(6.0, 6.0), 1.0);
        assert_eq!(fatigue(60.0, 6.0), 1.0);
    }

    #[test]
    fn distortion_grows_at_full_rate_after_ramp() {
        // Zero drain so the run survives the full ramp; bounds lifted so
        // the clamps don't mask the growth rate
        let mut state = SimState::new(Config {
            stamina_drain_rate: 0.0,
            max_blur: 1000.0,
            max_shake: 1000.0,
            ..Config::default()
        });
        state.start();

        // Past the 6 s ramp
        for _ in 0..70 {
            tick(&mut state, 0.1);
        }
        assert_eq!(fatigue(state.time_without_blink, 6.0), 1.0);

        let blur_before = state.blur;
        let shake_before = state.shake;
        tick(&mut state, 0.1);
        assert!((state.blur - blur_before - 22.0 * 0.1).abs() < 1e-3);
        assert!((state.shake - shake_before - 16.0 * 0.1).abs() < 1e-3);
    }

    #[test]
    fn blinking_decays_distortion() {
        let mut state = started();
        state.blur = 10.0;
        state.shake = 8.0;
        state.set_blinking(true);

        tick(&mut state, 0.25);
        assert!((state.blur - 4.5).abs() < EPS);
        assert!((state.shake - 4.0).abs() < EPS);

        tick(&mut state, 1.0);
        assert_eq!(state.blur, 0.0);
        assert_eq!(state.shake, 0.0);
    }

    #[test]
    fn timers_are_mutually_exclusive() {
        let mut state = started();

        tick(&mut state, 0.1);
        tick(&mut state, 0.1);
        assert!((state.time_without_blink - 0.2).abs() < EPS);
        assert_eq!(state.time_blinking, 0.0);

        state.set_blinking(true);
        tick(&mut state, 0.1);
        assert_eq!(state.time_without_blink, 0.0);
        assert!((state.time_blinking - 0.1).abs() < EPS);

        state.set_blinking(false);
        tick(&mut state, 0.1);
        assert_eq!(state.time_blinking, 0.0);
        assert!((state.time_without_blink - 0.1).abs() < EPS);
    }

    #[test]
    fn restart_after_loss() {
        let mut state = started();
        state.stamina = 1.0;
        tick(&mut state, 0.1);
        assert_eq!(state.phase, Phase::Caught);

        state.start();
        assert!(state.running());
        assert_eq!(state.stamina, 100.0);
        assert_eq!(state.distance, 100.0);
    }

    proptest! {
        /// Bounds invariants hold across arbitrary input/delta sequences.
        #[test]
        fn state_stays_in_bounds(steps in prop::collection::vec((any::<bool>(), 0.0f32..0.1), 0..200)) {
            let mut state = started();
            for (blink, dt) in steps {
                state.set_blinking(blink);
                tick(&mut state, dt);

                prop_assert!((0.0..=100.0).contains(&state.stamina));
                prop_assert!((0.0..=state.config.max_distance).contains(&state.distance));
                prop_assert!((0.0..=state.config.max_blur).contains(&state.blur));
                prop_assert!((0.0..=state.config.max_shake).contains(&state.shake));
                prop_assert!(state.time_without_blink == 0.0 || state.time_blinking == 0.0);
            }
        }

        /// Once terminal, the phase stays terminal and nothing moves.
        #[test]
        fn terminal_phase_is_absorbing(dts in prop::collection::vec(0.0f32..0.1, 1..50)) {
            let mut state = started();
            state.stamina = 0.5;
            tick(&mut state, 0.1);
            prop_assert_eq!(state.phase, Phase::Caught);

            let frozen = state.clone();
            for dt in dts {
                tick(&mut state, dt);
                prop_assert_eq!(state.phase, Phase::Caught);
                prop_assert_eq!(state.distance, frozen.distance);
                prop_assert_eq!(state.blur, frozen.blur);
            }
        }
    }
}
