//! Frame construction
//!
//! Builds a pure description of one visual frame from the sim state. The
//! only non-determinism is the shake jitter, drawn from an injected RNG so
//! tests can seed it.

use glam::Vec2;
use rand::Rng;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{
    BLINK_OCCLUSION_ALPHA, MONSTER_BASE_SIZE, MONSTER_CENTER_DROP, MONSTER_GROWTH_RANGE,
    MONSTER_MIN_SCALE, MOUTH_STROKE_WIDTH,
};
use crate::sim::SimState;

/// Textual/graphical status readouts for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Stamina as a percentage bar width, rounded
    pub stamina_pct: u32,
    /// Threat distance, rounded
    pub distance: u32,
    /// Status label
    pub status: &'static str,
}

/// Everything the pipeline needs to present one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Scene triangle list in screen pixels, jitter already applied
    pub scene: Vec<Vertex>,
    /// Jitter translation this frame (exposed for tests)
    pub shake_offset: Vec2,
    /// Blur radius for the post pass (px)
    pub blur_px: f32,
    /// Occlusion alpha for the post pass; non-zero while blinking
    pub occlusion: f32,
    pub hud: Hud,
}

/// Visual scale of the threat: small at max distance, full size at contact.
pub fn monster_scale(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance / max_distance).clamp(MONSTER_MIN_SCALE, 1.0)
}

/// Build the frame for the current state and viewport (pixels).
pub fn build_frame(state: &SimState, viewport: Vec2, rng: &mut impl Rng) -> Frame {
    let half = state.shake / 2.0;
    let shake_offset = Vec2::new(
        rng.random_range(-half..=half),
        rng.random_range(-half..=half),
    );

    let scale = monster_scale(state.distance, state.config.max_distance);
    let size = MONSTER_BASE_SIZE + scale * MONSTER_GROWTH_RANGE;

    let center =
        Vec2::new(viewport.x / 2.0, viewport.y / 2.0 + MONSTER_CENTER_DROP) + shake_offset;

    let mut scene = Vec::new();

    // Body
    scene.extend(shapes::ellipse(
        center,
        size * 0.65,
        size,
        colors::MONSTER_BODY,
        64,
    ));

    // Eyes
    for side in [-1.0, 1.0] {
        scene.extend(shapes::circle(
            center + Vec2::new(side * size * 0.25, -size * 0.2),
            size * 0.1,
            colors::MONSTER_EYES,
            24,
        ));
    }

    // Mouth: lower half-circle stroke (y-down screen convention)
    scene.extend(shapes::arc_band(
        center + Vec2::new(0.0, size * 0.2),
        size * 0.3,
        MOUTH_STROKE_WIDTH,
        0.0,
        std::f32::consts::PI,
        colors::MONSTER_MOUTH,
        32,
    ));

    Frame {
        scene,
        shake_offset,
        blur_px: state.blur,
        occlusion: if state.blinking {
            BLINK_OCCLUSION_ALPHA
        } else {
            0.0
        },
        hud: Hud {
            stamina_pct: state.stamina.round() as u32,
            distance: state.distance.round() as u32,
            status: if state.blinking {
                "BLINKING"
            } else {
                "EYES OPEN"
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Config;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn state() -> SimState {
        let mut s = SimState::new(Config::default());
        s.start();
        s
    }

    #[test]
    fn shake_offset_is_bounded_and_seeded() {
        let mut s = state();
        s.shake = 10.0;

        let mut rng = Pcg32::seed_from_u64(42);
        let frame = build_frame(&s, VIEWPORT, &mut rng);
        assert!(frame.shake_offset.x.abs() <= 5.0);
        assert!(frame.shake_offset.y.abs() <= 5.0);

        // Same seed, same jitter
        let mut rng2 = Pcg32::seed_from_u64(42);
        let frame2 = build_frame(&s, VIEWPORT, &mut rng2);
        assert_eq!(frame.shake_offset, frame2.shake_offset);
    }

    #[test]
    fn zero_shake_means_zero_offset() {
        let s = state();
        let mut rng = Pcg32::seed_from_u64(7);
        let frame = build_frame(&s, VIEWPORT, &mut rng);
        assert_eq!(frame.shake_offset, Vec2::ZERO);
    }

    #[test]
    fn monster_scale_clamps() {
        assert_eq!(monster_scale(100.0, 100.0), 0.05);
        assert_eq!(monster_scale(0.0, 100.0), 1.0);
        assert!((monster_scale(50.0, 100.0) - 0.5).abs() < 1e-6);
        // Defensive: out-of-range distance still clamps
        assert_eq!(monster_scale(150.0, 100.0), 0.05);
    }

    #[test]
    fn occlusion_tracks_blinking() {
        let mut s = state();
        let mut rng = Pcg32::seed_from_u64(0);

        let open = build_frame(&s, VIEWPORT, &mut rng);
        assert_eq!(open.occlusion, 0.0);
        assert_eq!(open.hud.status, "EYES OPEN");

        s.set_blinking(true);
        let closed = build_frame(&s, VIEWPORT, &mut rng);
        assert_eq!(closed.occlusion, BLINK_OCCLUSION_ALPHA);
        assert_eq!(closed.hud.status, "BLINKING");
    }

    #[test]
    fn hud_readouts_round() {
        let mut s = state();
        s.stamina = 64.6;
        s.distance = 97.4;

        let mut rng = Pcg32::seed_from_u64(1);
        let frame = build_frame(&s, VIEWPORT, &mut rng);
        assert_eq!(frame.hud.stamina_pct, 65);
        assert_eq!(frame.hud.distance, 97);
    }

    #[test]
    fn blur_carried_into_frame() {
        let mut s = state();
        s.blur = 12.5;
        let mut rng = Pcg32::seed_from_u64(1);
        let frame = build_frame(&s, VIEWPORT, &mut rng);
        assert_eq!(frame.blur_px, 12.5);
    }

    #[test]
    fn scene_is_nonempty_and_centered_low() {
        let s = state();
        let mut rng = Pcg32::seed_from_u64(3);
        let frame = build_frame(&s, VIEWPORT, &mut rng);
        assert!(!frame.scene.is_empty());

        // At max distance the threat is small: every vertex near the anchor
        let anchor = Vec2::new(400.0, 340.0);
        let size = MONSTER_BASE_SIZE + 0.05 * MONSTER_GROWTH_RANGE;
        for v in &frame.scene {
            let p = Vec2::new(v.position[0], v.position[1]);
            assert!((p - anchor).length() <= size * 1.5);
        }
    }
}
