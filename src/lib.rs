//! Blink Dread - a browser reflex game
//!
//! Keeping your eyes open drains stamina and degrades your vision (blur,
//! shake), but holds the thing in the dark at bay. Hold the mouse button to
//! blink and recover — it moves fast while your eyes are closed. Run out of
//! stamina or let it reach you and the run ends.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stamina, threat distance, distortion)
//! - `renderer`: Frame construction and WebGPU presentation

pub mod renderer;
pub mod sim;

pub use sim::{Config, Phase, SimState};

/// Presentation constants
pub mod consts {
    /// Maximum frame delta fed to the sim (seconds). Caps the jump after
    /// tab suspension or a long GC pause.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Threat size at maximum distance (pixels)
    pub const MONSTER_BASE_SIZE: f32 = 70.0;
    /// Additional size gained as the threat closes to zero distance
    pub const MONSTER_GROWTH_RANGE: f32 = 300.0;
    /// Smallest visual scale, so the threat never fully vanishes
    pub const MONSTER_MIN_SCALE: f32 = 0.05;
    /// Vertical offset of the threat below the viewport center (pixels)
    pub const MONSTER_CENTER_DROP: f32 = 40.0;

    /// Stroke width of the mouth arc (pixels)
    pub const MOUTH_STROKE_WIDTH: f32 = 6.0;

    /// Alpha of the full-viewport occlusion while blinking
    pub const BLINK_OCCLUSION_ALPHA: f32 = 0.9;
}
