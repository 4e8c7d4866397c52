//! Game state and tuning types
//!
//! The engine is an explicit object constructed by the caller: `Config` is
//! immutable after construction, so multiple independent instances (and
//! isolated tests) come for free.

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start; the start overlay is showing
    Title,
    /// Active gameplay
    Running,
    /// The threat reached the player or stamina ran out
    Caught,
}

/// Tuning constants, fixed at engine construction.
///
/// Rates are per second; distance and stamina both live on a 0-100 scale.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Stamina lost per second with eyes open
    pub stamina_drain_rate: f32,
    /// Stamina regained per second while blinking
    pub stamina_regen_rate: f32,
    /// Distance lost per second while blinking (it moves while you can't see)
    pub threat_advance_rate: f32,
    /// Distance regained per second with eyes open (watching holds it back)
    pub threat_retreat_rate: f32,
    /// Blur accumulation at full fatigue, and blur decay while blinking (px/s)
    pub blur_rate: f32,
    /// Shake accumulation at full fatigue, and shake decay while blinking (px/s)
    pub shake_rate: f32,
    /// Upper bound on blur radius (px)
    pub max_blur: f32,
    /// Upper bound on shake magnitude (px)
    pub max_shake: f32,
    /// Maximum (and starting) threat distance
    pub max_distance: f32,
    /// Seconds of sustained eyes-open time until distortion accumulates at
    /// full rate
    pub fatigue_ramp_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stamina_drain_rate: 35.0,
            stamina_regen_rate: 25.0,
            threat_advance_rate: 10.0,
            threat_retreat_rate: 2.0,
            blur_rate: 22.0,
            shake_rate: 16.0,
            max_blur: 18.0,
            max_shake: 14.0,
            max_distance: 100.0,
            fatigue_ramp_secs: 6.0,
        }
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct SimState {
    /// Tuning, immutable for the lifetime of the engine
    pub config: Config,
    /// Latched blink input; consumed at the start of each tick
    pub blinking: bool,
    /// 0-100; reaching 0 ends the run
    pub stamina: f32,
    /// 0-max_distance; reaching 0 ends the run
    pub distance: f32,
    /// Current blur radius (px)
    pub blur: f32,
    /// Current shake magnitude (px)
    pub shake: f32,
    /// Seconds of continuous eyes-open time; drives the fatigue ramp
    pub time_without_blink: f32,
    /// Seconds of continuous blinking
    pub time_blinking: f32,
    /// Current phase
    pub phase: Phase,
}

impl SimState {
    /// Create an engine in the title phase with canonical initial values
    pub fn new(config: Config) -> Self {
        Self {
            config,
            blinking: false,
            stamina: 100.0,
            distance: config.max_distance,
            blur: 0.0,
            shake: 0.0,
            time_without_blink: 0.0,
            time_blinking: 0.0,
            phase: Phase::Title,
        }
    }

    /// Reset to the canonical initial state and begin a run.
    ///
    /// Callable from any phase; overlay handling is the driver's job.
    pub fn start(&mut self) {
        self.blinking = false;
        self.stamina = 100.0;
        self.distance = self.config.max_distance;
        self.blur = 0.0;
        self.shake = 0.0;
        self.time_without_blink = 0.0;
        self.time_blinking = 0.0;
        self.phase = Phase::Running;
    }

    /// Latch the blink input. No-op outside a run; takes effect next tick.
    pub fn set_blinking(&mut self, blinking: bool) {
        if self.phase == Phase::Running {
            self.blinking = blinking;
        }
    }

    /// True between `start()` and the terminal condition
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }
}
