use serde::{Deserialize, Serialize};

pub const DEFAULT_FUNNEL_EPSILON: f64 = 1e-3; // compared against squared distance
pub const DEFAULT_WELD_QUANTUM: f64 = 1e-6;

/// Which way positive orientation turns.
///
/// `YUp` is the usual mathematical frame: a positive cross product means the
/// three points turn counter-clockwise. `YDown` is screen space, where the
/// y axis points down and every orientation test has to be inverted so that
/// "counter-clockwise" still means counter-clockwise on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    #[default]
    YUp,
    YDown,
}

impl Winding {
    /// Maps a raw y-up cross product into this convention.
    #[inline]
    pub fn apply(self, cross: f64) -> f64 {
        match self {
            Winding::YUp => cross,
            Winding::YDown => -cross,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    pub winding: Winding,
    pub funnel_epsilon: f64,
    pub weld_quantum: f64,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            winding: Winding::default(),
            funnel_epsilon: DEFAULT_FUNNEL_EPSILON,
            weld_quantum: DEFAULT_WELD_QUANTUM,
        }
    }
}

impl NavOptions {
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }
}
