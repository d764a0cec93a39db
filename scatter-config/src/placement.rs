use crate::utils::FloatOrInt;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.;
pub const DEFAULT_RADIUS: f64 = 350.;
pub const DEFAULT_RADIUS_JITTER: f64 = 50.;
pub const DEFAULT_ANGLE_JITTER: f64 = 0.15;

/// Size of the canvas the layout is centered in.
///
/// A zero size is allowed; everything is then placed around the origin.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    #[knuffel(property, default = FloatOrInt(DEFAULT_VIEWPORT_WIDTH))]
    pub width: FloatOrInt<0, 65535>,
    #[knuffel(property, default = FloatOrInt(DEFAULT_VIEWPORT_HEIGHT))]
    pub height: FloatOrInt<0, 65535>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: FloatOrInt(DEFAULT_VIEWPORT_WIDTH),
            height: FloatOrInt(DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

/// Parameters of the circular placement.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    #[knuffel(child, unwrap(argument), default = FloatOrInt(DEFAULT_RADIUS))]
    pub radius: FloatOrInt<0, 65535>,
    /// Half-width of the uniform radius perturbation.
    #[knuffel(child, unwrap(argument), default = FloatOrInt(DEFAULT_RADIUS_JITTER))]
    pub radius_jitter: FloatOrInt<0, 65535>,
    /// Half-width of the uniform angle perturbation, in radians.
    #[knuffel(child, unwrap(argument), default = FloatOrInt(DEFAULT_ANGLE_JITTER))]
    pub angle_jitter: FloatOrInt<0, 7>,
    /// Seed for the jitter; a fresh one is drawn on every run when unset.
    #[knuffel(child, unwrap(argument))]
    pub seed: Option<u64>,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            radius: FloatOrInt(DEFAULT_RADIUS),
            radius_jitter: FloatOrInt(DEFAULT_RADIUS_JITTER),
            angle_jitter: FloatOrInt(DEFAULT_ANGLE_JITTER),
            seed: None,
        }
    }
}
