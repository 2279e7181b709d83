//! L4 Atomic Layer: Easing curves for animated scrolling
//!
//! An easing maps the elapsed fraction of the animation in `[0, 1]` to a
//! progress fraction in `[0, 1]`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// User supplied easing function
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Built-in easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingCurve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingCurve {
    pub const ALL: [EasingCurve; 4] = [
        EasingCurve::Linear,
        EasingCurve::EaseIn,
        EasingCurve::EaseOut,
        EasingCurve::EaseInOut,
    ];

    /// Look up a curve by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(EasingCurve::Linear),
            "easeIn" => Some(EasingCurve::EaseIn),
            "easeOut" => Some(EasingCurve::EaseOut),
            "easeInOut" => Some(EasingCurve::EaseInOut),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::EaseIn => "easeIn",
            EasingCurve::EaseOut => "easeOut",
            EasingCurve::EaseInOut => "easeInOut",
        }
    }

    /// Apply the curve to an elapsed fraction
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            EasingCurve::Linear => t,
            _ if t >= 1.0 => 1.0,
            EasingCurve::EaseIn => sine_ease_in(t),
            EasingCurve::EaseOut => sine_ease_out(t),
            EasingCurve::EaseInOut => cosine_ease_in_out(t),
        }
    }
}

/// Sine ease-in: f(t) = 1 - cos(t·π/2)
#[inline]
fn sine_ease_in(t: f64) -> f64 {
    1.0 + (std::f64::consts::PI + t * std::f64::consts::FRAC_PI_2).cos()
}

/// Sine ease-out: f(t) = sin(t·π/2)
#[inline]
fn sine_ease_out(t: f64) -> f64 {
    (t * std::f64::consts::FRAC_PI_2).sin()
}

/// Cosine ease-in-out: f(t) = (1 - cos(t·π)) / 2
#[inline]
fn cosine_ease_in_out(t: f64) -> f64 {
    0.5 * (1.0 + (std::f64::consts::PI + t * std::f64::consts::PI).cos())
}

/// Configured easing: a curve name or a custom function.
///
/// Names are resolved lazily so an unknown name degrades to an immediate
/// scroll instead of failing configuration.
#[derive(Clone)]
pub enum EasingMethod {
    Named(String),
    Custom(EasingFn),
}

impl EasingMethod {
    pub fn named(name: impl Into<String>) -> Self {
        EasingMethod::Named(name.into())
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        EasingMethod::Custom(Arc::new(f))
    }

    /// Resolve to something that can be applied, `None` for unknown names
    pub fn resolve(&self) -> Option<Easing> {
        match self {
            EasingMethod::Named(name) => EasingCurve::from_name(name).map(Easing::Curve),
            EasingMethod::Custom(f) => Some(Easing::Custom(Arc::clone(f))),
        }
    }
}

impl From<EasingCurve> for EasingMethod {
    fn from(curve: EasingCurve) -> Self {
        EasingMethod::Named(curve.name().to_string())
    }
}

impl fmt::Debug for EasingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasingMethod::Named(name) => f.debug_tuple("Named").field(name).finish(),
            EasingMethod::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Serialize for EasingMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            EasingMethod::Named(name) => serializer.serialize_str(name),
            EasingMethod::Custom(_) => Err(serde::ser::Error::custom(
                "custom easing functions cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for EasingMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(EasingMethod::Named)
    }
}

/// Resolved easing ready to run inside an animation
#[derive(Clone)]
pub enum Easing {
    Curve(EasingCurve),
    Custom(EasingFn),
}

impl Easing {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Curve(curve) => curve.apply(t),
            Easing::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Curve(curve) => f.debug_tuple("Curve").field(curve).finish(),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
