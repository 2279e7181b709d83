//! Scroll execution for nested containers
//!
//! Takes the per-container tasks produced by [`crate::plan`] and applies
//! them, either at once or as eased animations stepped by the frame
//! scheduler.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Easing curves and custom easing functions
//! - `timing` - Elapsed-fraction and distance helpers
//! - `options` - Scroll options and per-call overrides
//! - `session` - Shared abort handle for one scroll request
//!
//! ## L3 Molecular Layer
//! - `animation` - Per-container animation state machine
//!
//! ## L2 Organism Layer
//! - `engine` - Entry point, owns the current session and live animations
//!
//! # Usage
//!
//! ```ignore
//! use nestscroll_core::scroll::{ScrollEngine, ScrollOverrides};
//!
//! let mut engine = ScrollEngine::default();
//! let overrides = ScrollOverrides::new().easing(EasingCurve::EaseInOut).timeout_ms(300.0);
//! engine.scroll_into_viewport(&mut host, &element, &overrides)?;
//!
//! // From the host's frame callback
//! while engine.needs_frame() {
//!     engine.on_frame(&mut host, now_ms())?;
//! }
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod options;
pub mod session;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// L2 Organism Layer
pub mod engine;

// Re-exports for convenient access
pub use animation::{AnimationState, ScrollAnimation};
pub use easing::{Easing, EasingCurve, EasingFn, EasingMethod};
pub use engine::ScrollEngine;
pub use options::{ScrollOptions, ScrollOverrides};
pub use session::ScrollSession;
