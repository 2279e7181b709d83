pub mod align;
pub mod chain;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod host;
pub mod plan;
pub mod scene;
pub mod scroll;

pub use align::{Alignment, AxisAlign};
pub use config::{AnimationConfig, AppConfig};
pub use driver::FrameDriver;
pub use error::{Error, Result};
pub use geometry::{Axis, Rect, ScrollOffset, Size};
pub use host::{Overflow, OverflowStyle, Position, ScrollHost};
pub use plan::{plan_scroll, ScrollTask};
pub use scene::{Scene, SceneNode};
pub use scroll::{EasingCurve, EasingMethod, ScrollEngine, ScrollOptions, ScrollOverrides, ScrollSession};
