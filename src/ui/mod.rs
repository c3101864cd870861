//! Presentation boundary.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → text
//! ```
//!
//! - [`viewmodel`]: display-ready state for one frame
//! - [`renderer`]: plain-text rendering used by the stdin driver

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{PageView, UIViewModel};
