//! Infrastructure layer: filesystem locations and navigation locations.

pub mod navigation;
pub mod paths;

pub use navigation::{Location, Route};
pub use paths::{expand_tilde, get_data_dir, session_file};
