// crates/core/src/lib.rs
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod service;
pub mod settings;
pub mod store;
pub mod timezone;
pub mod types;

pub use error::*;
pub use grid::*;
pub use heatmap::*;
pub use service::*;
pub use settings::*;
pub use store::*;
pub use timezone::*;
pub use types::*;
