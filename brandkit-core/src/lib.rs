pub mod error;
pub mod provider;
pub mod config;
pub mod mobius;
pub mod raster;
pub mod convert;

pub use error::{BrandError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
