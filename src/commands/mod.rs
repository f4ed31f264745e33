pub mod error;
pub mod info;
pub mod wizard;

pub use error::map_err;
