pub mod carousel;
pub mod catalog;
pub mod data;
pub mod error;
pub mod filter;
pub mod reviews;
pub mod showcase;

pub use error::SiteError;
