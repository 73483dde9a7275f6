//! Tree walking and path filtering

pub mod filter;
pub mod scanner;

pub use filter::{PathFilter, Rejection};
pub use scanner::FileScanner;
