pub mod aggregate;
pub mod cascade;

pub use aggregate::*;
pub use cascade::CustomerCascade;
