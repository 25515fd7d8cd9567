mod optional;
mod registry;

pub use optional::*;
pub use registry::*;
