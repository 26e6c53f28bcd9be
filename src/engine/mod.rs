mod buffer;
mod scan;

pub use buffer::LineBuffer;
pub use scan::{Constraint, Target, rewrite};
