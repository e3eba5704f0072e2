//! Shallow directory scans: the source audio file, its cue sheet and the
//! split tracks produced from them.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
