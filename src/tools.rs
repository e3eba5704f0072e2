//! The three external programs the pipeline drives, and the blocking
//! subprocess helper they share.

mod convert;
mod process;
mod split;
mod tag;

pub use convert::*;
pub use process::*;
pub use split::*;
pub use tag::*;
