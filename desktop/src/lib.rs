pub mod convert;
pub mod std_fs;

pub use convert::{Options, Summary, run};
