pub mod error;
pub mod path;
pub mod process;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::{Result, SceneError};
pub use path::*;
pub use reader::*;
pub use types::*;
pub use writer::*;
