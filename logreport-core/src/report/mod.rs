mod error;
mod template;
mod write;


pub use error::*;
pub use template::*;
pub use write::*;
