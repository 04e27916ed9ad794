mod discover;
mod error;
mod name;
mod open;

#[cfg(test)]
mod tests;

pub use discover::*;
pub use error::*;
pub use name::*;
pub use open::*;
