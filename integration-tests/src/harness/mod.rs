mod fixture;
pub mod logs;

pub use fixture::TestWorkspace;
