pub mod error;
pub mod result;

pub use error::{ExitCode, TrustError};
pub use result::Result;
