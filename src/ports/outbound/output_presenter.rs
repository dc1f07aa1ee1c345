use crate::shared::Result;

/// OutputPresenter port for delivering the formatted report
///
/// Implementations write to stdout or to a file; the use case does not
/// care which.
pub trait OutputPresenter {
    fn present(&self, output: &str) -> Result<()>;
}
