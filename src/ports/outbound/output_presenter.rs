use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts the output destination (stdout, file, etc.). Stdout is the
/// channel the orchestrator parses, so presenters must write the content
/// verbatim and nothing else.
pub trait OutputPresenter {
    /// Presents the rendered inventory content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
