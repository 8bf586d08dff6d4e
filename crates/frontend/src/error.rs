use thiserror::Error;

/// Failures of the report export actions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExportError {
    #[error("Report table #{0} not found")]
    TableNotFound(String),

    #[error("Report table has no header row")]
    MissingHeader,

    #[error("No visible rows to export")]
    NoVisibleRows,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ExportError {
    /// Preconditions abort with a "no data" notice instead of the generic
    /// failure message.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ExportError::TableNotFound(_) | ExportError::MissingHeader | ExportError::NoVisibleRows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_kinds() {
        assert!(ExportError::TableNotFound("stockTable".into()).is_precondition());
        assert!(ExportError::NoVisibleRows.is_precondition());
        assert!(!ExportError::Dom("boom".into()).is_precondition());
        assert!(!ExportError::Clipboard("denied".into()).is_precondition());
    }
}
