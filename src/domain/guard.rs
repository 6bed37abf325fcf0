//! Guard - 通用断言
//!
//! 条件不成立时返回带消息的错误，消息可以延迟生成。
//! 不做任何恢复，由调用方决定是否处理。

use thiserror::Error;

/// 断言失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// 条件为假时返回 [`InvariantError`]
///
/// ```
/// use folio::domain::invariant;
///
/// let value = "chapter-1";
/// assert!(invariant(!value.is_empty(), "value must not be empty").is_ok());
/// ```
pub fn invariant(condition: bool, message: impl Into<String>) -> Result<(), InvariantError> {
    invariant_with(condition, || message.into())
}

/// 同 [`invariant`]，消息只在失败时生成
pub fn invariant_with<F>(condition: bool, message: F) -> Result<(), InvariantError>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(InvariantError(message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_passes() {
        assert!(invariant(true, "never shown").is_ok());
    }

    #[test]
    fn test_invariant_fails_with_message() {
        let err = invariant(false, "value must be a string").unwrap_err();
        assert_eq!(err.message(), "value must be a string");
        assert_eq!(err.to_string(), "value must be a string");
    }

    #[test]
    fn test_lazy_message_not_built_on_success() {
        let result = invariant_with(true, || panic!("message should not be computed"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_lazy_message_on_failure() {
        let slug = "missing";
        let err = invariant_with(false, || format!("chapter {} not found", slug)).unwrap_err();
        assert_eq!(err.message(), "chapter missing not found");
    }
}
