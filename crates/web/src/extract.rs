use axum::extract::FromRequest;

use crate::error::{WebError, WebResult};

/// `axum::Json` whose rejections answer 400 through [`WebError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct JsonBody<T>(pub T);

/// Parses a numeric path identity, failing before any storage access.
pub fn parse_id(raw: &str, resource: &str) -> WebResult<i64> {
    raw.parse()
        .map_err(|_| WebError::BadRequest(format!("invalid {} ID", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "athlete").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "athlete"),
            Err(WebError::BadRequest(msg)) if msg == "invalid athlete ID"
        ));
        assert!(parse_id("", "meet").is_err());
        assert!(parse_id("1.5", "result").is_err());
    }
}
