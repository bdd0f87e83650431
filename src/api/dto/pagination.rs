//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and resolves defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0 (pages are 1-indexed)
    /// - Page size must be between 10 and 1000
    ///
    /// # Returns
    ///
    /// `(page, page_size)` after validation.
    pub fn validate_and_resolve(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(10..=1000).contains(&page_size) {
            return Err("Page size must be between 10 and 1000".to_string());
        }

        Ok((page, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let (page, page_size) = params(None, None).validate_and_resolve().unwrap();
        assert_eq!(page, 1);
        assert_eq!(page_size, 25);
    }

    #[test]
    fn test_explicit_values() {
        let (page, page_size) = params(Some(3), Some(50)).validate_and_resolve().unwrap();
        assert_eq!(page, 3);
        assert_eq!(page_size, 50);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate_and_resolve().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(9)).validate_and_resolve().is_err());
        assert!(params(None, Some(10)).validate_and_resolve().is_ok());
        assert!(params(None, Some(1000)).validate_and_resolve().is_ok());
        assert!(params(None, Some(1001)).validate_and_resolve().is_err());
    }

    #[test]
    fn test_parses_numbers_from_strings() {
        let parsed: PaginationParams =
            serde_json::from_str(r#"{"page": "2", "page_size": "100"}"#).unwrap();
        assert_eq!(parsed.page, Some(2));
        assert_eq!(parsed.page_size, Some(100));
    }
}
