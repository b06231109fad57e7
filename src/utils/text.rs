// ============================================================================
// Text Helpers
// Natural-language lists, line compaction and path sanitising
// ============================================================================

use crate::domain::JoinStyle;
use crate::numeric::{NumericError, NumericResult};
use std::fmt::Display;

/// Join items into a natural-language list.
///
/// One item is returned as is, two are joined by `style.last`, and longer
/// lists use `style.mid` between all but the final pair.
///
/// # Errors
/// `EmptyList` when `items` is empty.
///
/// # Example
/// ```
/// use report_format::domain::JoinStyle;
/// use report_format::utils::join_list;
///
/// let style = JoinStyle::default();
/// assert_eq!(join_list(&["a", "b", "c"], &style).unwrap(), "a、b和c");
/// assert_eq!(join_list(&["a", "b"], &style).unwrap(), "a和b");
/// ```
pub fn join_list<T: Display>(items: &[T], style: &JoinStyle) -> NumericResult<String> {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();

    match parts.as_slice() {
        [] => Err(NumericError::EmptyList),
        [only] => Ok(only.clone()),
        [head @ .., last] => {
            let head = head.join(style.mid.as_str());
            Ok(format!("{}{}{}", head, style.last, last))
        }
    }
}

/// Trim every line and concatenate them without newlines.
pub fn strip_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect()
}

/// Replace `|` with a space so the text can be used as a file name.
pub fn valid_fpath(path: &str) -> String {
    path.replace('|', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_list() {
        let style = JoinStyle::default();
        assert_eq!(join_list(&["a"], &style).unwrap(), "a");
        assert_eq!(join_list(&["a", "b"], &style).unwrap(), "a和b");
        assert_eq!(join_list(&["a", "b", "c"], &style).unwrap(), "a、b和c");
        assert_eq!(join_list(&["a", "b", "c", "d"], &style).unwrap(), "a、b、c和d");
    }

    #[test]
    fn test_join_list_other_styles() {
        assert_eq!(
            join_list(&[1, 2, 3], &JoinStyle::english()).unwrap(),
            "1, 2 and 3"
        );
        assert_eq!(
            join_list(&["x", "y", "z"], &JoinStyle::chinese_comma()).unwrap(),
            "x，y和z"
        );
    }

    #[test]
    fn test_join_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(
            join_list(&empty, &JoinStyle::default()),
            Err(NumericError::EmptyList)
        );
    }

    #[test]
    fn test_strip_lines() {
        let block = "  first line \n\tsecond\n   \n third  ";
        assert_eq!(strip_lines(block), "first linesecondthird");
    }

    #[test]
    fn test_valid_fpath() {
        assert_eq!(valid_fpath("age|gender.xlsx"), "age gender.xlsx");
        assert_eq!(valid_fpath("plain.txt"), "plain.txt");
    }
}
