// Sun Oct 18 2026 - Alex

use crate::search::MedianError;

/// Parses integers separated by commas and/or whitespace.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, MedianError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| MedianError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

pub fn parse_values<S: AsRef<str>>(values: &[S]) -> Result<Vec<i64>, MedianError> {
    let joined = values.iter().map(|v| v.as_ref()).collect::<Vec<_>>().join(" ");
    parse_sequence(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(parse_sequence("2, 3 4,-1").unwrap(), vec![2, 3, 4, -1]);
        assert_eq!(parse_sequence("  6\n7\t1 ,, 2 ").unwrap(), vec![6, 7, 1, 2]);
        assert!(parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_position() {
        assert_eq!(
            parse_sequence("2,x,4"),
            Err(MedianError::Parse { token: "x".to_string(), position: 1 })
        );
        assert!(parse_sequence("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_values_joins_arguments() {
        let args = vec!["2,3".to_string(), "4".to_string(), "1".to_string()];
        assert_eq!(parse_values(&args).unwrap(), vec![2, 3, 4, 1]);
    }
}
