//! # Label Input Parsing
//!
//! Turns line-oriented text (a pasted list or rows pulled from a CSV column)
//! into label requests. One request per non-empty line, in input order:
//!
//! ```text
//! WIRE-001,3
//! WIRE-002
//! PANEL-A-MAIN,12
//! ```

use crate::error::LabelError;
use crate::model::LabelRequest;

/// Parse `identifier` / `identifier,quantity` lines into requests.
///
/// Splits on the first comma only, so the quantity column is everything after
/// it. Blank lines and lines with an empty identifier are skipped. An omitted
/// quantity means one copy; an explicit quantity must parse as an integer of
/// at least 1 or the whole parse fails with [`LabelError::InvalidQuantity`]
/// naming the offending identifier.
pub fn parse_lines(text: &str) -> Result<Vec<LabelRequest>, LabelError> {
    let mut requests = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (identifier, quantity) = match line.split_once(',') {
            Some((identifier, raw)) => {
                let identifier = identifier.trim();
                let raw = raw.trim();
                let quantity = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|q| *q >= 1)
                    .ok_or_else(|| LabelError::InvalidQuantity {
                        identifier: identifier.to_string(),
                        value: raw.to_string(),
                    })?;
                (identifier, quantity)
            }
            None => (line, 1),
        };
        if identifier.is_empty() {
            continue;
        }
        requests.push(LabelRequest::new(identifier, quantity));
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_default_to_one() {
        let requests = parse_lines("WIRE-001\nWIRE-002\n").unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], LabelRequest::new("WIRE-001", 1));
        assert_eq!(requests[1], LabelRequest::new("WIRE-002", 1));
    }

    #[test]
    fn test_explicit_quantities() {
        let requests = parse_lines("WIRE-001,3\nWIRE-002, 2").unwrap();
        assert_eq!(requests[0].quantity, 3);
        assert_eq!(requests[1].quantity, 2);
    }

    #[test]
    fn test_blank_lines_and_whitespace_skipped() {
        let requests = parse_lines("\n  WIRE-001  \n\n   \nWIRE-002,4\n").unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].identifier, "WIRE-001");
    }

    #[test]
    fn test_splits_on_first_comma_only() {
        let err = parse_lines("WIRE-001,5,extra").unwrap_err();
        // "5,extra" is not a valid quantity.
        match err {
            LabelError::InvalidQuantity { identifier, value } => {
                assert_eq!(identifier, "WIRE-001");
                assert_eq!(value, "5,extra");
            }
            other => panic!("wrong error: {other}"),
        }
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = parse_lines("WIRE-001,0").unwrap_err();
        assert!(err.to_string().contains("WIRE-001"));
    }

    #[test]
    fn test_non_numeric_quantity_rejected() {
        let err = parse_lines("WIRE-001,many").unwrap_err();
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn test_line_without_identifier_skipped() {
        let requests = parse_lines(",5\nWIRE-001").unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let requests = parse_lines("B\nA\nC,2").unwrap();
        let ids: Vec<&str> = requests.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
    }
}
