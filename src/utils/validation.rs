use crate::utils::error::{FinderError, Result};

/// Rejects an absent input. An empty string is a valid input.
pub fn validate_required_input(value: Option<&str>) -> Result<&str> {
    value.ok_or_else(|| FinderError::invalid_input("input text is absent"))
}

pub fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        FinderError::invalid_input(format!(
            "input is not valid UTF-8 (byte offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_input() {
        assert_eq!(validate_required_input(Some("abba")).unwrap(), "abba");
        assert_eq!(validate_required_input(Some("")).unwrap(), "");
        assert!(matches!(
            validate_required_input(None),
            Err(FinderError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"level".to_vec()).unwrap(), "level");
        assert_eq!(decode_utf8("été".as_bytes().to_vec()).unwrap(), "été");

        let err = decode_utf8(vec![b'a', 0xff, b'a']).unwrap_err();
        assert!(err.to_string().contains("byte offset 1"));
    }
}
