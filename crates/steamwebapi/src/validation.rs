//! Request validation
//!
//! Checks that run before a request is sent, so malformed input fails
//! without any network traffic.
//!
//! # Examples
//!
//! ```rust
//! use steamwebapi::validation::{MAX_BATCH_IDS, validate_batch_ids};
//!
//! assert!(validate_batch_ids(&[76561197960265733u64]).is_ok());
//! assert!(validate_batch_ids::<u64>(&[]).is_err());
//! assert!(validate_batch_ids(&vec![0u64; MAX_BATCH_IDS + 1]).is_err());
//! ```

use crate::error::{Error, Result};
use crate::observability::log_validation_error;

/// Most ids one batch endpoint call accepts.
pub const MAX_BATCH_IDS: usize = 20;

/// Validate the id list of a batch call.
///
/// # Errors
///
/// Returns `Error::InvalidRequest` if the list is empty or longer than
/// [`MAX_BATCH_IDS`].
pub fn validate_batch_ids<T>(ids: &[T]) -> Result<()> {
    if ids.is_empty() {
        log_validation_error("ids", "empty");
        return Err(Error::InvalidRequest(
            "at least one id is required".to_string(),
        ));
    }

    if ids.len() > MAX_BATCH_IDS {
        log_validation_error("ids", "too many");
        return Err(Error::InvalidRequest(format!(
            "at most {} ids are allowed per batch, got {}",
            MAX_BATCH_IDS,
            ids.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(20, true)]
    #[case(0, false)]
    #[case(21, false)]
    #[case(100, false)]
    fn test_batch_bounds(#[case] len: usize, #[case] ok: bool) {
        let ids = vec![76561197960265733u64; len];
        assert_eq!(validate_batch_ids(&ids).is_ok(), ok);
    }

    #[test]
    fn test_too_many_message_names_count() {
        let ids = vec!["x"; 21];
        match validate_batch_ids(&ids) {
            Err(Error::InvalidRequest(msg)) => {
                assert!(msg.contains("20"));
                assert!(msg.contains("21"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }
}
