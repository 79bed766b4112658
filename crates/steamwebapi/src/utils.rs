//! Small helpers

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Split an iterator into batches of at most `size` items.
///
/// Useful for turning a long id list into calls that each stay within
/// [`MAX_BATCH_IDS`](crate::validation::MAX_BATCH_IDS).
///
/// # Errors
///
/// Returns `Error::InvalidRequest` if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use steamwebapi::utils::as_chunks;
///
/// let chunks = as_chunks(1..=5, 2)?;
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// # Ok::<(), steamwebapi::Error>(())
/// ```
pub fn as_chunks<I>(items: I, size: usize) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    if size < 1 {
        return Err(Error::InvalidRequest(
            "chunk size must be at least 1".to_string(),
        ));
    }

    let mut items = items.into_iter();
    let mut chunks = Vec::new();
    loop {
        let chunk: Vec<_> = items.by_ref().take(size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    Ok(chunks)
}

/// Current time in UTC.
pub fn utcnow() -> DateTime<Utc> {
    Utc::now()
}
