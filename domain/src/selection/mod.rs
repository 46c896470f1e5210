//! Random selection over a filtered subset

use crate::core::error::DomainError;
use crate::core::notice::Notice;
use rand::Rng;

/// A selected candidate plus an optional informational notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    pub item: T,
    /// [`Notice::OnlyOneMatch`] when there was a single candidate
    pub notice: Option<Notice>,
}

/// Pick one candidate uniformly at random.
///
/// Fails with [`DomainError::NoMatches`] on an empty slice. A single
/// candidate is still returned, paired with [`Notice::OnlyOneMatch`].
pub fn select<'a, T, R>(
    candidates: &'a [T],
    rng: &mut R,
) -> Result<Selection<&'a T>, DomainError>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(DomainError::NoMatches);
    }

    let index = rng.gen_range(0..candidates.len());
    let notice = (candidates.len() == 1).then_some(Notice::OnlyOneMatch);

    Ok(Selection {
        item: &candidates[index],
        notice,
    })
}
