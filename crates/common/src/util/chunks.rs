use std::iter::Fuse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("chunk size must be greater than zero")]
pub struct ChunkSizeError;

/// Iterator over consecutive, non-empty batches of an underlying iterator
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    iter: Fuse<I>,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Split `iterable` into batches of `size` items; the last batch may be shorter.
///
/// ```
/// use common::util::chunks;
///
/// let batches: Vec<Vec<u32>> = chunks(1..=5, 2).unwrap().collect();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunks<I>(iterable: I, size: usize) -> Result<Chunks<I::IntoIter>, ChunkSizeError>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(ChunkSizeError);
    }
    Ok(Chunks {
        iter: iterable.into_iter().fuse(),
        size,
    })
}
