//! Shared handling for breakpoint batches.

/// A collection of output keyed by breakpoint width.
pub trait Batch {
    /// Create an empty batch for `width`.
    fn empty(width: u32) -> Self;

    /// Breakpoint width in pixels; 0 is the base batch.
    fn width(&self) -> u32;
}

/// Find the batch for `width`, appending a new one on first sight.
pub fn batch_mut<B: Batch>(batches: &mut Vec<B>, width: u32) -> &mut B {
    let index = match batches.iter().position(|b| b.width() == width) {
        Some(index) => index,
        None => {
            batches.push(B::empty(width));
            batches.len() - 1
        }
    };
    &mut batches[index]
}

/// Order batches by ascending width so media queries cascade correctly.
pub fn sort_batches<B: Batch>(batches: &mut [B]) {
    batches.sort_by_key(|b| b.width());
}
