//! Statement sampling
//!
//! Uniform selection without replacement. Uses a partial Fisher-Yates
//! shuffle, so every k-subset is equally likely and the result comes back
//! in draw order rather than table order.

use crate::tables::{Statement, StatementTable};
use rand::seq::index;
use rand::Rng;

/// Draw `count` distinct statements, clamped to the table size
pub fn sample_statements<R: Rng + ?Sized>(
    table: &StatementTable,
    count: usize,
    rng: &mut R,
) -> Vec<Statement> {
    let available = table.len();
    let amount = count.min(available);
    if amount < count {
        tracing::debug!(requested = count, available, "Clamping statement count to table size");
    }

    index::sample(rng, available, amount)
        .into_iter()
        .filter_map(|i| {
            tracing::trace!(index = i, "Drew statement");
            table.get(i).cloned()
        })
        .collect()
}
