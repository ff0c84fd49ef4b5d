//! Round building for the quiz front end.
//!
//! Pure sampling over surviving records. The caller owns all terminal I/O
//! and supplies the RNG, so rounds are reproducible under a seeded one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::CanonicalRecord;

/// One presentable round: shuffled statements and where the lie landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub statements: Vec<String>,
    pub lie_index: usize,
}

impl QuizRound {
    pub fn lie(&self) -> &str {
        &self.statements[self.lie_index]
    }
}

/// Build up to `limit` rounds from `records`, drawing records in shuffled
/// order and shuffling each record's statements for presentation. The lie is
/// tracked by position through the shuffle, so duplicate statement text
/// cannot misattribute it.
pub fn build_rounds(
    records: &[CanonicalRecord],
    limit: usize,
    rng: &mut impl Rng,
) -> Vec<QuizRound> {
    let mut order: Vec<&CanonicalRecord> = records.iter().collect();
    order.shuffle(rng);
    order.truncate(limit);

    order
        .into_iter()
        .map(|record| {
            let mut indices: Vec<usize> = (0..record.statements.len()).collect();
            indices.shuffle(rng);

            let lie_index = indices
                .iter()
                .position(|&i| i == record.lie_position)
                .unwrap_or(0);
            let statements = indices
                .iter()
                .map(|&i| record.statements[i].clone())
                .collect();

            QuizRound {
                statements,
                lie_index,
            }
        })
        .collect()
}
