//! Quiz play: random question selection without repeats.
//!
//! The server keeps no session. Each request carries the ids already served
//! in the current play-through, and the next question is drawn uniformly
//! from the pool minus those ids. When nothing unseen is left the quiz is
//! over, which is a normal outcome rather than an error.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::question::Question;
use crate::types::DbId;

/// Wire id meaning "questions from every category".
pub const ALL_CATEGORIES: DbId = 0;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(DbId),
}

impl QuizCategory {
    /// Interpret a category id from a quiz request.
    pub fn from_id(id: DbId) -> Self {
        if id == ALL_CATEGORIES {
            QuizCategory::All
        } else {
            QuizCategory::Only(id)
        }
    }
}

/// Pick a random question from `pool` whose id is not in `previous`.
///
/// Returns `None` when every question in the pool has been served, including
/// when the pool itself is empty. Ids in `previous` that are not part of the
/// pool, and repeated ids, have no effect.
pub fn pick_unseen<'a, R>(
    pool: &'a [Question],
    previous: &HashSet<DbId>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
