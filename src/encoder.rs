//! Layer-by-layer run extraction.
//!
//! Each pass walks the remaining distinct values in ascending order, groups
//! them into maximal runs of consecutive integers and emits one token per
//! run with the run's smallest remaining count. That count is then
//! subtracted from every value of the run. Passes repeat until nothing is
//! left, so a value occurring more often than its neighbours shows up again
//! in a later layer.
//!
//! ```text
//! [1, 2, 2, 3, 4, 4, 4, 5]
//! layer 0: 1-5          remaining {2: 1, 4: 2}
//! layer 1: 2, 4:2       remaining {}
//! => "1-5,2,4:2"
//! ```

use crate::frequency::FrequencyTable;
use crate::run::Run;
use crate::token::{Token, TOKEN_SEPARATOR};

/// Iterator over the encoding layers of a multiset.
///
/// Every item holds the tokens of one pass, ordered by run start. The
/// iterator ends once all occurrences are consumed; an empty multiset has
/// no layers.
#[derive(Debug, Clone)]
pub struct Layers {
    table: FrequencyTable,
}

impl Layers {
    /// Prepares the layers of `values`.
    pub fn new(values: &[i64]) -> Self {
        Self {
            table: FrequencyTable::from_values(values),
        }
    }

    /// Closes `run`, emitting its token and consuming its minimum count.
    fn close(&mut self, run: &Run, layer: &mut Vec<Token>) {
        let amount = self.table.min_count(run);
        self.table.consume(run, amount);
        layer.push(Token::from_run(run, amount));
    }
}

impl Iterator for Layers {
    type Item = Vec<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.table.is_empty() {
            return None;
        }

        // Runs of one pass are disjoint, so consuming a closed run never
        // changes the counts of keys still ahead in the snapshot.
        let keys = self.table.keys();
        let mut layer = Vec::new();
        let mut current: Option<Run> = None;

        for key in keys {
            if let Some(run) = current.as_mut() {
                if run.try_extend(key) {
                    continue;
                }
                let closed = *run;
                self.close(&closed, &mut layer);
            }
            current = Some(Run::new(key));
        }

        if let Some(run) = current {
            self.close(&run, &mut layer);
        }

        tracing::trace!(
            tokens = layer.len(),
            remaining = self.table.len(),
            "emitted layer"
        );

        Some(layer)
    }
}

/// All tokens of `values` in emission order.
pub fn tokens(values: &[i64]) -> Vec<Token> {
    Layers::new(values).flatten().collect()
}

/// Writes tokens as range text.
pub fn join(tokens: &[Token]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            text.push(TOKEN_SEPARATOR);
        }
        text.push_str(&token.to_string());
    }
    text
}

/// Encodes `values` as range text.
pub fn encode(values: &[i64]) -> String {
    join(&tokens(values))
}
