/*!
A bounded record of distinct models.

While recording, each model found by an oracle is noted, unless the same model was already noted.
Once the limit is reached the oldest model is forgotten.

Atomic set discovery uses the history to avoid queries whose outcome is already known from some model seen earlier.
*/

use std::collections::VecDeque;

use crate::structures::model::Model;

/// The most recent distinct models found by an oracle, most recent first.
#[derive(Clone, Debug, Default)]
pub struct SolutionHistory {
    limit: usize,
    models: VecDeque<Model>,
}

impl SolutionHistory {
    /// Forgets any models noted and begins recording at most `limit` models.
    ///
    /// A limit of zero stops recording.
    pub fn start(&mut self, limit: usize) {
        self.limit = limit;
        self.models.clear();
    }

    /// Forgets any models noted and stops recording.
    pub fn stop(&mut self) {
        self.start(0)
    }

    pub fn is_recording(&self) -> bool {
        self.limit > 0
    }

    /// Notes `model`, if recording and the model is distinct from every model noted.
    pub fn record(&mut self, model: &Model) {
        if !self.is_recording() || self.models.contains(model) {
            return;
        }
        self.models.push_front(model.clone());
        self.models.truncate(self.limit);
    }

    /// The models noted, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
