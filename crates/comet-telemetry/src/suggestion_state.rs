use serde::{Deserialize, Serialize};

/// Terminal outcome of one suggestion, as reported in user-decision telemetry.
///
/// Serialized to its wire string (`"Accept"`, `"Reject"`, ...) only at the
/// event boundary; everything internal works with the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionState {
    Accept,
    Reject,
    Discard,
    Ignore,
    Showed,
}

impl SuggestionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionState::Accept => "Accept",
            SuggestionState::Reject => "Reject",
            SuggestionState::Discard => "Discard",
            SuggestionState::Ignore => "Ignore",
            SuggestionState::Showed => "Showed",
        }
    }
}

/// Per-candidate prefix-match flags for one suggestion batch.
///
/// Index `i` is `true` iff candidate `i`'s text still matches the buffer
/// content the user typed after it was shown. Indices are fixed once the
/// batch is shown; a flag that was never set reads as unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMatchVector {
    flags: Vec<bool>,
}

impl PrefixMatchVector {
    /// All-unmatched vector for a batch of `len` candidates.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn set(&mut self, index: usize, matched: bool) {
        debug_assert!(index < self.flags.len(), "prefix flag index out of range");
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = matched;
        }
    }

    /// Whether candidate `index` still prefix-matches the buffer. Unset
    /// indices read as `false`.
    pub fn matched(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }
}

impl From<Vec<bool>> for PrefixMatchVector {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags }
    }
}

/// Classify the terminal outcome of candidate `index`.
///
/// `accepted` is the batch-wide accepted candidate index, `None` when nothing
/// in the batch was accepted. The policy, in precedence order:
///
/// - unmatched prefix is always `Discard` (the candidate was invalidated by
///   further edits before any decision, accepted index or not);
/// - a matched candidate at the accepted index is `Accept`;
/// - a matched candidate is `Reject` when nothing in the batch was accepted,
///   `Ignore` when some other candidate was.
///
/// Pure and total: identical inputs always produce the same state.
pub fn classify(
    index: usize,
    accepted: Option<usize>,
    prefix_matched: &PrefixMatchVector,
) -> SuggestionState {
    let matched = prefix_matched.matched(index);
    match accepted {
        None => {
            if matched {
                SuggestionState::Reject
            } else {
                SuggestionState::Discard
            }
        }
        Some(accepted_index) if accepted_index == index => {
            if matched {
                SuggestionState::Accept
            } else {
                SuggestionState::Discard
            }
        }
        Some(_) => {
            if matched {
                SuggestionState::Ignore
            } else {
                SuggestionState::Discard
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn unmatched_candidate_with_no_acceptance_is_discarded() {
        let prefix = PrefixMatchVector::from(vec![false, true]);
        assert_eq!(classify(0, None, &prefix), SuggestionState::Discard);
    }

    #[test]
    fn matched_candidate_with_no_acceptance_is_rejected() {
        let prefix = PrefixMatchVector::from(vec![true, true]);
        assert_eq!(classify(0, None, &prefix), SuggestionState::Reject);
    }

    #[test]
    fn accepted_index_with_unmatched_prefix_is_discarded() {
        // Accept requires both the accepted index and a matched prefix.
        let prefix = PrefixMatchVector::from(vec![true, false]);
        assert_eq!(classify(1, Some(1), &prefix), SuggestionState::Discard);
    }

    #[test]
    fn matched_candidate_at_accepted_index_is_accepted() {
        let prefix = PrefixMatchVector::from(vec![true, true]);
        assert_eq!(classify(0, Some(0), &prefix), SuggestionState::Accept);
    }

    #[test]
    fn matched_candidate_before_other_acceptance_is_ignored() {
        let prefix = PrefixMatchVector::from(vec![true, true]);
        assert_eq!(classify(0, Some(1), &prefix), SuggestionState::Ignore);
    }

    #[test]
    fn flags_are_set_per_index() {
        let mut prefix = PrefixMatchVector::new(2);
        prefix.set(0, true);
        assert!(prefix.matched(0));
        assert!(!prefix.matched(1));
    }

    #[test]
    fn unset_flags_read_as_unmatched() {
        let prefix = PrefixMatchVector::default();
        assert_eq!(classify(0, Some(0), &prefix), SuggestionState::Discard);
        assert_eq!(classify(3, None, &prefix), SuggestionState::Discard);
    }

    proptest! {
        #[test]
        fn classify_is_deterministic(
            index in 0usize..8,
            accepted in proptest::option::of(0usize..8),
            flags in proptest::collection::vec(any::<bool>(), 0..8),
        ) {
            let prefix = PrefixMatchVector::from(flags);
            prop_assert_eq!(
                classify(index, accepted, &prefix),
                classify(index, accepted, &prefix)
            );
        }

        #[test]
        fn accept_requires_accepted_index_and_matched_prefix(
            index in 0usize..8,
            accepted in proptest::option::of(0usize..8),
            flags in proptest::collection::vec(any::<bool>(), 0..8),
        ) {
            let prefix = PrefixMatchVector::from(flags);
            let state = classify(index, accepted, &prefix);
            prop_assert_eq!(
                state == SuggestionState::Accept,
                accepted == Some(index) && prefix.matched(index)
            );
            // An unmatched prefix always discards.
            if !prefix.matched(index) {
                prop_assert_eq!(state, SuggestionState::Discard);
            }
        }
    }
}
