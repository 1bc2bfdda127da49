//! Transcript assembly
//!
//! Merges interim and final recognition segments into one displayable
//! transcript. Final segments accumulate for the lifetime of a listening
//! run; interim segments are revisions of the same tentative span and
//! replace each other wholesale on every event.

use crate::recognition::ResultEvent;

/// Pure fold of the result-event stream since the last `start`
#[derive(Debug, Default)]
pub struct TranscriptAssembler {
    /// Committed text, append-only within one listening run
    final_text: String,

    /// Latest tentative span, replaced on every event
    interim_text: String,
}

impl TranscriptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result event into the transcript.
    ///
    /// Segments arrive already positioned at the event's `result_index`;
    /// anything before that index was finalized by a prior event and is
    /// never re-delivered, so every final segment here is new text.
    pub fn apply(&mut self, event: &ResultEvent) {
        let mut interim = String::new();
        for segment in &event.segments {
            if segment.is_final {
                self.final_text.push_str(&segment.text);
            } else {
                interim.push_str(&segment.text);
            }
        }
        self.interim_text = interim;
    }

    /// The displayed transcript: committed text followed by the current
    /// tentative span
    pub fn transcript(&self) -> String {
        format!("{}{}", self.final_text, self.interim_text)
    }

    /// Whether the transcript is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.final_text.trim().is_empty() && self.interim_text.trim().is_empty()
    }

    /// Clear all accumulated text (issued at `start`, and after a
    /// successful save)
    pub fn reset(&mut self) {
        self.final_text.clear();
        self.interim_text.clear();
    }
}
