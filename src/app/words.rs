//! Censor word orchestration methods
//!
//! The backend owns the list. Every mutation is followed by a full refresh
//! instead of editing the local copy.

use crate::logic;
use crate::services::api::ApiRequest;
use crate::Controller;

impl Controller {
    /// Request the current word list
    pub fn refresh_word_list(&mut self) {
        let generation = self.model.backend.next_words_generation();
        self.dispatch(ApiRequest::GetWords { generation });
    }

    /// Submit a word; whitespace-only input is ignored without a request
    ///
    /// Returns whether a request was issued.
    pub fn add_word(&mut self, raw: &str) -> bool {
        let Some(word) = logic::words::normalize_word(raw) else {
            return false;
        };
        tracing::debug!(%word, "adding censor word");
        self.dispatch(ApiRequest::AddWord { word })
    }

    /// Submit whatever is in the input box
    pub fn submit_pending_word(&mut self) -> bool {
        let raw = self.model.ui.pending_word_input.clone();
        self.add_word(&raw)
    }

    pub fn remove_word(&mut self, word: &str) {
        tracing::debug!(%word, "removing censor word");
        self.dispatch(ApiRequest::RemoveWord {
            word: word.to_string(),
        });
    }

    pub fn remove_selected_word(&mut self) -> bool {
        let Some(word) = self.model.selected_word().map(str::to_string) else {
            return false;
        };
        self.remove_word(&word);
        true
    }

    pub(crate) fn move_word_selection(&mut self, down: bool) {
        self.model.ui.selected_word = logic::words::move_selection(
            self.model.ui.selected_word,
            self.model.backend.words.len(),
            down,
        );
    }

    /// Replace the local list, keeping the selection on the same word if possible
    pub(crate) fn apply_word_list(&mut self, words: Vec<String>) {
        let previous_word = self.model.selected_word().map(str::to_string);
        let selected = logic::words::reselect(
            &words,
            previous_word.as_deref(),
            self.model.ui.selected_word,
        );
        self.model.backend.words = words;
        self.model.ui.selected_word = selected;
    }
}
