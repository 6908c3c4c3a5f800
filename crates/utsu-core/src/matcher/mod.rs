//! Incremental keystroke matcher for one word.
//!
//! `MatchState` consumes one key at a time against the live spellings of the
//! current chunk. A chunk is resolved as soon as any surviving spelling has
//! been typed in full, so "si" finishes し without waiting for a possible "h".
//! Rejected keys never mutate state.


use tracing::debug;

use crate::chunker::{chunk, Chunk};

/// Outcome of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResult {
    pub accepted: bool,
    pub completed: bool,
}

impl KeyResult {
    const REJECTED: Self = Self {
        accepted: false,
        completed: false,
    };
    const ALREADY_COMPLETE: Self = Self {
        accepted: false,
        completed: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingChunk(usize),
    WordComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    chunks: Vec<Chunk>,
    chunk_index: usize,
    char_index: usize,
    /// Indices into the current chunk's candidates still consistent with input.
    live: Vec<usize>,
    typed: String,
}

fn all_candidates(chunk: Option<&Chunk>) -> Vec<usize> {
    chunk.map_or_else(Vec::new, |c| (0..c.candidates.len()).collect())
}

fn normalize_key(key: char) -> char {
    let mut lower = key.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}

impl MatchState {
    /// Chunk `reading` with the global table and start matching it.
    pub fn new(reading: &str) -> Self {
        Self::from_chunks(chunk(reading))
    }

    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let live = all_candidates(chunks.first());
        Self {
            chunks,
            chunk_index: 0,
            char_index: 0,
            live,
            typed: String::new(),
        }
    }

    pub fn process_key(&mut self, key: char) -> KeyResult {
        let key = normalize_key(key);

        let Some(current) = self.chunks.get(self.chunk_index) else {
            return KeyResult::ALREADY_COMPLETE;
        };

        let pos = self.char_index;
        let matching: Vec<usize> = self
            .live
            .iter()
            .copied()
            .filter(|&i| current.candidates[i].chars().nth(pos) == Some(key))
            .collect();

        if matching.is_empty() {
            debug!(
                ?key,
                chunk = %current.source,
                pos,
                "key rejected"
            );
            return KeyResult::REJECTED;
        }

        self.typed.push(key);
        self.char_index += 1;
        let resolved = matching
            .iter()
            .any(|&i| current.candidates[i].chars().count() == self.char_index);

        if resolved {
            self.chunk_index += 1;
            self.char_index = 0;
            self.live = all_candidates(self.chunks.get(self.chunk_index));
        } else {
            self.live = matching;
        }

        KeyResult {
            accepted: true,
            completed: self.is_complete(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_complete() {
            MatchPhase::WordComplete
        } else {
            MatchPhase::AwaitingChunk(self.chunk_index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.chunk_index >= self.chunks.len()
    }

    /// Fraction of chunks resolved, in `[0, 1]`. An empty word counts as done.
    pub fn progress(&self) -> f64 {
        if self.chunks.is_empty() {
            return 1.0;
        }
        self.chunk_index as f64 / self.chunks.len() as f64
    }

    /// Every accepted key so far, across all chunks.
    pub fn typed_romaji(&self) -> &str {
        &self.typed
    }

    pub fn chunk_index(&self) -> usize {
        self.chunk_index
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Spellings of the current chunk still consistent with the typed keys.
    pub fn live_candidates(&self) -> impl Iterator<Item = &str> + '_ {
        let current = self.chunks.get(self.chunk_index);
        self.live
            .iter()
            .filter_map(move |&i| current.map(|c| c.candidates[i].as_str()))
    }

    /// Keys that would be accepted next, in candidate order.
    pub fn expected_keys(&self) -> Vec<char> {
        let mut keys = Vec::new();
        for spelling in self.live_candidates() {
            if let Some(c) = spelling.chars().nth(self.char_index) {
                if !keys.contains(&c) {
                    keys.push(c);
                }
            }
        }
        keys
    }

    /// What is left to type, following the spelling the player has chosen
    /// so far for the current chunk and display spellings after it.
    pub fn remaining_romaji(&self) -> String {
        let mut out = String::new();
        if let Some(spelling) = self.live_candidates().next() {
            out.extend(spelling.chars().skip(self.char_index));
        }
        for chunk in self.chunks.iter().skip(self.chunk_index + 1) {
            out.push_str(chunk.display());
        }
        out
    }
}
