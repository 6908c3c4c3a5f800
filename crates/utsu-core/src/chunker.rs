//! Splits a kana reading into typing chunks.
//!
//! A chunk is the smallest unit the player types as one syllable: a single
//! kana, a yōon digraph (きゃ), or a sokuon (っ) that doubles the following
//! consonant. Each chunk carries every spelling that is accepted for it.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::romaji::RomajiTable;
use crate::settings::{settings, MatchingSettings};
use crate::unicode::{is_choonpu, is_hatsuon, is_romaji_vowel, is_sokuon, kana_vowel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Kana consumed by this chunk.
    pub source: String,
    /// Accepted spellings, duplicates removed. Never empty; the first entry
    /// is the display spelling.
    pub candidates: Vec<String>,
    /// True when this chunk is a sokuon resolved to the following consonant.
    pub geminate: bool,
}

impl Chunk {
    fn new(source: impl Into<String>, candidates: Vec<String>, geminate: bool) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(candidates.len());
        for c in candidates {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self {
            source: source.into(),
            candidates: unique,
            geminate,
        }
    }

    /// Chunk for a character the table does not know: it must be typed as-is.
    fn literal(c: char) -> Self {
        Self::new(c.to_string(), vec![c.to_lowercase().collect()], false)
    }

    /// The spelling shown to the player.
    pub fn display(&self) -> &str {
        self.candidates.first().map_or("", String::as_str)
    }
}

/// Context rules applied on top of plain table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOptions {
    pub hatsuon_context: bool,
    pub long_vowel_hyphen: bool,
}

impl ChunkOptions {
    /// Table lookup only, no context rules.
    pub fn plain() -> Self {
        Self {
            hatsuon_context: false,
            long_vowel_hyphen: false,
        }
    }

    pub fn from_settings() -> Self {
        settings().matching.into()
    }
}

impl From<MatchingSettings> for ChunkOptions {
    fn from(m: MatchingSettings) -> Self {
        Self {
            hatsuon_context: m.hatsuon_context,
            long_vowel_hyphen: m.long_vowel_hyphen,
        }
    }
}

/// Chunk `reading` with the global table and settings.
pub fn chunk(reading: &str) -> Vec<Chunk> {
    chunk_with(reading, RomajiTable::global(), ChunkOptions::from_settings())
}

pub fn chunk_with(reading: &str, table: &RomajiTable, options: ChunkOptions) -> Vec<Chunk> {
    let _span = debug_span!("chunk", reading).entered();

    let chars: Vec<char> = reading.chars().collect();
    let mut chunks = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        // Digraphs win over single kana.
        if let Some(spellings) = lookup_pair(table, &chars[i..]) {
            chunks.push(Chunk::new(
                chars[i..i + 2].iter().collect::<String>(),
                spellings.to_vec(),
                false,
            ));
            i += 2;
            continue;
        }

        let c = chars[i];
        if is_sokuon(c) {
            chunks.push(sokuon_chunk(table, c, &chars[i + 1..]));
            i += 1;
            continue;
        }

        let chunk = match table.lookup(c.encode_utf8(&mut [0; 4])) {
            Some(spellings) => Chunk::new(c.to_string(), spellings.to_vec(), false),
            None => Chunk::literal(c),
        };
        chunks.push(chunk);
        i += 1;
    }

    if options.hatsuon_context {
        apply_hatsuon_context(&mut chunks);
    }
    if options.long_vowel_hyphen {
        apply_long_vowel(&mut chunks);
    }

    chunks
}

fn lookup_pair<'t>(table: &'t RomajiTable, rest: &[char]) -> Option<&'t [String]> {
    if rest.len() < 2 {
        return None;
    }
    let pair: String = rest[..2].iter().collect();
    table.lookup(&pair)
}

/// Spellings of the unit starting at `rest[0]`, longest match first.
fn lookup_unit<'t>(table: &'t RomajiTable, rest: &[char]) -> Option<&'t [String]> {
    let first = rest.first()?;
    lookup_pair(table, rest).or_else(|| table.lookup(first.encode_utf8(&mut [0; 4])))
}

fn sokuon_chunk(table: &RomajiTable, sokuon: char, following: &[char]) -> Chunk {
    let mut consonants: Vec<String> = Vec::new();
    if let Some(next) = lookup_unit(table, following) {
        for spelling in next {
            match spelling.chars().next() {
                Some(c) if c.is_ascii_lowercase() && !is_romaji_vowel(c) => {
                    consonants.push(c.to_string());
                }
                _ => {}
            }
        }
    }

    if !consonants.is_empty() {
        return Chunk::new(sokuon.to_string(), consonants, true);
    }

    debug!(?following, "sokuon has no consonant to double; typed on its own");
    match table.lookup(sokuon.encode_utf8(&mut [0; 4])) {
        Some(spellings) => Chunk::new(sokuon.to_string(), spellings.to_vec(), false),
        None => Chunk::literal(sokuon),
    }
}

/// ん before a vowel, y or n cannot be a lone "n": "kin'en" would read as きねん.
fn apply_hatsuon_context(chunks: &mut [Chunk]) {
    for i in 0..chunks.len().saturating_sub(1) {
        let is_n = {
            let mut src = chunks[i].source.chars();
            matches!((src.next(), src.next()), (Some(c), None) if is_hatsuon(c))
        };
        if !is_n || chunks[i].geminate {
            continue;
        }
        let ambiguous = chunks[i + 1].candidates.iter().any(|s| {
            s.chars()
                .next()
                .is_some_and(|c| is_romaji_vowel(c) || c == 'y' || c == 'n')
        });
        if !ambiguous {
            continue;
        }
        let candidates = &mut chunks[i].candidates;
        if candidates.iter().any(|s| s != "n") {
            candidates.retain(|s| s != "n");
        }
    }
}

/// Lets a repeated vowel be typed as "-" and ー be typed as the repeated vowel.
fn apply_long_vowel(chunks: &mut [Chunk]) {
    for i in 1..chunks.len() {
        let Some(prev_vowel) = shared_final_vowel(&chunks[i - 1]) else {
            continue;
        };
        let mut src = chunks[i].source.chars();
        let extra = match (src.next(), src.next()) {
            (Some(c), None) if kana_vowel(c) == Some(prev_vowel) => "-".to_string(),
            (Some(c), None) if is_choonpu(c) => prev_vowel.to_string(),
            _ => continue,
        };
        let candidates = &mut chunks[i].candidates;
        if !candidates.contains(&extra) {
            candidates.push(extra);
        }
    }
}

/// The vowel every spelling of `chunk` ends in, if they agree.
fn shared_final_vowel(chunk: &Chunk) -> Option<char> {
    let mut vowel = None;
    for spelling in &chunk.candidates {
        let last = spelling.chars().last().filter(|&c| is_romaji_vowel(c))?;
        match vowel {
            None => vowel = Some(last),
            Some(v) if v == last => {}
            Some(_) => return None,
        }
    }
    vowel
}
