//! Character-level Unicode classification for kana readings.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Small tsu in either script.
pub fn is_sokuon(c: char) -> bool {
    matches!(c, 'っ' | 'ッ')
}

/// Syllabic n in either script.
pub fn is_hatsuon(c: char) -> bool {
    matches!(c, 'ん' | 'ン')
}

/// Prolonged sound mark.
pub fn is_choonpu(c: char) -> bool {
    c == 'ー'
}

pub fn is_romaji_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Romaji vowel of a standalone vowel kana (あ → a, ア → a).
pub fn kana_vowel(c: char) -> Option<char> {
    match c {
        'あ' | 'ア' => Some('a'),
        'い' | 'イ' => Some('i'),
        'う' | 'ウ' => Some('u'),
        'え' | 'エ' => Some('e'),
        'お' | 'オ' => Some('o'),
        _ => None,
    }
}

/// Convert a katakana string to hiragana.
///
/// Only ァ (U+30A1) through ヶ (U+30F6) have hiragana counterparts; everything
/// else (ー, ASCII, kanji) is passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("キャ"), "きゃ");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("ヴ"), "ゔ");
        assert_eq!(katakana_to_hiragana("ねこ"), "ねこ");
        assert_eq!(katakana_to_hiragana("漢a"), "漢a");
        assert_eq!(katakana_to_hiragana(""), "");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_kana('ん'));
        assert!(!is_kana('猫'));
        assert!(is_sokuon('っ') && is_sokuon('ッ'));
        assert!(!is_sokuon('つ'));
        assert!(is_hatsuon('ン'));
        assert!(is_choonpu('ー'));
    }

    #[test]
    fn test_kana_vowel() {
        assert_eq!(kana_vowel('あ'), Some('a'));
        assert_eq!(kana_vowel('オ'), Some('o'));
        assert_eq!(kana_vowel('か'), None);
    }
}
