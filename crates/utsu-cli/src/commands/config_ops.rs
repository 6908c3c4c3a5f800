use std::fs;

use tracing::debug;

use super::die;

pub fn romaji_export() {
    print!("{}", utsu_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(utsu_core::romaji::parse_romaji_toml(&content), "Error: {}");
    let spellings: usize = map.values().map(Vec::len).sum();
    println!("OK: {} units, {} spellings", map.len(), spellings);
}

pub fn settings_export() {
    print!("{}", utsu_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        utsu_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: battle.player_hp={}, difficulty.normal={}s/char, matching.hatsuon_context={}",
        s.battle.player_hp, s.difficulty.normal, s.matching.hatsuon_context
    );
}

pub fn words_export() {
    print!("{}", utsu_session::words::default_toml());
}

pub fn words_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let bank = die!(utsu_session::WordBank::from_toml(&content), "Error: {}");
    let words: usize = (0..bank.level_count()).map(|l| bank.words(l).len()).sum();
    println!(
        "OK: {} levels, {} words, {} enemies",
        bank.level_count(),
        words,
        bank.enemies().len()
    );
}

/// Install custom romaji/settings TOML before anything reads the globals.
pub fn install_custom(romaji: Option<&str>, settings: Option<&str>) {
    if let Some(file) = romaji {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            utsu_core::romaji::RomajiTable::init_custom(content),
            "Error in {file}: {}"
        );
        debug!(file, "custom romaji table installed");
    }
    if let Some(file) = settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            utsu_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
        debug!(file, "custom settings installed");
    }
}
