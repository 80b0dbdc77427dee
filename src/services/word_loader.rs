use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead};

/// Load extra word/definition pairs for the daily pool
/// One pair per line, word and definition separated by a tab; blank lines
/// and lines without a definition are skipped
pub fn load_word_list(file_path: &str) -> io::Result<Vec<(String, String)>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut pairs = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((word, definition)) if !word.trim().is_empty() && !definition.trim().is_empty() => {
                pairs.push((word.trim().to_string(), definition.trim().to_string()));
            }
            _ => {
                warn!("Skipping malformed word list line {}", number + 1);
            }
        }
    }

    info!("Loaded {} extra words from {}", pairs.len(), file_path);
    Ok(pairs)
}

/// Load the list if a path was given, degrading to empty on failure
pub fn load_optional_word_list(file_path: Option<&String>) -> Vec<(String, String)> {
    match file_path {
        Some(path) => load_word_list(path).unwrap_or_else(|e| {
            warn!("Failed to load word list at {}: {}", path, e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}
