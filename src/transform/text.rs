//! Plain text transforms.

use std::collections::HashMap;

/// Characters stripped from both ends of each token before counting.
const WORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', ';'];

/// Uppercases every character using Unicode case mapping.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Reverses the input character by character.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Counts characters and whitespace-delimited words.
pub fn count(text: &str) -> String {
    let char_count = text.chars().count();
    let word_count = text.split_whitespace().count();
    format!("Characters: {}, Words: {}", char_count, word_count)
}

/// Reports the most frequent word in the input.
///
/// Words are lowercased and stripped of surrounding punctuation. Ties are
/// broken in favour of the word that appeared first.
pub fn word_frequency(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in lowered.split_whitespace() {
        let word = token.trim_matches(WORD_PUNCTUATION);
        if word.is_empty() {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for word in order {
        let n = counts[word];
        if best.map_or(true, |(_, best_n)| n > best_n) {
            best = Some((word, n));
        }
    }

    match best {
        Some((word, n)) => format!("Most frequent word: '{}' ({} times)", word, n),
        None => "No words found".to_string(),
    }
}
