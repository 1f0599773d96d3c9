//! Text statistics

use serde::Serialize;

/// Counts the words in `text`.
///
/// A word is a maximal run of non-whitespace characters. Leading, trailing and
/// repeated whitespace never produce empty words.
///
/// # Examples
/// ```
/// assert_eq!(kazoeru::word_count("one  two   three"), 3);
/// assert_eq!(kazoeru::word_count("   "), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
  text.split_whitespace().count()
}

/// Counts the characters in `text` as Unicode scalar values.
///
/// # Examples
/// ```
/// assert_eq!(kazoeru::character_count("café"), 4);
/// ```
#[must_use]
pub fn character_count(text: &str) -> usize {
  text.chars().count()
}

/// Word and character counts of a single text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TextStats {
  /// Number of whitespace-delimited words
  pub word_count: usize,
  /// Number of Unicode scalar values
  pub character_count: usize,
}

impl TextStats {
  /// Computes the statistics of `text`.
  #[must_use]
  pub fn of(text: &str) -> Self {
    Self {
      word_count: word_count(text),
      character_count: character_count(text),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text() {
    let stats = TextStats::of("");
    assert_eq!(stats, TextStats::default());
  }

  #[test]
  fn whitespace_only() {
    let stats = TextStats::of("   ");
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.character_count, 3);
  }

  #[test]
  fn simple_sentence() {
    let stats = TextStats::of("hello world");
    assert_eq!(stats.word_count, 2);
    assert_eq!(stats.character_count, 11);
  }

  #[test]
  fn irregular_spacing() {
    let stats = TextStats::of("one  two   three");
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.character_count, 16);
  }

  #[test]
  fn mixed_whitespace_kinds() {
    // tab, newline, carriage return, no-break space, ideographic space
    let text = "\tone\ntwo\r\nthree\u{00A0}four\u{3000}five ";
    assert_eq!(word_count(text), 5);
  }

  #[test]
  fn counts_scalar_values_not_bytes() {
    assert_eq!(character_count("café"), 4);
    assert_eq!("café".len(), 5);

    // 東京タワー: 5 characters, 15 bytes
    assert_eq!(character_count("東京タワー"), 5);
    assert_eq!(word_count("東京タワー"), 1);

    // combining sequence e + U+0301 stays two scalar values
    assert_eq!(character_count("e\u{0301}"), 2);

    // emoji outside the BMP is one scalar value
    assert_eq!(character_count("🦀"), 1);
  }

  #[test]
  fn serializes_both_counts() {
    let json = serde_json::to_value(TextStats::of("a b")).unwrap();
    assert_eq!(json["word_count"], 2);
    assert_eq!(json["character_count"], 3);
  }
}
