//! Builders for the proximity (`near`) and repetition (`repeat`) operators.
//!
//! The output is meant for [`FilterSet::near`](crate::FilterSet::near) and
//! [`FilterSet::repeat`](crate::FilterSet::repeat), which the compiler
//! appends verbatim.

/// How multiple fragments are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

/// Words that must appear within `distance` words of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearConfig {
    pub distance: u32,
    pub words: Vec<String>,
}

impl NearConfig {
    #[must_use]
    pub fn new(distance: u32, words: &[&str]) -> Self {
        Self {
            distance,
            words: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

/// A single word that must appear at least `count` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatConfig {
    pub count: u32,
    pub word: String,
}

impl RepeatConfig {
    #[must_use]
    pub fn new(count: u32, word: &str) -> Self {
        Self {
            count,
            word: word.to_string(),
        }
    }
}

/// Renders `near<distance>:"<words>" `.
///
/// # Panics
///
/// Panics if fewer than two words are given.
#[must_use]
pub fn near<S: AsRef<str>>(distance: u32, words: &[S]) -> String {
    assert!(words.len() >= 2, "near() requires at least 2 words");
    let joined = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    format!("near{distance}:\"{joined}\" ")
}

/// Combines several `near` fragments.
///
/// A single config renders unwrapped. `And` joins with `" AND "`; `Or`
/// wraps the group in parentheses. No configs renders nothing.
///
/// # Panics
///
/// Panics if any config has fewer than two words.
#[must_use]
pub fn multi_near(configs: &[NearConfig], combinator: Combinator) -> String {
    let mut formatted: Vec<String> = configs
        .iter()
        .map(|c| near(c.distance, c.words.as_slice()))
        .collect();

    if formatted.len() <= 1 {
        return formatted.pop().unwrap_or_default();
    }

    match combinator {
        Combinator::And => formatted.join(" AND "),
        Combinator::Or => format!("({}) ", formatted.join(" OR ")),
    }
}

/// Renders `repeat<count>:"<word>" `.
///
/// # Panics
///
/// Panics if `word` contains whitespace; the operator only matches single
/// words.
#[must_use]
pub fn repeat(count: u32, word: &str) -> String {
    assert!(
        !word.contains(char::is_whitespace),
        "repeat() only supports single words"
    );
    format!("repeat{count}:\"{word}\" ")
}

/// Combines several `repeat` fragments.
///
/// `And` joins with `"AND "`. Each fragment already ends in a space, so
/// the result reads `repeat2:"a" AND repeat3:"b" `. `Or` wraps the group in
/// parentheses, even for a single config. No configs renders nothing.
///
/// # Panics
///
/// Panics if any word contains whitespace.
#[must_use]
pub fn multi_repeat(configs: &[RepeatConfig], combinator: Combinator) -> String {
    if configs.is_empty() {
        return String::new();
    }

    let fragments: Vec<String> = configs.iter().map(|c| repeat(c.count, &c.word)).collect();

    match combinator {
        Combinator::And => fragments.join("AND "),
        Combinator::Or => format!("({}) ", fragments.join(" OR ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_renders_distance_and_words() {
        assert_eq!(near(5, &["climate", "technology"]), "near5:\"climate technology\" ");
        assert_eq!(
            near(10, &["airline", "climate", "change"]),
            "near10:\"airline climate change\" "
        );
    }

    #[test]
    #[should_panic(expected = "at least 2 words")]
    fn near_rejects_single_word() {
        let _ = near(5, &["alone"]);
    }

    #[test]
    fn multi_near_single_config_is_unwrapped() {
        let configs = [NearConfig::new(5, &["airline", "crisis"])];
        assert_eq!(
            multi_near(&configs, Combinator::Or),
            "near5:\"airline crisis\" "
        );
        assert_eq!(
            multi_near(&configs, Combinator::And),
            "near5:\"airline crisis\" "
        );
    }

    #[test]
    fn multi_near_and_joins_with_spaced_and() {
        let configs = [
            NearConfig::new(5, &["airline", "crisis"]),
            NearConfig::new(10, &["airline", "climate"]),
        ];
        assert_eq!(
            multi_near(&configs, Combinator::And),
            "near5:\"airline crisis\"  AND near10:\"airline climate\" "
        );
    }

    #[test]
    fn multi_near_or_wraps_group() {
        let configs = [
            NearConfig::new(5, &["airline", "crisis"]),
            NearConfig::new(10, &["airline", "climate"]),
        ];
        assert_eq!(
            multi_near(&configs, Combinator::Or),
            "(near5:\"airline crisis\"  OR near10:\"airline climate\" ) "
        );
    }

    #[test]
    fn repeat_renders_count_and_word() {
        assert_eq!(repeat(3, "energy"), "repeat3:\"energy\" ");
    }

    #[test]
    #[should_panic(expected = "single words")]
    fn repeat_rejects_phrases() {
        let _ = repeat(2, "climate change");
    }

    #[test]
    fn multi_repeat_and_has_no_leading_space() {
        let configs = [RepeatConfig::new(2, "airline"), RepeatConfig::new(3, "airport")];
        assert_eq!(
            multi_repeat(&configs, Combinator::And),
            "repeat2:\"airline\" AND repeat3:\"airport\" "
        );
    }

    #[test]
    fn multi_repeat_or_wraps_group() {
        let configs = [RepeatConfig::new(2, "airline"), RepeatConfig::new(3, "airport")];
        assert_eq!(
            multi_repeat(&configs, Combinator::Or),
            "(repeat2:\"airline\"  OR repeat3:\"airport\" ) "
        );
    }

    #[test]
    fn multi_repeat_single_or_is_still_wrapped() {
        let configs = [RepeatConfig::new(2, "airline")];
        assert_eq!(
            multi_repeat(&configs, Combinator::Or),
            "(repeat2:\"airline\" ) "
        );
        assert_eq!(
            multi_repeat(&configs, Combinator::And),
            "repeat2:\"airline\" "
        );
    }

    #[test]
    fn empty_configs_render_nothing() {
        assert_eq!(multi_near(&[], Combinator::Or), "");
        assert_eq!(multi_repeat(&[], Combinator::And), "");
    }
}
