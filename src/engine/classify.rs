#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Separator,
    Digit,
    Upper,
    Lower,
    Other,
}

pub const SEPARATORS: [char; 6] = [' ', '-', '_', '.', '/', '\\'];

pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// Classify a single character using Unicode case properties
pub fn classify(ch: char) -> CharClass {
    if is_separator(ch) {
        CharClass::Separator
    } else if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Classify a grapheme cluster by its base character, so combining marks
/// never split a letter from its accent
pub fn classify_grapheme(grapheme: &str) -> CharClass {
    grapheme.chars().next().map_or(CharClass::Other, classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        for ch in SEPARATORS {
            assert_eq!(classify(ch), CharClass::Separator);
        }
        assert_eq!(classify('+'), CharClass::Other);
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(classify('É'), CharClass::Upper);
        assert_eq!(classify('ó'), CharClass::Lower);
        assert_eq!(classify('Ж'), CharClass::Upper);
        assert_eq!(classify('日'), CharClass::Other);
    }

    #[test]
    fn test_digits() {
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('٣'), CharClass::Digit);
    }

    #[test]
    fn test_decomposed_grapheme() {
        assert_eq!(classify_grapheme("E\u{301}"), CharClass::Upper);
        assert_eq!(classify_grapheme(""), CharClass::Other);
    }
}
