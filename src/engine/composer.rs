use crate::engine::segmenter::Word;
use crate::style::{CaseStyleSpec, WordRule};
use unicode_segmentation::UnicodeSegmentation;

/// Render segmented words in the casing and separator of `style`
pub fn compose(words: &[Word], style: &CaseStyleSpec) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| render(word, style.word_rule, i == 0))
        .collect::<Vec<_>>()
        .join(style.separator)
}

fn render(word: &Word, rule: WordRule, first: bool) -> String {
    match rule {
        WordRule::None => word.text.clone(),
        WordRule::LowerAll => word.text.to_lowercase(),
        WordRule::UpperAll => word.text.to_uppercase(),
        // Lower camel wins over acronym spelling for the leading word
        WordRule::TitleFirstOnly if first => word.text.to_lowercase(),
        WordRule::TitleFirstOnly | WordRule::TitleAll => match &word.acronym {
            Some(canonical) => canonical.clone(),
            None => titlecase(&word.text),
        },
    }
}

fn titlecase(text: &str) -> String {
    match text.graphemes(true).next() {
        Some(head) => {
            let mut out = head.to_uppercase();
            out.push_str(&text[head.len()..].to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CaseStyle;

    fn word(text: &str, acronym: Option<&str>) -> Word {
        Word {
            text: text.to_string(),
            start: 0,
            end: text.len(),
            acronym: acronym.map(str::to_string),
        }
    }

    fn sample() -> Vec<Word> {
        vec![
            word("foo", None),
            word("http", Some("HTTP")),
            word("BAR", None),
        ]
    }

    #[test]
    fn test_mixed_case_styles_use_acronym_spelling() {
        assert_eq!(compose(&sample(), CaseStyle::Camel.spec()), "fooHTTPBar");
        assert_eq!(compose(&sample(), CaseStyle::Pascal.spec()), "FooHTTPBar");
    }

    #[test]
    fn test_leading_acronym_is_lowered_in_camelcase() {
        let words = vec![word("HTTP", Some("HTTP")), word("Server", None)];
        assert_eq!(compose(&words, CaseStyle::Camel.spec()), "httpServer");
        assert_eq!(compose(&words, CaseStyle::Pascal.spec()), "HTTPServer");
    }

    #[test]
    fn test_normalizing_styles_ignore_acronyms() {
        assert_eq!(compose(&sample(), CaseStyle::Snake.spec()), "foo_http_bar");
        assert_eq!(compose(&sample(), CaseStyle::Const.spec()), "FOO_HTTP_BAR");
        assert_eq!(compose(&sample(), CaseStyle::Dot.spec()), "foo.http.bar");
    }

    #[test]
    fn test_preserve_styles_keep_source_spelling() {
        assert_eq!(compose(&sample(), CaseStyle::SeparateWords.spec()), "foo http BAR");
        assert_eq!(compose(&sample(), CaseStyle::Backslash.spec()), "foo\\http\\BAR");
    }

    #[test]
    fn test_empty_words() {
        for style in CaseStyle::ALL {
            assert_eq!(compose(&[], style.spec()), "");
        }
    }

    #[test]
    fn test_titlecase_unicode() {
        assert_eq!(titlecase("éCOLE"), "École");
        assert_eq!(titlecase("E\u{301}t"), "E\u{301}t");
    }
}
