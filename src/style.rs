use crate::error::Error;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How each word's letters are cased when a style is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRule {
    LowerAll,
    UpperAll,
    TitleFirstOnly,
    TitleAll,
    /// Keep the source spelling of every word
    None,
}

impl fmt::Display for WordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordRule::LowerAll => write!(f, "lower_all"),
            WordRule::UpperAll => write!(f, "upper_all"),
            WordRule::TitleFirstOnly => write!(f, "title_first_only"),
            WordRule::TitleAll => write!(f, "title_all"),
            WordRule::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStyleSpec {
    pub name: &'static str,
    pub separator: &'static str,
    pub word_rule: WordRule,
    pub preserve: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Dash,
    Spinal,
    Kebab,
    Const,
    ScreamingSnake,
    Dot,
    SeparateWords,
    Slash,
    Backslash,
}

const fn entry(
    name: &'static str,
    separator: &'static str,
    word_rule: WordRule,
    preserve: bool,
) -> CaseStyleSpec {
    CaseStyleSpec {
        name,
        separator,
        word_rule,
        preserve,
    }
}

// Indexed by `CaseStyle as usize`; keep in declaration order.
static STYLES: [CaseStyleSpec; 12] = [
    entry("camelcase", "", WordRule::TitleFirstOnly, false),
    entry("pascalcase", "", WordRule::TitleAll, false),
    entry("snakecase", "_", WordRule::LowerAll, false),
    entry("dashcase", "-", WordRule::LowerAll, false),
    entry("spinalcase", "-", WordRule::LowerAll, false),
    entry("kebabcase", "-", WordRule::LowerAll, false),
    entry("constcase", "_", WordRule::UpperAll, false),
    entry("screaming_snakecase", "_", WordRule::UpperAll, false),
    entry("dotcase", ".", WordRule::LowerAll, false),
    entry("separate_words", " ", WordRule::None, true),
    entry("slashcase", "/", WordRule::None, true),
    entry("backslashcase", "\\", WordRule::None, true),
];

lazy_static! {
    // Keys are lowercased with separators stripped, see `name_key`.
    static ref STYLE_INDEX: HashMap<String, CaseStyle> = {
        let mut index = HashMap::new();
        for style in CaseStyle::ALL {
            index.insert(name_key(style.name()), style);
        }
        let aliases = [
            ("camel", CaseStyle::Camel),
            ("lowercamel", CaseStyle::Camel),
            ("pascal", CaseStyle::Pascal),
            ("uppercamel", CaseStyle::Pascal),
            ("snake", CaseStyle::Snake),
            ("dash", CaseStyle::Dash),
            ("spinal", CaseStyle::Spinal),
            ("kebab", CaseStyle::Kebab),
            ("const", CaseStyle::Const),
            ("constant", CaseStyle::Const),
            ("screamingsnake", CaseStyle::ScreamingSnake),
            ("dot", CaseStyle::Dot),
            ("words", CaseStyle::SeparateWords),
            ("separate", CaseStyle::SeparateWords),
            ("slash", CaseStyle::Slash),
            ("backslash", CaseStyle::Backslash),
        ];
        for (alias, style) in aliases {
            index.insert(alias.to_string(), style);
        }
        index
    };
}

fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' ' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 12] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Dash,
        CaseStyle::Spinal,
        CaseStyle::Kebab,
        CaseStyle::Const,
        CaseStyle::ScreamingSnake,
        CaseStyle::Dot,
        CaseStyle::SeparateWords,
        CaseStyle::Slash,
        CaseStyle::Backslash,
    ];

    pub fn spec(self) -> &'static CaseStyleSpec {
        &STYLES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn separator(self) -> &'static str {
        self.spec().separator
    }

    pub fn word_rule(self) -> WordRule {
        self.spec().word_rule
    }

    pub fn preserves_case(self) -> bool {
        self.spec().preserve
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = name_key(s.trim());
        // A trailing "case" is optional: "snake_case" and "snake" both resolve
        STYLE_INDEX
            .get(&key)
            .or_else(|| key.strip_suffix("case").and_then(|k| STYLE_INDEX.get(k)))
            .copied()
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
