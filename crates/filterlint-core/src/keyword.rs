//! Keyword table: every recognised first word of a line and how it is
//! validated.

use std::fmt;

use serde::Serialize;
use strsim::levenshtein;

/// Upper bound on the edit distance of a keyword suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Values accepted by `Rarity`.
pub const RARITIES: &[&str] = &["Normal", "Magic", "Rare", "Unique"];

/// Values accepted by `LinkedSockets`.
pub const LINKED_SOCKETS: &[i64] = &[0, 2, 3, 4, 5, 6];

/// Whether a rule filters items or changes how they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A match criterion.
    Condition,
    /// A display effect.
    Action,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Condition => f.write_str("condition"),
            Category::Action => f.write_str("action"),
        }
    }
}

/// Which catalog set a string list is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSet {
    /// Item classes.
    Classes,
    /// Item base types.
    Bases,
}

/// How the arguments of a rule are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// A single number within `min..=max`, optionally preceded by an operator.
    Range {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
        /// Whether a comparison operator may precede the number.
        operator: bool,
    },
    /// `True` or `False`.
    Boolean,
    /// One string out of a fixed set, compared case-insensitively.
    OneOf(&'static [&'static str]),
    /// An optional operator and a number out of a fixed set.
    OperatorNumber(&'static [i64]),
    /// A group of `R`, `G`, `B` and `W` socket letters.
    SocketGroup,
    /// One or more names matched against a catalog set.
    CatalogList(CatalogSet),
    /// A hex literal or three or four colour channels.
    Color,
    /// A sound id and an optional volume.
    AlertSound,
}

/// What a keyword introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// `Show` / `Hide` block header.
    Block,
    /// A rule inside a block.
    Rule(Category, Validator),
}

/// A recognised filter keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Show,
    Hide,
    ItemLevel,
    DropLevel,
    Quality,
    Sockets,
    Height,
    Width,
    Identified,
    Corrupted,
    Rarity,
    LinkedSockets,
    SocketGroup,
    Class,
    BaseType,
    SetFontSize,
    SetBorderColor,
    SetTextColor,
    SetBackgroundColor,
    PlayAlertSound,
}

impl Keyword {
    /// Every keyword, blocks first, then conditions, then actions.
    pub const ALL: [Keyword; 20] = [
        Keyword::Show,
        Keyword::Hide,
        Keyword::ItemLevel,
        Keyword::DropLevel,
        Keyword::Quality,
        Keyword::Sockets,
        Keyword::Height,
        Keyword::Width,
        Keyword::Identified,
        Keyword::Corrupted,
        Keyword::Rarity,
        Keyword::LinkedSockets,
        Keyword::SocketGroup,
        Keyword::Class,
        Keyword::BaseType,
        Keyword::SetFontSize,
        Keyword::SetBorderColor,
        Keyword::SetTextColor,
        Keyword::SetBackgroundColor,
        Keyword::PlayAlertSound,
    ];

    /// Looks up a keyword by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Returns the keyword as written in a filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Show => "Show",
            Keyword::Hide => "Hide",
            Keyword::ItemLevel => "ItemLevel",
            Keyword::DropLevel => "DropLevel",
            Keyword::Quality => "Quality",
            Keyword::Sockets => "Sockets",
            Keyword::Height => "Height",
            Keyword::Width => "Width",
            Keyword::Identified => "Identified",
            Keyword::Corrupted => "Corrupted",
            Keyword::Rarity => "Rarity",
            Keyword::LinkedSockets => "LinkedSockets",
            Keyword::SocketGroup => "SocketGroup",
            Keyword::Class => "Class",
            Keyword::BaseType => "BaseType",
            Keyword::SetFontSize => "SetFontSize",
            Keyword::SetBorderColor => "SetBorderColor",
            Keyword::SetTextColor => "SetTextColor",
            Keyword::SetBackgroundColor => "SetBackgroundColor",
            Keyword::PlayAlertSound => "PlayAlertSound",
        }
    }

    /// Returns what the keyword introduces and how its arguments are checked.
    pub fn kind(&self) -> KeywordKind {
        use Category::{Action, Condition};

        let range = |min, max| Validator::Range {
            min,
            max,
            operator: true,
        };

        match self {
            Keyword::Show | Keyword::Hide => KeywordKind::Block,
            Keyword::ItemLevel | Keyword::DropLevel => KeywordKind::Rule(Condition, range(0, 100)),
            Keyword::Quality => KeywordKind::Rule(Condition, range(0, 20)),
            Keyword::Sockets => KeywordKind::Rule(Condition, range(0, 6)),
            Keyword::Height => KeywordKind::Rule(Condition, range(1, 4)),
            Keyword::Width => KeywordKind::Rule(Condition, range(1, 2)),
            Keyword::Identified | Keyword::Corrupted => {
                KeywordKind::Rule(Condition, Validator::Boolean)
            }
            Keyword::Rarity => KeywordKind::Rule(Condition, Validator::OneOf(RARITIES)),
            Keyword::LinkedSockets => {
                KeywordKind::Rule(Condition, Validator::OperatorNumber(LINKED_SOCKETS))
            }
            Keyword::SocketGroup => KeywordKind::Rule(Condition, Validator::SocketGroup),
            Keyword::Class => {
                KeywordKind::Rule(Condition, Validator::CatalogList(CatalogSet::Classes))
            }
            Keyword::BaseType => {
                KeywordKind::Rule(Condition, Validator::CatalogList(CatalogSet::Bases))
            }
            Keyword::SetFontSize => KeywordKind::Rule(
                Action,
                Validator::Range {
                    min: 18,
                    max: 45,
                    operator: false,
                },
            ),
            Keyword::SetBorderColor | Keyword::SetTextColor | Keyword::SetBackgroundColor => {
                KeywordKind::Rule(Action, Validator::Color)
            }
            Keyword::PlayAlertSound => KeywordKind::Rule(Action, Validator::AlertSound),
        }
    }

    /// Returns the rule category, or `None` for block headers.
    pub fn category(&self) -> Option<Category> {
        match self.kind() {
            KeywordKind::Block => None,
            KeywordKind::Rule(category, _) => Some(category),
        }
    }

    /// Returns true if a `#` comment may follow the keyword's arguments.
    pub fn allows_trailing_comment(&self) -> bool {
        matches!(
            self,
            Keyword::Show
                | Keyword::Hide
                | Keyword::SetBorderColor
                | Keyword::SetTextColor
                | Keyword::SetBackgroundColor
                | Keyword::PlayAlertSound
        )
    }

    /// Finds the closest keyword to an unrecognised word.
    ///
    /// The case-insensitive edit distance may be at most a third of the
    /// keyword's length, and never more than two, so short words only match
    /// near-exact spellings.
    pub fn suggest(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        let (keyword, distance) = Self::ALL
            .into_iter()
            .map(|k| (k, levenshtein(&word, &k.as_str().to_lowercase())))
            .min_by_key(|(_, d)| *d)?;

        let threshold = (keyword.as_str().len() / 3).min(MAX_SUGGESTION_DISTANCE);
        (distance <= threshold).then_some(keyword)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
