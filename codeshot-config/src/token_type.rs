//! Lexical token categories.
//!
//! The tokenizer is an external producer; this is the closed vocabulary the
//! renderer and style tables agree on. Names match the PascalCase category
//! names common to syntax highlighters (`Keyword`, `LiteralNumberInteger`,
//! ...), dotted forms such as `Keyword.Type` are accepted on input, and each
//! type knows the broader category it refines.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! token_types {
    (@parent) => {
        None
    };
    (@parent $parent:ident) => {
        Some(TokenType::$parent)
    };
    ($($variant:ident $(=> $parent:ident)?),* $(,)?) => {
        /// Classified type of a lexical token.
        ///
        /// `Other` absorbs every name outside the known set so that token
        /// streams from richer tokenizers still load.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum TokenType {
            $($variant,)*
            Other,
        }

        impl TokenType {
            /// Every token type, in declaration order.
            pub const ALL: &'static [TokenType] = &[$(TokenType::$variant,)* TokenType::Other];

            pub fn name(&self) -> &'static str {
                match self {
                    $(TokenType::$variant => stringify!($variant),)*
                    TokenType::Other => "Other",
                }
            }

            /// The broader category this type refines (`CommentSingle` ->
            /// `Comment`, `LiteralStringDouble` -> `LiteralString` ->
            /// `Literal`). Top-level categories have none.
            pub fn parent(&self) -> Option<TokenType> {
                match self {
                    $(TokenType::$variant => token_types!(@parent $($parent)?),)*
                    TokenType::Other => None,
                }
            }

            /// Map a category name to a token type. Unknown names become `Other`.
            pub fn from_name(name: &str) -> Self {
                let compact: std::string::String =
                    name.trim().chars().filter(|c| *c != '.').collect();
                match compact.as_str() {
                    $(stringify!($variant) => TokenType::$variant,)*
                    other => Self::from_alias(other),
                }
            }
        }
    };
}

token_types! {
    Text,
    TextWhitespace => Text,
    TextSymbol => Text,
    TextPunctuation => Text,
    Error,
    Keyword,
    KeywordConstant => Keyword,
    KeywordDeclaration => Keyword,
    KeywordNamespace => Keyword,
    KeywordPseudo => Keyword,
    KeywordReserved => Keyword,
    KeywordType => Keyword,
    Name,
    NameAttribute => Name,
    NameBuiltin => Name,
    NameBuiltinPseudo => NameBuiltin,
    NameClass => Name,
    NameConstant => Name,
    NameDecorator => Name,
    NameEntity => Name,
    NameException => Name,
    NameFunction => Name,
    NameFunctionMagic => NameFunction,
    NameLabel => Name,
    NameNamespace => Name,
    NameOther => Name,
    NameProperty => Name,
    NameTag => Name,
    NameVariable => Name,
    NameVariableClass => NameVariable,
    NameVariableGlobal => NameVariable,
    NameVariableInstance => NameVariable,
    NameVariableMagic => NameVariable,
    Literal,
    LiteralDate => Literal,
    LiteralString => Literal,
    LiteralStringAffix => LiteralString,
    LiteralStringBacktick => LiteralString,
    LiteralStringChar => LiteralString,
    LiteralStringDelimiter => LiteralString,
    LiteralStringDoc => LiteralString,
    LiteralStringDouble => LiteralString,
    LiteralStringEscape => LiteralString,
    LiteralStringHeredoc => LiteralString,
    LiteralStringInterpol => LiteralString,
    LiteralStringOther => LiteralString,
    LiteralStringRegex => LiteralString,
    LiteralStringSingle => LiteralString,
    LiteralStringSymbol => LiteralString,
    LiteralNumber => Literal,
    LiteralNumberBin => LiteralNumber,
    LiteralNumberFloat => LiteralNumber,
    LiteralNumberHex => LiteralNumber,
    LiteralNumberInteger => LiteralNumber,
    LiteralNumberIntegerLong => LiteralNumber,
    LiteralNumberOct => LiteralNumber,
    Operator,
    OperatorWord => Operator,
    Punctuation,
    Comment,
    CommentHashbang => Comment,
    CommentMultiline => Comment,
    CommentSingle => Comment,
    CommentSpecial => Comment,
    CommentPreproc => Comment,
    CommentPreprocFile => CommentPreproc,
    Generic,
    GenericDeleted => Generic,
    GenericEmph => Generic,
    GenericError => Generic,
    GenericHeading => Generic,
    GenericInserted => Generic,
    GenericOutput => Generic,
    GenericPrompt => Generic,
    GenericStrong => Generic,
    GenericSubheading => Generic,
    GenericTraceback => Generic,
    GenericUnderline => Generic,
}

impl TokenType {
    /// Short names some tokenizers emit in place of the canonical ones.
    fn from_alias(name: &str) -> Self {
        match name {
            "Whitespace" => TokenType::TextWhitespace,
            "Date" => TokenType::LiteralDate,
            "String" => TokenType::LiteralString,
            "StringEscape" => TokenType::LiteralStringEscape,
            "Number" => TokenType::LiteralNumber,
            _ => TokenType::Other,
        }
    }

    /// This type followed by each of its ancestors, most specific first.
    pub fn lineage(self) -> impl Iterator<Item = TokenType> {
        std::iter::successors(Some(self), |tt| tt.parent())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for TokenType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for TokenType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<TokenType> for String {
    fn from(token_type: TokenType) -> Self {
        token_type.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tt in TokenType::ALL {
            assert_eq!(TokenType::from_name(tt.name()), *tt);
        }
    }

    #[test]
    fn test_dotted_names() {
        assert_eq!(TokenType::from_name("Keyword.Type"), TokenType::KeywordType);
        assert_eq!(TokenType::from_name("Name.Function"), TokenType::NameFunction);
    }

    #[test]
    fn test_unknown_name_is_other() {
        assert_eq!(TokenType::from_name("LiteralStringFancy"), TokenType::Other);
        assert_eq!(TokenType::from_name(""), TokenType::Other);
    }

    #[test]
    fn test_canonical_and_short_names() {
        assert_eq!(TokenType::from_name("Literal.Number"), TokenType::LiteralNumber);
        assert_eq!(TokenType::from_name("Comment.Single"), TokenType::CommentSingle);
        assert_eq!(TokenType::from_name("LiteralStringDouble"), TokenType::LiteralStringDouble);
        assert_eq!(TokenType::from_name("Number"), TokenType::LiteralNumber);
        assert_eq!(TokenType::from_name("String"), TokenType::LiteralString);
        assert_eq!(TokenType::from_name("Whitespace"), TokenType::TextWhitespace);
        assert_eq!(TokenType::LiteralNumber.name(), "LiteralNumber");
    }

    #[test]
    fn test_lineage_walks_to_category() {
        let chain: Vec<_> = TokenType::LiteralNumberInteger.lineage().collect();
        assert_eq!(
            chain,
            vec![
                TokenType::LiteralNumberInteger,
                TokenType::LiteralNumber,
                TokenType::Literal
            ]
        );
        assert_eq!(TokenType::CommentSingle.parent(), Some(TokenType::Comment));
        assert_eq!(TokenType::Keyword.parent(), None);
        assert_eq!(TokenType::Other.parent(), None);
    }

    #[test]
    fn test_every_parent_is_a_shorter_prefix() {
        for tt in TokenType::ALL {
            if let Some(parent) = tt.parent() {
                assert!(tt.name().starts_with(parent.name()), "{tt} -> {parent}");
                assert!(tt.name().len() > parent.name().len());
            }
        }
    }
}
