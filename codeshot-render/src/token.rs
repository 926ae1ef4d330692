//! Tokens as produced by the external tokenizer, and line splitting.

use codeshot_config::TokenType;
use serde::{Deserialize, Serialize};

/// One lexical unit: a classified type and its literal text.
///
/// Serialized as `{"type": "Keyword", "value": "fn"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(rename = "value", alias = "text")]
    pub text: String,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            token_type,
            text: text.into(),
        }
    }
}

/// Tokens of one source line, in order.
pub type Line = Vec<Token>;

/// Group a flat token stream into lines.
///
/// Tokens spanning a line break are split; the `'\n'` stays at the end of
/// the piece that closes its line. Empty tokens are dropped and a trailing
/// newline does not open an extra empty line.
pub fn split_into_lines(tokens: impl IntoIterator<Item = Token>) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::new();

    for token in tokens {
        for piece in token.text.split_inclusive('\n') {
            line.push(Token::new(token.token_type, piece));
            if piece.ends_with('\n') {
                lines.push(std::mem::take(&mut line));
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<&str> {
        line.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_split_keeps_newline_at_line_end() {
        let lines = split_into_lines(vec![
            Token::new(TokenType::Keyword, "fn"),
            Token::new(TokenType::Text, " main\n  x"),
            Token::new(TokenType::Punctuation, ";\n"),
        ]);
        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), vec!["fn", " main\n"]);
        assert_eq!(texts(&lines[1]), vec!["  x", ";\n"]);
        assert_eq!(lines[1][0].token_type, TokenType::Text);
    }

    #[test]
    fn test_split_blank_lines_survive() {
        let lines = split_into_lines(vec![Token::new(TokenType::Text, "a\n\nb")]);
        assert_eq!(lines.len(), 3);
        assert_eq!(texts(&lines[1]), vec!["\n"]);
        assert_eq!(texts(&lines[2]), vec!["b"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        let lines = split_into_lines(vec![
            Token::new(TokenType::Text, ""),
            Token::new(TokenType::Name, "x"),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), vec!["x"]);
        assert!(split_into_lines(Vec::new()).is_empty());
    }

    #[test]
    fn test_token_json_shape() {
        let token: Token = serde_json::from_str(r#"{"type":"Keyword.Type","value":"u8"}"#).unwrap();
        assert_eq!(token, Token::new(TokenType::KeywordType, "u8"));
        let json = serde_json::to_string(&Token::new(TokenType::LiteralNumber, "1")).unwrap();
        assert_eq!(json, r#"{"type":"LiteralNumber","value":"1"}"#);
    }
}
