//! Turning input files into lines of tokens.
//!
//! Tokenization itself happens upstream. Plain text becomes `Text` tokens;
//! a JSON token stream carries whatever classification its producer chose.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use codeshot_config::TokenType;
use codeshot_render::{Line, Token, split_into_lines};
use serde::Deserialize;

/// Accepted JSON layouts: a bare array or `{"tokens": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenStream {
    Bare(Vec<Token>),
    Wrapped { tokens: Vec<Token> },
}

impl TokenStream {
    fn into_tokens(self) -> Vec<Token> {
        match self {
            TokenStream::Bare(tokens) | TokenStream::Wrapped { tokens } => tokens,
        }
    }
}

/// One `Text` token per source line. `\r\n` line endings become `\n`.
pub fn from_plain_text(source: &str) -> Vec<Line> {
    let normalized = source.replace("\r\n", "\n");
    split_into_lines(std::iter::once(Token::new(TokenType::Text, normalized)))
}

/// Parse a JSON token stream and group it into lines.
pub fn from_json_tokens<R: Read>(reader: R) -> Result<Vec<Line>> {
    let stream: TokenStream =
        serde_json::from_reader(reader).context("Failed to parse JSON token stream")?;
    let tokens = stream.into_tokens();
    log::debug!("Read {} tokens", tokens.len());
    Ok(split_into_lines(tokens))
}

/// Read the whole input, from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path)),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read input from stdin")?;
            Ok(source)
        }
    }
}

/// Load lines from `path` (or stdin), as JSON tokens or as plain text.
pub fn load_lines(path: Option<&Path>, json_tokens: bool) -> Result<Vec<Line>> {
    let source = read_source(path)?;
    let lines = if json_tokens {
        from_json_tokens(source.as_bytes())?
    } else {
        from_plain_text(&source)
    };
    log::info!("Loaded {} lines", lines.len());
    Ok(lines)
}
