//! Token color resolution.
//!
//! Resolution is total: a token type's own entry, then the style's `Text`
//! entry, then whichever of black or white stands out against the
//! background. The background is always passed in explicitly.

use codeshot_config::{Color, StyleTable, TokenType};

/// Paint color for every character of a token of type `token_type`.
pub fn resolve(token_type: TokenType, style: &StyleTable, background: Color) -> Color {
    style
        .get(token_type)
        .or_else(|| style.text())
        .unwrap_or_else(|| contrast_color(background))
}

/// White on backgrounds nearest black, black on backgrounds nearest white.
///
/// Nearest is squared RGB distance against the palette `[black, white]`;
/// an exact tie goes to black, so the result is white.
pub fn contrast_color(background: Color) -> Color {
    if distance_sq(background, Color::BLACK) <= distance_sq(background, Color::WHITE) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

fn distance_sq(a: Color, b: Color) -> u32 {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .map(|(&x, y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const GRAY: Color = Color::new(200, 200, 200);

    #[test]
    fn test_type_entry_wins() {
        let style = StyleTable::new("t")
            .with(TokenType::Keyword, Some(RED))
            .with(TokenType::Text, Some(GRAY));
        assert_eq!(resolve(TokenType::Keyword, &style, Color::BLACK), RED);
    }

    #[test]
    fn test_text_entry_is_second_tier() {
        let style = StyleTable::new("t")
            .with(TokenType::Keyword, None)
            .with(TokenType::Text, Some(GRAY));
        assert_eq!(resolve(TokenType::Keyword, &style, Color::BLACK), GRAY);
        assert_eq!(resolve(TokenType::Comment, &style, Color::BLACK), GRAY);
    }

    #[test]
    fn test_contrast_is_last_tier() {
        let style = StyleTable::new("t").with(TokenType::Text, None);
        assert_eq!(resolve(TokenType::Keyword, &style, Color::BLACK), Color::WHITE);
        assert_eq!(resolve(TokenType::Keyword, &style, Color::WHITE), Color::BLACK);
    }

    #[test]
    fn test_zero_color_entry_is_not_absent() {
        let style = StyleTable::new("t")
            .with(TokenType::Keyword, Some(Color::BLACK))
            .with(TokenType::Text, Some(GRAY));
        assert_eq!(resolve(TokenType::Keyword, &style, Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_empty_table_resolves_every_type() {
        let style = StyleTable::default();
        for tt in TokenType::ALL {
            assert_eq!(resolve(*tt, &style, Color::new(30, 30, 30)), Color::WHITE);
            assert_eq!(resolve(*tt, &style, Color::new(240, 240, 230)), Color::BLACK);
        }
    }

    #[test]
    fn test_mid_gray_is_deterministic() {
        // 128 is one step closer to white than to black.
        let mid = Color::new(128, 128, 128);
        assert_eq!(contrast_color(mid), Color::BLACK);
        assert_eq!(contrast_color(mid), contrast_color(mid));
        assert_eq!(contrast_color(Color::new(127, 127, 127)), Color::WHITE);
    }

    #[test]
    fn test_boundary_follows_channel_sum() {
        // Black and white are equidistant only at a channel sum of 382.5.
        assert_eq!(contrast_color(Color::new(255, 127, 0)), Color::WHITE);
        assert_eq!(contrast_color(Color::new(255, 128, 0)), Color::BLACK);
        assert_eq!(contrast_color(RED), Color::WHITE);
    }
}
