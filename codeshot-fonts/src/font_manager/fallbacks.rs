//! Font family lists for primary selection and glyph fallback.

/// Monospace families tried in order when no primary font is requested.
pub const PREFERRED_MONOSPACE: &[&str] = &[
    "Hack",
    "JetBrains Mono",
    "Fira Code",
    "Source Code Pro",
    "DejaVu Sans Mono",
    "Menlo",
    "Monaco",
    "Consolas",
    "Liberation Mono",
    "Courier New",
];

/// Fallback font families in priority order.
///
/// Searched when the primary font has no glyph for a character:
/// 1. Nerd Font icon support (programming symbols, powerline)
/// 2. CJK support
/// 3. Symbol and emoji fonts
/// 4. General Unicode coverage
pub const FALLBACK_FAMILIES: &[&str] = &[
    // Nerd Fonts
    "Symbols Nerd Font",
    "JetBrainsMono Nerd Font",
    "Hack Nerd Font",
    // CJK fonts
    "Noto Sans Mono CJK JP",
    "Noto Sans CJK JP",
    "Noto Sans CJK SC",
    "Microsoft YaHei",
    "MS Gothic",
    // Symbol fonts
    "Apple Symbols",
    "Segoe UI Symbol",
    "Noto Sans Symbols",
    "Noto Sans Symbols 2",
    "DejaVu Sans",
    "Symbola",
    // Color emoji fonts
    "Noto Color Emoji",
    "Apple Color Emoji",
    "Segoe UI Emoji",
    // General fallbacks
    "Arial Unicode MS",
    "Liberation Sans",
];
