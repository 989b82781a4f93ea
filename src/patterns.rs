//! Compiled patterns for line classification and inline stripping.
//!
//! Compiled once on first use through `LazyLock`.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Line patterns ===

/// Matches a numbered list marker such as `12. `
pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Matches the `- ` or `* ` bullet marker plus the whitespace after it
pub static BULLET_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+").unwrap());

// === Inline patterns ===

/// Matches **bold**
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Matches *italic*
pub static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Matches `code`
pub static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Matches [text](url)
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Decorative markers dropped from paragraph text.
pub const PICTOGRAPHS: &[char] = &[
    '\u{2705}',  // ✅
    '\u{274C}',  // ❌
    '\u{26A0}',  // ⚠
    '\u{FE0F}',  // variation selector left behind by ⚠️
    '\u{2B50}',  // ⭐
    '\u{2728}',  // ✨
    '\u{1F3AF}', // 🎯
    '\u{1F4CA}', // 📊
    '\u{1F4C8}', // 📈
    '\u{1F680}', // 🚀
    '\u{1F4A1}', // 💡
    '\u{1F4DD}', // 📝
    '\u{1F527}', // 🔧
    '\u{1F3C6}', // 🏆
    '\u{1F50D}', // 🔍
    '\u{1F4CC}', // 📌
    '\u{1F525}', // 🔥
    '\u{1F4BC}', // 💼
    '\u{1F393}', // 🎓
];

/// Reduce a line to plain text: bold, italic, code, links, then pictographs.
/// Each pass runs over the output of the previous one.
pub fn strip_inline(line: &str) -> String {
    let text = BOLD_RE.replace_all(line, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = CODE_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    text.replace(PICTOGRAPHS, "")
}
