//! Escaping for Telegram's MarkdownV2 parse mode.

/// Escapes every character MarkdownV2 treats as markup so it renders literally.
///
/// # Example
/// ```
/// use steve_bot::utils::markdown::escape_markdown;
///
/// let escaped = escape_markdown("Moves used: 8 (new best!)");
/// assert_eq!(escaped, "Moves used: 8 \\(new best\\!\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    text.replace('_', "\\_")
        .replace('*', "\\*")
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace('~', "\\~")
        .replace('`', "\\`")
        .replace('>', "\\>")
        .replace('#', "\\#")
        .replace('+', "\\+")
        .replace('-', "\\-")
        .replace('=', "\\=")
        .replace('|', "\\|")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('.', "\\.")
        .replace('!', "\\!")
}
