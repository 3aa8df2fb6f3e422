use rand::seq::SliceRandom;
use rand::Rng;

use super::board::PAIRS;

/// Emoji sets a board can be dealt from. One is picked per game so the
/// symbols change from round to round.
pub const THEMES: [[&str; PAIRS]; 5] = [
    ["🐱", "🐶", "🐰", "🐻", "🐼", "🦊", "🐯", "🦁"],
    ["🤫", "🧏‍♂️", "🗣️", "💀", "🦟", "🦗", "🔥", "🙏"],
    ["😈", "🤡", "😩", "😍", "🥺", "🫥", "🤬", "😭"],
    ["🕛", "🕧", "🕐", "🕜", "🕑", "🕝", "🕒", "🕘"],
    ["💅", "✨", "🎀", "💝", "💕", "👁️", "👄", "🙄"],
];

/// Picks one theme at random.
pub fn random_theme<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    THEMES
        .choose(rng)
        .unwrap_or(&THEMES[0])
        .iter()
        .map(|symbol| symbol.to_string())
        .collect()
}
