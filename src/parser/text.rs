use std::sync::LazyLock;

use regex::Regex;

pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Decorative glyphs the catalog puts in front of descriptions (platform and
/// language badges, category icons). Variation selectors and the keycap
/// combiner are included so multi-codepoint emoji strip cleanly.
const DECORATIVE_GLYPHS: &str = "📇🏠🍎🪟🐧☁️🌐🐍🚀🏎️⚡️🖱️🎖️#️⃣🦀☕🔥⛅️💬🛠️🔒🛡️🤖🔮🌱📊🦮🎬📹🔍📚💻🖥️🗄️💰🎮🧠🗺️🎯🏃🌎🚆🔄💾🎨🏕️🏛️📜⚙️📱💼🗂️🎵🎸🎹🎤🎧🎼🎭🎪🖼️🎲🃏🀄🎰📕📒📓📔📖📗📘📙📝📌📍📎🖇️📏📐✂️🗃️🗑️🖌️🖍️✏️✒️🖋️🖊️📁📂📅📆🗒️🗓️📈📉📋₿🦽🎖";

// Anchored: only the leading run is stripped, glyphs later in the text stay.
static LEADING_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[\s{}-]+", regex::escape(DECORATIVE_GLYPHS))).unwrap()
});
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean the text that follows a project link.
pub fn clean_description(raw: &str) -> String {
    let stripped = LEADING_NOISE_RE.replace(raw, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Keep at most `max` chars, never splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
