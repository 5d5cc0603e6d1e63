// Icon glyphs
// Maps symbol-style icon identifiers to single-cell glyphs

/// Glyph for an icon identifier
/// Unknown identifiers are displayed as-is
pub fn glyph_for(identifier: &str) -> &str {
    match identifier {
        "star" => "☆",
        "star.fill" => "★",
        "clock" => "◷",
        "clock.fill" => "◴",
        "person" => "☺",
        "person.fill" => "☻",
        "gear" | "gearshape" => "⚙",
        "house" => "⌂",
        "house.fill" => "⌂",
        "magnifyingglass" => "⌕",
        "bell" => "♪",
        "bell.fill" => "♫",
        "heart" => "♡",
        "heart.fill" => "♥",
        "phone" => "☏",
        "phone.fill" => "☎",
        "message" => "✉",
        "message.fill" => "✉",
        "folder" => "▭",
        "folder.fill" => "▬",
        "trash" => "⌫",
        "trash.fill" => "⌫",
        other => other,
    }
}
