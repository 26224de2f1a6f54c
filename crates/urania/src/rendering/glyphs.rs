/// Sign names and glyphs, Aries first
pub const SIGNS: &[(&str, &str)] = &[
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

const PLANET_GLYPHS: &[(&str, &str)] = &[
    ("Sun", "☉"),
    ("Moon", "☽"),
    ("Mercury", "☿"),
    ("Venus", "♀"),
    ("Mars", "♂"),
    ("Jupiter", "♃"),
    ("Saturn", "♄"),
    ("Uranus", "♅"),
    ("Neptune", "♆"),
    ("Pluto", "♇"),
    ("Chiron", "⚷"),
    ("Lilith", "⚸"),
    ("True N.Node", "☊"),
    ("True S.Node", "☋"),
    ("Mean N.Node", "☊"),
    ("Mean S.Node", "☋"),
];

const ASPECT_GLYPHS: &[(&str, &str)] = &[
    ("conjunction", "☌"),
    ("opposition", "☍"),
    ("trine", "△"),
    ("square", "□"),
    ("sextile", "⚹"),
    ("quincunx", "⚻"),
    ("semisextile", "⚺"),
];

/// Glyph for a sign index; wraps past Pisces
pub fn sign_glyph(index: usize) -> &'static str {
    SIGNS[index % SIGNS.len()].1
}

pub fn sign_name(index: usize) -> &'static str {
    SIGNS[index % SIGNS.len()].0
}

/// Glyph for a planet label, or its first two characters when unknown
pub fn planet_glyph(label: &str) -> String {
    PLANET_GLYPHS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, glyph)| glyph.to_string())
        .unwrap_or_else(|| label.chars().take(2).collect())
}

/// Glyph for an aspect name, matched case-insensitively
pub fn aspect_glyph(name: &str) -> Option<&'static str> {
    ASPECT_GLYPHS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, glyph)| *glyph)
}
