// PlantSafe - core/image.rs
//
// Image stem derivation: maps a plant's display name to the file stem its
// image is stored under. Pure string normalisation; the filesystem probe
// lives in platform::fs.

/// Derive the image file stem for a plant name.
///
/// Steps: keep the text before the first `(`, trim it, lowercase, drop every
/// character that is not an ASCII letter, digit or space, then replace each
/// space with an underscore.
///
/// "Lily (Easter)" -> "lily", "Hen & Chicks" -> "hen__chicks".
pub fn image_stem(name: &str) -> String {
    let base = name.split('(').next().unwrap_or_default().trim();

    base.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}
