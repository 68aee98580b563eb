//! Color name resolution.

use chroma::{Rgb, hex_to_rgb};

use crate::dictionary::{ColorEntry, NameIndex};

/// Find the name of the dictionary color closest to `target_hex`.
///
/// An exact hit in `index` is returned without any distance computation.
/// Otherwise every entry is compared by Euclidean RGB distance and the
/// nearest wins; on equal distances the entry seen first wins. Returns an
/// empty string only when `entries` is empty.
pub fn find_closest_color(target_hex: &str, index: &NameIndex, entries: &[ColorEntry]) -> String {
    if let Some(name) = index.get(target_hex) {
        log::trace!("exact name match for {target_hex}: {name}");
        return name.to_string();
    }

    let target = hex_to_rgb(target_hex);
    let mut closest = "";
    let mut smallest_distance = f64::INFINITY;

    for entry in entries {
        let distance = rgb_distance(target, hex_to_rgb(&entry.hex));
        if distance < smallest_distance {
            smallest_distance = distance;
            closest = &entry.name;
        }
    }

    log::trace!("nearest name for {target_hex}: {closest:?} at distance {smallest_distance}");
    closest.to_string()
}

/// Euclidean distance between two colors in RGB space.
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> Vec<ColorEntry> {
        vec![
            ColorEntry::new("Red", "#FF0000"),
            ColorEntry::new("Green", "#00FF00"),
            ColorEntry::new("Blue", "#0000FF"),
        ]
    }

    #[test]
    fn test_exact_match() {
        let entries = primaries();
        let index = NameIndex::from_entries(&entries);
        assert_eq!(find_closest_color("#FF0000", &index, &entries), "Red");
    }

    #[test]
    fn test_exact_match_skips_the_scan() {
        // The index alone answers; the entry list is never consulted.
        let index = NameIndex::from_entries(&[ColorEntry::new("Red", "#FF0000")]);
        assert_eq!(find_closest_color("#ff0000", &index, &[]), "Red");
    }

    #[test]
    fn test_nearest_neighbor() {
        let entries = primaries();
        let index = NameIndex::from_entries(&entries);
        assert_eq!(find_closest_color("#FF1010", &index, &entries), "Red");
        assert_eq!(find_closest_color("#10E010", &index, &entries), "Green");
    }

    #[test]
    fn test_tie_keeps_first_entry() {
        // #800000 and #000080 are equally far from black.
        let entries = vec![
            ColorEntry::new("Maroon", "#800000"),
            ColorEntry::new("Navy", "#000080"),
        ];
        let index = NameIndex::default();
        assert_eq!(find_closest_color("#000000", &index, &entries), "Maroon");

        let reversed: Vec<_> = entries.into_iter().rev().collect();
        assert_eq!(find_closest_color("#000000", &index, &reversed), "Navy");
    }

    #[test]
    fn test_empty_dictionary_gives_empty_name() {
        assert_eq!(find_closest_color("#FF0000", &NameIndex::default(), &[]), "");
    }

    #[test]
    fn test_malformed_target_is_treated_as_black() {
        let entries = vec![
            ColorEntry::new("White", "#FFFFFF"),
            ColorEntry::new("Black", "#000000"),
        ];
        let index = NameIndex::from_entries(&entries);
        assert_eq!(find_closest_color("nope", &index, &entries), "Black");
    }

    #[test]
    fn test_padded_target_misses_the_index() {
        // " #FF0000" parses as black, so the name must come from black too
        let entries = vec![
            ColorEntry::new("Black", "#000000"),
            ColorEntry::new("Red", "#FF0000"),
        ];
        let index = NameIndex::from_entries(&entries);
        assert_eq!(index.get(" #FF0000"), None);
        assert_eq!(find_closest_color(" #FF0000", &index, &entries), "Black");
        assert_eq!(find_closest_color("#FF0000 ", &index, &entries), "Black");
    }

    #[test]
    fn test_rgb_distance() {
        assert_eq!(rgb_distance(Rgb::BLACK, Rgb::BLACK), 0.0);
        assert_eq!(rgb_distance(Rgb::new(3, 0, 0), Rgb::new(0, 4, 0)), 5.0);
    }
}
