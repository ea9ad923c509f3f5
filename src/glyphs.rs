//! The sign catalog: one sprite card per glyph id.
//!
//! Sign ids are the lowercase letters a-z plus the "sch" ligature and the
//! "blank" card shown at the end of every word. Sprites are banner-font
//! cells; the decomposer only needs the membership test, the renderer and
//! the animation use the cell rows and their dimensions.

use std::collections::HashMap;

pub const SPRITE_ROWS: usize = 5;

#[derive(Clone, Debug)]
pub struct Sprite {
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

pub struct GlyphSet {
    sprites: HashMap<String, Sprite>,
}

impl GlyphSet {
    /// The built-in catalog covering the German finger alphabet.
    pub fn builtin() -> Self {
        let mut sprites = HashMap::new();
        for (ch, rows) in FONT {
            let sprite = Sprite {
                rows: rows.iter().map(|r| r.to_string()).collect(),
            };
            sprites.insert(ch.to_string(), sprite);
        }

        // "sch" is a single sign, drawn as one wide card
        let sch_rows = (0..SPRITE_ROWS)
            .map(|i| {
                ["s", "c", "h"]
                    .iter()
                    .map(|id| sprites[*id].rows[i].as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        sprites.insert("sch".to_string(), Sprite { rows: sch_rows });

        sprites.insert(
            "blank".to_string(),
            Sprite {
                rows: vec!["     ".to_string(); SPRITE_ROWS],
            },
        );

        Self { sprites }
    }

    pub fn has(&self, id: &str) -> bool {
        self.sprites.contains_key(id)
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.has(ch.to_string().as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Sprite> {
        self.sprites.get(id)
    }
}

#[rustfmt::skip]
const FONT: [(char, [&str; SPRITE_ROWS]); 26] = [
    ('a', [" ### ", "#   #", "#####", "#   #", "#   #"]),
    ('b', ["#### ", "#   #", "#### ", "#   #", "#### "]),
    ('c', [" ####", "#    ", "#    ", "#    ", " ####"]),
    ('d', ["#### ", "#   #", "#   #", "#   #", "#### "]),
    ('e', ["#####", "#    ", "#### ", "#    ", "#####"]),
    ('f', ["#####", "#    ", "#### ", "#    ", "#    "]),
    ('g', [" ####", "#    ", "#  ##", "#   #", " ### "]),
    ('h', ["#   #", "#   #", "#####", "#   #", "#   #"]),
    ('i', ["#####", "  #  ", "  #  ", "  #  ", "#####"]),
    ('j', ["#####", "   # ", "   # ", "#  # ", " ##  "]),
    ('k', ["#  # ", "# #  ", "##   ", "# #  ", "#  # "]),
    ('l', ["#    ", "#    ", "#    ", "#    ", "#####"]),
    ('m', ["#   #", "## ##", "# # #", "#   #", "#   #"]),
    ('n', ["#   #", "##  #", "# # #", "#  ##", "#   #"]),
    ('o', [" ### ", "#   #", "#   #", "#   #", " ### "]),
    ('p', ["#### ", "#   #", "#### ", "#    ", "#    "]),
    ('q', [" ### ", "#   #", "# # #", "#  # ", " ## #"]),
    ('r', ["#### ", "#   #", "#### ", "# #  ", "#  # "]),
    ('s', [" ####", "#    ", " ### ", "    #", "#### "]),
    ('t', ["#####", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('u', ["#   #", "#   #", "#   #", "#   #", " ### "]),
    ('v', ["#   #", "#   #", "#   #", " # # ", "  #  "]),
    ('w', ["#   #", "#   #", "# # #", "## ##", "#   #"]),
    ('x', ["#   #", " # # ", "  #  ", " # # ", "#   #"]),
    ('y', ["#   #", " # # ", "  #  ", "  #  ", "  #  "]),
    ('z', ["#####", "   # ", "  #  ", " #   ", "#####"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_the_finger_alphabet() {
        let glyphs = GlyphSet::builtin();
        for ch in 'a'..='z' {
            assert!(glyphs.has_char(ch), "missing sign for '{ch}'");
        }
        assert!(glyphs.has("sch"));
        assert!(glyphs.has("blank"));
    }

    #[test]
    fn builtin_has_no_sign_for_punctuation_or_digits() {
        let glyphs = GlyphSet::builtin();
        assert!(!glyphs.has_char('-'));
        assert!(!glyphs.has_char(' '));
        assert!(!glyphs.has_char('3'));
        assert!(!glyphs.has_char('ä'));
    }

    #[test]
    fn sprites_are_uniform_cards() {
        let glyphs = GlyphSet::builtin();
        for ch in 'a'..='z' {
            let sprite = glyphs.get(&ch.to_string()).unwrap();
            assert_eq!(sprite.height(), SPRITE_ROWS);
            assert_eq!(sprite.width(), 5, "sign '{ch}' is not 5 cells wide");
        }
    }

    #[test]
    fn sch_card_is_wider_than_a_single_letter() {
        let glyphs = GlyphSet::builtin();
        let s = glyphs.get("s").unwrap().width();
        let sch = glyphs.get("sch").unwrap();
        assert_eq!(sch.height(), SPRITE_ROWS);
        assert!(sch.width() > s);
    }
}
