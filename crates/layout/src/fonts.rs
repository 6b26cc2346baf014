//! Metrics for the PDF standard base fonts the invoice uses.
//!
//! The renderer references these fonts by name with `WinAnsiEncoding`
//! without embedding them, so the layout engine measures text with the
//! published AFM advance widths (units of 1/1000 em) of every WinAnsi glyph.
//! Characters WinAnsi cannot encode are drawn and measured as `?`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Advance width of one character in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let bold = matches!(self, StandardFont::HelveticaBold);
        let (ascii, latin1) = if bold {
            (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_LATIN1_WIDTHS)
        } else {
            (&HELVETICA_WIDTHS, &HELVETICA_LATIN1_WIDTHS)
        };
        match win_ansi_code(c).unwrap_or(b'?') {
            code @ 32..=126 => ascii[(code - 32) as usize],
            code @ 0xA0..=0xFF => latin1[(code - 0xA0) as usize],
            code => WIN_ANSI_EXTRAS
                .iter()
                .find(|extra| extra.1 == code)
                .map_or(ascii[(b'?' - 32) as usize], |extra| if bold { extra.3 } else { extra.2 }),
        }
    }

    /// Width of `text` in points at `font_size`.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }
}

/// The WinAnsi byte for `c`, if the encoding has a glyph for it.
///
/// Printable ASCII and the Latin-1 block map to themselves. The 0x80 to 0x9F
/// block holds typographic glyphs (`€`, `–`, `’`, ...) rather than the C1
/// control characters, which have no WinAnsi code.
pub fn win_ansi_code(c: char) -> Option<u8> {
    match c as u32 {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => Some(code as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|extra| extra.0 == c)
            .map(|extra| extra.1),
    }
}

/// The character a WinAnsi byte stands for. Unassigned codes give `None`.
pub fn win_ansi_char(code: u8) -> Option<char> {
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as char),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|extra| extra.1 == code)
            .map(|extra| extra.0),
    }
}

/// Glyphs in the 0x80 to 0x9F block: character, code, Helvetica width,
/// Helvetica-Bold width.
#[rustfmt::skip]
const WIN_ANSI_EXTRAS: [(char, u8, u16, u16); 27] = [
    ('€', 0x80, 556, 556), ('‚', 0x82, 222, 278), ('ƒ', 0x83, 556, 556),
    ('„', 0x84, 333, 500), ('…', 0x85, 1000, 1000), ('†', 0x86, 556, 556),
    ('‡', 0x87, 556, 556), ('ˆ', 0x88, 333, 333), ('‰', 0x89, 1000, 1000),
    ('Š', 0x8A, 667, 667), ('‹', 0x8B, 333, 333), ('Œ', 0x8C, 1000, 1000),
    ('Ž', 0x8E, 611, 611), ('‘', 0x91, 222, 278), ('’', 0x92, 222, 278),
    ('“', 0x93, 333, 500), ('”', 0x94, 333, 500), ('•', 0x95, 350, 350),
    ('–', 0x96, 556, 556), ('—', 0x97, 1000, 1000), ('˜', 0x98, 333, 333),
    ('™', 0x99, 1000, 1000), ('š', 0x9A, 500, 556), ('›', 0x9B, 333, 333),
    ('œ', 0x9C, 944, 944), ('ž', 0x9E, 500, 500), ('Ÿ', 0x9F, 667, 667),
];

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

#[rustfmt::skip]
const HELVETICA_LATIN1_WIDTHS: [u16; 96] = [
    // nbsp ¡ ¢ £ ¤ ¥ ¦ § ¨ © ª « ¬ shy ® ¯
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // ° ± ² ³ ´ µ ¶ · ¸ ¹ º » ¼ ½ ¾ ¿
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // À-Å Æ Ç È-Ë Ì-Ï
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // Ð Ñ Ò-Ö × Ø Ù-Ü Ý Þ ß
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // à-å æ ç è-ë ì-ï
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // ð ñ ò-ö ÷ ø ù-ü ý þ ÿ
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1_WIDTHS: [u16; 96] = [
    // nbsp ¡ ¢ £ ¤ ¥ ¦ § ¨ © ª « ¬ shy ® ¯
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // ° ± ² ³ ´ µ ¶ · ¸ ¹ º » ¼ ½ ¾ ¿
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // À-Å Æ Ç È-Ë Ì-Ï
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // Ð Ñ Ò-Ö × Ø Ù-Ü Ý Þ ß
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // à-å æ ç è-ë ì-ï
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    // ð ñ ò-ö ÷ ø ù-ü ý þ ÿ
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];
