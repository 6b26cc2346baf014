use invoicer_layout::fonts::win_ansi_code;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a WinAnsi-encoded base font. Characters without a
/// WinAnsi glyph are replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_code(c).unwrap_or(b'?')).collect()
}
