use invoicer_layout::fonts::win_ansi_char;
use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Decodes a WinAnsi string operand back to text.
fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| win_ansi_char(b).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Operations of the page's content stream.
pub fn page_content(doc: &LopdfDocument, page_number: u32) -> Content {
    let page_id = doc.get_pages()[&page_number];
    Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap()
}

/// Each `Tj` string on the page together with the PDF y of its baseline.
pub fn shown_strings(doc: &LopdfDocument, page_number: u32) -> Vec<(f32, String)> {
    let mut y = 0.0;
    let mut out = Vec::new();
    for op in page_content(doc, page_number).operations {
        match op.operator.as_str() {
            "Td" => y = op.operands[1].as_float().unwrap(),
            "Tj" => {
                if let Ok(bytes) = op.operands[0].as_str() {
                    out.push((y, decode_win_ansi(bytes)));
                }
            }
            _ => {}
        }
    }
    out
}

/// Follows a reference if `object` is one, then reads it as a dictionary.
fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

/// Base font names reachable from each page's `Resources` -> `Font` dictionary.
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut names = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Some(fonts) = doc
            .get_dictionary(*page_id)
            .ok()
            .and_then(|page| page.get(b"Resources").ok())
            .and_then(|resources| resolve_dict(doc, resources))
            .and_then(|resources| resources.get(b"Font").ok())
            .and_then(|fonts| resolve_dict(doc, fonts))
        else {
            continue;
        };
        for (_, font) in fonts.iter() {
            if let Some(base_font) = resolve_dict(doc, font)
                .and_then(|font| font.get(b"BaseFont").ok())
                .and_then(|name| name.as_name().ok())
            {
                names.insert(String::from_utf8_lossy(base_font).to_string());
            }
        }
    }
    names.into_iter().collect()
}

/// Dictionaries of every image XObject in the document.
pub fn image_dicts(doc: &LopdfDocument) -> Vec<&Dictionary> {
    doc.objects
        .values()
        .filter_map(|o| match o {
            Object::Stream(s) => Some(&s.dict),
            _ => None,
        })
        .filter(|d| d.get(b"Subtype").and_then(Object::as_name).ok() == Some(b"Image".as_slice()))
        .collect()
}

/// Width and height from the first image placement (`cm`) on the page.
pub fn image_placement(doc: &LopdfDocument, page_number: u32) -> Option<(f32, f32)> {
    page_content(doc, page_number)
        .operations
        .into_iter()
        .find(|op| op.operator == "cm")
        .map(|op| {
            (
                op.operands[0].as_float().unwrap(),
                op.operands[3].as_float().unwrap(),
            )
        })
}
