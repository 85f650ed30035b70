// src/extract/positional.rs
//! Positional extraction: walk each page's content stream with `lopdf`,
//! collect text fragments with their layout coordinates, and reconstruct
//! reading order by sorting top-to-bottom then left-to-right.

use lopdf::content::Content;
use lopdf::{Document, Object};

/// Fragments whose vertical positions differ by less than this many layout
/// units are treated as the same line.
const LINE_TOLERANCE: f32 = 5.0;

/// A positioned run of text from a content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

pub fn extract(bytes: &[u8]) -> anyhow::Result<String> {
    let doc = Document::load_mem(bytes)?;
    let mut pages_text = Vec::new();

    for (page_num, page_id) in doc.get_pages() {
        let content_data = match doc.get_page_content(page_id) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(page = page_num, error = %e, "skipping unreadable page");
                continue;
            }
        };

        let fragments = match Content::decode(&content_data) {
            Ok(content) => collect_fragments(&content),
            Err(e) => {
                tracing::debug!(page = page_num, error = %e, "skipping undecodable page");
                continue;
            }
        };

        let page_text = assemble_fragments(fragments);
        if !page_text.trim().is_empty() {
            pages_text.push(page_text.trim().to_string());
        }
    }

    Ok(pages_text.join("\n\n"))
}

/// Walk the content-stream operations tracking the current text position.
///
/// Only the translation components of the text matrices are tracked; that
/// is enough to order fragments for left-to-right documents.
fn collect_fragments(content: &Content) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    // Approximate line leading for T* and ' when none was seen.
    let mut leading = 12.0f32;

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                x = 0.0;
                y = 0.0;
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = (number(op.operands.first()), number(op.operands.get(1)))
                {
                    x += tx;
                    y += ty;
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (number(op.operands.first()), number(op.operands.get(1)))
                {
                    x += tx;
                    y += ty;
                    leading = -ty;
                }
            }
            "TL" => {
                if let Some(l) = number(op.operands.first()) {
                    leading = l;
                }
            }
            "Tm" => {
                if let (Some(e), Some(f)) = (number(op.operands.get(4)), number(op.operands.get(5)))
                {
                    x = e;
                    y = f;
                }
            }
            "T*" => {
                y -= leading;
            }
            "Tj" => {
                if let Some(text) = operand_text(op.operands.first()) {
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            "'" | "\"" => {
                y -= leading;
                // The show-string is the last operand for both forms.
                if let Some(text) = operand_text(op.operands.last()) {
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    let mut run = String::new();
                    for item in items {
                        if let Object::String(bytes, _) = item {
                            run.push_str(&decode_pdf_string(bytes));
                        }
                    }
                    push_fragment(&mut fragments, x, y, run);
                }
            }
            _ => {}
        }
    }

    fragments
}

fn push_fragment(fragments: &mut Vec<Fragment>, x: f32, y: f32, text: String) {
    if !text.trim().is_empty() {
        fragments.push(Fragment { x, y, text });
    }
}

fn number(operand: Option<&Object>) -> Option<f32> {
    match operand {
        Some(Object::Integer(i)) => Some(*i as f32),
        Some(Object::Real(r)) => Some(*r),
        _ => None,
    }
}

fn operand_text(operand: Option<&Object>) -> Option<String> {
    match operand {
        Some(Object::String(bytes, _)) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// Best-effort string decode: keep printable ASCII, map everything else to
/// spaces. Embedded-font glyph indices are unrecoverable here; the
/// structured strategy handles those documents.
fn decode_pdf_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                ' '
            }
        })
        .collect()
}

/// Sort fragments into reading order and join them into lines.
pub fn assemble_fragments(mut fragments: Vec<Fragment>) -> String {
    fragments.sort_by(|a, b| {
        if (a.y - b.y).abs() < LINE_TOLERANCE {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal)
        }
    });

    let mut out = String::new();
    let mut last_y: Option<f32> = None;

    for fragment in &fragments {
        if let Some(prev) = last_y {
            if (prev - fragment.y).abs() >= LINE_TOLERANCE {
                out.push('\n');
            } else if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
        }
        out.push_str(fragment.text.trim());
        last_y = Some(fragment.y);
    }

    out
}
