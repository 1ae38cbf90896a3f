//! PDF export of the three result sections.
//!
//! Layout works in millimetres measured from the top-left corner of an A4 page and
//! is computed separately from rendering so it can be inspected without decoding a
//! PDF. Section offsets are fixed: a long body is not measured and may run into
//! the next heading.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{errors::AppResult, models::domain::GenerationResult};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_LEFT_MM: f32 = 10.0;
pub const TOP_START_MM: f32 = 10.0;
pub const BODY_WIDTH_MM: f32 = 180.0;
pub const HEADING_FONT_SIZE: f32 = 14.0;
pub const BODY_FONT_SIZE: f32 = 11.0;
pub const HEADING_TO_BODY_MM: f32 = 10.0;
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Heading text and the fixed advance applied after its body.
const SECTIONS: [(&str, f32); 3] = [
    ("Summary", 40.0),
    ("MCQs", 50.0),
    ("Fill in the Blanks", 0.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    pub text: String,
    pub font_size: f32,
    pub x_mm: f32,
    /// Baseline distance from the top edge.
    pub y_mm: f32,
}

// Helvetica advance widths (1/1000 em) for printable ASCII, starting at U+0020.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];
const DEFAULT_GLYPH_WIDTH: u16 = 556;

fn glyph_width(c: char) -> u16 {
    let code = c as u32;
    if (0x20..0x7f).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize]
    } else {
        DEFAULT_GLYPH_WIDTH
    }
}

pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c) as u32).sum();
    units as f32 / 1000.0 * font_size * PT_TO_MM
}

/// Greedy word wrap. Newlines start a new paragraph and keep its leading spaces as
/// indentation; a word wider than the line is broken between characters.
pub fn wrap_text(text: &str, font_size: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let words = paragraph.trim_start_matches(' ');
        let indent = &paragraph[..paragraph.len() - words.len()];

        let mut line = indent.to_string();
        let mut has_word = false;

        for word in words.split(' ') {
            let candidate = if has_word {
                format!("{} {}", line, word)
            } else {
                format!("{}{}", line, word)
            };

            if text_width_mm(&candidate, font_size) <= max_width_mm {
                line = candidate;
                has_word = true;
                continue;
            }

            if has_word {
                lines.push(std::mem::take(&mut line));
            }

            for c in word.chars() {
                line.push(c);
                if text_width_mm(&line, font_size) > max_width_mm && line.chars().count() > 1 {
                    line.pop();
                    lines.push(std::mem::take(&mut line));
                    line.push(c);
                }
            }
            has_word = !line.is_empty();
        }

        lines.push(line);
    }

    lines
}

pub fn layout_sections(summary: &str, mcqs: &str, fill_blanks: &str) -> Vec<TextPlacement> {
    let line_height_mm = BODY_FONT_SIZE * LINE_HEIGHT_FACTOR * PT_TO_MM;
    let mut placements = Vec::new();
    let mut y = TOP_START_MM;

    for ((heading, advance), body) in SECTIONS.iter().zip([summary, mcqs, fill_blanks]) {
        placements.push(TextPlacement {
            text: heading.to_string(),
            font_size: HEADING_FONT_SIZE,
            x_mm: MARGIN_LEFT_MM,
            y_mm: y,
        });
        y += HEADING_TO_BODY_MM;

        for (index, line) in wrap_text(body, BODY_FONT_SIZE, BODY_WIDTH_MM)
            .into_iter()
            .enumerate()
        {
            if line.trim().is_empty() {
                continue;
            }
            placements.push(TextPlacement {
                text: line,
                font_size: BODY_FONT_SIZE,
                x_mm: MARGIN_LEFT_MM,
                y_mm: y + index as f32 * line_height_mm,
            });
        }

        y += advance;
    }

    placements
}

pub struct ExportService {
    file_name: String,
}

impl ExportService {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Renders whatever the result currently holds, placeholders and errors included.
    pub fn render(&self, result: &GenerationResult) -> AppResult<Vec<u8>> {
        let placements = layout_sections(&result.summary, &result.mcqs, &result.fill_blanks);

        let (doc, page, layer) = PdfDocument::new(
            "Quiz Notes",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let current_layer = doc.get_page(page).get_layer(layer);

        for placement in placements {
            current_layer.use_text(
                placement.text,
                placement.font_size,
                Mm(placement.x_mm),
                Mm(PAGE_HEIGHT_MM - placement.y_mm),
                &font,
            );
        }

        let bytes = doc.save_to_bytes()?;
        log::info!("Rendered {} ({} bytes)", self.file_name, bytes.len());
        Ok(bytes)
    }
}
