// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal PDF 1.4 writer for the status table.
//!
//! ```text
//! obj 1  Catalog
//! obj 2  Pages  [page objs]
//! obj 3  Font Courier        (F1, body)
//! obj 4  Font Courier-Bold   (F2, title + header row)
//! obj 5+2i  Page i
//! obj 6+2i  Content stream i
//! xref, trailer
//! ```
//!
//! Courier is a standard 14 font (not embedded) with 0.6 em glyphs; columns
//! are laid out by character count. Text outside printable ASCII becomes `?`.

use std::fmt::Write as _;

use super::{ExportRow, HEADERS};

const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const MARGIN: u32 = 40;
const FONT_SIZE: u32 = 8;
const LINE_HEIGHT: u32 = 11;
const TITLE_SIZE: u32 = 14;
const ROWS_PER_PAGE: usize = 60;
const TITLE: &str = "API Keys Status";
const NOTE: &str = "Note: Values are masked for safety. Use `envdesk show --reveal` to view actual values.";

/// Upper bound for each column, in characters. Wider cells are cut with `~`.
const MAX_WIDTHS: [usize; 6] = [10, 12, 24, 8, 7, 30];

/// Render `rows` as a complete PDF document.
#[must_use]
pub fn render(rows: &[ExportRow]) -> Vec<u8> {
    let widths = column_widths(rows);
    let chunks: Vec<&[ExportRow]> = if rows.is_empty() {
        vec![rows]
    } else {
        rows.chunks(ROWS_PER_PAGE).collect()
    };
    let page_count = chunks.len();

    let streams: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| page_stream(chunk, &widths, i, page_count))
        .collect();

    let mut objects: Vec<String> = Vec::with_capacity(4 + 2 * page_count);
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids = (0..page_count)
        .map(|i| format!("{} 0 R", page_object_id(i)))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(format!(
        "<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"
    ));
    objects.push(font_object("Courier"));
    objects.push(font_object("Courier-Bold"));
    for (i, stream) in streams.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            page_object_id(i) + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    assemble(&objects)
}

const fn page_object_id(page: usize) -> usize {
    5 + 2 * page
}

fn font_object(base: &str) -> String {
    format!("<< /Type /Font /Subtype /Type1 /BaseFont /{base} /Encoding /WinAnsiEncoding >>")
}

/// Lay out numbered objects, then the cross-reference table and trailer.
fn assemble(objects: &[String]) -> Vec<u8> {
    let mut out: Vec<u8> = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());

    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = writeln!(tail, "{offset:010} 00000 n ");
    }
    let _ = writeln!(
        tail,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
        objects.len() + 1
    );
    out.extend_from_slice(tail.as_bytes());
    out
}

fn column_widths(rows: &[ExportRow]) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    for (width, max) in widths.iter_mut().zip(MAX_WIDTHS) {
        *width = (*width).min(max);
    }
    widths
}

fn format_row(cells: [&str; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let count = cell.chars().count();
            let fitted: String = if count > width {
                cell.chars().take(width - 1).chain(['~']).collect()
            } else {
                (*cell).to_string()
            };
            format!("{fitted:<width$}")
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn page_stream(rows: &[ExportRow], widths: &[usize; 6], page: usize, page_count: usize) -> String {
    let mut s = String::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    if page == 0 {
        let _ = writeln!(
            s,
            "BT /F2 {TITLE_SIZE} Tf {MARGIN} {y} Td ({}) Tj ET",
            escape(TITLE)
        );
        y -= 2 * LINE_HEIGHT + TITLE_SIZE;
    }

    let header = format_row(HEADERS, widths);
    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1));
    let _ = writeln!(
        s,
        "BT /F2 {FONT_SIZE} Tf {LINE_HEIGHT} TL {MARGIN} {y} Td ({}) Tj ET",
        escape(&header)
    );
    y -= LINE_HEIGHT;

    let _ = write!(s, "BT /F1 {FONT_SIZE} Tf {LINE_HEIGHT} TL {MARGIN} {y} Td");
    let _ = write!(s, " ({}) Tj", escape(&rule));
    for row in rows {
        let _ = write!(s, " T* ({}) Tj", escape(&format_row(row.cells(), widths)));
    }
    if page + 1 == page_count {
        let _ = write!(s, " T* T* ({}) Tj", escape(NOTE));
    }
    s.push_str(" ET\n");

    let _ = write!(
        s,
        "BT /F1 {FONT_SIZE} Tf {MARGIN} {} Td (Page {} of {page_count}) Tj ET",
        MARGIN / 2,
        page + 1
    );
    s
}

/// Escape a string for a PDF literal, replacing anything outside printable ASCII.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
