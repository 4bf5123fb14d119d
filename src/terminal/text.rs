//! Plain-text helpers for laying out review cards in fixed-width cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` terminal columns.
///
/// Words wider than `width` are split. A zero width yields no lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();

        // Hard-split words that cannot fit on any line.
        while word.width() > width {
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let (head, rest) = split_at_width(&word, width);
            lines.push(head);
            word = rest;
        }

        let word_width = word.width();
        if word.is_empty() {
            continue;
        }

        let needed = if line_width == 0 {
            word_width
        } else {
            line_width + 1 + word_width
        };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(&word);
        line_width += word_width;
    }

    if line_width > 0 {
        lines.push(line);
    }

    lines
}

/// Split `word` after at most `width` columns.
///
/// The head always holds at least one char so a glyph wider than `width`
/// still makes progress.
fn split_at_width(word: &str, width: usize) -> (String, String) {
    let mut used = 0;
    let mut cut = word.len();
    for (i, ch) in word.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && i > 0 {
            cut = i;
            break;
        }
        used += w;
    }
    (word[..cut].to_string(), word[cut..].to_string())
}

/// Take `take` columns of `line` starting at column `skip`.
///
/// A wide glyph cut by either edge is replaced by spaces for its visible
/// columns.
pub fn clip_columns(line: &str, skip: usize, take: usize) -> String {
    let end = skip + take;
    let mut out = String::new();
    let mut col = 0;

    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        let next = col + w;
        if col < skip && next <= skip {
            col = next;
            continue;
        }
        if col >= end && w > 0 {
            break;
        }
        if col < skip || next > end {
            let visible = next.min(end) - col.max(skip);
            out.extend(std::iter::repeat(' ').take(visible));
        } else {
            out.push(ch);
        }
        col = next;
    }

    out
}

/// Left-pad `line` so it is centered in `width` columns.
pub fn center(line: &str, width: usize) -> String {
    let len = line.width();
    if len >= width {
        return line.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), line)
}
