//! Helvetica advance widths and line wrapping

/// Advance widths of Helvetica for ASCII 32..=126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

// Used for anything outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in points at `font_size`
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Split `text` into lines no wider than `max_width` points.
///
/// Hard line breaks are kept (an empty paragraph becomes an empty line).
/// Runs of spaces and leading indentation are kept as typed; spaces are
/// only dropped where a line wraps. A word wider than the line is broken
/// between characters.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut started = false;
        for (gap, word) in spaced_words(paragraph) {
            let candidate = if !started {
                format!("{}{}", " ".repeat(gap), word)
            } else if current.is_empty() {
                word.to_string()
            } else {
                format!("{}{}{}", current, " ".repeat(gap), word)
            };
            started = true;

            if text_width(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(word, font_size) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, font_size, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Words of a line paired with the number of spaces before each
fn spaced_words(line: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut gap = 0;

    for piece in line.split(' ') {
        if piece.is_empty() {
            gap += 1;
        } else {
            words.push((gap, piece));
            gap = 1;
        }
    }
    words
}

fn break_word(word: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, font_size) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    pieces.push(piece);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('A'), 667);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
        assert_eq!(char_width('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let w12 = text_width("Hello", 12.0);
        let w24 = text_width("Hello", 24.0);
        assert!((w24 - 2.0 * w12).abs() < 0.001);
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("city lights", 12.0, 500.0), vec!["city lights"]);
    }

    #[test]
    fn test_hard_breaks_and_blank_lines() {
        assert_eq!(
            wrap_text("one\n\ntwo", 12.0, 500.0),
            vec!["one".to_string(), String::new(), "two".to_string()]
        );
    }

    #[test]
    fn test_long_paragraph_wraps_within_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
        let lines = wrap_text(&text, 12.0, 500.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 12.0) <= 500.0, "line too wide: {}", line);
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim_end());
    }

    #[test]
    fn test_overlong_word_is_split() {
        let word = "a".repeat(200);
        let lines = wrap_text(&word, 12.0, 100.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width(line, 12.0) <= 100.0);
        }
    }

    #[test]
    fn test_indentation_and_space_runs_kept() {
        assert_eq!(
            wrap_text("    (oh oh)  yeah", 12.0, 500.0),
            vec!["    (oh oh)  yeah"]
        );
        assert_eq!(wrap_text("a\n  b", 12.0, 500.0), vec!["a", "  b"]);
    }

    #[test]
    fn test_spaces_dropped_at_wrap_point() {
        // "aaa" is about 20pt wide at 12pt
        assert_eq!(wrap_text("aaa   bbb", 12.0, 25.0), vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_text("", 12.0, 500.0), vec![String::new()]);
    }
}
