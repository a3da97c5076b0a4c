//! Caret-aware splicing of LaTeX snippets into the editor buffer.
//!
//! Offsets are byte offsets into the buffer. Callers are responsible for
//! handing in offsets that sit on char boundaries; [`clamp_to_char_boundary`]
//! exists for re-clamping a remembered caret after the buffer changed under it.

/// Result of splicing a snippet into a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub caret: usize,
}

/// Inserts `snippet` into `buffer` over the selection `[sel_start, sel_end)`.
///
/// Plain inserts replace the selection and leave the caret after the snippet.
/// Wrapping inserts (formatting snippets carrying a `{}` placeholder) wrap the
/// selection into the first `{}`; with an empty selection the caret lands
/// inside the braces instead. Templates with several `{}` pairs only ever
/// target the first one.
pub fn insert_snippet(
    buffer: &str,
    sel_start: usize,
    sel_end: usize,
    snippet: &str,
    wrapping: bool,
) -> Insertion {
    let sel_start = clamp_to_char_boundary(buffer, sel_start);
    let sel_end = clamp_to_char_boundary(buffer, sel_end.max(sel_start));
    let selected = &buffer[sel_start..sel_end];

    let (inserted, caret_offset) = if wrapping {
        match (selected.is_empty(), snippet.find("{}")) {
            (false, Some(placeholder)) => {
                let mut wrapped = String::with_capacity(snippet.len() + selected.len());
                wrapped.push_str(&snippet[..placeholder]);
                wrapped.push('{');
                wrapped.push_str(selected);
                wrapped.push('}');
                wrapped.push_str(&snippet[placeholder + 2..]);
                let caret = wrapped.len();
                (wrapped, caret)
            }
            (true, Some(placeholder)) => (snippet.to_string(), placeholder + 1),
            // No placeholder to target: degrade to the plain-insert caret.
            (_, None) => (snippet.to_string(), snippet.len()),
        }
    } else {
        (snippet.to_string(), snippet.len())
    };

    let mut text = String::with_capacity(buffer.len() - selected.len() + inserted.len());
    text.push_str(&buffer[..sel_start]);
    text.push_str(&inserted);
    text.push_str(&buffer[sel_end..]);

    Insertion {
        text,
        caret: sel_start + caret_offset,
    }
}

/// Clamps `offset` into `text`, stepping back to the nearest char boundary.
pub fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_insert_at_caret() {
        let result = insert_snippet("a + b", 2, 2, "\\pi", false);
        assert_eq!(result.text, "a \\pi+ b");
        assert_eq!(result.caret, 2 + "\\pi".len());
    }

    #[test]
    fn plain_insert_replaces_selection() {
        let result = insert_snippet("a + b", 2, 4, "\\pi", false);
        assert_eq!(result.text, "a \\pib");
        assert_eq!(result.caret, 2 + "\\pi".len());
    }

    #[test]
    fn fraction_template_places_caret_inside_first_brace() {
        // First `{` of \frac{}{} is at index 5, caret one past it.
        let result = insert_snippet("", 0, 0, "\\frac{}{}", true);
        assert_eq!(result.text, "\\frac{}{}");
        assert_eq!(result.caret, 6);
    }

    #[test]
    fn fraction_template_mid_buffer() {
        let result = insert_snippet("x = ", 4, 4, "\\frac{}{}", true);
        assert_eq!(result.text, "x = \\frac{}{}");
        assert_eq!(result.caret, 4 + 6);
    }

    #[test]
    fn wrapping_insert_wraps_selection() {
        let result = insert_snippet("say hi now", 4, 6, "\\textbf{}", true);
        assert_eq!(result.text, "say \\textbf{hi} now");
        assert_eq!(result.caret, 4 + "\\textbf{hi}".len());
    }

    #[test]
    fn wrapping_only_targets_first_placeholder() {
        let result = insert_snippet("", 0, 0, "\\frac{}{}", true);
        assert_eq!(result.caret, 6);

        let result = insert_snippet("ab", 0, 2, "\\frac{}{}", true);
        assert_eq!(result.text, "\\frac{ab}{}");
        assert_eq!(result.caret, "\\frac{ab}{}".len());
    }

    #[test]
    fn wrapping_without_placeholder_degrades_to_plain_caret() {
        let result = insert_snippet("", 0, 0, "\\to", true);
        assert_eq!(result.text, "\\to");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn multibyte_boundary_clamp() {
        let text = "π + 1";
        // Offset 1 falls inside the two-byte π; clamp steps back to 0.
        assert_eq!(clamp_to_char_boundary(text, 1), 0);
        assert_eq!(clamp_to_char_boundary(text, 2), 2);
        assert_eq!(clamp_to_char_boundary(text, 99), text.len());
    }

    #[test]
    fn insert_after_multibyte_text() {
        let text = "π";
        let result = insert_snippet(text, text.len(), text.len(), "\\infty", false);
        assert_eq!(result.text, "π\\infty");
        assert_eq!(result.caret, text.len() + "\\infty".len());
    }
}
