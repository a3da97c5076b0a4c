//! Static catalog of LaTeX snippets exposed by the editor toolbar.

/// One toolbar entry. `wrapping` snippets fold the current selection into
/// their first `{}` placeholder; plain snippets replace the selection.
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub label: &'static str,
    pub latex: &'static str,
    pub wrapping: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SymbolGroup {
    pub heading_key: GroupHeading,
    pub symbols: &'static [Symbol],
}

/// Which i18n string names the group in the dropdown trigger.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GroupHeading {
    Math,
    Chemistry,
}

const fn plain(label: &'static str, latex: &'static str) -> Symbol {
    Symbol {
        label,
        latex,
        wrapping: false,
    }
}

pub const BOLD: Symbol = Symbol {
    label: "B",
    latex: "\\textbf{}",
    wrapping: true,
};

pub const ITALIC: Symbol = Symbol {
    label: "I",
    latex: "\\textit{}",
    wrapping: true,
};

/// Builds the snippet inserted once the link prompt confirms a URL.
pub fn link_snippet(url: &str) -> String {
    format!("\\href{{{url}}}{{}}")
}

const MATH_SYMBOLS: &[Symbol] = &[
    plain("∑", "\\sum"),
    plain("∫", "\\int"),
    plain("√", "\\sqrt{}"),
    plain("π", "\\pi"),
    plain("lim", "\\lim_{x \\to 0}"),
    plain("→", "\\to"),
    plain("⇌", "\\rightleftharpoons"),
    plain("∞", "\\infty"),
    plain("±", "\\pm"),
    plain("≠", "\\neq"),
    plain("≤", "\\leq"),
    plain("≥", "\\geq"),
    plain("≈", "\\approx"),
    plain("→", "\\rightarrow"),
    plain("←", "\\leftarrow"),
    plain("⇔", "\\Leftrightarrow"),
    plain("α", "\\alpha"),
    plain("β", "\\beta"),
    plain("γ", "\\gamma"),
    plain("θ", "\\theta"),
    plain("μ", "\\mu"),
    plain("Σ", "\\Sigma"),
    plain("Δ", "\\Delta"),
    plain("Ω", "\\Omega"),
    plain("Fraction", "\\frac{}{}"),
    plain("Superscript", "^{}"),
    plain("Subscript", "_{}"),
    plain(
        "Matrix 2x2",
        "\\begin{bmatrix} a & b \\\\ c & d \\end{bmatrix}",
    ),
    plain(
        "Matrix 3x3",
        "\\begin{bmatrix} a & b & c \\\\ d & e & f \\\\ g & h & i \\end{bmatrix}",
    ),
];

const CHEMISTRY_SYMBOLS: &[Symbol] = &[
    plain("H₂O", "H_2O"),
    plain("CO₂", "CO_2"),
    plain("O₂", "O_2"),
    plain("N₂", "N_2"),
    plain("→ (rxn)", "\\rightarrow"),
    plain("⇌ (eq)", "\\rightleftharpoons"),
    plain("Δ (heat)", "\\Delta"),
    plain("Catalyst", "\\xrightarrow{\\text{cat.}}"),
    plain("Precipitate", "\\downarrow"),
    plain("Gas", "\\uparrow"),
    plain("aq", "_{(aq)}"),
    plain("s", "_{(s)}"),
    plain("l", "_{(l)}"),
    plain("g", "_{(g)}"),
];

pub const SYMBOL_GROUPS: &[SymbolGroup] = &[
    SymbolGroup {
        heading_key: GroupHeading::Math,
        symbols: MATH_SYMBOLS,
    },
    SymbolGroup {
        heading_key: GroupHeading::Chemistry,
        symbols: CHEMISTRY_SYMBOLS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::insert_snippet;

    #[test]
    fn catalog_shape() {
        assert_eq!(SYMBOL_GROUPS.len(), 2);
        assert_eq!(SYMBOL_GROUPS[0].heading_key, GroupHeading::Math);
        assert_eq!(SYMBOL_GROUPS[0].symbols.len(), 29);
        assert_eq!(SYMBOL_GROUPS[1].heading_key, GroupHeading::Chemistry);
        assert_eq!(SYMBOL_GROUPS[1].symbols.len(), 14);
    }

    #[test]
    fn catalog_entries_are_nonempty() {
        for group in SYMBOL_GROUPS {
            for sym in group.symbols {
                assert!(!sym.label.is_empty());
                assert!(!sym.latex.is_empty());
                assert!(!sym.wrapping, "catalog symbols insert plainly");
            }
        }
    }

    #[test]
    fn matrix_rows_use_double_backslash() {
        let matrix = MATH_SYMBOLS
            .iter()
            .find(|s| s.label == "Matrix 2x2")
            .unwrap();
        assert!(matrix.latex.contains("\\\\"));
    }

    #[test]
    fn formatting_symbols_wrap() {
        assert!(BOLD.wrapping);
        assert!(ITALIC.wrapping);

        let result = insert_snippet("note", 0, 4, BOLD.latex, BOLD.wrapping);
        assert_eq!(result.text, "\\textbf{note}");
    }

    #[test]
    fn link_snippet_embeds_url() {
        assert_eq!(
            link_snippet("https://example.com"),
            "\\href{https://example.com}{}"
        );
    }
}
