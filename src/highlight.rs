use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// A highlighter that can be instantiated once and used for every code
/// sample in an article.
pub struct CodeHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

impl CodeHighlighter {
    pub fn new() -> CodeHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let themeset = ThemeSet::load_defaults();

        CodeHighlighter {
            syntaxset,
            themeset,
        }
    }

    /// Highlight a code sample into an HTML `<pre>` block using the dark
    /// theme. Unknown language tokens fall back to plain text rather than
    /// failing the render.
    pub fn highlight(&self, language: &str, code: &str) -> String {
        let syntax = self
            .syntaxset
            .find_syntax_by_token(language)
            .unwrap_or_else(|| self.syntaxset.find_syntax_plain_text());

        let theme = self
            .themeset
            .themes
            .get("base16-ocean.dark")
            .expect("Couldn't find theme");

        highlighted_html_for_string(code, &self.syntaxset, syntax, theme)
            .expect("Couldn't highlight")
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_language() {
        let hl = CodeHighlighter::new();
        let html = hl.highlight("rust", "fn main() {}\n");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let hl = CodeHighlighter::new();
        let html = hl.highlight("definitely-not-a-language", "plain text\n");
        assert!(html.contains("plain text"));
    }
}
