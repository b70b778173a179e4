use pulldown_cmark::{html, Options, Parser};

use crate::content::{ContentBody, Section};
use crate::highlight::CodeHighlighter;

/// Render a structured article body to an HTML string.
///
/// Paragraphs pass through the markdown renderer so inline code and
/// emphasis in the source text survive; code samples are syntax
/// highlighted. This runs on the server only — the client receives the
/// finished HTML through a server function.
pub fn render_body(body: &ContentBody) -> String {
    let highlighter = CodeHighlighter::new();
    let mut out = String::new();
    if let Some(intro) = &body.introduction {
        render_section(&mut out, intro, &highlighter);
    }
    for section in &body.sections {
        render_section(&mut out, section, &highlighter);
    }
    if let Some(conclusion) = &body.conclusion {
        render_section(&mut out, conclusion, &highlighter);
    }
    if let Some(cta) = &body.cta {
        render_section(&mut out, cta, &highlighter);
    }
    out
}

fn render_section(out: &mut String, section: &Section, highlighter: &CodeHighlighter) {
    // Headings go through markdown too, so source text never needs
    // manual escaping.
    out.push_str(&markdown(&format!("## {}", section.heading)));
    for paragraph in &section.paragraphs {
        out.push_str(&markdown(paragraph));
    }
    if let Some(code) = &section.code_example {
        out.push_str(&highlighter.highlight(&code.language, &code.content));
    }
}

fn markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all());
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CodeExample;

    fn section(heading: &str, paragraphs: &[&str]) -> Section {
        Section {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            code_example: None,
        }
    }

    #[test]
    fn test_sections_render_in_document_order() {
        let body = ContentBody {
            introduction: Some(section("Intro", &["First."])),
            sections: vec![section("Middle", &["Second."])],
            conclusion: Some(section("End", &["Third."])),
            cta: None,
        };
        let html = render_body(&body);
        let intro = html.find("Intro").unwrap();
        let middle = html.find("Middle").unwrap();
        let end = html.find("End").unwrap();
        assert!(intro < middle && middle < end);
        assert!(html.contains("<h2>"));
        assert!(html.contains("<p>First.</p>"));
    }

    #[test]
    fn test_inline_code_renders() {
        let body = ContentBody {
            introduction: Some(section("Intro", &["Use `React.memo` here."])),
            ..Default::default()
        };
        assert!(render_body(&body).contains("<code>React.memo</code>"));
    }

    #[test]
    fn test_code_example_is_highlighted() {
        let body = ContentBody {
            sections: vec![Section {
                heading: "Code".to_string(),
                paragraphs: vec![],
                code_example: Some(CodeExample {
                    language: "javascript".to_string(),
                    content: "const x = 1;\n".to_string(),
                }),
            }],
            ..Default::default()
        };
        let html = render_body(&body);
        assert!(html.contains("<pre"));
    }

    #[test]
    fn test_empty_body_renders_nothing() {
        assert!(render_body(&ContentBody::default()).is_empty());
    }
}
