//! The small markdown dialect blog posts are written in.
//!
//! Supported: `## ` and `### ` headings, `- ` and `1. ` list items, fenced code
//! blocks, paragraphs separated by blank lines, and inline `**bold**`.

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading2(String),
    Heading3(String),
    Paragraph(String),
    List(Vec<String>),
    OrderedList(Vec<String>),
    Code(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(&'a str),
    Strong(&'a str),
}

struct Builder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Vec<String>,
    ordered: bool,
}

impl Builder {
    fn flush(&mut self) {
        if !self.paragraph.is_empty() {
            self.blocks.push(Block::Paragraph(self.paragraph.join(" ")));
            self.paragraph.clear();
        }
        if !self.list.is_empty() {
            let items = std::mem::take(&mut self.list);
            self.blocks.push(if self.ordered {
                Block::OrderedList(items)
            } else {
                Block::List(items)
            });
        }
    }

    fn list_item(&mut self, item: &str, ordered: bool) {
        if !self.paragraph.is_empty() || (!self.list.is_empty() && self.ordered != ordered) {
            self.flush();
        }
        self.ordered = ordered;
        self.list.push(item.to_string());
    }
}

/// `"3. text"` -> `Some("text")`.
fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

pub fn parse(content: &str) -> Vec<Block> {
    let mut out = Builder {
        blocks: Vec::new(),
        paragraph: Vec::new(),
        list: Vec::new(),
        ordered: false,
    };
    let mut code: Option<Vec<&str>> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(lines) = code.as_mut() {
            if trimmed.starts_with("```") {
                out.blocks.push(Block::Code(lines.join("\n")));
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if trimmed.starts_with("```") {
            out.flush();
            code = Some(Vec::new());
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            out.flush();
            out.blocks.push(Block::Heading3(text.to_string()));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            out.flush();
            out.blocks.push(Block::Heading2(text.to_string()));
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            out.list_item(item, false);
        } else if let Some(item) = ordered_item(trimmed) {
            out.list_item(item, true);
        } else if trimmed.is_empty() {
            out.flush();
        } else {
            if !out.list.is_empty() {
                out.flush();
            }
            out.paragraph.push(trimmed.to_string());
        }
    }

    // An unterminated fence keeps what it collected.
    if let Some(lines) = code {
        out.blocks.push(Block::Code(lines.join("\n")));
    }
    out.flush();
    out.blocks
}

/// Splits `**bold**` runs out of a line. An unmatched `**` stays literal.
pub fn inline(text: &str) -> Vec<Inline<'_>> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            parts.push(Inline::Text(&rest[..start]));
        }
        parts.push(Inline::Strong(&after[..end]));
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        parts.push(Inline::Text(rest));
    }
    parts
}

fn render_inline(text: &str) -> Html {
    inline(text)
        .into_iter()
        .map(|part| match part {
            Inline::Text(t) => html! { {t} },
            Inline::Strong(t) => html! { <strong>{t}</strong> },
        })
        .collect()
}

pub fn render(content: &str) -> Html {
    parse(content)
        .into_iter()
        .map(|block| match block {
            Block::Heading2(text) => html! { <h2>{text}</h2> },
            Block::Heading3(text) => html! { <h3>{text}</h3> },
            Block::Paragraph(text) => html! { <p>{render_inline(&text)}</p> },
            Block::List(items) => html! {
                <ul>
                    { for items.iter().map(|item| html! { <li>{render_inline(item)}</li> }) }
                </ul>
            },
            Block::OrderedList(items) => html! {
                <ol>
                    { for items.iter().map(|item| html! { <li>{render_inline(item)}</li> }) }
                </ol>
            },
            Block::Code(code) => html! { <pre class="blog-code"><code>{code}</code></pre> },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_paragraphs_and_lists() {
        let content = "Intro line one\nline two\n\n## Key Points\n### First\n- alpha\n- beta\nAfter list";
        assert_eq!(
            parse(content),
            vec![
                Block::Paragraph("Intro line one line two".into()),
                Block::Heading2("Key Points".into()),
                Block::Heading3("First".into()),
                Block::List(vec!["alpha".into(), "beta".into()]),
                Block::Paragraph("After list".into()),
            ]
        );
    }

    #[test]
    fn code_fence_content_is_verbatim() {
        let content = "Before\n```css\n  .card { color: red; }\n## not a heading\n```\nAfter";
        assert_eq!(
            parse(content),
            vec![
                Block::Paragraph("Before".into()),
                Block::Code("  .card { color: red; }\n## not a heading".into()),
                Block::Paragraph("After".into()),
            ]
        );
    }

    #[test]
    fn unterminated_fence_keeps_its_lines() {
        assert_eq!(parse("```\nlet x = 1;"), vec![Block::Code("let x = 1;".into())]);
    }

    #[test]
    fn numbered_items_form_an_ordered_list() {
        let content = "## Best Practices\n1. **Fallbacks**: old browsers\n2. Performance\n- loose item";
        assert_eq!(
            parse(content),
            vec![
                Block::Heading2("Best Practices".into()),
                Block::OrderedList(vec!["**Fallbacks**: old browsers".into(), "Performance".into()]),
                Block::List(vec!["loose item".into()]),
            ]
        );
        assert_eq!(parse("2025. A year"), vec![Block::OrderedList(vec!["A year".into()])]);
        assert_eq!(parse("12 monkeys"), vec![Block::Paragraph("12 monkeys".into())]);
    }

    #[test]
    fn blank_content_has_no_blocks() {
        assert!(parse("\n   \n").is_empty());
    }

    #[test]
    fn bold_runs_are_split_out() {
        assert_eq!(
            inline("**Code Review**: AI can find bugs"),
            vec![Inline::Strong("Code Review"), Inline::Text(": AI can find bugs")]
        );
        assert_eq!(
            inline("a **b** c **d**"),
            vec![
                Inline::Text("a "),
                Inline::Strong("b"),
                Inline::Text(" c "),
                Inline::Strong("d"),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(inline("2 ** 3"), vec![Inline::Text("2 ** 3")]);
    }
}
