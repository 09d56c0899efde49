//! Prompt sections and their Markdown rendering.
//!
//! Builders drop empty values, so a section is never emitted without a body.

use std::collections::BTreeMap;

/// One `(heading, body)` entry of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSection {
    pub heading: String,
    pub body: SectionBody,
}

/// How a section body is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Free text on its own lines.
    Text(String),
    /// Fenced block, optionally tagged with a language.
    Code {
        language: Option<&'static str>,
        text: String,
    },
    /// Short list joined with commas on one line.
    Inline(Vec<String>),
    /// One bullet per item.
    Bullets(Vec<String>),
    /// One `- key: value` bullet per entry, in the given order.
    Pairs(Vec<(String, String)>),
    /// Sub-heading one level deeper, followed by child sections.
    Nested(Vec<PromptSection>),
}

impl PromptSection {
    pub fn new(heading: impl Into<String>, body: SectionBody) -> Self {
        Self {
            heading: heading.into(),
            body,
        }
    }
}

/// Accumulates sections in declaration order, skipping empty ones.
#[derive(Debug, Default)]
pub struct SectionsBuilder {
    sections: Vec<PromptSection>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

/// `Some("true")` for a set flag, `None` otherwise.
pub fn flag(value: bool) -> Option<String> {
    value.then(|| "true".to_string())
}

/// `Some(n)` for a non-zero count, `None` otherwise.
pub fn count(value: u32) -> Option<String> {
    (value > 0).then(|| value.to_string())
}

impl SectionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, heading: &str, value: Option<&str>) -> Self {
        if let Some(text) = present(value) {
            self.push(heading, SectionBody::Text(text.trim_end().to_string()));
        }
        self
    }

    pub fn code(mut self, heading: &str, language: Option<&'static str>, value: Option<&str>) -> Self {
        if let Some(text) = present(value) {
            self.push(
                heading,
                SectionBody::Code {
                    language,
                    text: text.trim_end().to_string(),
                },
            );
        }
        self
    }

    pub fn inline(mut self, heading: &str, items: &[String]) -> Self {
        let items = non_empty(items);
        if !items.is_empty() {
            self.push(heading, SectionBody::Inline(items));
        }
        self
    }

    pub fn bullets(mut self, heading: &str, items: &[String]) -> Self {
        let items = non_empty(items);
        if !items.is_empty() {
            self.push(heading, SectionBody::Bullets(items));
        }
        self
    }

    /// Map entries, rendered in key order.
    pub fn map(mut self, heading: &str, map: &BTreeMap<String, String>) -> Self {
        let pairs: Vec<(String, String)> = map
            .iter()
            .filter(|(k, v)| !k.trim().is_empty() && !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if !pairs.is_empty() {
            self.push(heading, SectionBody::Pairs(pairs));
        }
        self
    }

    /// A group of labelled scalar fields in fixed order.
    pub fn facts<'a>(
        mut self,
        heading: &str,
        facts: impl IntoIterator<Item = (&'a str, Option<String>)>,
    ) -> Self {
        let pairs: Vec<(String, String)> = facts
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (label.to_string(), v))
            })
            .collect();
        if !pairs.is_empty() {
            self.push(heading, SectionBody::Pairs(pairs));
        }
        self
    }

    pub fn nested(mut self, heading: &str, children: Vec<PromptSection>) -> Self {
        if !children.is_empty() {
            self.push(heading, SectionBody::Nested(children));
        }
        self
    }

    pub fn section(mut self, section: PromptSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn build(self) -> Vec<PromptSection> {
        self.sections
    }

    fn push(&mut self, heading: &str, body: SectionBody) {
        self.sections.push(PromptSection::new(heading, body));
    }
}

/// Render sections as Markdown, starting at `##` headings.
pub fn render(sections: &[PromptSection]) -> String {
    render_at(sections, 2)
}

fn render_at(sections: &[PromptSection], level: usize) -> String {
    sections
        .iter()
        .map(|section| render_section(section, level))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &PromptSection, level: usize) -> String {
    let mut out = format!("{} {}\n", "#".repeat(level), section.heading);

    match &section.body {
        SectionBody::Text(text) => out.push_str(text),
        SectionBody::Code { language, text } => {
            out.push_str("```");
            out.push_str(language.unwrap_or_default());
            out.push('\n');
            out.push_str(text);
            out.push_str("\n```");
        }
        SectionBody::Inline(items) => out.push_str(&items.join(", ")),
        SectionBody::Bullets(items) => {
            let lines: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
            out.push_str(&lines.join("\n"));
        }
        SectionBody::Pairs(pairs) => {
            let lines: Vec<String> = pairs.iter().map(|(k, v)| format!("- {k}: {v}")).collect();
            out.push_str(&lines.join("\n"));
        }
        SectionBody::Nested(children) => {
            out.push('\n');
            out.push_str(&render_at(children, level + 1));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_values_produce_no_sections() {
        let sections = SectionsBuilder::new()
            .text("Empty", Some("   "))
            .text("Missing", None)
            .code("Code", Some("nix"), Some(""))
            .inline("Inline", &[])
            .bullets("Bullets", &strings(&["", " "]))
            .map("Map", &BTreeMap::new())
            .facts("Facts", [("A", None), ("B", Some(String::new())), ("C", flag(false)), ("D", count(0))])
            .nested("Nested", vec![])
            .build();

        assert!(sections.is_empty());
    }

    #[test]
    fn test_render_list_styles() {
        let sections = SectionsBuilder::new()
            .inline("Outputs", &strings(&["packages", "devShells"]))
            .bullets("Errors", &strings(&["attribute missing", "infinite recursion"]))
            .build();

        assert_eq!(
            render(&sections),
            "## Outputs\npackages, devShells\n\n## Errors\n- attribute missing\n- infinite recursion"
        );
    }

    #[test]
    fn test_map_rendered_sorted() {
        let mut map = BTreeMap::new();
        map.insert("zeta".to_string(), "1".to_string());
        map.insert("alpha".to_string(), "2".to_string());

        let rendered = render(&SectionsBuilder::new().map("Inputs", &map).build());
        assert_eq!(rendered, "## Inputs\n- alpha: 2\n- zeta: 1");
    }

    #[test]
    fn test_code_and_nested() {
        let child = SectionsBuilder::new().text("Issue", Some("disk full")).build();
        let sections = SectionsBuilder::new()
            .code("Configuration Snippet", Some("nix"), Some("{ services.nginx.enable = true; }\n"))
            .nested("Findings", child)
            .build();

        let rendered = render(&sections);
        assert!(rendered.contains("```nix\n{ services.nginx.enable = true; }\n```"));
        assert!(rendered.contains("## Findings\n\n### Issue\ndisk full"));
    }

    #[test]
    fn test_facts_keep_declared_order() {
        let sections = SectionsBuilder::new()
            .facts("CPU", [("Model", Some("Ryzen".to_string())), ("Microcode", None), ("Cores", count(8))])
            .build();

        assert_eq!(render(&sections), "## CPU\n- Model: Ryzen\n- Cores: 8");
    }
}
