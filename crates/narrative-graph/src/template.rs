//! Explanation template rendering
//!
//! Relationship templates name their endpoints with `{source_name}`,
//! `{target_name}` and `{type}`. Literal braces are written `{{` and `}}`.

use crate::error::TemplateError;

/// Values available to a template
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Name of the relationship's source node
    pub source_name: &'a str,
    /// Name of the relationship's target node
    pub target_name: &'a str,
    /// Relation label
    pub relation_type: &'a str,
}

impl<'a> TemplateContext<'a> {
    fn lookup(&self, placeholder: &str) -> Option<&'a str> {
        match placeholder {
            "source_name" => Some(self.source_name),
            "target_name" => Some(self.target_name),
            "type" => Some(self.relation_type),
            _ => None,
        }
    }
}

/// Render a template against a context
///
/// # Examples
///
/// ```
/// use narrative_graph::{render_template, TemplateContext};
///
/// let ctx = TemplateContext {
///     source_name: "Cloud Computing Adoption",
///     target_name: "AlphaSoft Inc.",
///     relation_type: "positively_impacts",
/// };
/// let text = render_template("{source_name} {type} {target_name}", &ctx).unwrap();
/// assert_eq!(text, "Cloud Computing Adoption positively_impacts AlphaSoft Inc.");
/// ```
pub fn render_template(template: &str, ctx: &TemplateContext<'_>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => return Err(TemplateError::UnbalancedBrace(pos)),
                        Some((_, ch)) => placeholder.push(ch),
                    }
                }

                let value = ctx
                    .lookup(&placeholder)
                    .ok_or(TemplateError::UnknownPlaceholder(placeholder))?;
                out.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnbalancedBrace(pos));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: text without braces renders unchanged
        #[test]
        fn test_plain_text_is_identity(text in "[^{}]*") {
            let ctx = TemplateContext { source_name: "a", target_name: "b", relation_type: "c" };
            prop_assert_eq!(render_template(&text, &ctx).unwrap(), text);
        }

        /// Property: names are inserted verbatim, braces included
        #[test]
        fn test_names_inserted_verbatim(name in ".*") {
            let ctx = TemplateContext { source_name: &name, target_name: "b", relation_type: "c" };
            prop_assert_eq!(render_template("[{source_name}]", &ctx).unwrap(), format!("[{}]", name));
        }
    }
}
