use std::collections::BTreeMap;

use crate::error::{ParseError, RenderError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A message body template, compiled once per task and rendered once per
/// cycle. Placeholders use double-brace delimiters: `{{name}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Splits the template into literal and placeholder segments.
    ///
    /// # Errors
    ///
    /// Returns an error for an unterminated `{{` or an empty placeholder.
    pub fn compile(template: &str) -> Result<Self, ParseError> {
        let mut segments = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find("{{") {
            let offset = template.len().saturating_sub(rest.len()).saturating_add(open);
            let (literal, tail) = rest.split_at(open);
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_owned()));
            }
            let tail = tail.get(2..).unwrap_or("");
            let close = tail
                .find("}}")
                .ok_or(ParseError::UnterminatedPlaceholder { offset })?;
            let (name, remainder) = tail.split_at(close);
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseError::EmptyPlaceholder { offset });
            }
            segments.push(Segment::Placeholder(name.to_owned()));
            rest = remainder.get(2..).unwrap_or("");
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }
        Ok(Self { segments })
    }

    /// Substitutes bindings into the compiled template. Pure: identical
    /// bindings always produce identical output.
    ///
    /// # Errors
    ///
    /// Returns an error when a placeholder has no binding.
    pub fn render(&self, bindings: &BTreeMap<String, String>) -> Result<String, RenderError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value =
                        bindings
                            .get(name)
                            .ok_or_else(|| RenderError::UnboundVariable {
                                name: name.clone(),
                            })?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}
