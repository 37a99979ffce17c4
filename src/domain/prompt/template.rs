//! Prompt template parsing and rendering
//!
//! Supports variable syntax: `${var:variable-name:default-value}`
//! - `${var:name}` - Required variable, error if not provided
//! - `${var:name:default}` - Optional variable with default value
//!
//! Rendering is a single pass over the template, so substituted values are
//! never scanned for further placeholders.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Regex to match variable patterns: ${var:name} or ${var:name:default}
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)(?::([^}]*))?\}").unwrap()
});

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },

    #[error("Template parsing error: {message}")]
    ParseError { message: String },
}

/// A parsed variable from a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVariable {
    /// Variable name
    pub name: String,
    /// Default value if provided
    pub default: Option<String>,
    /// Whether the variable is required (no default)
    pub required: bool,
}

impl PromptVariable {
    /// Create a required variable
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            required: true,
        }
    }

    /// Create an optional variable with a default
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            required: false,
        }
    }
}

/// A parsed prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Original template content
    content: String,
    /// Parsed variables
    variables: Vec<PromptVariable>,
}

impl PromptTemplate {
    /// Parse a template string and extract variables
    ///
    /// An unterminated `${var:` placeholder is rejected.
    pub fn parse(content: impl Into<String>) -> Result<Self, TemplateError> {
        let content = content.into();

        let stripped = VARIABLE_PATTERN.replace_all(&content, "");
        if stripped.contains("${var:") {
            return Err(TemplateError::ParseError {
                message: "unterminated or malformed variable placeholder".to_string(),
            });
        }

        let mut variables = Vec::new();
        let mut seen_names = HashSet::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap[1].to_string();

            // Skip duplicates
            if !seen_names.insert(name.clone()) {
                continue;
            }

            let variable = match cap.get(2) {
                Some(default) => PromptVariable::with_default(&name, default.as_str()),
                None => PromptVariable::required(&name),
            };

            variables.push(variable);
        }

        Ok(Self { content, variables })
    }

    /// Get the original template content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get all parsed variables
    pub fn variables(&self) -> &[PromptVariable] {
        &self.variables
    }

    /// Get only required variables (no default value)
    pub fn required_variables(&self) -> Vec<&PromptVariable> {
        self.variables.iter().filter(|v| v.required).collect()
    }

    /// Check if the template has any variables
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    /// Render the template with provided values
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .variables
            .iter()
            .find(|v| v.required && !values.contains_key(&v.name))
        {
            return Err(TemplateError::MissingVariable {
                name: missing.name.clone(),
            });
        }

        let rendered = VARIABLE_PATTERN.replace_all(&self.content, |cap: &Captures| {
            values
                .get(&cap[1])
                .map(String::as_str)
                .or_else(|| cap.get(2).map(|m| m.as_str()))
                .unwrap_or_default()
                .to_string()
        });

        Ok(rendered.into_owned())
    }

    /// Render from borrowed name/value pairs
    pub fn render_pairs(&self, pairs: &[(&str, &str)]) -> Result<String, TemplateError> {
        let values = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        self.render(&values)
    }
}
