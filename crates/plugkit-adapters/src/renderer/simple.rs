//! Mustache-style renderer.
//!
//! Supports the subset the bundled templates use:
//!
//! - `{{key}}` substitutes a context value; unknown keys are an error
//! - `{{#key}}...{{/key}}` keeps its body when `key` is truthy
//! - `{{^key}}...{{/key}}` keeps its body when `key` is falsy or absent
//!
//! A section tag alone on its line removes that whole line, so templates can
//! wrap YAML blocks without leaving blank lines behind. In file paths,
//! `androidIdentifier` expands to nested directories.

use std::collections::HashMap;
use std::path::PathBuf;

use plugkit_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{ProjectTree, TemplateContext, TemplateSet},
    error::PlugkitResult,
};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::builtin_templates;

/// Keys whose dotted values become directory chains inside paths.
const PACKAGE_PATH_KEYS: &[&str] = &["androidIdentifier"];

#[derive(Debug, Error, PartialEq, Eq)]
enum RenderError {
    #[error("unclosed tag starting at '{0}'")]
    UnclosedTag(String),
    #[error("empty tag")]
    EmptyTag,
    #[error("section '{0}' is never closed")]
    UnclosedSection(String),
    #[error("'{{{{/{0}}}}}' closes nothing")]
    UnexpectedClose(String),
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
}

/// Template renderer over an in-memory catalog of template sets.
pub struct SimpleRenderer {
    templates: HashMap<String, TemplateSet>,
}

impl SimpleRenderer {
    /// Create a renderer with no templates.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create a renderer with the bundled `plugin` and `app` templates.
    pub fn with_builtin() -> PlugkitResult<Self> {
        let mut renderer = Self::new();
        for set in builtin_templates::all_templates() {
            renderer.register(set)?;
        }
        Ok(renderer)
    }

    /// Add or replace a template set.
    pub fn register(&mut self, set: TemplateSet) -> PlugkitResult<()> {
        set.validate()?;
        debug!(template = %set.name, files = set.files.len(), "Template registered");
        self.templates.insert(set.name.to_string(), set);
        Ok(())
    }

    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context))]
    fn render(&self, template: &str, context: &TemplateContext) -> PlugkitResult<ProjectTree> {
        let set = self
            .templates
            .get(template)
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                name: template.to_string(),
            })?;

        let mut tree = ProjectTree::new();
        for file in set.files.iter().filter(|f| f.is_enabled(context)) {
            let path = render_str(&file.path, context, Mode::Path)
                .map_err(|e| rendering_failed(template, &file.path, e))?;
            let content = render_str(&file.content, context, Mode::Content)
                .map_err(|e| rendering_failed(template, &file.path, e))?;
            tree.add_file(PathBuf::from(path), content)?;
        }

        debug!(files = tree.len(), "Template set rendered");
        Ok(tree)
    }
}

fn rendering_failed(template: &str, path: &str, e: RenderError) -> ApplicationError {
    ApplicationError::RenderingFailed {
        reason: format!("{template}/{path}: {e}"),
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Path,
    Content,
}

#[derive(Debug)]
enum Token<'a> {
    Text(&'a str),
    Variable(&'a str),
    Open { key: &'a str, inverted: bool },
    Close(&'a str),
}

impl Token<'_> {
    fn is_section_tag(&self) -> bool {
        matches!(self, Token::Open { .. } | Token::Close(_))
    }
}

#[derive(Debug)]
enum Node<'a> {
    Text(&'a str),
    Variable(&'a str),
    Section {
        key: &'a str,
        inverted: bool,
        children: Vec<Node<'a>>,
    },
}

fn render_str(source: &str, context: &TemplateContext, mode: Mode) -> Result<String, RenderError> {
    let tokens = strip_standalone_lines(tokenize(source)?);
    let nodes = parse(&mut tokens.into_iter(), None)?;
    let mut out = String::with_capacity(source.len());
    render_nodes(&nodes, context, mode, &mut out)?;
    Ok(out)
}

fn tokenize(source: &str) -> Result<Vec<Token<'_>>, RenderError> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| RenderError::UnclosedTag(after.chars().take(20).collect()))?;
        let tag = after[..end].trim();

        let token = if let Some(key) = tag.strip_prefix('#') {
            Token::Open {
                key: key.trim(),
                inverted: false,
            }
        } else if let Some(key) = tag.strip_prefix('^') {
            Token::Open {
                key: key.trim(),
                inverted: true,
            }
        } else if let Some(key) = tag.strip_prefix('/') {
            Token::Close(key.trim())
        } else {
            Token::Variable(tag)
        };
        if matches!(token, Token::Variable("") | Token::Open { key: "", .. } | Token::Close("")) {
            return Err(RenderError::EmptyTag);
        }

        tokens.push(token);
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    Ok(tokens)
}

fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c == ' ' || c == '\t' || c == '\r')
}

/// Drop the line of every section tag that stands alone on it.
///
/// Decisions are made on the untrimmed text so adjacent standalone tags
/// both qualify.
fn strip_standalone_lines(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut keep: Vec<(usize, usize)> = tokens
        .iter()
        .map(|t| match t {
            Token::Text(s) => (0, s.len()),
            _ => (0, 0),
        })
        .collect();

    for (i, token) in tokens.iter().enumerate() {
        if !token.is_section_tag() {
            continue;
        }

        let line_start = match i.checked_sub(1).map(|p| &tokens[p]) {
            None => Some(None),
            Some(Token::Text(s)) => match s.rfind('\n') {
                Some(nl) if is_blank(&s[nl + 1..]) => Some(Some(nl + 1)),
                None if i == 1 && is_blank(s) => Some(Some(0)),
                _ => None,
            },
            Some(_) => None,
        };
        let line_end = match tokens.get(i + 1) {
            None => Some(None),
            Some(Token::Text(s)) => match s.find('\n') {
                Some(nl) if is_blank(&s[..nl]) => Some(Some(nl + 1)),
                None if i + 2 == tokens.len() && is_blank(s) => Some(Some(s.len())),
                _ => None,
            },
            Some(_) => None,
        };

        if let (Some(before), Some(after)) = (line_start, line_end) {
            if let Some(cut) = before {
                keep[i - 1].1 = cut;
            }
            if let Some(cut) = after {
                keep[i + 1].0 = cut;
            }
        }
    }

    tokens
        .into_iter()
        .zip(keep)
        .filter_map(|(token, (start, end))| match token {
            Token::Text(_) if start >= end => None,
            Token::Text(s) => Some(Token::Text(&s[start..end])),
            other => Some(other),
        })
        .collect()
}

fn parse<'a>(
    tokens: &mut std::vec::IntoIter<Token<'a>>,
    open: Option<&'a str>,
) -> Result<Vec<Node<'a>>, RenderError> {
    let mut nodes = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(s) => nodes.push(Node::Text(s)),
            Token::Variable(key) => nodes.push(Node::Variable(key)),
            Token::Open { key, inverted } => {
                let children = parse(tokens, Some(key))?;
                nodes.push(Node::Section {
                    key,
                    inverted,
                    children,
                });
            }
            Token::Close(key) if open == Some(key) => return Ok(nodes),
            Token::Close(key) => return Err(RenderError::UnexpectedClose(key.to_string())),
        }
    }

    match open {
        Some(key) => Err(RenderError::UnclosedSection(key.to_string())),
        None => Ok(nodes),
    }
}

fn render_nodes(
    nodes: &[Node<'_>],
    context: &TemplateContext,
    mode: Mode,
    out: &mut String,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::Variable(key) => {
                let value = context
                    .get(key)
                    .ok_or_else(|| RenderError::UnknownVariable(key.to_string()))?
                    .render();
                if mode == Mode::Path && PACKAGE_PATH_KEYS.contains(key) {
                    out.push_str(&value.replace('.', "/"));
                } else {
                    out.push_str(&value);
                }
            }
            Node::Section {
                key,
                inverted,
                children,
            } => {
                if context.flag(key) != *inverted {
                    render_nodes(children, context, mode, out)?;
                }
            }
        }
    }
    Ok(())
}
