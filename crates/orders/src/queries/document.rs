//! Typed GraphQL document tree and its wire rendering.
//!
//! Documents are assembled from [`Selection`] trees and named
//! [`Fragment`]s, then rendered to text once at the executor boundary.
//! Fragments are keyed by name, so a document declares each one exactly
//! once; string arguments are rendered as escaped GraphQL literals.

use std::collections::BTreeMap;

use thiserror::Error;

/// Problems found while assembling or rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Two different fragment bodies were registered under one name.
    #[error("fragment `{0}` declared twice with different selections")]
    ConflictingFragment(&'static str),

    /// A fragment spread names a fragment the document does not declare.
    #[error("fragment `{0}` is spread but never declared")]
    UndefinedFragment(&'static str),

    /// A declared fragment is never spread (invalid GraphQL).
    #[error("fragment `{0}` is declared but never used")]
    UnusedFragment(&'static str),
}

/// An argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Reference to an operation variable (rendered as `$name`).
    Variable(&'static str),
    Int(i64),
    /// Rendered as an escaped string literal.
    String(String),
    Boolean(bool),
}

impl Argument {
    fn render(&self, out: &mut String) {
        match self {
            Self::Variable(name) => {
                out.push('$');
                out.push_str(name);
            }
            Self::Int(n) => {
                out.push_str(&n.to_string());
            }
            Self::String(s) => push_string_literal(out, s),
            Self::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        }
    }
}

/// A field with optional arguments and sub-selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    arguments: Vec<(&'static str, Argument)>,
    selections: Vec<Selection>,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            arguments: Vec::new(),
            selections: Vec::new(),
        }
    }

    /// Add an argument.
    #[must_use]
    pub fn arg(mut self, name: &'static str, value: Argument) -> Self {
        self.arguments.push((name, value));
        self
    }

    /// Add sub-selections.
    #[must_use]
    pub fn select(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selections.extend(selections);
        self
    }
}

/// One entry in a selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Field(Field),
    /// `...Name`
    FragmentSpread(&'static str),
    /// `... on Type { ... }`
    InlineFragment {
        type_condition: &'static str,
        selections: Vec<Self>,
    },
}

impl Selection {
    /// A leaf field.
    #[must_use]
    pub const fn leaf(name: &'static str) -> Self {
        Self::Field(Field::new(name))
    }

    /// An object field selecting leaf fields.
    #[must_use]
    pub fn object(name: &'static str, leaves: &[&'static str]) -> Self {
        Self::Field(Field::new(name).select(leaves.iter().copied().map(Self::leaf)))
    }

    /// Several leaf fields at once.
    pub fn leaves<'a>(names: &'a [&'static str]) -> impl Iterator<Item = Self> + 'a {
        names.iter().copied().map(Self::leaf)
    }

    fn collect_spreads(&self, spreads: &mut Vec<&'static str>) {
        match self {
            Self::Field(field) => {
                for selection in &field.selections {
                    selection.collect_spreads(spreads);
                }
            }
            Self::FragmentSpread(name) => spreads.push(*name),
            Self::InlineFragment { selections, .. } => {
                for selection in selections {
                    selection.collect_spreads(spreads);
                }
            }
        }
    }

    fn render(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        match self {
            Self::Field(field) => {
                out.push_str(field.name);
                if !field.arguments.is_empty() {
                    out.push('(');
                    for (i, (name, value)) in field.arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(name);
                        out.push_str(": ");
                        value.render(out);
                    }
                    out.push(')');
                }
                if field.selections.is_empty() {
                    out.push('\n');
                } else {
                    render_selection_set(out, &field.selections, depth);
                }
            }
            Self::FragmentSpread(name) => {
                out.push_str("...");
                out.push_str(name);
                out.push('\n');
            }
            Self::InlineFragment {
                type_condition,
                selections,
            } => {
                out.push_str("... on ");
                out.push_str(type_condition);
                render_selection_set(out, selections, depth);
            }
        }
    }
}

/// A named fragment declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: &'static str,
    type_condition: &'static str,
    selections: Vec<Selection>,
}

impl Fragment {
    #[must_use]
    pub fn new(
        name: &'static str,
        type_condition: &'static str,
        selections: impl IntoIterator<Item = Selection>,
    ) -> Self {
        Self {
            name,
            type_condition,
            selections: selections.into_iter().collect(),
        }
    }

    /// The fragment's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Operation type of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
}

/// A complete executable document: one operation plus its fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    operation: OperationType,
    name: Option<&'static str>,
    variables: Vec<(&'static str, &'static str)>,
    selections: Vec<Selection>,
    fragments: BTreeMap<&'static str, Fragment>,
}

impl Document {
    /// A named query.
    #[must_use]
    pub const fn query(name: &'static str) -> Self {
        Self::new(OperationType::Query, Some(name))
    }

    /// An anonymous query (`{ ... }`), as bulk operations require.
    #[must_use]
    pub const fn anonymous_query() -> Self {
        Self::new(OperationType::Query, None)
    }

    /// A named mutation.
    #[must_use]
    pub const fn mutation(name: &'static str) -> Self {
        Self::new(OperationType::Mutation, Some(name))
    }

    const fn new(operation: OperationType, name: Option<&'static str>) -> Self {
        Self {
            operation,
            name,
            variables: Vec::new(),
            selections: Vec::new(),
            fragments: BTreeMap::new(),
        }
    }

    /// Declare a variable (`$name: Type`).
    #[must_use]
    pub fn variable(mut self, name: &'static str, type_name: &'static str) -> Self {
        self.variables.push((name, type_name));
        self
    }

    /// Add a root selection.
    #[must_use]
    pub fn select(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Register a fragment.
    ///
    /// Registering an identical fragment again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ConflictingFragment`] if a different
    /// fragment with the same name is already registered.
    pub fn fragment(mut self, fragment: Fragment) -> Result<Self, DocumentError> {
        match self.fragments.get(fragment.name) {
            Some(existing) if *existing != fragment => {
                Err(DocumentError::ConflictingFragment(fragment.name))
            }
            Some(_) => Ok(self),
            None => {
                self.fragments.insert(fragment.name, fragment);
                Ok(self)
            }
        }
    }

    /// Render to GraphQL text.
    ///
    /// # Errors
    ///
    /// Returns an error if a spread names an undeclared fragment or a
    /// declared fragment is never spread.
    pub fn render(&self) -> Result<String, DocumentError> {
        self.check_fragments()?;

        let mut out = String::new();
        match (self.operation, self.name) {
            (OperationType::Query, None) => {}
            (OperationType::Query, Some(name)) => {
                out.push_str("query ");
                out.push_str(name);
            }
            (OperationType::Mutation, name) => {
                out.push_str("mutation");
                if let Some(name) = name {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        if !self.variables.is_empty() {
            out.push('(');
            for (i, (name, type_name)) in self.variables.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('$');
                out.push_str(name);
                out.push_str(": ");
                out.push_str(type_name);
            }
            out.push(')');
        }
        render_selection_set(&mut out, &self.selections, 0);

        for fragment in self.fragments.values() {
            out.push('\n');
            out.push_str("fragment ");
            out.push_str(fragment.name);
            out.push_str(" on ");
            out.push_str(fragment.type_condition);
            render_selection_set(&mut out, &fragment.selections, 0);
        }

        Ok(out)
    }

    fn check_fragments(&self) -> Result<(), DocumentError> {
        let mut spreads = Vec::new();
        for selection in &self.selections {
            selection.collect_spreads(&mut spreads);
        }
        for fragment in self.fragments.values() {
            for selection in &fragment.selections {
                selection.collect_spreads(&mut spreads);
            }
        }

        if let Some(missing) = spreads
            .iter()
            .find(|name| !self.fragments.contains_key(**name))
        {
            return Err(DocumentError::UndefinedFragment(*missing));
        }
        if let Some(unused) = self
            .fragments
            .keys()
            .find(|name| !spreads.contains(*name))
        {
            return Err(DocumentError::UnusedFragment(*unused));
        }
        Ok(())
    }
}

fn render_selection_set(out: &mut String, selections: &[Selection], depth: usize) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push(' ');
    }
    out.push_str("{\n");
    for selection in selections {
        selection.render(out, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Append `s` as a GraphQL string literal.
fn push_string_literal(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
