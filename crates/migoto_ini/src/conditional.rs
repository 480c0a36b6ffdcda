//! Conditional blocks (`if / else if / else / endif`).
//!
//! A [`Conditional`] is an ordered list of [`Clause`]s. The first clause renders
//! as `if`, later conditioned clauses as `else if`, and a clause without a
//! condition as `else`. Only the last clause may omit its condition, which is
//! enforced when clauses are attached. Conditions are emitted verbatim and are
//! never reordered, de-duplicated or validated.

use crate::body::{push_indent, SectionBody};
use crate::builder::IniOptions;
use crate::error::{Error, Result};

/// One branch of a [`Conditional`].
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// `None` marks the trailing `else` branch.
    pub condition: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditional {
    clauses: Vec<Clause>,
}

impl Conditional {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a conditioned clause and return its empty body.
    ///
    /// The first call produces the `if` branch, every subsequent call an
    /// `else if` branch, in call order.
    pub fn add_if_clause(&mut self, condition: impl Into<String>) -> Result<&mut SectionBody> {
        self.push_clause(Some(condition.into()))
    }

    /// Append the unconditional `else` clause and return its empty body.
    ///
    /// No clause may be added afterwards.
    pub fn add_else_clause(&mut self) -> Result<&mut SectionBody> {
        self.push_clause(None)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn has_else(&self) -> bool {
        self.clauses
            .last()
            .is_some_and(|clause| clause.condition.is_none())
    }

    fn push_clause(&mut self, condition: Option<String>) -> Result<&mut SectionBody> {
        if self.has_else() {
            return Err(Error::ClauseAfterElse);
        }

        if condition.is_none() && self.clauses.is_empty() {
            return Err(Error::ElseWithoutIf);
        }

        let index = self.clauses.len();
        self.clauses.push(Clause {
            condition,
            body: SectionBody::new(),
        });
        Ok(&mut self.clauses[index].body)
    }

    /// Returns `true` if this block or any block nested in it has no clauses.
    pub(crate) fn is_empty_tree(&self) -> bool {
        self.clauses.is_empty()
            || self
                .clauses
                .iter()
                .any(|clause| clause.body.has_empty_conditional())
    }

    pub(crate) fn render(&self, out: &mut String, depth: usize, options: &IniOptions) {
        for (index, clause) in self.clauses.iter().enumerate() {
            push_indent(out, depth);
            match (&clause.condition, index) {
                (Some(condition), 0) => {
                    out.push_str("if ");
                    out.push_str(condition);
                }
                (Some(condition), _) => {
                    out.push_str("else if ");
                    out.push_str(condition);
                }
                (None, _) => out.push_str("else"),
            }
            out.push('\n');
            clause.body.render(out, depth + 1, options);
        }
        push_indent(out, depth);
        out.push_str("endif\n");
    }
}
