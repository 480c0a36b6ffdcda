//! Line model and section bodies.

use crate::builder::IniOptions;
use crate::conditional::Conditional;

/// Indentation emitted per nesting level of conditional clauses.
pub(crate) const INDENT: &str = "  ";

/// A single entry of a [`SectionBody`].
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A `; text` comment.
    ///
    /// Non-persistent comments are dropped when
    /// [`IniOptions::suppress_non_persistent_comments`] is set.
    Comment { text: String, persistent: bool },
    /// A directive such as `key = value`, emitted verbatim.
    Command(String),
    /// A nested `if / else if / else / endif` block, as an index into
    /// [`SectionBody::conditionals`].
    Conditional(usize),
}

/// An append-only, ordered sequence of lines.
///
/// Insertion order is render order. There is no removal or reordering API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBody {
    lines: Vec<Line>,
    conditionals: Vec<Conditional>,
}

impl SectionBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment that is dropped under comment suppression.
    pub fn add_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Comment {
            text: text.into(),
            persistent: false,
        });
        self
    }

    /// Append a comment that always renders.
    pub fn add_persistent_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Comment {
            text: text.into(),
            persistent: true,
        });
        self
    }

    /// Append a directive line.
    pub fn add_command(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Command(text.into()));
        self
    }

    /// Append an empty conditional block and return it for attaching clauses.
    ///
    /// The block must receive at least one clause before its section is added to
    /// an [`IniBuilder`](crate::IniBuilder).
    pub fn add_conditional(&mut self) -> &mut Conditional {
        let index = self.conditionals.len();
        self.lines.push(Line::Conditional(index));
        self.conditionals.push(Conditional::new());
        &mut self.conditionals[index]
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Conditional blocks of this body, in the order they were added.
    pub fn conditionals(&self) -> &[Conditional] {
        &self.conditionals
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `true` if any conditional in this body tree has no clauses.
    pub(crate) fn has_empty_conditional(&self) -> bool {
        self.conditionals.iter().any(Conditional::is_empty_tree)
    }

    pub(crate) fn render(&self, out: &mut String, depth: usize, options: &IniOptions) {
        for line in &self.lines {
            match line {
                Line::Comment { text, persistent } => {
                    if *persistent || !options.suppress_non_persistent_comments {
                        push_indent(out, depth);
                        out.push_str("; ");
                        out.push_str(text);
                        out.push('\n');
                    }
                }
                Line::Command(text) => {
                    push_indent(out, depth);
                    out.push_str(text);
                    out.push('\n');
                }
                Line::Conditional(index) => {
                    if let Some(conditional) = self.conditionals.get(*index) {
                        conditional.render(out, depth, options);
                    }
                }
            }
        }
    }
}

pub(crate) fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
