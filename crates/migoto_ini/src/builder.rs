//! Group bookkeeping and document rendering.
//!
//! The [`IniBuilder`] owns every group and section for the duration of one
//! build. It is a plain mutable tree meant for a single writer: populate it in
//! one pass, then call [`build`](IniBuilder::build). Nothing is shared between
//! builders.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::section::IniSection;

/// Render options, fixed at construction and read only at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IniOptions {
    /// Drop every non-persistent comment (section comments included), document-wide.
    pub suppress_non_persistent_comments: bool,
}

/// A numbered bucket of sections with optional literal text around them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniGroup {
    index: usize,
    header: Option<String>,
    footer: Option<String>,
    sections: Vec<IniSection>,
}

impl IniGroup {
    fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    fn render(&self, out: &mut String, options: &IniOptions) {
        if let Some(header) = &self.header {
            out.push_str(header);
        }
        for section in &self.sections {
            section.render(out, options);
        }
        if let Some(footer) = &self.footer {
            out.push_str(footer);
        }
    }
}

/// Assembles groups of sections and renders them into ini text.
///
/// Groups render in ascending index order no matter in which order they were
/// populated. Sections, clauses and lines render in insertion order.
#[derive(Debug, Clone, Default)]
pub struct IniBuilder {
    options: IniOptions,
    header: String,
    groups: BTreeMap<usize, IniGroup>,
    titles: HashSet<String>,
}

impl IniBuilder {
    pub fn new(options: IniOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Set the literal text rendered at the very top of the document.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Set literal text rendered verbatim before the sections of group `index`.
    pub fn set_group_header(&mut self, index: usize, header: impl Into<String>) {
        self.group_mut(index).header = Some(header.into());
    }

    /// Set literal text rendered verbatim after the sections of group `index`.
    pub fn set_group_footer(&mut self, index: usize, footer: impl Into<String>) {
        self.group_mut(index).footer = Some(footer.into());
    }

    /// Append a section to group `index`, creating the group if needed.
    ///
    /// Fails if a section with the same title was already added, or if the
    /// section contains a conditional block without clauses.
    pub fn add_section(&mut self, section: IniSection, index: usize) -> Result<()> {
        let title = section.title();

        if self.titles.contains(&title) {
            return Err(Error::DuplicateSection { title });
        }
        if section.body().has_empty_conditional() {
            return Err(Error::EmptyConditional { title });
        }

        tracing::trace!("Adding section [{}] to group {}", title, index);
        self.titles.insert(title);
        self.group_mut(index).sections.push(section);
        Ok(())
    }

    /// Look up a previously added section by its title.
    pub fn section(&self, title: &str) -> Option<&IniSection> {
        self.groups
            .values()
            .flat_map(|group| group.sections.iter())
            .find(|section| section.title() == title)
    }

    pub fn groups(&self) -> impl Iterator<Item = &IniGroup> {
        self.groups.values()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn section_count(&self) -> usize {
        self.titles.len()
    }

    /// Render the document: leading header, then every group by ascending index.
    ///
    /// Rendering does not mutate the builder, so repeated calls return identical text.
    /// Non-empty output always ends with a newline, so a checksum trailer appended
    /// by [`checksum::sign`](crate::checksum::sign) lands on its own line.
    pub fn build(&self) -> String {
        let mut out = self.header.clone();
        for group in self.groups.values() {
            group.render(&mut out, &self.options);
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }

        tracing::debug!(
            "Rendered {} groups with {} sections ({} bytes)",
            self.groups.len(),
            self.titles.len(),
            out.len()
        );
        out
    }

    fn group_mut(&mut self, index: usize) -> &mut IniGroup {
        self.groups.entry(index).or_insert_with(|| {
            tracing::trace!("Creating group {}", index);
            IniGroup::new(index)
        })
    }
}
