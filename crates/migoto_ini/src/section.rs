//! Typed ini sections.

use std::fmt;

use crate::body::SectionBody;
use crate::builder::IniOptions;
use crate::error::{Error, Result};

/// Kind of a section, which determines its title format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Singleton `Constants` section, rendered without a header line.
    Constants,
    /// Singleton `Present` section, rendered without a header line.
    Present,
    /// `[Resource<Name>]`
    Resource,
    /// `[CommandList<Name>]`
    CommandList,
    /// `[TextureOverride<Name>]`, always followed by a `hash = ...` line.
    TextureOverride,
}

impl SectionKind {
    /// Title prefix for this kind. Singleton kinds use it as the whole title.
    pub fn prefix(self) -> &'static str {
        match self {
            SectionKind::Constants => "Constants",
            SectionKind::Present => "Present",
            SectionKind::Resource => "Resource",
            SectionKind::CommandList => "CommandList",
            SectionKind::TextureOverride => "TextureOverride",
        }
    }

    pub fn is_singleton(self) -> bool {
        matches!(self, SectionKind::Constants | SectionKind::Present)
    }

    pub fn requires_hash(self) -> bool {
        matches!(self, SectionKind::TextureOverride)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A named, typed block of directives.
///
/// Populate the body through [`body_mut`](Self::body_mut), then hand the section
/// to [`IniBuilder::add_section`](crate::IniBuilder::add_section).
#[derive(Debug, Clone, PartialEq)]
pub struct IniSection {
    kind: SectionKind,
    name: String,
    hash: Option<String>,
    comment: Option<String>,
    body: SectionBody,
}

impl IniSection {
    /// Create a section of the given kind.
    ///
    /// `hash` is mandatory for [`SectionKind::TextureOverride`] and ignored for
    /// every other kind. Hashes must be hex digits and are stored lowercase.
    pub fn new(kind: SectionKind, name: impl Into<String>, hash: Option<&str>) -> Result<Self> {
        let name = name.into();

        let hash = if kind.requires_hash() {
            let hash = hash.ok_or_else(|| Error::MissingHash { name: name.clone() })?;
            Some(normalize_hash(&name, hash)?)
        } else {
            if let Some(hash) = hash {
                tracing::debug!("Ignoring hash '{}' on {} section '{}'", hash, kind, name);
            }
            None
        };

        Ok(Self {
            kind,
            name,
            hash,
            comment: None,
            body: SectionBody::new(),
        })
    }

    pub fn constants() -> Self {
        Self::unhashed(SectionKind::Constants, String::new())
    }

    pub fn present() -> Self {
        Self::unhashed(SectionKind::Present, String::new())
    }

    pub fn resource(name: impl Into<String>) -> Self {
        Self::unhashed(SectionKind::Resource, name.into())
    }

    pub fn command_list(name: impl Into<String>) -> Self {
        Self::unhashed(SectionKind::CommandList, name.into())
    }

    pub fn texture_override(name: impl Into<String>, hash: &str) -> Result<Self> {
        Self::new(SectionKind::TextureOverride, name, Some(hash))
    }

    fn unhashed(kind: SectionKind, name: String) -> Self {
        Self {
            kind,
            name,
            hash: None,
            comment: None,
            body: SectionBody::new(),
        }
    }

    /// Attach a header comment rendered above the title.
    ///
    /// It is suppressed exactly like a non-persistent body comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Title used both in the header line and for cross-section references,
    /// e.g. `run = CommandListSetupShapeKeys`.
    pub fn title(&self) -> String {
        if self.kind.is_singleton() {
            self.kind.prefix().to_string()
        } else {
            format!("{}{}", self.kind.prefix(), self.name)
        }
    }

    /// Bracketed header line, or `None` for singleton kinds.
    pub fn header(&self) -> Option<String> {
        (!self.kind.is_singleton()).then(|| format!("[{}]", self.title()))
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut SectionBody {
        &mut self.body
    }

    pub(crate) fn render(&self, out: &mut String, options: &IniOptions) {
        out.push('\n');

        if let Some(comment) = &self.comment {
            if !options.suppress_non_persistent_comments {
                out.push_str("; ");
                out.push_str(comment);
                out.push('\n');
            }
        }

        if let Some(header) = self.header() {
            out.push_str(&header);
            out.push('\n');
        }

        if let Some(hash) = &self.hash {
            out.push_str("hash = ");
            out.push_str(hash);
            out.push('\n');
        }

        self.body.render(out, 0, options);
    }
}

fn normalize_hash(name: &str, hash: &str) -> Result<String> {
    let hash = hash.trim();
    if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHash {
            name: name.to_string(),
            hash: hash.to_string(),
        });
    }
    Ok(hash.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(section: &IniSection, suppress: bool) -> String {
        let mut out = String::new();
        section.render(
            &mut out,
            &IniOptions {
                suppress_non_persistent_comments: suppress,
            },
        );
        out
    }

    #[test]
    fn test_titles_by_kind() {
        assert_eq!(IniSection::resource("ModName").title(), "ResourceModName");
        assert_eq!(
            IniSection::command_list("SkinMesh").header().as_deref(),
            Some("[CommandListSkinMesh]")
        );
        assert_eq!(IniSection::constants().title(), "Constants");
        assert_eq!(IniSection::present().header(), None);
        assert_eq!(
            IniSection::texture_override("Component0", "1a2b3c4d")
                .unwrap()
                .title(),
            "TextureOverrideComponent0"
        );
    }

    #[test]
    fn test_texture_override_requires_hash() {
        let err = IniSection::new(SectionKind::TextureOverride, "Texture0", None).unwrap_err();
        assert_eq!(
            err,
            Error::MissingHash {
                name: "Texture0".to_string()
            }
        );
    }

    #[test]
    fn test_hash_is_validated_and_lowercased() {
        let section = IniSection::texture_override("Texture0", "DEADBEEF").unwrap();
        assert_eq!(section.hash(), Some("deadbeef"));

        assert!(matches!(
            IniSection::texture_override("Texture0", "not-hex"),
            Err(Error::InvalidHash { .. })
        ));
        assert!(matches!(
            IniSection::texture_override("Texture0", ""),
            Err(Error::InvalidHash { .. })
        ));
    }

    #[test]
    fn test_hash_ignored_for_other_kinds() {
        let section = IniSection::new(SectionKind::Resource, "Foo", Some("1234")).unwrap();
        assert_eq!(section.hash(), None);
        assert_eq!(render(&section, false), "\n[ResourceFoo]\n");
    }

    #[test]
    fn test_hash_line_follows_title() {
        let mut section = IniSection::texture_override("Texture0", "0a1b2c3d")
            .unwrap()
            .with_comment("Texture override");
        section
            .body_mut()
            .add_command("match_priority = 0")
            .add_command("this = ResourceTexture0");

        assert_eq!(
            render(&section, false),
            "\n; Texture override\n[TextureOverrideTexture0]\nhash = 0a1b2c3d\nmatch_priority = 0\nthis = ResourceTexture0\n"
        );
    }

    #[test]
    fn test_section_comment_is_suppressible() {
        let mut section = IniSection::constants().with_comment("Global variables");
        section.body_mut().add_command("global $mod_id = -1000");

        assert_eq!(
            render(&section, false),
            "\n; Global variables\nglobal $mod_id = -1000\n"
        );
        assert_eq!(render(&section, true), "\nglobal $mod_id = -1000\n");
    }
}
