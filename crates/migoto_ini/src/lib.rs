//! Hierarchical builder for 3DMigoto-style ini documents.
//!
//! Documents are assembled from typed [`IniSection`]s placed into numbered
//! groups of an [`IniBuilder`]. Section bodies hold comments, directives and
//! nested [`Conditional`] blocks. The rendered text can be stamped with a
//! SHA-256 trailer via [`checksum::sign`] and later checked for manual edits
//! with [`checksum::is_modified`].
//!
//! # Example
//!
//! ```
//! use migoto_ini::{checksum, IniBuilder, IniOptions, IniSection};
//!
//! # fn main() -> migoto_ini::Result<()> {
//! let mut ini = IniBuilder::new(IniOptions::default());
//! ini.set_group_header(0, "; Hdr\n");
//!
//! let mut section = IniSection::resource("Foo");
//! section.body_mut().add_command("type = Buffer");
//! ini.add_section(section, 0)?;
//!
//! let signed = checksum::sign(&ini.build());
//! assert!(signed.starts_with("; Hdr\n\n[ResourceFoo]\ntype = Buffer\n"));
//! assert!(!checksum::is_text_modified(&signed));
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod builder;
pub mod checksum;
pub mod conditional;
pub mod error;
pub mod section;

#[cfg(test)]
mod tests;

pub use body::{Line, SectionBody};
pub use builder::{IniBuilder, IniGroup, IniOptions};
pub use conditional::{Clause, Conditional};
pub use error::{Error, Result};
pub use section::{IniSection, SectionKind};
