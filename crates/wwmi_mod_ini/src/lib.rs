//! Generates WWMI `mod.ini` files.
//!
//! The export pipeline collects mesh, shape key, buffer and texture metadata and
//! stores it in a [`ModExport`]. [`ModIniMaker`] turns that description into a
//! [`migoto_ini::IniBuilder`] tree and renders it with a checksum trailer, so a
//! later export can tell whether the user edited the file by hand.
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wwmi_mod_ini::{load_export, MakerOptions, ModIniMaker};
//!
//! # fn main() -> wwmi_mod_ini::Result<()> {
//! let export = load_export(Utf8Path::new("mod.export.toml"))?;
//! let maker = ModIniMaker::new(&export, MakerOptions { comment_code: true })?;
//! std::fs::write("mod.ini", maker.build())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod maker;

pub use error::{Error, Result};
pub use export::{
    load_export, BufferResource, Component, ComponentPart, CustomComponent, MeshObject, ModExport,
    ModInfo, ShapeKeys, StockComponent, TextureRecord,
};
pub use maker::{MakerOptions, ModIniMaker};
