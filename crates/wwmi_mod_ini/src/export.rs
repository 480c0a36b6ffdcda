//! Export metadata consumed by the generator.
//!
//! These types describe data that was already collected from the modelling tool:
//! mod information, mesh layout, shape keys, written buffers and textures. They
//! are loaded from a `mod.export.json` or `mod.export.toml` description.

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Everything needed to generate a mod.ini.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModExport {
    pub mod_info: ModInfo,

    pub mesh_object: MeshObject,

    /// Shape key metadata. Custom shape key logic is only emitted when
    /// `custom_vertex_count` is non-zero.
    #[serde(default)]
    pub shape_keys: ShapeKeys,

    /// Written vertex/index buffers, in the order they should appear.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<BufferResource>,

    /// Textures copied into the mod's `Textures/` folder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textures: Vec<TextureRecord>,
}

/// User-facing mod information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModInfo {
    /// Example: `My Mod`
    #[serde(default)]
    pub mod_name: String,

    #[serde(default)]
    pub mod_author: String,

    #[serde(default)]
    pub mod_desc: String,

    /// Link to the mod repository or page
    #[serde(default)]
    pub mod_link: String,

    /// Path to the 512x512 logo texture. When absent, the logo resource is
    /// emitted commented out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_logo: Option<String>,

    /// Minimum WWMI version the generated ini requires.
    ///
    /// Example: `0.7.0`
    pub required_wwmi_version: semver::Version,

    /// Version of the tool that generated the export.
    pub wwmi_tools_version: semver::Version,
}

impl ModInfo {
    /// The required WWMI version as the `major.minor` number WWMI compares against.
    pub fn required_wwmi_version_number(&self) -> String {
        format!(
            "{}.{}",
            self.required_wwmi_version.major, self.required_wwmi_version.minor
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MeshObject {
    /// Hash of the original VB0 (position) buffer
    pub vb0_hash: String,

    /// Hash of the original VB1 (blend) buffer
    pub vb1_hash: String,

    /// Number of indices in the original model, used as the object guid.
    pub original_index_count: u32,

    /// Number of vertices in the custom model.
    pub custom_vertex_count: u32,

    /// Components of the original model, in draw order.
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Component {
    /// `THREAD_GROUP_COUNT_X` of the skinning dispatch for this component
    pub dispatch_x: u32,

    pub stock: StockComponent,

    /// Parts of the custom model drawn in place of this component, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomComponent>,
}

/// Layout of a component in the original game buffers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockComponent {
    pub index_offset: u32,
    pub index_count: u32,
    pub vertex_offset: u32,
    pub vertex_count: u32,
    pub vg_offset: u32,
    pub vg_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CustomComponent {
    #[serde(default)]
    pub parts: Vec<ComponentPart>,
}

/// A single drawable object of the custom model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComponentPart {
    pub name: String,
    pub index_count: u32,
    pub index_offset: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ShapeKeys {
    /// Hash of the UAV holding shape key vertex offsets
    pub offsets_hash: String,

    /// Hash of the UAV holding shape key multipliers
    pub scale_hash: String,

    /// Number of shapekeyed vertices in the custom model
    pub custom_vertex_count: u32,

    /// 4 byte checksum of the shape key offsets
    pub checksum: u32,
}

/// A buffer written to `Meshes/<name>.buf`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BufferResource {
    /// Example: `Position`, `Blend`, `Index`
    pub name: String,

    /// DXGI format of the first semantic, e.g. `R32G32B32_FLOAT`
    pub format: String,
}

/// A texture file in `Textures/` and the game texture hash it replaces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextureRecord {
    pub hash: String,
    pub filename: String,
}

impl ModExport {
    pub fn has_custom_shape_keys(&self) -> bool {
        self.shape_keys.custom_vertex_count > 0
    }

    /// Check cross-field requirements that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.has_custom_shape_keys()
            && (self.shape_keys.offsets_hash.is_empty() || self.shape_keys.scale_hash.is_empty())
        {
            return Err(Error::InvalidMetadata(
                "shape key hashes are required when custom shape keys are exported".to_string(),
            ));
        }

        if let Some(buffer) = self.buffers.iter().find(|b| b.name.trim().is_empty()) {
            return Err(Error::InvalidMetadata(format!(
                "buffer with format '{}' has no name",
                buffer.format
            )));
        }

        Ok(())
    }
}

/// Load an export description, picking the parser from the file extension.
pub fn load_export(path: &Utf8Path) -> Result<ModExport> {
    let export: ModExport = match path.extension() {
        Some("json") => {
            let content = fs::read(path)?;
            serde_json::from_slice(&content)?
        }
        Some("toml") => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        _ => return Err(Error::UnsupportedFormat(path.to_owned())),
    };

    tracing::debug!(
        "Loaded export description {} ({} components, {} buffers, {} textures)",
        path,
        export.mesh_object.components.len(),
        export.buffers.len(),
        export.textures.len()
    );

    export.validate()?;
    Ok(export)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    pub(crate) fn create_example_export() -> ModExport {
        ModExport {
            mod_info: ModInfo {
                mod_name: "Rover Outfit".to_string(),
                mod_author: "Modder".to_string(),
                mod_desc: String::new(),
                mod_link: String::new(),
                mod_logo: None,
                required_wwmi_version: semver::Version::new(0, 7, 0),
                wwmi_tools_version: semver::Version::new(0, 8, 2),
            },
            mesh_object: MeshObject {
                vb0_hash: "2f2b8e6a".to_string(),
                vb1_hash: "9c1a0b7e".to_string(),
                original_index_count: 27360,
                custom_vertex_count: 6000,
                components: vec![
                    Component {
                        dispatch_x: 12,
                        stock: StockComponent {
                            index_offset: 0,
                            index_count: 18000,
                            vertex_offset: 0,
                            vertex_count: 4000,
                            vg_offset: 0,
                            vg_count: 60,
                        },
                        custom: Some(CustomComponent {
                            parts: vec![
                                ComponentPart {
                                    name: "Body".to_string(),
                                    index_count: 15000,
                                    index_offset: 0,
                                },
                                ComponentPart {
                                    name: "Hair".to_string(),
                                    index_count: 3000,
                                    index_offset: 15000,
                                },
                            ],
                        }),
                    },
                    Component {
                        dispatch_x: 7,
                        stock: StockComponent {
                            index_offset: 18000,
                            index_count: 9360,
                            vertex_offset: 4000,
                            vertex_count: 2000,
                            vg_offset: 60,
                            vg_count: 40,
                        },
                        custom: None,
                    },
                ],
            },
            shape_keys: ShapeKeys::default(),
            buffers: vec![
                BufferResource {
                    name: "Index".to_string(),
                    format: "R32_UINT".to_string(),
                },
                BufferResource {
                    name: "Position".to_string(),
                    format: "R32G32B32_FLOAT".to_string(),
                },
            ],
            textures: vec![TextureRecord {
                hash: "0a1b2c3d".to_string(),
                filename: "Components-0 t=0a1b2c3d.dds".to_string(),
            }],
        }
    }

    #[test]
    fn test_required_version_number() {
        let export = create_example_export();
        assert_eq!(export.mod_info.required_wwmi_version_number(), "0.7");
    }

    #[test]
    fn test_validate_requires_shape_key_hashes() {
        let mut export = create_example_export();
        assert!(export.validate().is_ok());

        export.shape_keys.custom_vertex_count = 10;
        assert!(matches!(
            export.validate(),
            Err(Error::InvalidMetadata(_))
        ));

        export.shape_keys.offsets_hash = "11111111".to_string();
        export.shape_keys.scale_hash = "22222222".to_string();
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_load_export_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let export = create_example_export();

        let json_path = root.join("mod.export.json");
        fs::write(&json_path, serde_json::to_string_pretty(&export).unwrap()).unwrap();
        assert_eq!(load_export(&json_path).unwrap(), export);

        let toml_path = root.join("mod.export.toml");
        fs::write(&toml_path, toml::to_string_pretty(&export).unwrap()).unwrap();
        assert_eq!(load_export(&toml_path).unwrap(), export);
    }

    #[test]
    fn test_load_export_rejects_unknown_extension() {
        let err = load_export(Utf8Path::new("mod.export.yaml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_shape_keys_default_when_missing() {
        let toml = r#"
            [mod_info]
            mod_name = "Test"
            required_wwmi_version = "0.7.0"
            wwmi_tools_version = "0.8.2"

            [mesh_object]
            vb0_hash = "2f2b8e6a"
            vb1_hash = "9c1a0b7e"
            original_index_count = 100
            custom_vertex_count = 50
        "#;
        let export: ModExport = toml::from_str(toml).unwrap();

        assert!(!export.has_custom_shape_keys());
        assert!(export.mesh_object.components.is_empty());
        assert!(export.buffers.is_empty());
    }
}
