//! mod.ini generation.
//!
//! [`ModIniMaker`] walks a [`ModExport`] and populates an [`IniBuilder`] with the
//! groups WWMI expects. Groups are populated in dependency order rather than
//! render order; the builder sorts them by index when rendering.

use migoto_ini::{checksum, IniBuilder, IniOptions, IniSection};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::ModExport;

const INI_HEADER: &str = "; WWMI ALPHA-1 INI\n\n";

const MOD_STATE_GROUP: usize = 0;
const MOD_INFO_GROUP: usize = 1;
const DRAW_CALLS_GROUP: usize = 2;
const TEXTURES_GROUP: usize = 3;
const SHAPE_KEYS_OVERRIDE_GROUP: usize = 4;
const SKELETON_OVERRIDE_GROUP: usize = 5;
const BUFFERS_GROUP: usize = 6;
const SHAPE_KEYS_RESOURCES_GROUP: usize = 7;
const SKELETON_RESOURCES_GROUP: usize = 8;

/// Number of pixel shader texture slots checked for texture overrides.
const PS_TEXTURE_SLOTS: usize = 8;

/// Generator settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerOptions {
    /// Keep explanatory comments in the generated code.
    pub comment_code: bool,
}

impl From<MakerOptions> for IniOptions {
    fn from(options: MakerOptions) -> Self {
        IniOptions {
            suppress_non_persistent_comments: !options.comment_code,
        }
    }
}

/// Builds a WWMI mod.ini from export metadata.
#[derive(Debug, Clone)]
pub struct ModIniMaker {
    ini: IniBuilder,
}

impl ModIniMaker {
    pub fn new(export: &ModExport, options: MakerOptions) -> Result<Self> {
        export.validate()?;

        let mut maker = Self {
            ini: IniBuilder::new(options.into()).with_header(INI_HEADER),
        };

        tracing::debug!(
            "Generating mod.ini for {} components (custom shape keys: {})",
            export.mesh_object.components.len(),
            export.has_custom_shape_keys()
        );

        maker.make_mod_state_group(export)?;
        if export.has_custom_shape_keys() {
            maker.make_shape_keys_override_group(export)?;
        }
        maker.make_skeleton_override_group(export)?;
        maker.make_draw_calls_group(export)?;
        maker.make_mod_info_group(export)?;
        maker.make_texture_resources_group(export)?;
        maker.make_buffer_resources_group(export)?;
        if export.has_custom_shape_keys() {
            maker.make_shape_keys_resources_group()?;
        }
        maker.make_skeleton_resources_group()?;
        maker.make_autogenerated_group(export);

        Ok(maker)
    }

    pub fn builder(&self) -> &IniBuilder {
        &self.ini
    }

    /// Render the ini and stamp it with its checksum trailer.
    pub fn build(&self) -> String {
        checksum::sign(&self.ini.build())
    }

    fn make_mod_state_group(&mut self, export: &ModExport) -> Result<()> {
        self.ini.set_group_header(
            MOD_STATE_GROUP,
            "; Mod State -------------------------\n\n",
        );

        let mut constants =
            IniSection::constants().with_comment("Global variables used by entire mod");
        constants
            .body_mut()
            .add_comment("Allows WWMI to safely disable incompatible mod and notify user about it")
            .add_command(format!(
                "global $required_wwmi_version = {}",
                export.mod_info.required_wwmi_version_number()
            ))
            .add_comment("Number of indices in original model")
            .add_command(format!(
                "global $object_guid = {}",
                export.mesh_object.original_index_count
            ))
            .add_comment("Number of vertices in custom model")
            .add_command(format!(
                "global $mesh_vertex_count = {}",
                export.mesh_object.custom_vertex_count
            ))
            .add_comment("Number of shapekeyed vertices in custom model")
            .add_command(format!(
                "global $shapekey_vertex_count = {}",
                export.shape_keys.custom_vertex_count
            ))
            .add_comment("ID assigned to our mod by WWMI")
            .add_command("global $mod_id = -1000")
            .add_comment("Controls whether our mod is enabled, prevents any overrides from happening if $mod_enabled == 0")
            .add_comment("Prevents user from being crash-locked in case of incompatible WWMI version")
            .add_command("global $mod_enabled = 0");
        self.ini.add_section(constants, MOD_STATE_GROUP)?;

        let present = IniSection::present().with_comment("List of commands executed for every frame");
        self.ini.add_section(present, MOD_STATE_GROUP)?;

        Ok(())
    }

    fn make_mod_info_group(&mut self, export: &ModExport) -> Result<()> {
        self.ini.set_group_header(
            MOD_INFO_GROUP,
            "; Resources: Mod Info -------------------------\n\n",
        );

        let info = &export.mod_info;
        self.add_info_resource("ModName", "Name of mod", &info.mod_name, "Unknown Mod Name")?;
        self.add_info_resource(
            "ModAuthor",
            "Name of mod author",
            &info.mod_author,
            "Unknown Mod Author",
        )?;
        self.add_info_resource("ModDesc", "Mod description", &info.mod_desc, "Empty Mod Description")?;
        self.add_info_resource("ModLink", "Link to mod repository", &info.mod_link, "Empty Mod Link")?;

        let mut mod_logo = IniSection::resource("ModLogo")
            .with_comment("Texture file with 512x512 .dds (BC7 SRGB) mod logo");
        if info.mod_logo.is_some() {
            mod_logo.body_mut().add_command("filename = Textures/Logo.dds");
        } else {
            mod_logo
                .body_mut()
                .add_persistent_comment("filename = Textures/Logo.dds");
        }
        self.ini.add_section(mod_logo, MOD_INFO_GROUP)?;

        Ok(())
    }

    /// Emits a string buffer resource, or a commented-out placeholder when `value` is blank.
    fn add_info_resource(
        &mut self,
        name: &str,
        comment: &str,
        value: &str,
        placeholder: &str,
    ) -> Result<()> {
        let mut section = IniSection::resource(name).with_comment(comment);
        let body = section.body_mut();
        if value.trim().is_empty() {
            body.add_persistent_comment("type = Buffer")
                .add_persistent_comment(format!("data = \"{placeholder}\""));
        } else {
            body.add_command("type = Buffer")
                .add_command(format!("data = \"{value}\""));
        }
        self.ini.add_section(section, MOD_INFO_GROUP)?;
        Ok(())
    }

    fn make_draw_calls_group(&mut self, export: &ModExport) -> Result<()> {
        self.ini.set_group_header(
            DRAW_CALLS_GROUP,
            "; Shading: Draw Call Stacks Processing -------------------------\n\n",
        );

        let mut shared_resources = IniSection::command_list("OverrideSharedResources")
            .with_comment("Overrides resources that are shared between VS calls");
        shared_resources
            .body_mut()
            .add_comment("Override Index Buffer to make draw calls use custom faces")
            .add_command("ib = ResourceIndexBuffer")
            .add_comment("Vertex Shader Textures slots require special attention, as they can be leaked outside if unused by the call")
            .add_comment("Use helper function to ensure original vs-t slots content is restored after the call")
            .add_command(r"run = CommandList\WWMIv1\BackupRestoreVertexTextureSlots")
            .add_comment("Override Texcoord and Color Buffers to make draw calls use custom UVs and Vertex Colors")
            .add_command("vs-t0 = ResourceTexcoordBuffer")
            .add_command("vs-t2 = ResourceColorBuffer");
        let shared_resources_title = shared_resources.title();
        self.ini.add_section(shared_resources, DRAW_CALLS_GROUP)?;

        let mut textures = IniSection::command_list("OverrideTextures").with_comment(
            "Overrides textures via triggering [ResourceTextureX] sections by calling checktextureoverride on ps-t slots",
        );
        for slot in 0..PS_TEXTURE_SLOTS {
            textures
                .body_mut()
                .add_command(format!("checktextureoverride = ps-t{slot}"));
        }
        let textures_title = textures.title();
        self.ini.add_section(textures, DRAW_CALLS_GROUP)?;

        for (component_id, component) in export.mesh_object.components.iter().enumerate() {
            let mut section = IniSection::texture_override(
                format!("Component{component_id}"),
                &export.mesh_object.vb0_hash,
            )?
            .with_comment(format!("Override draw calls for Component {component_id}"));

            let body = section.body_mut();
            body.add_command(format!(
                "match_first_index = {}",
                component.stock.index_offset
            ))
            .add_command(format!(
                "match_index_count = {}",
                component.stock.index_count
            ));

            let enabled = body.add_conditional().add_if_clause("$mod_enabled")?;
            enabled
                .add_comment("Skip original draw call")
                .add_command("handling = skip")
                .add_comment("Override shared resources")
                .add_command(format!("run = {shared_resources_title}"))
                .add_comment("Override textures")
                .add_command(format!("run = {textures_title}"));

            match &component.custom {
                Some(custom) => {
                    for part in &custom.parts {
                        enabled
                            .add_persistent_comment(format!("Draw {}", part.name))
                            .add_command(format!(
                                "drawindexed = {}, {}, 0",
                                part.index_count, part.index_offset
                            ));
                    }
                }
                None => {
                    enabled.add_persistent_comment("Draw skipped: No matching custom components found");
                }
            }

            self.ini.add_section(section, DRAW_CALLS_GROUP)?;
        }

        Ok(())
    }

    fn make_texture_resources_group(&mut self, export: &ModExport) -> Result<()> {
        self.ini.set_group_header(
            TEXTURES_GROUP,
            "; Shading: Textures -------------------------\n\n",
        );

        for (texture_id, texture) in export.textures.iter().enumerate() {
            let mut resource = IniSection::resource(format!("Texture{texture_id}"));
            resource
                .body_mut()
                .add_command(format!("filename = Textures/{}", texture.filename));
            let resource_title = resource.title();
            self.ini.add_section(resource, TEXTURES_GROUP)?;

            let mut texture_override =
                IniSection::texture_override(format!("Texture{texture_id}"), &texture.hash)?;
            texture_override
                .body_mut()
                .add_command("match_priority = 0")
                .add_command(format!("this = {resource_title}"));
            self.ini.add_section(texture_override, TEXTURES_GROUP)?;
        }

        Ok(())
    }

    fn make_shape_keys_override_group(&mut self, export: &ModExport) -> Result<()> {
        let shape_keys = &export.shape_keys;
        self.ini.set_group_header(
            SHAPE_KEYS_OVERRIDE_GROUP,
            "; Skinning: Shape Keys Override -------------------------\n\n",
        );

        let mut raise_offsets =
            IniSection::texture_override("VertexLimitRaiseShapeKeyOffsets", &shape_keys.offsets_hash)?
                .with_comment("Increases size of UAV that stores shapekeyed vertices xyz offsets to support more vertices than original");
        raise_offsets.body_mut().add_command("match_priority = 0");
        self.ini.add_section(raise_offsets, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut raise_scale =
            IniSection::texture_override("VertexLimitRaiseShapeKeyScale", &shape_keys.scale_hash)?
                .with_comment("Increases size of UAV that stores shapekeyed vertices multipliers to support more vertices than original");
        raise_scale.body_mut().add_command("match_priority = 0");
        self.ini.add_section(raise_scale, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut setup = IniSection::command_list("SetupShapeKeys").with_comment(
            "Updates ResourceShapeKeyCBRW that stores offsets of shapekeyed vertex lists, shape key values and multipliers",
        );
        setup
            .body_mut()
            .add_comment("Pass 4 byte checksum of shapekey offsets to ensure that we only modify expected values")
            .add_command(format!(r"$\WWMIv1\shapekey_checksum = {}", shape_keys.checksum))
            .add_comment("Pass buffer with offsets for vertex lists of every shape key of custom model")
            .add_command("cs-t33 = ResourceShapeKeyOffsetBuffer")
            .add_comment("Pass buffer with custom values for every shape key, allows to control both custom and stock")
            .add_command("cs-u5 = ResourceCustomShapeKeyValuesRW")
            .add_comment("Pass buffer that stores result of calculations, required for Shape Key Loader CS to run")
            .add_command("cs-u6 = ResourceShapeKeyCBRW")
            .add_comment("Run ShapeKeyOverrider CS")
            .add_command(r"run = CustomShader\WWMIv1\ShapeKeyOverrider");
        let setup_title = setup.title();
        self.ini.add_section(setup, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut load = IniSection::command_list("LoadShapeKeys")
            .with_comment("Runs custom Shape Key Loader CS to load shapekeys data from buffers");
        load.body_mut()
            .add_comment("Pass number of shapekeyed vertices to adjust required threads count via dispatch_y")
            .add_command(r"$\WWMIv1\shapekey_vertex_count = $shapekey_vertex_count")
            .add_comment("Pass buffer with lists of per-vertex ids for every shape key")
            .add_command("cs-t0 = ResourceShapeKeyVertexIdBuffer")
            .add_comment("Pass buffer with lists of xyz per-vertex offsets for every shape key")
            .add_command("cs-t1 = ResourceShapeKeyVertexOffsetBuffer")
            .add_comment("Pass buffer with shape key vertex lists offsets, and shape key values & multipliers")
            .add_command("cs-u6 = ResourceShapeKeyCBRW")
            .add_comment("Run ShapeKeyLoader CS")
            .add_command(r"run = CustomShader\WWMIv1\ShapeKeyLoader");
        let load_title = load.title();
        self.ini.add_section(load, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut loader_callback =
            IniSection::texture_override("ShapeKeyLoaderCallback", &shape_keys.offsets_hash)?
                .with_comment("Handles WWMI callback fired on original Shape Key Loader CS call");
        let body = loader_callback.body_mut();
        body.add_command("match_priority = 0");
        let enabled = body.add_conditional().add_if_clause("$mod_enabled")?;
        enabled.add_comment("Ensure that callback has WWMI filter_index of Shape Key Loader CS assigned");
        enabled
            .add_conditional()
            .add_if_clause("cs == 3381.3333")?
            .add_comment("Skip handling of original Shape Key Loader CS call to modify dispatch_y value")
            .add_command("handling = skip")
            .add_comment("Run custom Shape Key Overrider CS to prepare shape key resources for loading")
            .add_command(format!("run = {setup_title}"))
            .add_comment("Run custom Shape Key Loader CS to load shape key resources")
            .add_command(format!("run = {load_title}"));
        self.ini.add_section(loader_callback, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut multiply = IniSection::command_list("MultiplyShapeKeys")
            .with_comment("Runs custom Shape Key Multiplier CS to set deformation intensity");
        multiply
            .body_mut()
            .add_comment("Pass number of shapekeyed vertices to adjust required threads count via dispatch_y")
            .add_command(r"$\WWMIv1\shapekey_vertex_count = $shapekey_vertex_count")
            .add_comment("Run custom Shape Key Multiplier CS to set deformation intensity")
            .add_command(r"run = CustomShader\WWMIv1\ShapeKeyMultiplier");
        let multiply_title = multiply.title();
        self.ini.add_section(multiply, SHAPE_KEYS_OVERRIDE_GROUP)?;

        let mut multiplier_callback =
            IniSection::texture_override("ShapeKeyMultiplierCallback", &shape_keys.offsets_hash)?
                .with_comment("Handles WWMI callback fired on original Shape Key Multiplier CS call");
        let body = multiplier_callback.body_mut();
        body.add_command("match_priority = 0");
        let enabled = body.add_conditional().add_if_clause("$mod_enabled")?;
        enabled.add_comment("Ensure that callback has WWMI filter_index of Shape Key Multiplier CS assigned");
        enabled
            .add_conditional()
            .add_if_clause("cs == 3381.4444")?
            .add_comment("Skip handling of original Shape Key Multiplier CS call to modify dispatch_y value")
            .add_command("handling = skip")
            .add_comment("Run custom Shape Key Multiplier CS to apply dynamic per-character multipliers")
            .add_command(format!("run = {multiply_title}"));
        self.ini.add_section(multiplier_callback, SHAPE_KEYS_OVERRIDE_GROUP)?;

        Ok(())
    }

    fn make_skeleton_override_group(&mut self, export: &ModExport) -> Result<()> {
        let mesh = &export.mesh_object;
        self.ini.set_group_header(
            SKELETON_OVERRIDE_GROUP,
            "; Skinning: Skeleton Override -------------------------\n\n",
        );

        let mut raise_vb0 = IniSection::texture_override("VertexLimitRaiseVB0", &mesh.vb0_hash)?
            .with_comment("Increases size of UAV that stores VB0 to support more vertices than original");
        raise_vb0.body_mut().add_command("match_priority = 0");
        self.ini.add_section(raise_vb0, SKELETON_OVERRIDE_GROUP)?;

        let mut raise_vb1 = IniSection::texture_override("VertexLimitRaiseVB1", &mesh.vb1_hash)?
            .with_comment("Increases size of UAV that stores VB1 to support more vertices than original");
        raise_vb1.body_mut().add_command("match_priority = 0");
        self.ini.add_section(raise_vb1, SKELETON_OVERRIDE_GROUP)?;

        let mut register_mod = IniSection::command_list("RegisterMod").with_comment(
            "Contacts WWMI to check whether installed version is compatible with our mod",
        );
        let body = register_mod.body_mut();
        body.add_comment("Pass mod info variables to WWMI")
            .add_command(r"$\WWMIv1\required_wwmi_version = $required_wwmi_version")
            .add_command(r"$\WWMIv1\object_guid = $object_guid")
            .add_comment("Pass mod info resources to WWMI")
            .add_command(r"Resource\WWMIv1\ModName = ref ResourceModName")
            .add_command(r"Resource\WWMIv1\ModAuthor = ref ResourceModAuthor")
            .add_command(r"Resource\WWMIv1\ModDesc = ref ResourceModDesc")
            .add_command(r"Resource\WWMIv1\ModLink = ref ResourceModLink")
            .add_command(r"Resource\WWMIv1\ModLogo = ref ResourceModLogo")
            .add_comment("Register mod in WWMI")
            .add_command(r"run = CommandList\WWMIv1\RegisterMod")
            .add_comment("Read mod_id assigned to our mod by WWMI, incompatible mod will get `$mod_id == -1` assigned")
            .add_command(r"$mod_id = $\WWMIv1\mod_id")
            .add_comment("Enable our mod if WWMI assigned valid $mod_id to it");
        body.add_conditional()
            .add_if_clause("$mod_id >= 0")?
            .add_command("$mod_enabled = 1");
        let register_mod_title = register_mod.title();
        self.ini.add_section(register_mod, SKELETON_OVERRIDE_GROUP)?;

        let mut merge_skeleton = IniSection::command_list("MergeSkeleton")
            .with_comment("Update ResourceMergedSkeletonRW with bones data of current component");
        merge_skeleton
            .body_mut()
            .add_comment("Pass buffer that stores bone data of all components")
            .add_command("cs-u6 = ResourceMergedSkeletonRW")
            .add_comment("Run Skeleton Merger CS to merge bones of current component into ResourceMergedSkeletonRW")
            .add_command(r"run = CustomShader\WWMIv1\SkeletonMerger");
        let merge_skeleton_title = merge_skeleton.title();
        self.ini.add_section(merge_skeleton, SKELETON_OVERRIDE_GROUP)?;

        let mut skin_mesh = IniSection::command_list("SkinMesh")
            .with_comment("Pose entire mesh with merged skeleton using custom WWMI Pose CS");
        skin_mesh
            .body_mut()
            .add_comment("Set vertex id to start skinning from, for output integrity we have to skin entire mesh every time")
            .add_command(r"$\WWMIv1\custom_vertex_offset = 0")
            .add_comment("Set number of vertices for skinning, for output integrity we have to skin entire mesh every time")
            .add_command(r"$\WWMIv1\custom_vertex_count = $mesh_vertex_count")
            .add_comment("Set arbitrary scale for our custom model")
            .add_command(r"$\WWMIv1\custom_mesh_scale = 1.0")
            .add_comment("Pass resources for Mesh Skinner CS")
            .add_command("cs-t3 = ResourceShapeKeyDataRef")
            .add_command("cs-t4 = ResourceBlendBuffer")
            .add_command("cs-t5 = ResourceVectorBuffer")
            .add_command("cs-t6 = ResourcePositionBuffer")
            .add_comment("Run Mesh Skinner CS")
            .add_command(r"run = CustomShader\WWMIv1\MeshSkinner");
        let skin_mesh_title = skin_mesh.title();
        self.ini.add_section(skin_mesh, SKELETON_OVERRIDE_GROUP)?;

        let mut skinner_callback = IniSection::texture_override("MeshSkinnerCallback", &mesh.vb0_hash)?
            .with_comment("Handles WWMI callback fired on original Basis or ShapeKeyed Mesh Skinner CS call");
        let body = skinner_callback.body_mut();
        body.add_command("match_priority = 0")
            .add_comment("Check if our mod is compatible with installed WWMI version (runs only once)");
        body.add_conditional()
            .add_if_clause("$mod_id == -1000")?
            .add_comment("Pass required WWMI version along with mod metadata to WWMI")
            .add_command(format!("run = {register_mod_title}"));

        let enabled = body.add_conditional().add_if_clause("$mod_enabled")?;
        enabled.add_comment("Ensure that callback has WWMI filter_index of Basis or ShapeKeyed Pose CS assigned");
        let pose_cs = enabled
            .add_conditional()
            .add_if_clause("cs == 3381.1111 || cs == 3381.2222")?;
        pose_cs
            .add_comment("Skip handling of original Pose CS call as we may need to modify dispatch_x value")
            .add_command("handling = skip")
            .add_comment("Check if it is a ShapeKeyed Pose CS call");
        pose_cs
            .add_conditional()
            .add_if_clause("cs == 3381.2222")?
            .add_comment("Store reference to shapekey data so it can be used with Basis Pose CS call as well")
            .add_command("ResourceShapeKeyDataRef = ref cs-t3");

        for (component_id, component) in mesh.components.iter().enumerate() {
            pose_cs.add_comment(format!("Handle Component {component_id}"));
            pose_cs
                .add_conditional()
                .add_if_clause(format!("THREAD_GROUP_COUNT_X == {}", component.dispatch_x))?
                .add_comment("Pass variables for SkeletonMerger CS")
                .add_command(format!(
                    r"$\WWMIv1\original_vertex_offset = {}",
                    component.stock.vertex_offset
                ))
                .add_command(format!(
                    r"$\WWMIv1\original_vertex_count = {}",
                    component.stock.vertex_count
                ))
                .add_command(format!(r"$\WWMIv1\vg_offset = {}", component.stock.vg_offset))
                .add_command(format!(r"$\WWMIv1\vg_count = {}", component.stock.vg_count))
                .add_comment("Merge bones of this component into ResourceMergedSkeleton")
                .add_command(format!("run = {merge_skeleton_title}"))
                .add_comment("Pose entire mesh with custom pose CS")
                .add_command(format!("run = {skin_mesh_title}"));
        }
        self.ini.add_section(skinner_callback, SKELETON_OVERRIDE_GROUP)?;

        Ok(())
    }

    fn make_buffer_resources_group(&mut self, export: &ModExport) -> Result<()> {
        self.ini.set_group_header(
            BUFFERS_GROUP,
            "; Resources: Buffers -------------------------\n\n",
        );

        for buffer in &export.buffers {
            let mut resource = IniSection::resource(format!("{}Buffer", buffer.name));
            resource
                .body_mut()
                .add_command("type = Buffer")
                .add_command(format!("format = {}", buffer.format))
                .add_command(format!("filename = Meshes/{}.buf", buffer.name));
            self.ini.add_section(resource, BUFFERS_GROUP)?;
        }

        Ok(())
    }

    fn make_shape_keys_resources_group(&mut self) -> Result<()> {
        self.ini.set_group_header(
            SHAPE_KEYS_RESOURCES_GROUP,
            "; Resources: Shape Keys Override -------------------------\n\n",
        );

        let mut shapekey_cb = IniSection::resource("ShapeKeyCBRW").with_comment(
            "Stores dynamically calculated CB required to override original Shape Keys CS call",
        );
        shapekey_cb
            .body_mut()
            .add_comment("Contains 128+128+8 values:")
            .add_comment("* 128 uint: Shape Key offsets (continuous lists of vertex offsets)")
            .add_comment("* 128 unorm: Shape Key values (range [0.0, 1.0])")
            .add_comment("* 8 uint: Shape Key CS settings")
            .add_command("type = RWBuffer")
            .add_command("format = R32G32B32A32_UINT")
            .add_comment("32 shapekey offsets, 32 shapekey values, 2 control flags")
            .add_command("array = 66");
        self.ini.add_section(shapekey_cb, SHAPE_KEYS_RESOURCES_GROUP)?;

        let mut custom_values = IniSection::resource("CustomShapeKeyValuesRW").with_comment(
            "Stores values of custom Shape Keys and overrides for original ones",
        );
        custom_values
            .body_mut()
            .add_comment("Contains 128 values, zero is shifted by 1.0 to the right")
            .add_comment("Expected value range is [1.0, 2.0]")
            .add_comment("* `0.0` means `no override`")
            .add_comment("* `1.0` means `override with zero`")
            .add_comment("* `2.0` means `override with one`")
            .add_command("type = RWBuffer")
            .add_command("format = R32G32B32A32_FLOAT")
            .add_comment("32 elements, 4 floats per element")
            .add_command("array = 32");
        self.ini.add_section(custom_values, SHAPE_KEYS_RESOURCES_GROUP)?;

        Ok(())
    }

    fn make_skeleton_resources_group(&mut self) -> Result<()> {
        self.ini.set_group_header(
            SKELETON_RESOURCES_GROUP,
            "; Resources: Skeleton Override -------------------------\n\n",
        );

        let shapekey_data_ref = IniSection::resource("ShapeKeyDataRef").with_comment(
            "Stores reference to dynamic data (xyz coords offsets) generated by Shape Key CS",
        );
        self.ini.add_section(shapekey_data_ref, SKELETON_RESOURCES_GROUP)?;

        let mut merged_skeleton = IniSection::resource("MergedSkeletonRW").with_comment(
            "Stores merged skeleton consisting of bones from all components, allows to make VG weights global",
        );
        merged_skeleton
            .body_mut()
            .add_comment("Contains up to 256 bones")
            .add_command("type = RWBuffer")
            .add_command("format = R32G32B32A32_FLOAT")
            .add_comment("256 bones, 3 elements per bone, 4 floats per element")
            .add_command("array = 768");
        self.ini.add_section(merged_skeleton, SKELETON_RESOURCES_GROUP)?;

        Ok(())
    }

    fn make_autogenerated_group(&mut self, export: &ModExport) {
        let info = &export.mod_info;
        let footer = format!(
            "\n\
             ; Autogenerated -------------------------\n\
             \n\
             ; This mod.ini was automatically generated by WWMI Tools Blender addon v{} and requires WWMI v{}+ to function\n\
             ; WWMI Link: https://gamebanana.com/mods/xxxxxx\n\
             ; WWMI GitHub: https://github.com/SpectrumQT/WWMI\n\
             ; WWMI Tools Link: https://gamebanana.com/mods/xxxxxx\n\
             ; WWMI Tools GitHub: https://github.com/SpectrumQT/WWMI_Tools\n\
             ; AGMG Modding Community Discord: https://discord.com/invite/agmg\n\
             \n",
            info.wwmi_tools_version, info.required_wwmi_version
        );
        self.ini.set_group_footer(SKELETON_RESOURCES_GROUP, footer);
    }
}
