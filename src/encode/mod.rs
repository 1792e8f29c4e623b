pub mod geometry;
pub mod material;

use serde::Deserialize;
use thiserror::Error;

use crate::core::mesh::Model;
use crate::core::shared::ConfigType;
use crate::core::text_writer::TextWriter;

pub use geometry::{write_material_library, write_material_library_name, write_model, write_sub_mesh};
pub use material::{write_material, write_model_materials, TextureOptions};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Directory prepended to every texture path.
    #[serde(default)]
    pub texture_root: Option<String>,
    /// Suffix appended verbatim to every texture path, e.g. `".dds"`.
    #[serde(default)]
    pub texture_ext: Option<String>,
    /// Replace spaces in texture file names with underscores.
    #[serde(default = "enabled")]
    pub sanitize_paths: bool,
    /// Reject sub-meshes with dangling or incomplete triangles before writing them.
    #[serde(default = "enabled")]
    pub validate: bool,
}

fn enabled() -> bool {
    true
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            texture_root: None,
            texture_ext: None,
            sanitize_paths: true,
            validate: true,
        }
    }
}

impl Config {
    pub fn with_texture_root(mut self, root: impl Into<String>) -> Self {
        self.texture_root = Some(root.into());
        self
    }

    pub fn with_texture_ext(mut self, ext: impl Into<String>) -> Self {
        self.texture_ext = Some(ext.into());
        self
    }

    pub fn with_sanitize_paths(mut self, sanitize_paths: bool) -> Self {
        self.sanitize_paths = sanitize_paths;
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn texture_options(&self) -> TextureOptions<'_> {
        TextureOptions {
            root: self.texture_root.as_deref(),
            ext: self.texture_ext.as_deref(),
            sanitize_paths: self.sanitize_paths,
        }
    }
}

#[remain::sorted]
#[derive(Error, Debug)]
pub enum Err {
    #[error("Geometry error: {0}")]
    GeometryError(#[from] geometry::Err),
    #[error("Material error: {0}")]
    MaterialError(#[from] material::Err),
}


/// Dumps a model as obj geometry and its mtl material library.
///
/// The `mtllib` reference to `library_name` is written first, followed by every
/// sub-mesh; the materials then go to `material_writer`. Nothing is rolled back
/// on failure, so the caller should discard both outputs if an error is returned.
pub fn dump<G, M>(
    model: &Model,
    library_name: &str,
    geometry_writer: &mut G,
    material_writer: &mut M,
    cfg: &Config
) -> Result<(), Err>
    where G: TextWriter, M: TextWriter
{
    geometry::write_material_library(geometry_writer, library_name)?;
    let num_vertices = geometry::write_model(geometry_writer, model, cfg.validate)?;

    let written = material::write_model_materials(material_writer, model, &cfg.texture_options())?;

    log::debug!(
        "Dumped {} sub-meshes ({} vertices) and {} materials ({} bytes)",
        model.sub_meshes.len(), num_vertices, model.materials.len(), written
    );
    Ok(())
}
