use crate::core::material::Material;
use crate::core::mesh::Model;
use crate::core::shader;
use crate::core::text_writer::{self, TextWriter};
use crate::core::texture::TextureSlot;
use crate::io::mtl::MtlWriter;
use crate::utils::path::{sanitize_file_name, texture_path};

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Shader error in material {material:?}: {source}")]
    ShaderError { material: String, source: shader::Err },
    #[error("Writer error: {0}")]
    WriterError(#[from] text_writer::Err),
}

/// How a texture slot is expressed in mtl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlotDirective {
    /// `map_Kd` followed by `map_d` for the same file.
    DiffuseWithAlpha,
    Normal,
    Specular,
    Emissive,
    /// No mtl equivalent; kept as a labelled comment.
    Unsupported(&'static str),
}

impl SlotDirective {
    pub(crate) fn for_slot(slot: TextureSlot) -> Self {
        match slot {
            TextureSlot::Diffuse => Self::DiffuseWithAlpha,
            TextureSlot::Normal => Self::Normal,
            TextureSlot::Specular => Self::Specular,
            TextureSlot::Emissive => Self::Emissive,
            TextureSlot::Team => Self::Unsupported("Team"),
            TextureSlot::Dirt => Self::Unsupported("Dirt"),
            TextureSlot::BadgePrimary => Self::Unsupported("Badge 1"),
            TextureSlot::BadgeSecondary => Self::Unsupported("Badge 2"),
            TextureSlot::Occlusion => Self::Unsupported("Occlusion"),
            TextureSlot::Gloss => Self::Unsupported("Gloss"),
        }
    }

    fn write_to<W>(self, writer: &mut MtlWriter<'_, W>, path: &str) -> Result<usize, text_writer::Err>
        where W: TextWriter
    {
        match self {
            Self::DiffuseWithAlpha => Ok(writer.write_texture_diffuse(path)? + writer.write_texture_alpha(path)?),
            Self::Normal => writer.write_texture_normal(path),
            Self::Specular => writer.write_texture_specular(path),
            Self::Emissive => writer.write_texture_emissive(path),
            Self::Unsupported(label) => writer.write_unsupported_texture(path, label),
        }
    }
}

/// Where textures are looked up and how their paths are rewritten.
#[derive(Clone, Copy, Debug)]
pub struct TextureOptions<'a> {
    pub root: Option<&'a str>,
    pub ext: Option<&'a str>,
    pub sanitize_paths: bool,
}

impl Default for TextureOptions<'_> {
    fn default() -> Self {
        Self {
            root: None,
            ext: None,
            sanitize_paths: true,
        }
    }
}

impl TextureOptions<'_> {
    pub(crate) fn resolve_path(&self, path: &str) -> String {
        let full = texture_path(self.root, path, self.ext);
        if self.sanitize_paths {
            sanitize_file_name(&full)
        } else {
            full
        }
    }
}

/// Writes one material block and returns the number of bytes written.
///
/// The shader is checked before anything is written, so an unsupported shader
/// leaves the stream untouched. An unknown texture slot aborts the block after
/// the textures preceding it have been written.
pub fn write_material<W>(writer: &mut W, material: &Material, options: &TextureOptions<'_>) -> Result<usize, Err>
    where W: TextWriter
{
    let shader_err = |source| Err::ShaderError { material: material.name.clone(), source };
    let textures = shader::resolve(material).map_err(shader_err)?;

    let mut mtl = MtlWriter::new(writer);
    let mut written = mtl.write_default_texture(&material.name)?;
    for texture in textures {
        let (slot, path) = texture.map_err(shader_err)?;
        let path = options.resolve_path(path);
        let directive = SlotDirective::for_slot(slot);
        log::trace!("{}: {} -> {:?} {}", material.name, slot, directive, path);
        written += directive.write_to(&mut mtl, &path)?;
    }
    log::debug!("Wrote material {:?} ({} bytes)", material.name, written);
    Ok(written)
}

/// Writes every material of the model in order, stopping at the first failure.
pub fn write_model_materials<W>(writer: &mut W, model: &Model, options: &TextureOptions<'_>) -> Result<usize, Err>
    where W: TextWriter
{
    model.materials.iter()
        .try_fold(0, |written, material| write_material(writer, material, options).map(|n| written + n))
}
