use std::path::{Path, PathBuf};

use crate::core::mesh::{Model, SubMesh};
use crate::core::text_writer::{self, TextWriter};
use crate::io::obj::ObjWriter;
use crate::utils::path::sibling_material_library;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Face index {index} is out of range for a sub-mesh with {num_vertices} vertices")]
    IndexOutOfRange { index: u32, num_vertices: usize },
    #[error("Invalid library path: {0:?}")]
    InvalidLibraryPath(PathBuf),
    #[error("Index count {0} is not a multiple of 3")]
    NonTriangulated(usize),
    #[error("Writer error: {0}")]
    WriterError(#[from] text_writer::Err),
}

/// Writes the `mtllib` reference for the library that sits next to `obj_path`
/// and returns that library's path, so the caller can create it.
pub fn write_material_library_name<W>(writer: &mut W, obj_path: &Path) -> Result<PathBuf, Err>
    where W: TextWriter
{
    let library_path = sibling_material_library(obj_path);
    let file_name = library_path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Err::InvalidLibraryPath(library_path.clone()))?;
    ObjWriter::new(writer).write_material_library(file_name)?;
    Ok(library_path)
}

/// Writes the `mtllib` reference for a library path chosen by the caller.
pub fn write_material_library<W>(writer: &mut W, library_path: &str) -> Result<(), Err>
    where W: TextWriter
{
    ObjWriter::new(writer).write_material_library(library_path)?;
    Ok(())
}

/// Derives the object label from a material name such as `"weapon.rifle"`.
/// Names without a `.`, or ending in one, are used whole.
pub(crate) fn object_name(material_name: &str) -> &str {
    match material_name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => suffix,
        _ => material_name,
    }
}

fn validate_sub_mesh(mesh: &SubMesh) -> Result<(), Err> {
    if mesh.indices.len() % 3 != 0 {
        return Err(Err::NonTriangulated(mesh.indices.len()));
    }
    let num_vertices = mesh.num_vertices();
    if let Some(&index) = mesh.indices.iter().find(|&&idx| idx as usize >= num_vertices) {
        return Err(Err::IndexOutOfRange { index, num_vertices });
    }
    Ok(())
}

/// Writes one sub-mesh as an obj object and returns the vertex offset for the next one.
///
/// Face indices are global: local index `k` is written as `vertex_offset + k + 1`,
/// so every sub-mesh occupies its own contiguous block of the stream's vertex list.
pub fn write_sub_mesh<W>(
    writer: &mut W,
    mesh: &SubMesh,
    name: Option<&str>,
    vertex_offset: usize,
    validate: bool
) -> Result<usize, Err>
    where W: TextWriter
{
    if validate {
        validate_sub_mesh(mesh)?;
    }
    let name = name.unwrap_or_else(|| object_name(&mesh.material_name));
    log::debug!(
        "Writing sub-mesh {:?}: {} vertices, {} faces, offset {}",
        name, mesh.num_vertices(), mesh.num_faces(), vertex_offset
    );

    let mut obj = ObjWriter::new(writer);
    obj.write_raw("\n")?;
    obj.write_comment("Object")?;
    obj.write_object_name(name)?;

    obj.write_raw("\t")?;
    obj.write_comment("Vertexes")?;
    for v in &mesh.vertices {
        obj.write_raw("\t")?;
        obj.write_vertex_position(v.position[0], v.position[1], v.position[2])?;
        obj.write_raw("\t")?;
        obj.write_vertex_normal(v.normal[0], v.normal[1], v.normal[2])?;
        obj.write_raw("\t")?;
        obj.write_vertex_uv(v.uv[0], v.uv[1])?;
        obj.write_raw("\n")?;
    }

    obj.write_comment("Material")?;
    obj.write_use_material(&mesh.material_name)?;

    obj.write_raw("\t")?;
    obj.write_comment("Indexes")?;
    for [i, j, k] in mesh.faces() {
        obj.write_raw("\t")?;
        obj.write_index_face(i, j, k, vertex_offset, true)?;
    }

    Ok(vertex_offset + mesh.num_vertices())
}

/// Writes every sub-mesh of the model in order and returns the total vertex count.
pub fn write_model<W>(writer: &mut W, model: &Model, validate: bool) -> Result<usize, Err>
    where W: TextWriter
{
    model.sub_meshes.iter()
        .try_fold(0, |offset, mesh| write_sub_mesh(writer, mesh, None, offset, validate))
}
