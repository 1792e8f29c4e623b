use crate::core::text_writer::{Err, TextWriter};

/// Writes single obj directives into a text sink. Each method emits exactly one
/// line and returns the number of bytes written.
pub struct ObjWriter<'w, W: TextWriter> {
    writer: &'w mut W,
}

impl<'w, W: TextWriter> ObjWriter<'w, W> {
    pub fn new(writer: &'w mut W) -> Self {
        Self { writer }
    }

    /// Writes text as-is, for comments and indentation around directives.
    pub fn write_raw(&mut self, text: &str) -> Result<usize, Err> {
        self.writer.write_text(text)
    }

    pub fn write_comment(&mut self, comment: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("# {}", comment))
    }

    pub fn write_material_library(&mut self, name: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("mtllib {}", name))
    }

    pub fn write_object_name(&mut self, name: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("o {}", name))
    }

    pub fn write_vertex_position(&mut self, x: f32, y: f32, z: f32) -> Result<usize, Err> {
        self.writer.write_line(&format!("v {} {} {}", x, y, z))
    }

    pub fn write_vertex_normal(&mut self, x: f32, y: f32, z: f32) -> Result<usize, Err> {
        self.writer.write_line(&format!("vn {} {} {}", x, y, z))
    }

    pub fn write_vertex_uv(&mut self, u: f32, v: f32) -> Result<usize, Err> {
        self.writer.write_line(&format!("vt {} {}", u, v))
    }

    pub fn write_use_material(&mut self, name: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("usemtl {}", name))
    }

    /// Writes a triangle whose corners reference the same position, uv and normal index.
    ///
    /// `offset` is added to every index; `zero_based` indices are shifted by one more,
    /// since obj indices start at 1.
    pub fn write_index_face(&mut self, i: u32, j: u32, k: u32, offset: usize, zero_based: bool) -> Result<usize, Err> {
        let base = offset + usize::from(zero_based);
        let [a, b, c] = [i, j, k].map(|idx| idx as usize + base);
        self.writer.write_line(&format!("f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}"))
    }
}
