use crate::core::text_writer::{Err, TextWriter};

/// Writes single mtl directives into a text sink. Each method returns the
/// number of bytes written.
pub struct MtlWriter<'w, W: TextWriter> {
    writer: &'w mut W,
}

impl<'w, W: TextWriter> MtlWriter<'w, W> {
    pub fn new(writer: &'w mut W) -> Self {
        Self { writer }
    }

    /// Opens a new material block. Every exported material gets one, even when
    /// none of its textures can be expressed in mtl.
    pub fn write_default_texture(&mut self, name: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("newmtl {}", name))
    }

    pub fn write_texture_diffuse(&mut self, path: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("map_Kd {}", path))
    }

    pub fn write_texture_alpha(&mut self, path: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("map_d {}", path))
    }

    pub fn write_texture_normal(&mut self, path: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("map_Bump {}", path))
    }

    pub fn write_texture_specular(&mut self, path: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("map_Ks {}", path))
    }

    pub fn write_texture_emissive(&mut self, path: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("map_Ke {}", path))
    }

    /// Records a texture mtl has no directive for, as a comment.
    pub fn write_unsupported_texture(&mut self, path: &str, label: &str) -> Result<usize, Err> {
        self.writer.write_line(&format!("# Unsupported {} texture: {}", label, path))
    }
}
