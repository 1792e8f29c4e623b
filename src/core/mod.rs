/// Vertices, trim data and the model that owns them.
pub mod mesh;

/// Material records and their variables.
pub mod material;

/// Texture slots and the variable-to-slot mapping.
pub mod texture;

/// Supported shader variants and texture resolution per shader.
pub mod shader;

/// Text sinks the obj and mtl writers append to.
pub mod text_writer;

pub mod shared;
