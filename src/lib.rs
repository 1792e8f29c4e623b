// lib.rs

/// Contains the in-memory model, material and texture definitions, and the text sink.
pub mod core;

/// Contains the line-level writers for the obj and mtl formats, and the json model loader.
pub mod io;

/// Defines the geometry and material serializers and the dump entry point.
pub mod encode;

/// Contains the path helpers shared by the serializers.
pub(crate) mod utils;


/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::mesh::{Model, SubMesh, Vertex};
    pub use crate::core::material::{Material, MaterialVarType, MaterialVariable};
    pub use crate::core::texture::TextureSlot;
    pub use crate::core::shader::ShaderVariant;
    pub use crate::core::shared::ConfigType;
    pub use crate::core::text_writer::{
        TextWriter,
        StreamWriter,
        FunctionalTextWriter,
    };
    pub use crate::encode::{self, dump, Config};
}
