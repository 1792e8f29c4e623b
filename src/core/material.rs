use serde::{Deserialize, Serialize};

/// The value kind of a material variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialVarType {
    Int,
    Float,
    Bool,
    Vector2,
    Vector3,
    Vector4,
    Matrix4,
    String,
    Texture,
}

/// A single shader parameter of a material.
///
/// For `Texture` variables `property_name` names the slot and `argument` holds
/// the texture path; for other kinds `argument` holds the value as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialVariable {
    pub var_type: MaterialVarType,
    pub property_name: String,
    pub argument: String,
}

impl MaterialVariable {
    pub fn new(var_type: MaterialVarType, property_name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            var_type,
            property_name: property_name.into(),
            argument: argument.into(),
        }
    }

    pub fn texture(property_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(MaterialVarType::Texture, property_name, path)
    }

    pub fn is_texture(&self) -> bool {
        self.var_type == MaterialVarType::Texture
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub shader_name: String,
    #[serde(default)]
    pub variables: Vec<MaterialVariable>,
}

impl Material {
    pub fn new(name: impl Into<String>, shader_name: impl Into<String>, variables: Vec<MaterialVariable>) -> Self {
        Self {
            name: name.into(),
            shader_name: shader_name.into(),
            variables,
        }
    }
}
