use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::core::material::Material;
use crate::core::texture::{self, TextureSlot};

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Texture error: {0}")]
    TextureError(#[from] texture::Err),
    #[error("Unsupported shader: {0:?}")]
    UnsupportedShader(String),
}

/// The rendering techniques whose materials can be exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    Unit,
    Unit2Uv,
}

const SHADER_TABLE: [(ShaderVariant, &str); 2] = [
    (ShaderVariant::Unit, "dow2_unit"),
    (ShaderVariant::Unit2Uv, "dow2_unit_2uv"),
];

lazy_static! {
    static ref SHADERS_BY_NAME: HashMap<&'static str, ShaderVariant> = SHADER_TABLE.iter()
        .map(|&(variant, name)| (name, variant))
        .collect();
}

impl ShaderVariant {
    pub fn wire_name(self) -> &'static str {
        SHADER_TABLE[self as usize].1
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        SHADERS_BY_NAME.get(name).copied()
    }
}

impl FromStr for ShaderVariant {
    type Err = Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_name(s).ok_or_else(|| Err::UnsupportedShader(s.to_string()))
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Resolves the texture slots of a material according to its shader.
///
/// The shader is checked eagerly, so an unsupported shader fails before any
/// texture is produced. The slots themselves are extracted lazily.
pub fn resolve(material: &Material) -> Result<impl Iterator<Item = Result<(TextureSlot, &str), Err>>, Err> {
    let variant = material.shader_name.parse::<ShaderVariant>()?;
    log::trace!("{}: resolving textures for shader {}", material.name, variant);
    let textures = match variant {
        // Both unit shaders bind their textures the same way.
        ShaderVariant::Unit | ShaderVariant::Unit2Uv => texture::extract(&material.variables),
    };
    Ok(textures.map(|texture| texture.map_err(Err::from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::material::MaterialVariable;

    #[test]
    fn wire_names() {
        assert_eq!(ShaderVariant::Unit.wire_name(), "dow2_unit");
        assert_eq!(ShaderVariant::Unit2Uv.wire_name(), "dow2_unit_2uv");
        assert_eq!("dow2_unit_2uv".parse::<ShaderVariant>(), Ok(ShaderVariant::Unit2Uv));
        assert_eq!(ShaderVariant::Unit2Uv.to_string(), "dow2_unit_2uv");
        assert_eq!(SHADERS_BY_NAME.len(), SHADER_TABLE.len());
        for (variant, name) in SHADER_TABLE {
            assert_eq!(ShaderVariant::from_wire_name(name), Some(variant));
        }
        assert_eq!(ShaderVariant::from_wire_name("DOW2_UNIT"), None);
    }

    #[test]
    fn both_unit_shaders_resolve_identically() {
        let vars = vec![
            MaterialVariable::texture("diffuseTex", "tex/rifle_d"),
            MaterialVariable::texture("teamTex", "tex/rifle_t"),
        ];
        let unit = Material::new("weapon.rifle", "dow2_unit", vars.clone());
        let unit_2uv = Material::new("weapon.rifle", "dow2_unit_2uv", vars);

        let a = resolve(&unit).unwrap().collect::<Result<Vec<_>, _>>().unwrap();
        let b = resolve(&unit_2uv).unwrap().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec![
            (TextureSlot::Diffuse, "tex/rifle_d"),
            (TextureSlot::Team, "tex/rifle_t"),
        ]);
    }

    #[test]
    fn unsupported_shader_fails_eagerly() {
        let material = Material::new(
            "terrain.rock",
            "dow2_terrain",
            vec![MaterialVariable::texture("diffuseTex", "tex/rock")]
        );
        let result = resolve(&material);
        match result {
            Err(Err::UnsupportedShader(name)) => assert_eq!(name, "dow2_terrain"),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("shader should have been rejected"),
        }
    }

    #[test]
    fn unknown_slot_propagates() {
        let material = Material::new("a.b", "dow2_unit", vec![MaterialVariable::texture("fooTex", "x")]);
        let err = resolve(&material).unwrap().next().unwrap().unwrap_err();
        assert_eq!(err, Err::TextureError(texture::Err::UnknownTextureSlot("fooTex".to_string())));
    }
}
