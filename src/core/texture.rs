use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::core::material::MaterialVariable;

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Unknown texture slot: {0:?}")]
    UnknownTextureSlot(String),
}

/// A texture role a unit shader samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Team,
    Dirt,
    BadgeSecondary,
    BadgePrimary,
    Normal,
    Diffuse,
    Emissive,
    Specular,
    Occlusion,
    Gloss,
}

/// Every slot paired with its property name in the material chunk.
const SLOT_TABLE: [(TextureSlot, &str); 10] = [
    (TextureSlot::Team, "teamTex"),
    (TextureSlot::Dirt, "dirtTex"),
    (TextureSlot::BadgeSecondary, "badge2Tex"),
    (TextureSlot::BadgePrimary, "badge1Tex"),
    (TextureSlot::Normal, "normalMap"),
    (TextureSlot::Diffuse, "diffuseTex"),
    (TextureSlot::Emissive, "emissiveTex"),
    (TextureSlot::Specular, "specularTex"),
    (TextureSlot::Occlusion, "occlusionTex"),
    (TextureSlot::Gloss, "glossTex"),
];

lazy_static! {
    static ref SLOTS_BY_NAME: HashMap<&'static str, TextureSlot> = SLOT_TABLE.iter()
        .map(|&(slot, name)| (name, slot))
        .collect();
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 10] = [
        TextureSlot::Team,
        TextureSlot::Dirt,
        TextureSlot::BadgeSecondary,
        TextureSlot::BadgePrimary,
        TextureSlot::Normal,
        TextureSlot::Diffuse,
        TextureSlot::Emissive,
        TextureSlot::Specular,
        TextureSlot::Occlusion,
        TextureSlot::Gloss,
    ];

    /// The property name that identifies this slot in a material variable.
    pub fn wire_name(self) -> &'static str {
        // `SLOT_TABLE` lists the variants in declaration order.
        SLOT_TABLE[self as usize].1
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        SLOTS_BY_NAME.get(name).copied()
    }
}

impl FromStr for TextureSlot {
    type Err = Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_name(s).ok_or_else(|| Err::UnknownTextureSlot(s.to_string()))
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Lazily maps the texture variables of a material onto their slots.
///
/// Non-texture variables are skipped. Output order follows input order. A texture
/// variable whose property name is not a known slot yields `UnknownTextureSlot`.
pub fn extract<'a, I>(vars: I) -> impl Iterator<Item = Result<(TextureSlot, &'a str), Err>>
    where I: IntoIterator<Item = &'a MaterialVariable>,
{
    vars.into_iter()
        .filter(|var| var.is_texture())
        .map(|var| {
            var.property_name.parse::<TextureSlot>()
                .map(|slot| (slot, var.argument.as_str()))
        })
}
