use std::io::Read;

use crate::core::mesh::Model;

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("Json Error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Reads a model from a json document with `sub_meshes` and `materials` arrays.
pub fn load_model<R: Read>(reader: R) -> Result<Model, Err> {
    let model: Model = serde_json::from_reader(reader)?;
    log::debug!(
        "Loaded model with {} sub-meshes and {} materials",
        model.sub_meshes.len(),
        model.materials.len()
    );
    Ok(model)
}

pub fn load_model_from_str(json: &str) -> Result<Model, Err> {
    load_model(json.as_bytes())
}
