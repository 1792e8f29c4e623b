/// Line-level emitters for Wavefront obj geometry.
pub mod obj;

/// Line-level emitters for Wavefront mtl material libraries.
pub mod mtl;

/// Reads a parsed model handed over as json.
pub mod json;
