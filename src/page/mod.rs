//! Page generation: slug derivation, visualization binding, template
//! substitution, and final document assembly.

pub mod bind;
pub mod escape;
pub mod render;
pub mod slug;
pub mod template;
