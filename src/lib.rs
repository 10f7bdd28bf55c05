mod color;
mod consts;
pub mod diagnostics;
mod vector4;

#[cfg(test)]
mod layout_verify;

pub use color::LinearColor;
pub use consts::{KINDA_SMALL_NUMBER, SMALL_NUMBER};
pub use vector4::{dot3, dot4, ParseVector4Error, Vector4};
