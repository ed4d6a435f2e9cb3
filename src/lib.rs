//! NavChrome: reconciles a native navigation chrome against JSON
//! descriptions sent from a web layer.

pub mod bridge;
pub mod core;
pub mod render;
pub mod replay;

#[cfg(test)]
pub mod test_support;
