//! Format implementations

pub mod json;
pub mod python;
pub mod yaml;

pub use json::JsonFormat;
pub use python::PythonFormat;
pub use yaml::YamlFormat;
