pub mod document;
pub mod engine;
pub mod mappings;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod scanner;

pub use crate::domain::model::{DiagramResult, Edge, Node, ResourceBlock, TerraformFile};
pub use crate::domain::ports::{ConfigProvider, FileHandler, Pipeline, Storage};
pub use crate::utils::error::Result;
