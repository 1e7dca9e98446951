pub mod mermaid;

pub use mermaid::{render_document, render_graph};
