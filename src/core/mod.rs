//! Format-neutral syntax tree shared by the adapters and the renderer.

pub mod ast;

pub use ast::{Ast, CellAlignment, NodeId, NodeKind, NodeVisitor, WalkStatus};
