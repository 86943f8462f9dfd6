//! Output rendering.
//!
//! Takes IR [`Decl`](crate::ir::Decl)s and produces TypeScript source.

pub mod zod;

pub use zod::{ZOD_IMPORT, render_decl, render_expr, render_reexport, render_schema_import};
