//! Zod validator generation from Prisma DMMF.
//!
//! # Architecture
//!
//! ```text
//! DMMF                 IR                 Output
//! ─────────────     ─────────────     ─────────────
//! DatamodelEnum ─┐                 ┌─> export const XSchema = z.enum([...])
//!                ├─> Decl ─────────┤
//! Model ─────────┘   (ir.rs)       └─> export const XSchema = z.object({...})
//!   └─ Field ──> map_field ──> Property / Diagnostic
//! ```
//!
//! # Example
//!
//! ```
//! use zodgen_dmmf::{Field, Model};
//! use zodgen_typegen::{LowerOptions, lower_model, render_decl};
//!
//! let model = Model::new("User", vec![
//!     Field::scalar("id", "Int"),
//!     Field::scalar("email", "String").optional(),
//! ]);
//!
//! let lowered = lower_model(&model, &LowerOptions::default());
//! let ts = render_decl(&lowered.decl);
//! assert!(ts.contains("email: z.string().nullable(),"));
//! ```

pub mod input;
pub mod ir;
pub mod output;

pub use input::{
    DefaultSkip, Diagnostic, DiagnosticKind, DropReason, LowerOptions, Lowered, MappedField,
    ScalarType, format_default, lower_enum, lower_model, map_field, map_scalar,
};
pub use ir::{Decl, DeclKind, Expr, Literal, Property, schema_ident};
pub use output::{ZOD_IMPORT, render_decl, render_expr, render_reexport, render_schema_import};
