//! Lowering from DMMF to the validator IR.
//!
//! Fields that cannot be expressed are dropped rather than failing the
//! model; every drop is reported as a [`Diagnostic`].

pub mod default;
pub mod field;
pub mod scalar;

pub use default::{DefaultSkip, format_default};
pub use field::{DropReason, MappedField, map_field};
pub use scalar::{ScalarType, map_scalar};

use crate::ir::Decl;
use std::fmt;
use zodgen_dmmf::{DatamodelEnum, Model};

/// Options that affect lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerOptions {
    /// Use `z.coerce.date()` instead of `z.date()` for `DateTime`.
    pub coerce_date: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self { coerce_date: true }
    }
}

/// Something excluded from the output for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub model: String,
    pub field: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The whole field was left out.
    Dropped(DropReason),
    /// The field was kept without its default.
    DefaultSkipped(DefaultSkip),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Dropped(reason) => {
                write!(f, "{}.{}: dropped, {}", self.model, self.field, reason)
            }
            DiagnosticKind::DefaultSkipped(skip) => {
                write!(f, "{}.{}: {} not inlined", self.model, self.field, skip)
            }
        }
    }
}

/// A lowered model and what was left out of it.
#[derive(Debug, Clone)]
pub struct Lowered {
    pub decl: Decl,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn lower_enum(def: &DatamodelEnum) -> Decl {
    Decl::enumeration(
        def.name.clone(),
        def.values.iter().map(|v| v.name.clone()).collect(),
    )
}

pub fn lower_model(model: &Model, options: &LowerOptions) -> Lowered {
    let mut properties = Vec::new();
    let mut diagnostics = Vec::new();

    for field in &model.fields {
        let diagnostic = |kind| Diagnostic {
            model: model.name.clone(),
            field: field.name.clone(),
            kind,
        };

        match map_field(field, options.coerce_date) {
            Ok(mapped) => {
                if let Some(skip) = mapped.skipped_default {
                    diagnostics.push(diagnostic(DiagnosticKind::DefaultSkipped(skip)));
                }
                properties.push(mapped.property);
            }
            Err(reason) => diagnostics.push(diagnostic(DiagnosticKind::Dropped(reason))),
        }
    }

    for d in &diagnostics {
        tracing::debug!("{d}");
    }

    Lowered {
        decl: Decl::object(model.name.clone(), properties),
        diagnostics,
    }
}
