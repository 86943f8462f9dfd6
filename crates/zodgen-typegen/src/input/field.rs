//! Per-field validator selection.

use super::default::{DefaultSkip, format_default};
use super::scalar::map_scalar;
use crate::ir::{Expr, Property};
use std::fmt;
use zodgen_dmmf::{Field, FieldKind};

/// Why a field has no property in the generated object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Links to another model; carries the relation name.
    Relation(String),
    /// Neither a known scalar nor an enum; carries the declared type.
    UnsupportedType(String),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Relation(name) => write!(f, "relation field ({name})"),
            DropReason::UnsupportedType(ty) => write!(f, "unsupported type {ty}"),
        }
    }
}

/// A field that survived mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub property: Property,
    /// Set when the field declares a default that was not inlined.
    pub skipped_default: Option<DefaultSkip>,
}

/// Map one field to its property.
///
/// Wrapping is applied inside out: `z.array(..)` for lists, then
/// `.nullable()` for optional fields, then `.default(..)`.
pub fn map_field(field: &Field, coerce_date: bool) -> Result<MappedField, DropReason> {
    if field.is_relation() {
        return Err(DropReason::Relation(
            field.relation_name.clone().unwrap_or_default(),
        ));
    }

    let mut expr = if field.kind == FieldKind::Enum {
        Expr::Ref(field.type_name.clone())
    } else {
        map_scalar(&field.type_name, coerce_date)
            .ok_or_else(|| DropReason::UnsupportedType(field.type_name.clone()))?
    };

    if field.is_list {
        expr = expr.array();
    }

    // Optional fields accept null.
    if !field.is_required {
        expr = expr.nullable();
    }

    let mut skipped_default = None;
    if field.has_default_value {
        if let Some(raw) = &field.default {
            match format_default(raw, &field.type_name) {
                Ok(literal) => expr = expr.with_default(literal),
                Err(skip) => skipped_default = Some(skip),
            }
        }
    }

    Ok(MappedField {
        property: Property::new(field.name.clone(), expr),
        skipped_default,
    })
}
