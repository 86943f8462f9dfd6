//! Prisma scalar types.

use crate::ir::Expr;

/// The fixed set of Prisma scalar types with a validator mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    BigInt,
    Decimal,
    Json,
    Bytes,
}

impl ScalarType {
    pub const ALL: [ScalarType; 9] = [
        ScalarType::String,
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::Boolean,
        ScalarType::DateTime,
        ScalarType::BigInt,
        ScalarType::Decimal,
        ScalarType::Json,
        ScalarType::Bytes,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The type name as written in a Prisma schema.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::DateTime => "DateTime",
            ScalarType::BigInt => "BigInt",
            ScalarType::Decimal => "Decimal",
            ScalarType::Json => "Json",
            ScalarType::Bytes => "Bytes",
        }
    }

    pub fn expr(self, coerce_date: bool) -> Expr {
        match self {
            ScalarType::String => Expr::String,
            ScalarType::Int => Expr::Int,
            ScalarType::Float => Expr::Number,
            ScalarType::Boolean => Expr::Boolean,
            ScalarType::DateTime => Expr::Date {
                coerce: coerce_date,
            },
            ScalarType::BigInt => Expr::BigInt,
            // Kept as a string so no precision is lost.
            ScalarType::Decimal => Expr::String,
            ScalarType::Json => Expr::Unknown,
            ScalarType::Bytes => Expr::InstanceOf("Uint8Array".into()),
        }
    }
}

/// Map a declared type name to its validator, or `None` if it is not a scalar.
pub fn map_scalar(type_name: &str, coerce_date: bool) -> Option<Expr> {
    ScalarType::from_name(type_name).map(|t| t.expr(coerce_date))
}
