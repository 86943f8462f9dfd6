//! Intermediate representation for generated validators.
//!
//! DMMF input is lowered into [`Decl`]s before rendering, so the mapping
//! decisions (which validator, which wrappers, which default) can be tested
//! without looking at text layout.

/// Suffix appended to an entity name to form its schema binding.
pub const SCHEMA_SUFFIX: &str = "Schema";

/// Name of the schema binding for an entity, e.g. `User` -> `UserSchema`.
pub fn schema_ident(name: &str) -> String {
    format!("{name}{SCHEMA_SUFFIX}")
}

/// A validator expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    // Primitives
    String,
    Int,
    Number,
    Boolean,
    /// `coerce` accepts date-like strings and numbers, otherwise a `Date` is required.
    Date { coerce: bool },
    BigInt,
    Unknown,
    /// Instance check against a runtime class, e.g. `Uint8Array`.
    InstanceOf(String),

    /// Reference to another entity's schema binding, by entity name.
    Ref(String),

    // Wrappers
    Array(Box<Expr>),
    Nullable(Box<Expr>),
    Default(Box<Expr>, Literal),
}

/// A statically renderable default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Rendered single-quoted.
    String(String),
    /// Numbers and booleans, rendered as-is.
    Raw(String),
    /// Rendered as a `BigInt(...)` constructor call.
    BigInt(String),
}

impl Expr {
    pub fn array(self) -> Self {
        Expr::Array(Box::new(self))
    }

    pub fn nullable(self) -> Self {
        Expr::Nullable(Box::new(self))
    }

    pub fn with_default(self, literal: Literal) -> Self {
        Expr::Default(Box::new(self), literal)
    }

    /// Entity names referenced by this expression, outermost first.
    pub fn refs(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_refs(&mut out);
        out
    }

    fn collect_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Ref(name) => out.push(name),
            Expr::Array(inner) | Expr::Nullable(inner) | Expr::Default(inner, _) => {
                inner.collect_refs(out)
            }
            _ => {}
        }
    }
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub expr: Expr,
}

impl Property {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            expr,
        }
    }
}

/// A top-level declaration: a schema binding plus its inferred type alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub name: String,
    pub kind: DeclKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// Enumerated string literals, in declaration order.
    Enum(Vec<String>),
    /// Object with properties, in declaration order.
    Object(Vec<Property>),
}

impl Decl {
    pub fn enumeration(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Enum(values),
        }
    }

    pub fn object(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Object(properties),
        }
    }

    pub fn schema_ident(&self) -> String {
        schema_ident(&self.name)
    }

    /// Distinct entity names referenced by the properties, first occurrence first.
    pub fn refs(&self) -> Vec<&str> {
        let DeclKind::Object(properties) = &self.kind else {
            return Vec::new();
        };
        let mut out: Vec<&str> = Vec::new();
        for name in properties.iter().flat_map(|p| p.expr.refs()) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}
