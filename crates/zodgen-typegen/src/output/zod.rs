//! Zod source rendering.
//!
//! Every declaration renders as an exported schema binding followed by an
//! exported `z.infer` type alias:
//!
//! ```text
//! export const RoleSchema = z.enum(['ADMIN', 'USER']);
//! export type Role = z.infer<typeof RoleSchema>;
//! ```

use crate::ir::{Decl, DeclKind, Expr, Literal, schema_ident};
use std::fmt::Write;

/// The library import every generated file starts with.
pub const ZOD_IMPORT: &str = "import { z } from 'zod';";

/// Render a single validator expression.
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::String => out.push_str("z.string()"),
        Expr::Int => out.push_str("z.number().int()"),
        Expr::Number => out.push_str("z.number()"),
        Expr::Boolean => out.push_str("z.boolean()"),
        Expr::Date { coerce: true } => out.push_str("z.coerce.date()"),
        Expr::Date { coerce: false } => out.push_str("z.date()"),
        Expr::BigInt => out.push_str("z.bigint()"),
        Expr::Unknown => out.push_str("z.unknown()"),
        Expr::InstanceOf(class) => {
            let _ = write!(out, "z.instanceof({class})");
        }
        Expr::Ref(name) => out.push_str(&schema_ident(name)),
        Expr::Array(inner) => {
            out.push_str("z.array(");
            write_expr(out, inner);
            out.push(')');
        }
        Expr::Nullable(inner) => {
            write_expr(out, inner);
            out.push_str(".nullable()");
        }
        Expr::Default(inner, literal) => {
            write_expr(out, inner);
            out.push_str(".default(");
            write_literal(out, literal);
            out.push(')');
        }
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    let _ = match literal {
        Literal::String(s) => write!(out, "'{s}'"),
        Literal::Raw(s) => write!(out, "{s}"),
        Literal::BigInt(s) => write!(out, "BigInt({s})"),
    };
}

/// Render a declaration as a schema binding plus inferred type alias.
///
/// The result has no trailing newline.
pub fn render_decl(decl: &Decl) -> String {
    let ident = decl.schema_ident();
    let mut out = String::new();

    let _ = write!(out, "export const {ident} = ");
    match &decl.kind {
        DeclKind::Enum(values) => {
            let values: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
            let _ = write!(out, "z.enum([{}])", values.join(", "));
        }
        DeclKind::Object(properties) => {
            out.push_str("z.object({\n");
            for p in properties {
                let _ = writeln!(out, "  {}: {},", p.name, render_expr(&p.expr));
            }
            out.push_str("})");
        }
    }
    out.push_str(";\n");

    let _ = write!(
        out,
        "export type {} = z.infer<typeof {ident}>;",
        decl.name
    );
    out
}

/// `import { RoleSchema } from './Role';`
pub fn render_schema_import(name: &str) -> String {
    format!("import {{ {} }} from './{name}';", schema_ident(name))
}

/// `export * from './Role';`
pub fn render_reexport(name: &str) -> String {
    format!("export * from './{name}';")
}
