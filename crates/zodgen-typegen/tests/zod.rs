//! Integration tests for zodgen-typegen.

use zodgen_dmmf::{Datamodel, parse_datamodel};
use zodgen_typegen::{
    DiagnosticKind, DropReason, LowerOptions, lower_enum, lower_model, render_decl,
};

fn load_fixture(name: &str) -> Datamodel {
    let path = format!("tests/fixtures/{}.json", name);
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} not found", name));
    parse_datamodel(&content).expect("invalid DMMF")
}

fn model_output(datamodel: &Datamodel, name: &str, options: &LowerOptions) -> String {
    let model = datamodel
        .models
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("model {} not in fixture", name));
    render_decl(&lower_model(model, options).decl)
}

// === Enums ===

#[test]
fn enum_post_status() {
    let datamodel = load_fixture("blog");
    let output = render_decl(&lower_enum(&datamodel.enums[1]));

    insta::assert_snapshot!(output, @r#"
export const PostStatusSchema = z.enum(['DRAFT', 'PUBLISHED', 'ARCHIVED']);
export type PostStatus = z.infer<typeof PostStatusSchema>;
"#);
}

// === Models ===

#[test]
fn model_user() {
    let datamodel = load_fixture("blog");
    let output = model_output(&datamodel, "User", &LowerOptions::default());

    insta::assert_snapshot!(output, @r#"
export const UserSchema = z.object({
  id: z.number().int(),
  email: z.string(),
  name: z.string().nullable(),
  role: RoleSchema.default('USER'),
  balance: z.bigint().default(BigInt(0)),
  avatar: z.instanceof(Uint8Array).nullable(),
  createdAt: z.coerce.date(),
});
export type User = z.infer<typeof UserSchema>;
"#);
}

#[test]
fn model_post() {
    let datamodel = load_fixture("blog");
    let output = model_output(&datamodel, "Post", &LowerOptions::default());

    insta::assert_snapshot!(output, @r#"
export const PostSchema = z.object({
  id: z.string(),
  title: z.string().default('Untitled'),
  status: PostStatusSchema.nullable(),
  tags: z.array(z.string()),
  rating: z.number().default(2.5),
  published: z.boolean().default(false),
  price: z.string().nullable(),
  metadata: z.unknown().nullable(),
  publishedAt: z.coerce.date().nullable(),
  authorId: z.number().int(),
  previousStatus: z.array(PostStatusSchema).nullable(),
});
export type Post = z.infer<typeof PostSchema>;
"#);
}

#[test]
fn model_post_strict_dates() {
    let datamodel = load_fixture("blog");
    let output = model_output(&datamodel, "Post", &LowerOptions { coerce_date: false });

    assert!(output.contains("  publishedAt: z.date().nullable(),\n"));
    assert!(!output.contains("coerce"));
}

#[test]
fn model_post_references_enum_once() {
    let datamodel = load_fixture("blog");
    let post = &datamodel.models[1];
    let lowered = lower_model(post, &LowerOptions::default());

    assert_eq!(lowered.decl.refs(), vec!["PostStatus"]);
}

// === Diagnostics ===

#[test]
fn relation_fields_are_reported() {
    let datamodel = load_fixture("blog");
    let dropped: Vec<(String, String)> = datamodel
        .models
        .iter()
        .flat_map(|m| lower_model(m, &LowerOptions::default()).diagnostics)
        .filter(|d| matches!(d.kind, DiagnosticKind::Dropped(DropReason::Relation(_))))
        .map(|d| (d.model, d.field))
        .collect();

    assert_eq!(
        dropped,
        vec![
            ("User".to_string(), "posts".to_string()),
            ("Post".to_string(), "author".to_string()),
        ]
    );
}

#[test]
fn generated_defaults_are_reported() {
    let datamodel = load_fixture("blog");
    let skipped: Vec<String> = datamodel
        .models
        .iter()
        .flat_map(|m| lower_model(m, &LowerOptions::default()).diagnostics)
        .filter(|d| matches!(d.kind, DiagnosticKind::DefaultSkipped(_)))
        .map(|d| d.to_string())
        .collect();

    assert_eq!(
        skipped,
        vec![
            "User.id: generated default autoincrement() not inlined",
            "User.createdAt: generated default now() not inlined",
            "Post.id: generated default uuid() not inlined",
        ]
    );
}
