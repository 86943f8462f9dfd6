//! Generation of output files from a datamodel.
//!
//! [`plan`] decides every file's path and contents without touching the
//! filesystem; [`write`] then materializes the plan. Existing files at the
//! planned paths are overwritten.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use zodgen_dmmf::Datamodel;
use zodgen_typegen::{
    Diagnostic, LowerOptions, ZOD_IMPORT, lower_enum, lower_model, render_decl, render_reexport,
    render_schema_import,
};

/// File stem of the combined output (single-file mode) or re-export index.
pub const INDEX_STEM: &str = "index";
pub const EXTENSION: &str = "ts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything a run will write, plus what was left out of it.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Output directory, created before writing.
    pub root: PathBuf,
    pub files: Vec<OutputFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Plan {
    pub fn file(&self, stem: &str) -> Option<&OutputFile> {
        let path = file_path(&self.root, stem);
        self.files.iter().find(|f| f.path == path)
    }
}

fn file_path(root: &Path, stem: &str) -> PathBuf {
    root.join(format!("{stem}.{EXTENSION}"))
}

pub fn plan(datamodel: &Datamodel, config: &Config) -> Plan {
    if config.create_input_types {
        tracing::warn!("createInputTypes has no effect, input schemas are not generated");
    }

    let options = config.lower_options();
    if config.multiple_files {
        plan_multiple_files(datamodel, &config.output, &options)
    } else {
        plan_single_file(datamodel, &config.output, &options)
    }
}

/// Import line, then every enum, then every model, each followed by a blank line.
fn plan_single_file(datamodel: &Datamodel, root: &Path, options: &LowerOptions) -> Plan {
    let mut diagnostics = Vec::new();
    let mut lines = vec![ZOD_IMPORT.to_string(), String::new()];

    for def in &datamodel.enums {
        lines.push(render_decl(&lower_enum(def)));
        lines.push(String::new());
    }

    for model in &datamodel.models {
        let lowered = lower_model(model, options);
        lines.push(render_decl(&lowered.decl));
        lines.push(String::new());
        diagnostics.extend(lowered.diagnostics);
    }

    Plan {
        root: root.to_path_buf(),
        files: vec![OutputFile {
            path: file_path(root, INDEX_STEM),
            contents: lines.join("\n"),
        }],
        diagnostics,
    }
}

/// One file per enum and model, plus an index re-exporting all of them.
fn plan_multiple_files(datamodel: &Datamodel, root: &Path, options: &LowerOptions) -> Plan {
    let enum_names = datamodel.enum_names();
    let mut files = Vec::new();
    let mut diagnostics = Vec::new();
    let mut exports = Vec::new();

    for def in &datamodel.enums {
        files.push(OutputFile {
            path: file_path(root, &def.name),
            contents: format!("{ZOD_IMPORT}\n\n{}\n", render_decl(&lower_enum(def))),
        });
        exports.push(render_reexport(&def.name));
    }

    for model in &datamodel.models {
        let lowered = lower_model(model, options);

        let mut imports = vec![ZOD_IMPORT.to_string()];
        for name in lowered.decl.refs() {
            if !enum_names.contains(name) {
                tracing::warn!(
                    "{}: enum {name} is not declared in the datamodel",
                    model.name
                );
            }
            imports.push(render_schema_import(name));
        }

        files.push(OutputFile {
            path: file_path(root, &model.name),
            contents: format!(
                "{}\n\n{}\n",
                imports.join("\n"),
                render_decl(&lowered.decl)
            ),
        });
        exports.push(render_reexport(&model.name));
        diagnostics.extend(lowered.diagnostics);
    }

    let mut index = exports.join("\n");
    index.push('\n');
    files.push(OutputFile {
        path: file_path(root, INDEX_STEM),
        contents: index,
    });

    Plan {
        root: root.to_path_buf(),
        files,
        diagnostics,
    }
}

/// Create the output directory and write every planned file.
pub fn write(plan: &Plan) -> Result<()> {
    std::fs::create_dir_all(&plan.root).map_err(|source| Error::CreateDir {
        path: plan.root.clone(),
        source,
    })?;

    for file in &plan.files {
        std::fs::write(&file.path, &file.contents).map_err(|source| Error::Write {
            path: file.path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", file.path.display());
    }
    Ok(())
}

/// Plan and write in one step.
pub fn generate(datamodel: &Datamodel, config: &Config) -> Result<Plan> {
    let plan = plan(datamodel, config);
    write(&plan)?;
    tracing::info!(
        "generated {} file(s) in {} ({} field(s) or default(s) left out)",
        plan.files.len(),
        plan.root.display(),
        plan.diagnostics.len()
    );
    Ok(plan)
}
