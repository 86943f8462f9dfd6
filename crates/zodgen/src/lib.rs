//! Prisma generator that emits Zod validation schemas.
//!
//! Reads a Prisma datamodel (DMMF), lowers every enum and model through
//! [`zodgen_typegen`], and writes TypeScript either as a single `index.ts`
//! or as one file per entity plus an index of re-exports.
//!
//! ```no_run
//! use zodgen::{Config, generate};
//!
//! let datamodel = zodgen_dmmf::parse_datamodel(&std::fs::read_to_string("dmmf.json")?)?;
//! let plan = generate::generate(&datamodel, &Config::default())?;
//! for d in &plan.diagnostics {
//!     eprintln!("{d}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod protocol;

pub use config::{Config, RawConfig};
pub use error::{Error, Result};
pub use generate::{OutputFile, Plan, plan, write};
