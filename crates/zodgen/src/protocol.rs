//! Prisma generator protocol.
//!
//! Prisma runs the generator as a child process and exchanges one JSON-RPC
//! message per line: requests arrive on stdin, responses go to stderr.
//! Lines on stderr that are not JSON are treated by Prisma as log output.
//!
//! Supported methods:
//! - `getManifest` -> `{"manifest": {...}}`
//! - `generate` (params: generator options) -> `null` once files are written

use crate::config::{Config, DEFAULT_OUTPUT};
use crate::generate::generate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, BufRead, Write};

pub const PRETTY_NAME: &str = "Prisma to Zod";

/// JSON-RPC error code for generation failures.
pub const GENERATION_FAILED: i64 = -32000;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const PARSE_ERROR: i64 = -32700;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub pretty_name: String,
    pub default_output: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            pretty_name: PRETTY_NAME.to_string(),
            default_output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Request {
    method: String,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    id: Value,
}

#[derive(Debug, Serialize)]
struct Response {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl Response {
    fn ok(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Answer requests from `input` on `output` until `input` is exhausted.
pub fn serve<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => handle(request),
            Err(e) => Response::err(Value::Null, PARSE_ERROR, format!("invalid request: {e}")),
        };

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    Ok(())
}

fn handle(request: Request) -> Response {
    tracing::debug!("{} request", request.method);
    match request.method.as_str() {
        "getManifest" => Response::ok(
            request.id,
            serde_json::json!({ "manifest": Manifest::default() }),
        ),
        "generate" => match run_generate(request.params) {
            Ok(()) => Response::ok(request.id, Value::Null),
            Err(message) => {
                tracing::error!("{message}");
                Response::err(request.id, GENERATION_FAILED, message)
            }
        },
        other => Response::err(
            request.id,
            METHOD_NOT_FOUND,
            format!("method not found: {other}"),
        ),
    }
}

fn run_generate(params: Value) -> Result<(), String> {
    let options = zodgen_dmmf::parse_generator_options(params).map_err(|e| e.to_string())?;
    let config = Config::from_generator(&options.generator);
    generate(&options.dmmf.datamodel, &config).map_err(|e| e.to_string())?;
    Ok(())
}
