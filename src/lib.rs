use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

pub mod ast;
pub mod ast_printer;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod value;

pub use ast::{BinaryOp, Node, RootNode};
pub use environment::Environment;
pub use error::{ErrorKind, NarError, RuntimeError};
pub use interpreter::{Interpreter, Outcome};
pub use value::Value;

/// Decodes a JSON-encoded syntax tree.
pub fn load_tree(source: &[u8]) -> Result<RootNode, NarError> {
    debug!("Decoding syntax tree from {} bytes", source.len());
    Ok(serde_json::from_slice(source)?)
}

/// Reads and decodes a JSON-encoded syntax tree from `path`.
pub fn read_tree<P: AsRef<Path>>(path: P) -> Result<RootNode, NarError> {
    let path = path.as_ref();
    info!("Reading file: {:?}", path);

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let bytes = reader.read_to_end(&mut buf)?;

    info!("Read {} bytes from {:?}", bytes, path);

    load_tree(&buf)
}
