use std::fs::File;
use std::io::{BufReader, Read, Seek};

use tracing::{debug, info};

use crate::error::ClassFileError;

pub mod header;
pub mod pool;
pub mod resolve;
pub mod stream;

/// Extracts the internal (slash separated) name of the class in `stream`.
///
/// One forward scan sizes every constant pool entry and records where it
/// starts, then two indexed hops (this_class -> Class entry -> Utf8 entry)
/// jump back into the stream for the name bytes. Nothing after `this_class`
/// is ever read.
pub fn class_name<R: Read + Seek>(stream: &mut R) -> Result<Vec<u8>, ClassFileError> {
    let pool_count = header::read_header(stream)?;
    let offsets = pool::scan_constant_pool(stream, pool_count)?;

    debug!("successfully scanned the constant pool");

    // offsets is dropped as soon as the two lookups are done
    resolve::resolve_class_name(stream, &offsets)
}

pub fn class_name_from_path(path: &str) -> Result<Vec<u8>, ClassFileError> {
    info!("opening classfile '{path}'");

    let file = File::open(path).map_err(|source| ClassFileError::Open {
        path: path.to_string(),
        source,
    })?;

    class_name(&mut BufReader::new(file))
}
