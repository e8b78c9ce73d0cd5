use std::io::Read;

use tracing::debug;

use crate::classfile::stream::SafeRead;
use crate::error::ClassFileError;

pub const MAGIC: u32 = 0xCAFEBABE;

/// Reads the fixed-size prelude of a classfile and returns the constant pool
/// entry count. The version bytes are read and discarded; this tool never
/// interprets bytecode, so it has no reason to reject a version.
pub fn read_header<R: Read>(stream: &mut R) -> Result<u16, ClassFileError> {
    let magic = stream.try_get_u32()?;

    debug!("got {magic:#010x} as the magic value");

    if magic != MAGIC {
        return Err(ClassFileError::InvalidMagic { found: magic });
    }

    let minor = stream.try_get_u16()?;
    let major = stream.try_get_u16()?;

    debug!("classfile version is {major}.{minor}");

    let pool_count = stream.try_get_u16()?;

    debug!("const pool has {pool_count} entries listed");

    Ok(pool_count)
}
