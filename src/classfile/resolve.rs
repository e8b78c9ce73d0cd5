use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::classfile::pool::PoolOffsets;
use crate::classfile::stream::SafeRead;
use crate::error::ClassFileError;

/// Resolves the class's own name through the pool: `this_class` names a Class
/// entry, whose payload names the Utf8 entry holding the name bytes.
///
/// Expects the stream positioned just past the last pool entry, on the 2-byte
/// access flags field. Returns the raw name bytes (modified UTF-8, passed
/// through untouched).
pub fn resolve_class_name<R: Read + Seek>(
    stream: &mut R,
    offsets: &PoolOffsets,
) -> Result<Vec<u8>, ClassFileError> {
    let access_flags = stream.try_get_u16()?;

    debug!("got access flags {access_flags:#06x}, skipping them");

    let this_class = stream.try_get_u16()?;

    debug!("got this_class index {this_class}");

    // +1 skips the tag byte of the Class entry, leaving the cursor on its
    // name_index payload
    let class_offset = offsets
        .get(this_class)
        .ok_or(ClassFileError::PoolIndexOutOfRange { index: this_class })?;
    stream.seek(SeekFrom::Start(class_offset + 1))?;

    let name_index = stream.try_get_u16()?;

    debug!("class name lives at index {name_index}");

    let name_offset = offsets
        .get(name_index)
        .ok_or(ClassFileError::PoolIndexOutOfRange { index: name_index })?;
    stream.seek(SeekFrom::Start(name_offset + 1))?;

    let length = stream.try_get_u16()?;

    let mut name = Vec::with_capacity(length as usize);
    let got = stream.by_ref().take(length as u64).read_to_end(&mut name)?;

    if got < length as usize {
        return Err(ClassFileError::Truncated {
            missing: length as u64 - got as u64,
        });
    }

    Ok(name)
}
