use std::io::{self, Read, Seek, SeekFrom};

use tracing::trace;

use crate::classfile::stream::SafeRead;
use crate::error::ClassFileError;

#[derive(Copy, Clone, Debug)]
pub enum Tag {
    Utf8,
    Integer,
    Float,
    Long,
    Double,
    Class,
    String,
    FieldRef,
    MethodRef,
    InterfaceMethodRef,
    NameAndType,
    MethodHandle,
    MethodType,
    Dynamic,
    InvokeDynamic,
    Module,
    Package,
}

impl Tag {
    pub fn from_tag_byte(tag: u8) -> Option<Self> {
        Some(match tag {
            1 => Tag::Utf8,
            3 => Tag::Integer,
            4 => Tag::Float,
            5 => Tag::Long,
            6 => Tag::Double,
            7 => Tag::Class,
            8 => Tag::String,
            9 => Tag::FieldRef,
            10 => Tag::MethodRef,
            11 => Tag::InterfaceMethodRef,
            12 => Tag::NameAndType,
            15 => Tag::MethodHandle,
            16 => Tag::MethodType,
            17 => Tag::Dynamic,
            18 => Tag::InvokeDynamic,
            19 => Tag::Module,
            20 => Tag::Package,
            _ => return None,
        })
    }

    /// Payload size in bytes for every fixed-width entry. `None` for Utf8,
    /// whose payload is a 2-byte length followed by that many bytes.
    pub fn fixed_payload_size(&self) -> Option<u64> {
        match self {
            Tag::Class | Tag::String | Tag::MethodType | Tag::Module | Tag::Package => Some(2),
            Tag::MethodHandle => Some(3),
            Tag::Integer
            | Tag::Float
            | Tag::FieldRef
            | Tag::MethodRef
            | Tag::InterfaceMethodRef
            | Tag::NameAndType
            | Tag::Dynamic
            | Tag::InvokeDynamic => Some(4),
            Tag::Long | Tag::Double => Some(8),
            Tag::Utf8 => None,
        }
    }
}

/// Byte offsets of each constant pool entry's tag byte, keyed by pool index.
///
/// The pool is indexed from 1 to count - 1; slot 0 exists but is never
/// assigned. Lookups through `get` treat it (and any other unpopulated slot)
/// as out of range.
#[derive(Debug)]
pub struct PoolOffsets {
    offsets: Vec<Option<u64>>,
}

impl PoolOffsets {
    pub fn new(pool_count: u16) -> Self {
        Self {
            offsets: vec![None; pool_count as usize],
        }
    }

    pub(crate) fn record(&mut self, index: u16, offset: u64) {
        self.offsets[index as usize] = Some(offset);
    }

    pub fn get(&self, index: u16) -> Option<u64> {
        self.offsets.get(index as usize).copied().flatten()
    }
}

/// Walks every constant pool entry once, recording where each one starts and
/// skipping its payload without interpreting it. The stream is left positioned
/// immediately after the last entry.
///
/// There is no index of entry boundaries anywhere in the file, so entry K's
/// offset is only knowable by having sized every entry before it. A single
/// mis-sized entry silently corrupts every later offset, which is why an
/// unrecognized tag aborts the whole scan.
///
/// Long and Double conceptually occupy two pool slots, with the second slot
/// reserved. This scanner assigns one offset per loop index regardless; the
/// two lookups this tool performs never land on a reserved slot.
pub fn scan_constant_pool<R: Read + Seek>(
    stream: &mut R,
    pool_count: u16,
) -> Result<PoolOffsets, ClassFileError> {
    let mut offsets = PoolOffsets::new(pool_count);

    for index in 1..pool_count {
        let offset = stream.stream_position()?;
        offsets.record(index, offset);
        skip_entry(stream, index, offset)?;
    }

    Ok(offsets)
}

/// Reads one tag byte and advances the stream past that entry's payload,
/// discarding all data about the entry.
fn skip_entry<R: Read + Seek>(
    stream: &mut R,
    index: u16,
    offset: u64,
) -> Result<(), ClassFileError> {
    let tag_byte = match stream.try_get_u8() {
        Ok(byte) => byte,
        Err(ClassFileError::Truncated { .. }) => {
            return Err(ClassFileError::UnreadablePoolEntry { index, offset })
        }
        Err(err) => return Err(err),
    };

    let tag = Tag::from_tag_byte(tag_byte).ok_or(ClassFileError::UnknownPoolTag {
        tag: tag_byte,
        index,
        offset,
    })?;

    trace!("entry {index} at offset {offset:#x} has tag {tag:?}");

    match tag.fixed_payload_size() {
        Some(size) => {
            stream.seek(SeekFrom::Current(size as i64))?;
        }
        None => {
            let length = stream.try_get_u16()? as u64;
            let skipped = io::copy(&mut stream.by_ref().take(length), &mut io::sink())?;

            if skipped < length {
                return Err(ClassFileError::Truncated {
                    missing: length - skipped,
                });
            }
        }
    }

    Ok(())
}
