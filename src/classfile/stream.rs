use std::io::{self, Read};

use crate::error::ClassFileError;

/**
This macro builds a set of `try_get_{number_type}` functions for safe big-endian
reads from any `io::Read` source. They return Result<T> instead of panicking.
 */
macro_rules! impl_saferead {
    ( $($type:ty),* ) => {
        pub trait SafeRead: Read {
            paste::paste! {
                $(
                fn [<try_get_ $type>](&mut self) -> Result<$type, ClassFileError> {
                    let mut buf = [0u8; std::mem::size_of::<$type>()];
                    self.read_exact(&mut buf).map_err(|err| match err.kind() {
                        io::ErrorKind::UnexpectedEof => ClassFileError::Truncated {
                            missing: std::mem::size_of::<$type>() as u64,
                        },
                        _ => ClassFileError::Io(err),
                    })?;
                    Ok(<$type>::from_be_bytes(buf))
                }
                )*
            }
        }

        impl<T: Read> SafeRead for T { }
    }
}

impl_saferead!(u8, u16, u32);
