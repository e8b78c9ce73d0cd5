use std::path::PathBuf;
use std::{env, fs, process};

use bytes::{BufMut, BytesMut};

/// Builds the smallest classfile this tool accepts: a two entry pool holding
/// the name Utf8 and the Class entry referencing it, then the trailer up to
/// and including this_class. Nothing after this_class is required.
pub fn minimal_class(name: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::new();
    buf.put_u32(0xCAFEBABE);
    buf.put_u16(0); // minor
    buf.put_u16(52); // major
    buf.put_u16(3); // pool count, 2 usable entries
    buf.put_u8(1); // Utf8
    buf.put_u16(name.len() as u16);
    buf.put_slice(name);
    buf.put_u8(7); // Class
    buf.put_u16(1);
    buf.put_u16(0x0021); // access flags
    buf.put_u16(2); // this_class
    buf.to_vec()
}

/// A classfile whose pool is padded with Integer entries before the name
/// pair, so the interesting entries land at high indices. `poison` swaps the
/// last filler entry's tag for an invalid one.
pub fn padded_class(name: &[u8], filler: u16, poison: bool) -> Vec<u8> {
    let mut buf = BytesMut::new();
    buf.put_u32(0xCAFEBABE);
    buf.put_u16(0);
    buf.put_u16(52);
    buf.put_u16(filler + 3);

    for i in 0..filler {
        if poison && i == filler - 1 {
            buf.put_u8(99);
        } else {
            buf.put_u8(3); // Integer
        }
        buf.put_u32(u32::from(i));
    }

    buf.put_u8(1);
    buf.put_u16(name.len() as u16);
    buf.put_slice(name);
    buf.put_u8(7);
    buf.put_u16(filler + 1);
    buf.put_u16(0x0021);
    buf.put_u16(filler + 2);
    buf.to_vec()
}

/// Writes fixture bytes under the system temp dir and returns the path.
pub fn write_fixture(label: &str, bytes: &[u8]) -> PathBuf {
    let path = env::temp_dir().join(format!("classpeek-{}-{label}.class", process::id()));
    fs::write(&path, bytes).expect("failed to write fixture");
    path
}

pub fn classpeek() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("classpeek").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}
