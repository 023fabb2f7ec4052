//! Mii-file read/write helpers. Mirrors the original CLI's support for `-`
//! meaning stdin/stdout, and its strict short-read/short-write checking.

use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::Path;

use effsd_core::VER3_RECORD_BYTES;

use crate::error::{CliError, CliResult};

pub fn read_mii_file(path: &str) -> CliResult<[u8; VER3_RECORD_BYTES]> {
    let mut buf = [0u8; VER3_RECORD_BYTES];

    let got = if path == "-" {
        read_fully(&mut stdin(), &mut buf)?
    } else {
        let mut file = File::open(Path::new(path))?;
        read_fully(&mut file, &mut buf)?
    };

    if got != VER3_RECORD_BYTES {
        return Err(CliError::ShortRead {
            expected: VER3_RECORD_BYTES,
            got,
        });
    }
    Ok(buf)
}

pub fn write_mii_file(path: &str, data: &[u8; VER3_RECORD_BYTES]) -> CliResult<()> {
    if path == "-" {
        stdout().write_all(data)?;
    } else {
        let mut file = File::create(Path::new(path))?;
        file.write_all(data)?;
    }
    Ok(())
}

fn read_fully(src: &mut impl Read, buf: &mut [u8]) -> CliResult<usize> {
    let mut total = 0usize;
    loop {
        match src.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) => return Err(CliError::Io(e)),
        }
        if total == buf.len() {
            break;
        }
    }
    Ok(total)
}
