//! Gzip plumbing for the record-log archive.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};

/// Compress `source` into a gzip file at `dest`, recording the source's
/// base name as the gzip member name.
pub fn compress_file(source: &Path, dest: &Path) -> io::Result<()> {
    let member_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let input = fs::read(source)?;

    let file = File::create(dest)?;
    let mut encoder = GzBuilder::new()
        .filename(member_name)
        .write(file, Compression::default());
    encoder.write_all(&input)?;

    let file = encoder.finish()?;
    file.sync_all()?;
    Ok(())
}

/// Decompress a gzip file produced by [`compress_file`], returning the
/// member bytes and the recorded member name.
pub fn decompress_file(path: &Path) -> io::Result<(Vec<u8>, Option<String>)> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));

    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;

    let member_name = decoder
        .header()
        .and_then(|header| header.filename())
        .map(|name| String::from_utf8_lossy(name).into_owned());

    Ok((bytes, member_name))
}
