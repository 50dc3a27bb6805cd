// Rust guideline compliant 2026-10-16

//! Transparent compressed file I/O.
//!
//! [`zopen`] and [`zcreate`] pick a codec from the file extension
//! (`.gz`, `.bz2`, `.xz`) and fall back to plain buffered file I/O for
//! anything else.

use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Compression format selected for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Uncompressed bytes.
    Raw,
    /// `.gz`, via flate2.
    Gzip,
    /// `.bz2`, via bzip2.
    Bzip2,
    /// `.xz`, via liblzma.
    Xz,
}

impl Codec {
    /// Chooses a codec from the path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Codec::Gzip,
            Some("bz2") => Codec::Bzip2,
            Some("xz") => Codec::Xz,
            _ => Codec::Raw,
        }
    }

    /// Human-readable codec name.
    pub fn name(self) -> &'static str {
        match self {
            Codec::Raw => "raw",
            Codec::Gzip => "gzip",
            Codec::Bzip2 => "bzip2",
            Codec::Xz => "xz",
        }
    }
}

/// Opens a file for reading, decompressing according to its extension.
///
/// Every codec decodes as the data is read, including files made of several
/// concatenated members or streams. Malformed compressed data surfaces as an
/// IO error from the returned reader.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be opened.
pub fn zopen(path: impl AsRef<Path>) -> Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let codec = Codec::from_path(path);
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), codec = codec.name(), "opening input");

    let reader: Box<dyn BufRead + Send> = match codec {
        Codec::Raw => Box::new(BufReader::new(file)),
        Codec::Gzip => Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file))),
        Codec::Bzip2 => Box::new(BufReader::new(bzip2::read::MultiBzDecoder::new(file))),
        Codec::Xz => Box::new(BufReader::new(xz2::read::XzDecoder::new_multi_decoder(file))),
    };
    Ok(reader)
}

/// Creates a file for writing, compressing according to its extension.
///
/// `level` is clamped to 1-9 and passed to the codec as its preset.
///
/// # Errors
///
/// Returns [`Error::Open`] if the file cannot be created.
pub fn zcreate(path: impl AsRef<Path>, level: u32) -> Result<ZWriter> {
    let path = path.as_ref();
    let codec = Codec::from_path(path);
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file = BufWriter::new(file);
    let level = level.clamp(1, 9);
    tracing::debug!(path = %path.display(), codec = codec.name(), level, "creating output");

    let sink = match codec {
        Codec::Raw => Encoder::Raw(file),
        Codec::Gzip => Encoder::Gzip(flate2::write::GzEncoder::new(
            file,
            flate2::Compression::new(level),
        )),
        Codec::Bzip2 => Encoder::Bzip2(bzip2::write::BzEncoder::new(
            file,
            bzip2::Compression::new(level),
        )),
        Codec::Xz => Encoder::Xz(xz2::write::XzEncoder::new(file, level)),
    };
    Ok(ZWriter {
        codec,
        encoder: Some(sink),
    })
}

enum Encoder {
    Raw(BufWriter<File>),
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
    Bzip2(bzip2::write::BzEncoder<BufWriter<File>>),
    Xz(xz2::write::XzEncoder<BufWriter<File>>),
}

impl Encoder {
    fn finish(self) -> Result<()> {
        let mut file = match self {
            Encoder::Raw(file) => file,
            Encoder::Gzip(encoder) => encoder.finish()?,
            Encoder::Bzip2(encoder) => encoder.finish()?,
            Encoder::Xz(encoder) => encoder.finish()?,
        };
        file.flush()?;
        Ok(())
    }
}

/// Writer returned by [`zcreate`].
///
/// Call [`ZWriter::finish`] to write codec trailers and surface errors.
/// Dropping an unfinished writer finishes it on a best-effort basis.
pub struct ZWriter {
    codec: Codec,
    encoder: Option<Encoder>,
}

impl ZWriter {
    /// Codec this writer encodes with.
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Flushes all buffered data and writes the codec trailer.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the final write fails.
    pub fn finish(mut self) -> Result<()> {
        match self.encoder.take() {
            Some(encoder) => encoder.finish(),
            None => Ok(()),
        }
    }

    fn encoder(&mut self) -> io::Result<&mut Encoder> {
        self.encoder
            .as_mut()
            .ok_or_else(|| io::Error::other("writer already finished"))
    }
}

impl Write for ZWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.encoder()? {
            Encoder::Raw(file) => file.write(buf),
            Encoder::Gzip(encoder) => encoder.write(buf),
            Encoder::Bzip2(encoder) => encoder.write(buf),
            Encoder::Xz(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.encoder()? {
            Encoder::Raw(file) => file.flush(),
            Encoder::Gzip(encoder) => encoder.flush(),
            Encoder::Bzip2(encoder) => encoder.flush(),
            Encoder::Xz(encoder) => encoder.flush(),
        }
    }
}

impl Drop for ZWriter {
    fn drop(&mut self) {
        if let Some(encoder) = self.encoder.take() {
            if let Err(err) = encoder.finish() {
                tracing::warn!(codec = self.codec.name(), error = %err, "failed to finish output");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_codec_from_path() {
        assert_eq!(Codec::from_path(Path::new("a/b.txt.gz")), Codec::Gzip);
        assert_eq!(Codec::from_path(Path::new("reads.bz2")), Codec::Bzip2);
        assert_eq!(Codec::from_path(Path::new("reads.fa.xz")), Codec::Xz);
        assert_eq!(Codec::from_path(Path::new("reads.fa")), Codec::Raw);
        assert_eq!(Codec::from_path(Path::new("gz")), Codec::Raw);
    }

    #[test]
    fn test_zopen_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = zopen(temp_dir.path().join("missing.gz"));
        assert!(matches!(result, Err(Error::Open { .. })));
    }

    #[test]
    fn test_zopen_reads_concatenated_gzip_members() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("joined.gz");

        let mut bytes = Vec::new();
        for part in ["hello ", "world\n"] {
            let mut encoder =
                flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(part.as_bytes()).unwrap();
            bytes.extend(encoder.finish().unwrap());
        }
        std::fs::write(&path, bytes).unwrap();

        let mut text = String::new();
        zopen(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello world\n");
    }

    #[test]
    fn test_corrupt_xz_fails_on_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.xz");
        std::fs::write(&path, b"definitely not xz").unwrap();

        let mut reader = zopen(&path).unwrap();
        let mut bytes = Vec::new();
        assert!(reader.read_to_end(&mut bytes).is_err());
    }

    #[test]
    fn test_xz_writer_streams_before_finish() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("large.xz");
        let block: Vec<u8> = (0..=255u8).cycle().take(1 << 16).collect();

        let mut writer = zcreate(&path, 1).unwrap();
        for _ in 0..64 {
            writer.write_all(&block).unwrap();
        }
        writer.flush().unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        writer.finish().unwrap();

        let mut decoded = Vec::new();
        zopen(&path).unwrap().read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded.len(), 64 << 16);
        assert_eq!(&decoded[..256], &block[..256]);
    }

    #[test]
    fn test_dropped_xz_writer_still_finishes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dropped.xz");
        {
            let mut writer = zcreate(&path, 6).unwrap();
            writer.write_all(b"kept on drop").unwrap();
        }

        let mut text = String::new();
        zopen(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "kept on drop");
    }
}
