//! Transparent decompression for gzip and zstd compressed metadata files.
//!
//! Compression is detected by file extension (.gz/.gzip → gzip,
//! .zst/.zstd → zstd). Everything is decoded into memory before parsing.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz" | "gzip") => Compression::Gzip,
            Some("zst" | "zstd") => Compression::Zstd,
            _ => Compression::None,
        }
    }
}

/// Read a whole file, decoding it first if its extension says it is compressed.
pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let compression = Compression::from_path(path);
    if compression == Compression::None {
        return std::fs::read(path);
    }

    let file = File::open(path)?;
    let mut buf = Vec::new();
    match compression {
        Compression::Gzip => {
            flate2::read::GzDecoder::new(file).read_to_end(&mut buf)?;
        }
        Compression::Zstd => {
            zstd::Decoder::new(file)?.read_to_end(&mut buf)?;
        }
        Compression::None => unreachable!(),
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn detect_by_extension() {
        assert_eq!(
            Compression::from_path(Path::new("train_metadata.json.gz")),
            Compression::Gzip
        );
        assert_eq!(
            Compression::from_path(Path::new("data/train_metadata.json.gzip")),
            Compression::Gzip
        );
        assert_eq!(
            Compression::from_path(Path::new("train_metadata.json.zst")),
            Compression::Zstd
        );
        assert_eq!(
            Compression::from_path(Path::new("train_metadata.json.zstd")),
            Compression::Zstd
        );
        assert_eq!(
            Compression::from_path(Path::new("train_metadata.json")),
            Compression::None
        );
        assert_eq!(Compression::from_path(Path::new("gz")), Compression::None);
    }

    #[test]
    fn reads_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json.gz");
        let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(br#"{"metadata":{}}"#).unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        assert_eq!(read_file(&path).unwrap(), br#"{"metadata":{}}"#);
    }

    #[test]
    fn reads_zstd() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json.zst");
        let data = zstd::encode_all(&br#"{"metadata":{"a":1}}"#[..], 0).unwrap();
        std::fs::write(&path, data).unwrap();

        assert_eq!(read_file(&path).unwrap(), br#"{"metadata":{"a":1}}"#);
    }

    #[test]
    fn corrupt_gzip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json.gz");
        std::fs::write(&path, b"definitely not gzip").unwrap();

        assert!(read_file(&path).is_err());
    }
}
