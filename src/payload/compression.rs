//! Body content-codings backed by flate2.
//!
//! `deflate` here is a raw DEFLATE stream (no zlib wrapper). Both codings
//! compress at level 6.

use std::io::{Read, Write};

use flate2::read::{DeflateDecoder, GzDecoder};
use flate2::write::{DeflateEncoder, GzEncoder};
use flate2::Compression;

use crate::http::negotiate::ContentEncoding;

const LEVEL: u32 = 6;

/// Apply `encoding` to `data`.
pub fn compress(encoding: ContentEncoding, data: &[u8]) -> std::io::Result<Vec<u8>> {
    match encoding {
        ContentEncoding::Identity => Ok(data.to_vec()),
        ContentEncoding::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::new(LEVEL));
            encoder.write_all(data)?;
            encoder.finish()
        }
        ContentEncoding::Deflate => {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(LEVEL));
            encoder.write_all(data)?;
            encoder.finish()
        }
    }
}

/// Undo `encoding` on `data`.
pub fn decompress(encoding: ContentEncoding, data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match encoding {
        ContentEncoding::Identity => out.extend_from_slice(data),
        ContentEncoding::Gzip => {
            GzDecoder::new(data).read_to_end(&mut out)?;
        }
        ContentEncoding::Deflate => {
            DeflateDecoder::new(data).read_to_end(&mut out)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"{\"greeter\":\"Ada\"}\r\n\r\n{\"greeter\":\"Ada\"}";

    #[test]
    fn gzip_has_magic_header() {
        let out = compress(ContentEncoding::Gzip, TEXT).unwrap();
        assert_eq!(&out[..2], &[0x1f, 0x8b]);
        assert_eq!(decompress(ContentEncoding::Gzip, &out).unwrap(), TEXT);
    }

    #[test]
    fn deflate_is_raw_stream() {
        let out = compress(ContentEncoding::Deflate, TEXT).unwrap();
        assert_ne!(&out[..2], &[0x1f, 0x8b]);
        assert_eq!(decompress(ContentEncoding::Deflate, &out).unwrap(), TEXT);
    }

    #[test]
    fn identity_passes_through() {
        assert_eq!(compress(ContentEncoding::Identity, TEXT).unwrap(), TEXT);
    }

    #[test]
    fn corrupt_gzip_is_an_error() {
        assert!(decompress(ContentEncoding::Gzip, b"not gzip at all").is_err());
    }
}
