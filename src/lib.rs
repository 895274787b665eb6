//! # Introduction
//! vtf_pixelformat converts between the canonical, uncompressed RGBA8888
//! pixel layout and the on-disk pixel encodings used by Valve Source engine
//! VTF textures: packed 16-bit formats, single- and dual-channel intensity
//! formats, the bluescreen chroma-key convention, and the BC1/BC2/BC3/BC5
//! block-compressed formats.
//!
//! This crate does not parse or write the VTF container format itself (the
//! header, resource directory, and mipmap chain layout). It operates purely
//! on pixel buffers: given a format tag and image dimensions, [load] decodes
//! an on-disk buffer into RGBA8888, and [save] does the reverse. Callers
//! that do own a VTF container are expected to slice out each mip level's
//! raw bytes themselves and pass them through.
//!
//! # Features
//! Block compression is provided by the `squish` crate. [mipmap::scale_down]
//! implements the nearest-corner and truncating bilinear half-size filters
//! used to generate a VTF mipmap chain; [presentation] offers two small
//! conveniences for turning a decoded surface into something visible
//! ([presentation::ppm] for a netpbm preview, [presentation::alpha_flatten]
//! for compositing against a solid background).
//!
//! # Limitations
//! 16-bit HDR formats (`RGBA16161616`, `RGBA16161616F`), the paletted `P8`
//! format, and `ATI1N` are recognized by the registry but have no codec;
//! requesting either direction for them returns [error::Error::Unsupported].

mod bcn;
pub mod bits;
pub mod codec;
pub mod error;
pub mod format;
pub mod mipmap;
pub mod parallel;
pub mod presentation;

pub use error::{Direction, Error, InitializationMismatch};
pub use format::{init, PixelFormat};
pub use mipmap::FilterMode;
pub use presentation::{alpha_flatten, ppm};

/// Decodes `src`, encoded as `format`, into canonical RGBA8888 `dst`.
///
/// `dst` must be exactly `4 * width * height` bytes. `src` must be exactly
/// the number of bytes `format` requires for `width`x`height`; each codec
/// documents its own layout in [codec].
///
/// # Panics
///
/// Panics on buffer length mismatches or on `src`/`dst` aliasing, which are
/// programmer errors rather than recoverable conditions.
pub fn load(format: PixelFormat, dst: &mut [u8], src: &[u8], width: u32, height: u32) -> Result<(), Error> {
    format::load(format, dst, src, width, height)
}

/// Encodes canonical RGBA8888 `src` into `dst` using `format`.
///
/// # Panics
///
/// Panics on buffer length mismatches or on `src`/`dst` aliasing, which are
/// programmer errors rather than recoverable conditions.
pub fn save(format: PixelFormat, dst: &mut [u8], src: &[u8], width: u32, height: u32) -> Result<(), Error> {
    format::save(format, dst, src, width, height)
}

/// Downscales canonical RGBA8888 `src` into `dst`, each destination
/// dimension either matching `src` or exactly half of it.
pub fn scale_down(
    filter: FilterMode,
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    dst: &mut [u8],
) -> Result<(), Error> {
    mipmap::scale_down(filter, src_w, src_h, dst_w, dst_h, src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_roundtrips_rgb565() {
        init(&[(PixelFormat::Rgb565.tag(), "RGB565")]).unwrap();

        // R != B and both are exact 5-/6-bit fixed points, so this also
        // catches an accidental R/B channel swap, which an R == B input
        // (e.g. [0xF8, _, 0xF8]) cannot.
        let canonical = [132u8, 65, 16, 255];
        let mut encoded = vec![0u8; 2];
        save(PixelFormat::Rgb565, &mut encoded, &canonical, 1, 1).unwrap();

        let mut back = vec![0u8; 4];
        load(PixelFormat::Rgb565, &mut back, &encoded, 1, 1).unwrap();
        assert_eq!(back, canonical);
    }

    #[test]
    fn public_api_scale_down_identity() {
        let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut dst = vec![0u8; src.len()];
        scale_down(FilterMode::Bilinear, 2, 1, 2, 1, &src, &mut dst).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn public_api_ppm_roundtrip_header() {
        let pixels = vec![255u8, 0, 0, 255];
        let out = ppm(&pixels, 1, 1, None);
        assert!(out.starts_with(b"P6 1 1 255\n"));
    }
}
