//! Thin wrapper around the `squish` block-compression library.
//!
//! This module does not reimplement cluster-fit or any other BCn coding
//! logic; it only adapts `squish`'s BC1/BC2/BC3/BC5 codecs to the flag
//! vocabulary spec'd for the VTF block formats (`DXT1`, `DXT1_ONEBITALPHA`,
//! `DXT3`, `DXT5`, `ATI2N`/`BC5`) and handles the two VTF-specific quirks
//! `squish` has no concept of: force-opaque DXT1 and BGRA source data.

pub use squish::Algorithm;

use squish::{Decoder, Encoder, Params, BC1, BC2, BC3, BC5};

pub const BLOCK_DIM: usize = 4;

/// Which BCn family to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    /// DXT1, either force-opaque or with punch-through alpha.
    Dxt1,
    Dxt3,
    Dxt5,
    /// ATI2N, two independent gradient (BC4-style) channels in R and G.
    Bc5,
}

impl BlockFormat {
    pub const fn block_bytes(self) -> usize {
        match self {
            BlockFormat::Dxt1 => 8,
            BlockFormat::Dxt3 | BlockFormat::Dxt5 | BlockFormat::Bc5 => 16,
        }
    }
}

/// Quality/behavior flags for [compress]/[decompress].
///
/// Mirrors the flag bits from the original libsquish-derived VTF encoder:
/// `ClusterFit`/`RangeFit`/`IterativeClusterFit` select the colour-fit
/// algorithm, `WeightColourByAlpha` biases the fit toward opaque pixels, and
/// `SourceBGRA`/`ForceOpaque` are adapter-level conveniences `squish` itself
/// has no notion of.
#[derive(Clone, Copy)]
pub struct BlockOptions {
    pub algorithm: Algorithm,
    pub weigh_colour_by_alpha: bool,
    /// Treat `src_rgba`/`dst_rgba` as BGRA instead of RGBA.
    pub source_bgra: bool,
    /// DXT1 only: clear alpha to opaque before compressing so the encoder
    /// never emits the punch-through 3-colour block mode.
    pub force_opaque: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        BlockOptions {
            algorithm: Algorithm::ClusterFit,
            weigh_colour_by_alpha: false,
            source_bgra: false,
            force_opaque: false,
        }
    }
}

fn squish_params(opts: &BlockOptions) -> Params {
    Params {
        algorithm: opts.algorithm,
        weights: squish::COLOUR_WEIGHTS_PERCEPTUAL,
        weigh_colour_by_alpha: opts.weigh_colour_by_alpha,
    }
}

fn swap_rb(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

/// Compresses `src_rgba` (`4 * width * height` bytes, row-major) into
/// `dst_blocks`. `width` and `height` need not be multiples of 4; partial
/// edge blocks are padded by masking, matching `squish`'s own behavior.
///
/// Callers are responsible for the VTF-specific "skip encoding when a
/// dimension is below 4" rule; this function always emits a full block grid.
pub fn compress(
    format: BlockFormat,
    width: u32,
    height: u32,
    src_rgba: &[u8],
    dst_blocks: &mut [u8],
    opts: &BlockOptions,
) {
    let (width, height) = (width as usize, height as usize);
    assert_eq!(src_rgba.len(), width * height * 4);

    let mut rgba = src_rgba.to_vec();
    if opts.source_bgra {
        swap_rb(&mut rgba);
    }
    if opts.force_opaque && matches!(format, BlockFormat::Dxt1) {
        for px in rgba.chunks_exact_mut(4) {
            px[3] = 255;
        }
    }

    let params = squish_params(opts);
    match format {
        BlockFormat::Dxt1 => BC1::compress(&rgba, width, height, params, dst_blocks),
        BlockFormat::Dxt3 => BC2::compress(&rgba, width, height, params, dst_blocks),
        BlockFormat::Dxt5 => BC3::compress(&rgba, width, height, params, dst_blocks),
        BlockFormat::Bc5 => BC5::compress(&rgba, width, height, params, dst_blocks),
    }
}

/// Decompresses `src_blocks` into `dst_rgba` (`4 * width * height` bytes).
pub fn decompress(
    format: BlockFormat,
    width: u32,
    height: u32,
    src_blocks: &[u8],
    dst_rgba: &mut [u8],
    opts: &BlockOptions,
) {
    let (width, height) = (width as usize, height as usize);
    assert_eq!(dst_rgba.len(), width * height * 4);

    match format {
        BlockFormat::Dxt1 => BC1::decompress(src_blocks, width, height, dst_rgba),
        BlockFormat::Dxt3 => BC2::decompress(src_blocks, width, height, dst_rgba),
        BlockFormat::Dxt5 => BC3::decompress(src_blocks, width, height, dst_rgba),
        BlockFormat::Bc5 => BC5::decompress(src_blocks, width, height, dst_rgba),
    }

    if opts.source_bgra {
        swap_rb(dst_rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        (0..width as usize * height as usize)
            .flat_map(|_| rgba)
            .collect()
    }

    #[test]
    fn dxt1_roundtrip_solid_colour() {
        let src = solid_rgba(8, 8, [200, 100, 50, 255]);
        let mut blocks = vec![0u8; (8 / 4) * (8 / 4) * BlockFormat::Dxt1.block_bytes()];
        compress(
            BlockFormat::Dxt1,
            8,
            8,
            &src,
            &mut blocks,
            &BlockOptions::default(),
        );

        let mut out = vec![0u8; src.len()];
        decompress(
            BlockFormat::Dxt1,
            8,
            8,
            &blocks,
            &mut out,
            &BlockOptions::default(),
        );

        for px in out.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn dxt1_force_opaque_ignores_alpha() {
        let mut src = solid_rgba(8, 8, [10, 20, 30, 0]);
        // Make half the image transparent so a non-force-opaque encode would
        // use punch-through alpha.
        for px in src.chunks_exact_mut(4).take(8) {
            px[3] = 0;
        }

        let mut blocks = vec![0u8; (8 / 4) * (8 / 4) * BlockFormat::Dxt1.block_bytes()];
        let opts = BlockOptions {
            force_opaque: true,
            ..Default::default()
        };
        compress(BlockFormat::Dxt1, 8, 8, &src, &mut blocks, &opts);

        let mut out = vec![0u8; src.len()];
        decompress(BlockFormat::Dxt1, 8, 8, &blocks, &mut out, &opts);
        for px in out.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn bc5_roundtrip_two_channel_gradient() {
        let width = 4u32;
        let height = 4u32;
        let mut src = vec![0u8; (width * height * 4) as usize];
        for (i, px) in src.chunks_exact_mut(4).enumerate() {
            px[0] = (i * 16) as u8;
            px[1] = 255 - (i * 16) as u8;
            px[2] = 0;
            px[3] = 255;
        }

        let mut blocks = vec![0u8; BlockFormat::Bc5.block_bytes()];
        compress(
            BlockFormat::Bc5,
            width,
            height,
            &src,
            &mut blocks,
            &BlockOptions::default(),
        );

        let mut out = vec![0u8; src.len()];
        decompress(
            BlockFormat::Bc5,
            width,
            height,
            &blocks,
            &mut out,
            &BlockOptions::default(),
        );

        for (s, d) in src.chunks_exact(4).zip(out.chunks_exact(4)) {
            assert!((s[0] as i16 - d[0] as i16).abs() <= 8);
            assert!((s[1] as i16 - d[1] as i16).abs() <= 8);
        }
    }
}
