//! Block-compressed formats (DXT1/DXT3/DXT5/ATI2N), adapted from the
//! canonical RGBA8888 buffer via [`crate::bcn`].
//!
//! Images with either dimension below the 4x4 block size are never encoded:
//! the encoder writes nothing, and the decoder fills the canonical buffer
//! with opaque black instead of reading past the (nonexistent) block data.

use crate::bcn::{self, BlockFormat, BlockOptions};

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

fn below_block_size(width: u32, height: u32) -> bool {
    width < bcn::BLOCK_DIM as u32 || height < bcn::BLOCK_DIM as u32
}

fn blocks_across(dim: u32) -> u32 {
    dim.div_ceil(bcn::BLOCK_DIM as u32)
}

pub fn block_count(width: u32, height: u32) -> usize {
    blocks_across(width) as usize * blocks_across(height) as usize
}

fn fill_opaque_black(dst: &mut [u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(dst.len(), n * 4);
    for px in dst.chunks_exact_mut(4) {
        px[0] = 0;
        px[1] = 0;
        px[2] = 0;
        px[3] = 255;
    }
}

fn load_block(
    format: BlockFormat,
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    opts: &BlockOptions,
) {
    let n = pixel_count(width, height);
    assert_eq!(dst.len(), n * 4);

    if below_block_size(width, height) {
        fill_opaque_black(dst, width, height);
        return;
    }

    assert_eq!(src.len(), block_count(width, height) * format.block_bytes());
    bcn::decompress(format, width, height, src, dst, opts);
}

fn save_block(
    format: BlockFormat,
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    height: u32,
    opts: &BlockOptions,
) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);

    if below_block_size(width, height) {
        assert_eq!(dst.len(), 0, "block formats write nothing below block size");
        return;
    }

    assert_eq!(dst.len(), block_count(width, height) * format.block_bytes());
    bcn::compress(format, width, height, src, dst, opts);
}

/// DXT1, forced opaque: punch-through alpha is never emitted.
pub fn load_dxt1(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let opts = BlockOptions {
        force_opaque: true,
        ..Default::default()
    };
    load_block(BlockFormat::Dxt1, dst, src, width, height, &opts);
}

pub fn save_dxt1(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let opts = BlockOptions {
        force_opaque: true,
        ..Default::default()
    };
    save_block(BlockFormat::Dxt1, dst, src, width, height, &opts);
}

/// DXT1 with 1-bit (punch-through) alpha preserved.
pub fn load_dxt1_onebitalpha(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_block(BlockFormat::Dxt1, dst, src, width, height, &BlockOptions::default());
}

pub fn save_dxt1_onebitalpha(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    save_block(BlockFormat::Dxt1, dst, src, width, height, &BlockOptions::default());
}

pub fn load_dxt3(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_block(BlockFormat::Dxt3, dst, src, width, height, &BlockOptions::default());
}

pub fn save_dxt3(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    save_block(BlockFormat::Dxt3, dst, src, width, height, &BlockOptions::default());
}

pub fn load_dxt5(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_block(BlockFormat::Dxt5, dst, src, width, height, &BlockOptions::default());
}

pub fn save_dxt5(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    save_block(BlockFormat::Dxt5, dst, src, width, height, &BlockOptions::default());
}

/// ATI2N / BC5: two independent gradient channels, stored in R and G.
pub fn load_ati2n(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_block(BlockFormat::Bc5, dst, src, width, height, &BlockOptions::default());
}

pub fn save_ati2n(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    save_block(BlockFormat::Bc5, dst, src, width, height, &BlockOptions::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dxt1_roundtrip_solid_8x8() {
        let n = pixel_count(8, 8);
        let mut src = vec![0u8; n * 4];
        for px in src.chunks_exact_mut(4) {
            px.copy_from_slice(&[10, 200, 40, 255]);
        }
        let mut blocks = vec![0u8; block_count(8, 8) * BlockFormat::Dxt1.block_bytes()];
        save_dxt1(&mut blocks, &src, 8, 8);

        let mut back = vec![0u8; n * 4];
        load_dxt1(&mut back, &blocks, 8, 8);
        for px in back.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn sub_block_dimensions_skip_encoding_and_decode_opaque_black() {
        let n = pixel_count(2, 2);
        let src = vec![255u8; n * 4];
        let mut blocks = vec![0u8; 0];
        save_dxt5(&mut blocks, &src, 2, 2);
        assert!(blocks.is_empty());

        let mut back = vec![0u8; n * 4];
        load_dxt5(&mut back, &blocks, 2, 2);
        for px in back.chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn dxt3_preserves_coarse_alpha() {
        let n = pixel_count(4, 4);
        let mut src = vec![0u8; n * 4];
        for (i, px) in src.chunks_exact_mut(4).enumerate() {
            px.copy_from_slice(&[128, 64, 32, if i % 2 == 0 { 255 } else { 0 }]);
        }
        let mut blocks = vec![0u8; block_count(4, 4) * BlockFormat::Dxt3.block_bytes()];
        save_dxt3(&mut blocks, &src, 4, 4);

        let mut back = vec![0u8; n * 4];
        load_dxt3(&mut back, &blocks, 4, 4);
        for (i, px) in back.chunks_exact(4).enumerate() {
            let expected_alpha = if i % 2 == 0 { 255 } else { 0 };
            assert!((px[3] as i16 - expected_alpha).abs() <= 17);
        }
    }

    #[test]
    fn ati2n_roundtrips_gradient_channels() {
        let n = pixel_count(4, 4);
        let mut src = vec![0u8; n * 4];
        for (i, px) in src.chunks_exact_mut(4).enumerate() {
            px[0] = (i * 16) as u8;
            px[1] = 255 - (i * 16) as u8;
            px[3] = 255;
        }
        let mut blocks = vec![0u8; block_count(4, 4) * BlockFormat::Bc5.block_bytes()];
        save_ati2n(&mut blocks, &src, 4, 4);

        let mut back = vec![0u8; n * 4];
        load_ati2n(&mut back, &blocks, 4, 4);
        for (s, d) in src.chunks_exact(4).zip(back.chunks_exact(4)) {
            assert!((s[0] as i16 - d[0] as i16).abs() <= 8);
            assert!((s[1] as i16 - d[1] as i16).abs() <= 8);
        }
    }
}
