//! Half-size mipmap downscaling over the canonical RGBA8888 buffer.

use crate::error::Error;
use crate::parallel;

const THRESHOLD: usize = parallel::DEFAULT_THRESHOLD;

/// Which corner (or average) a 2x2 source block contributes to its
/// destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Bilinear,
}

/// Downscales `src` (`src_w`x`src_h`, RGBA8888) into `dst`
/// (`dst_w`x`dst_h`). Each destination dimension must equal the matching
/// source dimension (no-op on that axis) or exactly half of it (rounded
/// down is not supported; callers must pass `src_dim / 2`).
pub fn scale_down(
    filter: FilterMode,
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    dst: &mut [u8],
) -> Result<(), Error> {
    if !(dst_w == src_w || dst_w * 2 == src_w) {
        return Err(Error::InvalidArgument(format!(
            "destination width {dst_w} is neither equal to nor half of source width {src_w}"
        )));
    }
    if !(dst_h == src_h || dst_h * 2 == src_h) {
        return Err(Error::InvalidArgument(format!(
            "destination height {dst_h} is neither equal to nor half of source height {src_h}"
        )));
    }

    let src_n = src_w as usize * src_h as usize;
    let dst_n = dst_w as usize * dst_h as usize;
    assert_eq!(src.len(), src_n * 4);
    assert_eq!(dst.len(), dst_n * 4);

    let horiz_off: usize = if dst_w == src_w { 0 } else { 1 };
    let vert_off: usize = if dst_h == src_h { 0 } else { 1 };
    let per_col: usize = if dst_w == src_w { 1 } else { 2 };
    let per_row: usize = if dst_h == src_h { 1 } else { 2 };

    let (corner_x, corner_y) = match filter {
        FilterMode::UpperLeft => (0, 0),
        FilterMode::UpperRight => (horiz_off, 0),
        FilterMode::LowerLeft => (0, vert_off),
        FilterMode::LowerRight => (horiz_off, vert_off),
        FilterMode::Bilinear => (0, 0),
    };

    let src_w = src_w as usize;
    let dst_w_usize = dst_w as usize;

    parallel::fill(dst, 4, dst_n, THRESHOLD, move |start, d| {
        for (i, dp) in d.chunks_exact_mut(4).enumerate() {
            let dst_index = start + i;
            let dx = dst_index % dst_w_usize;
            let dy = dst_index / dst_w_usize;
            let base_x = dx * per_col;
            let base_y = dy * per_row;

            if filter == FilterMode::Bilinear {
                let mut sums = [0u32; 4];
                let mut count = 0u32;
                for oy in 0..=vert_off {
                    for ox in 0..=horiz_off {
                        let sx = base_x + ox;
                        let sy = base_y + oy;
                        let idx = (sy * src_w + sx) * 4;
                        for c in 0..4 {
                            sums[c] += src[idx + c] as u32;
                        }
                        count += 1;
                    }
                }
                for c in 0..4 {
                    dp[c] = (sums[c] / count) as u8;
                }
            } else {
                let sx = base_x + corner_x;
                let sy = base_y + corner_y;
                let idx = (sy * src_w + sx) * 4;
                dp.copy_from_slice(&src[idx..idx + 4]);
            }
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: u32, h: u32) -> Vec<u8> {
        let mut buf = vec![0u8; w as usize * h as usize * 4];
        for (i, px) in buf.chunks_exact_mut(4).enumerate() {
            let v = ((i * 37) % 256) as u8;
            px.copy_from_slice(&[v, v.wrapping_add(1), v.wrapping_add(2), 255]);
        }
        buf
    }

    #[test]
    fn identity_when_dimensions_match() {
        let src = checkerboard(4, 4);
        let mut dst = vec![0u8; src.len()];
        scale_down(FilterMode::Bilinear, 4, 4, 4, 4, &src, &mut dst).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn bilinear_averages_four_source_pixels() {
        let src: Vec<u8> = vec![
            0, 0, 0, 255, 100, 0, 0, 255, //
            0, 100, 0, 255, 0, 0, 100, 255, //
        ];
        let mut dst = vec![0u8; 4];
        scale_down(FilterMode::Bilinear, 2, 2, 1, 1, &src, &mut dst).unwrap();
        assert_eq!(dst, vec![25, 25, 25, 255]);
    }

    #[test]
    fn nearest_corner_picks_expected_source_pixel() {
        let src: Vec<u8> = vec![
            1, 1, 1, 255, 2, 2, 2, 255, //
            3, 3, 3, 255, 4, 4, 4, 255, //
        ];
        let mut dst = vec![0u8; 4];
        scale_down(FilterMode::UpperLeft, 2, 2, 1, 1, &src, &mut dst).unwrap();
        assert_eq!(dst, vec![1, 1, 1, 255]);

        scale_down(FilterMode::LowerRight, 2, 2, 1, 1, &src, &mut dst).unwrap();
        assert_eq!(dst, vec![4, 4, 4, 255]);
    }

    #[test]
    fn rejects_non_half_non_equal_dimensions() {
        let src = checkerboard(4, 4);
        let mut dst = vec![0u8; 3 * 3 * 4];
        let err = scale_down(FilterMode::Bilinear, 4, 4, 3, 3, &src, &mut dst).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn one_axis_can_stay_fixed_while_the_other_halves() {
        let src = checkerboard(4, 2);
        let mut dst = vec![0u8; 2 * 2 * 4];
        assert!(scale_down(FilterMode::Bilinear, 4, 2, 2, 2, &src, &mut dst).is_ok());
    }
}
