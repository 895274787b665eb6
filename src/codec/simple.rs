//! Uncompressed formats whose encoded layout is a fixed byte permutation of
//! RGBA8888 (straight memcpy, channel swaps, or the oddball ARGB8888 layout).

use crate::parallel;

const THRESHOLD: usize = parallel::DEFAULT_THRESHOLD;

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// RGBA8888: identity mapping in both directions.
pub fn load_rgba8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    dst.copy_from_slice(src);
}

pub fn save_rgba8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_rgba8888(dst, src, width, height);
}

/// BGRA8888: swap R and B.
pub fn load_bgra8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    swap_rb(dst, src, width, height);
}

pub fn save_bgra8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    swap_rb(dst, src, width, height);
}

fn swap_rb(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[2];
            dp[1] = sp[1];
            dp[2] = sp[0];
            dp[3] = sp[3];
        }
    });
}

/// ABGR8888: full channel reversal, which is its own inverse.
pub fn load_abgr8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    reverse(dst, src, width, height);
}

pub fn save_abgr8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    reverse(dst, src, width, height);
}

fn reverse(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[3];
            dp[1] = sp[2];
            dp[2] = sp[1];
            dp[3] = sp[0];
        }
    });
}

/// ARGB8888 is not actually ARGB: the on-disk byte order is `G, B, A, R`.
/// This is intentional and matches observed Source engine behavior.
pub fn load_argb8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            // src = [g, b, a, r] -> canonical [r, g, b, a]
            dp[0] = sp[3];
            dp[1] = sp[0];
            dp[2] = sp[1];
            dp[3] = sp[2];
        }
    });
}

pub fn save_argb8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            // canonical [r, g, b, a] -> dst [g, b, a, r]
            dp[0] = sp[1];
            dp[1] = sp[2];
            dp[2] = sp[3];
            dp[3] = sp[0];
        }
    });
}

/// BGRX8888: like BGRA8888 but the 4th byte carries no alpha.
pub fn load_bgrx8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[2];
            dp[1] = sp[1];
            dp[2] = sp[0];
            dp[3] = 255;
        }
    });
}

pub fn save_bgrx8888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 4, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[2];
            dp[1] = sp[1];
            dp[2] = sp[0];
            dp[3] = 0;
        }
    });
}

/// RGB888: drop/fill alpha.
pub fn load_rgb888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 3);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 3, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(3).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[0];
            dp[1] = sp[1];
            dp[2] = sp[2];
            dp[3] = 255;
        }
    });
}

pub fn save_rgb888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 3);
    parallel::transform(src, dst, 4, 3, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(3)) {
            dp.copy_from_slice(&sp[0..3]);
        }
    });
}

/// BGR888: like RGB888 with R and B swapped.
pub fn load_bgr888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 3);
    assert_eq!(dst.len(), n * 4);
    parallel::transform(src, dst, 3, 4, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(3).zip(d.chunks_exact_mut(4)) {
            dp[0] = sp[2];
            dp[1] = sp[1];
            dp[2] = sp[0];
            dp[3] = 255;
        }
    });
}

pub fn save_bgr888(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    let n = pixel_count(width, height);
    assert_eq!(src.len(), n * 4);
    assert_eq!(dst.len(), n * 3);
    parallel::transform(src, dst, 4, 3, n, THRESHOLD, |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(3)) {
            dp[0] = sp[2];
            dp[1] = sp[1];
            dp[2] = sp[0];
        }
    });
}

/// UVWQ8888 and UVLX8888 are treated as opaque RGBA-shaped containers: the
/// four on-disk bytes map straight onto the four canonical channels.
pub fn load_rgba_shaped(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    load_rgba8888(dst, src, width, height);
}

pub fn save_rgba_shaped(dst: &mut [u8], src: &[u8], width: u32, height: u32) {
    save_rgba8888(dst, src, width, height);
}
