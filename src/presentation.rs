//! Presentation helpers that are not part of the VTF pixel-format codec
//! proper: flattening alpha against a background colour, and emitting a
//! canonical RGBA8888 buffer as a PPM (P6) byte stream.

use crate::parallel;

const THRESHOLD: usize = parallel::DEFAULT_THRESHOLD;

fn composite(r: u8, g: u8, b: u8, a: u8, bg: [u8; 3]) -> [u8; 3] {
    let a = a as u32;
    let inv = 255 - a;
    let blend = |fg: u8, bg: u8| (((fg as u32 * a) + (bg as u32 * inv)) / 255) as u8;
    [blend(r, bg[0]), blend(g, bg[1]), blend(b, bg[2])]
}

/// Writes `w * h` flattened RGB pixels into `dst` (`3 * w * h` bytes).
/// With a background, alpha is composited out (truncating division); with
/// no background, RGB passes through unchanged and alpha is discarded.
pub fn alpha_flatten(pixels: &[u8], dst: &mut [u8], w: u32, h: u32, bg: Option<[u8; 3]>) {
    let n = w as usize * h as usize;
    assert_eq!(pixels.len(), n * 4);
    assert_eq!(dst.len(), n * 3);
    parallel::transform(pixels, dst, 4, 3, n, THRESHOLD, move |_, s, d| {
        for (sp, dp) in s.chunks_exact(4).zip(d.chunks_exact_mut(3)) {
            let rgb = match bg {
                Some(bg) => composite(sp[0], sp[1], sp[2], sp[3], bg),
                None => [sp[0], sp[1], sp[2]],
            };
            dp.copy_from_slice(&rgb);
        }
    });
}

/// Renders `pixels` (RGBA8888, `w`x`h`) as a binary PPM (P6) byte stream:
/// an ASCII header `"P6 <w> <h> 255\n"` followed directly by `3 * w * h`
/// RGB bytes, with alpha flattened against `bg` the same way as
/// [alpha_flatten].
pub fn ppm(pixels: &[u8], w: u32, h: u32, bg: Option<[u8; 3]>) -> Vec<u8> {
    let n = w as usize * h as usize;
    assert_eq!(pixels.len(), n * 4);

    let header = format!("P6 {w} {h} 255\n");
    let mut out = Vec::with_capacity(header.len() + n * 3);
    out.extend_from_slice(header.as_bytes());

    let body_start = out.len();
    out.resize(body_start + n * 3, 0);
    alpha_flatten(pixels, &mut out[body_start..], w, h, bg);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_header_is_exact() {
        let pixels = vec![0u8; 3 * 2 * 4];
        let out = ppm(&pixels, 3, 2, None);
        assert!(out.starts_with(b"P6 3 2 255\n"));
        assert_eq!(out.len(), b"P6 3 2 255\n".len() + 3 * 2 * 3);
    }

    #[test]
    fn ppm_passthrough_without_background() {
        let pixels = vec![10u8, 20, 30, 0];
        let out = ppm(&pixels, 1, 1, None);
        let header_len = b"P6 1 1 255\n".len();
        assert_eq!(&out[header_len..], &[10, 20, 30]);
    }

    #[test]
    fn alpha_flatten_composites_against_background() {
        let pixels = vec![255u8, 0, 0, 128];
        let mut dst = vec![0u8; 3];
        alpha_flatten(&pixels, &mut dst, 1, 1, Some([0, 0, 0]));
        assert_eq!(dst, vec![(255u32 * 128 / 255) as u8, 0, 0]);
    }

    #[test]
    fn alpha_flatten_fully_transparent_yields_pure_background() {
        let pixels = vec![255u8, 255, 255, 0];
        let mut dst = vec![0u8; 3];
        alpha_flatten(&pixels, &mut dst, 1, 1, Some([10, 20, 30]));
        assert_eq!(dst, vec![10, 20, 30]);
    }
}
