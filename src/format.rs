//! The pixel-format registry: a fixed table mapping each on-disk VTF format
//! to its load/save implementations, indexed by a stable tag.

use crate::codec::{block, bluescreen, intensity, packed, simple};
use crate::error::{Direction, Error, InitializationMismatch};

type LoadFn = fn(&mut [u8], &[u8], u32, u32);
type SaveFn = fn(&mut [u8], &[u8], u32, u32);

struct FormatEntry {
    name: &'static str,
    load: Option<LoadFn>,
    save: Option<SaveFn>,
}

const fn entry(name: &'static str, load: Option<LoadFn>, save: Option<SaveFn>) -> FormatEntry {
    FormatEntry { name, load, save }
}

/// Every pixel format this crate knows the on-disk layout of, in the same
/// order as the registry table. The numeric value of each variant is its
/// stable registry tag and must never be reassigned once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
pub enum PixelFormat {
    Rgba8888 = 0,
    Bgra8888 = 1,
    Abgr8888 = 2,
    Argb8888 = 3,
    Bgrx8888 = 4,
    Rgb888 = 5,
    Bgr888 = 6,
    Rgb565 = 7,
    Bgr565 = 8,
    Bgrx5551 = 9,
    Bgra5551 = 10,
    Bgra4444 = 11,
    I8 = 12,
    Ia88 = 13,
    A8 = 14,
    Uv88 = 15,
    Uvwq8888 = 16,
    Uvlx8888 = 17,
    Rgb888Bluescreen = 18,
    Bgr888Bluescreen = 19,
    Dxt1 = 20,
    Dxt1OneBitAlpha = 21,
    Dxt3 = 22,
    Dxt5 = 23,
    Ati2N = 24,
    P8 = 25,
    Rgba16161616 = 26,
    Rgba16161616F = 27,
    None = 28,
    Ati1N = 29,
}

const FORMAT_COUNT: usize = 30;

impl PixelFormat {
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// The number of bytes a `width`x`height` image encodes to in this
    /// format, or `None` if the format has no stable byte count (the
    /// unimplemented HDR/palette/`NONE` entries).
    ///
    /// Block formats below the 4x4 minimum encode to zero bytes, matching
    /// the "skip encoding entirely" rule their codecs follow.
    pub fn encoded_len(self, width: u32, height: u32) -> Option<usize> {
        let n = width as usize * height as usize;
        let block_len = |block_bytes: usize| {
            if width < crate::bcn::BLOCK_DIM as u32 || height < crate::bcn::BLOCK_DIM as u32 {
                0
            } else {
                block::block_count(width, height) * block_bytes
            }
        };
        let len = match self {
            PixelFormat::Rgba8888
            | PixelFormat::Bgra8888
            | PixelFormat::Abgr8888
            | PixelFormat::Argb8888
            | PixelFormat::Bgrx8888
            | PixelFormat::Uvwq8888
            | PixelFormat::Uvlx8888 => n * 4,
            PixelFormat::Rgb888 | PixelFormat::Bgr888 | PixelFormat::Rgb888Bluescreen | PixelFormat::Bgr888Bluescreen => {
                n * 3
            }
            PixelFormat::Rgb565
            | PixelFormat::Bgr565
            | PixelFormat::Bgrx5551
            | PixelFormat::Bgra5551
            | PixelFormat::Bgra4444
            | PixelFormat::Ia88
            | PixelFormat::Uv88 => n * 2,
            PixelFormat::I8 | PixelFormat::A8 => n,
            PixelFormat::Dxt1 | PixelFormat::Dxt1OneBitAlpha => block_len(8),
            PixelFormat::Dxt3 | PixelFormat::Dxt5 | PixelFormat::Ati2N => block_len(16),
            PixelFormat::P8
            | PixelFormat::Rgba16161616
            | PixelFormat::Rgba16161616F
            | PixelFormat::None
            | PixelFormat::Ati1N => return None,
        };
        Some(len)
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        use PixelFormat::*;
        const ALL: [PixelFormat; FORMAT_COUNT] = [
            Rgba8888,
            Bgra8888,
            Abgr8888,
            Argb8888,
            Bgrx8888,
            Rgb888,
            Bgr888,
            Rgb565,
            Bgr565,
            Bgrx5551,
            Bgra5551,
            Bgra4444,
            I8,
            Ia88,
            A8,
            Uv88,
            Uvwq8888,
            Uvlx8888,
            Rgb888Bluescreen,
            Bgr888Bluescreen,
            Dxt1,
            Dxt1OneBitAlpha,
            Dxt3,
            Dxt5,
            Ati2N,
            P8,
            Rgba16161616,
            Rgba16161616F,
            None,
            Ati1N,
        ];
        ALL.get(tag as usize).copied()
    }
}

const REGISTRY: [FormatEntry; FORMAT_COUNT] = [
    entry("RGBA8888", Some(simple::load_rgba8888), Some(simple::save_rgba8888)),
    entry("BGRA8888", Some(simple::load_bgra8888), Some(simple::save_bgra8888)),
    entry("ABGR8888", Some(simple::load_abgr8888), Some(simple::save_abgr8888)),
    entry("ARGB8888", Some(simple::load_argb8888), Some(simple::save_argb8888)),
    entry("BGRX8888", Some(simple::load_bgrx8888), Some(simple::save_bgrx8888)),
    entry("RGB888", Some(simple::load_rgb888), Some(simple::save_rgb888)),
    entry("BGR888", Some(simple::load_bgr888), Some(simple::save_bgr888)),
    entry("RGB565", Some(packed::load_rgb565), Some(packed::save_rgb565)),
    entry("BGR565", Some(packed::load_bgr565), Some(packed::save_bgr565)),
    entry("BGRX5551", Some(packed::load_bgrx5551), Some(packed::save_bgrx5551)),
    entry("BGRA5551", Some(packed::load_bgra5551), Some(packed::save_bgra5551)),
    entry("BGRA4444", Some(packed::load_bgra4444), Some(packed::save_bgra4444)),
    entry("I8", Some(intensity::load_i8), Some(intensity::save_i8)),
    entry("IA88", Some(intensity::load_ia88), Some(intensity::save_ia88)),
    entry("A8", Some(intensity::load_a8), Some(intensity::save_a8)),
    entry("UV88", Some(intensity::load_uv88), Some(intensity::save_uv88)),
    entry("UVWQ8888", Some(simple::load_rgba_shaped), Some(simple::save_rgba_shaped)),
    entry("UVLX8888", Some(simple::load_rgba_shaped), Some(simple::save_rgba_shaped)),
    entry(
        "RGB888_BLUESCREEN",
        Some(bluescreen::load_rgb888_bluescreen),
        Some(bluescreen::save_rgb888_bluescreen),
    ),
    entry(
        "BGR888_BLUESCREEN",
        Some(bluescreen::load_bgr888_bluescreen),
        Some(bluescreen::save_bgr888_bluescreen),
    ),
    entry("DXT1", Some(block::load_dxt1), Some(block::save_dxt1)),
    entry(
        "DXT1_ONEBITALPHA",
        Some(block::load_dxt1_onebitalpha),
        Some(block::save_dxt1_onebitalpha),
    ),
    entry("DXT3", Some(block::load_dxt3), Some(block::save_dxt3)),
    entry("DXT5", Some(block::load_dxt5), Some(block::save_dxt5)),
    entry("ATI2N", Some(block::load_ati2n), Some(block::save_ati2n)),
    entry("P8", None, None),
    entry("RGBA16161616", None, None),
    entry("RGBA16161616F", None, None),
    entry("NONE", None, None),
    entry("ATI1N", None, None),
];

/// Cross-checks a caller-supplied `(tag, name)` enumeration against the
/// registry's own ordering. Call once at startup; a mismatch means the
/// caller's format enum and this crate's registry have drifted apart and
/// nothing further should be trusted.
pub fn init(external: &[(u8, &str)]) -> Result<(), InitializationMismatch> {
    for &(tag, caller_name) in external {
        let registry_name = REGISTRY
            .get(tag as usize)
            .map(|e| e.name)
            .unwrap_or("<out of range>");
        if registry_name != caller_name {
            return Err(InitializationMismatch {
                index: tag,
                registry_name,
                caller_name: caller_name.to_string(),
            });
        }
    }
    Ok(())
}

fn registry_entry(format: PixelFormat) -> &'static FormatEntry {
    &REGISTRY[format.tag() as usize]
}

/// Decodes `src`, encoded as `format`, into the canonical RGBA8888 `dst`.
///
/// # Panics
///
/// Panics if `src`/`dst` are not exactly the lengths `format` requires for
/// `width`x`height`, per each codec's own buffer-length contract.
pub fn load(format: PixelFormat, dst: &mut [u8], src: &[u8], width: u32, height: u32) -> Result<(), Error> {
    let entry = registry_entry(format);
    match entry.load {
        Some(f) => {
            f(dst, src, width, height);
            Ok(())
        }
        None => Err(Error::Unsupported {
            format_name: entry.name,
            direction: Direction::Load,
        }),
    }
}

/// Encodes canonical RGBA8888 `src` into `dst` using `format`.
///
/// # Panics
///
/// Panics if `src`/`dst` are not exactly the lengths `format` requires for
/// `width`x`height`, per each codec's own buffer-length contract.
pub fn save(format: PixelFormat, dst: &mut [u8], src: &[u8], width: u32, height: u32) -> Result<(), Error> {
    let entry = registry_entry(format);
    match entry.save {
        Some(f) => {
            f(dst, src, width, height);
            Ok(())
        }
        None => Err(Error::Unsupported {
            format_name: entry.name,
            direction: Direction::Save,
        }),
    }
}
