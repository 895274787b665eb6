//! Static, work-stealing-free fan-out across CPU threads.
//!
//! Every per-pixel codec and presentation helper partitions its work into
//! contiguous, disjoint ranges up front and hands one range to each worker
//! thread via [`std::thread::scope`]. There is no shared queue and no
//! stealing: the same input always produces the same partition, which in
//! turn means the same output bytes regardless of how many threads happen
//! to be available. This mirrors the `output.chunks_mut(...)` fan-out
//! `squish` itself uses internally for whole-image block compression.

/// Below this many units of work, running on the calling thread outperforms
/// the cost of spawning workers.
pub const DEFAULT_THRESHOLD: usize = 4096;

/// Runs `f` once per disjoint, contiguous slice of `src`/`dst`, where both
/// slices are divided into `unit_count` equally-sized units of `src_unit`
/// and `dst_unit` bytes respectively.
///
/// `f` receives the index of the first unit in its chunk along with the
/// matching source and destination byte slices; it is responsible for
/// iterating over the units within its own chunk. Below `threshold` units
/// of total work, `f` is invoked once on the entire input with no threads
/// spawned, so correctness never depends on parallelism actually occurring.
///
/// # Panics
///
/// Panics if `src.len() != src_unit * unit_count` or
/// `dst.len() != dst_unit * unit_count`.
pub fn transform<F>(
    src: &[u8],
    dst: &mut [u8],
    src_unit: usize,
    dst_unit: usize,
    unit_count: usize,
    threshold: usize,
    f: F,
) where
    F: Fn(usize, &[u8], &mut [u8]) + Sync,
{
    assert_eq!(src.len(), src_unit * unit_count, "source length mismatch");
    assert_eq!(dst.len(), dst_unit * unit_count, "destination length mismatch");

    if unit_count == 0 {
        return;
    }

    if unit_count < threshold || src_unit == 0 || dst_unit == 0 {
        f(0, src, dst);
        return;
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(unit_count);
    let units_per_chunk = unit_count.div_ceil(workers);

    std::thread::scope(|scope| {
        let src_chunks = src.chunks(units_per_chunk * src_unit);
        let dst_chunks = dst.chunks_mut(units_per_chunk * dst_unit);
        let mut start_unit = 0;
        for (src_chunk, dst_chunk) in src_chunks.zip(dst_chunks) {
            let f = &f;
            let units_in_chunk = dst_chunk.len() / dst_unit;
            scope.spawn(move || f(start_unit, src_chunk, dst_chunk));
            start_unit += units_in_chunk;
        }
    });
}

/// Like [`transform`] but for operations that only write an output buffer
/// (e.g. PPM emission), with no matching input buffer of the same unit
/// count (the source pixel is looked up independently by the caller).
pub fn fill<F>(dst: &mut [u8], dst_unit: usize, unit_count: usize, threshold: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Sync,
{
    assert_eq!(dst.len(), dst_unit * unit_count, "destination length mismatch");

    if unit_count == 0 {
        return;
    }

    if unit_count < threshold || dst_unit == 0 {
        f(0, dst);
        return;
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(unit_count);
    let units_per_chunk = unit_count.div_ceil(workers);

    std::thread::scope(|scope| {
        let mut start_unit = 0;
        for dst_chunk in dst.chunks_mut(units_per_chunk * dst_unit) {
            let f = &f;
            let units_in_chunk = dst_chunk.len() / dst_unit;
            scope.spawn(move || f(start_unit, dst_chunk));
            start_unit += units_in_chunk;
        }
    });
}
