use crate::math::stats::StatsHelper;
use crate::prelude::{LoadError, LoadResult};

/// Reduces `data` to roughly `target_count` points by block averaging.
///
/// Blocks hold `max(1, len / target_count)` elements; the trailing block
/// keeps whatever is left and is averaged over its own length. The output
/// therefore has `ceil(len / block)` points, which may differ slightly
/// from `target_count`.
pub fn downsample<T: Copy + Into<f64>>(data: &[T], target_count: usize) -> LoadResult<Vec<f64>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if target_count == 0 {
        return Err(LoadError::DegenerateTarget(target_count));
    }
    let block_size = (data.len() / target_count).max(1);
    Ok(block_average(data, block_size))
}

/// Mean of each consecutive `block_size` run. A zero block size is treated as one.
pub fn block_average<T: Copy + Into<f64>>(data: &[T], block_size: usize) -> Vec<f64> {
    data.chunks(block_size.max(1))
        .map(StatsHelper::mean)
        .collect()
}
