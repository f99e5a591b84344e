//! Coarse-grid placement for initial structures.

use glam::DVec2;
use rand::seq::index;
use rand::RngCore;

/// Pick up to `count` distinct cells of a `cell`-sized grid laid over a
/// `width` x `height` area, leaving a one-cell margin along every edge.
///
/// Each point is the top-left corner of its cell. Fewer points come back
/// when the grid has fewer than `count` cells.
pub fn raster_points(
    rng: &mut dyn RngCore,
    width: f64,
    height: f64,
    cell: f64,
    count: usize,
) -> Vec<DVec2> {
    if cell <= 0.0 {
        return Vec::new();
    }
    let columns = ((width / cell).floor() as usize).saturating_sub(2);
    let rows = ((height / cell).floor() as usize).saturating_sub(2);
    let cells = columns * rows;
    let count = count.min(cells);
    if count == 0 {
        return Vec::new();
    }

    index::sample(rng, cells, count)
        .into_iter()
        .map(|i| {
            let column = (i % columns) as f64 + 1.0;
            let row = (i / columns) as f64 + 1.0;
            DVec2::new(column * cell, row * cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn points_are_distinct_inset_cell_corners() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = raster_points(&mut rng, 1000.0, 600.0, 100.0, 6);
        assert_eq!(points.len(), 6);
        for (i, p) in points.iter().enumerate() {
            assert!(p.x >= 100.0 && p.x <= 800.0, "x out of range: {p}");
            assert!(p.y >= 100.0 && p.y <= 400.0, "y out of range: {p}");
            assert_eq!(p.x % 100.0, 0.0);
            assert_eq!(p.y % 100.0, 0.0);
            assert!(points[i + 1..].iter().all(|q| q != p), "duplicate {p}");
        }
    }

    #[test]
    fn count_is_capped_at_cell_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        // 4x3 grid minus the margin leaves 2x1 cells.
        let points = raster_points(&mut rng, 400.0, 300.0, 100.0, 10);
        assert_eq!(points.len(), 2);
        assert!(raster_points(&mut rng, 150.0, 150.0, 100.0, 3).is_empty());
    }
}
