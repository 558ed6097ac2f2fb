// Stateless shape rasterizers.
// Every function only decides *which* pixels to write; bounds are the target's business,
// so shapes hanging off the canvas edge are simply clipped.

use crate::surface::PixelTarget;
use crate::types::Color;
use rand::Rng;

/// Stamp the brush: a filled disk of radius `size / 2`, or a single pixel for size <= 1.
/// Visual: one round dab of paint.
pub fn brush(target: &mut impl PixelTarget, x: i32, y: i32, size: i32, color: Color) {
    if size <= 1 {
        target.set_pixel(x, y, color);
        return;
    }
    let r = size / 2;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                target.set_pixel(x + dx, y + dy, color);
            }
        }
    }
}

/// Bresenham line that stamps a brush of `size` at every step.
/// Stepping always starts from the lexicographically smaller endpoint, so
/// line(a, b) and line(b, a) cover the same pixels.
pub fn line(target: &mut impl PixelTarget, x0: i32, y0: i32, x1: i32, y1: i32, size: i32, color: Color) {
    let ((mut x0, mut y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        brush(target, x0, y0, size, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Sort two corners into (min_x, min_y, max_x, max_y).
fn normalize(x0: i32, y0: i32, x1: i32, y1: i32) -> (i32, i32, i32, i32) {
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

/// 1px rectangle outline through both corners.
pub fn rect(target: &mut impl PixelTarget, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (min_x, min_y, max_x, max_y) = normalize(x0, y0, x1, y1);
    for x in min_x..=max_x {
        target.set_pixel(x, min_y, color);
        target.set_pixel(x, max_y, color);
    }
    for y in min_y..=max_y {
        target.set_pixel(min_x, y, color);
        target.set_pixel(max_x, y, color);
    }
}

/// Solid rectangle, both boundaries inclusive.
pub fn fill_rect(target: &mut impl PixelTarget, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (min_x, min_y, max_x, max_y) = normalize(x0, y0, x1, y1);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            target.set_pixel(x, y, color);
        }
    }
}

/// Midpoint circle outline, integer only. Negative radius draws nothing.
pub fn circle(target: &mut impl PixelTarget, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let mut x = radius;
    let mut y = 0;
    // decision variable: sign of the circle equation at the midpoint between candidates
    let mut d = 1 - radius;
    while x >= y {
        for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            target.set_pixel(cx + px, cy + py, color);
        }
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

/// Every point with dx² + dy² <= radius² inside the bounding square.
pub fn fill_circle(target: &mut impl PixelTarget, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                target.set_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Spray can: radius² samples uniform in the bounding square, samples outside the
/// disk are thrown away (not retried). Returns how many samples landed.
/// Visual: a speckled dot cloud, different every call.
pub fn spray(
    target: &mut impl PixelTarget,
    x: i32,
    y: i32,
    radius: i32,
    color: Color,
    rng: &mut impl Rng,
) -> usize {
    if radius <= 0 {
        return 0;
    }
    let r2 = radius * radius;
    let mut accepted = 0;
    for _ in 0..r2 {
        let dx = rng.gen_range(-radius..=radius);
        let dy = rng.gen_range(-radius..=radius);
        if dx * dx + dy * dy <= r2 {
            target.set_pixel(x + dx, y + dy, color);
            accepted += 1;
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    /// Collects every written point, ignoring color and bounds.
    #[derive(Default)]
    struct Recorder {
        points: BTreeSet<(i32, i32)>,
        writes: usize,
    }

    impl PixelTarget for Recorder {
        fn set_pixel(&mut self, x: i32, y: i32, _color: Color) {
            self.points.insert((x, y));
            self.writes += 1;
        }
    }

    fn record(f: impl FnOnce(&mut Recorder)) -> BTreeSet<(i32, i32)> {
        let mut rec = Recorder::default();
        f(&mut rec);
        rec.points
    }

    const C: Color = Color::BLACK;

    #[test]
    fn brush_small_sizes_write_one_pixel() {
        assert_eq!(record(|t| brush(t, 5, 5, 1, C)), BTreeSet::from([(5, 5)]));
        assert_eq!(record(|t| brush(t, 5, 5, 0, C)), BTreeSet::from([(5, 5)]));
    }

    #[test]
    fn brush_is_a_disk_of_half_size() {
        let plus = BTreeSet::from([(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        assert_eq!(record(|t| brush(t, 5, 5, 3, C)), plus);
        // size 2 and 3 share radius 1
        assert_eq!(record(|t| brush(t, 5, 5, 2, C)), plus);
        let big = record(|t| brush(t, 0, 0, 10, C));
        assert!(big.iter().all(|&(x, y)| x * x + y * y <= 25));
        assert!(big.contains(&(5, 0)) && big.contains(&(3, 4)));
        assert!(!big.contains(&(4, 4)));
    }

    #[test]
    fn thin_line_hits_both_endpoints_without_gaps() {
        let pts = record(|t| line(t, 0, 0, 10, 3, 1, C));
        assert_eq!(pts.len(), 11);
        assert!(pts.contains(&(0, 0)) && pts.contains(&(10, 3)));
        let xs: BTreeSet<i32> = pts.iter().map(|p| p.0).collect();
        assert_eq!(xs, (0..=10).collect());
    }

    #[test]
    fn line_is_symmetric_under_endpoint_swap() {
        let ends = [(0, 0), (2, 1), (-3, 7), (9, -4), (5, 5), (12, 0), (0, 13), (-6, -2)];
        for &(ax, ay) in &ends {
            for &(bx, by) in &ends {
                for size in [1, 4] {
                    let fwd = record(|t| line(t, ax, ay, bx, by, size, C));
                    let back = record(|t| line(t, bx, by, ax, ay, size, C));
                    assert_eq!(fwd, back, "({ax},{ay})-({bx},{by}) size {size}");
                }
            }
        }
    }

    #[test]
    fn degenerate_line_is_one_stamp() {
        assert_eq!(record(|t| line(t, 3, 3, 3, 3, 3, C)), record(|t| brush(t, 3, 3, 3, C)));
    }

    #[test]
    fn thick_diagonal_line_has_no_gaps() {
        let pts = record(|t| line(t, 0, 0, 20, 20, 5, C));
        // every point on the ideal diagonal is covered, as well as its immediate neighbours
        for i in 0..=20 {
            assert!(pts.contains(&(i, i)));
            assert!(pts.contains(&(i + 1, i)) && pts.contains(&(i, i + 1)));
        }
    }

    #[test]
    fn rect_outline_touches_only_the_border() {
        let pts = record(|t| rect(t, 10, 10, 50, 40, C));
        assert_eq!(pts.len(), 2 * 41 + 2 * 31 - 4);
        for &(x, y) in &pts {
            assert!(x == 10 || x == 50 || y == 10 || y == 40);
        }
    }

    #[test]
    fn rect_corner_order_does_not_matter() {
        let fwd = record(|t| rect(t, 10, 10, 50, 40, C));
        assert_eq!(fwd, record(|t| rect(t, 50, 40, 10, 10, C)));
        assert_eq!(fwd, record(|t| rect(t, 50, 10, 10, 40, C)));
        let filled = record(|t| fill_rect(t, 10, 10, 50, 40, C));
        assert_eq!(filled, record(|t| fill_rect(t, 50, 40, 10, 10, C)));
        assert_eq!(filled.len(), 41 * 31);
    }

    #[test]
    fn zero_radius_circles_are_a_single_point() {
        assert_eq!(record(|t| circle(t, 7, 8, 0, C)), BTreeSet::from([(7, 8)]));
        assert_eq!(record(|t| fill_circle(t, 7, 8, 0, C)), BTreeSet::from([(7, 8)]));
    }

    #[test]
    fn negative_radius_draws_nothing() {
        assert!(record(|t| circle(t, 0, 0, -1, C)).is_empty());
        assert!(record(|t| fill_circle(t, 0, 0, -3, C)).is_empty());
    }

    #[test]
    fn small_circle_outlines_match_midpoint_algorithm() {
        assert_eq!(
            record(|t| circle(t, 0, 0, 1, C)),
            BTreeSet::from([(1, 0), (0, 1), (-1, 0), (0, -1)])
        );
        assert_eq!(
            record(|t| circle(t, 0, 0, 2, C)),
            BTreeSet::from([
                (2, -1), (2, 0), (2, 1),
                (-2, -1), (-2, 0), (-2, 1),
                (-1, 2), (0, 2), (1, 2),
                (-1, -2), (0, -2), (1, -2),
            ])
        );
    }

    #[test]
    fn circle_outline_is_eightfold_symmetric_and_near_radius() {
        for r in 1..40 {
            let pts = record(|t| circle(t, 0, 0, r, C));
            for &(x, y) in &pts {
                for mirrored in [(y, x), (-x, y), (x, -y), (-y, -x)] {
                    assert!(pts.contains(&mirrored), "r={r} missing {mirrored:?}");
                }
                let d = ((x * x + y * y) as f64).sqrt();
                assert!((d - r as f64).abs() < 0.75, "r={r} point ({x},{y}) at {d}");
            }
        }
    }

    #[test]
    fn filled_circle_counts_lattice_points() {
        assert_eq!(record(|t| fill_circle(t, 0, 0, 1, C)).len(), 5);
        assert_eq!(record(|t| fill_circle(t, 0, 0, 2, C)).len(), 13);
        let filled = record(|t| fill_circle(t, 3, -2, 9, C));
        assert!(filled.iter().all(|&(x, y)| (x - 3).pow(2) + (y + 2).pow(2) <= 81));
        assert!(filled.contains(&(12, -2)) && !filled.contains(&(12, -1)));
    }

    #[test]
    fn spray_stays_inside_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        for r in [1, 3, 9, 27] {
            let pts = record(|t| {
                spray(t, 100, 50, r, C, &mut rng);
            });
            for &(x, y) in &pts {
                let (dx, dy) = (x - 100, y - 50);
                assert!(dx * dx + dy * dy <= r * r);
            }
        }
    }

    #[test]
    fn spray_zero_radius_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rec = Recorder::default();
        assert_eq!(spray(&mut rec, 0, 0, 0, C, &mut rng), 0);
        assert_eq!(rec.writes, 0);
    }

    #[test]
    fn spray_acceptance_matches_square_rejection_rate() {
        let r = 30;
        let trials = 200;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut total = 0usize;
        for _ in 0..trials {
            let mut rec = Recorder::default();
            let accepted = spray(&mut rec, 0, 0, r, C, &mut rng);
            assert_eq!(accepted, rec.writes);
            assert!(accepted <= (r * r) as usize);
            total += accepted;
        }
        let mean = total as f64 / trials as f64;

        // exact expectation for integer sampling: r² * (lattice points in disk / points in square)
        let in_disk = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| dx * dx + dy * dy))
            .filter(|&d| d <= r * r)
            .count() as f64;
        let side = (2 * r + 1) as f64;
        let expected = (r * r) as f64 * in_disk / (side * side);
        assert!((mean - expected).abs() / expected < 0.03, "mean {mean} vs {expected}");

        let continuous = (r * r) as f64 * std::f64::consts::FRAC_PI_4;
        assert!((mean - continuous).abs() / continuous < 0.10, "mean {mean} vs {continuous}");
    }
}
