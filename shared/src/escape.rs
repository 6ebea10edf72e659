/// Number of iterations of `z = z² + c` that stay bounded by `|z| <= 2`,
/// capped at `max_iterations`.
///
/// The bound is checked after every update, so a `c` outside the radius-2 disk
/// escapes on the first update and yields `0`.
pub fn escape_time((re, im): (f64, f64), max_iterations: u32) -> u32 {
    let (mut zr, mut zi) = (0.0_f64, 0.0_f64);

    for i in 0..max_iterations {
        let next_r = zr * zr - zi * zi + re;
        zi = 2.0 * zr * zi + im;
        zr = next_r;

        if zr * zr + zi * zi > 4.0 {
            return i;
        }
    }

    max_iterations
}

/// RGBA color of a point that took `iterations` out of `max_iterations`.
///
/// Members of the set are black; everything else sits on a linear
/// blue-to-yellow gradient.
pub fn color(iterations: u32, max_iterations: u32) -> [u8; 4] {
    if iterations >= max_iterations {
        return [0, 0, 0, 255];
    }

    let hue = (255 * u64::from(iterations) / u64::from(max_iterations)) as u8;
    [hue, hue, 255 - hue, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_outside_radius_escape_immediately() {
        for c in [(2.5, 0.0), (0.0, -2.1), (-1.5, 1.5), (3.0, 4.0)] {
            assert_eq!(escape_time(c, 500), 0, "{c:?}");
        }
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time((0.0, 0.0), 500), 500);
        assert_eq!(escape_time((0.0, 0.0), 1), 1);
    }

    #[test]
    fn known_members_reach_the_cap() {
        // -1 cycles between 0 and -1, i sits on a period-2 orbit.
        assert_eq!(escape_time((-1.0, 0.0), 200), 200);
        assert_eq!(escape_time((0.0, 1.0), 200), 200);
        assert_eq!(escape_time((-2.0, 0.0), 200), 200);
    }

    #[test]
    fn slow_escape_counts_bounded_updates() {
        // z: 1, 2, 5 -> the third update leaves the disk.
        assert_eq!(escape_time((1.0, 0.0), 100), 2);
        // z: 0.5, 0.75, 1.0625, 1.6289, 3.1533
        assert_eq!(escape_time((0.5, 0.0), 100), 4);
    }

    #[test]
    fn zero_cap_returns_zero() {
        assert_eq!(escape_time((0.0, 0.0), 0), 0);
    }

    #[test]
    fn members_are_black() {
        assert_eq!(color(500, 500), [0, 0, 0, 255]);
    }

    #[test]
    fn gradient_runs_from_blue_to_yellow() {
        assert_eq!(color(0, 500), [0, 0, 255, 255]);
        assert_eq!(color(250, 500), [127, 127, 128, 255]);
        assert_eq!(color(499, 500), [254, 254, 1, 255]);
    }
}
