//! Robust geometric predicates: a floating point evaluation guarded by a forward error
//! bound, falling back to exact big integer arithmetic when the sign is uncertain.

use std::cmp::Ordering;

use num::BigInt;

use super::{exact::*, Point};

const EPS: f64 = f64::EPSILON / 2.0;
const ORIENTATION_BOUND: f64 = (3.0 + 16.0 * EPS) * EPS;
const INCIRCLE_BOUND: f64 = (10.0 + 96.0 * EPS) * EPS;
const DISTANCE_BOUND: f64 = 8.0 * EPS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl From<Ordering> for Orientation {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
            Ordering::Greater => Orientation::CounterClockwise,
        }
    }
}

impl Orientation {
    pub fn is_ccw(self) -> bool {
        self == Orientation::CounterClockwise
    }

    pub fn is_cw(self) -> bool {
        self == Orientation::Clockwise
    }

    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

fn filtered_sign(det: f64, bound: f64) -> Option<Ordering> {
    if det > bound {
        Some(Ordering::Greater)
    } else if -det > bound {
        Some(Ordering::Less)
    } else {
        None
    }
}

/// Orientation of the triangle *(a, b, c)*; `CounterClockwise` if `c` is left of `a->b`
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    let left = (a.x - c.x) * (b.y - c.y);
    let right = (a.y - c.y) * (b.x - c.x);
    let bound = ORIENTATION_BOUND * (left.abs() + right.abs());

    filtered_sign(left - right, bound)
        .unwrap_or_else(|| exact_orientation(a, b, c))
        .into()
}

fn exact_orientation(a: &Point, b: &Point, c: &Point) -> Ordering {
    let [ax, ay, bx, by, cx, cy] = scaled_integers([a.x, a.y, b.x, b.y, c.x, c.y]);
    let det: BigInt = (&ax - &cx) * (&by - &cy) - (&ay - &cy) * (&bx - &cx);
    sign_of(&det)
}

/// Position of `d` relative to the circle through the counter-clockwise triangle
/// *(a, b, c)*: `Greater` if strictly inside, `Equal` if on the circle, `Less` if outside.
/// For a clockwise triangle the result is mirrored.
pub fn incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> Ordering {
    let (adx, ady) = (a.x - d.x, a.y - d.y);
    let (bdx, bdy) = (b.x - d.x, b.y - d.y);
    let (cdx, cdy) = (c.x - d.x, c.y - d.y);

    let (bdxcdy, cdxbdy) = (bdx * cdy, cdx * bdy);
    let (cdxady, adxcdy) = (cdx * ady, adx * cdy);
    let (adxbdy, bdxady) = (adx * bdy, bdx * ady);
    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;

    filtered_sign(det, INCIRCLE_BOUND * permanent).unwrap_or_else(|| exact_incircle(a, b, c, d))
}

fn exact_incircle(a: &Point, b: &Point, c: &Point, d: &Point) -> Ordering {
    let [ax, ay, bx, by, cx, cy, dx, dy] =
        scaled_integers([a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y]);
    let (adx, ady) = (ax - &dx, ay - &dy);
    let (bdx, bdy) = (bx - &dx, by - &dy);
    let (cdx, cdy) = (cx - &dx, cy - &dy);

    let alift = &adx * &adx + &ady * &ady;
    let blift = &bdx * &bdx + &bdy * &bdy;
    let clift = &cdx * &cdx + &cdy * &cdy;

    let det: BigInt = alift * (&bdx * &cdy - &cdx * &bdy)
        + blift * (&cdx * &ady - &adx * &cdy)
        + clift * (&adx * &bdy - &bdx * &ady);
    sign_of(&det)
}

/// Compares the distances `|p - q|` and `|p - r|`
pub fn compare_distance(p: &Point, q: &Point, r: &Point) -> Ordering {
    let dq = p.squared_distance(q);
    let dr = p.squared_distance(r);

    filtered_sign(dq - dr, DISTANCE_BOUND * (dq + dr)).unwrap_or_else(|| {
        let [px, py, qx, qy, rx, ry] = scaled_integers([p.x, p.y, q.x, q.y, r.x, r.y]);
        let sq = |x: &BigInt, y: &BigInt| x * x + y * y;
        let dq = sq(&(&px - qx), &(&py - qy));
        let dr = sq(&(px - rx), &(py - ry));
        dq.cmp(&dr)
    })
}

/// Whether `p` lies strictly between `a` and `b`; all three are assumed collinear
pub fn strictly_between(a: &Point, b: &Point, p: &Point) -> bool {
    let within = |lo: f64, hi: f64, v: f64| (lo < v && v < hi) || (hi < v && v < lo);
    if a.x != b.x {
        within(a.x, b.x, p.x)
    } else {
        within(a.y, b.y, p.y)
    }
}

/// Circumcenter of a non-degenerate triangle in floating point
pub fn circumcenter(a: &Point, b: &Point, c: &Point) -> Point {
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);
    let d = 2.0 * (bx * cy - by * cx);
    let (b2, c2) = (bx * bx + by * by, cx * cx + cy * cy);
    Point::new(
        a.x + (cy * b2 - by * c2) / d,
        a.y + (bx * c2 - cx * b2) / d,
    )
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn orientation_of_triangles() {
        assert!(orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)).is_ccw());
        assert!(orientation(&p(0.0, 0.0), &p(0.0, 1.0), &p(1.0, 0.0)).is_cw());
        assert!(orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 3.0)).is_collinear());
    }

    #[test]
    fn nearly_collinear_points() {
        // the naive floating point determinant of these points is wrong for many offsets
        let a = p(0.5, 0.5);
        let b = p(12.0, 12.0);
        let c = p(24.0, 24.0);
        assert!(orientation(&a, &b, &c).is_collinear());

        let big = (1u64 << 52) as f64;
        let a = p(big, big + 1.0);
        let b = p(big + 2.0, big + 3.0);
        let c = p(-big, -big + 1.0);
        assert!(orientation(&a, &b, &c).is_collinear());
        let c = p(-big, -big + 2.0);
        assert!(orientation(&a, &b, &c).is_ccw());

        for i in 0..64 {
            let x = 0.5 + i as f64 * f64::EPSILON;
            let q = p(x, x);
            assert!(orientation(&p(12.0, 12.0), &p(24.0, 24.0), &q).is_collinear());
        }
    }

    #[test]
    fn incircle_of_square() {
        let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0));
        assert_eq!(incircle(&a, &b, &c, &p(0.0, 2.0)), Ordering::Equal);
        assert_eq!(incircle(&a, &b, &c, &p(1.0, 1.0)), Ordering::Greater);
        assert_eq!(incircle(&a, &b, &c, &p(3.0, 3.0)), Ordering::Less);
        // mirrored for clockwise triangles
        assert_eq!(incircle(&c, &b, &a, &p(1.0, 1.0)), Ordering::Less);

        let big = (1u64 << 40) as f64;
        let (a, b, c) = (p(big, 0.0), p(0.0, big), p(-big, 0.0));
        assert_eq!(incircle(&a, &b, &c, &p(0.0, -big)), Ordering::Equal);
    }

    #[test]
    fn distances() {
        let o = p(0.0, 0.0);
        assert_eq!(compare_distance(&o, &p(3.0, 4.0), &p(5.0, 0.0)), Ordering::Equal);
        assert_eq!(compare_distance(&o, &p(3.0, 4.0), &p(5.0, 1.0)), Ordering::Less);

        let big = (1u64 << 50) as f64;
        let q = p(big, 1.0);
        let r = p(big, 0.0);
        assert_eq!(compare_distance(&o, &q, &r), Ordering::Greater);
    }

    #[test]
    fn filter_agrees_with_exact() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x9e0);
        for _ in 0..2000 {
            let mut pt = || p(rng.gen_range(-8..8) as f64 / 4.0, rng.gen_range(-8..8) as f64 / 4.0);
            let (a, b, c, d) = (pt(), pt(), pt(), pt());
            assert_eq!(
                Orientation::from(exact_orientation(&a, &b, &c)),
                orientation(&a, &b, &c)
            );
            assert_eq!(exact_incircle(&a, &b, &c, &d), incircle(&a, &b, &c, &d));
        }
    }

    #[test]
    fn circumcenter_of_right_triangle() {
        let c = circumcenter(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 2.0));
        assert_eq!(c, p(2.0, 1.0));
    }

    #[test]
    fn between() {
        assert!(strictly_between(&p(0.0, 0.0), &p(2.0, 2.0), &p(1.0, 1.0)));
        assert!(!strictly_between(&p(0.0, 0.0), &p(2.0, 2.0), &p(2.0, 2.0)));
        assert!(strictly_between(&p(0.0, 3.0), &p(0.0, -1.0), &p(0.0, 0.0)));
    }
}
