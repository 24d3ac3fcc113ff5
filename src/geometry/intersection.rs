use num::{BigInt, BigRational, Signed, Zero};

use super::*;

/// Closed segment between `a` and `b`; may be degenerate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Ray starting in `origin` passing through `through` (which differs from `origin`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub through: Point,
}

/// A point with exact rational coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct RationalPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

impl Ray {
    pub fn new(origin: Point, through: Point) -> Self {
        debug_assert_ne!(origin, through);
        Self { origin, through }
    }

    /// The point `origin + t * (through - origin)`
    pub fn point_at(&self, t: &BigRational) -> RationalPoint {
        let ox = to_rational(self.origin.x);
        let oy = to_rational(self.origin.y);
        let dx = to_rational(self.through.x) - &ox;
        let dy = to_rational(self.through.y) - &oy;
        RationalPoint {
            x: ox + t * dx,
            y: oy + t * dy,
        }
    }

    /// Whether the ray and the closed segment share a point
    pub fn intersects(&self, seg: &Segment) -> bool {
        let (o, d) = (&self.origin, &self.through);
        let side_a = orientation(o, d, &seg.a);
        let side_b = orientation(o, d, &seg.b);

        if side_a == side_b {
            return match side_a {
                Orientation::Collinear => self.first_parameter(seg).is_some(),
                _ => false,
            };
        }

        // the segment crosses the supporting line; check that the crossing is ahead of `o`
        let toward = orientation(o, &seg.a, &seg.b);
        if toward.is_collinear() {
            return true;
        }
        let crossing = if side_b.is_collinear() {
            flip(side_a)
        } else {
            side_b
        };
        toward == crossing
    }

    /// Smallest `t >= 0` such that `point_at(t)` lies on the segment
    pub fn first_parameter(&self, seg: &Segment) -> Option<BigRational> {
        let [ox, oy, dx, dy, ax, ay, bx, by] = scaled_integers([
            self.origin.x,
            self.origin.y,
            self.through.x,
            self.through.y,
            seg.a.x,
            seg.a.y,
            seg.b.x,
            seg.b.y,
        ]);
        let cross = |ux: &BigInt, uy: &BigInt, vx: &BigInt, vy: &BigInt| ux * vy - uy * vx;

        let (rx, ry) = (&dx - &ox, &dy - &oy);
        let (sx, sy) = (&bx - &ax, &by - &ay);
        let (wx, wy) = (&ax - &ox, &ay - &oy);

        let denom = cross(&rx, &ry, &sx, &sy);
        if !denom.is_zero() {
            let t = BigRational::new(cross(&wx, &wy, &sx, &sy), denom.clone());
            let u = BigRational::new(cross(&wx, &wy, &rx, &ry), denom);
            let on_segment = !u.is_negative() && u <= BigRational::from_integer(1.into());
            return (on_segment && !t.is_negative()).then_some(t);
        }

        if !cross(&wx, &wy, &rx, &ry).is_zero() {
            return None;
        }

        // collinear: project both endpoints onto the ray
        let len = &rx * &rx + &ry * &ry;
        let ta = BigRational::new(&wx * &rx + &wy * &ry, len.clone());
        let tb = BigRational::new((&bx - &ox) * &rx + (&by - &oy) * &ry, len);
        let (near, far) = if ta <= tb { (ta, tb) } else { (tb, ta) };
        if far.is_negative() {
            None
        } else {
            Some(near.max(BigRational::zero()))
        }
    }
}

fn flip(o: Orientation) -> Orientation {
    match o {
        Orientation::Clockwise => Orientation::CounterClockwise,
        Orientation::CounterClockwise => Orientation::Clockwise,
        Orientation::Collinear => Orientation::Collinear,
    }
}

/// Whether two closed segments share a point
pub fn segments_intersect(s: &Segment, t: &Segment) -> bool {
    let o1 = orientation(&s.a, &s.b, &t.a);
    let o2 = orientation(&s.a, &s.b, &t.b);
    let o3 = orientation(&t.a, &t.b, &s.a);
    let o4 = orientation(&t.a, &t.b, &s.b);

    let on = |seg: &Segment, p: &Point| {
        p.x >= seg.a.x.min(seg.b.x)
            && p.x <= seg.a.x.max(seg.b.x)
            && p.y >= seg.a.y.min(seg.b.y)
            && p.y <= seg.a.y.max(seg.b.y)
    };

    (o1 != o2 && o3 != o4 && !(o1.is_collinear() && o2.is_collinear()))
        || (o1.is_collinear() && on(s, &t.a))
        || (o2.is_collinear() && on(s, &t.b))
        || (o3.is_collinear() && on(t, &s.a))
        || (o4.is_collinear() && on(t, &s.b))
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn p(x: i64, y: i64) -> Point {
        Point::from((x, y))
    }

    fn ray(o: (i64, i64), d: (i64, i64)) -> Ray {
        Ray::new(p(o.0, o.1), p(d.0, d.1))
    }

    fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
        Segment::new(p(a.0, a.1), p(b.0, b.1))
    }

    fn int(v: i64) -> BigRational {
        BigRational::from_integer(v.into())
    }

    #[test]
    fn crossing_and_missing() {
        let r = ray((0, 0), (1, 0));
        assert!(r.intersects(&seg((5, -1), (5, 1))));
        assert!(!r.intersects(&seg((-5, -1), (-5, 1))));
        assert!(r.intersects(&seg((5, 0), (5, 3))));
        assert!(!r.intersects(&seg((5, 1), (5, 3))));
        assert!(r.intersects(&seg((0, -1), (0, 1))));
        assert_eq!(r.first_parameter(&seg((5, -1), (5, 1))), Some(int(5)));
    }

    #[test]
    fn collinear_segments() {
        let r = ray((0, 0), (2, 2));
        assert!(r.intersects(&seg((3, 3), (5, 5))));
        assert!(r.intersects(&seg((-3, -3), (1, 1))));
        assert!(!r.intersects(&seg((-3, -3), (-1, -1))));
        assert_eq!(r.first_parameter(&seg((5, 5), (3, 3))), Some(BigRational::new(3.into(), 2.into())));
        assert_eq!(r.first_parameter(&seg((-3, -3), (1, 1))), Some(int(0)));
        assert!(!r.intersects(&seg((0, 1), (5, 6))));
    }

    #[test]
    fn intersection_point() {
        let r = ray((0, 0), (3, 1));
        let t = r.first_parameter(&seg((2, -5), (2, 5))).unwrap();
        let hit = r.point_at(&t);
        assert_eq!(hit.x, int(2));
        assert_eq!(hit.y, BigRational::new(2.into(), 3.into()));
    }

    #[test]
    fn predicate_agrees_with_parameter() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x417);
        for _ in 0..3000 {
            let mut c = || (rng.gen_range(-4..5i64), rng.gen_range(-4..5i64));
            let (o, d, a, b) = (c(), c(), c(), c());
            if o == d {
                continue;
            }
            let r = ray(o, d);
            let s = seg(a, b);
            assert_eq!(r.intersects(&s), r.first_parameter(&s).is_some(), "{o:?} {d:?} {a:?} {b:?}");
        }
    }

    #[test]
    fn segment_pairs() {
        assert!(segments_intersect(&seg((0, 0), (2, 2)), &seg((0, 2), (2, 0))));
        assert!(segments_intersect(&seg((0, 0), (2, 2)), &seg((2, 2), (3, 0))));
        assert!(!segments_intersect(&seg((0, 0), (1, 1)), &seg((2, 2), (3, 3))));
        assert!(segments_intersect(&seg((0, 0), (2, 2)), &seg((1, 1), (3, 3))));
        assert!(!segments_intersect(&seg((0, 0), (2, 0)), &seg((0, 1), (2, 1))));
    }
}
