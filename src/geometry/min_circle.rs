use num::{BigRational, ToPrimitive, Zero};
use rand::{SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg64Mcg;
use smallvec::SmallVec;

use super::*;

/// Circle with exact rational center and squared radius
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: RationalPoint,
    pub squared_radius: BigRational,
}

impl Circle {
    fn point(p: &Point) -> Self {
        Self {
            center: RationalPoint {
                x: to_rational(p.x),
                y: to_rational(p.y),
            },
            squared_radius: BigRational::zero(),
        }
    }

    fn diametral(p: &Point, q: &Point) -> Self {
        let two = BigRational::from_integer(2.into());
        let center = RationalPoint {
            x: (to_rational(p.x) + to_rational(q.x)) / &two,
            y: (to_rational(p.y) + to_rational(q.y)) / two,
        };
        let squared_radius = squared_distance(&center, p);
        Self {
            center,
            squared_radius,
        }
    }

    /// Circle through three points; for collinear points the diametral circle of the two
    /// extreme ones
    fn through(p: &Point, q: &Point, r: &Point) -> Self {
        if orientation(p, q, r).is_collinear() {
            let pairs = [(p, q), (p, r), (q, r)];
            return pairs
                .into_iter()
                .map(|(a, b)| Self::diametral(a, b))
                .max_by(|a, b| a.squared_radius.cmp(&b.squared_radius))
                .unwrap_or_else(|| Self::point(p));
        }

        let (px, py) = (to_rational(p.x), to_rational(p.y));
        let (bx, by) = (to_rational(q.x) - &px, to_rational(q.y) - &py);
        let (cx, cy) = (to_rational(r.x) - &px, to_rational(r.y) - &py);
        let d = BigRational::from_integer(2.into()) * (&bx * &cy - &by * &cx);
        let b2 = &bx * &bx + &by * &by;
        let c2 = &cx * &cx + &cy * &cy;

        let center = RationalPoint {
            x: px + (&cy * &b2 - &by * &c2) / &d,
            y: py + (&bx * &c2 - &cx * &b2) / d,
        };
        let squared_radius = squared_distance(&center, p);
        Self {
            center,
            squared_radius,
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        // floating point filter; only points near the boundary are decided exactly
        let (cx, cy) = (
            self.center.x.to_f64().unwrap_or(f64::NAN),
            self.center.y.to_f64().unwrap_or(f64::NAN),
        );
        let r2 = self.squared_radius.to_f64().unwrap_or(f64::NAN);
        let (dx, dy) = (p.x - cx, p.y - cy);
        let d2 = dx * dx + dy * dy;
        let magnitude = cx.abs() + cy.abs() + p.x.abs() + p.y.abs();
        let tolerance = 1e-12 * (magnitude * (dx.abs() + dy.abs()) + d2 + r2);
        if d2 + tolerance < r2 {
            return true;
        }
        if d2 > r2 + tolerance {
            return false;
        }
        squared_distance(&self.center, p) <= self.squared_radius
    }

    /// Smallest integer not below the radius
    pub fn ceil_radius(&self) -> f64 {
        ceil_sqrt(&self.squared_radius).to_f64().unwrap_or(f64::NAN)
    }
}

fn squared_distance(c: &RationalPoint, p: &Point) -> BigRational {
    let dx = &c.x - to_rational(p.x);
    let dy = &c.y - to_rational(p.y);
    &dx * &dx + &dy * &dy
}

/// Smallest enclosing circle of a non-empty point set together with a minimal set of points
/// on its boundary that determine it.
#[derive(Clone, Debug)]
pub struct MinCircle {
    pub circle: Circle,
    /// Indices into the input
    pub support: SmallVec<[usize; 3]>,
}

impl MinCircle {
    /// Randomized incremental construction (Welzl) with a fixed seed; expected linear time.
    /// Returns `None` for an empty input.
    pub fn new(points: &[Point]) -> Option<Self> {
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.shuffle(&mut Pcg64Mcg::seed_from_u64(0x5eed_c1c1e));

        let first = *order.first()?;
        let mut circle = Circle::point(&points[first]);
        let mut support: SmallVec<[usize; 3]> = SmallVec::from_slice(&[first]);

        for i in 1..order.len() {
            let pi = order[i];
            if circle.contains(&points[pi]) {
                continue;
            }

            circle = Circle::point(&points[pi]);
            support = SmallVec::from_slice(&[pi]);
            for j in 0..i {
                let pj = order[j];
                if circle.contains(&points[pj]) {
                    continue;
                }

                circle = Circle::diametral(&points[pi], &points[pj]);
                support = SmallVec::from_slice(&[pi, pj]);
                for &pk in &order[..j] {
                    if circle.contains(&points[pk]) {
                        continue;
                    }
                    circle = Circle::through(&points[pi], &points[pj], &points[pk]);
                    support = SmallVec::from_slice(&[pi, pj, pk]);
                }
            }
        }

        // a circumcircle of a right or obtuse support triangle is determined by two points
        if support.len() == 3 {
            for skip in 0..3 {
                let (a, b) = match skip {
                    0 => (support[1], support[2]),
                    1 => (support[0], support[2]),
                    _ => (support[0], support[1]),
                };
                let candidate = Circle::diametral(&points[a], &points[b]);
                if candidate.squared_radius == circle.squared_radius {
                    support = SmallVec::from_slice(&[a, b]);
                    break;
                }
            }
        }

        Some(Self { circle, support })
    }
}
