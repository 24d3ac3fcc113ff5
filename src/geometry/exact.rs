//! Exact arithmetic on finite `f64` values. Every finite double is a dyadic rational, so a
//! set of coordinates can be scaled by a common power of two to become arbitrary precision
//! integers without rounding. Homogeneous polynomials (all the predicates used here) keep
//! their sign under such a scaling.

use num::{BigInt, BigRational, Float, FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;

use super::Point;

/// Converts all values to integers sharing the same (dropped) power of two scaling factor
pub fn scaled_integers<const N: usize>(values: [f64; N]) -> [BigInt; N] {
    let decoded = values.map(|v| {
        debug_assert!(v.is_finite());
        v.integer_decode()
    });

    let min_exp = decoded
        .iter()
        .filter(|(mantissa, _, _)| *mantissa != 0)
        .map(|&(_, exp, _)| exp)
        .min()
        .unwrap_or(0);

    decoded.map(|(mantissa, exp, sign)| {
        let magnitude = BigInt::from(mantissa) << ((exp - min_exp) as usize);
        if sign < 0 { -magnitude } else { magnitude }
    })
}

/// Exact rational value of a finite double
pub fn to_rational(v: f64) -> BigRational {
    BigRational::from_float(v).unwrap_or_else(BigRational::zero)
}

pub fn sign_of(v: &BigInt) -> Ordering {
    if v.is_positive() {
        Ordering::Greater
    } else if v.is_negative() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Exact squared Euclidean distance between two points
pub fn exact_squared_distance(p: &Point, q: &Point) -> BigRational {
    let dx = to_rational(p.x) - to_rational(q.x);
    let dy = to_rational(p.y) - to_rational(q.y);
    &dx * &dx + &dy * &dy
}

/// Largest integer not above `v`
pub fn floor_to_f64(v: &BigRational) -> f64 {
    v.floor().to_integer().to_f64().unwrap_or(f64::NAN)
}

/// Smallest integer not below `v`
pub fn ceil_to_f64(v: &BigRational) -> f64 {
    v.ceil().to_integer().to_f64().unwrap_or(f64::NAN)
}

/// Smallest integer `k >= 0` with `k^2 >= v` for a non-negative rational `v`
pub fn ceil_sqrt(v: &BigRational) -> BigInt {
    let (num, den) = (v.numer(), v.denom());
    let approx = v.to_f64().unwrap_or(0.0).max(0.0).sqrt().ceil();
    let mut k = BigInt::from_f64(approx).unwrap_or_else(BigInt::zero);

    // k^2 * den >= num  <=>  k^2 >= v
    while k.is_positive() && (&k - 1u32).pow(2) * den >= *num {
        k -= 1u32;
    }
    while k.pow(2) * den < *num {
        k += BigInt::one();
    }
    k
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scaling_preserves_ratios() {
        let [a, b, c] = scaled_integers([0.5, 3.0, -0.25]);
        assert!(c.is_negative());
        assert_eq!(a, -&c * 2);
        assert_eq!(b, -&c * 12);

        let [z, w] = scaled_integers([0.0, 1.0]);
        assert!(z.is_zero());
        assert!(w.is_positive());
    }

    #[test]
    fn rounding() {
        let v = BigRational::new(BigInt::from(-7), BigInt::from(2));
        assert_eq!(floor_to_f64(&v), -4.0);
        assert_eq!(ceil_to_f64(&v), -3.0);
        assert_eq!(floor_to_f64(&to_rational(2.0)), 2.0);

        let d = exact_squared_distance(&Point::new(0.5, 1.0), &Point::new(-1.0, 3.0));
        assert_eq!(d, BigRational::new(BigInt::from(25), BigInt::from(4)));
    }

    #[test]
    fn exact_square_roots() {
        let r = |n: i64, d: i64| BigRational::new(BigInt::from(n), BigInt::from(d));
        assert_eq!(ceil_sqrt(&r(0, 1)), BigInt::from(0));
        assert_eq!(ceil_sqrt(&r(16, 1)), BigInt::from(4));
        assert_eq!(ceil_sqrt(&r(17, 1)), BigInt::from(5));
        assert_eq!(ceil_sqrt(&r(25, 4)), BigInt::from(3));

        // beyond double precision: (2^60 + 1)^2 - 1 needs ceil 2^60 + 1
        let big = (BigInt::from(1u64 << 60) + 1u32).pow(2) - 1u32;
        assert_eq!(
            ceil_sqrt(&BigRational::from_integer(big)),
            BigInt::from(1u64 << 60) + 1u32
        );
    }
}
