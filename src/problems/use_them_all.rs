use num::{BigInt, BigRational, ToPrimitive};

use super::*;

/// Snow cannons spray discs of a common radius that must not overlap; prints the largest
/// integral radius, half the distance between the two closest cannons rounded down.
pub struct UseThemAll;

impl Problem for UseThemAll {
    const NAME: &'static str = "use_them_all";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of cannons")?;
        let cannons = (0..n)
            .map(|_| input.next_point("cannon"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let radius = closest_squared_distance(&cannons).map_or(0, |d| floor_half_distance(&d));
        writeln!(output, "{radius}")?;
        Ok(Flow::Continue)
    }
}

/// Exact squared distance of the closest pair; the closest pair is a Delaunay edge
pub(super) fn closest_squared_distance(points: &[Point]) -> Option<BigRational> {
    let dt = Delaunay::from_points(points);
    if dt.number_of_vertices() < points.len() {
        // two cannons on the same spot
        return Some(BigRational::from_integer(0.into()));
    }
    dt.finite_edges()
        .into_iter()
        .map(|(u, v)| exact_squared_distance(&dt.point(u), &dt.point(v)))
        .min()
}

/// `floor(sqrt(d / 4))` for an exact squared distance `d`
pub(super) fn floor_half_distance(squared: &BigRational) -> i64 {
    let quarter = squared / BigRational::from_integer(4.into());
    let mut k = ceil_sqrt(&quarter);
    if BigRational::from_integer(k.pow(2)) > quarter {
        k -= BigInt::from(1);
    }
    k.to_i64().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn half_closest_distance() {
        assert_solves(
            "use_them_all",
            "4\n3\n0 0\n3 0\n0 10\n2\n0 0\n4 0\n2\n0 0\n1 1\n3\n5 5\n5 5\n9 9\n",
            "1\n2\n0\n0",
        );
    }
}
