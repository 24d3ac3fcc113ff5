use num::{BigRational, Zero};

use super::*;

/// Graypes run at one meter per second towards their nearest neighbor; prints the time in
/// hundredths of a second (rounded up) until the first two meet. The closest pair is a
/// Delaunay edge.
pub struct Graypes;

impl Problem for Graypes {
    const NAME: &'static str = "graypes";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of graypes")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };
        let points = (0..n)
            .map(|_| input.next_point("graype"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let dt = Delaunay::from_points(&points);
        // two graypes on the same spot meet right away
        let closest = if dt.number_of_vertices() < n {
            BigRational::zero()
        } else {
            dt.finite_edges()
                .into_iter()
                .map(|(u, v)| exact_squared_distance(&dt.point(u), &dt.point(v)))
                .min()
                .unwrap_or_else(BigRational::zero)
        };

        // each graype covers half the distance: 100 * d / 2 = sqrt(2500 d^2)
        let hundredths = ceil_sqrt(&(closest * BigRational::from_integer(2500.into())));
        writeln!(output, "{hundredths}")?;
        Ok(Flow::Continue)
    }
}
