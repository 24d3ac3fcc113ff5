use super::*;

/// Radius, rounded up, of the smallest antenna range covering all homes
pub struct Antenna;

pub(super) fn read_homes<R: BufRead>(input: &mut TokenReader<R>, n: usize) -> Result<Vec<Point>> {
    Ok((0..n)
        .map(|_| input.next_point("home"))
        .collect::<std::io::Result<_>>()?)
}

impl Problem for Antenna {
    const NAME: &'static str = "antenna";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of homes")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };

        let homes = read_homes(input, n)?;
        let radius = MinCircle::new(&homes).map_or(0.0, |mc| mc.circle.ceil_radius());
        writeln!(output, "{}", radius as i64)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn enclosing_radius() {
        assert_solves(
            "antenna",
            "3\n0 0\n4 0\n0 3\n1\n5 5\n2\n-1 0\n1 0\n4\n0 0\n0 0\n6 8\n6 8\n0\n",
            "3\n0\n1\n5\n",
        );
    }
}
