use super::{antenna::read_homes, *};

/// Like `antenna`, but one home may be left uncovered. Only removing a support point of the
/// full circle can shrink it.
pub struct AlmostAntenna;

impl Problem for AlmostAntenna {
    const NAME: &'static str = "almost_antenna";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of homes")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };

        let homes = read_homes(input, n)?;
        let mut best: Option<Circle> = None;
        if let Some(full) = MinCircle::new(&homes) {
            for &skip in &full.support {
                let rest: Vec<Point> = homes
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, p)| *p)
                    .collect();
                let Some(smaller) = MinCircle::new(&rest) else {
                    continue;
                };
                if best
                    .as_ref()
                    .is_none_or(|b| smaller.circle.squared_radius < b.squared_radius)
                {
                    best = Some(smaller.circle);
                }
            }
        }

        let radius = best.map_or(0.0, |c| c.ceil_radius());
        writeln!(output, "{}", radius as i64)?;
        Ok(Flow::Continue)
    }
}
