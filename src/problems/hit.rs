use super::*;

/// Does a ray hit any of the given obstacle segments?
pub struct Hit;

impl Problem for Hit {
    const NAME: &'static str = "hit";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of segments")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };

        let ray = Ray::new(input.next_point("ray origin")?, input.next_point("ray direction")?);
        let mut hit = false;
        for _ in 0..n {
            let segment = Segment::new(input.next_point("segment")?, input.next_point("segment")?);
            // keep reading so the next test case starts at the right token
            hit = hit || ray.intersects(&segment);
        }

        writeln!(output, "{}", if hit { "yes" } else { "no" })?;
        Ok(Flow::Continue)
    }
}
