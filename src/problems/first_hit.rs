use num::{BigRational, ToPrimitive};
use rand::{SeedableRng, seq::SliceRandom};
use rand_pcg::Pcg64Mcg;

use super::*;

/// The first point where a ray hits one of the obstacle segments, rounded down
pub struct FirstHit;

/// Lower bound (up to rounding) on the ray parameter of any point of `segment`
fn parameter_lower_bound(ray: &Ray, segment: &Segment) -> f64 {
    let (dx, dy) = (ray.through.x - ray.origin.x, ray.through.y - ray.origin.y);
    let len = dx * dx + dy * dy;
    let project = |p: &Point| ((p.x - ray.origin.x) * dx + (p.y - ray.origin.y) * dy) / len;
    project(&segment.a).min(project(&segment.b))
}

impl Problem for FirstHit {
    const NAME: &'static str = "first_hit";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of segments")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };

        let ray = Ray::new(input.next_point("ray origin")?, input.next_point("ray direction")?);
        let mut segments = (0..n)
            .map(|_| Ok(Segment::new(input.next_point("segment")?, input.next_point("segment")?)))
            .collect::<std::io::Result<Vec<_>>>()?;

        // in random order the closest hit improves only a logarithmic number of times
        segments.shuffle(&mut Pcg64Mcg::seed_from_u64(0xf1257));

        let mut best: Option<(BigRational, f64)> = None;
        for segment in &segments {
            if let Some((_, approx)) = &best {
                if parameter_lower_bound(&ray, segment) > approx * (1.0 + 1e-9) + 1e-9 {
                    continue;
                }
            }
            if !ray.intersects(segment) {
                continue;
            }
            let Some(t) = ray.first_parameter(segment) else {
                continue;
            };
            if best.as_ref().is_none_or(|(b, _)| t < *b) {
                let approx = t.to_f64().unwrap_or(f64::MAX);
                best = Some((t, approx));
            }
        }

        match best {
            Some((t, _)) => {
                let hit = ray.point_at(&t);
                writeln!(output, "{} {}", floor_to_f64(&hit.x) as i64, floor_to_f64(&hit.y) as i64)?;
            }
            None => writeln!(output, "no")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn closest_hits() {
        assert_solves(
            "first_hit",
            "3\n0 0 1 0\n5 -1 5 1\n3 -1 3 1\n10 -1 10 1\n\
             1\n0 0 1 1\n4 0 0 4\n\
             1\n0 0 1 0\n7 0 4 0\n\
             1\n0 0 1 0\n0 1 5 1\n0\n",
            "3 0\n2 2\n4 0\nno\n",
        );
    }

    #[test]
    fn rounding_down() {
        assert_solves(
            "first_hit",
            "1\n0 0 3 1\n2 -5 2 5\n1\n0 0 -3 -1\n-2 -5 -2 5\n0\n",
            "2 0\n-2 -1\n",
        );
    }
}
