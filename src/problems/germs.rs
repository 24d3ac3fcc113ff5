use num::{BigInt, BigRational, ToPrimitive, Zero};

use super::*;

/// Bacteria in a rectangular dish grow to radius `t^2 + 1/2` after `t` hours and die when they
/// touch the dish border or another bacterium. Prints the hours (rounded up) until the first,
/// the median and the last bacterium die. A bacterium first touches its nearest neighbor,
/// which is a Delaunay neighbor.
pub struct Germs;

/// First integral hour at which a bacterium with death radius `sqrt(four_r2) / 2` is dead,
/// i.e. the smallest `k` with `(2k^2 + 1)^2 >= four_r2`
fn death_hour(four_r2: &BigRational) -> u64 {
    let dead = |k: u64| {
        let radius = BigRational::from_integer(BigInt::from(2 * k * k + 1));
        &radius * &radius >= *four_r2
    };

    let estimate = four_r2.to_f64().unwrap_or(0.0).max(0.0).sqrt() / 2.0 - 0.5;
    let mut k = estimate.max(0.0).sqrt().ceil() as u64;
    while k > 0 && dead(k - 1) {
        k -= 1;
    }
    while !dead(k) {
        k += 1;
    }
    k
}

impl Problem for Germs {
    const NAME: &'static str = "germs";
    const DRIVER: Driver = Driver::Sentinel;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = match input.try_next("number of bacteria")? {
            None | Some(0) => return Ok(Flow::Stop),
            Some(n) => n,
        };
        let [left, bottom, right, top] =
            [(); 4].map(|_| input.next::<f64>("dish border").map(to_rational));
        let (left, bottom, right, top) = (left?, bottom?, right?, top?);

        let bacteria = (0..n)
            .map(|_| input.next_point("bacterium"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let dt = Delaunay::from_points(&bacteria);

        // four times the squared radius at which each vertex dies
        let four = BigRational::from_integer(4.into());
        let mut limit: Vec<BigRational> = dt
            .vertices()
            .map(|v| {
                let p = dt.point(v);
                let (x, y) = (to_rational(p.x), to_rational(p.y));
                let border = [&x - &left, &right - &x, &y - &bottom, &top - &y]
                    .into_iter()
                    .min()
                    .unwrap_or_else(|| x.clone());
                &border * &border * &four
            })
            .collect();

        for (u, v) in dt.finite_edges() {
            let touching = exact_squared_distance(&dt.point(u), &dt.point(v));
            for w in [u, v] {
                if touching < limit[w as usize] {
                    limit[w as usize] = touching.clone();
                }
            }
        }

        // duplicated bacteria touch from the start
        let mut duplicates = 0;
        for (i, p) in bacteria.iter().enumerate() {
            if let Some(v) = dt.nearest_vertex(p).filter(|&v| dt.info(v) != i) {
                limit[v as usize] = BigRational::zero();
                duplicates += 1;
            }
        }

        let mut hours: Vec<u64> = limit.iter().map(death_hour).collect();
        hours.extend(std::iter::repeat_n(0, duplicates));
        hours.sort_unstable();

        writeln!(output, "{} {} {}", hours[0], hours[n / 2], hours[n - 1])?;
        Ok(Flow::Continue)
    }
}
