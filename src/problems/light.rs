use itertools::Itertools;

use super::*;

/// Lamps are switched on one after another and remove every participant within their reach.
/// Prints the participants that survive all lamps or, if nobody does, the ones removed last.
pub struct Light;

fn hits(person: (i64, i64, i64), lamp: (i64, i64), h: i64) -> bool {
    let (x, y, r) = person;
    let dx = (x - lamp.0) as i128;
    let dy = (y - lamp.1) as i128;
    let reach = (r + h) as i128;
    dx * dx + dy * dy < reach * reach
}

impl Problem for Light {
    const NAME: &'static str = "light";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let m: usize = input.next("number of participants")?;
        let n: usize = input.next("number of lamps")?;

        let mut people = Vec::with_capacity(m);
        for _ in 0..m {
            let x: i64 = input.next("participant x")?;
            let y: i64 = input.next("participant y")?;
            let r: i64 = input.next("participant radius")?;
            people.push((x, y, r));
        }
        let h: i64 = input.next("lamp height")?;
        let mut lamps = Vec::with_capacity(n);
        for _ in 0..n {
            let x: i64 = input.next("lamp x")?;
            let y: i64 = input.next("lamp y")?;
            lamps.push((x, y));
        }

        let dt = Delaunay::from_points(
            &lamps
                .iter()
                .map(|&(x, y)| Point::new(x as f64, y as f64))
                .collect_vec(),
        );
        let survivors = (0..m)
            .filter(|&i| {
                let (x, y, _) = people[i];
                dt.nearest_vertex(&Point::new(x as f64, y as f64))
                    .is_none_or(|v| !hits(people[i], lamps[dt.info(v)], h))
            })
            .collect_vec();

        let winners = if survivors.is_empty() {
            let first_hit = people
                .iter()
                .map(|&person| lamps.iter().position(|&lamp| hits(person, lamp, h)).unwrap_or(n))
                .collect_vec();
            let last = first_hit.iter().copied().max().unwrap_or(0);
            (0..m).filter(|&i| first_hit[i] == last).collect_vec()
        } else {
            survivors
        };
        debug!("{} of {m} participants win", winners.len());

        writeln!(output, "{}", winners.iter().join(" "))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn last_round() {
        assert_solves(
            "light",
            "3\n2 2\n0 0 1\n10 0 1\n1\n0 1\n10 1\n\
             2 1\n0 0 1\n10 0 1\n1\n100 100\n\
             3 2\n0 0 1\n5 0 1\n-5 0 1\n1\n0 0\n5 1\n",
            "1\n0 1\n2\n",
        );
    }
}
