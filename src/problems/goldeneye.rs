use num::{BigRational, Zero};

use super::*;

/// Jammers protect discs around them; with power `p` the discs have diameter `sqrt(p)`. A
/// mission walks from its nearest jammer to the one nearest its target along jammers whose
/// discs touch. Prints per mission whether power `p` suffices, then the smallest power `a`
/// enabling all missions and the smallest power `b` enabling the ones `p` enables.
pub struct Goldeneye;

struct Link {
    squared_length: BigRational,
    u: Node,
    v: Node,
}

/// Adds the shortest links until `u` and `v` are connected, tracking the largest power used.
/// Links are processed in order of length, so the power only grows along the way.
struct GrowingPower<'a> {
    links: &'a [Link],
    next: usize,
    components: UnionFind,
    power: BigRational,
}

impl<'a> GrowingPower<'a> {
    fn new(links: &'a [Link], n: NumNodes) -> Self {
        Self {
            links,
            next: 0,
            components: UnionFind::new(n),
            power: BigRational::zero(),
        }
    }

    fn connect(&mut self, u: Node, v: Node, mission: &BigRational) {
        if *mission > self.power {
            self.power = mission.clone();
        }
        while self.next < self.links.len() && !self.components.same_set(u, v) {
            let link = &self.links[self.next];
            self.components.union(link.u, link.v);
            if link.squared_length > self.power {
                self.power = link.squared_length.clone();
            }
            self.next += 1;
        }
    }
}

impl Problem for Goldeneye {
    const NAME: &'static str = "goldeneye";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of jammers")?;
        let m: usize = input.next("number of missions")?;
        let p = to_rational(input.next::<f64>("power")?);
        let jammers = (0..n)
            .map(|_| input.next_point("jammer"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let dt = Delaunay::from_points(&jammers);
        let mut links = dt
            .finite_edges()
            .into_iter()
            .map(|(u, v)| Link {
                squared_length: exact_squared_distance(&dt.point(u), &dt.point(v)),
                u: dt.info(u) as Node,
                v: dt.info(v) as Node,
            })
            .collect::<Vec<_>>();
        links.sort_by(|x, y| x.squared_length.cmp(&y.squared_length));

        let mut with_p = UnionFind::new(n as NumNodes);
        for link in links.iter().take_while(|link| link.squared_length <= p) {
            with_p.union(link.u, link.v);
        }

        let mut all_missions = GrowingPower::new(&links, n as NumNodes);
        let mut p_missions = GrowingPower::new(&links, n as NumNodes);
        let mut answers = String::with_capacity(m);
        for _ in 0..m {
            let s = input.next_point("mission start")?;
            let t = input.next_point("mission target")?;
            let (Some(js), Some(jt)) = (dt.nearest_vertex(&s), dt.nearest_vertex(&t)) else {
                return Err(SolveError::InvalidInput("missions need at least one jammer".into()));
            };

            // the disc around the nearest jammer must reach the endpoint
            let reach = exact_squared_distance(&s, &dt.point(js))
                .max(exact_squared_distance(&t, &dt.point(jt)))
                * BigRational::from_integer(4.into());
            let (u, v) = (dt.info(js) as Node, dt.info(jt) as Node);

            if reach <= p && with_p.same_set(u, v) {
                answers.push('y');
                p_missions.connect(u, v, &reach);
            } else {
                answers.push('n');
            }
            all_missions.connect(u, v, &reach);
        }

        writeln!(output, "{answers}")?;
        writeln!(output, "{}", all_missions.power.ceil().to_integer())?;
        writeln!(output, "{}", p_missions.power.ceil().to_integer())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn missions_and_powers() {
        assert_solves(
            "goldeneye",
            "2\n\
             3 3 100\n0 0\n10 0\n30 0\n1 0 9 0\n0 1 30 1\n0 6 0 0\n\
             1 1 1\n0 0\n0 0 0 0\n",
            "ynn\n400\n100\ny\n0\n0",
        );
    }
}
