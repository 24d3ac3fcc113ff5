use itertools::Itertools;

use super::*;

/// Cheapest way to split the sculptures into two non-empty groups, where cutting the limb
/// `a -> b` costs `c` if `a` is taken and `b` is not. Node 0 is on one side of every cut, so
/// the cheapest of the cuts between 0 and any other node in either direction is optimal.
pub struct Algocoon;

impl Problem for Algocoon {
    const NAME: &'static str = "algocoon";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of figures")?;
        let m: usize = input.next("number of limbs")?;

        let mut network = FlowNetwork::new(n);
        for _ in 0..m {
            let a: Node = input.next("limb start")?;
            let b: Node = input.next("limb end")?;
            network.add_edge(a, b, input.next("limb cost")?);
        }

        let mut best: Option<(Capacity, Node, Node)> = None;
        for u in 1..n {
            for (s, t) in [(0, u), (u, 0)] {
                network.reset_flow();
                let cut = network.max_flow(s, t);
                if best.is_none_or(|(b, _, _)| cut < b) {
                    best = Some((cut, s, t));
                }
            }
        }

        let Some((cost, s, t)) = best else {
            writeln!(output, "0\n0")?;
            return Ok(Flow::Continue);
        };
        network.reset_flow();
        network.max_flow(s, t);
        let side = network.source_side(s);
        let taken = (0..n).filter(|&u| side[u as usize]).collect_vec();

        writeln!(output, "{cost}")?;
        writeln!(output, "{} {}", taken.len(), taken.iter().join(" "))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn cheapest_split() {
        assert_solves(
            "algocoon",
            "2\n2 2\n0 1 5\n1 0 3\n3 3\n0 1 1\n1 2 1\n2 0 1\n",
            "3\n1 1\n1\n1 0\n",
        );
    }
}
