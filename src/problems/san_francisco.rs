use super::*;

/// Fewest moves to collect at least `x` points on a directed canal graph starting at hole 0.
/// A hole without outgoing canals sends the ball back to hole 0 for free.
pub struct SanFrancisco;

impl Problem for SanFrancisco {
    const NAME: &'static str = "san_francisco";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of holes")?;
        let m: usize = input.next("number of canals")?;
        let x: u64 = input.next("score to reach")?;
        let k: usize = input.next("number of moves")?;

        let mut canals = WeightedGraph::<u64>::new(n);
        for _ in 0..m {
            let u: Node = input.next("canal start")?;
            let v: Node = input.next("canal end")?;
            canals.add_arc(u, v, input.next("canal points")?);
        }
        let dead_end = canals.vertices().map(|u| canals.arcs_of(u).is_empty()).collect::<Vec<_>>();

        // best score of a ball at each hole after the current number of moves
        let mut best: Vec<Option<u64>> = vec![None; n as usize];
        best[0] = Some(0);
        let mut answer = None;
        for moves in 1..=k {
            let mut next = vec![None; n as usize];
            for u in canals.vertices() {
                let Some(score) = best[u as usize] else { continue };
                for &(v, points) in canals.arcs_of(u) {
                    let reached = Some(score + points);
                    next[v as usize] = next[v as usize].max(reached);
                    if dead_end[v as usize] {
                        next[0] = next[0].max(reached);
                    }
                }
            }
            best = next;
            if best.iter().flatten().any(|&score| score >= x) {
                answer = Some(moves);
                break;
            }
        }

        match answer {
            Some(moves) => writeln!(output, "{moves}")?,
            None => writeln!(output, "Impossible")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn fewest_moves() {
        assert_solves(
            "san_francisco",
            "3\n2 1 12 3\n0 1 5\n2 1 20 3\n0 1 5\n\
             3 3 10 4\n0 1 1\n1 2 9\n0 2 4\n",
            "3\nImpossible\n2\n",
        );
    }
}
