use fxhash::FxHashSet;

use super::*;

/// Students sharing more than `f` characteristics may be paired. The pairing of Dr. Fuzzman
/// is optimal iff no perfect matching of such pairs exists.
pub struct Buddies;

impl Problem for Buddies {
    const NAME: &'static str = "buddies";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: NumNodes = input.next("number of students")?;
        let c: usize = input.next("characteristics per student")?;
        let f: usize = input.next("threshold")?;

        let characteristics = (0..n)
            .map(|_| {
                (0..c)
                    .map(|_| input.next_word("characteristic"))
                    .collect::<std::io::Result<FxHashSet<_>>>()
            })
            .collect::<std::io::Result<Vec<_>>>()?;

        let mut graph = AdjArray::new(n);
        for u in 0..n {
            for v in u + 1..n {
                let common = characteristics[u as usize]
                    .intersection(&characteristics[v as usize])
                    .count();
                if common > f {
                    graph.add_edge(u, v);
                }
            }
        }

        let verdict = if graph.has_perfect_matching() {
            "not optimal"
        } else {
            "optimal"
        };
        writeln!(output, "{verdict}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn better_pairings() {
        assert_solves(
            "buddies",
            "3\n4 2 1\nx y\np q\nq p\ny x\n2 1 0\nx\ny\n4 2 0\na b\nb c\nc d\nd a\n",
            "not optimal\noptimal\nnot optimal\n",
        );
    }
}
