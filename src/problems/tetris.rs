use super::*;

/// Maximum number of brick rows spanning a wall of width `w` such that no two rows have a
/// crack at the same inner position. Every position is split into an in and an out node of
/// capacity one.
pub struct Tetris;

impl Problem for Tetris {
    const NAME: &'static str = "tetris";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let w: Node = input.next("wall width")?;
        let n: usize = input.next("number of bricks")?;

        let entry = |x: Node| 2 * x;
        let exit = |x: Node| 2 * x + 1;

        let mut network = FlowNetwork::new(2 * (w + 1));
        for x in 1..w {
            network.add_edge(entry(x), exit(x), 1);
        }
        for _ in 0..n {
            let a: Node = input.next("brick end")?;
            let b: Node = input.next("brick end")?;
            if a != b {
                network.add_edge(exit(a.min(b)), entry(a.max(b)), 1);
            }
        }

        let rows = network.max_flow(exit(0), entry(w));
        writeln!(output, "{rows}")?;
        Ok(Flow::Continue)
    }
}
