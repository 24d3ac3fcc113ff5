use super::*;

/// Can a chain of dominoes lead from an entrance square to an exit square, avoiding snake
/// cages? Chains alternate between the two colours of a chessboard colouring, so entrance and
/// exit need different colours and must lie in the same free region.
pub struct DominoSnakes;

impl Problem for DominoSnakes {
    const NAME: &'static str = "domino_snakes";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let h: usize = input.next("grid height")?;
        let w: usize = input.next("grid width")?;
        let p: usize = input.next("number of queries")?;

        let mut queries = Vec::with_capacity(p);
        for _ in 0..p {
            let [q, r, s, t] = [(); 4].map(|_| input.next::<usize>("square"));
            queries.push(((q? - 1, r? - 1), (s? - 1, t? - 1)));
        }
        let free: Vec<bool> = input.next_chars(h * w, "grid")?.into_iter().map(|c| c == '1').collect();

        let square = |i: usize, j: usize| (i * w + j) as Node;
        let mut floor = AdjArray::new((h * w) as NumNodes);
        for i in 0..h {
            for j in 0..w {
                if !free[i * w + j] {
                    continue;
                }
                if j + 1 < w && free[i * w + j + 1] {
                    floor.add_edge(square(i, j), square(i, j + 1));
                }
                if i + 1 < h && free[(i + 1) * w + j] {
                    floor.add_edge(square(i, j), square(i + 1, j));
                }
            }
        }
        let (_, region) = floor.component_labels();

        let answers: String = queries
            .iter()
            .map(|&((a, b), (c, d))| {
                let alternating = (a + b) % 2 != (c + d) % 2;
                let connected = region[square(a, b) as usize] == region[square(c, d) as usize];
                if alternating && connected { 'y' } else { 'n' }
            })
            .collect();
        writeln!(output, "{answers}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn chains() {
        assert_solves(
            "domino_snakes",
            "2\n2 2 2\n1 1 1 2\n1 1 2 2\n11\n11\n1 3 2\n1 1 1 2\n1 1 1 3\n101\n",
            "yn\nnn\n",
        );
    }
}
