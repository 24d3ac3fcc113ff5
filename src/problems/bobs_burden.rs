use super::*;

/// Lightest set of balls from a triangular pyramid that is connected and touches all three
/// sides. An optimal set is a tree joining one ball of each side at a meeting ball; node
/// weights become arc weights on the arcs entering a ball.
pub struct BobsBurden;

fn ball(i: usize, j: usize) -> Node {
    (i * (i + 1) / 2 + j) as Node
}

/// Balls touching ball `(i, j)` of a triangle with `k` rows
fn touching(i: usize, j: usize, k: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        (i > 0 && j > 0).then(|| (i - 1, j - 1)),
        (i > 0 && j < i).then(|| (i - 1, j)),
        (j > 0).then(|| (i, j - 1)),
        (j < i).then(|| (i, j + 1)),
        (i + 1 < k).then_some((i + 1, j)),
        (i + 1 < k).then_some((i + 1, j + 1)),
    ]
    .into_iter()
    .flatten()
}

impl Problem for BobsBurden {
    const NAME: &'static str = "bobs_burden";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let k: usize = input.next("number of rows")?;
        let weights = (0..k)
            .map(|i| input.next_vec::<Distance>(i + 1, "ball weight"))
            .collect::<std::io::Result<Vec<_>>>()?;
        let balls = k * (k + 1) / 2;

        let mut pyramid = WeightedGraph::new(balls as NumNodes);
        for i in 0..k {
            for j in 0..=i {
                for (a, b) in touching(i, j, k) {
                    pyramid.add_arc(ball(i, j), ball(a, b), weights[a][b]);
                }
            }
        }

        // one virtual ball per side, entering its side at the cost of the entered ball
        let sides: [Vec<(usize, usize)>; 3] = [
            (0..k).map(|i| (i, 0)).collect(),
            (0..k).map(|i| (i, i)).collect(),
            (0..k).map(|j| (k - 1, j)).collect(),
        ];
        let distances = sides.map(|side| {
            let mut graph = pyramid.clone();
            let entry = graph.add_node();
            for (i, j) in side {
                graph.add_arc(entry, ball(i, j), weights[i][j]);
            }
            graph.dijkstra(entry)
        });

        let lightest = (0..k)
            .flat_map(|i| (0..=i).map(move |j| (i, j)))
            .filter_map(|(i, j)| {
                let v = ball(i, j) as usize;
                let total = distances.iter().map(|d| d[v]).sum::<Option<Distance>>()?;
                Some(total - 2 * weights[i][j])
            })
            .min()
            .unwrap_or(0);

        writeln!(output, "{lightest}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn connecting_the_sides() {
        assert_solves(
            "bobs_burden",
            "3\n1\n5\n2\n1\n2 3\n3\n10\n1 1\n1 50 1\n",
            "5\n3\n3\n",
        );
    }
}
