use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Species form a tree rooted at the oldest one, ages strictly decrease towards the leaves.
/// A query asks for the oldest ancestor of a species that is not older than a bound. The
/// queries of a species are answered by binary search on the root path while a depth-first
/// search passes it.
pub struct Evolution;

impl Problem for Evolution {
    const NAME: &'static str = "evolution";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of species")?;
        let q: usize = input.next("number of queries")?;

        let mut index = FxHashMap::default();
        let mut names = Vec::with_capacity(n);
        let mut ages = Vec::with_capacity(n);
        for i in 0..n {
            let name = input.next_word("species name")?;
            ages.push(input.next::<u64>("species age")?);
            index.insert(name.clone(), i);
            names.push(name);
        }

        let lookup = |input: &mut TokenReader<R>, what: &str| -> Result<usize> {
            let name = input.next_word(what)?;
            index
                .get(&name)
                .copied()
                .ok_or_else(|| SolveError::InvalidInput(format!("unknown species {name}")))
        };

        let mut children = vec![Vec::new(); n];
        let mut has_parent = vec![false; n];
        for _ in 1..n {
            let child = lookup(input, "descendant")?;
            let parent = lookup(input, "ancestor")?;
            children[parent].push(child);
            has_parent[child] = true;
        }

        let mut queries = vec![Vec::new(); n];
        for i in 0..q {
            let species = lookup(input, "queried species")?;
            let max_age: u64 = input.next("maximum age")?;
            queries[species].push((i, max_age));
        }

        let mut answers = vec![0; q];
        if let Some(root) = has_parent.iter().position(|&p| !p) {
            let mut path = Vec::new();
            let mut stack = vec![(root, 0)];
            while let Some((u, depth)) = stack.pop() {
                path.truncate(depth);
                path.push(u);
                for &(i, max_age) in &queries[u] {
                    let oldest = path.partition_point(|&v| ages[v] > max_age);
                    answers[i] = path[oldest.min(depth)];
                }
                stack.extend(children[u].iter().map(|&v| (v, depth + 1)));
            }
        }

        writeln!(output, "{}", answers.iter().map(|&i| &names[i]).join(" "))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn oldest_young_enough_ancestor() {
        assert_solves(
            "evolution",
            "1\n4 5\nluca 10\na 5\nb 3\nc 4\na luca\nb a\nc a\nb 5\nb 10\nb 3\na 7\nc 4\n",
            "a luca b a c\n",
        );
    }
}
