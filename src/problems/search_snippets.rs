use super::*;

/// Shortest text window containing at least one occurrence of every query word
pub struct SearchSnippets;

impl Problem for SearchSnippets {
    const NAME: &'static str = "search_snippets";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of words")?;
        let occurrences: Vec<usize> = input.next_vec(n, "number of occurrences")?;

        let mut positions: Vec<(u64, usize)> = Vec::with_capacity(occurrences.iter().sum());
        for (word, &m) in occurrences.iter().enumerate() {
            for _ in 0..m {
                positions.push((input.next("position")?, word));
            }
        }
        positions.sort_unstable();

        let mut in_window = vec![0usize; n];
        let mut covered = 0;
        let mut best = u64::MAX;
        let mut left = 0;
        for &(pos, word) in &positions {
            in_window[word] += 1;
            if in_window[word] == 1 {
                covered += 1;
            }

            while covered == n {
                let (first, first_word) = positions[left];
                best = best.min(pos - first + 1);
                in_window[first_word] -= 1;
                if in_window[first_word] == 0 {
                    covered -= 1;
                }
                left += 1;
            }
        }

        writeln!(output, "{best}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn windows() {
        assert_solves(
            "search_snippets",
            "3\n2\n2 2\n1 5\n3 10\n1\n3\n7 2 9\n3\n1 1 2\n10\n4\n1 12\n",
            "3\n1\n9\n",
        );
    }
}
