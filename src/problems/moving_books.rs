use std::collections::BTreeMap;

use super::*;

/// Friends carry boxes downstairs, one box each per trip; a trip takes two minutes down and
/// one minute back up, the last one needs no way back. In every round the friends take the
/// heaviest boxes they can carry, strongest first.
pub struct MovingBooks;

fn rounds(mut strengths: Vec<u64>, weights: &[u64]) -> Option<usize> {
    strengths.sort_unstable_by(|a, b| b.cmp(a));
    let mut boxes: BTreeMap<u64, usize> = BTreeMap::new();
    for &w in weights {
        *boxes.entry(w).or_default() += 1;
    }
    if boxes.last_key_value().is_some_and(|(&w, _)| strengths.first().is_none_or(|&s| s < w)) {
        return None;
    }

    let mut rounds = 0;
    while !boxes.is_empty() {
        rounds += 1;
        for &s in &strengths {
            let Some((&w, count)) = boxes.range_mut(..=s).next_back() else { break };
            *count -= 1;
            if *count == 0 {
                boxes.remove(&w);
            }
        }
    }
    Some(rounds)
}

impl Problem for MovingBooks {
    const NAME: &'static str = "moving_books";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of friends")?;
        let m: usize = input.next("number of boxes")?;
        let strengths: Vec<u64> = input.next_vec(n, "strength")?;
        let weights: Vec<u64> = input.next_vec(m, "box weight")?;

        match rounds(strengths, &weights) {
            Some(0) => writeln!(output, "0")?,
            Some(r) => writeln!(output, "{}", 3 * r - 1)?,
            None => writeln!(output, "impossible")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn carrying_time() {
        assert_solves(
            "moving_books",
            "2\n2 3\n3 1\n3 1 1\n1 1\n1\n2\n",
            "5\nimpossible\n",
        );
    }

    #[test]
    fn strongest_carries_most() {
        assert_eq!(rounds(vec![10, 1, 1], &[5, 5, 5, 1]), Some(3));
        assert_eq!(rounds(vec![4, 4], &[4, 4, 4, 4, 4]), Some(3));
        assert_eq!(rounds(vec![1], &[]), Some(0));
    }
}
