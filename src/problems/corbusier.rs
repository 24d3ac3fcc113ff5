use super::*;

/// Is there a non-empty subset of the heights whose sum leaves remainder `i` modulo `k`?
pub struct Corbusier;

fn reachable_remainder(heights: &[u64], i: usize, k: usize) -> bool {
    // remainders of non-empty subsets seen so far
    let mut seen = vec![false; k];
    for &h in heights {
        let h = (h % k as u64) as usize;
        let mut next = seen.clone();
        next[h] = true;
        for r in (0..k).filter(|&r| seen[r]) {
            next[(r + h) % k] = true;
        }
        seen = next;
        if seen[i] {
            return true;
        }
    }
    false
}

impl Problem for Corbusier {
    const NAME: &'static str = "corbusier";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of disks")?;
        let i: usize = input.next("target remainder")?;
        let k: usize = input.next("modulus")?;
        let heights: Vec<u64> = input.next_vec(n, "disk height")?;

        let verdict = if reachable_remainder(&heights, i, k) { "yes" } else { "no" };
        writeln!(output, "{verdict}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn remainders() {
        assert_solves("corbusier", "2\n3 0 5\n1 2 3\n2 4 5\n1 2\n", "yes\nno\n");
    }

    #[test]
    fn empty_set_does_not_count() {
        assert!(!reachable_remainder(&[], 0, 3));
        assert!(!reachable_remainder(&[1, 1], 0, 3));
        assert!(reachable_remainder(&[1, 1, 1], 0, 3));
        assert!(reachable_remainder(&[6], 0, 3));
    }
}
