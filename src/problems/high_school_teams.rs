use fxhash::FxHashMap;

use super::*;

/// Number of ways to form two teams of equal total strength when at most `k` students sit
/// out. Split and list: enumerate the assignments of each half separately and join them on
/// the strength difference.
pub struct HighSchoolTeams;

/// Number of assignments of `students` per (number sitting out, strength difference)
fn assignments(students: &[i64]) -> FxHashMap<(usize, i64), u64> {
    let mut counts = FxHashMap::default();
    counts.insert((0, 0), 1);
    for &s in students {
        let mut next = FxHashMap::default();
        for (&(out, diff), &ways) in &counts {
            for key in [(out, diff + s), (out, diff - s), (out + 1, diff)] {
                *next.entry(key).or_insert(0) += ways;
            }
        }
        counts = next;
    }
    counts
}

impl Problem for HighSchoolTeams {
    const NAME: &'static str = "high_school_teams";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of students")?;
        let k: usize = input.next("number of referees")?;
        let strengths: Vec<i64> = input.next_vec(n, "strength")?;

        let (first, second) = strengths.split_at(n / 2);
        let left = assignments(first);
        let right = assignments(second);

        let mut ways = 0;
        for (&(out, diff), &count) in &left {
            if out > k {
                continue;
            }
            for other_out in 0..=k - out {
                ways += count * right.get(&(other_out, -diff)).copied().unwrap_or(0);
            }
        }

        writeln!(output, "{ways}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn splits() {
        assert_solves(
            "high_school_teams",
            "3\n2 0\n1 1\n2 2\n1 1\n3 1\n1 2 3\n",
            "2\n3\n2\n",
        );
    }
}
