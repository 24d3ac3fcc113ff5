use super::*;

/// Jedi protect arcs of a circular ring of `m` segments; picks the maximum number of jedi with
/// pairwise disjoint arcs. Cuts the circle at a least covered segment: at most one chosen
/// jedi covers the cut, the rest is interval scheduling on a line.
pub struct AttackOfTheClones;

/// Earliest-deadline greedy over intervals sorted by end, restricted to the open range
/// `(left, right)`
fn schedule(intervals: &[(u64, u64)], mut left: Option<u64>, right: u64) -> usize {
    let mut count = 0;
    for &(a, b) in intervals {
        if left.is_none_or(|l| a > l) && b < right {
            count += 1;
            left = Some(b);
        }
    }
    count
}

/// A segment covered by the fewest jedi
fn least_covered(jedi: &[(u64, u64)], m: u64) -> u64 {
    let mut events = Vec::with_capacity(2 * jedi.len() + 2);
    for &(a, b) in jedi {
        events.push((a, false));
        events.push((b, true));
        if a > b {
            events.push((0, false));
            events.push((m - 1, true));
        }
    }
    events.sort_unstable();

    let (mut active, mut fewest, mut cut) = (0usize, usize::MAX, 0);
    let mut i = 0;
    while i < events.len() {
        let pos = events[i].0;
        while i < events.len() && events[i] == (pos, false) {
            active += 1;
            i += 1;
        }
        if active < fewest {
            fewest = active;
            cut = pos;
        }
        while i < events.len() && events[i] == (pos, true) {
            active -= 1;
            i += 1;
        }
    }
    cut
}

impl Problem for AttackOfTheClones {
    const NAME: &'static str = "attack_of_the_clones";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of jedi")?;
        let m: u64 = input.next("number of segments")?;
        let mut jedi = Vec::with_capacity(n);
        for _ in 0..n {
            let a: u64 = input.next("first segment")?;
            let b: u64 = input.next("last segment")?;
            jedi.push((a - 1, b - 1));
        }

        let cut = least_covered(&jedi, m);
        let rotate = |x: u64| (x + m - cut) % m;

        let (crossing, mut linear): (Vec<_>, Vec<_>) = jedi
            .iter()
            .map(|&(a, b)| (rotate(a), rotate(b)))
            .partition(|&(a, b)| a == 0 || b < a);
        linear.sort_unstable_by_key(|&(_, b)| b);

        let without_crossing = schedule(&linear, None, m);
        let with_crossing = crossing
            .iter()
            .map(|&(a, b)| {
                let right = if a == 0 { m } else { a };
                1 + schedule(&linear, Some(b), right)
            })
            .max()
            .unwrap_or(0);

        writeln!(output, "{}", without_crossing.max(with_crossing))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn cut_position() {
        // segments 0 and 1 are covered twice, the others once
        assert_eq!(least_covered(&[(0, 2), (3, 1)], 5), 2);
        assert_eq!(least_covered(&[(0, 4)], 5), 0);
    }

    #[test]
    fn brute_force() {
        let m = 9;
        let jedi = [(0, 2), (2, 4), (5, 6), (7, 1), (3, 3), (6, 8), (8, 0)];
        let covers = |&(a, b): &(u64, u64)| -> Vec<u64> {
            if a <= b { (a..=b).collect() } else { (a..m).chain(0..=b).collect() }
        };
        let best = (0..1u32 << jedi.len())
            .filter(|mask| {
                let chosen = (0..jedi.len()).filter(|i| mask >> i & 1 == 1).collect_vec();
                chosen.iter().flat_map(|&i| covers(&jedi[i])).all_unique()
            })
            .map(|mask| mask.count_ones())
            .max()
            .unwrap();

        let input = format!(
            "1\n{} {m}\n{}",
            jedi.len(),
            jedi.iter().map(|(a, b)| format!("{} {}\n", a + 1, b + 1)).join("")
        );
        assert_solves("attack_of_the_clones", &input, &format!("{best}\n"));
    }

    #[test]
    fn sample() {
        assert_solves(
            "attack_of_the_clones",
            "2\n4 10\n1 3\n4 6\n7 10\n9 2\n3 6\n2 5\n5 1\n1 2\n",
            "3\n1\n",
        );
    }
}
