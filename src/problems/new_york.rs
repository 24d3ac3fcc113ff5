use std::collections::BTreeMap;

use super::*;

/// Critical points form a tree rooted at New York (point 0). A trip follows `m` points down
/// the tree and is feasible if the temperatures along it differ by at most `k`. Prints all
/// points where a feasible trip starts, or "Abort mission".
pub struct NewYork;

impl Problem for NewYork {
    const NAME: &'static str = "new_york";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of critical points")?;
        let m: usize = input.next("trip length")?;
        let k: i64 = input.next("maximal risk")?;
        let temperatures: Vec<i64> = input.next_vec(n, "temperature")?;

        let mut children = vec![Vec::new(); n];
        for _ in 1..n {
            let u: usize = input.next("parent")?;
            let v: usize = input.next("child")?;
            children[u].push(v);
        }

        let starts = trip_starts(&children, &temperatures, m, k);
        if starts.is_empty() {
            writeln!(output, "Abort mission")?;
        } else {
            writeln!(output, "{}", starts.iter().map(|u| u.to_string()).collect::<Vec<_>>().join(" "))?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(Default)]
struct Window(BTreeMap<i64, usize>);

impl Window {
    fn insert(&mut self, t: i64) {
        *self.0.entry(t).or_default() += 1;
    }

    fn remove(&mut self, t: i64) {
        if let Some(count) = self.0.get_mut(&t) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(&t);
            }
        }
    }

    fn spread(&self) -> Option<i64> {
        Some(self.0.last_key_value()?.0 - self.0.first_key_value()?.0)
    }
}

enum Step {
    Enter(usize),
    Leave,
}

/// Depth-first search keeping the temperatures of the last `m` points on the current path
fn trip_starts(children: &[Vec<usize>], temperatures: &[i64], m: usize, k: i64) -> Vec<usize> {
    let n = temperatures.len();
    let mut feasible = vec![false; n];
    if m == 0 || n == 0 {
        return Vec::new();
    }

    let mut path: Vec<usize> = Vec::new();
    let mut window = Window::default();
    let mut stack = vec![Step::Enter(0)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(u) => {
                path.push(u);
                window.insert(temperatures[u]);
                if path.len() > m {
                    window.remove(temperatures[path[path.len() - 1 - m]]);
                }
                if path.len() >= m && window.spread().is_some_and(|spread| spread <= k) {
                    feasible[path[path.len() - m]] = true;
                }

                stack.push(Step::Leave);
                stack.extend(children[u].iter().map(|&v| Step::Enter(v)));
            }
            Step::Leave => {
                if path.len() > m {
                    window.insert(temperatures[path[path.len() - 1 - m]]);
                }
                if let Some(u) = path.pop() {
                    window.remove(temperatures[u]);
                }
            }
        }
    }

    (0..n).filter(|&u| feasible[u]).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn trips() {
        let tree = "1 2 3 10 4\n0 1\n1 2\n2 3\n1 4\n";
        assert_solves(
            "new_york",
            &format!("3\n5 3 2\n{tree}5 2 1\n{tree}5 6 100\n{tree}"),
            "0\n0 1\nAbort mission",
        );
    }

    #[test]
    fn whole_chain_is_a_trip() {
        let children = vec![vec![1], vec![2], vec![]];
        assert_eq!(trip_starts(&children, &[5, 6, 7], 3, 2), vec![0]);
        assert_eq!(trip_starts(&children, &[5, 6, 7], 1, 0), vec![0, 1, 2]);
    }
}
