use super::*;

/// A hiking path of `m - 1` legs and `n` map triangles. Each triangle is given by six points,
/// two on each of its three edges. Prints the length of the shortest run of consecutive
/// triangles such that every leg lies completely inside one of them.
pub struct HikingMaps;

impl Problem for HikingMaps {
    const NAME: &'static str = "hiking_maps";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let m: usize = input.next("number of path points")?;
        let n: usize = input.next("number of triangles")?;
        let path = (0..m)
            .map(|_| input.next_point("path point"))
            .collect::<std::io::Result<Vec<_>>>()?;

        let mut covers: Vec<Vec<usize>> = Vec::with_capacity(n);
        for _ in 0..n {
            let mut lines = [Point::default(); 6];
            for q in &mut lines {
                *q = input.next_point("triangle line point")?;
            }
            let triangle = Triangle::from_lines(lines);
            let inside = path.iter().map(|p| triangle.contains(p)).collect::<Vec<_>>();
            covers.push(
                inside
                    .windows(2)
                    .enumerate()
                    .filter(|(_, ends)| ends[0] && ends[1])
                    .map(|(leg, _)| leg)
                    .collect(),
            );
        }

        writeln!(output, "{}", shortest_cover(&covers, m.saturating_sub(1)))?;
        Ok(Flow::Continue)
    }
}

/// Three edge lines oriented such that the interior lies to their left
struct Triangle([Point; 6]);

impl Triangle {
    fn from_lines(mut q: [Point; 6]) -> Self {
        for j in (0..6).step_by(2) {
            // one of the two points of the next line is off this line and inside
            let (a, b) = (q[(j + 2) % 6], q[(j + 3) % 6]);
            let mut side = orientation(&q[j], &q[j + 1], &a);
            if side.is_collinear() {
                side = orientation(&q[j], &q[j + 1], &b);
            }
            if side.is_cw() {
                q.swap(j, j + 1);
            }
        }
        Self(q)
    }

    /// Boundary included
    fn contains(&self, p: &Point) -> bool {
        let q = &self.0;
        (0..6)
            .step_by(2)
            .all(|j| !orientation(&q[j], &q[j + 1], p).is_cw())
    }
}

/// Sliding window over the triangles counting how often each leg is covered
fn shortest_cover(covers: &[Vec<usize>], legs: usize) -> usize {
    let mut count = vec![0usize; legs];
    let mut uncovered = legs;
    let mut best = covers.len();
    let mut left = 0;
    for (right, legs_of_right) in covers.iter().enumerate() {
        for &leg in legs_of_right {
            count[leg] += 1;
            if count[leg] == 1 {
                uncovered -= 1;
            }
        }
        while uncovered == 0 && left <= right {
            best = best.min(right - left + 1);
            for &leg in &covers[left] {
                count[leg] -= 1;
                if count[leg] == 0 {
                    uncovered += 1;
                }
            }
            left += 1;
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::assert_solves;

    #[test]
    fn shortest_run_of_maps() {
        // first covers no leg, second only the first leg, fourth only the second leg
        let far = "10 10 11 10  11 10 10 11  10 11 10 10\n";
        let first_leg = "-1 -1 2 -1  2 -1 -1 3  -1 3 -1 -1\n";
        let second_leg = "3 -1 0 -1  3 -1 3 3  3 3 0 -1\n";
        let input = format!("1\n3 5\n0 0\n1 0\n2 0\n{far}{first_leg}{far}{second_leg}{first_leg}");
        assert_solves("hiking_maps", &input, "2");
    }

    #[test]
    fn boundary_counts_as_inside() {
        let triangle = Triangle::from_lines([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(0.0, 0.0),
        ]);
        assert!(triangle.contains(&Point::new(2.0, 0.0)));
        assert!(triangle.contains(&Point::new(2.0, 2.0)));
        assert!(!triangle.contains(&Point::new(2.1, 2.0)));
    }

    #[test]
    fn single_triangle_window() {
        assert_eq!(shortest_cover(&[vec![], vec![0, 1], vec![0]], 2), 1);
    }
}
