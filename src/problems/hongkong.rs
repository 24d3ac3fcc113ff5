use super::*;
use super::h1n1::escape_widths;

/// Can a balloon of radius `s` be inflated at its position and then be moved to a place where
/// it can take off? Trees have radius `r`. A balloon takes off inside a face whose circumcircle
/// leaves enough room or outside the convex hull of the trees.
pub struct Hongkong;

impl Problem for Hongkong {
    const NAME: &'static str = "hongkong";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let n: usize = input.next("number of trees")?;
        let m: usize = input.next("number of balloons")?;
        let r: i64 = input.next("tree radius")?;

        let mut trees = Vec::with_capacity(n);
        for _ in 0..n {
            let x: i64 = input.next("tree x")?;
            let y: i64 = input.next("tree y")?;
            trees.push((x, y));
        }
        let points: Vec<_> = trees.iter().map(|&(x, y)| Point::new(x as f64, y as f64)).collect();
        let dt = Delaunay::from_points(&points);

        let widths = (dt.dimension() == 2).then(|| {
            escape_widths(&dt, |f| {
                let center = dt.circumcenter(f);
                center.squared_distance(&dt.point(dt.vertex(f, 0)))
            })
        });

        let mut answers = String::with_capacity(m);
        for _ in 0..m {
            let x: i64 = input.next("balloon x")?;
            let y: i64 = input.next("balloon y")?;
            let s: i64 = input.next("balloon radius")?;
            let p = Point::new(x as f64, y as f64);

            let reach = (r + s) as i128;
            let inflates = dt.nearest_vertex(&p).is_none_or(|v| {
                let (tx, ty) = trees[dt.info(v)];
                let (dx, dy) = ((x - tx) as i128, (y - ty) as i128);
                dx * dx + dy * dy >= reach * reach
            });
            let takes_off = inflates
                && match (&widths, dt.locate(&p)) {
                    (Some(widths), Some(f)) => {
                        dt.is_infinite(f) || widths[f as usize] >= 4.0 * (reach * reach) as f64
                    }
                    _ => true,
                };
            answers.push(if takes_off { 'y' } else { 'n' });
        }

        writeln!(output, "{answers}")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn balloons() {
        assert_solves(
            "hongkong",
            "2\n4 6 1\n0 0\n10 0\n0 10\n10 10\n5 5 1\n5 5 3\n5 5 4\n5 5 5\n20 20 100\n30 30 1\n\
             1 2 1\n0 0\n5 0 1\n1 0 1\n",
            "yyynny\nyn\n",
        );
    }

    #[test]
    fn touching_a_tree_is_allowed() {
        assert_solves("hongkong", "1\n1 2 1\n0 0\n3 0 2\n2 0 2\n", "yn\n");
    }

    #[test]
    fn degenerate_forests() {
        // no trees at all, then a row of trees that balloons can always leave sideways
        assert_solves(
            "hongkong",
            "2\n0 1 5\n3 3 1\n3 4 1\n0 0\n4 0\n8 0\n4 3 2\n2 1 1\n2 0 1\n1 0 1\n",
            "y\nyyyn\n",
        );
    }
}
