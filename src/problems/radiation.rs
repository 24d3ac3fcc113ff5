use itertools::iproduct;

use super::*;

/// Smallest degree `d <= 30` of a polynomial in three variables that is positive on every
/// healthy cell and negative on every tumor cell. For fixed `d` this is a linear program over
/// the coefficients maximising the separation margin; separability is monotone in `d`, so
/// the degree is found by binary search.
pub struct Radiation;

const MAX_DEGREE: usize = 30;
const MIN_MARGIN: f64 = 1e-7;

/// Positions are scaled into `[-1, 1]`, which keeps all monomials bounded by one
fn separable(cells: &[[f64; 3]], healthy: usize, degree: usize) -> Result<bool> {
    let mut lp = LinearProgram::new(Relation::Smaller, None, None);

    let monomials = iproduct!(0..=degree, 0..=degree, 0..=degree)
        .filter(|&(i, j, k)| i + j + k <= degree)
        .collect::<Vec<_>>();
    let margin = monomials.len();

    for (row, cell) in cells.iter().enumerate() {
        let powers = cell.map(|c| {
            std::iter::successors(Some(1.0), |p| Some(p * c))
                .take(degree + 1)
                .collect::<Vec<_>>()
        });
        for (col, &(i, j, k)) in monomials.iter().enumerate() {
            lp.set_a(col, row, powers[0][i] * powers[1][j] * powers[2][k]);
        }
        if row < healthy {
            lp.set_a(margin, row, -1.0);
            lp.set_r(row, Relation::Larger);
        } else {
            lp.set_a(margin, row, 1.0);
        }
    }
    lp.set_l(margin, Some(0.0));
    lp.set_u(margin, Some(1.0));
    lp.set_c(margin, 1.0);

    Ok(match lp.maximize()? {
        LpStatus::Optimal(solution) => solution.objective > MIN_MARGIN,
        _ => false,
    })
}

fn smallest_degree(cells: &[[f64; 3]], healthy: usize) -> Result<Option<usize>> {
    let (mut low, mut high) = (0, MAX_DEGREE + 1);
    while low < high {
        let mid = (low + high) / 2;
        if separable(cells, healthy, mid)? {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    debug!("{} cells separable with degree {low}", cells.len());
    Ok((low <= MAX_DEGREE).then_some(low))
}

impl Problem for Radiation {
    const NAME: &'static str = "radiation";
    const DRIVER: Driver = Driver::Counted;

    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow> {
        let h: usize = input.next("number of healthy cells")?;
        let t: usize = input.next("number of tumor cells")?;

        let mut cells = Vec::with_capacity(h + t);
        for _ in 0..h + t {
            let x: f64 = input.next("cell x")?;
            let y: f64 = input.next("cell y")?;
            let z: f64 = input.next("cell z")?;
            cells.push([x, y, z]);
        }
        let scale = cells.iter().flatten().fold(1.0f64, |m, c| m.max(c.abs()));
        for cell in &mut cells {
            *cell = cell.map(|c| c / scale);
        }

        match smallest_degree(&cells, h)? {
            Some(degree) => writeln!(output, "{degree}")?,
            None => writeln!(output, "Impossible!")?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod test {
    use crate::testing::assert_solves;

    #[test]
    fn separating_degree() {
        assert_solves(
            "radiation",
            "3\n1 1\n0 0 0\n1 0 0\n2 1\n-1 0 0\n1 0 0\n0 0 0\n1 0\n3 3 3\n",
            "1\n2\n0\n",
        );
    }
}
