//! Linear programs built entry by entry and solved with HiGHS. Unset coefficients are zero,
//! unset relations and bounds take the defaults given at construction. Quadratic objective
//! terms (`set_d`) turn the program into a convex QP, which HiGHS solves as well.

use std::ops::Bound;

use highs::{HighsModelStatus, Model, RowProblem, Sense};
use highs_sys::{HighsInt, Highs_passHessian, STATUS_ERROR};
use log::{Level, debug, log_enabled, trace};
use serde::Serialize;

use crate::errors::{Result, SolveError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Relation {
    Smaller,
    Equal,
    Larger,
}

#[derive(Clone, Debug, Default, Serialize)]
struct Row {
    coefficients: Vec<(usize, f64)>,
    rhs: f64,
    relation: Option<Relation>,
}

#[derive(Clone, Debug, Default, Serialize)]
struct Column {
    lower: Option<Option<f64>>,
    upper: Option<Option<f64>>,
    cost: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct LinearProgram {
    default_relation: Relation,
    default_lower: Option<f64>,
    default_upper: Option<f64>,
    rows: Vec<Row>,
    columns: Vec<Column>,
    /// Lower triangle of `2D` as `(row, col, value)` with `col <= row`
    hessian: Vec<(usize, usize, f64)>,
    constant: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LpSolution {
    pub values: Vec<f64>,
    pub objective: f64,
}

impl LpSolution {
    pub fn value(&self, col: usize) -> f64 {
        self.values.get(col).copied().unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LpStatus {
    Optimal(LpSolution),
    Infeasible,
    Unbounded,
}

impl LinearProgram {
    /// Rows default to `default_relation`; variables to the bounds `lower..=upper` where
    /// `None` means unbounded in that direction
    pub fn new(default_relation: Relation, lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            default_relation,
            default_lower: lower,
            default_upper: upper,
            rows: Vec::new(),
            columns: Vec::new(),
            hessian: Vec::new(),
            constant: 0.0,
        }
    }

    fn row(&mut self, row: usize) -> &mut Row {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Row::default);
        }
        &mut self.rows[row]
    }

    fn column(&mut self, col: usize) -> &mut Column {
        if col >= self.columns.len() {
            self.columns.resize_with(col + 1, Column::default);
        }
        &mut self.columns[col]
    }

    pub fn number_of_variables(&self) -> usize {
        self.columns.len()
    }

    pub fn number_of_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Coefficient of variable `col` in constraint `row`
    pub fn set_a(&mut self, col: usize, row: usize, value: f64) {
        self.column(col);
        let row = self.row(row);
        match row.coefficients.iter_mut().find(|(c, _)| *c == col) {
            Some(entry) => entry.1 = value,
            None => row.coefficients.push((col, value)),
        }
    }

    /// Right-hand side of constraint `row`
    pub fn set_b(&mut self, row: usize, value: f64) {
        self.row(row).rhs = value;
    }

    pub fn set_r(&mut self, row: usize, relation: Relation) {
        self.row(row).relation = Some(relation);
    }

    /// Lower bound of variable `col`; `None` removes it
    pub fn set_l(&mut self, col: usize, bound: Option<f64>) {
        self.column(col).lower = Some(bound);
    }

    /// Upper bound of variable `col`; `None` removes it
    pub fn set_u(&mut self, col: usize, bound: Option<f64>) {
        self.column(col).upper = Some(bound);
    }

    /// Objective coefficient of variable `col`
    pub fn set_c(&mut self, col: usize, value: f64) {
        self.column(col).cost = value;
    }

    /// Entry `(i, j)` of the matrix `2D` in the objective term `x^T D x`. The matrix is
    /// symmetric, so only one of `(i, j)` and `(j, i)` needs to be set. `D` must be positive
    /// semidefinite and the program minimized.
    pub fn set_d(&mut self, i: usize, j: usize, value: f64) {
        let (row, col) = (i.max(j), i.min(j));
        self.column(row);
        match self.hessian.iter_mut().find(|(r, c, _)| (*r, *c) == (row, col)) {
            Some(entry) => entry.2 = value,
            None => self.hessian.push((row, col, value)),
        }
    }

    pub fn is_quadratic(&self) -> bool {
        self.hessian.iter().any(|&(_, _, v)| v != 0.0)
    }

    /// Constant term of the objective
    pub fn set_c0(&mut self, value: f64) {
        self.constant = value;
    }

    pub fn minimize(&self) -> Result<LpStatus> {
        self.solve(false)
    }

    pub fn maximize(&self) -> Result<LpStatus> {
        self.solve(true)
    }

    fn bounds(lower: Option<f64>, upper: Option<f64>) -> (Bound<f64>, Bound<f64>) {
        (
            lower.map_or(Bound::Unbounded, Bound::Included),
            upper.map_or(Bound::Unbounded, Bound::Included),
        )
    }

    /// Hands the lower triangle of `2D` to HiGHS in column-wise compressed form
    fn pass_hessian(&self, model: &mut Model) -> Result<()> {
        const TRIANGULAR_FORMAT: HighsInt = 1;

        let mut entries = self.hessian.clone();
        entries.sort_by_key(|&(row, col, _)| (col, row));

        let mut start = Vec::with_capacity(self.columns.len());
        let mut index = Vec::with_capacity(entries.len());
        let mut value = Vec::with_capacity(entries.len());
        let mut next = entries.iter().peekable();
        for col in 0..self.columns.len() {
            start.push(index.len() as HighsInt);
            while let Some(&(row, _, v)) = next.next_if(|(_, c, _)| *c == col) {
                index.push(row as HighsInt);
                value.push(v);
            }
        }

        let status = unsafe {
            Highs_passHessian(
                model.as_mut_ptr(),
                self.columns.len() as HighsInt,
                index.len() as HighsInt,
                TRIANGULAR_FORMAT,
                start.as_ptr(),
                index.as_ptr(),
                value.as_ptr(),
            )
        };
        if status == STATUS_ERROR {
            return Err(SolveError::Lp("HiGHS rejected the quadratic objective".into()));
        }
        Ok(())
    }

    fn run_highs(
        &self,
        maximize: bool,
        with_objective: bool,
    ) -> Result<(HighsModelStatus, Vec<f64>, f64)> {
        let mut pb = RowProblem::default();

        let cols: Vec<_> = self
            .columns
            .iter()
            .map(|c| {
                let lower = c.lower.unwrap_or(self.default_lower);
                let upper = c.upper.unwrap_or(self.default_upper);
                let cost = if with_objective { c.cost } else { 0.0 };
                pb.add_column(cost, Self::bounds(lower, upper))
            })
            .collect();

        for row in &self.rows {
            let bounds = match row.relation.unwrap_or(self.default_relation) {
                Relation::Smaller => Self::bounds(None, Some(row.rhs)),
                Relation::Equal => Self::bounds(Some(row.rhs), Some(row.rhs)),
                Relation::Larger => Self::bounds(Some(row.rhs), None),
            };
            pb.add_row(
                bounds,
                row.coefficients.iter().map(|&(c, v)| (cols[c], v)),
            );
        }

        let mut model = Model::try_new(pb).map_err(|e| SolveError::Lp(format!("{e:?}")))?;
        if with_objective && self.is_quadratic() {
            self.pass_hessian(&mut model)?;
        }
        model.make_quiet();
        model.set_option("parallel", "off");
        model.set_option("threads", 1);
        model.set_sense(if maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        });

        let solved = model
            .try_solve()
            .map_err(|e| SolveError::Lp(format!("{e:?}")))?;
        let status = solved.status();
        let values = solved.get_solution().columns().to_vec();
        Ok((status, values, solved.objective_value()))
    }

    fn solve(&self, maximize: bool) -> Result<LpStatus> {
        if maximize && self.is_quadratic() {
            return Err(SolveError::Lp("quadratic objectives can only be minimized".into()));
        }
        if log_enabled!(Level::Trace) {
            if let Ok(json) = serde_json::to_string(self) {
                trace!("solving {json}");
            }
        }

        if self.columns.is_empty() {
            let feasible = self.rows.iter().all(|row| {
                match row.relation.unwrap_or(self.default_relation) {
                    Relation::Smaller => 0.0 <= row.rhs,
                    Relation::Equal => row.rhs == 0.0,
                    Relation::Larger => 0.0 >= row.rhs,
                }
            });
            return Ok(if feasible {
                LpStatus::Optimal(LpSolution {
                    values: Vec::new(),
                    objective: self.constant,
                })
            } else {
                LpStatus::Infeasible
            });
        }

        let (status, values, objective) = self.run_highs(maximize, true)?;
        debug!(
            "{} with {} variables and {} constraints: {status:?}",
            if self.is_quadratic() { "qp" } else { "lp" },
            self.columns.len(),
            self.rows.len()
        );

        match status {
            HighsModelStatus::Optimal => Ok(LpStatus::Optimal(LpSolution {
                values,
                objective: self.constant + objective,
            })),
            HighsModelStatus::Infeasible => Ok(LpStatus::Infeasible),
            HighsModelStatus::Unbounded => Ok(LpStatus::Unbounded),
            HighsModelStatus::UnboundedOrInfeasible => {
                // a feasible point decides between the two
                let (status, _, _) = self.run_highs(maximize, false)?;
                Ok(if status == HighsModelStatus::Optimal {
                    LpStatus::Unbounded
                } else {
                    LpStatus::Infeasible
                })
            }
            other => Err(SolveError::Lp(format!("{other:?}"))),
        }
    }
}

const ROUNDING_TOLERANCE: f64 = 1e-6;

/// Largest integer not above `x`, treating values within a small tolerance of an integer
/// as that integer
pub fn floor_to_i64(x: f64) -> i64 {
    let nearest = x.round();
    if (x - nearest).abs() <= ROUNDING_TOLERANCE * nearest.abs().max(1.0) {
        nearest as i64
    } else {
        x.floor() as i64
    }
}

/// Smallest integer not below `x`, with the same tolerance as [`floor_to_i64`]
pub fn ceil_to_i64(x: f64) -> i64 {
    -floor_to_i64(-x)
}

#[cfg(test)]
mod test {
    use super::*;

    fn optimal(status: LpStatus) -> LpSolution {
        match status {
            LpStatus::Optimal(s) => s,
            other => panic!("expected an optimal solution, got {other:?}"),
        }
    }

    #[test]
    fn small_minimization() {
        // min x + y  s.t.  x + 2y >= 4, 3x + y >= 6, x, y >= 0
        let mut lp = LinearProgram::new(Relation::Larger, Some(0.0), None);
        lp.set_a(0, 0, 1.0);
        lp.set_a(1, 0, 2.0);
        lp.set_b(0, 4.0);
        lp.set_a(0, 1, 3.0);
        lp.set_a(1, 1, 1.0);
        lp.set_b(1, 6.0);
        lp.set_c(0, 1.0);
        lp.set_c(1, 1.0);
        lp.set_c0(10.0);

        let sol = optimal(lp.minimize().unwrap());
        assert!((sol.objective - 12.8).abs() < 1e-6);
        assert!((sol.value(0) - 1.6).abs() < 1e-6);
        assert!((sol.value(1) - 1.2).abs() < 1e-6);
        assert_eq!(floor_to_i64(sol.objective), 12);
        assert_eq!(ceil_to_i64(sol.objective), 13);
    }

    #[test]
    fn maximization_with_bounds() {
        // max 2x + y  s.t.  x + y <= 4, x <= 3
        let mut lp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        lp.set_a(0, 0, 1.0);
        lp.set_a(1, 0, 1.0);
        lp.set_b(0, 4.0);
        lp.set_u(0, Some(3.0));
        lp.set_c(0, 2.0);
        lp.set_c(1, 1.0);

        let sol = optimal(lp.maximize().unwrap());
        assert!((sol.objective - 7.0).abs() < 1e-6);
        assert_eq!(floor_to_i64(sol.objective), 7);
    }

    #[test]
    fn infeasible_and_unbounded() {
        let mut lp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        lp.set_a(0, 0, 1.0);
        lp.set_b(0, -1.0);
        assert_eq!(lp.minimize().unwrap(), LpStatus::Infeasible);

        let mut lp = LinearProgram::new(Relation::Larger, None, None);
        lp.set_a(0, 0, 1.0);
        lp.set_b(0, 1.0);
        lp.set_c(0, 1.0);
        assert_eq!(lp.maximize().unwrap(), LpStatus::Unbounded);

        let mut lp = LinearProgram::new(Relation::Equal, None, None);
        lp.set_a(0, 0, 1.0);
        lp.set_a(0, 1, 1.0);
        lp.set_b(0, 1.0);
        lp.set_b(1, 2.0);
        lp.set_r(1, Relation::Larger);
        lp.set_c(0, 1.0);
        // x = 1 and x >= 2
        assert_eq!(lp.maximize().unwrap(), LpStatus::Infeasible);
    }

    #[test]
    fn overwriting_entries() {
        let mut lp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        lp.set_a(0, 0, 5.0);
        lp.set_a(0, 0, 1.0);
        lp.set_b(0, 2.0);
        lp.set_c(0, 1.0);
        let sol = optimal(lp.maximize().unwrap());
        assert!((sol.objective - 2.0).abs() < 1e-6);
        assert_eq!(lp.number_of_variables(), 1);
        assert_eq!(lp.number_of_constraints(), 1);
    }

    #[test]
    fn quadratic_objective() {
        // min (x - 1)² + (y - 2)² = x² + y² - 2x - 4y + 5  s.t.  x + y <= 2, x, y >= 0
        let mut qp = LinearProgram::new(Relation::Smaller, Some(0.0), None);
        qp.set_a(0, 0, 1.0);
        qp.set_a(1, 0, 1.0);
        qp.set_b(0, 2.0);
        qp.set_d(0, 0, 2.0);
        qp.set_d(1, 1, 2.0);
        qp.set_c(0, -2.0);
        qp.set_c(1, -4.0);
        qp.set_c0(5.0);
        assert!(qp.is_quadratic());

        let sol = optimal(qp.minimize().unwrap());
        assert!((sol.value(0) - 0.5).abs() < 1e-5);
        assert!((sol.value(1) - 1.5).abs() < 1e-5);
        assert!((sol.objective - 0.5).abs() < 1e-5);

        assert!(matches!(qp.maximize(), Err(SolveError::Lp(_))));
    }

    #[test]
    fn off_diagonal_entries_are_symmetric() {
        // (x - y)² given only as the upper entry (0, 1); x - y >= 2 forces a value of 4
        let mut qp = LinearProgram::new(Relation::Larger, None, None);
        qp.set_d(0, 0, 2.0);
        qp.set_d(0, 1, -2.0);
        qp.set_d(1, 1, 2.0);
        qp.set_a(0, 0, 1.0);
        qp.set_a(1, 0, -1.0);
        qp.set_b(0, 2.0);
        let sol = optimal(qp.minimize().unwrap());
        assert!((sol.objective - 4.0).abs() < 1e-5);

        qp.set_b(0, -2.0);
        let sol = optimal(qp.minimize().unwrap());
        assert!(sol.objective.abs() < 1e-5);
    }

    #[test]
    fn rounding_tolerance() {
        assert_eq!(floor_to_i64(2.9999999999), 3);
        assert_eq!(floor_to_i64(2.5), 2);
        assert_eq!(floor_to_i64(-2.5), -3);
        assert_eq!(ceil_to_i64(3.0000000001), 3);
        assert_eq!(ceil_to_i64(3.2), 4);
        assert_eq!(ceil_to_i64(-3.2), -3);
    }
}
