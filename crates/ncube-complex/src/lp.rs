use log::warn;
use nalgebra::{DMatrix, DVector};
use ncube_core::{ErrorInfo, NcubeError};

const PIVOT_EPSILON: f64 = 1e-9;
const FEASIBILITY_EPSILON: f64 = 1e-7;

/// Finds some `y` (unrestricted in sign) with `a * y >= b`, or `None` when the
/// system is infeasible. Every entry of `b` must be finite and non-negative and
/// `b` must have one entry per row of `a`; other shapes are rejected.
///
/// Phase one of the tableau simplex: free variables are split as `y = p - q`,
/// each row gets a surplus and an artificial column, and the artificial sum is
/// minimised with Bland's rule.
pub fn solve_geq(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Option<DVector<f64>>, NcubeError> {
    let (rows, vars) = a.shape();
    if b.len() != rows {
        return Err(NcubeError::Dimension(
            ErrorInfo::new("lp-shape", "right-hand side length must match the row count")
                .with_context("rows", rows.to_string())
                .with_context("rhs", b.len().to_string()),
        ));
    }
    if let Some(row) = b.iter().position(|&v| !(v >= 0.0 && v.is_finite())) {
        return Err(NcubeError::InvalidInput(
            ErrorInfo::new("lp-rhs-sign", "right-hand side must be finite and non-negative")
                .with_context("row", row.to_string()),
        ));
    }

    let surplus = 2 * vars;
    let artificial = surplus + rows;
    let rhs = artificial + rows;
    let mut tableau = DMatrix::<f64>::zeros(rows + 1, rhs + 1);
    for i in 0..rows {
        for j in 0..vars {
            tableau[(i, j)] = a[(i, j)];
            tableau[(i, vars + j)] = -a[(i, j)];
        }
        tableau[(i, surplus + i)] = -1.0;
        tableau[(i, artificial + i)] = 1.0;
        tableau[(i, rhs)] = b[i];
    }
    // Reduced costs of the artificial objective with the artificial basis.
    for j in 0..artificial {
        tableau[(rows, j)] = -(0..rows).map(|i| tableau[(i, j)]).sum::<f64>();
    }
    tableau[(rows, rhs)] = -b.sum();
    let mut basis: Vec<usize> = (artificial..artificial + rows).collect();

    let max_iterations = 64 * (rows + rhs);
    let mut iterations = 0;
    loop {
        let Some(enter) = (0..rhs).find(|&j| tableau[(rows, j)] < -PIVOT_EPSILON) else {
            break;
        };
        let mut leave: Option<(usize, f64)> = None;
        for i in 0..rows {
            let coeff = tableau[(i, enter)];
            if coeff <= PIVOT_EPSILON {
                continue;
            }
            let ratio = tableau[(i, rhs)] / coeff;
            let better = match leave {
                None => true,
                Some((best, best_ratio)) => {
                    ratio < best_ratio - PIVOT_EPSILON
                        || (ratio <= best_ratio + PIVOT_EPSILON && basis[i] < basis[best])
                }
            };
            if better {
                leave = Some((i, ratio));
            }
        }
        let Some((pivot_row, _)) = leave else {
            // The artificial objective is bounded below by zero.
            break;
        };
        pivot(&mut tableau, pivot_row, enter);
        basis[pivot_row] = enter;

        iterations += 1;
        if iterations > max_iterations {
            warn!("simplex gave up after {iterations} pivots ({rows} rows)");
            return Ok(None);
        }
    }

    if -tableau[(rows, rhs)] > FEASIBILITY_EPSILON {
        return Ok(None);
    }
    let mut y = DVector::<f64>::zeros(vars);
    for (i, &column) in basis.iter().enumerate() {
        if column < vars {
            y[column] += tableau[(i, rhs)];
        } else if column < surplus {
            y[column - vars] -= tableau[(i, rhs)];
        }
    }
    Ok(Some(y))
}

fn pivot(tableau: &mut DMatrix<f64>, row: usize, column: usize) {
    let scale = tableau[(row, column)];
    let width = tableau.ncols();
    for j in 0..width {
        tableau[(row, j)] /= scale;
    }
    for i in 0..tableau.nrows() {
        if i == row {
            continue;
        }
        let factor = tableau[(i, column)];
        if factor.abs() <= f64::EPSILON {
            continue;
        }
        for j in 0..width {
            let delta = factor * tableau[(row, j)];
            tableau[(i, j)] -= delta;
        }
    }
}
