use crate::Error;
use derive_more::{Add, From};
use itertools::iproduct;
use pathfinding::{matrix::Matrix, num_traits::Zero};

/// The cost of every replacement, insertion and deletion between two trees.
///
/// For a first tree of `n` nodes and a second tree of `m` nodes, entry `(a, b)` is the cost of
/// replacing the node labeled `a` by the node labeled `b`, row `n` holds the cost of inserting
/// each node of the second tree and column `m` the cost of deleting each node of the first.
///
/// # Example
///
/// ```rust
/// use phylo_edit_distance::CostMatrix;
///
/// let costs = CostMatrix::from_rows([
///     [0.0, 5.0, 3.0],
///     [5.0, 0.0, 3.0],
///     [3.0, 3.0, 0.0],
/// ])?;
///
/// assert_eq!(costs.relabel(0, 1), 5.0);
/// assert_eq!(costs.delete(1), 3.0);
/// assert_eq!(costs.insert(0), 3.0);
/// # Ok::<_, phylo_edit_distance::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix(Matrix<f64>);

impl CostMatrix {
    /// Fails if any cost is negative or not finite.
    pub fn new(costs: Matrix<f64>) -> Result<Self, Error> {
        for (row, column) in iproduct!(0..costs.rows, 0..costs.columns) {
            let cost = costs[(row, column)];
            if !cost.is_finite() || cost < 0.0 {
                return Err(Error::InvalidCost { row, column, cost });
            }
        }

        Ok(CostMatrix(costs))
    }

    /// Fails if the rows differ in length or if any cost is negative or not finite.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = f64>,
    {
        Self::new(Matrix::from_rows(rows).map_err(|_| Error::Ragged)?)
    }

    /// The number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.0.rows, self.0.columns)
    }

    /// The cost of replacing node `a` of the first tree by node `b` of the second.
    pub fn relabel(&self, a: usize, b: usize) -> f64 {
        self.0[(a, b)]
    }

    /// The cost of deleting node `a` of the first tree.
    pub fn delete(&self, a: usize) -> f64 {
        self.0[(a, self.0.columns - 1)]
    }

    /// The cost of inserting node `b` of the second tree.
    pub fn insert(&self, b: usize) -> f64 {
        self.0[(self.0.rows - 1, b)]
    }

    /// The costs of transforming the second tree into the first.
    ///
    /// Insertions become deletions and vice versa.
    pub fn transposed(&self) -> Self {
        CostMatrix(self.0.transposed())
    }

    /// Converts to fixed-point for trees of `n` and `m` nodes.
    pub(crate) fn scaled(&self, scale: f64, n: usize, m: usize) -> Result<Weights, Error> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidScale(scale));
        }

        let expected = (n + 1, m + 1);
        if self.shape() != expected {
            return Err(Error::Dimensions {
                expected,
                found: self.shape(),
            });
        }

        let mut weights = Matrix::new(n + 1, m + 1, Weight::zero());
        for (row, column) in iproduct!(0..=n, 0..=m) {
            weights[(row, column)] = Weight((self.0[(row, column)] * scale) as u64);
        }

        // A minimum never sums more than three terms, each at most one cost per node.
        let Weight(max) = iproduct!(0..=n, 0..=m)
            .map(|p| weights[p])
            .max()
            .unwrap_or_default();

        u64::try_from(3 * (n + m + 1))
            .ok()
            .and_then(|k| max.checked_mul(k))
            .ok_or(Error::Overflow)?;

        Ok(Weights(weights))
    }
}

/// A fixed-point cost.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From, Add)]
pub(crate) struct Weight(u64);

impl Zero for Weight {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Weight {
    pub(crate) fn unscaled(self, scale: f64) -> f64 {
        self.0 as f64 / scale
    }
}

/// A [CostMatrix] converted to fixed-point.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Weights(Matrix<Weight>);

impl Weights {
    #[inline]
    pub(crate) fn relabel(&self, a: usize, b: usize) -> Weight {
        self.0[(a, b)]
    }

    #[inline]
    pub(crate) fn delete(&self, a: usize) -> Weight {
        self.0[(a, self.0.columns - 1)]
    }

    #[inline]
    pub(crate) fn insert(&self, b: usize) -> Weight {
        self.0[(self.0.rows - 1, b)]
    }

    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.0.rows, self.0.columns)
    }

    /// See [CostMatrix::transposed].
    pub(crate) fn transposed(&self) -> Self {
        Weights(self.0.transposed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    /// Costs `relabel(a, b)` to replace and `gap` to insert or delete.
    pub(crate) fn matrix<F>(n: usize, m: usize, relabel: F, gap: f64) -> CostMatrix
    where
        F: Fn(usize, usize) -> f64,
    {
        let rows = (0..=n).map(|a| {
            (0..=m)
                .map(|b| match (a == n, b == m) {
                    (false, false) => relabel(a, b),
                    (true, true) => 0.0,
                    _ => gap,
                })
                .collect::<Vec<_>>()
        });

        CostMatrix::from_rows(rows.collect::<Vec<_>>()).unwrap()
    }

    #[proptest]
    fn transposition_swaps_insertions_and_deletions(
        #[strategy(1usize..8)] n: usize,
        #[strategy(1usize..8)] m: usize,
        #[strategy(0..#n)] a: usize,
        #[strategy(0..#m)] b: usize,
    ) {
        let costs = matrix(n, m, |a, b| (a * 10 + b) as f64, 7.0);
        let t = costs.transposed();

        assert_eq!(t.shape(), (m + 1, n + 1));
        assert_eq!(t.relabel(b, a), costs.relabel(a, b));
        assert_eq!(t.insert(a), costs.delete(a));
        assert_eq!(t.delete(b), costs.insert(b));
    }

    #[proptest]
    fn scaling_truncates(#[strategy(0.0..100.0)] cost: f64) {
        let costs = CostMatrix::from_rows([[cost, cost], [cost, 0.0]]).unwrap();
        let weights = costs.scaled(1000.0, 1, 1).unwrap();
        assert_eq!(weights.relabel(0, 0), Weight((cost * 1000.0) as u64));
        assert_eq!(weights.insert(1), Weight::zero());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert_matches!(CostMatrix::from_rows(rows), Err(Error::Ragged));
    }

    #[test]
    fn rejects_negative_costs() {
        assert_matches!(
            CostMatrix::from_rows([[0.0, -1.0], [1.0, 0.0]]),
            Err(Error::InvalidCost { row: 0, column: 1, .. })
        );
    }

    #[test]
    fn rejects_costs_that_are_not_finite() {
        assert_matches!(
            CostMatrix::from_rows([[f64::NAN]]),
            Err(Error::InvalidCost { row: 0, column: 0, .. })
        );
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let costs = matrix(2, 3, |_, _| 1.0, 1.0);
        assert_matches!(
            costs.scaled(1000.0, 3, 2),
            Err(Error::Dimensions {
                expected: (4, 3),
                found: (3, 4)
            })
        );
    }

    #[test]
    fn rejects_invalid_scales() {
        let costs = matrix(1, 1, |_, _| 1.0, 1.0);
        assert_matches!(costs.scaled(0.0, 1, 1), Err(Error::InvalidScale(_)));
        assert_matches!(costs.scaled(f64::INFINITY, 1, 1), Err(Error::InvalidScale(_)));
    }

    #[test]
    fn rejects_scales_that_overflow() {
        let costs = matrix(1, 1, |_, _| 1e300, 1.0);
        assert_matches!(costs.scaled(1000.0, 1, 1), Err(Error::Overflow));
    }
}

#[cfg(test)]
pub(crate) use tests::matrix;
