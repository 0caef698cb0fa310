use crate::{Boundary, Weight, Weights};
use pathfinding::{matrix::Matrix, num_traits::Zero};
use std::ops::{Index, IndexMut};

/// A forest boundary state of both trees.
pub(crate) type State = (usize, usize, usize, usize);

/// The decision that minimizes the cost of a [State].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum Step {
    /// The first forest is exhausted, insert what is left of the second.
    InsertRest,

    /// The second forest is exhausted, delete what is left of the first.
    DeleteRest,

    /// Replace the last root of the first forest by the last root of the second.
    Match,

    /// Delete the last root of the first forest.
    Delete,

    /// Insert the last root of the second forest.
    Insert,
}

/// A dense table over every [State] of two forests of `n` and `m` nodes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Table<T> {
    n: usize,
    m: usize,
    cells: Matrix<T>,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new(n: usize, m: usize, value: T) -> Self {
        Table {
            n,
            m,
            cells: Matrix::new((n + 1) * (n + 1), (m + 1) * (m + 1), value),
        }
    }
}

impl<T> Index<State> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j, k, l): State) -> &T {
        &self.cells[(i * (self.n + 1) + j, k * (self.m + 1) + l)]
    }
}

impl<T> IndexMut<State> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (i, j, k, l): State) -> &mut T {
        &mut self.cells[(i * (self.n + 1) + j, k * (self.m + 1) + l)]
    }
}

/// The total cost of the nodes left at every state of one forest.
fn remainders<F: Fn(usize) -> Weight>(t: &Boundary, cost: F) -> Matrix<Weight> {
    let n = t.len();
    let mut rest = Matrix::new(n + 1, n + 1, Weight::zero());
    for i in 0..=n {
        for j in (0..n - i).rev() {
            rest[(i, j)] = rest[(i, j + 1)] + cost(t.label(i, j + 1));
        }
    }

    rest
}

/// The minimum cost of an ordered edit between two forests, along with the [Step] taken at
/// every state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Solution {
    pub(crate) cost: Weight,
    pub(crate) steps: Table<Step>,
}

/// Computes the ordered edit distance between the forests described by `a` and `b`.
///
/// Ties are broken in favor of [Step::Match], then [Step::Delete].
pub(crate) fn solve(a: &Boundary, b: &Boundary, weights: &Weights) -> Solution {
    let (n, m) = (a.len(), b.len());
    debug_assert_eq!(weights.shape(), (n + 1, m + 1));

    let deletions = remainders(a, |x| weights.delete(x));
    let insertions = remainders(b, |y| weights.insert(y));

    let mut costs = Table::new(n, m, Weight::zero());
    let mut steps = Table::new(n, m, Step::InsertRest);

    for i in (0..=n).rev() {
        for j in (0..=n - i).rev() {
            for k in (0..=m).rev() {
                for l in (0..=m - k).rev() {
                    let (step, cost) = if i + j == n {
                        (Step::InsertRest, insertions[(k, l)])
                    } else if k + l == m {
                        (Step::DeleteRest, deletions[(i, j)])
                    } else {
                        let (x, y) = (a.label(i, j + 1), b.label(k, l + 1));
                        let ((p, q), (r, s)) = a.split(i, j);
                        let ((t, u), (v, w)) = b.split(k, l);

                        let matched = costs[(p, q, t, u)]
                            + costs[(r, s, v, w)]
                            + weights.relabel(x, y);

                        let deleted = costs[(i, j + 1, k, l)] + weights.delete(x);
                        let inserted = costs[(i, j, k, l + 1)] + weights.insert(y);

                        [(Step::Delete, deleted), (Step::Insert, inserted)]
                            .into_iter()
                            .fold((Step::Match, matched), |best, next| {
                                if next.1 < best.1 {
                                    next
                                } else {
                                    best
                                }
                            })
                    };

                    costs[(i, j, k, l)] = cost;
                    steps[(i, j, k, l)] = step;
                }
            }
        }
    }

    Solution {
        cost: costs[(0, 0, 0, 0)],
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix, memoize, LabeledTree, Memoized};
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    fn boundary(t: &LabeledTree) -> Boundary {
        let (u, _) = memoize(t).unwrap();
        Boundary::new(&[u])
    }

    fn unit(n: usize, m: usize) -> Weights {
        matrix(n, m, |a, b| if a == b { 0.0 } else { 1.0 }, 1.0)
            .scaled(1.0, n, m)
            .unwrap()
    }

    #[proptest]
    fn the_cost_between_identical_trees_is_zero(t: LabeledTree) {
        let a = boundary(&t);
        let n = a.len();
        let Solution { cost, steps } = solve(&a, &a, &unit(n, n));
        assert_eq!(cost, Weight::zero());
        assert_eq!(steps[(0, 0, 0, 0)], Step::Match);
    }

    #[proptest]
    fn the_cost_is_at_most_deleting_and_inserting_everything(a: LabeledTree, b: LabeledTree) {
        let (a, b) = (boundary(&a), boundary(&b));
        let (n, m) = (a.len(), b.len());
        let Solution { cost, .. } = solve(&a, &b, &unit(n, m));
        assert!(cost <= Weight::from((n + m) as u64));
    }

    #[proptest]
    fn the_cost_is_at_least_the_difference_in_size(a: LabeledTree, b: LabeledTree) {
        let (a, b) = (boundary(&a), boundary(&b));
        let (n, m) = (a.len(), b.len());
        let Solution { cost, .. } = solve(&a, &b, &unit(n, m));
        assert!(cost >= Weight::from(n.abs_diff(m) as u64));
    }

    #[test]
    fn exhausted_forests_only_insert_or_delete() {
        let a = boundary(&LabeledTree::new(
            0,
            0,
            vec![LabeledTree::leaf(1, 1), LabeledTree::leaf(2, 2)],
        ));

        let empty = Boundary::new(&[]);
        let weights = matrix(3, 0, |_, _| 0.0, 2.0).scaled(1.0, 3, 0).unwrap();
        let Solution { cost, steps } = solve(&a, &empty, &weights);

        assert_eq!(cost, Weight::from(6));
        assert_matches!(steps[(0, 0, 0, 0)], Step::DeleteRest);

        let weights = matrix(0, 3, |_, _| 0.0, 2.0).scaled(1.0, 0, 3).unwrap();
        let Solution { cost, steps } = solve(&empty, &a, &weights);

        assert_eq!(cost, Weight::from(6));
        assert_matches!(steps[(0, 0, 0, 0)], Step::InsertRest);
    }

    #[test]
    fn two_empty_forests_are_equal() {
        let empty = Boundary::new(&[]);
        let weights = matrix(0, 0, |_, _| 0.0, 1.0).scaled(1.0, 0, 0).unwrap();
        assert_eq!(solve(&empty, &empty, &weights).cost, Weight::zero());
    }

    #[test]
    fn ties_favor_matching() {
        let a = Boundary::new(&[Memoized::leaf(0)]);
        let weights = matrix(1, 1, |_, _| 4.0, 2.0).scaled(1.0, 1, 1).unwrap();
        let Solution { cost, steps } = solve(&a, &a, &weights);

        assert_eq!(cost, Weight::from(4));
        assert_eq!(steps[(0, 0, 0, 0)], Step::Match);
    }

    #[test]
    fn cheaper_gaps_beat_replacements() {
        let a = Boundary::new(&[Memoized::leaf(0)]);
        let weights = matrix(1, 1, |_, _| 5.0, 2.0).scaled(1.0, 1, 1).unwrap();
        let Solution { cost, steps } = solve(&a, &a, &weights);

        assert_eq!(cost, Weight::from(4));
        assert_eq!(steps[(0, 0, 0, 0)], Step::Delete);
    }

    #[test]
    fn order_matters() {
        let a = boundary(&LabeledTree::new(
            0,
            0,
            vec![LabeledTree::leaf(1, 1), LabeledTree::leaf(2, 2)],
        ));

        let b = boundary(&LabeledTree::new(
            0,
            0,
            vec![LabeledTree::leaf(2, 2), LabeledTree::leaf(1, 1)],
        ));

        let weights = matrix(3, 3, |x, y| if x == y { 0.0 } else { 5.0 }, 3.0)
            .scaled(1.0, 3, 3)
            .unwrap();

        // Keep one leaf, delete and reinsert the other.
        assert_eq!(solve(&a, &b, &weights).cost, Weight::from(6));
        assert_eq!(solve(&a, &a, &weights).cost, Weight::zero());
    }
}
