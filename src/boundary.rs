use crate::{Fold, Memoized};
use pathfinding::matrix::Matrix;
use std::collections::VecDeque;

/// The pivot reached by every forest boundary state of a tree.
///
/// State `(i, j)` removes `i` nodes from the front of the forest, expanding each removed node
/// into its children in place, then `j` nodes from the back, appending the children of each
/// removed node at the back. The pivot is the last node removed. Front removals visit nodes
/// in preorder, so a node's position is its preorder index.
///
/// State `(0, 0)` removes nothing and has no pivot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Boundary {
    len: usize,
    labels: Matrix<usize>,
    sizes: Matrix<usize>,
    positions: Matrix<usize>,
}

impl Boundary {
    pub(crate) fn new(forest: &[Memoized]) -> Self {
        let len = forest.count();

        let mut boundary = Boundary {
            len,
            labels: Matrix::new(len + 1, len + 1, 0),
            sizes: Matrix::new(len + 1, len + 1, 0),
            positions: Matrix::new(len + 1, len + 1, 0),
        };

        let preorder = forest.preorder(|n: &Memoized| n.label);

        let mut front: VecDeque<&Memoized> = forest.iter().collect();
        for i in 0..=len {
            if i > 0 {
                let Some(node) = front.pop_front() else { break };
                boundary.record((i, 0), node, &preorder);
                node.children.iter().rev().for_each(|c| front.push_front(c));
            }

            let mut back = front.clone();
            for j in 1..=len - i {
                let Some(node) = back.pop_back() else { break };
                boundary.record((i, j), node, &preorder);
                back.extend(node.children.iter());
            }
        }

        boundary
    }

    fn record(&mut self, state: (usize, usize), pivot: &Memoized, preorder: &[usize]) {
        self.labels[state] = pivot.label;
        self.sizes[state] = pivot.size;
        self.positions[state] = preorder[pivot.label];
    }

    /// The number of nodes in the forest.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn label(&self, i: usize, j: usize) -> usize {
        self.labels[(i, j)]
    }

    #[inline]
    pub(crate) fn size(&self, i: usize, j: usize) -> usize {
        self.sizes[(i, j)]
    }

    #[inline]
    pub(crate) fn position(&self, i: usize, j: usize) -> usize {
        self.positions[(i, j)]
    }

    /// Splits the forest left at `(i, j)` around its last root.
    ///
    /// Returns the state without that root's subtree, followed by the state holding only the
    /// root's children.
    #[inline]
    pub(crate) fn split(&self, i: usize, j: usize) -> ((usize, usize), (usize, usize)) {
        let size = self.size(i, j + 1);
        let position = self.position(i, j + 1);
        ((i, j + size), (position + 1, self.len - position - size))
    }

    /// The labels of the nodes left at `(i, j)`, in the order they would be removed from the back.
    pub(crate) fn remainder(&self, i: usize, j: usize) -> impl Iterator<Item = usize> + '_ {
        (j + 1..=self.len - i).map(move |k| self.label(i, k))
    }
}
