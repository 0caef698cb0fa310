use crate::{Fold, Memoized, Tree};
use itertools::{Either, Itertools};
use std::iter::once;

/// Counts the distinct ways of ordering the children of every node of a [Tree].
///
/// This is the product over all nodes of the factorial of their number of children, saturating
/// at [u64::MAX].
///
/// # Example
///
/// ```rust
/// use phylo_edit_distance::{orderings, LabeledTree};
///
/// let fan = LabeledTree::new(0, (), (1..=3).map(|l| LabeledTree::leaf(l, ())).collect());
/// assert_eq!(orderings(&fan), 6);
/// ```
pub fn orderings<T: for<'t> Tree<'t>>(tree: &T) -> u64 {
    tree.children()
        .into_iter()
        .zip(1..)
        .fold(1, |product, (child, k)| {
            product.saturating_mul(k).saturating_mul(orderings(child))
        })
}

fn factorial(n: usize) -> u64 {
    (1..=n as u64).fold(1, u64::saturating_mul)
}

/// For every node in preorder, the order in which its children are visited.
pub(crate) type Assignment = Box<[Box<[usize]>]>;

impl Memoized {
    pub(crate) fn orderings(&self) -> u64 {
        self.product(|n: &Self| factorial(n.children.len()))
    }

    /// Copies this tree, visiting children in the order given by `assignment`.
    pub(crate) fn reordered(&self, assignment: &[Box<[usize]>]) -> Self {
        self.reorder(assignment, 0)
    }

    fn reorder(&self, assignment: &[Box<[usize]>], at: usize) -> Self {
        let offsets: Vec<_> = self
            .children
            .iter()
            .scan(at + 1, |offset, c| {
                let start = *offset;
                *offset += c.size;
                Some(start)
            })
            .collect();

        let children = assignment[at]
            .iter()
            .map(|&i| self.children[i].reorder(assignment, offsets[i]))
            .collect();

        Memoized {
            label: self.label,
            size: self.size,
            children,
        }
    }
}

/// Materializes one ordering of a forest, keeping its roots in place.
pub(crate) fn reordered(forest: &[Memoized], assignment: &[Box<[usize]>]) -> Box<[Memoized]> {
    forest
        .iter()
        .scan(0, |offset, t| {
            let start = *offset;
            *offset += t.size;
            Some(t.reorder(assignment, start))
        })
        .collect()
}

/// Enumerates every [Assignment] of a forest.
///
/// Permutations are lexicographic per node and the first node in preorder varies slowest.
pub(crate) fn assignments(forest: &[Memoized]) -> impl Iterator<Item = Assignment> + Send {
    let arity = forest.fold(Vec::new(), &mut |mut arity, n: &Memoized| {
        arity.push(n.children.len());
        arity
    });

    let identity: Assignment = arity.iter().map(|&c| (0..c).collect()).collect();
    let branching = arity.iter().positions(|&c| c > 1).collect_vec();

    if branching.is_empty() {
        return Either::Left(once(identity));
    }

    let choices = branching
        .iter()
        .map(|&p| (0..arity[p]).permutations(arity[p]))
        .multi_cartesian_product();

    Either::Right(choices.map(move |chosen| {
        let mut assignment = identity.clone();
        for (&p, order) in branching.iter().zip(chosen) {
            assignment[p] = order.into();
        }
        assignment
    }))
}
