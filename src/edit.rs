use crate::{Boundary, State, Step, Table};
use arrayvec::ArrayVec;
use std::fmt::{self, Display, Formatter};

/// A single operation of an edit script, in terms of the caller's node identifiers.
///
/// The script transforms the left-hand side of [diff][crate::diff] into its right-hand side.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Edit<I> {
    /// Replace a node of the left-hand side by a node of the right-hand side.
    Match(I, I),

    /// Delete a node of the left-hand side.
    Delete(I),

    /// Insert a node of the right-hand side.
    Insert(I),
}

impl<I: Display> Display for Edit<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Match(a, b) => write!(f, "MATCH {a} {b}"),
            Edit::Delete(a) => write!(f, "DEL {a}"),
            Edit::Insert(b) => write!(f, "INS {b}"),
        }
    }
}

/// The trees an edit script was computed for.
///
/// `ids` are indexed by label. If the search `swapped` the caller's trees, edits are turned
/// back around as they are emitted.
pub(crate) struct Sides<'a, I> {
    pub(crate) boundaries: (&'a Boundary, &'a Boundary),
    pub(crate) ids: (&'a [I], &'a [I]),
    pub(crate) swapped: bool,
}

impl<I: Clone> Sides<'_, I> {
    fn matched(&self, x: usize, y: usize) -> Edit<I> {
        let (a, b) = (self.ids.0[x].clone(), self.ids.1[y].clone());
        if self.swapped {
            Edit::Match(b, a)
        } else {
            Edit::Match(a, b)
        }
    }

    fn deleted(&self, x: usize) -> Edit<I> {
        let a = self.ids.0[x].clone();
        if self.swapped {
            Edit::Insert(a)
        } else {
            Edit::Delete(a)
        }
    }

    fn inserted(&self, y: usize) -> Edit<I> {
        let b = self.ids.1[y].clone();
        if self.swapped {
            Edit::Delete(b)
        } else {
            Edit::Insert(b)
        }
    }
}

/// Follows the [Step]s from the initial state, emitting one [Edit] per node.
///
/// A match emits the pair, then the forests left of the matched roots, then their children.
pub(crate) fn reconstruct<I: Clone>(sides: &Sides<I>, steps: &Table<Step>) -> Box<[Edit<I>]> {
    let (a, b) = sides.boundaries;
    let mut edits = Vec::with_capacity(a.len() + b.len());
    let mut pending: Vec<State> = vec![(0, 0, 0, 0)];

    while let Some((i, j, k, l)) = pending.pop() {
        let mut next = ArrayVec::<State, 2>::new();

        match steps[(i, j, k, l)] {
            Step::InsertRest => edits.extend(b.remainder(k, l).map(|y| sides.inserted(y))),
            Step::DeleteRest => edits.extend(a.remainder(i, j).map(|x| sides.deleted(x))),

            Step::Match => {
                edits.push(sides.matched(a.label(i, j + 1), b.label(k, l + 1)));
                let ((p, q), (r, s)) = a.split(i, j);
                let ((t, u), (v, w)) = b.split(k, l);
                next.push((p, q, t, u));
                next.push((r, s, v, w));
            }

            Step::Delete => {
                edits.push(sides.deleted(a.label(i, j + 1)));
                next.push((i, j + 1, k, l));
            }

            Step::Insert => {
                edits.push(sides.inserted(b.label(k, l + 1)));
                next.push((i, j, k, l + 1));
            }
        }

        pending.extend(next.into_iter().rev());
    }

    edits.into()
}
