use crate::{assignments, memoize, reconstruct, reordered, solve};
use crate::{Assignment, Boundary, Config, CostMatrix, Edit, Error, Memoized, Sides, Solution};
use crate::{Step, Table, Tree, Weight, Weights};
use log::{debug, trace};
use rayon::prelude::*;
use std::fmt::Display;
use std::io::{self, Write};
use std::slice;

/// The lowest cost sequence of [Edit]s found between two trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Diff<I> {
    /// The total cost of the [edits][Diff::edits], in the units of the [CostMatrix].
    pub distance: f64,

    /// Transforms the left-hand side into the right-hand side.
    pub edits: Box<[Edit<I>]>,

    /// Whether the children of the left-hand side were reordered, rather than those of the
    /// right-hand side.
    ///
    /// The [edits][Diff::edits] are reported from the left-hand side to the right-hand side
    /// either way.
    pub swapped: bool,

    /// The number of orderings evaluated.
    pub orderings: usize,
}

impl<I> Diff<I> {
    /// Pairs of identifiers of replaced nodes.
    pub fn matches(&self) -> impl Iterator<Item = (&I, &I)> {
        self.edits.iter().filter_map(|e| match e {
            Edit::Match(a, b) => Some((a, b)),
            _ => None,
        })
    }
}

impl<I: Display> Diff<I> {
    /// Writes one [Edit] per line.
    pub fn write_log<W: Write>(&self, mut w: W) -> io::Result<()> {
        for e in self.edits.iter() {
            writeln!(w, "{e}")?;
        }

        Ok(())
    }

    /// Writes the identifiers of every pair of replaced nodes, one pair per line.
    pub fn write_matching<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (a, b) in self.matches() {
            writeln!(w, "{a} {b}")?;
        }

        Ok(())
    }
}

/// The ordering of the reordered forest that reached the lowest cost.
pub(crate) struct Best {
    pub(crate) index: usize,
    pub(crate) cost: Weight,
    pub(crate) boundary: Boundary,
    pub(crate) steps: Table<Step>,
}

/// Solves `fixed` against every ordering of `permuted`, up to the budget.
///
/// Among orderings of equal cost, the first one enumerated is kept.
pub(crate) fn search(
    fixed: &Boundary,
    permuted: &[Memoized],
    weights: &Weights,
    config: &Config,
) -> Option<Best> {
    let budget = config.max_orderings.unwrap_or(usize::MAX);

    let evaluate = |(index, assignment): (usize, Assignment)| {
        let forest = reordered(permuted, &assignment);
        let boundary = Boundary::new(&forest);
        let Solution { cost, steps } = solve(fixed, &boundary, weights);
        trace!("ordering #{index} costs {cost:?}");

        Best {
            index,
            cost,
            boundary,
            steps,
        }
    };

    let candidates = assignments(permuted).take(budget).enumerate();

    if config.parallel {
        candidates
            .par_bridge()
            .map(evaluate)
            .min_by_key(|b| (b.cost, b.index))
    } else {
        candidates.map(evaluate).reduce(|best, next| {
            if next.cost < best.cost {
                debug!("ordering #{} improves the cost to {:?}", next.index, next.cost);
                next
            } else {
                best
            }
        })
    }
}

/// Finds the lowest cost sequence of [Edit]s that transforms one [Tree] into the other, with the
/// default [Config].
///
/// See [diff_with].
pub fn diff<T, I>(a: &T, b: &T, costs: &CostMatrix) -> Result<Diff<I>, Error>
where
    T: for<'t> Tree<'t, Id = I>,
    I: Clone,
{
    diff_with(a, b, costs, &Config::default())
}

/// Finds the lowest cost sequence of [Edit]s that transforms one [Tree] into the other.
///
/// Children are ordered, but the search tries every ordering of the children of whichever tree
/// has fewer of them, the right-hand side on a tie, and keeps the cheapest. The other tree is
/// compared as given.
///
/// Costs are truncated to multiples of `1 / config.scale` before the search.
pub fn diff_with<T, I>(a: &T, b: &T, costs: &CostMatrix, config: &Config) -> Result<Diff<I>, Error>
where
    T: for<'t> Tree<'t, Id = I>,
    I: Clone,
{
    if config.max_orderings == Some(0) {
        return Err(Error::EmptyBudget);
    }

    let (x, x_ids) = memoize(a)?;
    let (y, y_ids) = memoize(b)?;
    let weights = costs.scaled(config.scale, x.size, y.size)?;

    let (left, right) = (x.orderings(), y.orderings());
    debug!("{left} orderings on the left-hand side, {right} on the right-hand side");

    let swapped = left < right;
    let ((fixed, fixed_ids), (permuted, permuted_ids), weights) = if swapped {
        debug!("reordering the left-hand side");
        ((y, y_ids), (x, x_ids), weights.transposed())
    } else {
        ((x, x_ids), (y, y_ids), weights)
    };

    let boundary = Boundary::new(slice::from_ref(&fixed));
    let forest = slice::from_ref(&permuted);
    let best = search(&boundary, forest, &weights, config).ok_or(Error::EmptyBudget)?;

    let sides = Sides {
        boundaries: (&boundary, &best.boundary),
        ids: (&*fixed_ids, &*permuted_ids),
        swapped,
    };

    let edits = reconstruct(&sides, &best.steps);
    let distance = best.cost.unscaled(config.scale);

    let orderings = usize::try_from(permuted.orderings())
        .unwrap_or(usize::MAX)
        .min(config.max_orderings.unwrap_or(usize::MAX));

    debug!("distance {distance} found by ordering #{} of {orderings}", best.index);

    Ok(Diff {
        distance,
        edits,
        swapped,
        orderings,
    })
}
