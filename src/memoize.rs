use crate::{Error, Fold, Tree};

/// An owned copy of a tree's shape and labels, with every subtree size computed once.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(crate) struct Memoized {
    pub(crate) label: usize,
    pub(crate) size: usize,
    pub(crate) children: Box<[Self]>,
}

impl Memoized {
    pub(crate) fn new(label: usize, children: Box<[Self]>) -> Self {
        Memoized {
            label,
            size: 1 + children.iter().map(|c| c.size).sum::<usize>(),
            children,
        }
    }

    #[cfg(test)]
    pub(crate) fn leaf(label: usize) -> Self {
        Self::new(label, Box::default())
    }
}

impl Fold for Memoized {
    fn fold<R, Fn: FnMut(R, &Self) -> R>(&self, init: R, f: &mut Fn) -> R {
        self.children.fold(f(init, self), f)
    }
}

fn count<T: for<'t> Tree<'t>>(t: &T) -> usize {
    1 + t.children().into_iter().map(count).sum::<usize>()
}

fn intern<T, I>(t: &T, ids: &mut [Option<I>]) -> Result<Memoized, Error>
where
    T: for<'t> Tree<'t, Id = I>,
{
    let label = t.label();
    let size = ids.len();

    match ids.get_mut(label) {
        None => return Err(Error::LabelOutOfRange { label, size }),
        Some(Some(_)) => return Err(Error::DuplicateLabel(label)),
        Some(slot) => *slot = Some(t.id()),
    }

    let children = t
        .children()
        .into_iter()
        .map(|c| intern(c, ids))
        .collect::<Result<_, _>>()?;

    Ok(Memoized::new(label, children))
}

/// Copies a caller's tree, checking that its labels are unique and dense.
///
/// Returns the copy along with the caller's identifiers, indexed by label.
pub(crate) fn memoize<T, I>(t: &T) -> Result<(Memoized, Box<[I]>), Error>
where
    T: for<'t> Tree<'t, Id = I>,
{
    let mut ids = Vec::new();
    ids.resize_with(count(t), || None);

    let root = intern(t, &mut ids)?;
    let ids: Box<[_]> = ids.into_iter().flatten().collect();
    debug_assert_eq!(ids.len(), root.size);

    Ok((root, ids))
}
