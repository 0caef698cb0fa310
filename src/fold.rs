/// Preorder traversal of a tree or forest.
pub(crate) trait Fold<I: ?Sized = Self> {
    fn fold<R, Fn: FnMut(R, &I) -> R>(&self, init: R, f: &mut Fn) -> R;

    /// Saturates instead of overflowing.
    #[inline]
    fn product<Fn: FnMut(&I) -> u64>(&self, mut f: Fn) -> u64 {
        self.fold(1, &mut |n: u64, i| n.saturating_mul(f(i)))
    }

    #[inline]
    fn count(&self) -> usize {
        self.fold(0, &mut |n: usize, _| n + 1)
    }

    /// The preorder index of every node, indexed by `key`.
    fn preorder<K: FnMut(&I) -> usize>(&self, mut key: K) -> Box<[usize]> {
        let mut positions = vec![0; self.count()];
        self.fold(0, &mut |p: usize, i| {
            positions[key(i)] = p;
            p + 1
        });

        positions.into()
    }
}

impl<F: Fold<I>, I: ?Sized> Fold<I> for [F] {
    fn fold<R, Fn: FnMut(R, &I) -> R>(&self, init: R, f: &mut Fn) -> R {
        self.iter().fold(init, |r, i| i.fold(r, f))
    }
}
