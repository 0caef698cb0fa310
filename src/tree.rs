use derive_more::From;

/// An abstraction for a labeled tree node.
pub trait Node<'n> {
    /// The type of the identifier the caller knows this [Node] by.
    type Id: Clone;

    /// Returns this [Node]'s label.
    ///
    /// Labels index the rows or columns of a [CostMatrix][crate::CostMatrix], so a tree of `n`
    /// nodes must label them with exactly the integers `0..n`.
    fn label(&'n self) -> usize;

    /// Returns the identifier reported for this [Node] in [Edit][crate::Edit]s.
    fn id(&'n self) -> Self::Id;
}

/// An abstraction for a recursive tree.
pub trait Tree<'t>: 't + Node<'t> {
    /// A type that can iterate over this [Tree]'s [children][Tree::children].
    type Children: IntoIterator<Item = &'t Self>;

    /// Returns this [Tree]'s immediate children, in order.
    fn children(&'t self) -> Self::Children;
}

/// A rooted tree that owns its children.
///
/// # Example
///
/// ```rust
/// use phylo_edit_distance::*;
///
/// let tree = LabeledTree::new(0, "root", vec![
///     LabeledTree::leaf(1, "A"),
///     LabeledTree::leaf(2, "B"),
/// ]);
///
/// assert_eq!(tree.label(), 0);
/// assert_eq!(tree.children().len(), 2);
/// assert_eq!(orderings(&tree), 2);
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, From)]
pub struct LabeledTree<I = usize> {
    label: usize,
    id: I,
    children: Vec<Self>,
}

impl<I> LabeledTree<I> {
    /// Constructs a [LabeledTree] with the given children, in order.
    pub fn new(label: usize, id: I, children: Vec<Self>) -> Self {
        LabeledTree {
            label,
            id,
            children,
        }
    }

    /// Constructs a [LabeledTree] without children.
    pub fn leaf(label: usize, id: I) -> Self {
        Self::new(label, id, Vec::new())
    }
}

impl<'n, I: 'n + Clone> Node<'n> for LabeledTree<I> {
    type Id = I;

    fn label(&'n self) -> usize {
        self.label
    }

    fn id(&'n self) -> Self::Id {
        self.id.clone()
    }
}

impl<'t, I: 't + Clone> Tree<'t> for LabeledTree<I> {
    type Children = &'t [Self];

    fn children(&'t self) -> Self::Children {
        &self.children
    }
}
