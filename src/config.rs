use bon::Builder;

/// How the search over children-orderings is carried out.
///
/// # Example
///
/// ```rust
/// use phylo_edit_distance::Config;
///
/// let config = Config::builder().scale(100.0).parallel(true).build();
/// assert_eq!(config.max_orderings, None);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(derive(Clone, Debug))]
pub struct Config {
    /// Costs are multiplied by this factor and truncated to integers before the search.
    #[builder(default = 1000.0)]
    pub scale: f64,

    /// Evaluate orderings on the [rayon] thread pool.
    #[builder(default = false)]
    pub parallel: bool,

    /// Stop after this many orderings, in enumeration order.
    pub max_orderings: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}
