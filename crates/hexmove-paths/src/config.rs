/// Sizing hints for the scratch buffers an engine keeps between queries.
///
/// Both values are only initial capacities: a search that visits more
/// nodes grows the buffers, and the grown capacity is kept for later
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Expected number of nodes touched by one search.
    pub node_pool_size: usize,
    /// Expected number of queued entries in the open list.
    pub open_set_size: usize,
}

impl SearchConfig {
    pub const DEFAULT_NODE_POOL_SIZE: usize = 64;
    pub const DEFAULT_OPEN_SET_SIZE: usize = 64;

    pub const fn new(node_pool_size: usize, open_set_size: usize) -> Self {
        Self {
            node_pool_size,
            open_set_size,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NODE_POOL_SIZE, Self::DEFAULT_OPEN_SET_SIZE)
    }
}
