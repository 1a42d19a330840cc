use crate::lp::LinearProgram;

/// Which side of a branching decision produced a node. Purely diagnostic,
/// the search treats all nodes identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    Root,
    ZeroBranch,
    OneBranch,
}

impl NodeRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::ZeroBranch => "zero-branch",
            Self::OneBranch => "one-branch",
        }
    }
}

/// Struct that describes the branch and bound tree nodes.
///
/// Each node exclusively owns its `LinearProgram`; duplication happens only
/// when a parent branches, so siblings never alias state. `fixed_variables`
/// is the ordered list of (variable, value) decisions accumulated from the
/// root, each variable appearing at most once. `bound` is inherited from the
/// parent unchanged and only surfaced in diagnostics.
#[derive(Clone)]
pub struct LpBBNode {
    pub lp: LinearProgram,
    pub fixed_variables: Vec<(usize, usize)>,
    pub bound: f64,
    pub role: NodeRole,
}

impl LpBBNode {
    /// Wraps a problem into the root of a search tree.
    pub fn root(lp: LinearProgram) -> Self {
        Self {
            lp,
            fixed_variables: Vec::new(),
            bound: f64::INFINITY,
            role: NodeRole::Root,
        }
    }

    /// Depth in the search tree, equal to the number of branching decisions.
    pub fn depth(&self) -> usize {
        self.fixed_variables.len()
    }
}
