//! Tidy-tree walk (Reingold-Tilford with the Buchheim-Junger-Leipert
//! linear-time improvements).
//!
//! Produces an unscaled x coordinate per node, in separation units:
//!
//! 1. **First walk (post-order):** assign preliminary positions by merging
//!    subtree contours. Threads give O(1) amortized contour traversal.
//! 2. **Second walk (pre-order):** accumulate modifiers into final x.
//!
//! Siblings are separated by 1 unit, cousins by 2. A parent sits at the
//! midpoint of its first and last child.

use super::hierarchy::Hierarchy;

/// Minimum distance between siblings.
pub const SIBLING_SEPARATION: f64 = 1.0;

/// Minimum distance between nodes with different parents.
pub const COUSIN_SEPARATION: f64 = 2.0;

/// Per-node walk state.
#[derive(Debug, Clone)]
struct WalkNode {
    /// Preliminary x.
    prelim: f64,
    /// Modifier applied to the whole subtree in the second walk.
    modifier: f64,
    /// Change for even spacing of intermediate siblings.
    change: f64,
    /// Shift for even spacing of intermediate siblings.
    shift: f64,
    /// Contour thread.
    thread: Option<usize>,
    /// Ancestor pointer used by `apportion`.
    ancestor: usize,
    /// Default ancestor for this node's children.
    default_ancestor: Option<usize>,
    /// Final x.
    x: f64,
}

/// Runs the tidy walk over a flattened hierarchy.
pub struct TidyWalk<'h, 'a> {
    hierarchy: &'h Hierarchy<'a>,
    walk: Vec<WalkNode>,
}

impl<'h, 'a> TidyWalk<'h, 'a> {
    pub fn new(hierarchy: &'h Hierarchy<'a>) -> Self {
        let walk = (0..hierarchy.len())
            .map(|i| WalkNode {
                prelim: 0.0,
                modifier: 0.0,
                change: 0.0,
                shift: 0.0,
                thread: None,
                ancestor: i,
                default_ancestor: None,
                x: 0.0,
            })
            .collect();
        Self { hierarchy, walk }
    }

    /// Run both walks and return the unscaled x of every node, indexed like
    /// the hierarchy. The root ends up at x = 0.
    pub fn run(mut self) -> Vec<f64> {
        if self.hierarchy.is_empty() {
            return Vec::new();
        }
        for v in self.hierarchy.post_order() {
            self.first_walk(v);
        }
        // The root's virtual parent carries modifier -prelim(root).
        let root_shift = -self.walk[0].prelim;
        for v in 0..self.hierarchy.len() {
            let parent_modifier = match self.hierarchy.node(v).parent {
                Some(p) => self.walk[p].modifier,
                None => root_shift,
            };
            self.walk[v].x = self.walk[v].prelim + parent_modifier;
            self.walk[v].modifier += parent_modifier;
        }
        self.walk.into_iter().map(|w| w.x).collect()
    }

    /// Separation required between two nodes on the same level.
    pub fn separation(&self, a: usize, b: usize) -> f64 {
        if self.hierarchy.node(a).parent == self.hierarchy.node(b).parent {
            SIBLING_SEPARATION
        } else {
            COUSIN_SEPARATION
        }
    }

    fn left_sibling(&self, v: usize) -> Option<usize> {
        let node = self.hierarchy.node(v);
        let parent = node.parent?;
        if node.sibling_index == 0 {
            return None;
        }
        Some(self.hierarchy.node(parent).children[node.sibling_index - 1])
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.hierarchy
            .node(v)
            .children
            .first()
            .copied()
            .or(self.walk[v].thread)
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.hierarchy
            .node(v)
            .children
            .last()
            .copied()
            .or(self.walk[v].thread)
    }

    fn first_walk(&mut self, v: usize) {
        let hierarchy = self.hierarchy;
        let left = self.left_sibling(v);
        let children = &hierarchy.node(v).children;

        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            self.execute_shifts(v);
            let midpoint = (self.walk[first].prelim + self.walk[last].prelim) / 2.0;
            match left {
                Some(w) => {
                    self.walk[v].prelim = self.walk[w].prelim + self.separation(v, w);
                    self.walk[v].modifier = self.walk[v].prelim - midpoint;
                }
                None => self.walk[v].prelim = midpoint,
            }
        } else if let Some(w) = left {
            self.walk[v].prelim = self.walk[w].prelim + self.separation(v, w);
        }

        if let Some(parent) = hierarchy.node(v).parent {
            let default = self.walk[parent]
                .default_ancestor
                .unwrap_or(hierarchy.node(parent).children[0]);
            let ancestor = self.apportion(v, left, default);
            self.walk[parent].default_ancestor = Some(ancestor);
        }
    }

    /// Push `v`'s subtree right until it clears everything on its left.
    fn apportion(&mut self, v: usize, left: Option<usize>, default_ancestor: usize) -> usize {
        let Some(w) = left else {
            return default_ancestor;
        };
        let Some(parent) = self.hierarchy.node(v).parent else {
            return default_ancestor;
        };
        let mut ancestor = default_ancestor;

        // i = inside, o = outside; p = right subtree (v), m = left forest
        let mut vip = v;
        let mut vop = v;
        let mut vim = w;
        let mut vom = self.hierarchy.node(parent).children[0];
        let mut sip = self.walk[vip].modifier;
        let mut sop = self.walk[vop].modifier;
        let mut sim = self.walk[vim].modifier;
        let mut som = self.walk[vom].modifier;

        let mut next_im = self.next_right(vim);
        let mut next_ip = self.next_left(vip);
        while let (Some(im), Some(ip)) = (next_im, next_ip) {
            let (Some(om), Some(op)) = (self.next_left(vom), self.next_right(vop)) else {
                break;
            };
            vim = im;
            vip = ip;
            vom = om;
            vop = op;
            self.walk[vop].ancestor = v;

            let shift = self.walk[vim].prelim + sim - self.walk[vip].prelim - sip
                + self.separation(vim, vip);
            if shift > 0.0 {
                let wm = self.next_ancestor(vim, v, ancestor);
                self.move_subtree(wm, v, shift);
                sip += shift;
                sop += shift;
            }

            sim += self.walk[vim].modifier;
            sip += self.walk[vip].modifier;
            som += self.walk[vom].modifier;
            sop += self.walk[vop].modifier;

            next_im = self.next_right(vim);
            next_ip = self.next_left(vip);
        }

        if let Some(im) = next_im {
            if self.next_right(vop).is_none() {
                self.walk[vop].thread = Some(im);
                self.walk[vop].modifier += sim - sop;
            }
        }
        if let Some(ip) = next_ip {
            if self.next_left(vom).is_none() {
                self.walk[vom].thread = Some(ip);
                self.walk[vom].modifier += sip - som;
                ancestor = v;
            }
        }
        ancestor
    }

    fn next_ancestor(&self, vim: usize, v: usize, default_ancestor: usize) -> usize {
        let candidate = self.walk[vim].ancestor;
        if self.hierarchy.node(candidate).parent == self.hierarchy.node(v).parent {
            candidate
        } else {
            default_ancestor
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let subtrees = self.hierarchy.node(wp).sibling_index as f64
            - self.hierarchy.node(wm).sibling_index as f64;
        let change = shift / subtrees;
        self.walk[wp].change -= change;
        self.walk[wp].shift += shift;
        self.walk[wm].change += change;
        self.walk[wp].prelim += shift;
        self.walk[wp].modifier += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let hierarchy = self.hierarchy;
        let mut shift = 0.0;
        let mut change = 0.0;
        for &w in hierarchy.node(v).children.iter().rev() {
            self.walk[w].prelim += shift;
            self.walk[w].modifier += shift;
            change += self.walk[w].change;
            shift += self.walk[w].shift + change;
        }
    }
}
