//! Prune
//!
//! Tuning-set pruning of grown trees. Every strategy works on one tree of the
//! arena in place and only ever toggles the `terminal` flag of existing nodes.
use crate::data::Dataset;
use crate::node::NodeId;
use crate::sampler::CandidateSampler;
use crate::tree::tree::Tree;
use hashbrown::HashSet;
use log::{debug, trace};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{self, Display};

/// When a prune is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptPolicy {
    /// Keep when accuracy does not drop, preferring the smaller tree on ties.
    Lenient,
    /// Keep only on a strict improvement.
    Strict,
}

impl AcceptPolicy {
    pub fn accepts(self, post: f64, baseline: f64) -> bool {
        match self {
            AcceptPolicy::Lenient => post >= baseline,
            AcceptPolicy::Strict => post > baseline,
        }
    }
}

/// How the split strategy lists its candidates before the first sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Enumeration {
    BreadthFirst,
    DepthFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PruneOrder {
    DepthFirst,
    BreadthFirst,
    Split(Enumeration),
    Random,
    Pairwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub order: PruneOrder,
    pub policy: AcceptPolicy,
}

impl Strategy {
    pub const fn new(order: PruneOrder, policy: AcceptPolicy) -> Self {
        Strategy { order, policy }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let order = match self.order {
            PruneOrder::DepthFirst => "dfs",
            PruneOrder::BreadthFirst => "bfs",
            PruneOrder::Split(Enumeration::BreadthFirst) => "split-bfs",
            PruneOrder::Split(Enumeration::DepthFirst) => "split-dfs",
            PruneOrder::Random => "random",
            PruneOrder::Pairwise => "pairwise",
        };
        let policy = match self.policy {
            AcceptPolicy::Lenient => "lenient",
            AcceptPolicy::Strict => "strict",
        };
        write!(f, "{}/{}", order, policy)
    }
}

/// Datasets and current best root shared by the strategies of one run.
pub struct PruneContext<'a> {
    pub train: &'a Dataset,
    pub tune: &'a Dataset,
    pub best_root: NodeId,
    pub pairwise_rounds: usize,
}

impl<'a> PruneContext<'a> {
    pub fn new(train: &'a Dataset, tune: &'a Dataset, best_root: NodeId, pairwise_rounds: usize) -> Self {
        PruneContext {
            train,
            tune,
            best_root,
            pairwise_rounds,
        }
    }

    /// Make `prune_root` the best root if it does at least as well on the tuning set.
    pub fn replace_root(&mut self, tree: &Tree, prune_root: NodeId) -> bool {
        let candidate = tree.accuracy(prune_root, self.tune);
        let best = tree.accuracy(self.best_root, self.tune);
        if candidate >= best {
            self.best_root = prune_root;
            true
        } else {
            false
        }
    }
}

/// Outcome of one strategy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruneRecord {
    pub strategy: Strategy,
    pub root: NodeId,
    /// Tuning accuracy of the pruned tree before and after the strategy.
    pub before: f64,
    pub after: f64,
    /// Whether the pruned tree is the best tree afterwards.
    pub replaced: bool,
    /// Prune attempts made, a pair counting once.
    pub attempts: usize,
}

impl Tree {
    /// Prune `nodes` jointly and keep the result if `policy` accepts the
    /// accuracy on `eval` against `baseline`. On keep `baseline` moves to
    /// the new accuracy, otherwise every node gets its previous flag back.
    ///
    /// Restoring the previous flag rather than clearing it keeps a node that
    /// was already terminal terminal, so accuracy on `eval` never drops.
    pub fn attempt_prune(
        &mut self,
        nodes: &[NodeId],
        root: NodeId,
        eval: &Dataset,
        baseline: &mut f64,
        policy: AcceptPolicy,
    ) -> bool {
        let prior: Vec<bool> = nodes.iter().map(|&n| self.nodes[n].terminal).collect();
        for &n in nodes {
            self.nodes[n].terminal = true;
        }
        let post = self.accuracy(root, eval);
        let keep = policy.accepts(post, *baseline);
        trace!("prune {:?}: {} -> {}, kept: {}", nodes, baseline, post, keep);
        if keep {
            *baseline = post;
        } else {
            // Reverse order so a node listed twice ends on its first recorded flag.
            for (&n, &t) in nodes.iter().zip(prior.iter()).rev() {
                self.nodes[n].terminal = t;
            }
        }
        keep
    }

    /// Run `strategy` on the tree under `root`, then apply root replacement.
    pub fn prune<S: CandidateSampler>(
        &mut self,
        ctx: &mut PruneContext,
        root: NodeId,
        strategy: Strategy,
        sampler: &mut S,
        rng: &mut StdRng,
    ) -> PruneRecord {
        let before = self.accuracy(root, ctx.tune);
        let policy = strategy.policy;
        let attempts = match strategy.order {
            PruneOrder::DepthFirst => self.prune_frontier(ctx.tune, root, policy, true).len(),
            PruneOrder::BreadthFirst => self.prune_frontier(ctx.tune, root, policy, false).len(),
            PruneOrder::Split(enumeration) => self.prune_split(ctx, root, enumeration, policy).len(),
            PruneOrder::Random => self.prune_random(ctx, root, policy, sampler, rng).len(),
            PruneOrder::Pairwise => self.prune_pairwise(ctx, root, policy),
        };
        let replaced = ctx.replace_root(self, root);
        let after = self.accuracy(root, ctx.tune);
        debug!(
            "{}: tuning accuracy {:.5} -> {:.5} in {} attempts, {} nodes reachable, best: {}",
            strategy,
            before,
            after,
            attempts,
            self.n_nodes(root),
            replaced
        );
        PruneRecord {
            strategy,
            root,
            before,
            after,
            replaced,
            attempts,
        }
    }

    /// Depth-first (`lifo`) or breadth-first pruning on the tuning set.
    ///
    /// Candidates are discovered from the root's children; the root itself is
    /// never tried. Children of a node are queued only if it stays unpruned.
    /// Returns the nodes tried, in order.
    fn prune_frontier(&mut self, tune: &Dataset, root: NodeId, policy: AcceptPolicy, lifo: bool) -> Vec<NodeId> {
        let mut tried = Vec::new();
        if self.nodes[root].terminal {
            return tried;
        }
        let mut baseline = self.accuracy(root, tune);
        let mut frontier: VecDeque<NodeId> = self.nodes[root].children.iter().copied().collect();
        loop {
            let next = if lifo {
                frontier.pop_back()
            } else {
                frontier.pop_front()
            };
            let Some(n) = next else {
                break;
            };
            if self.nodes[n].terminal || !self.nodes[n].has_children() {
                continue;
            }
            tried.push(n);
            if !self.attempt_prune(&[n], root, tune, &mut baseline, policy) {
                let children = &self.nodes[n].children;
                frontier.extend(children.iter().copied().filter(|&c| !self.nodes[c].terminal));
            }
        }
        tried
    }

    /// Two sweeps: remove from the middle of the enumerated candidates, then
    /// from the end of a fresh enumeration. The second list is breadth-first,
    /// except for lenient depth-first splitting which uses
    /// [`Tree::enumerate_depth_first_expanded`]. Returns the nodes tried, in order.
    fn prune_split(
        &mut self,
        ctx: &mut PruneContext,
        root: NodeId,
        enumeration: Enumeration,
        policy: AcceptPolicy,
    ) -> Vec<NodeId> {
        let mut tried = Vec::new();
        let mut candidates = match enumeration {
            Enumeration::BreadthFirst => self.enumerate_breadth_first(root),
            Enumeration::DepthFirst => self.enumerate_depth_first(root),
        };
        let mut baseline = self.accuracy(root, ctx.tune);
        while !candidates.is_empty() {
            let n = candidates.remove(candidates.len() / 2);
            tried.push(n);
            self.attempt_prune(&[n], root, ctx.tune, &mut baseline, policy);
        }
        ctx.replace_root(self, root);

        let mut candidates = match (enumeration, policy) {
            (Enumeration::DepthFirst, AcceptPolicy::Lenient) => self.enumerate_depth_first_expanded(root),
            _ => self.enumerate_breadth_first(root),
        };
        let mut baseline = self.accuracy(root, ctx.tune);
        while let Some(n) = candidates.pop() {
            tried.push(n);
            self.attempt_prune(&[n], root, ctx.tune, &mut baseline, policy);
        }
        tried
    }

    /// Try candidates in random order. Accept decisions are made on the
    /// training set; only root replacement looks at the tuning set.
    fn prune_random<S: CandidateSampler>(
        &mut self,
        ctx: &mut PruneContext,
        root: NodeId,
        policy: AcceptPolicy,
        sampler: &mut S,
        rng: &mut StdRng,
    ) -> Vec<NodeId> {
        let mut tried = Vec::new();
        let mut candidates = self.enumerate_breadth_first(root);
        let mut baseline = self.accuracy(root, ctx.train);
        while !candidates.is_empty() {
            let n = candidates.remove(sampler.draw(rng, candidates.len()));
            tried.push(n);
            self.attempt_prune(&[n], root, ctx.train, &mut baseline, policy);
        }
        tried
    }

    /// Try every ordered pair of slots, where a slot is a candidate or empty,
    /// for `ctx.pairwise_rounds` rounds without resetting between rounds.
    /// Returns the number of pairs tried.
    fn prune_pairwise(&mut self, ctx: &mut PruneContext, root: NodeId, policy: AcceptPolicy) -> usize {
        let mut attempts = 0;
        let slots: Vec<Option<NodeId>> = std::iter::once(None)
            .chain(self.enumerate_breadth_first(root).into_iter().map(Some))
            .collect();
        for _ in 0..ctx.pairwise_rounds {
            let mut baseline = self.accuracy(root, ctx.tune);
            for &i in &slots {
                for &j in &slots {
                    let pair: Vec<NodeId> = [i, j].into_iter().flatten().collect();
                    self.attempt_prune(&pair, root, ctx.tune, &mut baseline, policy);
                    attempts += 1;
                }
            }
            ctx.replace_root(self, root);
        }
        attempts
    }

    /// Non-terminal nodes reachable from `root`, level by level.
    pub fn enumerate_breadth_first(&self, root: NodeId) -> Vec<NodeId> {
        if self.nodes[root].terminal {
            return Vec::new();
        }
        self.expand_breadth_first(vec![root])
    }

    /// Append the non-terminal children of every listed node, including the
    /// appended ones, once per occurrence.
    fn expand_breadth_first(&self, mut nodes: Vec<NodeId>) -> Vec<NodeId> {
        let mut j = 0;
        while j < nodes.len() {
            let children = &self.nodes[nodes[j]].children;
            nodes.extend(children.iter().copied().filter(|&c| !self.nodes[c].terminal));
            j += 1;
        }
        nodes
    }

    /// Non-terminal nodes reachable from `root`, newly discovered nodes going
    /// to the front of the list and restarting the scan.
    ///
    /// A node discovered again before it is scanned is listed again.
    pub fn enumerate_depth_first(&self, root: NodeId) -> Vec<NodeId> {
        if self.nodes[root].terminal {
            return Vec::new();
        }
        let mut nodes = vec![root];
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut j = 0;
        while j < nodes.len() {
            visited.insert(nodes[j]);
            let mut k = 0;
            // `nodes[j]` is re-read on purpose: after an insert it is the new node.
            while k < self.nodes[nodes[j]].children.len() {
                let child = self.nodes[nodes[j]].children[k];
                if !self.nodes[child].terminal && !visited.contains(&child) {
                    nodes.insert(0, child);
                    j = 0;
                }
                k += 1;
            }
            j += 1;
        }
        nodes
    }

    /// The depth-first list followed by `root`, then expanded breadth-first
    /// over every entry. Nodes are listed once per path through the list,
    /// so most appear several times.
    pub fn enumerate_depth_first_expanded(&self, root: NodeId) -> Vec<NodeId> {
        let mut nodes = self.enumerate_depth_first(root);
        if nodes.is_empty() {
            return nodes;
        }
        nodes.push(root);
        self.expand_breadth_first(nodes)
    }
}
