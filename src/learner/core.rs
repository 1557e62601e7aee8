use crate::data::{Dataset, Schema};
use crate::errors::DecisionTreeError;
use crate::learner::config::LearnerConfig;
use crate::node::NodeId;
use crate::prune::AcceptPolicy::{Lenient, Strict};
use crate::prune::{Enumeration, PruneContext, PruneOrder, PruneRecord, Strategy};
use crate::sampler::{CandidateSampler, UniformSampler};
use crate::tree::tree::Tree;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;

const SPLIT_BFS: PruneOrder = PruneOrder::Split(Enumeration::BreadthFirst);
const SPLIT_DFS: PruneOrder = PruneOrder::Split(Enumeration::DepthFirst);

/// Run once per random round, each on its own fresh tree.
const RANDOM_SCHEDULE: [Strategy; 2] = [
    Strategy::new(PruneOrder::Random, Strict),
    Strategy::new(PruneOrder::Random, Lenient),
];

/// Run once, each on its own fresh tree.
const FRESH_SCHEDULE: [Strategy; 10] = [
    Strategy::new(SPLIT_BFS, Strict),
    Strategy::new(SPLIT_BFS, Lenient),
    Strategy::new(SPLIT_DFS, Strict),
    Strategy::new(SPLIT_DFS, Lenient),
    Strategy::new(PruneOrder::DepthFirst, Strict),
    Strategy::new(PruneOrder::DepthFirst, Lenient),
    Strategy::new(PruneOrder::BreadthFirst, Strict),
    Strategy::new(PruneOrder::BreadthFirst, Lenient),
    Strategy::new(PruneOrder::Pairwise, Strict),
    Strategy::new(PruneOrder::Pairwise, Lenient),
];

/// Run per refinement round directly on the best tree.
const REFINEMENT_SCHEDULE: [Strategy; 10] = [
    Strategy::new(SPLIT_BFS, Strict),
    Strategy::new(SPLIT_BFS, Lenient),
    Strategy::new(SPLIT_DFS, Strict),
    Strategy::new(SPLIT_DFS, Lenient),
    Strategy::new(PruneOrder::BreadthFirst, Strict),
    Strategy::new(PruneOrder::DepthFirst, Strict),
    Strategy::new(PruneOrder::DepthFirst, Lenient),
    Strategy::new(PruneOrder::BreadthFirst, Lenient),
    Strategy::new(PruneOrder::Pairwise, Strict),
    Strategy::new(PruneOrder::Pairwise, Lenient),
];

/// Decision tree learner with tuning-set pruning.
#[derive(Clone, Debug, Default)]
pub struct DecisionTreeLearner {
    pub cfg: LearnerConfig,
    /// Arena of every tree grown by the last fit.
    pub tree: Tree,
    /// Root of the selected tree.
    pub root: Option<NodeId>,
    /// One record per strategy invocation of the last pruned fit.
    pub report: Vec<PruneRecord>,
    pub(crate) schema: Option<Arc<Schema>>,
}

impl DecisionTreeLearner {
    /// Decision tree learner.
    ///
    /// * `cfg` - Pruning run configuration.
    pub fn new(cfg: LearnerConfig) -> Self {
        DecisionTreeLearner {
            cfg,
            ..Default::default()
        }
    }

    /// Grow an unpruned tree on `train`.
    ///
    /// * `train` - Training instances.
    pub fn fit(&mut self, train: &Dataset) -> Result<(), DecisionTreeError> {
        let mut tree = Tree::new();
        let root = tree.grow(train);
        info!(
            "Grew a tree with {} nodes and {} leaves.",
            tree.n_nodes(root),
            tree.n_leaves(root)
        );
        self.tree = tree;
        self.root = Some(root);
        self.schema = Some(train.schema().clone());
        self.report.clear();
        Ok(())
    }

    /// Grow on `train` and prune against `tune`, seeding the random
    /// strategy from `cfg.seed`.
    ///
    /// * `train` - Training instances.
    /// * `tune` - Held-out instances deciding which prunes are kept.
    pub fn fit_pruned(&mut self, train: &Dataset, tune: &Dataset) -> Result<(), DecisionTreeError> {
        let mut rng = StdRng::seed_from_u64(self.cfg.seed);
        self.fit_pruned_with(train, tune, &mut UniformSampler, &mut rng)
    }

    /// Grow on `train` and prune against `tune` with a caller supplied
    /// candidate sampler and random generator.
    ///
    /// Runs random-order pruning on fresh trees, then every other strategy
    /// on its own fresh tree, then refinement rounds on the best tree.
    /// After every invocation the pruned tree replaces the best tree if its
    /// tuning accuracy is at least as high.
    pub fn fit_pruned_with<S: CandidateSampler>(
        &mut self,
        train: &Dataset,
        tune: &Dataset,
        sampler: &mut S,
        rng: &mut StdRng,
    ) -> Result<(), DecisionTreeError> {
        if train.schema() != tune.schema() {
            return Err(DecisionTreeError::SchemaMismatch);
        }
        let start = Instant::now();
        let mut tree = Tree::new();
        let initial = tree.grow(train);
        info!(
            "Grew initial tree with {} nodes, tuning accuracy {:.5}.",
            tree.n_nodes(initial),
            tree.accuracy(initial, tune)
        );
        let mut ctx = PruneContext::new(train, tune, initial, self.cfg.pairwise_rounds);
        let mut report = Vec::new();

        for _ in 0..self.cfg.random_rounds {
            for strategy in RANDOM_SCHEDULE {
                let root = tree.grow(train);
                report.push(tree.prune(&mut ctx, root, strategy, sampler, rng));
            }
        }
        for strategy in FRESH_SCHEDULE {
            let root = tree.grow(train);
            report.push(tree.prune(&mut ctx, root, strategy, sampler, rng));
        }
        for round in 0..self.cfg.refinement_rounds {
            info!("refinement round {}", round);
            for strategy in REFINEMENT_SCHEDULE {
                let root = ctx.best_root;
                report.push(tree.prune(&mut ctx, root, strategy, sampler, rng));
            }
        }

        if self.cfg.log_strategies {
            for record in report.iter() {
                info!(
                    "{} on tree {}: {:.5} -> {:.5} in {} attempts, best: {}",
                    record.strategy, record.root, record.before, record.after, record.attempts, record.replaced
                );
            }
        }
        let best = ctx.best_root;
        info!(
            "Finished pruning with {} strategy runs in {} seconds, best tree has {} nodes, tuning accuracy {:.5}.",
            report.len(),
            start.elapsed().as_secs(),
            tree.n_nodes(best),
            tree.accuracy(best, tune)
        );
        self.tree = tree;
        self.root = Some(best);
        self.schema = Some(train.schema().clone());
        self.report = report;
        Ok(())
    }

    /// Schema and root of the fitted tree.
    pub(crate) fn fitted(&self) -> Result<(&Arc<Schema>, NodeId), DecisionTreeError> {
        match (&self.schema, self.root) {
            (Some(schema), Some(root)) => Ok((schema, root)),
            _ => Err(DecisionTreeError::NotFitted),
        }
    }

    /// Number of nodes reachable in the fitted tree.
    pub fn n_nodes(&self) -> Result<usize, DecisionTreeError> {
        let (_, root) = self.fitted()?;
        Ok(self.tree.n_nodes(root))
    }

    /// Number of leaves reachable in the fitted tree.
    pub fn n_leaves(&self) -> Result<usize, DecisionTreeError> {
        let (_, root) = self.fitted()?;
        Ok(self.tree.n_leaves(root))
    }

    /// Depth of the fitted tree.
    pub fn depth(&self) -> Result<usize, DecisionTreeError> {
        let (_, root) = self.fitted()?;
        Ok(self.tree.depth(root))
    }
}
