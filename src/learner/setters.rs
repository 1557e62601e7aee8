use crate::learner::core::DecisionTreeLearner;

impl DecisionTreeLearner {
    // Set methods for parameters

    /// Set the seed on the learner.
    /// * `seed` - Seed for the random-order strategy.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    /// Set the number of random rounds on the learner.
    /// * `random_rounds` - Rounds of random pruning, each on two fresh trees.
    pub fn set_random_rounds(mut self, random_rounds: usize) -> Self {
        self.cfg.random_rounds = random_rounds;
        self
    }

    /// Set the number of refinement rounds on the learner.
    /// * `refinement_rounds` - Rounds of pruning directly on the best tree.
    pub fn set_refinement_rounds(mut self, refinement_rounds: usize) -> Self {
        self.cfg.refinement_rounds = refinement_rounds;
        self
    }

    /// Set the number of pairwise rounds on the learner.
    /// * `pairwise_rounds` - Outer rounds of the pairwise strategy.
    pub fn set_pairwise_rounds(mut self, pairwise_rounds: usize) -> Self {
        self.cfg.pairwise_rounds = pairwise_rounds;
        self
    }

    /// Set log_strategies on the learner.
    /// * `log_strategies` - Log every strategy invocation at info level.
    pub fn set_log_strategies(mut self, log_strategies: bool) -> Self {
        self.cfg.log_strategies = log_strategies;
        self
    }
}
