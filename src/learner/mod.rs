// public modules
pub mod config;
pub mod core;
pub mod predict;

// private modules
mod setters;

// Unit-testing
#[cfg(test)]
mod tests {
    use super::config::LearnerConfig;
    use super::core::DecisionTreeLearner;
    use crate::data::{Dataset, Instance};
    use crate::errors::DecisionTreeError;
    use crate::prune::{AcceptPolicy, PruneOrder, Strategy};
    use crate::sampler::CandidateSampler;
    use crate::testing::{ab_schema, dataset, load_csv, two_level_train, votes_schema};
    use crate::tree::tree::Tree;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::error::Error;

    fn votes() -> Result<(Dataset, Dataset, Dataset), Box<dyn Error>> {
        let schema = votes_schema()?;
        Ok((
            load_csv("resources/votes_train.csv", &schema)?,
            load_csv("resources/votes_tune.csv", &schema)?,
            load_csv("resources/votes_test.csv", &schema)?,
        ))
    }

    #[test]
    fn test_learner_fit_print() -> Result<(), Box<dyn Error>> {
        let schema = ab_schema()?;
        let data = dataset(
            &schema,
            &[
                ("X", &["0", "0"]),
                ("X", &["0", "1"]),
                ("Y", &["1", "0"]),
                ("Y", &["1", "1"]),
            ],
        )?;
        let mut learner = DecisionTreeLearner::default();
        learner.fit(&data)?;
        assert_eq!(learner.render()?, "ROOT {A?}\n    0 (X)\n    1 (Y)\n");
        assert_eq!(learner.format_accuracy(&data)?, "1.00000");
        assert_eq!(learner.classify(&Instance::new("X", &["1", "0"]))?, "Y");
        assert_eq!(learner.info_gain_report(&data), "A 1.00000\nB 0.00000\n");
        assert_eq!(learner.n_nodes()?, 3);
        assert_eq!(learner.n_leaves()?, 2);
        assert_eq!(learner.depth()?, 1);
        Ok(())
    }

    #[test]
    fn test_learner_not_fitted() -> Result<(), Box<dyn Error>> {
        let learner = DecisionTreeLearner::default();
        let data = two_level_train(&ab_schema()?)?;
        assert!(matches!(learner.render(), Err(DecisionTreeError::NotFitted)));
        assert!(matches!(learner.accuracy(&data), Err(DecisionTreeError::NotFitted)));
        assert!(matches!(
            learner.classify(&Instance::new("X", &["0", "0"])),
            Err(DecisionTreeError::NotFitted)
        ));
        // Attribute gains do not need a fitted tree.
        assert_eq!(learner.info_gain_report(&data).lines().count(), 2);
        Ok(())
    }

    #[test]
    fn test_learner_classify_out_of_domain() -> Result<(), Box<dyn Error>> {
        let mut learner = DecisionTreeLearner::default();
        learner.fit(&two_level_train(&ab_schema()?)?)?;
        // The root's default is Y, the default below A = 0 is X.
        assert_eq!(learner.classify(&Instance::new("X", &["2", "0"]))?, "Y");
        assert_eq!(learner.classify(&Instance::new("X", &["0", "maybe"]))?, "X");
        assert!(matches!(
            learner.classify(&Instance::new("X", &["0"])),
            Err(DecisionTreeError::ShapeMismatch(0, 1, 2))
        ));
        Ok(())
    }

    #[test]
    fn test_learner_schema_mismatch() -> Result<(), Box<dyn Error>> {
        let train = two_level_train(&ab_schema()?)?;
        let (_, tune, _) = votes()?;
        let mut learner = DecisionTreeLearner::default();
        assert!(matches!(
            learner.fit_pruned(&train, &tune),
            Err(DecisionTreeError::SchemaMismatch)
        ));
        learner.fit(&train)?;
        assert!(matches!(learner.accuracy(&tune), Err(DecisionTreeError::SchemaMismatch)));
        Ok(())
    }

    #[test]
    fn test_learner_prunes_root_when_it_helps() -> Result<(), Box<dyn Error>> {
        let schema = ab_schema()?;
        let train = two_level_train(&schema)?;
        let tune = dataset(&schema, &[("Y", &["0", "0"]), ("Y", &["1", "1"])])?;
        let mut learner = DecisionTreeLearner::default();
        learner.fit_pruned(&train, &tune)?;
        assert_eq!(learner.accuracy(&tune)?, 1.0);
        assert_eq!(learner.render()?, "ROOT (Y)\n");
        Ok(())
    }

    #[test]
    fn test_learner_fit_pruned_votes() -> Result<(), Box<dyn Error>> {
        let (train, tune, test) = votes()?;
        let mut reference = Tree::new();
        let initial = reference.grow(&train);
        let initial_accuracy = reference.accuracy(initial, &tune);
        let initial_nodes = reference.len();

        let mut learner = DecisionTreeLearner::new(LearnerConfig::default());
        learner.fit_pruned(&train, &tune)?;

        assert!(learner.accuracy(&tune)? >= initial_accuracy);
        assert!(learner.n_nodes()? <= initial_nodes);
        assert!(learner.accuracy(&test)? > 0.5);
        // 3 x 2 random runs, 10 on fresh trees, 2 x 10 refinements.
        assert_eq!(learner.report.len(), 36);
        assert!(learner.report.iter().take(16).all(|r| r.root % initial_nodes == 0));
        // One initial tree plus 16 fresh ones, none restructured.
        assert_eq!(learner.tree.len(), 17 * initial_nodes);
        for (i, node) in learner.tree.nodes.iter().enumerate() {
            let built = reference.node(i % initial_nodes);
            assert_eq!(node.children.len(), built.children.len());
            assert_eq!(node.test_attribute, built.test_attribute);
            assert_eq!(node.default_label, built.default_label);
        }
        // Refinement works on the best tree in place.
        let best = learner.root.ok_or("no root")?;
        assert!(learner.report.iter().skip(16).all(|r| r.root == best && r.replaced));
        assert!(learner.report.iter().all(|r| match r.strategy.order {
            PruneOrder::Random => true,
            _ => r.after >= r.before,
        }));
        Ok(())
    }

    #[test]
    fn test_learner_is_deterministic() -> Result<(), Box<dyn Error>> {
        let (train, tune, _) = votes()?;
        let mut first = DecisionTreeLearner::default().set_seed(17);
        first.fit_pruned(&train, &tune)?;
        let mut second = DecisionTreeLearner::default().set_seed(17);
        second.fit_pruned(&train, &tune)?;
        assert_eq!(first.render()?, second.render()?);
        assert_eq!(first.report, second.report);
        Ok(())
    }

    // Always tries the last remaining candidate.
    struct LastSampler;

    impl CandidateSampler for LastSampler {
        fn draw(&mut self, _rng: &mut StdRng, n_remaining: usize) -> usize {
            n_remaining - 1
        }
    }

    #[test]
    fn test_learner_custom_sampler_and_rounds() -> Result<(), Box<dyn Error>> {
        let (train, tune, _) = votes()?;
        let mut learner = DecisionTreeLearner::default()
            .set_random_rounds(1)
            .set_refinement_rounds(0)
            .set_pairwise_rounds(1)
            .set_log_strategies(true);
        let mut rng = StdRng::seed_from_u64(0);
        learner.fit_pruned_with(&train, &tune, &mut LastSampler, &mut rng)?;
        assert_eq!(learner.report.len(), 12);
        assert_eq!(
            learner.report[0].strategy,
            Strategy::new(PruneOrder::Random, AcceptPolicy::Strict)
        );
        assert!(learner.report.iter().all(|r| r.root != 0));
        Ok(())
    }
}
