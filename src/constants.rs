/// Edge text printed for the root node.
pub const ROOT_EDGE: &str = "ROOT";
/// Indentation per tree level when printing.
pub const INDENT: &str = "    ";
/// Decimal places used for printed accuracies and gains.
pub const REPORT_PRECISION: usize = 5;
/// Rounds of random pruning (each round prunes two fresh trees).
pub const RANDOM_ROUNDS: usize = 3;
/// Rounds of in-place refinement on the best tree.
pub const REFINEMENT_ROUNDS: usize = 2;
/// Outer rounds of the pairwise strategy.
pub const PAIRWISE_ROUNDS: usize = 3;
/// Number of class labels binary entropy is defined over.
pub const N_LABELS: usize = 2;
