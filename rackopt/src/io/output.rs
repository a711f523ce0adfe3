use rackplan::io::ext_repr::{ExtProblem, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::OptimizerConfig;
use crate::opt::StrategyKind;

#[derive(Serialize, Deserialize, Clone)]
pub struct SolutionOutput {
    #[serde(flatten)]
    pub problem: ExtProblem,
    pub strategy: StrategyKind,
    pub solution: ExtSolution,
    pub config: OptimizerConfig,
}
