use std::collections::HashSet;

/// Path efficiency in percent: `reference_len / agent_len * 100`, rounded.
///
/// An empty agent path scores 0. Scores above 100 are possible because jumps
/// let the agent cross obstacles the reference path had to route around.
pub fn efficiency(reference_len: usize, agent_len: usize) -> u32 {
    if agent_len == 0 {
        return 0;
    }
    let ratio = reference_len as f64 / agent_len as f64 * 100.0;
    (ratio + 0.5).floor() as u32
}

pub fn score(reference_path: &[usize], agent_path: &[usize]) -> u32 {
    efficiency(reference_path.len(), agent_path.len())
}

/// Final result of a completed session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: u32,
    pub reference_len: usize,
    pub agent_len: usize,
}

impl ScoreReport {
    pub fn new(reference_path: &[usize], agent_path: &[usize]) -> Self {
        ScoreReport {
            score: score(reference_path, agent_path),
            reference_len: reference_path.len(),
            agent_len: agent_path.len(),
        }
    }

    pub fn message(&self) -> String {
        format!("Score: {}/100", self.score)
    }
}

/// Cell sets for the post-game overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathComparison {
    pub reference_cells: HashSet<usize>,
    /// Cells the agent visited that are not on the reference path
    pub agent_only_cells: HashSet<usize>,
}

impl PathComparison {
    pub fn new(reference_path: &[usize], agent_path: &[usize]) -> Self {
        let reference_cells: HashSet<usize> = reference_path.iter().copied().collect();
        let agent_only_cells = agent_path
            .iter()
            .copied()
            .filter(|id| !reference_cells.contains(id))
            .collect();
        PathComparison {
            reference_cells,
            agent_only_cells,
        }
    }
}
