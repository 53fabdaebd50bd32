use std::fmt;
use std::str::FromStr;

/// The search strategies a [`SearchEngine`](crate::SearchEngine) can run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search, FIFO frontier.
    #[default]
    Bfs,
    /// Depth-first search, LIFO frontier.
    Dfs,
    /// Uniform-cost search.
    Dijkstra,
    /// A* with the Manhattan heuristic.
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    /// Whether the strategy always returns a shortest path on a unit grid.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Case-insensitive; accepts `a*` as an alias of `astar`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_front_end_names() {
        assert_eq!("BFS".parse(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse(), Ok(Algorithm::Dfs));
        assert_eq!("dijkstra".parse(), Ok(Algorithm::Dijkstra));
        assert_eq!("astar".parse(), Ok(Algorithm::Astar));
        assert_eq!(" A* ".parse(), Ok(Algorithm::Astar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(ParseAlgorithmError("greedy".into()))
        );
    }

    #[test]
    fn parse_error_message() {
        let err = "greedy".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown search algorithm \"greedy\"");
    }

    #[test]
    fn display_round_trips() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
        assert_eq!(Algorithm::default(), Algorithm::Bfs);
    }
}
