use pathviz_core::{Board, GridError, Session};

use crate::algorithm::Algorithm;
use crate::engine::{SearchEngine, SearchOutcome};

/// Run a search on a [`Board`] between its own endpoints.
pub trait BoardSearch {
    fn search(
        &self,
        algorithm: Algorithm,
        session: &mut Session<'_>,
    ) -> Result<SearchOutcome, GridError>;
}

impl BoardSearch for Board {
    fn search(
        &self,
        algorithm: Algorithm,
        session: &mut Session<'_>,
    ) -> Result<SearchOutcome, GridError> {
        SearchEngine::new(self.grid(), self.walls()).run(algorithm, self.start(), self.end(), session)
    }
}
