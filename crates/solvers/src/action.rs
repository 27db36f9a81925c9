/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return a solution from the current bracket.
    StopEarly,
}
