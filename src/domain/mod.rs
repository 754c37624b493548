pub mod entry;
pub mod results;

pub use entry::{Entry, FetchedFeed};
pub use results::{FeedMatches, MatchRecord, ResultSet};
