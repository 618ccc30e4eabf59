use sea_orm::DatabaseConnection;

pub use category::Category;
pub use entry::SpendingEntry;
pub use error::EngineError;
pub use money::MoneyCents;
pub use summary::{CategorySummary, SpendingSummary, UserType, classify, summarize, summarize_category};

mod category;
mod entries;
mod entry;
mod error;
mod money;
mod ops;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;

/// Spending engine over an injected database connection.
///
/// The engine is stateless: every operation reads a fresh snapshot from the
/// store, so concurrent writers are serialized by the database, not here.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}
