pub mod adjust_stock;
pub mod create;
pub mod delete;
pub mod find_by_client_id;
pub mod find_by_google_account;
pub mod find_by_id;
pub mod load_all;
pub mod load_ids;
pub mod update;

pub use adjust_stock::AdjustStock;
pub use create::Create;
pub use delete::Delete;
pub use find_by_client_id::FindByClientId;
pub use find_by_google_account::FindByGoogleAccount;
pub use find_by_id::FindById;
pub use load_all::LoadAll;
pub use load_ids::LoadIds;
pub use update::Update;

use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Everything a gateway needs from a repository for one entity type.
///
/// Implemented automatically for any type providing the individual traits.
pub trait EntityRepository<DB: Database, T: Identifiable>:
    LoadAll<DB, T> + FindById<DB, T> + Create<DB, T> + Update<DB, T> + Delete<DB> + LoadIds<DB>
{
}

impl<DB, T, R> EntityRepository<DB, T> for R
where
    DB: Database,
    T: Identifiable,
    R: LoadAll<DB, T> + FindById<DB, T> + Create<DB, T> + Update<DB, T> + Delete<DB> + LoadIds<DB>,
{
}
