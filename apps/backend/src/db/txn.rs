//! Transaction helper for route handlers.

use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Run `f` inside a database transaction.
///
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`. A
/// rollback failure is logged but the original error is what propagates.
///
/// Callers pass a closure returning a boxed future so the borrow of the
/// transaction stays tied to the closure argument:
///
/// ```ignore
/// let game = with_txn(&state, |txn| {
///     Box::pin(async move { services::completions::get_completion(txn, id).await.map_err(AppError::from) })
/// })
/// .await?;
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> LocalBoxFuture<'a, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
