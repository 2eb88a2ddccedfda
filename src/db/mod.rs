pub mod events;
pub mod freelancers;
pub mod organizers;
pub mod professions;
pub mod proposals;
pub mod ratings;
pub mod users;

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef};
use sea_orm::{ConnectOptions, Condition, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Create a SeaORM connection pool from the configured URL.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Case-insensitive substring match, portable across backends (`LOWER(col) LIKE %needle%`).
///
/// The needle is folded in Rust with full Unicode rules. The column is folded by the
/// database: Postgres folds every letter, SQLite only ASCII, so on SQLite an upper-case
/// accented letter in the stored value (`Ô`) will not match its lower-case form.
pub(crate) fn contains_ignore_case<T>(column: T, needle: &str) -> Condition
where
    T: IntoColumnRef,
{
    let pattern = format!("%{}%", needle.to_lowercase());
    Condition::all().add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
}

/// Treat `Some("")` and whitespace-only filters as absent.
pub(crate) fn non_blank(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::non_blank;

    #[test]
    fn blank_filters_are_dropped() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" Som ")), Some("Som"));
    }
}
