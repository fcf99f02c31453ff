//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod library_books;
pub mod loans;
pub mod members;

use sqlx::{any::AnyRow, AnyPool, Row, TypeInfo, ValueRef};

/// Read a nullable column through the `Any` driver.
///
/// The driver reports a NULL column as the SQL type NULL, which fails the
/// `Option<T>` type-compatibility check before decoding is ever attempted
/// (`AnyValueRef::is_null` is also hard-wired to false). The column's
/// reported type has to be inspected instead.
pub(crate) fn get_nullable<'r, T>(row: &'r AnyRow, column: &str) -> Result<Option<T>, sqlx::Error>
where
    T: sqlx::Decode<'r, sqlx::Any> + sqlx::Type<sqlx::Any>,
{
    if row.try_get_raw(column)?.type_info().name() == "NULL" {
        Ok(None)
    } else {
        row.try_get::<T, _>(column).map(Some)
    }
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: AnyPool,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub library_books: library_books::LibraryBooksRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: AnyPool) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            library_books: library_books::LibraryBooksRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            pool,
        }
    }
}
