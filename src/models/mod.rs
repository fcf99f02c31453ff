//! Data models for the Library API

pub mod author;
pub mod book;
pub mod library_book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use library_book::LibraryBook;
pub use loan::Loan;
pub use member::Member;
