pub mod pagination;

pub use pagination::PageCursor;
