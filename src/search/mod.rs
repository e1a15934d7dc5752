pub mod file_search;

pub use file_search::FileSearcher;
