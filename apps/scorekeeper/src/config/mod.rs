pub mod storage;

pub use storage::Config;
