pub mod output;
pub mod table;

pub use output::{dim, error, header, info, success};
pub use table::roster_table;
