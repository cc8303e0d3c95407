pub mod cell;
pub mod series;
pub mod table;

pub use cell::{Cell, Row, Table};
pub use series::{Series, SeriesPoint, multi_series};
pub use table::extract_table;
