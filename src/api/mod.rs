mod accessor;
mod chart_kind;
mod configurator;
mod json_contract;
mod options;
mod scheduler;
mod tick_format;

pub mod runtime;

pub use accessor::CoordinateAccessor;
pub use chart_kind::ChartKind;
pub use configurator::configure_chart;
pub use json_contract::{DATASET_JSON_SCHEMA_V1, DatasetJsonContractV1};
pub use options::{ChartOptions, parse_bool_strict};
pub use runtime::{render_all, render_chart};
pub use scheduler::{RenderJob, RenderScheduler};
pub use tick_format::{NumberFormat, TickFormatter};
