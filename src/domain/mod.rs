// ============================================================================
// Domain Models Module
// Labeled data containers and formatting configuration
// ============================================================================

pub mod config;
pub mod index;
pub mod series;
pub mod table;

pub use config::{JoinStyle, MeanSdFormat, PercentFormat, DOUHAO, DUNHAO, HE};
pub use index::{compress_labels, Index, LabelTuple};
pub use series::Series;
pub use table::{Places, Table};
