// Entity types consumed by the aggregation engine and the dashboard
// payload types it produces.

pub mod athlete;
pub mod cycles;
pub mod dashboard;
pub mod gym;
pub mod training;

pub use athlete::*;
pub use cycles::*;
pub use dashboard::*;
pub use gym::*;
pub use training::*;
