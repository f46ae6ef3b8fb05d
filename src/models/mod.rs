pub mod analysis;
pub mod briefing;
pub mod forecast;
pub mod incident;
pub mod scenario;

pub use analysis::*;
pub use briefing::*;
pub use forecast::*;
pub use incident::*;
pub use scenario::*;
