pub mod error;
pub mod fee;
pub mod rpc;
pub mod units;

pub use error::CoreError;
pub use fee::{get_fee, FeeDetails, FeeKind};
