pub mod create_pair;
pub mod get_pair;
pub mod initialize_router;
pub mod swap;
pub mod withdraw_fees;

pub use create_pair::*;
pub use get_pair::*;
pub use initialize_router::*;
pub use swap::*;
pub use withdraw_fees::*;
