pub mod add_liquidity;
pub mod create_pair;
pub mod create_position;
pub mod get_quote;
pub mod remove_liquidity;
pub mod swap;

pub use add_liquidity::*;
pub use create_pair::*;
pub use create_position::*;
pub use get_quote::*;
pub use remove_liquidity::*;
pub use swap::*;
