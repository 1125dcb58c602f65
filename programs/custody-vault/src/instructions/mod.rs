pub mod deposit;
pub mod initialize;
pub mod remove_user;
pub mod shared;
pub mod validate;
pub mod whitelist_user;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use remove_user::*;
pub use shared::*;
pub use validate::*;
pub use whitelist_user::*;
pub use withdraw::*;
