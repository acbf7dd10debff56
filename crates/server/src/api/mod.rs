mod account;
pub use account::*;
