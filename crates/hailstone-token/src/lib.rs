mod error;
mod token;

pub use error::TokenError;
pub use token::ShortToken;
