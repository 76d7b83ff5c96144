pub mod applicative;
pub mod result;
pub mod validation;
