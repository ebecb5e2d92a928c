//! Mini IR - data types shared by the scanner, the parser and the driver.
//!
//! - [`Position`] for 1-based line/column source locations
//! - [`Token`], [`TokenKind`] and [`TokenList`] for scanner output
//!
//! Every type is plain data: `Clone, Eq, Hash, Debug`. Tokens are created
//! once by the scanner and never mutated afterwards.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind, TokenList};
