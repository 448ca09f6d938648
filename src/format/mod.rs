//! Text rendering shared by the value helpers
//!
//! - `culture`: explicit currency/separator conventions
//! - `number`: fixed, grouped, scientific and friendly numbers
//! - `chinese`: financial Chinese numerals
//! - `dotnet`: .NET-style numeric specifiers and date-time patterns

pub mod chinese;
pub mod culture;
pub mod dotnet;
pub mod number;

pub use culture::{Culture, Magnitude, SymbolPosition};
