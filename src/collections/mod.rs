//! Collection managers
//!
//! The cart and the favorites list each own an ordered list of tour
//! references and report changes through an injected notification sink.
//!
//! | | duplicate ids on `add` | notifies on `add` | notifies on `remove` |
//! |---|---|---|---|
//! | `Cart` | rejected (no-op) | only on insertion | always |
//! | `Favorites` | allowed | always | always |

pub mod cart;
pub mod favorites;
pub mod list;

pub use cart::Cart;
pub use favorites::Favorites;
pub use list::TourList;
