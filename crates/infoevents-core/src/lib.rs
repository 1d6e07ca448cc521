//! DOM-independent logic behind the Info Events Bali site script.
//!
//! Nothing in this crate touches the browser. The web front-end feeds it
//! geometry, timestamps and form values, and applies whatever it decides to
//! the page.

pub mod accordion;
pub mod config;
pub mod contact;
pub mod counter;
pub mod forms;
pub mod nav;
pub mod newsletter;
pub mod rate;
pub mod scroll;
pub mod share;
pub mod tabs;
pub mod toast;

pub use accordion::*;
pub use config::*;
pub use contact::*;
pub use counter::*;
pub use forms::*;
pub use nav::*;
pub use newsletter::*;
pub use rate::*;
pub use scroll::*;
pub use share::*;
pub use tabs::*;
pub use toast::*;
