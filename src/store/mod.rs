mod settings;
pub use settings::*;

mod shared;
pub use shared::*;

pub mod layout;

mod persist;
pub use persist::*;

mod identity;
pub use identity::*;
