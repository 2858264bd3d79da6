mod rate_gate;
pub use rate_gate::*;

mod style;
pub use style::*;

mod recorder;
pub use recorder::*;

mod playback;
pub use playback::*;
