mod chrome;
pub use chrome::*;

mod controls;
pub use controls::*;

mod dancing_figure;
pub use dancing_figure::*;

mod drawing_surface;
pub use drawing_surface::*;

mod notifications;
pub use notifications::*;

mod panel;
pub use panel::*;

mod setting;
pub use setting::*;
