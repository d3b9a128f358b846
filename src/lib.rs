#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]
extern crate alloc;

pub mod constants;
pub mod devices;
pub mod editor;
pub mod filesys;
pub mod inspect;
pub mod logging;
pub mod shell;

pub mod prelude {
    pub use crate::devices::{Console, Keyboard};
    pub use crate::filesys::fat16::{Fat16, Geometry};
    pub use crate::filesys::FsError;
    pub use crate::shell::terminal::Terminal;
    pub use crate::shell::Shell;
    pub use crate::term_print;
    pub use crate::term_println;
}
