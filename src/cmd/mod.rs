/// Header-level information command.
pub mod info;
/// Field table listing command.
pub mod list;
/// Field rendering command.
pub mod show;
mod util;
