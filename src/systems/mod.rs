//! Systems that act on several bodies at once

pub mod collision;
