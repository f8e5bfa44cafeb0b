#![forbid(unsafe_code)]

mod rows;
mod schema;
mod text;
mod time;

pub(super) use rows::*;
pub(super) use schema::install_schema;
pub(super) use text::*;
pub(super) use time::now_ms;
