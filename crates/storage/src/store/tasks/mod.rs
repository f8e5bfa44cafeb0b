#![forbid(unsafe_code)]

mod complete;
mod create;
mod delete;
mod edit;
mod get;
mod list;
mod reorder;
