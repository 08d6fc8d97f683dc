#![allow(async_fn_in_trait)]

pub mod commands;
pub mod context;
pub mod raid;
pub mod store;
pub mod time;
