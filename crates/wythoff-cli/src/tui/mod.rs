mod app;
mod event;
mod event_loop;
mod runtime;

pub use self::{app::App, runtime::Runtime};
