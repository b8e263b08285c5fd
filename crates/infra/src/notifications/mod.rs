//! Notification presenters

pub mod presenter;

pub use presenter::TracingPresenter;
