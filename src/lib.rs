//! Blog Theme Scripts Library
//!
//! Client-side behavior of a static blog theme: a pt/en language toggle
//! that filters the post list, a collapsible sidebar and a "copy link"
//! share button. Controllers are written against small view traits; the
//! `web` feature binds them to the browser DOM, and [`page::MemoryPage`]
//! runs them anywhere else.

pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod page;
pub mod states;
pub mod storage;

#[cfg(feature = "web")]
pub mod web;
