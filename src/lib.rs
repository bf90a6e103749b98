//! QuestDB Site Library
//!
//! This crate provides the rendering and build logic for questdb.io customer
//! pages, a static site generator producing case study pages from typed
//! components.

pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod pages;
pub mod site;
pub mod theme;
