//! Reusable UI widgets

pub mod selection;
