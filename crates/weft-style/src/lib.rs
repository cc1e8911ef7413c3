#![forbid(unsafe_code)]

//! Style primitives for weft.
//!
//! This crate provides:
//! - [`Color`] with CSS and class-name formatting
//! - [`Attr`] and [`Style`], the values UI attributes are made of
//! - [`Flag`] categories and [`gather`] to pick one winner per category
//! - [`StyleSheet`] for emitting the CSS rules those attributes need

pub mod classes;
pub mod color;
pub mod flag;
pub mod gather;
pub mod sheet;
pub mod style;

pub use color::{Color, ColorParseError};
pub use flag::Flag;
pub use gather::{Gathered, gather};
pub use sheet::{Rule, SheetOptions, StyleSheet, static_rules};
pub use style::{Attr, AttrMarker, AttrValue, Attribute, Decoration, Decorative, Regular, Style};
