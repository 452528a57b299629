//! Common types shared across tools

use std::collections::BTreeMap;

/// Attributes of a single tag occurrence, name to value.
///
/// Valueless attributes (`<script defer>`) map to the empty string.
pub type Attributes = BTreeMap<String, String>;

/// Ordered occurrences of one tag kind.
pub type TagList = Vec<Attributes>;
