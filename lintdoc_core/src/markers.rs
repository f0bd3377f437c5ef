//! Marker comments delimiting the auto-generated regions of a markdown
//! document. Content strictly between a begin/end pair is owned by the
//! generator; content outside is never touched.

pub const BEGIN_RULE_LIST_MARKER: &str = "<!-- begin auto-generated rules list -->";
pub const END_RULE_LIST_MARKER: &str = "<!-- end auto-generated rules list -->";

pub const END_RULE_HEADER_MARKER: &str = "<!-- end auto-generated rule header -->";

pub const BEGIN_CONFIG_LIST_MARKER: &str = "<!-- begin auto-generated configs list -->";
pub const END_CONFIG_LIST_MARKER: &str = "<!-- end auto-generated configs list -->";

pub const BEGIN_RULE_OPTIONS_LIST_MARKER: &str = "<!-- begin auto-generated rule options list -->";
pub const END_RULE_OPTIONS_LIST_MARKER: &str = "<!-- end auto-generated rule options list -->";
