use serde::Deserialize;

use crate::lib::fs::WalkOptions;

/// Directory walking settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSection {
    pub follow_links: bool,
}

impl WalkSection {
    pub fn options(&self) -> WalkOptions {
        WalkOptions {
            follow_links: self.follow_links,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawWalkSection {
    pub follow_links: Option<bool>,
}

/// The walk section has nothing to validate; absent keys take defaults.
pub fn parse_walk_section(raw: Option<RawWalkSection>) -> WalkSection {
    let walk_raw = raw.unwrap_or_default();
    WalkSection {
        follow_links: walk_raw.follow_links.unwrap_or(false),
    }
}
