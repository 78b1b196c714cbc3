//! Load category tagging

use serde::{Deserialize, Serialize};

/// Classification carried through by every load, used only for diagram filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Dead,
    Live,
    Wind,
    Snow,
    Seismic,
}
