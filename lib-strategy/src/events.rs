//! Strategy Event Records

use lib_types::Amount;
use serde::{Deserialize, Serialize};

/// One recorded strategy movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyEvent {
    Invested {
        amount: Amount,
    },
    Divested {
        requested: Amount,
        returned: Amount,
    },
}
