//! Shopper timeline entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jiniso_core::{EventId, ProductId, TimelineEventKind};

/// One recorded shopper interaction with a product.
///
/// The timeline is kept newest-first and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EventId,
    pub at: DateTime<Utc>,
    pub kind: TimelineEventKind,
    pub product_id: ProductId,
    /// Name captured when the event was recorded.
    pub product_name: String,
}
