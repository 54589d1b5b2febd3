//! ListMemberLevelsHandler - Query handler returning the configured tier table.

use std::sync::Arc;

use crate::domain::membership::{Tier, TierTable};

/// Query for all membership levels.
#[derive(Debug, Clone, Default)]
pub struct ListMemberLevelsQuery;

/// Tiers in ascending threshold order.
pub type ListMemberLevelsResult = Vec<Tier>;

pub struct ListMemberLevelsHandler {
    tiers: Arc<TierTable>,
}

impl ListMemberLevelsHandler {
    pub fn new(tiers: Arc<TierTable>) -> Self {
        Self { tiers }
    }

    pub fn handle(&self, _query: ListMemberLevelsQuery) -> ListMemberLevelsResult {
        self.tiers.tiers().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lists_standard_tiers_in_order() {
        let handler = ListMemberLevelsHandler::new(Arc::new(TierTable::standard()));
        let tiers = handler.handle(ListMemberLevelsQuery);

        let codes: Vec<&str> = tiers.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, ["bronze", "silver", "gold", "platinum", "diamond"]);
        assert_eq!(tiers[1].min_spend, dec!(100));
        assert_eq!(tiers[1].max_spend, Some(dec!(500)));
        assert_eq!(tiers[4].max_spend, None);
    }
}
