multiversx_sc::derive_imports!();

// ============================================================
// Campaign State — lifecycle states
// ============================================================

/// Moves only forward: `Ongoing` → `Failed` | `Succeeded` → `PaidOut`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CampaignState {
    /// Accepting contributions until the deadline.
    Ongoing,
    /// Deadline passed below target. Contributors can withdraw. Terminal.
    Failed,
    /// Deadline passed with target reached. Awaiting payout.
    Succeeded,
    /// Collected funds sent to the beneficiary. Terminal.
    PaidOut,
}

impl CampaignState {
    pub fn from_outcome(succeeded: bool) -> Self {
        if succeeded {
            CampaignState::Succeeded
        } else {
            CampaignState::Failed
        }
    }

    pub fn is_resolved(&self) -> bool {
        *self != CampaignState::Ongoing
    }
}
