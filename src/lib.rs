#![no_std]

multiversx_sc::imports!();

pub mod crowdfunding_proxy;
pub mod types;

use types::CampaignState;

// ============================================================
// Constants
// ============================================================

/// Campaign duration is given in minutes at deploy time.
const DURATION_UNIT_SECONDS: u64 = 60;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Crowdfunding {
    // ========================================================
    // Init
    // ========================================================

    #[init]
    fn init(
        &self,
        name: ManagedBuffer,
        target_amount: BigUint,
        duration_in_minutes: u64,
        beneficiary: ManagedAddress,
    ) {
        let now = self.blockchain().get_block_timestamp();
        let deadline = match duration_in_minutes
            .checked_mul(DURATION_UNIT_SECONDS)
            .and_then(|seconds| now.checked_add(seconds))
        {
            Some(deadline) => deadline,
            None => sc_panic!("Campaign duration overflows"),
        };

        self.name().set(&name);
        self.target_amount().set(&target_amount);
        self.funding_deadline().set(deadline);
        self.beneficiary().set(&beneficiary);
        self.state().set(CampaignState::Ongoing);
        self.total_collected().set(BigUint::zero());
    }

    // ========================================================
    // ENDPOINT: contribute
    // Pledges the attached EGLD. A rejected call reverts and
    // the payment goes back to the sender.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            !self.state().get().is_resolved(),
            "Campaign is not ongoing"
        );
        require!(
            !self.is_deadline_passed(),
            "Cannot contribute after deadline"
        );
        require!(payment_amount > 0u64, "Contribution must be positive");

        self.amounts(&caller).update(|pledged| *pledged += &payment_amount);
        self.total_collected()
            .update(|total| *total += &payment_amount);

        self.contribution_event(&caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: finishCrowdFunding
    // Anyone can call once the deadline is reached.
    // Transitions Ongoing → Succeeded or Failed, exactly once.
    // ========================================================

    #[endpoint(finishCrowdFunding)]
    fn finish_crowd_funding(&self) -> MultiValue2<BigUint, bool> {
        require!(
            !self.state().get().is_resolved(),
            "Campaign is not ongoing"
        );
        require!(
            self.is_deadline_passed(),
            "Cannot finish before deadline"
        );

        let total_collected = self.total_collected().get();
        let succeeded = total_collected >= self.target_amount().get();
        self.state().set(CampaignState::from_outcome(succeeded));

        self.campaign_finished_event(&total_collected, succeeded);

        (total_collected, succeeded).into()
    }

    // ========================================================
    // ENDPOINT: collect
    // Pays the whole pot to the beneficiary. Any caller may
    // trigger it; the recipient is always the beneficiary.
    // ========================================================

    #[endpoint(collect)]
    fn collect(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.state().get() == CampaignState::Succeeded,
            "Campaign has not succeeded"
        );

        let beneficiary = self.beneficiary().get();
        let payout = self.total_collected().get();

        self.total_collected().set(BigUint::zero());
        self.state().set(CampaignState::PaidOut);

        if payout > 0u64 {
            self.send().direct_egld(&beneficiary, &payout);
        }
        self.payout_event(&caller, &beneficiary, &payout);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Refunds the caller's full pledge after a failed campaign.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.state().get() == CampaignState::Failed,
            "Campaign has not failed"
        );

        let refund = self.amounts(&caller).get();
        require!(refund > 0u64, "Nothing to withdraw");

        self.amounts(&caller).clear();
        self.total_collected().update(|total| *total -= &refund);

        self.send().direct_egld(&caller, &refund);
        self.refund_event(&caller, &refund);
    }

    fn is_deadline_passed(&self) -> bool {
        self.blockchain().get_block_timestamp() >= self.funding_deadline().get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getCampaignInfo)]
    fn get_campaign_info(
        &self,
    ) -> MultiValue6<ManagedBuffer, CampaignState, u64, ManagedAddress, BigUint, BigUint> {
        (
            self.name().get(),
            self.state().get(),
            self.funding_deadline().get(),
            self.beneficiary().get(),
            self.target_amount().get(),
            self.total_collected().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("campaignFinished")]
    fn campaign_finished_event(&self, #[indexed] total_collected: &BigUint, succeeded: bool);

    #[event("contribution")]
    fn contribution_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    #[event("payout")]
    fn payout_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("refund")]
    fn refund_event(&self, #[indexed] contributor: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration, fixed at deploy ──

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(targetAmount)]
    #[storage_mapper("targetAmount")]
    fn target_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(fundingDeadline)]
    #[storage_mapper("fundingDeadline")]
    fn funding_deadline(&self) -> SingleValueMapper<u64>;

    #[view(beneficiary)]
    #[storage_mapper("beneficiary")]
    fn beneficiary(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Campaign state ──

    #[view(state)]
    #[storage_mapper("state")]
    fn state(&self) -> SingleValueMapper<CampaignState>;

    /// Equals the sum of `amounts` while Ongoing or Failed; zero once PaidOut.
    #[view(totalCollected)]
    #[storage_mapper("totalCollected")]
    fn total_collected(&self) -> SingleValueMapper<BigUint>;

    /// Pledge per contributor. Kept as a record after PaidOut.
    #[view(amounts)]
    #[storage_mapper("amounts")]
    fn amounts(&self, contributor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
