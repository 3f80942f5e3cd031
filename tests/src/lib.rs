//! GrantHub Integration Tests
//!
//! End-to-end scenarios against a deployed `GrantHub` contract.

#[cfg(test)]
mod tests {
    use granthub_contracts::errors::GrantHubError;
    use granthub_contracts::grant_hub::{GrantHub, GrantHubHostRef};
    use granthub_contracts::types::ContractState;
    use odra::casper_types::U256;
    use odra::host::{Deployer, HostEnv, NoArgs};
    use odra::prelude::*;
    use pretty_assertions::assert_eq;

    fn deploy() -> (HostEnv, GrantHubHostRef, Address, Address) {
        let env = odra_test::env();
        let deployer = env.get_account(0);
        let wallet_1 = env.get_account(1);
        let contract = GrantHub::deploy(&env, NoArgs);
        (env, contract, deployer, wallet_1)
    }

    #[test]
    fn test_initial_contract_state() {
        let (_env, contract, deployer, _) = deploy();

        assert_eq!(
            contract.get_contract_state(),
            ContractState {
                owner: Some(deployer),
                paused: false,
                emergency_mode: false,
                total_supply: U256::zero(),
                treasury_balance: U256::zero(),
                oracle_count: 0,
            }
        );
    }

    #[test]
    fn test_read_only_queries_need_no_owner() {
        let (env, contract, _, wallet_1) = deploy();
        env.set_caller(wallet_1);

        assert_eq!(contract.get_total_supply(), U256::zero());
        assert_eq!(contract.get_treasury_balance(), U256::zero());
        assert!(!contract.is_contract_paused());
        assert!(!contract.is_emergency_mode());
        assert_eq!(contract.get_oracle_count(), 0);
    }

    #[test]
    fn test_access_control() {
        let (env, mut contract, deployer, wallet_1) = deploy();

        env.set_caller(wallet_1);
        assert_eq!(
            contract.try_pause_contract(),
            Err(GrantHubError::Unauthorized.into())
        );
        assert_eq!(
            contract.try_enable_emergency_mode(),
            Err(GrantHubError::Unauthorized.into())
        );
        assert!(!contract.is_contract_paused());
        assert!(!contract.is_emergency_mode());

        env.set_caller(deployer);
        assert_eq!(contract.try_pause_contract(), Ok(true));
        assert_eq!(contract.try_enable_emergency_mode(), Ok(true));
    }

    #[test]
    fn test_every_non_owner_is_rejected() {
        let (env, mut contract, _, _) = deploy();

        for idx in 1..5 {
            env.set_caller(env.get_account(idx));
            let unauthorized: Result<bool, OdraError> =
                Err(GrantHubError::Unauthorized.into());
            assert_eq!(contract.try_pause_contract(), unauthorized);
            assert_eq!(contract.try_unpause_contract(), unauthorized);
            assert_eq!(contract.try_enable_emergency_mode(), unauthorized);
            assert_eq!(contract.try_disable_emergency_mode(), unauthorized);
        }
        assert!(!contract.is_contract_paused());
        assert!(!contract.is_emergency_mode());
    }

    #[test]
    fn test_pause_unpause_round_trip() {
        let (_env, mut contract, _, _) = deploy();

        for _ in 0..3 {
            assert_eq!(contract.try_pause_contract(), Ok(true));
            assert!(contract.is_contract_paused());

            assert_eq!(
                contract.try_pause_contract(),
                Err(GrantHubError::InvalidInput.into())
            );
            assert!(contract.is_contract_paused());

            assert_eq!(contract.try_unpause_contract(), Ok(true));
            assert!(!contract.is_contract_paused());
        }
    }

    #[test]
    fn test_emergency_mode_round_trip() {
        let (_env, mut contract, _, _) = deploy();

        assert_eq!(contract.try_enable_emergency_mode(), Ok(true));
        assert!(contract.is_emergency_mode());

        assert_eq!(contract.try_disable_emergency_mode(), Ok(true));
        assert!(!contract.is_emergency_mode());
    }

    #[test]
    fn test_counters_unaffected_by_admin_actions() {
        let (_env, mut contract, _, _) = deploy();

        contract.pause_contract();
        contract.enable_emergency_mode();
        contract.unpause_contract();
        contract.disable_emergency_mode();

        assert_eq!(contract.get_total_supply(), U256::zero());
        assert_eq!(contract.get_treasury_balance(), U256::zero());
        assert_eq!(contract.get_oracle_count(), 0);
    }

    #[test]
    fn test_separate_deployments_have_separate_state() {
        let env = odra_test::env();
        let mut first = GrantHub::deploy(&env, NoArgs);

        env.set_caller(env.get_account(2));
        let second = GrantHub::deploy(&env, NoArgs);

        env.set_caller(env.get_account(0));
        first.pause_contract();

        assert!(first.is_contract_paused());
        assert!(!second.is_contract_paused());
        assert_eq!(second.get_owner(), Some(env.get_account(2)));
    }
}
