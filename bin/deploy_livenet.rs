//! Deploy the GrantHub contract to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   GRANTHUB_INITIAL_PAUSED=true   pause the contract right after deployment

use odra::host::{Deployer, NoArgs};
use odra::prelude::Addressable;

use granthub_contracts::grant_hub::GrantHub;

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== GrantHub Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let initial_paused = std::env::var("GRANTHUB_INITIAL_PAUSED")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);

    // Deployer becomes the contract owner
    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    println!("Deploying GrantHub...");
    let mut grant_hub = GrantHub::deploy(&env, NoArgs);
    println!("GrantHub deployed at: {:?}", grant_hub.address().clone());
    println!();

    if initial_paused {
        println!("Pausing GrantHub...");
        match grant_hub.try_pause_contract() {
            Ok(_) => println!("Done."),
            Err(err) => println!("Pause failed: {:?}", err),
        }
        println!();
    }

    let state = grant_hub.get_contract_state();

    println!("=== Deployment Complete ===");
    println!();
    println!("Contract State:");
    println!("  Owner:              {:?}", state.owner);
    println!("  Paused:             {}", state.paused);
    println!("  Emergency Mode:     {}", state.emergency_mode);
    println!("  Total Supply:       {}", state.total_supply);
    println!("  Treasury Balance:   {}", state.treasury_balance);
    println!("  Oracle Count:       {}", state.oracle_count);
}
