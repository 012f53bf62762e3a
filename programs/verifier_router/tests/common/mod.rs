#![allow(dead_code)]

use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::solana_program::bpf_loader_upgradeable::{self, UpgradeableLoaderState};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program_error::ProgramError;
use anchor_lang::{AccountDeserialize, AnchorDeserialize, Discriminator};
use base64::Engine;
use solana_program_test::*;
use solana_sdk::{
    account::{Account, AccountSharedData},
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

use verifier_router::interface::verify_instruction;
use verifier_router::{Proof, Selector, VerifierEntry, VerifierRouter};
use verifier_router_sdk::{instructions, RouterAddresses};

pub const IMAGE_ID: [u8; 32] = [0x11; 32];
pub const JOURNAL_DIGEST: [u8; 32] = [0x22; 32];

const LAMPORTS_PER_KEY: u64 = 10_000_000_000;

// ================================
// Verifier Programs
// ================================

// Anchor's entry ties the account slice to the account lifetime
fn router_processor<'info>(
    program_id: &Pubkey,
    accounts: &[AccountInfo<'info>],
    data: &[u8],
) -> ProgramResult {
    let accounts: &'info [AccountInfo<'info>] = unsafe { std::mem::transmute(accounts) };
    verifier_router::entry(program_id, accounts, data)
}

fn bad_verifier_processor<'info>(
    program_id: &Pubkey,
    accounts: &[AccountInfo<'info>],
    data: &[u8],
) -> ProgramResult {
    let accounts: &'info [AccountInfo<'info>] = unsafe { std::mem::transmute(accounts) };
    test_bad_verifier::entry(program_id, accounts, data)
}

/// Sound verifier: accepts only the genuine receipt for
/// `(IMAGE_ID, JOURNAL_DIGEST)`
fn receipt_verifier_processor(
    program_id: &Pubkey,
    _accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let genuine = verify_instruction(*program_id, &genuine_proof(), &IMAGE_ID, &JOURNAL_DIGEST)
        .map_err(ProgramError::from)?;
    if data == genuine.data.as_slice() {
        return Ok(());
    }

    let err = anchor_lang::error::Error::from(test_bad_verifier::VerifierError::VerificationError);
    err.log();
    Err(err.into())
}

pub fn genuine_proof() -> Proof {
    filled_proof(7)
}

pub fn sentinel_proof() -> Proof {
    let sentinel = test_bad_verifier::Proof::sentinel();
    Proof {
        pi_a: sentinel.pi_a,
        pi_b: sentinel.pi_b,
        pi_c: sentinel.pi_c,
    }
}

pub fn filled_proof(fill: u8) -> Proof {
    Proof {
        pi_a: [fill; 64],
        pi_b: [fill; 128],
        pi_c: [fill; 64],
    }
}

fn program_data_account(upgrade_authority: Option<Pubkey>) -> Account {
    let state = UpgradeableLoaderState::ProgramData {
        slot: 0,
        upgrade_authority_address: upgrade_authority,
    };
    Account {
        lamports: 1_000_000_000,
        data: bincode::serialize(&state).unwrap(),
        owner: bpf_loader_upgradeable::ID,
        executable: false,
        rent_epoch: 0,
    }
}

// ================================
// Transaction Outcome
// ================================

pub struct TxOutcome {
    pub result: Result<(), TransactionError>,
    pub logs: Vec<String>,
}

impl TxOutcome {
    pub fn assert_ok(&self) {
        assert!(
            self.result.is_ok(),
            "transaction failed: {:?}\n{}",
            self.result,
            self.logs.join("\n")
        );
    }

    /// Fails unless the transaction aborted with the named Anchor error
    pub fn assert_error(&self, name: &str) {
        assert!(
            self.result.is_err(),
            "expected {name}, transaction succeeded\n{}",
            self.logs.join("\n")
        );
        let needle = format!("Error Code: {name}.");
        assert!(
            self.logs.iter().any(|line| line.contains(&needle)),
            "expected {name}, got {:?}\n{}",
            self.result,
            self.logs.join("\n")
        );
    }

    pub fn assert_failed(&self) {
        assert!(self.result.is_err(), "expected failure\n{}", self.logs.join("\n"));
    }

    /// Anchor events of type `T` emitted by the transaction
    pub fn events<T: AnchorDeserialize + Discriminator>(&self) -> Vec<T> {
        self.logs
            .iter()
            .filter_map(|line| line.strip_prefix("Program data: "))
            .filter_map(|encoded| base64::engine::general_purpose::STANDARD.decode(encoded).ok())
            .filter(|bytes| bytes.starts_with(T::DISCRIMINATOR))
            .filter_map(|bytes| T::deserialize(&mut &bytes[T::DISCRIMINATOR.len()..]).ok())
            .collect()
    }
}

// ================================
// Test Context
// ================================

pub struct TestContext {
    pub context: ProgramTestContext,
    pub addresses: RouterAddresses,
    pub owner: Keypair,
    /// Unsound verifier (test_bad_verifier)
    pub bad_verifier: Pubkey,
    /// Sound verifiers running the receipt processor
    pub receipt_verifier: Pubkey,
    pub other_verifier: Pubkey,
}

impl TestContext {
    /// Router, verifier programs and a funded owner. Every verifier starts with
    /// a deployer-held upgrade authority.
    pub async fn new() -> Self {
        let mut program_test = ProgramTest::new(
            "verifier_router",
            verifier_router::ID,
            processor!(router_processor),
        );
        program_test.add_program(
            "test_bad_verifier",
            test_bad_verifier::ID,
            processor!(bad_verifier_processor),
        );

        let receipt_verifier = Pubkey::new_unique();
        let other_verifier = Pubkey::new_unique();
        for program in [receipt_verifier, other_verifier] {
            program_test.add_program(
                "receipt_verifier",
                program,
                processor!(receipt_verifier_processor),
            );
        }

        for program in [test_bad_verifier::ID, receipt_verifier, other_verifier] {
            program_test.add_account(
                RouterAddresses::program_data(&program),
                program_data_account(Some(Pubkey::new_unique())),
            );
        }

        let owner = Keypair::new();
        program_test.add_account(
            owner.pubkey(),
            Account::new(LAMPORTS_PER_KEY, 0, &anchor_lang::system_program::ID),
        );

        let context = program_test.start_with_context().await;
        Self {
            context,
            addresses: RouterAddresses::new(verifier_router::ID),
            owner,
            bad_verifier: test_bad_verifier::ID,
            receipt_verifier,
            other_verifier,
        }
    }

    /// Initialized router with `program` registered under `selector`
    pub async fn with_registered(selector: Selector, program: impl Fn(&Self) -> Pubkey) -> Self {
        let mut ctx = Self::new().await;
        let owner = ctx.owner();
        let program = program(&ctx);

        ctx.initialize(&owner).await.assert_ok();
        ctx.hand_upgrade_authority_to_router(&program);
        ctx.add_verifier(&owner, selector, program).await.assert_ok();
        ctx
    }

    pub fn owner(&self) -> Keypair {
        self.owner.insecure_clone()
    }

    /// Fresh key holding enough lamports to pay for account creation
    pub async fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        let payer = self.context.payer.insecure_clone();
        let ix = system_instruction::transfer(&payer.pubkey(), &keypair.pubkey(), LAMPORTS_PER_KEY);
        self.send(ix, &[]).await.assert_ok();
        keypair
    }

    // ================================
    // Ledger Access
    // ================================

    pub async fn router(&mut self) -> Option<VerifierRouter> {
        let account = self
            .context
            .banks_client
            .get_account(self.addresses.router)
            .await
            .unwrap()?;
        VerifierRouter::try_deserialize(&mut account.data.as_slice()).ok()
    }

    pub async fn entry(&mut self, selector: &Selector) -> Option<VerifierEntry> {
        let account = self
            .context
            .banks_client
            .get_account(self.addresses.verifier_entry(selector))
            .await
            .unwrap()?;
        VerifierEntry::try_deserialize(&mut account.data.as_slice()).ok()
    }

    pub async fn is_estopped(&mut self, selector: &Selector) -> bool {
        self.entry(selector).await.unwrap().is_estopped()
    }

    pub fn set_upgrade_authority(&mut self, program: &Pubkey, authority: Option<Pubkey>) {
        self.context.set_account(
            &RouterAddresses::program_data(program),
            &AccountSharedData::from(program_data_account(authority)),
        );
    }

    pub fn hand_upgrade_authority_to_router(&mut self, program: &Pubkey) {
        let router = self.addresses.router;
        self.set_upgrade_authority(program, Some(router));
    }

    // ================================
    // Instructions
    // ================================

    /// Sign with the context payer plus `signers` and process
    pub async fn send(&mut self, instruction: Instruction, signers: &[&Keypair]) -> TxOutcome {
        let payer = self.context.payer.insecure_clone();
        let mut keys: Vec<&Keypair> = vec![&payer];
        for signer in signers {
            if signer.pubkey() != payer.pubkey() {
                keys.push(signer);
            }
        }

        // A fresh blockhash keeps repeated identical instructions distinct
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer.pubkey()),
            keys.as_slice(),
            blockhash,
        );

        let processed = self
            .context
            .banks_client
            .process_transaction_with_metadata(transaction)
            .await
            .unwrap();
        TxOutcome {
            result: processed.result,
            logs: processed
                .metadata
                .map(|metadata| metadata.log_messages)
                .unwrap_or_default(),
        }
    }

    pub async fn initialize(&mut self, authority: &Keypair) -> TxOutcome {
        let ix = instructions::initialize(&self.addresses, authority.pubkey());
        self.send(ix, &[authority]).await
    }

    pub async fn transfer_ownership(&mut self, authority: &Keypair, new_owner: Pubkey) -> TxOutcome {
        let ix = instructions::transfer_ownership(&self.addresses, authority.pubkey(), new_owner);
        self.send(ix, &[authority]).await
    }

    pub async fn accept_ownership(&mut self, authority: &Keypair) -> TxOutcome {
        let ix = instructions::accept_ownership(&self.addresses, authority.pubkey());
        self.send(ix, &[authority]).await
    }

    pub async fn cancel_transfer(&mut self, authority: &Keypair) -> TxOutcome {
        let ix = instructions::cancel_transfer(&self.addresses, authority.pubkey());
        self.send(ix, &[authority]).await
    }

    pub async fn add_verifier(
        &mut self,
        authority: &Keypair,
        selector: Selector,
        program: Pubkey,
    ) -> TxOutcome {
        let ix = instructions::add_verifier(&self.addresses, authority.pubkey(), selector, program);
        self.send(ix, &[authority]).await
    }

    pub async fn verify(
        &mut self,
        selector: Selector,
        program: Pubkey,
        proof: Proof,
        image_id: [u8; 32],
        journal_digest: [u8; 32],
    ) -> TxOutcome {
        let ix = instructions::verify(
            &self.addresses,
            selector,
            program,
            proof,
            image_id,
            journal_digest,
        );
        self.send(ix, &[]).await
    }

    pub async fn emergency_stop(
        &mut self,
        authority: &Keypair,
        selector: Selector,
        program: Pubkey,
    ) -> TxOutcome {
        let ix = instructions::emergency_stop(&self.addresses, authority.pubkey(), selector, program);
        self.send(ix, &[authority]).await
    }

    pub async fn emergency_stop_with_proof(
        &mut self,
        caller: &Keypair,
        selector: Selector,
        program: Pubkey,
        proof: Proof,
    ) -> TxOutcome {
        let ix = instructions::emergency_stop_with_proof(
            &self.addresses,
            caller.pubkey(),
            selector,
            program,
            proof,
        );
        self.send(ix, &[caller]).await
    }
}
