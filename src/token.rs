//! CEP-18 compatible fungible token with a fixed supply
//! The whole supply is minted to the deployer at init; there is no mint or burn afterwards.
use odra::prelude::*;
use odra::casper_types::account::AccountHash;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use crate::errors::TokenError;

/// The all-zero account, used as "no address"
pub fn null_address() -> Address {
    Address::Account(AccountHash::new([0u8; 32]))
}

/// Fixed-supply token module implementing CEP-18
#[odra::module]
pub struct Token {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply, set once at init
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl Token {
    /// Initialize the token and mint the whole supply to the deployer
    pub fn init(&mut self, name: String, symbol: String, decimals: u8, initial_supply: U256) {
        let creator = self.env().caller();
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(initial_supply);
        self.balances.set(&creator, initial_supply);

        self.env().emit_event(Transfer {
            from: null_address(),
            to: creator,
            value: initial_supply,
        });
    }

    /// Get the token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get the token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get the token decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get the total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get the balance of an address
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    /// Get the allowance for a spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend tokens. Overwrites any previous allowance.
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        if spender == null_address() {
            self.env().revert(TokenError::InvalidAddress);
        }
        if self.balance_of(caller) < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }
        self.allowances.set(&(caller, spender), amount);

        self.env().emit_event(Approval {
            owner: caller,
            spender,
            value: amount,
        });
        true
    }

    /// Transfer tokens from one address to another (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        if self.balance_of(from) < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }
        let current_allowance = self.allowance(from, caller);
        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }

        self.allowances.set(&(from, caller), current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Internal transfer function
    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        if to == null_address() {
            self.env().revert(TokenError::InvalidAddress);
        }
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from,
            to,
            value: amount,
        });
    }
}

/// External token interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    /// Get allowance
    fn allowance(&self, owner: Address, spender: Address) -> U256;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use odra::host::{Deployer, HostEnv};

    /// `n` whole tokens with 18 decimals
    pub fn tokens(n: u64) -> U256 {
        U256::from(n) * U256::exp10(18)
    }

    pub fn deploy_token(env: &HostEnv) -> TokenHostRef {
        let init_args = TokenInitArgs {
            name: String::from("My Token"),
            symbol: String::from("MTK"),
            decimals: 18,
            initial_supply: tokens(1_000_000),
        };
        Token::deploy(env, init_args)
    }

    fn setup() -> (HostEnv, TokenHostRef) {
        let env = odra_test::env();
        env.set_caller(env.get_account(0));
        let token = deploy_token(&env);
        (env, token)
    }

    #[test]
    fn test_init() {
        let (env, token) = setup();
        assert_eq!(token.name(), "My Token");
        assert_eq!(token.symbol(), "MTK");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.total_supply(), tokens(1_000_000));
        assert_eq!(token.balance_of(env.get_account(0)), tokens(1_000_000));
    }

    #[test]
    fn test_transfer() {
        let (env, mut token) = setup();
        let from = env.get_account(0);
        let to = env.get_account(1);

        token.transfer(to, tokens(100));

        assert_eq!(token.balance_of(from), tokens(999_900));
        assert_eq!(token.balance_of(to), tokens(100));
        assert_eq!(token.total_supply(), tokens(1_000_000));
        assert!(env.emitted_event(
            &token,
            Transfer {
                from,
                to,
                value: tokens(100),
            }
        ));
    }

    #[test]
    fn test_transfer_rejects_insufficient_balance() {
        let (env, mut token) = setup();
        let from = env.get_account(0);
        let to = env.get_account(1);

        assert_eq!(
            token.try_transfer(to, tokens(10_000_000)),
            Err(TokenError::InsufficientBalance.into())
        );

        env.set_caller(to);
        assert_eq!(
            token.try_transfer(from, tokens(100)),
            Err(TokenError::InsufficientBalance.into())
        );
        assert_eq!(token.balance_of(from), tokens(1_000_000));
    }

    #[test]
    fn test_transfer_rejects_null_address() {
        let (_, mut token) = setup();
        assert_eq!(
            token.try_transfer(null_address(), tokens(100)),
            Err(TokenError::InvalidAddress.into())
        );
    }

    #[test]
    fn test_approve() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let spender = env.get_account(2);

        token.approve(spender, tokens(100));
        assert_eq!(token.allowance(owner, spender), tokens(100));
        assert!(env.emitted_event(
            &token,
            Approval {
                owner,
                spender,
                value: tokens(100),
            }
        ));

        // A second approval replaces the first one
        token.approve(spender, tokens(40));
        assert_eq!(token.allowance(owner, spender), tokens(40));
    }

    #[test]
    fn test_approve_rejects_invalid_requests() {
        let (env, mut token) = setup();
        let spender = env.get_account(2);

        assert_eq!(
            token.try_approve(spender, tokens(10_000_000)),
            Err(TokenError::InsufficientBalance.into())
        );
        assert_eq!(
            token.try_approve(null_address(), tokens(100)),
            Err(TokenError::InvalidAddress.into())
        );
    }

    #[test]
    fn test_transfer_from_resets_allowance() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let to = env.get_account(1);
        let spender = env.get_account(2);

        token.approve(spender, tokens(100));
        env.set_caller(spender);
        token.transfer_from(owner, to, tokens(100));

        assert_eq!(token.balance_of(owner), tokens(999_900));
        assert_eq!(token.balance_of(to), tokens(100));
        assert_eq!(token.total_supply(), tokens(1_000_000));
        assert_eq!(token.allowance(owner, spender), U256::zero());
        assert!(env.emitted_event(
            &token,
            Transfer {
                from: owner,
                to,
                value: tokens(100),
            }
        ));
    }

    #[test]
    fn test_partial_transfer_from_keeps_remaining_allowance() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let to = env.get_account(1);
        let spender = env.get_account(2);

        token.approve(spender, tokens(100));
        env.set_caller(spender);
        token.transfer_from(owner, to, tokens(50));

        assert_eq!(token.allowance(owner, spender), tokens(50));
        assert_eq!(token.balance_of(to), tokens(50));
    }

    #[test]
    fn test_transfer_from_rejects_invalid_requests() {
        let (env, mut token) = setup();
        let owner = env.get_account(0);
        let to = env.get_account(1);
        let spender = env.get_account(2);

        token.approve(spender, tokens(100));
        env.set_caller(spender);

        assert_eq!(
            token.try_transfer_from(owner, to, tokens(101)),
            Err(TokenError::InsufficientAllowance.into())
        );
        assert_eq!(
            token.try_transfer_from(owner, to, tokens(10_000_000)),
            Err(TokenError::InsufficientBalance.into())
        );
        assert_eq!(
            token.try_transfer_from(owner, null_address(), tokens(10)),
            Err(TokenError::InvalidAddress.into())
        );
        assert_eq!(token.allowance(owner, spender), tokens(100));
        assert_eq!(token.balance_of(owner), tokens(1_000_000));
    }
}
