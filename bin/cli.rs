//! CLI tool for deploying and interacting with the token and exchange contracts.

use odra::casper_types::{U256, U512};
use odra::host::{HostEnv, HostRef};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};
use token_exchange::exchange::exchange::{Exchange, ExchangeInitArgs};
use token_exchange::token::{Token, TokenInitArgs};

/// Fee charged on fills, in percent
const FEE_PERCENT: u64 = 10;

/// Deploys the token with its whole supply minted to the deployer.
pub struct TokenDeployScript;

impl DeployScript for TokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let _token = Token::load_or_deploy(
            &env,
            TokenInitArgs {
                name: String::from("My Token"),
                symbol: String::from("MTK"),
                decimals: 18,
                initial_supply: U256::from(1_000_000u64) * U256::exp10(18),
            },
            container,
            300_000_000_000 // Gas limit for token deployment
        )?;

        Ok(())
    }
}

/// Deploys the exchange, collecting fees to the deployer account.
pub struct ExchangeDeployScript;

impl DeployScript for ExchangeDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let fee_account = env.caller();
        let _exchange = Exchange::load_or_deploy(
            &env,
            ExchangeInitArgs {
                fee_account,
                fee_rate: U256::from(FEE_PERCENT),
            },
            container,
            500_000_000_000 // Gas limit for exchange deployment
        )?;

        Ok(())
    }
}

/// Deploys the token and the exchange.
pub struct FullDeployScript;

impl DeployScript for FullDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        TokenDeployScript.deploy(env, container)?;
        ExchangeDeployScript.deploy(env, container)?;
        Ok(())
    }
}

/// Scenario to deposit CSPR into the exchange.
pub struct DepositEtherScenario;

impl Scenario for DepositEtherScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of CSPR to deposit, in motes",
            NamedCLType::U512,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let exchange = container.contract_ref::<Exchange>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(50_000_000_000);
        exchange.with_tokens(amount).try_deposit_ether()?;

        println!("Deposited {} motes", amount);
        Ok(())
    }
}

impl ScenarioMetadata for DepositEtherScenario {
    const NAME: &'static str = "deposit-ether";
    const DESCRIPTION: &'static str = "Deposits CSPR into the caller's exchange balance";
}

/// Scenario to approve and deposit the deployed token into the exchange.
pub struct DepositTokenScenario;

impl Scenario for DepositTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of tokens to deposit",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut token = container.contract_ref::<Token>(env)?;
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(50_000_000_000);
        token.try_approve(exchange.address().clone(), amount)?;
        env.set_gas(50_000_000_000);
        exchange.try_deposit_token(token.address().clone(), amount)?;

        println!("Deposited {} tokens", amount);
        Ok(())
    }
}

impl ScenarioMetadata for DepositTokenScenario {
    const NAME: &'static str = "deposit-token";
    const DESCRIPTION: &'static str = "Approves and deposits tokens into the exchange";
}

/// Scenario to place an order.
pub struct MakeOrderScenario;

impl Scenario for MakeOrderScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("token_get", "Asset wanted", NamedCLType::Key),
            CommandArg::new("amount_get", "Amount wanted", NamedCLType::U256),
            CommandArg::new("token_give", "Asset offered", NamedCLType::Key),
            CommandArg::new("amount_give", "Amount offered", NamedCLType::U256),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let token_get = args.get_single::<Address>("token_get")?;
        let amount_get = args.get_single::<U256>("amount_get")?;
        let token_give = args.get_single::<Address>("token_give")?;
        let amount_give = args.get_single::<U256>("amount_give")?;

        env.set_gas(50_000_000_000);
        let id = exchange.try_make_order(token_get, amount_get, token_give, amount_give)?;

        println!("Order {} placed", id);
        Ok(())
    }
}

impl ScenarioMetadata for MakeOrderScenario {
    const NAME: &'static str = "make-order";
    const DESCRIPTION: &'static str = "Places an order on the exchange";
}

/// Scenario to fill an order.
pub struct FillOrderScenario;

impl Scenario for FillOrderScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new("id", "Order id", NamedCLType::U64)]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let id = args.get_single::<u64>("id")?;

        env.set_gas(50_000_000_000);
        exchange.try_fill_order(id)?;

        println!("Order {} filled", id);
        Ok(())
    }
}

impl ScenarioMetadata for FillOrderScenario {
    const NAME: &'static str = "fill-order";
    const DESCRIPTION: &'static str = "Fills an open order as the caller";
}

/// Scenario to cancel an order.
pub struct CancelOrderScenario;

impl Scenario for CancelOrderScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new("id", "Order id", NamedCLType::U64)]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let id = args.get_single::<u64>("id")?;

        env.set_gas(50_000_000_000);
        exchange.try_cancel_order(id)?;

        println!("Order {} cancelled", id);
        Ok(())
    }
}

impl ScenarioMetadata for CancelOrderScenario {
    const NAME: &'static str = "cancel-order";
    const DESCRIPTION: &'static str = "Cancels one of the caller's open orders";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the token and exchange contracts")
        // Deploy scripts
        .deploy(TokenDeployScript)
        .deploy(ExchangeDeployScript)
        .deploy(FullDeployScript)
        // Contract references
        .contract::<Token>()
        .contract::<Exchange>()
        // Scenarios
        .scenario(DepositEtherScenario)
        .scenario(DepositTokenScenario)
        .scenario(MakeOrderScenario)
        .scenario(FillOrderScenario)
        .scenario(CancelOrderScenario)
        .build()
        .run();
}
