// --- File: crates/services/payflow_onboard/src/main.rs ---
use payflow_common::{
    config_error, init_with_level, log_result, parse_level, validation_error, with_scoped_logging,
};
use payflow_common::{Context, PayflowError};
use payflow_config::load_config;
use payflow_finix::FinixClient;
use payflow_merchant::{ClientHandle, FieldBag, MerchantCharge, OnboardingMerchant};
use serde_json::Value;
use std::env;
use tracing::{info, Level};

static FINIX: ClientHandle<FinixClient> = ClientHandle::new();

const USAGE: &str = "usage: payflow-onboard <onboard|charge> <input.json>";

enum Mode {
    Onboard,
    Charge,
}

fn parse_args() -> Result<(Mode, String), PayflowError> {
    let mut args = env::args().skip(1);
    let mode = match args.next().as_deref() {
        Some("onboard") => Mode::Onboard,
        Some("charge") => Mode::Charge,
        _ => return Err(validation_error(USAGE)),
    };
    let path = args.next().ok_or_else(|| validation_error(USAGE))?;
    Ok((mode, path))
}

fn read_input(path: &str) -> Result<FieldBag, PayflowError> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path))?;
    match serde_json::from_str::<Value>(&contents)? {
        Value::Object(data) => Ok(data),
        _ => Err(validation_error(format!("{} must contain a JSON object", path))),
    }
}

#[tokio::main]
async fn main() -> Result<(), PayflowError> {
    // Config loading logs before the configured level is known.
    let config = with_scoped_logging(Level::INFO, load_config).context("Failed to load config")?;
    init_with_level(parse_level(config.logging.level.as_deref()));

    let (mode, path) = parse_args()?;
    let mut data = read_input(&path)?;

    let finix_config = config
        .finix
        .as_ref()
        .ok_or_else(|| config_error("missing [finix] section"))?;
    FINIX.initialize(FinixClient::from_config(finix_config)?)?;
    info!("Finix client ready at {}", FINIX.get()?.base_url());

    let output = match mode {
        Mode::Onboard => {
            data.entry("processor")
                .or_insert_with(|| Value::from(config.onboarding.processor()));
            let mut merchant = OnboardingMerchant::from_handle(&FINIX, &data)?;
            let result = log_result(
                merchant.fully_onboard_merchant().await,
                "Merchant onboarded",
                "Onboarding failed",
            )?;
            serde_json::to_string_pretty(&result)?
        }
        Mode::Charge => {
            let mut charge = MerchantCharge::from_handle(&FINIX, &data)?;
            let receipt = log_result(
                charge.fully_create_charge(&data).await,
                "Charge completed",
                "Charge failed",
            )?;
            serde_json::to_string_pretty(&receipt)?
        }
    };

    println!("{}", output);
    Ok(())
}
