use anyhow::Result;
use bank_teller::bin_utils::Service;
use bank_teller::directory::Directory;
use rust_decimal::Decimal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// The demo user is fixed at build time.
const SEED_USERNAME: &str = "user1";
const SEED_PASSWORD: &str = "password1";
const SEED_ACCOUNT_NUMBER: &str = "1234";
const SEED_HOLDER_NAME: &str = "Brian";
const SEED_LOAN_LIMIT: u32 = 1000;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_teller=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut directory = Directory::default();
    directory.create_user(
        SEED_USERNAME,
        SEED_PASSWORD,
        SEED_ACCOUNT_NUMBER,
        SEED_HOLDER_NAME,
        Decimal::from(SEED_LOAN_LIMIT),
    );

    let stdin = std::io::stdin();
    let service = Service {
        input: stdin.lock(),
        output: &mut std::io::stdout(),
        directory,
    };
    service.run()
}
