use ipv4_subnet_calc::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = ipv4_subnet_calc::init_logging(&config) {
        eprintln!("{e}");
    }
    log::info!("#Start main()");

    ipv4_subnet_calc::run(&config)
}
