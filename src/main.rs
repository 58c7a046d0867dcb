//! Build-time chain data compiler.
//! Reads per-chain JSON descriptors from $JSON_dir, sorts them by chainId and
//! writes chainId-const.ts into $target_dirPath.
//! Run: JSON_dir=... target_dirPath=... cargo run --bin make_chain_ids

use std::process;

use chaindata::config::Config;

fn main() {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    match chaindata::compile(&config) {
        Ok(path) => println!("File successfully saved to {}.", path.display()),
        Err(err) => {
            eprintln!("error saving chain data: {err}");
            process::exit(1);
        }
    }
}
