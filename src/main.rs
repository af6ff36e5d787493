use std::process::ExitCode;

use cubicasa_fetch::logging::init_logging;
use cubicasa_fetch::{FetchConfig, Fetcher};

fn main() -> ExitCode {
    init_logging();

    let result = Fetcher::new(FetchConfig::default()).and_then(|fetcher| fetcher.run());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("error fetching dataset: {}", e.report());
            ExitCode::FAILURE
        }
    }
}
