use students::commands::Cli;
use students::libs::messages::Message;
use students::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv::dotenv();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::ActionFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
