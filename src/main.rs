use devlog::commands::Cli;
use devlog::libs::messages::macros::is_debug_mode;
use devlog::msg_error;

fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
