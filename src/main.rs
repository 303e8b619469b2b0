//! rGymDesk main entrypoint.

use rgymdesk::run;
use rgymdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
