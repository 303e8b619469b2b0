use clap::{Parser, Subcommand};

/// Command-line interface definition for rGymDesk
#[derive(Parser)]
#[command(
    name = "rgymdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Gym front desk CLI: weekly session schedule, check-in/out and live activity feed",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show or change the weekly session schedule
    Schedule {
        #[arg(long = "list", help = "Print the weekly schedule table")]
        list: bool,

        #[arg(long = "set", value_name = "DAY", help = "Create or update the entry for DAY")]
        set: Option<String>,

        #[arg(long = "clear", value_name = "DAY", help = "Remove the entry for DAY")]
        clear: Option<String>,

        /// Male student windows, e.g. "06:30 AM - 07:30 AM"
        #[arg(long = "male", requires = "set")]
        male: Option<String>,

        /// Female student windows
        #[arg(long = "female", requires = "set")]
        female: Option<String>,

        /// Teacher/staff windows
        #[arg(long = "staff", requires = "set")]
        staff: Option<String>,
    },

    /// Record a check-in
    Checkin {
        #[arg(long = "user", help = "Attendance id of the member")]
        user: String,

        #[arg(long = "name", help = "Display name for the feed")]
        name: String,

        #[arg(long = "gender")]
        gender: Option<String>,

        #[arg(long = "hall", help = "Hall / zone (default from config)")]
        hall: Option<String>,

        #[arg(long = "at", help = "Instant to record instead of now (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// Record a check-out for the latest open check-in
    Checkout {
        #[arg(long = "user")]
        user: String,

        #[arg(long = "at", help = "Instant to record instead of now (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// List attendance history (one person, or everybody)
    Attendance {
        #[arg(long = "member-id")]
        member_id: Option<String>,

        #[arg(long = "email", help = "Used when --member-id is missing")]
        email: Option<String>,

        #[arg(
            long = "account-id",
            help = "Last resort when neither --member-id nor a student email gives an id"
        )]
        account_id: Option<String>,

        #[arg(long = "at", help = "Reference instant for the monthly count (YYYY-MM-DD HH:MM)")]
        at: Option<String>,
    },

    /// Show the current or next session for a person
    Status {
        #[arg(long = "email")]
        email: String,

        #[arg(long = "gender", help = "male / female (unset counts as male)")]
        gender: Option<String>,

        #[arg(long = "role", help = "student / staff / teacher / admin (default: from email)")]
        role: Option<String>,

        #[arg(long = "at", help = "Evaluate at this instant (YYYY-MM-DD HH:MM)")]
        at: Option<String>,

        #[arg(long = "watch", help = "Refresh periodically")]
        watch: bool,

        #[arg(long = "iterations", requires = "watch", help = "Stop after N refreshes")]
        iterations: Option<u32>,
    },

    /// Show the recent check-in/check-out feed
    Feed {
        #[arg(long = "limit", help = "Maximum number of events (default from config)")]
        limit: Option<usize>,

        #[arg(long = "at", help = "Evaluate at this instant (YYYY-MM-DD HH:MM)")]
        at: Option<String>,

        #[arg(long = "json", help = "Print the feed as JSON")]
        json: bool,

        #[arg(long = "watch", help = "Refresh periodically")]
        watch: bool,

        #[arg(long = "iterations", requires = "watch", help = "Stop after N refreshes")]
        iterations: Option<u32>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
