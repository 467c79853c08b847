use crate::export::ReportFormat;
use crate::models::role::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lunchlog
/// CLI application to track employee lunch records with SQLite
#[derive(Parser)]
#[command(
    name = "lunchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee daily lunch records, approvals, and reminders using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting role for this invocation (employee, lunch-admin, admin)
    #[arg(global = true, long = "role", value_enum, default_value = "employee")]
    pub role: Role,

    /// Act as this employee (overrides the configured operator identity)
    #[arg(global = true, long = "operator")]
    pub operator: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Freeze the clock at a fixed instant (RFC3339 or "YYYY-MM-DD HH:MM")
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "set-operator", value_name = "NAME", help = "Link this CLI user to an employee")]
        set_operator: Option<String>,

        #[arg(long = "set-timezone", value_name = "TZ", help = "Set the IANA timezone (e.g. Asia/Kathmandu)")]
        set_timezone: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees (admin)
    Employee {
        #[arg(long = "add", value_name = "NAME", help = "Add an employee")]
        add: Option<String>,

        #[arg(long = "email", value_name = "EMAIL", requires = "add", help = "Contact address for --add")]
        email: Option<String>,

        #[arg(long = "deactivate", value_name = "NAME", help = "Deactivate an employee")]
        deactivate: Option<String>,

        #[arg(long = "list", help = "List employees")]
        list: bool,
    },

    /// Manage lunch types (admin)
    Types {
        #[arg(long = "add", value_name = "NAME", help = "Add a lunch type (e.g. Veg, Non-Veg)")]
        add: Option<String>,

        #[arg(long = "cost", requires = "add", help = "Cost for --add")]
        cost: Option<f64>,

        #[arg(long = "note", requires = "add", help = "Remarks for --add")]
        note: Option<String>,

        #[arg(long = "list", help = "List lunch types")]
        list: bool,
    },

    /// Configure the daily confirmation window (admin)
    Timing {
        #[arg(long = "start", value_name = "HH:MM", help = "Window start time")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "Window end time")]
        end: Option<String>,

        #[arg(long = "note", help = "Remarks")]
        note: Option<String>,

        #[arg(long = "show", help = "Show the configured window")]
        show: bool,
    },

    /// Create a lunch record (defaults to the next working day)
    Add {
        /// Date of the lunch (YYYY-MM-DD); omitted = tomorrow, skipping Saturday
        date: Option<String>,

        #[arg(long = "employee", help = "Target employee (lunch-admin/admin only)")]
        employee: Option<String>,

        #[arg(long = "type", help = "Lunch type override (admin only)")]
        lunch_type: Option<String>,

        #[arg(long = "note", help = "Remarks")]
        note: Option<String>,

        /// Admin fill on behalf of an employee: record is created confirmed
        #[arg(long = "fill", requires = "employee")]
        fill: bool,
    },

    /// Ask the admins to fill the record for you
    Request {
        /// Date of the draft record (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Target employee (lunch-admin/admin only)")]
        employee: Option<String>,
    },

    /// Confirm a lunch record (inside the confirmation window)
    Confirm {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Target employee (lunch-admin/admin only)")]
        employee: Option<String>,
    },

    /// Cancel a lunch record
    Cancel {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Target employee (lunch-admin/admin only)")]
        employee: Option<String>,
    },

    /// Reset a record back to draft (admin)
    Reset {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Target employee")]
        employee: Option<String>,
    },

    /// Edit a lunch record
    Edit {
        /// Date of the record to edit (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Record owner (lunch-admin/admin only)")]
        employee: Option<String>,

        #[arg(long = "new-date", value_name = "DATE", help = "Move the record to another date (admin only)")]
        new_date: Option<String>,

        #[arg(long = "move-to", value_name = "NAME", help = "Move the record to another employee (admin only)")]
        move_to: Option<String>,

        #[arg(long = "type", help = "Change the lunch type")]
        lunch_type: Option<String>,

        #[arg(long = "note", help = "Change the remarks")]
        note: Option<String>,
    },

    /// List lunch records
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (start:end)")]
        period: Option<String>,

        #[arg(long = "employee", help = "Filter by employee (lunch-admin/admin only)")]
        employee: Option<String>,

        #[arg(long = "state", help = "Filter by state (draft, requested, confirmed, cancelled)")]
        state: Option<String>,
    },

    /// Reminder scheduler: run a pass, trigger manually, or configure
    Remind {
        /// One scheduler pass; intended to run from cron every few minutes
        #[arg(long = "tick")]
        tick: bool,

        /// Clear the already-sent guard and dispatch now (admin)
        #[arg(long = "now")]
        now: bool,

        /// Send a single test message to your own employee identity
        #[arg(long = "send-test")]
        send_test: bool,

        #[arg(long = "time", value_name = "HH:MM", help = "Set the daily dispatch time (admin)")]
        time: Option<String>,

        #[arg(long = "activate", help = "Activate the scheduler (admin)")]
        activate: bool,

        #[arg(long = "deactivate", help = "Deactivate the scheduler (admin)")]
        deactivate: bool,

        #[arg(long = "show", help = "Show the scheduler configuration")]
        show: bool,
    },

    /// Import lunch records from a CSV file (admin)
    Import {
        /// CSV file with columns Employee Name, Date, Lunch Type, State, Remarks
        file: Option<String>,

        #[arg(long = "template", value_name = "FILE", help = "Write an XLSX sample template instead")]
        template: Option<String>,
    },

    /// Report over a date range; admin sees confirmed records only
    Report {
        #[arg(long = "from", value_name = "DATE", help = "Range start (YYYY-MM-DD)")]
        from: String,

        #[arg(long = "to", value_name = "DATE", help = "Range end (YYYY-MM-DD)")]
        to: String,

        #[arg(long = "employee", help = "Restrict to one employee")]
        employee: Option<String>,

        #[arg(long = "format", value_enum, default_value = "table")]
        format: ReportFormat,

        #[arg(long = "out", value_name = "FILE", help = "Output file (csv/json/pdf formats)")]
        out: Option<String>,
    },
}
