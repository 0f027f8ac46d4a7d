use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Searchable, paginated employee roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the roster data (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortColumn {
    Name,
    Email,
    Role,
    Department,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an employee
    #[command(alias = "a")]
    Add {
        name: String,
        email: String,
        role: String,
        department: String,
    },

    /// Edit an employee's fields (all four are replaced)
    #[command(alias = "e")]
    Edit {
        /// Id of the employee
        id: String,
        name: String,
        email: String,
        role: String,
        department: String,
    },

    /// Delete one or more employees by id
    #[command(alias = "rm")]
    Delete {
        /// Ids of the employees
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List employees
    #[command(alias = "ls")]
    List {
        /// Substring filter across name, email, role and department
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Column to sort by
        #[arg(short, long)]
        sort: Option<SortColumn>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Page size
        #[arg(long, default_value_t = 10, value_parser = parse_page_size)]
        per_page: usize,
    },

    /// Import employees from a CSV file (Name,Email,Role,Department)
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Export employees to employees_<date>.csv
    Export {
        /// Only export employees matching this filter
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Directory to write the file into (defaults to the current dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show roster statistics
    Stats {
        /// Only count employees matching this filter
        #[arg(short, long, default_value = "")]
        filter: String,
    },

    /// Sign in (no password check; identity is advisory)
    Login {
        email: String,

        /// Sign in with the admin role
        #[arg(long)]
        admin: bool,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("invalid number: {}", s))?;
    if roster::model::PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "page size must be one of {:?}",
            roster::model::PAGE_SIZES
        ))
    }
}
