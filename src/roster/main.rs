use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use roster::api::{CmdMessage, MessageLevel, PageInfo, RosterApi, StatsSummary};
use roster::error::{Result, RosterError};
use roster::model::{Employee, EmployeeFields, PageRequest, SortDirection, SortKey, SortSpec};
use roster::session::UserRole;
use roster::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, SortColumn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RosterApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            name,
            email,
            role,
            department,
        } => handle_add(&mut ctx, EmployeeFields::new(name, email, role, department)),
        Commands::Edit {
            id,
            name,
            email,
            role,
            department,
        } => handle_edit(
            &mut ctx,
            id,
            EmployeeFields::new(name, email, role, department),
        ),
        Commands::Delete { ids } => handle_delete(&mut ctx, ids),
        Commands::List {
            filter,
            sort,
            desc,
            page,
            per_page,
        } => handle_list(&ctx, filter, sort, desc, page, per_page),
        Commands::Import { file } => handle_import(&mut ctx, file),
        Commands::Export { filter, output } => handle_export(&ctx, filter, output),
        Commands::Stats { filter } => handle_stats(&ctx, filter),
        Commands::Login { email, admin } => handle_login(&mut ctx, email, admin),
        Commands::Logout => handle_logout(&mut ctx),
        Commands::Whoami => handle_whoami(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "roster", "roster")
                .ok_or_else(|| RosterError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let store = FileStore::new(data_dir);
    let api = RosterApi::open(store)?;
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, fields: EmployeeFields) -> Result<()> {
    let result = ctx.api.add_employee(fields)?;
    for employee in &result.affected {
        println!("{}", employee.id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, fields: EmployeeFields) -> Result<()> {
    let result = ctx.api.update_employee(&id, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = if ids.len() == 1 {
        ctx.api.delete_employee(&ids[0])?
    } else {
        ctx.api.delete_employees(&ids)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    filter: String,
    sort: Option<SortColumn>,
    desc: bool,
    page: usize,
    per_page: usize,
) -> Result<()> {
    let direction = if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let spec = match sort.map(sort_key) {
        Some(key) => SortSpec::by(key, direction),
        None => SortSpec::unsorted(),
    };

    let result = ctx
        .api
        .list_employees(&filter, &spec, &PageRequest::new(page, per_page))?;
    print_table(&result.listed);
    if let Some(info) = &result.page {
        print_page_info(info);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_csv(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, filter: String, output: Option<PathBuf>) -> Result<()> {
    let out_dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(RosterError::Io)?,
    };
    let result = ctx.api.export_csv(&filter, &out_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext, filter: String) -> Result<()> {
    let result = ctx.api.stats(&filter)?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, email: String, admin: bool) -> Result<()> {
    let role = if admin { UserRole::Admin } else { UserRole::User };
    let user = ctx.api.login(&email, role)?;
    println!("Signed in as {} ({})", user.email.bold(), user.role);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.api.logout()?;
    println!("Signed out.");
    Ok(())
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    match ctx.api.current_user()? {
        Some(user) => println!("{} ({})", user.email.bold(), user.role),
        None => println!("Not signed in."),
    }
    Ok(())
}

fn sort_key(column: SortColumn) -> SortKey {
    match column {
        SortColumn::Name => SortKey::Name,
        SortColumn::Email => SortKey::Email,
        SortColumn::Role => SortKey::Role,
        SortColumn::Department => SortKey::Department,
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 5] = ["Id", "Name", "Email", "Role", "Department"];

fn print_table(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    let rows: Vec<[&str; 5]> = employees
        .iter()
        .map(|e| {
            [
                e.id.as_str(),
                e.name.as_str(),
                e.email.as_str(),
                e.role.as_str(),
                e.department.as_str(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    print_row(&HEADERS.map(|h| h.bold().to_string()), &widths, &HEADERS);
    for row in &rows {
        let cells = row.map(|c| c.to_string());
        print_row(&cells, &widths, row);
    }
}

// Pad by display width, not byte length, so non-ASCII names line up.
fn print_row(cells: &[String; 5], widths: &[usize], raw: &[&str; 5]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        let pad = widths[i].saturating_sub(raw[i].width()) + 2;
        line.push_str(&" ".repeat(pad));
    }
    println!("{}", line.trim_end());
}

fn print_page_info(info: &PageInfo) {
    println!(
        "{}",
        format!(
            "Page {} of {} ({} matching, {} per page)",
            info.page,
            info.total_pages.max(1),
            info.total_filtered,
            info.per_page
        )
        .dimmed()
    );
}

fn print_stats(stats: &StatsSummary) {
    println!("Total employees:     {}", stats.total.to_string().bold());
    println!("Different roles:     {}", stats.distinct_roles);
    println!("Departments:         {}", stats.distinct_departments);
    println!(
        "Most common role:    {}",
        stats.most_common_role.as_deref().unwrap_or("N/A")
    );
    println!(
        "Most common dept:    {}",
        stats.most_common_department.as_deref().unwrap_or("N/A")
    );
}
