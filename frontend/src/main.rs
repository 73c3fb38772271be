use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_portal_frontend::{
    api::{ApiClient, AuditEntityType, LeaveResponse, LeaveStatus, LoginRequest, Role, Theme},
    components::list::Page,
    config::RuntimeConfig,
    pages::{
        account::{PasswordRecoveryViewModel, RegisterViewModel},
        admin::AdminViewModel,
        dashboard::DashboardViewModel,
        hierarchy::HierarchyViewModel,
        leaves::{LeaveForm, LeaveScope, LeavesViewModel},
        settings::{PasswordForm, SettingsViewModel},
    },
    state::{auth, Store, StoreHandle},
    utils::{storage::FileStorage, time::format_display_date},
};

#[derive(Parser, Debug)]
#[command(name = "leave-portal")]
#[command(about = "Command-line client for the leave portal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Create a student or teacher account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Student)]
        role: RoleArg,
        #[arg(long)]
        department: String,
        /// Required for students
        #[arg(long)]
        class: Option<String>,
    },
    /// Ask for a password reset code
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Reset the password with a confirmation code
    ResetPassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Dashboard counters for the logged-in role
    Stats,
    /// List leaves
    Leaves {
        #[arg(long, value_enum, default_value_t = ScopeArg::Mine)]
        scope: ScopeArg,
        /// Only approved or rejected leaves
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Apply for leave (dates as YYYY-MM-DD)
    Apply {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        reason: String,
    },
    Approve {
        leave_id: String,
    },
    Reject {
        leave_id: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Organisation chart
    Tree,
    Departments {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Change history of a student or teacher
    Audit {
        #[arg(value_enum)]
        entity: EntityArg,
        id: String,
    },
    /// Show or change UI settings
    Settings {
        #[arg(long)]
        theme: Option<String>,
        /// Push the current settings to the server
        #[arg(long)]
        save: bool,
    },
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScopeArg {
    Mine,
    All,
    Pending,
    History,
}

impl From<ScopeArg> for LeaveScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Mine => LeaveScope::Mine,
            ScopeArg::All => LeaveScope::All,
            ScopeArg::Pending => LeaveScope::Pending,
            ScopeArg::History => LeaveScope::History,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusArg {
    Approved,
    Rejected,
}

impl From<StatusArg> for LeaveStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Approved => LeaveStatus::Approved,
            StatusArg::Rejected => LeaveStatus::Rejected,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoleArg {
    Student,
    Teacher,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EntityArg {
    Student,
    Teacher,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leave_portal_frontend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = RuntimeConfig::load()?;
    tracing::debug!(
        api_base_url = %config.api_base_url,
        timeout_secs = config.request_timeout.as_secs(),
        read_retries = config.read_retries,
        state_file = %config.state_file.display(),
        "configuration loaded"
    );

    let storage = FileStorage::open(&config.state_file)
        .with_context(|| format!("opening {}", config.state_file.display()))?;
    let store = StoreHandle::new(Store::hydrate(Box::new(storage)));
    let api = Rc::new(ApiClient::new(&config)?);
    auth::restore_session(&api, &store);

    run(cli.command, api, store, &config).await
}

async fn run(
    command: Command,
    api: Rc<ApiClient>,
    store: StoreHandle,
    config: &RuntimeConfig,
) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let user =
                auth::login_request(&api, &store, LoginRequest { email, password }).await?;
            println!("Logged in as {} ({})", user.name, user.role.as_str());
        }
        Command::Logout => {
            auth::logout(&api, &store);
            println!("Logged out");
        }
        Command::Register {
            name,
            email,
            password,
            role,
            department,
            class,
        } => {
            let mut vm = RegisterViewModel::new(api, store);
            vm.form.role = match role {
                RoleArg::Student => Role::Student,
                RoleArg::Teacher => Role::Teacher,
            };
            vm.form.name = name;
            vm.form.email = email;
            vm.form.confirm_password = password.clone();
            vm.form.password = password;
            vm.select_department(&department).await?;
            if let Some(class) = class {
                if !vm.classes().iter().any(|c| c.class_id == class) {
                    bail!("class `{class}` is not offered by department `{department}`");
                }
                vm.form.class_id = class;
            }
            vm.submit().await?;
            println!("Registered; log in to continue");
        }
        Command::ForgotPassword { email } => {
            let mut vm = PasswordRecoveryViewModel::new(api);
            vm.form.email = email;
            vm.request_code().await?;
            if let Some(message) = &vm.messages.success {
                println!("{message}");
            }
        }
        Command::ResetPassword {
            email,
            code,
            new,
            confirm,
        } => {
            let mut vm = PasswordRecoveryViewModel::new(api);
            vm.form.email = email;
            vm.form.confirmation_code = code;
            vm.form.new_password = new;
            vm.form.confirm_password = confirm;
            vm.reset_password().await?;
            println!("Password reset; log in with the new password");
        }
        Command::Stats => {
            let role = current_role(&store)?;
            let stats = DashboardViewModel::new(api, store).load(role).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Leaves {
            scope,
            status,
            query,
            page,
            page_size,
        } => {
            let mut vm = LeavesViewModel::new(
                api,
                store,
                scope.into(),
                page_size.unwrap_or(config.page_size),
            );
            vm.refresh().await?;
            vm.set_status_filter(status.map(LeaveStatus::from));
            vm.set_query(query);
            vm.set_page(page);
            print_leaves(&vm.page());
        }
        Command::Apply {
            from,
            to,
            subject,
            reason,
        } => {
            let mut vm = LeavesViewModel::new(api, store, LeaveScope::Mine, config.page_size);
            let leave = vm
                .apply(&LeaveForm::new(from, to, subject, reason))
                .await?;
            println!(
                "Applied {} ({} days, {})",
                leave.leave_id,
                leave.total_days(),
                leave.status
            );
        }
        Command::Approve { leave_id } => {
            let mut vm = LeavesViewModel::new(api, store, LeaveScope::Pending, config.page_size);
            let leave = vm.approve(&leave_id).await?;
            println!("{} is now {}", leave.leave_id, leave.status);
        }
        Command::Reject { leave_id, reason } => {
            let mut vm = LeavesViewModel::new(api, store, LeaveScope::Pending, config.page_size);
            let leave = vm.reject(&leave_id, &reason).await?;
            println!("{} is now {}", leave.leave_id, leave.status);
        }
        Command::Tree => {
            let mut vm = HierarchyViewModel::new(api, store);
            vm.load().await?;
            for row in vm.rows() {
                let marker = if row.highlighted { " *" } else { "" };
                println!(
                    "{}{} [{}]{}",
                    "  ".repeat(row.depth),
                    row.name,
                    row.node_type,
                    marker
                );
            }
        }
        Command::Departments { query } => {
            let mut vm = AdminViewModel::new(api, store, config.page_size);
            vm.refresh_departments().await?;
            vm.departments.set_query(query);
            let page = vm.departments.page();
            for department in &page.items {
                println!("{}\t{}", department.department_id, department.department_name);
            }
            println!(
                "Showing {} to {} of {}",
                page.range.first, page.range.last, page.range.total
            );
        }
        Command::Audit { entity, id } => {
            let entity_type = match entity {
                EntityArg::Student => AuditEntityType::Student,
                EntityArg::Teacher => AuditEntityType::Teacher,
            };
            let mut vm = AdminViewModel::new(api, store, config.page_size);
            let entries = vm.load_audit_logs(entity_type, &id).await;
            if entries.is_empty() {
                println!("No history for {id}");
            }
            for entry in entries {
                let at = entry
                    .action_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!(
                    "{at}\t{}\t{}",
                    entry.action,
                    entry.action_by.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Settings { theme, save } => {
            let mut vm = SettingsViewModel::new(api, store);
            if let Some(raw) = theme {
                let theme =
                    Theme::parse(&raw).ok_or_else(|| anyhow!("unknown theme `{raw}`"))?;
                vm.set_theme(theme);
            }
            if save {
                vm.save().await?;
            }
            println!("{}", serde_json::to_string_pretty(&vm.settings())?);
        }
        Command::Password { current, new, confirm } => {
            let mut vm = SettingsViewModel::new(api, store);
            vm.password_form = PasswordForm::new(current, new, confirm);
            vm.change_password().await?;
            println!("Password updated");
        }
    }
    Ok(())
}

fn current_role(store: &StoreHandle) -> anyhow::Result<Role> {
    match store.read(|state| state.auth.role()) {
        Some(role) => Ok(role),
        None => bail!("not logged in; run `leave-portal login` first"),
    }
}

fn print_leaves(page: &Page<LeaveResponse>) {
    for leave in &page.items {
        println!(
            "{}\t{}\t{} - {}\t{}d\t{}",
            leave.leave_id,
            leave.status,
            format_display_date(leave.from_date),
            format_display_date(leave.to_date),
            leave.total_days(),
            leave.subject
        );
        if let Some(reason) = &leave.rejection_reason {
            println!("\trejected: {reason}");
        }
    }
    println!(
        "Page {} of {} (showing {} to {} of {})",
        page.current_page,
        page.total_pages.max(1),
        page.range.first,
        page.range.last,
        page.range.total
    );
}
