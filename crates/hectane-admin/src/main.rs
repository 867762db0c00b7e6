use anyhow::{Context as _, anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use url::Url;

use hectane_client::{Client, ClientConfig};
use hectane_console::controllers::{
    DomainsController, FolderSidebar, FolderView, Header, LoginController, UsersController,
};
use hectane_console::{Context, Route, Settled};

/// Administer a Hectane mail server from the command line.
#[derive(Debug, Parser)]
#[command(name = "hectane", version)]
struct Cli {
    /// Base URL of the backend; overrides HECTANE_URL.
    #[arg(long)]
    url: Option<Url>,

    #[arg(long, env = "HECTANE_USERNAME")]
    username: String,

    #[arg(long, env = "HECTANE_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Folders of the logged in user.
    #[command(subcommand)]
    Folders(FolderCommand),
    /// List the messages in a folder.
    Messages { folder_id: i64 },
    /// User accounts (admin only).
    #[command(subcommand)]
    Users(UserCommand),
    /// Mail domains (admin only).
    #[command(subcommand)]
    Domains(DomainCommand),
}

#[derive(Debug, Subcommand)]
enum FolderCommand {
    List,
    New { name: String },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    List,
    New {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        admin: bool,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
enum DomainCommand {
    List,
    New { name: String },
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hectane=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config
    let mut config = ClientConfig::from_env().context("reading configuration")?;
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    info!(url = %config.base_url, "connecting");
    let mut ctx = Context::new(Client::new(config)?);

    // Log in, run the command, log out
    let mut login = LoginController::new();
    login.form.username = cli.username;
    login.form.password = cli.password;
    if login.login(&mut ctx.session).await? != Route::Index {
        bail!("login failed: {}", login.error_message().unwrap_or("unknown error"));
    }

    let result = run(cli.command, &mut ctx).await;

    let mut header = Header::default();
    if header.logout(&mut ctx.session).await != Route::Login {
        warn!(
            "logout failed: {}",
            header.error_message().unwrap_or("unknown error")
        );
    }

    result
}

async fn run(command: Command, ctx: &mut Context) -> anyhow::Result<()> {
    match command {
        Command::Folders(cmd) => folders(cmd, ctx).await,
        Command::Messages { folder_id } => messages(folder_id, ctx).await,
        Command::Users(cmd) => users(cmd, ctx).await,
        Command::Domains(cmd) => domains(cmd, ctx).await,
    }
}

async fn folders(cmd: FolderCommand, ctx: &mut Context) -> anyhow::Result<()> {
    let mut sidebar = FolderSidebar::new();
    match cmd {
        FolderCommand::List => {
            if !sidebar.load(ctx).await {
                bail!(load_error(sidebar.list.error_message()));
            }
            for folder in sidebar.folders(ctx) {
                println!("{}\t{}", folder.id, folder.name);
            }
        }
        FolderCommand::New { name } => {
            sidebar.show_new_dialog()?;
            sidebar.new_dialog.form.name = name;
            if sidebar.create(ctx).await? == Settled::Failed {
                bail!(failure(sidebar.new_dialog.error_message()));
            }
            if let Some(folder) = ctx.folders.saved().last() {
                println!("{}\t{}", folder.id, folder.name);
            }
        }
        FolderCommand::Delete { id } => {
            if !sidebar.load(ctx).await {
                bail!(load_error(sidebar.list.error_message()));
            }
            let folder = ctx
                .folders
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("no folder with id {id}"))?;
            sidebar.show_delete_dialog(folder)?;
            if sidebar.delete(ctx).await? == Settled::Failed {
                bail!(failure(sidebar.delete_dialog.error_message()));
            }
        }
    }
    Ok(())
}

async fn messages(folder_id: i64, ctx: &mut Context) -> anyhow::Result<()> {
    let mut view = FolderView::new();
    if !view.open(ctx, folder_id).await {
        bail!(load_error(view.list.error_message()));
    }
    for message in view.messages() {
        let marker = if message.is_unread { "*" } else { " " };
        println!(
            "{marker} {}\t{}\t{}",
            message.time.format("%Y-%m-%d %H:%M"),
            message.from,
            message.subject
        );
    }
    println!("{} unread", view.unread_count());
    Ok(())
}

async fn users(cmd: UserCommand, ctx: &mut Context) -> anyhow::Result<()> {
    let mut controller = UsersController::new();
    match cmd {
        UserCommand::List => {
            if !controller.load(ctx).await {
                bail!(load_error(controller.list.error_message()));
            }
            for user in controller.users(ctx) {
                let role = if user.is_admin { "admin" } else { "user" };
                println!("{}\t{}\t{role}", user.id, user.username);
            }
        }
        UserCommand::New {
            username,
            password,
            admin,
        } => {
            controller.show_new_dialog()?;
            let form = &mut controller.new_dialog.form;
            form.username = username;
            form.password = password;
            form.is_admin = admin;
            if controller.create(ctx).await? == Settled::Failed {
                bail!(failure(controller.new_dialog.error_message()));
            }
        }
        UserCommand::Delete { id } => {
            if controller.delete(ctx, id).await == Settled::Failed {
                bail!(failure(controller.error_message()));
            }
        }
    }
    Ok(())
}

async fn domains(cmd: DomainCommand, ctx: &mut Context) -> anyhow::Result<()> {
    let mut controller = DomainsController::new();
    match cmd {
        DomainCommand::List => {
            if !controller.load(ctx).await {
                bail!(load_error(controller.list.error_message()));
            }
            for domain in controller.domains(ctx) {
                println!("{}\t{}", domain.id, domain.name);
            }
        }
        DomainCommand::New { name } => {
            controller.show_new_dialog()?;
            controller.new_dialog.form.name = name;
            if controller.create(ctx).await? == Settled::Failed {
                bail!(failure(controller.new_dialog.error_message()));
            }
        }
        DomainCommand::Delete { id } => {
            if !controller.load(ctx).await {
                bail!(load_error(controller.list.error_message()));
            }
            let domain = ctx
                .domains
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("no domain with id {id}"))?;
            controller.show_delete_dialog(domain)?;
            if controller.delete(ctx).await? == Settled::Failed {
                bail!(failure(controller.delete_dialog.error_message()));
            }
        }
    }
    Ok(())
}

fn load_error(message: Option<&str>) -> String {
    format!("load failed: {}", message.unwrap_or("unknown error"))
}

fn failure(message: Option<&str>) -> String {
    message.unwrap_or("request failed").trim_end().to_string()
}
