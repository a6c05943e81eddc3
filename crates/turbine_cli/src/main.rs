//! Command-line client for the Turbine paste API.

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use turbine_client::{ApiClient, ApiOutcome, RequestOptions, Session, SessionStore};
use turbine_core::editor::{EditorOptions, WrapSetting};
use turbine_core::humanize::{humanize_duration, humanize_size};
use turbine_core::models::{
    CreatePaste, Credentials, Paste, PasteFile, PastePreview, Registration, User,
};
use turbine_core::text::byte_length;
use turbine_core::{languages, Config};

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "turbine", about = "Turbine pastebin CLI", version)]
struct Cli {
    /// API base URL (can also be set via TURBINE_API_URL)
    #[arg(short, long, env = "TURBINE_API_URL")]
    server: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Fetch a paste and print its files
    Get {
        id: String,
    },
    /// Create a paste from files or stdin
    New {
        /// Files to include; stdin is read when none are given
        files: Vec<PathBuf>,
        /// Paste title
        #[arg(short, long)]
        name: Option<String>,
        /// Paste description
        #[arg(short, long)]
        description: Option<String>,
        /// Explicit language tag applied to every file
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Toggle your star on a paste
    Star {
        id: String,
    },
    /// Log in and persist the session
    Login {
        username: String,
        /// Password; prompted on stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the persisted session
    Logout,
    /// Register a new account
    Register {
        username: String,
        email: String,
        /// Password; prompted on stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the signed-in user
    Me,
    /// Show a user profile
    User {
        id: String,
    },
    /// List a user's pastes (defaults to your own)
    Pastes {
        /// User id; the signed-in user when omitted
        user: Option<String>,
        /// Result page
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// List starred pastes instead of authored ones
        #[arg(long)]
        stars: bool,
    },
    /// Resolve the editor mode and wrap behavior for a file
    Mode {
        filename: String,
        /// Explicit language overriding filename inference
        #[arg(short, long)]
        language: Option<String>,
        /// Wrap preference folded into the result
        #[arg(short, long, value_enum, default_value = "auto")]
        wrap: WrapArg,
    },
}

/// Wrap preference as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WrapArg {
    Auto,
    On,
    Off,
}

impl From<WrapArg> for WrapSetting {
    fn from(value: WrapArg) -> Self {
        match value {
            WrapArg::Auto => WrapSetting::Auto,
            WrapArg::On => WrapSetting::On,
            WrapArg::Off => WrapSetting::Off,
        }
    }
}

fn fail(action: &str, message: &str) -> ! {
    eprintln!("{} failed: {}", action, message);
    std::process::exit(1);
}

/// Unwrap a data outcome or report the API's error and exit.
fn expect_data<T>(outcome: ApiOutcome<T>, action: &str) -> T {
    match outcome {
        ApiOutcome::Data { data, .. } => data,
        ApiOutcome::Text { status, .. } => fail(
            action,
            &format!("unexpected non-JSON response (status {})", status),
        ),
        ApiOutcome::Error { status, error } => {
            eprintln!("{} failed ({}): {}", action, status, error.message);
            std::process::exit(1);
        }
    }
}

fn elapsed_seconds(instant: DateTime<Utc>) -> f64 {
    (Utc::now() - instant).num_milliseconds() as f64 / 1000.0
}

fn display_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Language label shown next to a file in `get` output.
fn file_language_label(file: &PasteFile) -> String {
    languages::resolve(&file.filename, file.language.as_deref())
        .ace_mode
        .to_string()
}

fn format_paste_output(paste: &Paste, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(paste)
            .map_err(|err| format!("response encoding error: {}", err));
    }

    let mut out = format!("{} by {}\n", paste.name, paste.author_name);
    if !paste.description.is_empty() {
        out.push_str(&paste.description);
        out.push('\n');
    }
    out.push_str(&format!(
        "Created {} ago · {} views · {} stars\n",
        humanize_duration(elapsed_seconds(paste.created_at)),
        paste.views,
        paste.stars
    ));

    for file in &paste.files {
        out.push_str(&format!(
            "\n-- {} ({}, {}) --\n{}\n",
            file.filename,
            file_language_label(file),
            humanize_size(byte_length(&file.content) as u64),
            file.content
        ));
    }
    Ok(out)
}

fn format_preview_rows(pastes: &[PastePreview], json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(pastes)
            .map_err(|err| format!("response encoding error: {}", err));
    }

    let mut rows = Vec::with_capacity(pastes.len());
    for paste in pastes {
        if !paste.available {
            continue;
        }
        rows.push(format!(
            "{:<24} {:<30} {:>6}★ {:>6} views  {} ago",
            paste.id,
            paste.name,
            paste.stars,
            paste.views,
            humanize_duration(elapsed_seconds(paste.created_at))
        ));
    }
    Ok(rows.join("\n"))
}

fn format_user_output(user: &User, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(user)
            .map_err(|err| format!("response encoding error: {}", err));
    }

    let mut out = format!(
        "{} · joined {} ago\n{} pastes · {} stars received · {} stars given",
        user.username,
        humanize_duration(elapsed_seconds(user.created_at)),
        user.paste_count,
        user.stars_received,
        user.stars_given
    );
    if let Some(email) = &user.email {
        out.push_str(&format!("\nemail: {}", email));
    }
    Ok(out)
}

fn print_or_exit(result: Result<String, String>, action: &str) {
    match result {
        Ok(output) => println!("{}", output),
        Err(message) => fail(action, &message),
    }
}

/// Password from the flag, or read from stdin after a prompt.
fn resolve_password(flag: Option<String>) -> io::Result<String> {
    if let Some(password) = flag {
        return Ok(password);
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Validate an explicit language tag against the registry before submission.
fn validated_language(language: Option<String>) -> Option<String> {
    language.map(|name| match languages::lookup(&name) {
        Some(entry) => entry.name.clone(),
        None => fail("Language", &format!("{:?} is not a known language", name)),
    })
}

fn paste_files_from_args(
    files: &[PathBuf],
    language: Option<String>,
) -> Result<Vec<PasteFile>, Box<dyn std::error::Error>> {
    let language = validated_language(language);

    if files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(vec![PasteFile {
            filename: "main".to_string(),
            content: buffer,
            language,
        }]);
    }

    let mut out = Vec::with_capacity(files.len());
    for path in files {
        out.push(PasteFile {
            filename: display_filename(path),
            content: std::fs::read_to_string(path)?,
            language: language.clone(),
        });
    }
    Ok(out)
}

/// Fetch the profile for a fresh token and persist the full session.
async fn store_authenticated_session(
    client: &ApiClient,
    store: &SessionStore,
    token: String,
    action: &str,
) -> Result<User, Box<dyn std::error::Error>> {
    let options = RequestOptions {
        token: Some(token.clone()),
        ..RequestOptions::default()
    };
    let user = expect_data(client.get_me(options).await?, action);
    store.save(&Session {
        token: Some(token),
        user: Some(user.clone()),
        oauth_state: None,
    })?;
    Ok(user)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Cli {
        server,
        json,
        timeout,
        command,
    } = Cli::parse();

    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(server) = server {
        config.api_base_url = server.trim().trim_end_matches('/').to_string();
    }
    config.request_timeout_secs = timeout;

    let client = ApiClient::new(&config);
    let store = SessionStore::from_env();
    let session = store.load()?;

    match command {
        Commands::Completions { .. } => unreachable!("completions handled before client setup"),
        Commands::Get { id } => {
            let outcome = client
                .get_paste(&id, RequestOptions::with_session(&session))
                .await?;
            let paste = expect_data(outcome, "Get");
            print_or_exit(format_paste_output(&paste, json), "Get");
        }
        Commands::New {
            files,
            name,
            description,
            language,
        } => {
            let payload = CreatePaste {
                title: name.unwrap_or_else(|| "Untitled Paste".to_string()),
                description: description.unwrap_or_default(),
                files: paste_files_from_args(&files, language)?,
            };
            let outcome = client
                .create_paste(&payload, RequestOptions::with_session(&session))
                .await?;
            let created = expect_data(outcome, "New");
            if json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("Created paste: {}", created.id);
            }
        }
        Commands::Star { id } => {
            if !session.is_authenticated() {
                fail("Star", "not logged in (run `turbine login` first)");
            }
            let outcome = client
                .toggle_star(&id, RequestOptions::with_session(&session))
                .await?;
            let response = expect_data(outcome, "Star");
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Toggled star on paste: {}", id);
            }
        }
        Commands::Login { username, password } => {
            let credentials = Credentials {
                username,
                password: resolve_password(password)?,
            };
            let outcome = client
                .login(&credentials, RequestOptions::default())
                .await?;
            let login = expect_data(outcome, "Login");
            let user = store_authenticated_session(&client, &store, login.token, "Login").await?;
            println!("Logged in as {}", user.username);
        }
        Commands::Logout => {
            store.clear()?;
            println!("Logged out");
        }
        Commands::Register {
            username,
            email,
            password,
        } => {
            let registration = Registration {
                username,
                email,
                password: resolve_password(password)?,
            };
            let outcome = client
                .register(&registration, RequestOptions::default())
                .await?;
            let login = expect_data(outcome, "Register");
            let user =
                store_authenticated_session(&client, &store, login.token, "Register").await?;
            println!("Registered as {}", user.username);
        }
        Commands::Me => {
            if !session.is_authenticated() {
                fail("Me", "not logged in (run `turbine login` first)");
            }
            let outcome = client
                .get_me(RequestOptions::with_session(&session))
                .await?;
            let user = expect_data(outcome, "Me");
            print_or_exit(format_user_output(&user, json), "Me");
        }
        Commands::User { id } => {
            let outcome = client
                .get_user(&id, RequestOptions::with_session(&session))
                .await?;
            let user = expect_data(outcome, "User");
            print_or_exit(format_user_output(&user, json), "User");
        }
        Commands::Pastes { user, page, stars } => {
            let user_id = match user.or_else(|| {
                session
                    .user
                    .as_ref()
                    .map(|profile| profile.id.clone())
            }) {
                Some(id) => id,
                None => fail("Pastes", "no user given and no session available"),
            };
            let options = RequestOptions::with_session(&session);
            let outcome = if stars {
                client.list_starred(&user_id, page, options).await?
            } else {
                client.list_pastes(&user_id, page, options).await?
            };
            let pastes = expect_data(outcome, "Pastes");
            print_or_exit(format_preview_rows(&pastes, json), "Pastes");
        }
        Commands::Mode {
            filename,
            language,
            wrap,
        } => {
            let language = validated_language(language);
            let resolved = languages::resolve(&filename, language.as_deref());
            let options = EditorOptions {
                wrap: wrap.into(),
                ..EditorOptions::default()
            };
            let final_wrap = options.wrap.resolve(resolved.wrap);
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "mode": resolved.ace_mode, "wrap": final_wrap })
                );
            } else {
                println!(
                    "mode: {}\nwrap: {}",
                    resolved.ace_mode,
                    if final_wrap { "on" } else { "off" }
                );
            }
        }
    }

    Ok(())
}
