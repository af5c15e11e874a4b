use clap::{Parser, Subcommand};
use examdesk_client::{
    api::ApiClient,
    config::ClientConfig,
    i18n::{self, Locale},
    logging::init_logging,
    services::{
        AuthApi, AuthService, Credentials, ExamService, FinanceService, QuestionService, UserService,
    },
    session::{roles, SessionStore},
    storage::{FileStore, KeyValueStore},
    view::{render_page, render_table},
    ClientError,
};
use examdesk_common::{format, BaseFilters, Exam, MonthlyRevenue, TableResource};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the examination admin backend", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = BaseFilters::DEFAULT_PAGE_SIZE)]
    size: u32,
    #[arg(long)]
    search: Option<String>,
}

impl PageArgs {
    fn filters(&self) -> Result<BaseFilters, ClientError> {
        let filters = BaseFilters::new(self.page, self.size)?;
        Ok(match &self.search {
            Some(s) => filters.with_search(s.as_str()),
            None => filters,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the current identity
    Whoami {
        /// Fetch the profile from the server
        #[arg(long)]
        refresh: bool,
    },
    /// List exams, or show one with --id
    Exams {
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List questions, optionally for one exam
    Questions {
        #[arg(long)]
        exam: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List users (administrators only)
    Users {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Financial statistics for a month
    Finance {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
    /// Show or change the display language
    Locale { code: Option<String> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let config = match ClientConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };
    init_logging(config.log_dir.as_deref());

    if let Err(e) = run(args.command, &config).await {
        error!(error = %e, "Command failed.");
        return Err(e.into());
    }
    Ok(())
}

async fn run(command: Command, config: &ClientConfig) -> Result<(), ClientError> {
    let storage = FileStore::open(&config.storage_path)?;
    let locale = i18n::current_locale(&storage, config.locale());
    let api = ApiClient::new(&config.api_url, config.timeout())?.with_locale(locale.code());

    let mut session = SessionStore::restore(storage, AuthService::new(api.clone()));
    let api = match session.token() {
        Some(token) => api.with_token(token),
        None => api,
    };

    match command {
        Command::Login { email, password } => {
            match session.login(&Credentials::new(email, password)).await {
                Ok(user) => println!(
                    "{}",
                    i18n::translate_with(locale, "login_success", &[("name", user.full_name.as_str())])
                ),
                Err(e) => {
                    println!("{}", i18n::translate(locale, "login_failed"));
                    return Err(e);
                }
            }
        }
        Command::Logout => {
            let redirect = session.logout();
            info!(to = redirect.path(), "Session cleared.");
            println!("{}", i18n::translate(locale, "logged_out"));
        }
        Command::Whoami { refresh } => {
            require_login(&session, locale)?;
            if refresh {
                session.refresh_profile().await?;
            }
            if let Some(user) = session.current_user() {
                println!("{} (#{})", user.full_name, user.id);
                println!("{}: {}", i18n::translate(locale, "roles"), user.role_names().join(", "));
            }
            if let Some(email) = session.profile().and_then(|p| p.email.as_deref()) {
                println!("{}: {email}", i18n::translate(locale, "email"));
            }
        }
        Command::Exams { id, status, page } => {
            require_login(&session, locale)?;
            let service = ExamService::new(api);
            match id {
                Some(id) => {
                    let exam = service.get(id).await?.data;
                    print_exam(&exam, locale);
                }
                None => {
                    let filters = page.filters()?.with_filter("status", status.unwrap_or_default());
                    println!("{}", render_page(&service.list(&filters).await?, &filters, locale));
                }
            }
        }
        Command::Questions { exam, page } => {
            require_login(&session, locale)?;
            let service = QuestionService::new(api);
            let filters = page.filters()?;
            let result = match exam {
                Some(exam_id) => service.list_for_exam(exam_id, &filters).await?,
                None => service.list(&filters).await?,
            };
            println!("{}", render_page(&result, &filters, locale));
        }
        Command::Users { page } => {
            require_role(&session, locale, &[roles::ADMIN])?;
            let filters = page.filters()?;
            let result = UserService::new(api).list(&filters).await?;
            println!("{}", render_page(&result, &filters, locale));
        }
        Command::Finance { year, month } => {
            require_role(&session, locale, &[roles::ADMIN, roles::MERCHANT])?;
            let stats = FinanceService::new(api).statistics(year, month).await?;
            let code = stats.currency_code();
            if let Some(key) = format::month_name_key(month) {
                println!("{} {year}", i18n::translate(locale, key));
            }
            println!(
                "{}: {}",
                i18n::translate(locale, "total_revenue"),
                format::currency(stats.total_revenue, code)
            );
            println!(
                "{}: {}",
                i18n::translate(locale, "total_transactions"),
                stats.total_transactions
            );
            if let Some(share) = stats.month_share(month) {
                println!("{}", format::percentage(share, 1.0));
            }
            let headers = MonthlyRevenue::table_header(&i18n::translator(locale));
            println!("\n{}", render_table(&stats.monthly, &headers));
        }
        Command::Locale { code } => match code {
            Some(code) => {
                let new_locale: Locale = code
                    .parse()
                    .map_err(|_| ClientError::InvalidInput(format!("Unsupported locale '{code}'")))?;
                i18n::set_locale(session.storage(), new_locale)?;
                println!("{new_locale}");
            }
            None => println!("{locale}"),
        },
    }
    Ok(())
}

fn print_exam(exam: &Exam, locale: Locale) {
    let t = i18n::translator(locale);
    println!("#{} {}", exam.id, exam.title);
    println!("{}: {}", t("status"), t(exam.status.label_key()));
    if let Some(subject) = &exam.subject {
        println!("{}: {}", t("subject"), subject.name);
    }
    if let Some(start) = &exam.start_date {
        println!("{}: {}", t("start_date"), format::date(start));
    }
    if let Some(minutes) = exam.duration_minutes {
        println!("{}: {}", t("duration"), format::duration_minutes(minutes));
    }
    println!("{}: {}", t("questions_count"), exam.questions_count);
}

fn require_login<S, A>(session: &SessionStore<S, A>, locale: Locale) -> Result<(), ClientError>
where
    S: KeyValueStore,
    A: AuthApi,
{
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ClientError::Unauthorized(i18n::translate(locale, "not_logged_in")))
    }
}

fn require_role<S, A>(
    session: &SessionStore<S, A>,
    locale: Locale,
    allowed: &[&str],
) -> Result<(), ClientError>
where
    S: KeyValueStore,
    A: AuthApi,
{
    require_login(session, locale)?;
    if session.is_in_role(allowed) {
        Ok(())
    } else {
        Err(ClientError::Unauthorized(i18n::translate(locale, "forbidden")))
    }
}
