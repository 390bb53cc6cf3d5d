//! `safespace` command-line front end.
//!
//! Every feature command runs behind the same guard as the app views: the
//! persisted session is restored first and a missing user is reported as a
//! redirect to the login route.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use safespace::config::{AppConfig, FirebaseConfig};
use safespace::identity::{AuthSession, FirebaseAuth, Identity, IdentityError, IdentityProvider};
use safespace::screening::{CRISIS_NOTICE, screen};
use safespace::services::ServiceError;
use safespace::services::badges::BadgeShelf;
use safespace::services::diary::Diary;
use safespace::services::events::EventBoard;
use safespace::services::feed::ConfessionFeed;
use safespace::services::forum::CareerForum;
use safespace::services::groups::{JoinAction, StudyGroups};
use safespace::services::mentors::mentors_for_topic;
use safespace::services::mood::{Mood, MoodBoard};
use safespace::services::profile::ProfileEditor;
use safespace::services::quiz::{QUESTIONS, QuizSheet};
use safespace::services::reminders::Reminders;
use safespace::services::rules::COMMUNITY_RULES;
use safespace::store::{FileStore, KeyValueStore};
use safespace::views::{self, Access, SAFETY_BANNER, View};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; continue at {0}")]
    NotSignedIn(&'static str),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "safespace", about = "SafeSpace student community toolkit")]
struct Cli {
    #[arg(long, env = "SAFESPACE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the feature views in navigation order.
    Views,
    Rules,
    /// Check text for crisis language.
    Screen {
        text: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SAFESPACE_PASSWORD")]
        password: String,
    },
    /// Sign in with a Google ID token.
    Google {
        #[arg(long)]
        id_token: String,
    },
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SAFESPACE_PASSWORD")]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
    Logout,
    Whoami,
    #[command(flatten)]
    Gated(GatedCommand),
}

/// Feature commands; each requires a signed-in session.
#[derive(Subcommand, Debug)]
enum GatedCommand {
    Feed(FeedCommand),
    Diary(DiaryCommand),
    Mood(MoodCommand),
    Forum(ForumCommand),
    Quiz(QuizCommand),
    Profile(ProfileCommand),
    Mentors {
        #[arg(long)]
        topic: Option<String>,
    },
    Groups(GroupsCommand),
    Events(EventsCommand),
    Badges(BadgesCommand),
    Reminders(RemindersCommand),
}

#[derive(Args, Debug)]
struct FeedCommand {
    #[command(subcommand)]
    command: FeedSubcommand,
}

#[derive(Subcommand, Debug)]
enum FeedSubcommand {
    List,
    Post { text: String },
}

#[derive(Args, Debug)]
struct DiaryCommand {
    #[command(subcommand)]
    command: DiarySubcommand,
}

#[derive(Subcommand, Debug)]
enum DiarySubcommand {
    List,
    Add { text: String },
}

#[derive(Args, Debug)]
struct MoodCommand {
    #[command(subcommand)]
    command: MoodSubcommand,
}

#[derive(Subcommand, Debug)]
enum MoodSubcommand {
    List,
    /// Record a mood by emoji or name (joyful, content, neutral, uneasy, sad,
    /// frustrated, tired).
    Record { mood: Mood },
}

#[derive(Args, Debug)]
struct ForumCommand {
    #[command(subcommand)]
    command: ForumSubcommand,
}

#[derive(Subcommand, Debug)]
enum ForumSubcommand {
    List,
    Show {
        topic_id: Uuid,
    },
    Ask {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Reply {
        topic_id: Uuid,
        content: String,
    },
}

#[derive(Args, Debug)]
struct QuizCommand {
    #[command(subcommand)]
    command: QuizSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuizSubcommand {
    Questions,
    /// Submit the quiz with the given question numbers checked.
    Submit {
        #[arg(value_delimiter = ',')]
        checked: Vec<usize>,
    },
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
    AddInterest {
        tag: String,
    },
    RemoveInterest {
        index: usize,
    },
    AddAchievement {
        text: String,
    },
    RemoveAchievement {
        index: usize,
    },
    AddProject {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        link: String,
        #[arg(long, default_value = "")]
        desc: String,
    },
    RemoveProject {
        index: usize,
    },
}

#[derive(Args, Debug)]
struct GroupsCommand {
    #[command(subcommand)]
    command: GroupsSubcommand,
}

#[derive(Subcommand, Debug)]
enum GroupsSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        desc: String,
        #[arg(long, default_value = "")]
        join: String,
    },
    /// Print the URL to join; `--link` stores one for groups that have none.
    Join {
        group_id: Uuid,
        #[arg(long)]
        link: Option<String>,
    },
    Invite {
        group_id: Uuid,
    },
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        /// RFC 3339 or YYYY-MM-DD HH:MM (UTC); empty means now.
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long, default_value = "")]
        host: String,
        #[arg(long, default_value = "")]
        link: String,
    },
}

#[derive(Args, Debug)]
struct BadgesCommand {
    #[command(subcommand)]
    command: BadgesSubcommand,
}

#[derive(Subcommand, Debug)]
enum BadgesSubcommand {
    List,
    Grant {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        desc: String,
    },
    Kindness,
}

#[derive(Args, Debug)]
struct RemindersCommand {
    #[command(subcommand)]
    command: RemindersSubcommand,
}

#[derive(Subcommand, Debug)]
enum RemindersSubcommand {
    List,
    Add { text: String },
    Toggle { reminder_id: Uuid },
}

/// Stand-in provider when Firebase settings are absent.
struct Unconfigured;

#[async_trait::async_trait]
impl IdentityProvider for Unconfigured {
    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Identity, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn sign_in_with_google(&self, _google_id_token: &str) -> Result<Identity, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<Identity, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn update_display_name(
        &self,
        _identity: &Identity,
        _display_name: &str,
    ) -> Result<Identity, IdentityError> {
        Err(IdentityError::NotConfigured)
    }

    async fn sign_out(&self, _identity: &Identity) -> Result<(), IdentityError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::from_env();
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    debug!(data_dir = %data_dir.display(), "opening store");

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));
    let mut session = AuthSession::new(provider(config.firebase), store.clone());
    session.restore();

    match cli.command {
        Command::Views => run_views(),
        Command::Rules => run_rules(),
        Command::Screen { text } => run_screen(&text),
        Command::Login { email, password } => {
            let identity = session.sign_in(&email, &password).await?;
            println!("signed in as {}", identity.label());
            Ok(())
        }
        Command::Google { id_token } => {
            let identity = session.sign_in_with_google(&id_token).await?;
            println!("signed in as {}", identity.label());
            Ok(())
        }
        Command::Signup { email, password, name } => {
            let identity = session.sign_up(&email, &password, name.as_deref()).await?;
            println!("signed up as {}", identity.label());
            Ok(())
        }
        Command::Logout => {
            session.sign_out().await?;
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            match session.current() {
                Some(identity) => println!(
                    "{} <{}> via {:?}",
                    identity.label(),
                    identity.email.as_deref().unwrap_or("-"),
                    identity.method
                ),
                None => println!("not signed in"),
            }
            Ok(())
        }
        Command::Gated(gated) => {
            let user = require_user(&session)?;
            debug!(uid = %user.uid, "session restored");
            run_gated(gated, store)
        }
    }
}

/// Firebase when configured and buildable; otherwise a provider that refuses
/// sign-in, so commands that need no account keep working.
fn provider(firebase: Option<FirebaseConfig>) -> Arc<dyn IdentityProvider> {
    let Some(config) = firebase else {
        debug!("firebase not configured; sign-in unavailable");
        return Arc::new(Unconfigured);
    };
    match FirebaseAuth::new(config) {
        Ok(auth) => Arc::new(auth),
        Err(e) => {
            warn!(error = %e, "firebase client unavailable; sign-in disabled");
            Arc::new(Unconfigured)
        }
    }
}

fn require_user(session: &AuthSession) -> Result<Identity, CliError> {
    let state = session.state();
    match views::guard(&state) {
        Access::Granted(user) => Ok(user.clone()),
        Access::Redirect(route) => Err(CliError::NotSignedIn(route.path())),
        Access::Pending => Err(CliError::NotSignedIn(views::Route::Login.path())),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_crisis_notice() {
    println!("⚠️  {}", CRISIS_NOTICE.title);
    println!("{}", CRISIS_NOTICE.message);
    for resource in CRISIS_NOTICE.resources {
        println!("  • {resource}");
    }
}

fn warn_on_crisis(text: &str) {
    if screen(text).is_some() {
        print_crisis_notice();
    }
}

// =============================================================================
// UNGATED
// =============================================================================

fn run_views() -> Result<(), CliError> {
    println!("{SAFETY_BANNER}\n");
    for view in View::ALL {
        println!("{:<10} {view}", view.id());
    }
    Ok(())
}

fn run_rules() -> Result<(), CliError> {
    for (i, rule) in COMMUNITY_RULES.iter().enumerate() {
        println!("{}. {rule}", i + 1);
    }
    Ok(())
}

fn run_screen(text: &str) -> Result<(), CliError> {
    match screen(text) {
        Some(keyword) => {
            println!("matched: {keyword}");
            print_crisis_notice();
        }
        None => println!("no crisis language found"),
    }
    Ok(())
}

// =============================================================================
// GATED
// =============================================================================

fn run_gated(command: GatedCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    match command {
        GatedCommand::Feed(feed) => run_feed(feed, store),
        GatedCommand::Diary(diary) => run_diary(diary, store),
        GatedCommand::Mood(mood) => run_mood(mood, store),
        GatedCommand::Forum(forum) => run_forum(forum, store),
        GatedCommand::Quiz(quiz) => run_quiz(quiz),
        GatedCommand::Profile(profile) => run_profile(profile, store),
        GatedCommand::Mentors { topic } => {
            print_json(&mentors_for_topic(topic.as_deref().unwrap_or("")))
        }
        GatedCommand::Groups(groups) => run_groups(groups, store),
        GatedCommand::Events(events) => run_events(events, store),
        GatedCommand::Badges(badges) => run_badges(badges, store),
        GatedCommand::Reminders(reminders) => run_reminders(reminders, store),
    }
}

fn run_feed(feed: FeedCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut board = ConfessionFeed::open(store);
    match feed.command {
        FeedSubcommand::List => print_json(board.list()),
        FeedSubcommand::Post { text } => {
            board.screen_draft(&text);
            if board.alert_visible() {
                print_crisis_notice();
            }
            print_json(&board.post(&text)?)
        }
    }
}

fn run_diary(diary: DiaryCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut book = Diary::open(store);
    match diary.command {
        DiarySubcommand::List => print_json(book.entries()),
        DiarySubcommand::Add { text } => {
            book.screen_draft(&text);
            if book.alert_visible() {
                print_crisis_notice();
            }
            print_json(&book.add(&text)?)
        }
    }
}

fn run_mood(mood: MoodCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut board = MoodBoard::open(store);
    match mood.command {
        MoodSubcommand::List => {
            for sample in board.samples() {
                println!("{}  {}", sample.mood, sample.time.format("%Y-%m-%d %H:%M"));
            }
            Ok(())
        }
        MoodSubcommand::Record { mood } => print_json(&board.record(mood)),
    }
}

fn run_forum(forum: ForumCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut board = CareerForum::open(store);
    match forum.command {
        ForumSubcommand::List => print_json(board.topics()),
        ForumSubcommand::Show { topic_id } => match board.topic(topic_id) {
            Some(topic) => print_json(topic),
            None => Err(ServiceError::NotFound { kind: "topic", id: topic_id.to_string() }.into()),
        },
        ForumSubcommand::Ask { title, body } => {
            warn_on_crisis(&format!("{title}\n{body}"));
            print_json(&board.create_topic(&title, &body)?)
        }
        ForumSubcommand::Reply { topic_id, content } => {
            warn_on_crisis(&content);
            print_json(&board.reply(topic_id, &content)?)
        }
    }
}

fn run_quiz(quiz: QuizCommand) -> Result<(), CliError> {
    match quiz.command {
        QuizSubcommand::Questions => {
            for (i, question) in QUESTIONS.iter().enumerate() {
                println!("{}. [{}] {}", i + 1, question.dimension, question.text);
            }
            Ok(())
        }
        QuizSubcommand::Submit { checked } => {
            let mut sheet = QuizSheet::new();
            for number in checked {
                sheet.set(question_index(number)?, true)?;
            }
            let result = sheet.submit();
            println!("Mã nổi trội: {}", result.code);
            for suggestion in result.suggestions() {
                println!("  • {suggestion}");
            }
            Ok(())
        }
    }
}

/// Map a 1-based question number to its index.
fn question_index(number: usize) -> Result<usize, ServiceError> {
    let len = QUESTIONS.len();
    match number.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(ServiceError::OutOfRange { field: "questions", index: number, len }),
    }
}

fn run_profile(profile: ProfileCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut editor = ProfileEditor::open(store);
    match profile.command {
        ProfileSubcommand::Show => return print_json(editor.saved()),
        ProfileSubcommand::Set { name, grade, bio, avatar } => {
            if let Some(name) = name {
                editor.set_name(&name);
            }
            if let Some(grade) = grade {
                editor.set_grade(&grade);
            }
            if let Some(bio) = bio {
                editor.set_bio(&bio);
            }
            if let Some(avatar) = avatar {
                editor.set_avatar(&avatar);
            }
        }
        ProfileSubcommand::AddInterest { tag } => editor.add_interest(&tag)?,
        ProfileSubcommand::RemoveInterest { index } => {
            editor.remove_interest(index)?;
        }
        ProfileSubcommand::AddAchievement { text } => editor.add_achievement(&text)?,
        ProfileSubcommand::RemoveAchievement { index } => {
            editor.remove_achievement(index)?;
        }
        ProfileSubcommand::AddProject { title, link, desc } => {
            editor.add_project(&title, &link, &desc)?;
        }
        ProfileSubcommand::RemoveProject { index } => {
            editor.remove_project(index)?;
        }
    }
    editor.save();
    print_json(editor.saved())
}

fn run_groups(groups: GroupsCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut board = StudyGroups::open(store);
    match groups.command {
        GroupsSubcommand::List => print_json(board.list()),
        GroupsSubcommand::Create { name, desc, join } => {
            print_json(&board.create(&name, &desc, &join)?)
        }
        GroupsSubcommand::Join { group_id, link } => {
            match (board.join(group_id)?, link) {
                (JoinAction::Open(url), _) => println!("{url}"),
                (JoinAction::NeedsLink, Some(link)) => {
                    println!("{}", board.set_join_link(group_id, &link)?);
                }
                (JoinAction::NeedsLink, None) => {
                    println!("this group has no join link yet; pass --link to add one");
                }
            }
            Ok(())
        }
        GroupsSubcommand::Invite { group_id } => {
            println!("{}", board.invite_link(group_id)?);
            Ok(())
        }
    }
}

fn run_events(events: EventsCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut board = EventBoard::open(store);
    match events.command {
        EventsSubcommand::List => {
            for event in board.list() {
                println!(
                    "{}  {}  ({})",
                    event.time.format("%Y-%m-%d %H:%M"),
                    event.title,
                    event.host_label()
                );
                if !event.link.is_empty() {
                    println!("    {}", event.link);
                }
            }
            Ok(())
        }
        EventsSubcommand::Create { title, time, host, link } => {
            print_json(&board.create(&title, &time, &host, &link)?)
        }
    }
}

fn run_badges(badges: BadgesCommand, store: Arc<dyn KeyValueStore>) -> Result<(), CliError> {
    let mut shelf = BadgeShelf::open(store);
    match badges.command {
        BadgesSubcommand::List => print_json(shelf.badges()),
        BadgesSubcommand::Grant { name, desc } => print_json(&shelf.grant(&name, &desc)?),
        BadgesSubcommand::Kindness => print_json(&shelf.grant_kindness()),
    }
}

fn run_reminders(
    reminders: RemindersCommand,
    store: Arc<dyn KeyValueStore>,
) -> Result<(), CliError> {
    let mut list = Reminders::open(store);
    match reminders.command {
        RemindersSubcommand::List => {
            for item in list.items() {
                println!("[{}] {}  {}", if item.done { "x" } else { " " }, item.text, item.id);
            }
            Ok(())
        }
        RemindersSubcommand::Add { text } => print_json(&list.add(&text)?),
        RemindersSubcommand::Toggle { reminder_id } => {
            let done = list.toggle(reminder_id)?;
            println!("{}", if done { "done" } else { "not done" });
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
