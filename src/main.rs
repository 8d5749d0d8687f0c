use clap::{arg, command, value_parser, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};
use itertools::Itertools;
use log::*;
use std::path::PathBuf;
use vue_primer::app::App;
use vue_primer::config::{AppConfig, ConfigPaths, DEFAULT_LOG_LEVEL};
use vue_primer::logger::setup_logger;
use vue_primer::quiz::{QuizKind, TopicQuiz};
use vue_primer::session::Session;
use vue_primer::start_ui;
use vue_primer::theme::ThemePreference;

const WRAP_WIDTH: usize = 80;

fn cli() -> Command {
    command!()
        .arg(
            arg!(-c --config <FILE> "Use a specific config file")
                .value_parser(value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or change the appearance preference")
                .subcommand(Command::new("show").about("Print the current preference"))
                .subcommand(Command::new("toggle").about("Switch between dark and light"))
                .subcommand(
                    Command::new("set").about("Set the preference").arg(
                        arg!(<PREFERENCE> "light or dark")
                            .value_parser(value_parser!(ThemePreference)),
                    ),
                ),
        )
        .subcommand(
            Command::new("quiz")
                .about("Browse quizzes without the terminal interface")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List quiz keys and titles")
                        .arg(arg!(--cards "List lesson card quizzes instead of topics")),
                )
                .subcommand(
                    Command::new("show")
                        .about("Print the questions of a quiz")
                        .arg(arg!(<KEY> "Quiz key, e.g. basics or state-ref"))
                        .arg(arg!(--json "Print as JSON")),
                ),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    let config_file = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let paths = ConfigPaths::get_or_build(config_file)?;
    let config = AppConfig::load(&paths.config_file_path)?;
    let log_level = config.log_level_filter();
    setup_logger(
        *log_level.as_ref().unwrap_or(&DEFAULT_LOG_LEVEL),
        &paths.log_file_path,
    )?;
    if let Err(e) = log_level {
        warn!(
            "Unknown log level '{}' ({}), using {}",
            config.log_level, e, DEFAULT_LOG_LEVEL
        );
    }
    debug!("Using config {:?}", config);

    let mut session = Session::new(&config, &paths);

    match matches.subcommand() {
        Some(("theme", sub)) => run_theme_command(&mut session, sub),
        Some(("quiz", sub)) => run_quiz_command(&session, sub),
        _ => {
            let mut app = App::new(session);
            start_ui(&mut app).await
        }
    }
}

fn run_theme_command(session: &mut Session, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("toggle", _)) => session.theme.toggle_theme(),
        Some(("set", sub)) => {
            let preference = sub
                .get_one::<ThemePreference>("PREFERENCE")
                .copied()
                .ok_or_else(|| eyre!("Missing preference"))?;
            session.theme.set_theme(preference);
        }
        _ => {}
    }
    println!("{}", session.theme.theme());
    Ok(())
}

fn run_quiz_command(session: &Session, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            let kind = if sub.get_flag("cards") {
                QuizKind::Card
            } else {
                QuizKind::Topic
            };
            for quiz in session.catalog.quizzes(kind) {
                println!("{:<32} {} ({})", quiz.key, quiz.title, quiz.len());
            }
            Ok(())
        }
        Some(("show", sub)) => {
            let key = sub
                .get_one::<String>("KEY")
                .ok_or_else(|| eyre!("Missing quiz key"))?;
            let (_, quiz) = session
                .catalog
                .find(key)
                .ok_or_else(|| eyre!("No quiz named '{}'", key))?;
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(quiz)?);
            } else {
                println!("{}", format_quiz(quiz));
            }
            Ok(())
        }
        _ => Err(eyre!("Unknown quiz command")),
    }
}

fn format_quiz(quiz: &TopicQuiz) -> String {
    let mut questions = quiz.questions.iter().map(|question| {
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mark = if question.is_correct(i) { '*' } else { ' ' };
                format!("  {mark} {}. {option}", i + 1)
            })
            .join("\n");
        let explanation = textwrap::indent(
            &textwrap::fill(&question.explanation, WRAP_WIDTH - 4),
            "    ",
        );
        format!(
            "{}. {}\n{options}\n{explanation}",
            question.id,
            textwrap::fill(&question.question, WRAP_WIDTH)
        )
    });
    format!("{}\n\n{}", quiz.title, questions.join("\n\n"))
}
