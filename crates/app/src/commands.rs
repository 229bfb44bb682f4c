//! Subcommand implementations.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use rehearse_core::ThemeId;
use services::{Library, SessionView, StudySession};

use crate::cli::{CheckArgs, StudyArgs, ThemesArgs};
use crate::summary::print_report;

/// Runs the integrity checker. Returns whether the dataset is valid.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let library = open_library(&args.dataset)?;
    let report = library.check();
    info!(
        questions = report.stats.question_count,
        themes = report.stats.theme_count,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "integrity pass finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, library.catalog(), args.top);
    }
    Ok(report.is_valid())
}

/// Lists themes with question counts, honoring an optional tag filter.
pub fn run_themes(args: &ThemesArgs) -> Result<()> {
    let library = open_library(&args.dataset)?;
    let mut session = library.start_session();
    session.set_tag_filter(args.tags.clone());

    let themes = session.themes();
    if themes.is_empty() {
        println!("no themes match the current filter");
        return Ok(());
    }
    for theme in themes {
        println!(
            "{:>6}  {} ({} questions)",
            theme.id.to_string(),
            theme.name,
            theme.question_count
        );
    }
    Ok(())
}

/// Line-oriented interactive study loop.
pub fn run_study(args: &StudyArgs) -> Result<()> {
    let library = open_library(&args.dataset)?;
    let mut session = library.start_session();
    session.set_tag_filter(args.tags.clone());

    println!("rehearse - pick a theme, reveal answers, move on");
    print_themes(&session);
    print_help();

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        out.write_all(b"> ")?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !handle_command(&mut session, line.trim()) {
            break;
        }
    }
    Ok(())
}

fn open_library(path: &std::path::Path) -> Result<Library> {
    let library =
        Library::open(path).with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        path = %path.display(),
        questions = library.catalog().question_count(),
        themes = library.catalog().theme_count(),
        "dataset loaded"
    );
    Ok(library)
}

/// Returns false when the loop should end.
fn handle_command(session: &mut StudySession, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "" => {}
        "q" | "quit" | "exit" => return false,
        "h" | "help" => print_help(),
        "t" | "themes" => print_themes(session),
        "s" | "select" => {
            if rest.is_empty() {
                println!("usage: select <theme-id>");
            } else {
                let id = parse_theme_id(rest);
                match session.select_theme(&id) {
                    Ok(change) => {
                        debug!(?change, "theme selected");
                        render(&session.view());
                    }
                    Err(error) => println!("{error}"),
                }
            }
        }
        "r" | "reveal" => match session.reveal_answer() {
            Ok(_) => render(&session.view()),
            Err(error) => println!("{error}"),
        },
        "n" | "next" => match session.next_question() {
            Ok(change) => {
                debug!(?change, "question advanced");
                render(&session.view());
            }
            Err(error) => println!("{error}"),
        },
        "tags" => {
            let labels: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_owned)
                .collect();
            session.set_tag_filter(labels);
            if session.tag_filter().is_empty() {
                println!("filter cleared");
            } else {
                println!("filter: {}", session.tag_filter().join(", "));
            }
            print_themes(session);
        }
        other => println!("unknown command '{other}' (try 'help')"),
    }
    true
}

fn parse_theme_id(token: &str) -> ThemeId {
    match token.parse::<i64>() {
        Ok(n) => ThemeId::num(n),
        Err(_) => ThemeId::text(token),
    }
}

fn print_themes(session: &StudySession) {
    let themes = session.themes();
    if themes.is_empty() {
        println!("no themes match the current filter");
        return;
    }
    println!();
    for theme in themes {
        println!(
            "  {:>6}  {} ({} questions)",
            theme.id.to_string(),
            theme.name,
            theme.question_count
        );
    }
    println!();
}

fn print_help() {
    println!("commands:");
    println!("  select <id>   activate a theme");
    println!("  reveal        show the current answer");
    println!("  next          jump to a different random question");
    println!("  themes        list themes under the current filter");
    println!("  tags a,b      set the category filter (empty clears it)");
    println!("  quit          leave");
}

fn render(view: &SessionView<'_>) {
    match view {
        SessionView::Idle => println!("select a theme to begin"),
        SessionView::Empty { theme } => {
            println!("no questions available in '{theme}' with the current filter");
        }
        SessionView::Card {
            theme,
            prompt,
            answer,
            position,
            total,
        } => {
            println!();
            println!("[{theme}] question {position} of {total}");
            println!("  {prompt}");
            if let Some(answer) = answer {
                println!("  -> {answer}");
            }
        }
    }
}
