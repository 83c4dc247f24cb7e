mod effects;
mod persistence;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use newsreader_core::{update, AppState, AppViewModel, Category, Msg};
use reader_logging::LogDestination;

use effects::EffectRunner;

fn main() {
    reader_logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (line_tx, line_rx) = mpsc::channel::<String>();
    let runner = EffectRunner::new(msg_tx);

    // Blocking stdin reader; the dispatch loop below polls both channels.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut state = AppState::new();
    let mut last_view = AppViewModel::default();

    dispatch(&mut state, Msg::RestoreFavorites(runner.load_favorites()), &runner);
    dispatch(&mut state, Msg::Refresh, &runner);
    render_if_dirty(&mut state, &mut last_view);
    print_help();

    loop {
        let mut saw_message = false;
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner);
            saw_message = true;
        }

        let mut quit = false;
        while let Ok(line) = line_rx.try_recv() {
            saw_message = true;
            if !handle_line(line.trim(), &mut state, &last_view, &runner) {
                quit = true;
            }
        }

        render_if_dirty(&mut state, &mut last_view);
        if quit {
            break;
        }
        if !saw_message {
            thread::sleep(Duration::from_millis(20));
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.run(effects);
}

fn render_if_dirty(state: &mut AppState, last_view: &mut AppViewModel) {
    if state.consume_dirty() {
        *last_view = state.view();
        render(last_view);
    }
}

fn render(view: &AppViewModel) {
    let category = view.category.map(|c| c.as_str()).unwrap_or("all");
    println!();
    println!("Top headlines [{category}]");
    if view.loading {
        println!("  loading...");
    }
    if let Some(error) = &view.error {
        println!("  error: {error} (try `refresh`)");
    }
    if view.articles.is_empty() && !view.loading && view.error.is_none() {
        println!("  no articles");
    }
    for (index, row) in view.articles.iter().enumerate() {
        let marker = if row.favorite { "*" } else { " " };
        println!("{:>3} {marker} {}", index + 1, row.title);
        if let Some(description) = &row.description {
            println!("      {description}");
        }
    }
}

fn print_favorites(view: &AppViewModel) {
    if view.favorites.is_empty() {
        println!("No favorites yet. Use `fav <row>` to add one.");
        return;
    }
    println!("Favorites:");
    for row in &view.favorites {
        println!("  * {} ({})", row.title, row.url);
    }
}

fn print_help() {
    println!("commands:");
    println!("  refresh              reload the current feed");
    println!("  category <name|all>  filter headlines by category");
    println!("  fav <row>            toggle favorite for a feed row");
    println!("  open <row>           open a feed row in the browser");
    println!("  favs                 list favorites");
    println!("  quit                 exit");
}

/// Returns false when the user asked to quit.
fn handle_line(
    line: &str,
    state: &mut AppState,
    last_view: &AppViewModel,
    runner: &EffectRunner,
) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => true,
        Some("quit") | Some("q") => false,
        Some("help") => {
            print_help();
            true
        }
        Some("refresh") | Some("r") => {
            dispatch(state, Msg::Refresh, runner);
            true
        }
        Some("category") | Some("cat") => {
            match parts.next() {
                None => println!("usage: category <name|all>"),
                Some("all") => dispatch(state, Msg::CategorySelected(None), runner),
                Some(raw) => match raw.parse::<Category>() {
                    Ok(category) => dispatch(state, Msg::CategorySelected(Some(category)), runner),
                    Err(err) => println!("{err} (categories: business, entertainment, health, science, sports, technology)"),
                },
            }
            true
        }
        Some("fav") => {
            if let Some(id) = feed_row_id(parts.next(), last_view) {
                dispatch(state, Msg::ToggleFavorite(id), runner);
            }
            true
        }
        Some("open") => {
            if let Some(id) = feed_row_id(parts.next(), last_view) {
                dispatch(state, Msg::OpenArticle(id), runner);
            }
            true
        }
        Some("favs") => {
            print_favorites(last_view);
            true
        }
        Some(other) => {
            println!("unknown command: {other} (try `help`)");
            true
        }
    }
}

/// Resolve a 1-based feed row number against the last rendered view.
fn feed_row_id(arg: Option<&str>, view: &AppViewModel) -> Option<String> {
    let Some(arg) = arg else {
        println!("usage: fav|open <row>");
        return None;
    };
    let Ok(index) = arg.parse::<usize>() else {
        println!("not a row number: {arg}");
        return None;
    };
    match index.checked_sub(1).and_then(|i| view.articles.get(i)) {
        Some(row) => Some(row.id.clone()),
        None => {
            println!("no article at row {index}");
            None
        }
    }
}
