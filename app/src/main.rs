//! Line-oriented front end for the to-do manager.
//!
//! Maps commands to controller intents and prints the visible page.
//! `TODO_API_URL` selects the transport: unset runs against an in-process
//! store over the blob file named by `TODO_STORE_PATH`; set, requests go
//! over HTTP to a live `todo-store` server.

use std::io::{self, BufRead, Write};

use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};
use todo_app::{view, Controller, HttpTransport, StoreTransport};
use todo_client::{Todo, TodoApi, Transport};
use todo_store::{FileStorage, TodoStore};

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (base_url, transport): (String, Box<dyn Transport>) = match std::env::var("TODO_API_URL") {
        Ok(url) => {
            tracing::info!(%url, "using live server");
            (url, Box::new(HttpTransport::new()))
        }
        Err(_) => {
            let path =
                std::env::var("TODO_STORE_PATH").unwrap_or_else(|_| "todos.json".to_string());
            tracing::info!(store = %path, "using in-process store");
            let store = TodoStore::new(FileStorage::new(path));
            (String::new(), Box::new(StoreTransport::new(store)))
        }
    };

    let mut controller = Controller::new(TodoApi::new(&base_url, transport));
    controller.set_input_deadline(Local::now().timestamp_millis());
    if let Err(err) = controller.refresh() {
        eprintln!("initial load failed: {err}");
    }

    print_help();
    render(&controller);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("read failed: {err}");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        if matches!(command, "quit" | "exit") {
            break;
        }
        dispatch(&mut controller, command, rest);
    }
}

fn dispatch(controller: &mut Controller<Box<dyn Transport>>, command: &str, rest: &str) {
    match command {
        "help" => print_help(),
        "show" => render(controller),
        "refresh" => {
            report(controller.refresh());
            render(controller);
        }
        "text" => controller.set_input_text(rest),
        "deadline" => match parse_deadline(rest) {
            Some(ms) => controller.set_input_deadline(ms),
            None => eprintln!("expected {DEADLINE_FORMAT}"),
        },
        "add" => {
            report(controller.add().map(|_| ()));
            render(controller);
        }
        "search" => {
            controller.set_search(rest);
            render(controller);
        }
        "page" => match rest.parse() {
            Ok(page) => {
                controller.set_page(page);
                render(controller);
            }
            Err(_) => eprintln!("expected a page number"),
        },
        "size" => match rest.parse() {
            Ok(size) => {
                if controller.set_page_size(size) {
                    render(controller);
                } else {
                    eprintln!("offered sizes: {:?}", view::PAGE_SIZES);
                }
            }
            Err(_) => eprintln!("offered sizes: {:?}", view::PAGE_SIZES),
        },
        "select" => match rest.parse() {
            Ok(id) => {
                controller.toggle_select(id);
                render(controller);
            }
            Err(_) => eprintln!("expected a record id"),
        },
        "edit" => match controller.enter_edit() {
            Ok(true) => render_edit(controller.edit()),
            Ok(false) => eprintln!("select exactly one record first"),
            Err(err) => eprintln!("error: {err}"),
        },
        "etext" => {
            controller.set_edit_text(rest);
            render_edit(controller.edit());
        }
        "edone" => {
            controller.toggle_edit_done();
            render_edit(controller.edit());
        }
        "edeadline" => match parse_deadline(rest) {
            Some(ms) => {
                controller.set_edit_deadline(ms);
                render_edit(controller.edit());
            }
            None => eprintln!("expected {DEADLINE_FORMAT}"),
        },
        "save" => {
            report(controller.finish_edit());
            render(controller);
        }
        "discard" => controller.discard_edit(),
        "delete" => {
            match controller.remove_selected() {
                Ok(report) => {
                    if !report.failed.is_empty() {
                        eprintln!("{} of the deletes failed:", report.failed.len());
                        for (id, err) in &report.failed {
                            eprintln!("  {id}: {err}");
                        }
                    }
                }
                Err(err) => eprintln!("error: {err}"),
            }
            render(controller);
        }
        other => eprintln!("unknown command: {other} (try `help`)"),
    }
}

fn report(result: Result<(), todo_client::ApiError>) {
    if let Err(err) = result {
        eprintln!("error: {err}");
    }
}

fn render(controller: &Controller<Box<dyn Transport>>) {
    let now = Local::now().timestamp_millis();
    let page = controller.visible();
    for todo in &page.items {
        let selected = if controller.selected().contains(&todo.id) {
            '*'
        } else {
            ' '
        };
        let done = if todo.done { 'x' } else { ' ' };
        let urgent = if view::is_deadline_coming(todo.deadline, now) {
            " !"
        } else {
            "  "
        };
        println!(
            "{selected}{id:>4} [{done}] {deadline}{urgent} {text}",
            id = todo.id,
            deadline = format_deadline(todo.deadline),
            text = todo.text,
        );
    }
    println!(
        "page {}/{} ({} matching, size {})",
        page.page,
        page.total_pages,
        page.filtered_count,
        controller.page_size(),
    );
}

fn render_edit(edit: Option<&Todo>) {
    match edit {
        Some(todo) => println!(
            "editing {}: [{}] {} {}",
            todo.id,
            if todo.done { 'x' } else { ' ' },
            format_deadline(todo.deadline),
            todo.text,
        ),
        None => println!("not editing"),
    }
}

fn parse_deadline(input: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(input, DEADLINE_FORMAT).ok()?;
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.timestamp_millis()),
        LocalResult::None => None,
    }
}

fn format_deadline(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) => dt.format(DEADLINE_FORMAT).to_string(),
        _ => ms.to_string(),
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         show | refresh\n  \
         text <text> | deadline <{DEADLINE_FORMAT}> | add\n  \
         search <text> | page <n> | size <{sizes:?}>\n  \
         select <id> | delete\n  \
         edit | etext <text> | edone | edeadline <...> | save | discard\n  \
         quit",
        sizes = view::PAGE_SIZES,
    );
}
