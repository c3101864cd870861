//! Line-oriented driver for the timewheel runtime.
//!
//! Arguments are `key=value` pairs overriding [`Config`] fields;
//! `config=<path>` loads a TOML file first. Commands are read from stdin, one
//! per line, and the rendered view is printed whenever it changes.
//!
//! # Commands
//!
//! ```text
//! go <location>      enter a location, e.g. `go /?popup=open`
//! hover <id>|leave   move over a map region / leave the map
//! move <x> <y>       pointer position for the tooltip
//! click <id>         select a map region
//! year <text>        type a year (empty clears)
//! scroll up|down     step the year
//! drag <degrees>     rotate the time wheel
//! release            let go of the wheel
//! spin               wheel "go" gesture: release and search
//! topic <name>|all   choose a topic
//! loc <text>         type into the location picker
//! locs               open the location picker
//! pick <name>        choose a location
//! type <term>        edit the search term
//! accept <n>         take suggestion n
//! focus              focus the search box
//! outside            pointer down outside every dropdown
//! enter              submit the search term
//! find               search events with the current filters
//! open | dismiss     open / close the results dialog
//! event <n>          open result n
//! listen             toggle narration
//! done               narration finished
//! back               leave the detail page
//! ask <question>     ask the assistant
//! quit
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use timewheel::app::selection::{SelectionField, SelectionState};
use timewheel::app::Surface;
use timewheel::observability::init_tracing;
use timewheel::{ui, Config, Event, Runtime};
use tokio::io::{AsyncBufReadExt, BufReader};

enum Command {
    Dispatch(Event),
    Navigate(String),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match verb {
        "quit" | "exit" => return Some(Command::Quit),
        "go" => return Some(Command::Navigate(rest.to_string())),
        "hover" => Event::RegionHovered(Some(rest.to_string())),
        "leave" => Event::RegionHovered(None),
        "move" => {
            let (x, y) = rest.split_once(' ')?;
            Event::PointerMoved {
                x: x.trim().parse().ok()?,
                y: y.trim().parse().ok()?,
            }
        }
        "click" => Event::RegionClicked(rest.to_string()),
        "year" => Event::YearEntered(rest.to_string()),
        "scroll" => Event::YearScrolled {
            delta: if rest == "down" { -1 } else { 1 },
            at: Instant::now(),
        },
        "drag" => Event::WheelDragged {
            degrees: rest.parse().ok()?,
        },
        "release" => Event::WheelReleased,
        "spin" => Event::WheelConfirmed,
        "topic" => Event::TopicChosen((rest != "all" && !rest.is_empty()).then(|| rest.to_string())),
        "loc" => Event::LocationTyped(rest.to_string()),
        "locs" => Event::LocationFocused,
        "pick" => Event::LocationChosen(rest.to_string()),
        "type" => Event::SearchTermChanged(rest.to_string()),
        "accept" => Event::SuggestionAccepted(rest.parse().ok()?),
        "focus" => Event::SearchFocused,
        "outside" => Event::PointerDown(Surface::Background),
        "enter" => Event::SearchSubmitted,
        "find" => Event::FindEvents,
        "open" => Event::OpenResults,
        "dismiss" => Event::DismissResults,
        "event" => Event::EventChosen(rest.parse().ok()?),
        "listen" => Event::NarrationToggled,
        "done" => Event::NarrationFinished,
        "back" => Event::DetailBack,
        "ask" => Event::ChatSubmitted(rest.to_string()),
        _ => return None,
    };
    Some(Command::Dispatch(event))
}

fn load_config() -> Result<Config, timewheel::TimewheelError> {
    let args: BTreeMap<String, String> = std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        })
        .collect();

    let base = match args.get("config") {
        Some(path) => Config::from_toml_file(Path::new(path))?,
        None => Config::default(),
    };
    Ok(base.merge(&args))
}

fn print_view(runtime: &Runtime) {
    println!("@ {}", runtime.location());
    print!("{}", ui::render(&runtime.viewmodel()));
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_tracing(&config);

    let mut runtime = Runtime::from_config(&config);
    runtime.subscribe(Box::new(|state: &SelectionState, field: SelectionField| {
        tracing::info!(
            field = ?field,
            region = ?state.region,
            year = ?state.year,
            topic = ?state.topic,
            "selection changed"
        );
    }));

    runtime.navigate("/")?;
    print_view(&runtime);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let redraw = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Navigate(location)) => match runtime.navigate(&location) {
                        Ok(redraw) => redraw,
                        Err(e) => {
                            eprintln!("{e}");
                            false
                        }
                    },
                    Some(Command::Dispatch(event)) => runtime.dispatch(event)?,
                    None => {
                        if !line.trim().is_empty() {
                            eprintln!("unknown command: {}", line.trim());
                        }
                        false
                    }
                }
            }
            Some(event) = runtime.completion() => runtime.dispatch(event)?,
        };

        if redraw {
            print_view(&runtime);
        }
    }

    Ok(())
}
