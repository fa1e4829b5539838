use anyhow::Result;
use helpcenter_core::TransitionRequest;
use helpcenter_widget::{TransitionOutcome, Widget};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::output::{content_text, overlay_text};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Click the n-th item of the content region (1-based).
    Click(usize),
    /// Click the n-th search result row (1-based).
    ClickResult(usize),
    Query(String),
    Home,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Some(Command::Quit),
        "h" | "home" => return Some(Command::Home),
        _ => {},
    }
    if let Some(query) = line.strip_prefix('/') {
        return Some(Command::Query(query.to_owned()));
    }
    if let Some(n) = line.strip_prefix('r') {
        return n.parse().ok().filter(|n| *n > 0).map(Command::ClickResult);
    }
    line.parse().ok().filter(|n| *n > 0).map(Command::Click)
}

const USAGE: &str = "commands: <n> open item, /<text> search, r<n> open result, h home, q quit";

pub(crate) async fn run(widget: &Widget) -> Result<()> {
    widget.connect().await;
    show(widget);
    println!("{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            println!("{USAGE}");
            continue;
        };
        let outcome = match command {
            Command::Quit => break,
            Command::Home => Some(widget.navigate(TransitionRequest::Home).await),
            Command::Query(text) => {
                widget.handle_query(&text);
                widget.wait_for_search().await;
                print!("{}", overlay_text(&widget.overlay()));
                continue;
            },
            Command::Click(n) => {
                let Some(id) = widget.content().affordances.get(n - 1).map(|a| a.id) else {
                    println!("no item {n}");
                    continue;
                };
                widget.click(&[id]).await
            },
            Command::ClickResult(n) => {
                let Some(id) = widget.overlay().rendered.affordances.get(n - 1).map(|a| a.id)
                else {
                    println!("no result r{n}");
                    continue;
                };
                widget.click_result(&[id]).await
            },
        };
        if outcome == Some(TransitionOutcome::Applied) {
            show(widget);
        }
    }
    Ok(())
}

fn show(widget: &Widget) {
    print!("{}", content_text(widget.view_state().as_ref(), &widget.content()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("3"), Some(Command::Click(3)));
        assert_eq!(parse_command(" r2 "), Some(Command::ClickResult(2)));
        assert_eq!(parse_command("/invoice"), Some(Command::Query("invoice".to_owned())));
        assert_eq!(parse_command("/"), Some(Command::Query(String::new())));
        assert_eq!(parse_command("h"), Some(Command::Home));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_garbage() {
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("r0"), None);
        assert_eq!(parse_command("rx"), None);
        assert_eq!(parse_command("open"), None);
    }
}
