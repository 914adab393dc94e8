//! Line-oriented event loop: one command per line, full re-render after each.

use shelf_client::ProductSource;
use shelf_view::render::text::screen_text;
use shelf_view::{Controller, UiEvent};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "commands: search <text> | sort title|price | size <n> | prev | next | page <n> | reload | quit";

/// Loads the catalog, then applies commands from stdin until EOF or `quit`.
///
/// Unparseable commands are reported on stderr and skipped.
pub(crate) async fn run_browse<S: ProductSource>(source: S) -> anyhow::Result<()> {
    let mut controller = Controller::new(source);
    let mut stdout = tokio::io::stdout();

    let screen = controller.handle(UiEvent::Load).await;
    stdout.write_all(screen_text(&screen).as_bytes()).await?;
    stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }
        if line.is_empty() || line == "help" {
            stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
            stdout.flush().await?;
            continue;
        }
        match line.parse::<UiEvent>() {
            Ok(event) => {
                let screen = controller.handle(event).await;
                stdout.write_all(screen_text(&screen).as_bytes()).await?;
                stdout.flush().await?;
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}
