//! Runs CLI commands against a board session
//!
//! Each command replays the UI gesture it stands for (open dialog, type,
//! press Enter; drag, hover, drop) so the CLI goes through the same event
//! handling as any other front end.

use crate::cli::{Cli, Commands};
use anyhow::{bail, Context, Result};
use taskboard::{
    BoardConfig, BoardSession, CardId, FileStorage, Key, ListId, NullRenderer, Renderer,
    TextRenderer, UiEvent,
};

type CliSession = BoardSession<FileStorage, Box<dyn Renderer>>;

/// Execute the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let config = BoardConfig::resolve(cli.dir.clone());
    let renderer: Box<dyn Renderer> = if cli.json {
        Box::new(NullRenderer)
    } else {
        Box::new(TextRenderer::stdout())
    };
    let mut session: CliSession = BoardSession::open(config.storage(), renderer)
        .with_context(|| format!("failed to open board in {}", config.data_dir.display()))?;

    match cli.command.as_ref().unwrap_or(&Commands::Show) {
        Commands::Show => {
            if !cli.json {
                session.render();
            }
        }
        Commands::AddList { title } => add_list(&mut session, title)?,
        Commands::AddCard { list, text } => add_card(&mut session, list, text)?,
        Commands::Move { card, list } => move_card(&mut session, card, list)?,
        Commands::Delete { card, yes } => delete_card(&mut session, card, *yes)?,
        Commands::Reset => session.reset().context("failed to reset board")?,
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(session.board())?);
    }
    Ok(())
}

fn add_list(session: &mut CliSession, title: &str) -> Result<()> {
    session.handle(UiEvent::OpenListDialog)?;
    session.handle(UiEvent::Input(title.to_string()))?;
    if session.handle(UiEvent::Key(Key::Enter))?.is_none() {
        session.handle(UiEvent::Key(Key::Escape))?;
        bail!("list title must not be empty");
    }
    Ok(())
}

fn add_card(session: &mut CliSession, list: &str, text: &str) -> Result<()> {
    session
        .handle(UiEvent::OpenCardDialog(list.into()))
        .with_context(|| format!("cannot add a card to '{}'", list))?;
    session.handle(UiEvent::Input(text.to_string()))?;
    if session.handle(UiEvent::Key(Key::Enter))?.is_none() {
        session.handle(UiEvent::Key(Key::Escape))?;
        bail!("card text must not be empty");
    }
    Ok(())
}

fn move_card(session: &mut CliSession, card: &str, list: &str) -> Result<()> {
    let card_id: CardId = card.into();
    let target: ListId = list.into();
    let Some(source) = session.store().find_list_containing(&card_id) else {
        bail!("card not found: {}", card);
    };
    if session.board().list(&target).is_none() {
        bail!("list not found: {}", list);
    }
    if source == target {
        tracing::info!(%card, %list, "card already in target list");
        eprintln!("Card {} is already in {}", card, list);
        return Ok(());
    }

    session.handle(UiEvent::DragStart(card_id))?;
    session.handle(UiEvent::DragEnter(target.clone()))?;
    session.handle(UiEvent::Drop(target))?;
    session.handle(UiEvent::DragEnd)?;
    Ok(())
}

fn delete_card(session: &mut CliSession, card: &str, yes: bool) -> Result<()> {
    let card_id: CardId = card.into();
    let Some(existing) = session.board().card(&card_id) else {
        bail!("card not found: {}", card);
    };

    let confirmed = yes
        || dialoguer::Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", existing.text))
            .default(false)
            .interact()
            .context("failed to read confirmation")?;

    session.handle(UiEvent::DeleteCard {
        card: card_id,
        confirmed,
    })?;
    if !confirmed {
        eprintln!("Nothing deleted");
    }
    Ok(())
}
