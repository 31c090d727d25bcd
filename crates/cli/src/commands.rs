// FILE: crates/cli/src/commands.rs

use anyhow::{bail, Context, Result};
use bookcase_core::Isbn;
use bookcase_forms::{FieldStatus, AUTHOR, PAGES, READ, TITLE};
use bookcase_metadata::{LookupRequest, MetadataSource};
use bookcase_session::{
    render_html, CardView, Controller, Effect, Event, ModalTarget, NotifyLevel,
};
use console::style;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Entry form prompts, in the order the fields appear
const PROMPTS: [(&str, &str); 4] = [
    (TITLE, "Title"),
    (AUTHOR, "Author"),
    (PAGES, "Pages (blank to use the published count)"),
    (READ, "Read it? [y/N]"),
];

/// A line typed at the shell prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Toggle(Isbn),
    Remove(Isbn),
    List,
    Stats,
    Help,
    Quit,
    Empty,
}

/// Parses one shell line
pub fn parse_command(line: &str) -> Result<ShellCommand> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(ShellCommand::Empty);
    };
    let argument = parts.next();

    let command = match (name.to_ascii_lowercase().as_str(), argument) {
        ("add" | "new", None) => ShellCommand::Add,
        ("toggle" | "read", Some(isbn)) => ShellCommand::Toggle(Isbn::new(isbn)),
        ("remove" | "rm", Some(isbn)) => ShellCommand::Remove(Isbn::new(isbn)),
        ("toggle" | "read" | "remove" | "rm", None) => bail!("'{}' needs an ISBN", name),
        ("list" | "ls", None) => ShellCommand::List,
        ("stats", None) => ShellCommand::Stats,
        ("help" | "?", None) => ShellCommand::Help,
        ("quit" | "exit" | "q", None) => ShellCommand::Quit,
        (_, Some(_)) if is_known(name) => bail!("'{}' takes no arguments", name),
        _ => bail!("Unknown command '{}'. Type 'help' for a list.", name),
    };

    if parts.next().is_some() {
        bail!("Too many arguments for '{}'", name);
    }
    Ok(command)
}

fn is_known(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "add" | "new" | "list" | "ls" | "stats" | "help" | "?" | "quit" | "exit" | "q"
    )
}

/// Interactive shell hosting one tracking session
pub struct Shell<S> {
    controller: Controller<S>,
    html_path: Option<PathBuf>,
}

impl<S: MetadataSource> Shell<S> {
    pub fn new(controller: Controller<S>, html_path: Option<PathBuf>) -> Self {
        Self {
            controller,
            html_path,
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    /// Looks up the startup books as one group
    pub async fn seed<W: Write>(&mut self, requests: &[LookupRequest], out: &mut W) -> Result<()> {
        writeln!(out, "{} Looking up {} books...", style("…").dim(), requests.len())?;
        // A failed group is logged by the session and leaves the library empty
        let effects = self.controller.seed(requests).await;
        self.present(effects, out)
    }

    /// Reads commands until `quit` or end of input
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Type 'help' for commands.")?;

        loop {
            write!(out, "{} ", style("bookcase>").cyan().bold())?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(out)?;
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{} {}", style("✗").red().bold(), e)?;
                    continue;
                }
            };

            match command {
                ShellCommand::Quit => break,
                ShellCommand::Empty => {}
                ShellCommand::Help => print_help(out)?,
                ShellCommand::List => print_cards(&self.controller.session().cards(), out)?,
                ShellCommand::Stats => self.print_stats(out)?,
                ShellCommand::Add => self.add(&mut input, out).await?,
                ShellCommand::Toggle(isbn) => {
                    let effects = self.controller.dispatch(Event::CardToggle(isbn)).await;
                    self.present(effects, out)?;
                }
                ShellCommand::Remove(isbn) => {
                    let effects = self.controller.dispatch(Event::CardRemove(isbn)).await;
                    self.present(effects, out)?;
                }
            }
        }

        Ok(())
    }

    /// Opens the entry form, prompts each field until it is valid, then submits
    async fn add<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let effects = self.controller.dispatch(Event::AddTrigger).await;
        self.present(effects, out)?;

        for (field, label) in PROMPTS {
            loop {
                write!(out, "  {}: ", label)?;
                out.flush()?;

                let Some(mut value) = read_line(input)? else {
                    writeln!(out)?;
                    return self.cancel(out).await;
                };
                if field == READ && value.trim().is_empty() {
                    value = "no".to_string();
                }

                let input_effects = self
                    .controller
                    .dispatch(Event::FieldInput {
                        field: field.to_string(),
                        value,
                    })
                    .await;
                if !input_effects.is_empty() {
                    self.present(input_effects, out)?;
                    continue;
                }

                let effects = self
                    .controller
                    .dispatch(Event::FieldBlur(field.to_string()))
                    .await;
                let valid = effects.iter().all(|effect| {
                    !matches!(effect, Effect::FieldUpdated(view) if view.status == FieldStatus::Invalid)
                });
                self.present(effects, out)?;

                if valid {
                    break;
                }
            }
        }

        writeln!(out, "{} Looking up book...", style("…").dim())?;
        let effects = self.controller.dispatch(Event::Submit).await;
        self.present(effects, out)?;

        // A failed lookup leaves the form open; the shell has no use for it
        if self.controller.session().is_modal_open() {
            self.cancel(out).await?;
        }
        Ok(())
    }

    async fn cancel<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let effects = self
            .controller
            .dispatch(Event::ModalClick(ModalTarget::Backdrop))
            .await;
        self.present(effects, out)?;
        writeln!(out, "Entry closed.")?;
        Ok(())
    }

    /// Shows what the session asked for
    fn present<W: Write>(&self, effects: Vec<Effect>, out: &mut W) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::ShowModal => {
                    writeln!(out, "{}", style("New book (Ctrl-D to cancel)").bold())?;
                }
                Effect::HideModal => {}
                Effect::FieldUpdated(view) => {
                    if view.status == FieldStatus::Invalid {
                        writeln!(out, "    {} {}", style("✗").red().bold(), view.error)?;
                    }
                }
                Effect::Render(cards) => {
                    print_cards(&cards, out)?;
                    self.write_html(&cards)?;
                }
                Effect::Notify(level, message) => {
                    let marker = match level {
                        NotifyLevel::Info => style("i").cyan().bold(),
                        NotifyLevel::Warning => style("!").yellow().bold(),
                        NotifyLevel::Error => style("✗").red().bold(),
                    };
                    writeln!(out, "{} {}", marker, message)?;
                }
                Effect::FetchMetadata(request) => {
                    log::debug!("Lookup for '{}' left to the host", request.title);
                }
            }
        }
        Ok(())
    }

    fn write_html(&self, cards: &[CardView]) -> Result<()> {
        if let Some(path) = &self.html_path {
            std::fs::write(path, render_html(cards))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::debug!("Wrote {} card(s) to {}", cards.len(), path.display());
        }
        Ok(())
    }

    fn print_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let stats = self.controller.session().library().stats();

        writeln!(out, "\n{}", style("Library Statistics").bold().cyan())?;
        writeln!(out, "{}", "=".repeat(40))?;
        writeln!(out, "Total Books: {}", style(stats.total_books).bold())?;
        writeln!(out, "Read: {}", stats.read_count)?;
        writeln!(out, "Unread: {}", stats.unread_count)?;
        writeln!(out, "Pages: {} ({} read)", stats.total_pages, stats.pages_read)?;
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_cards<W: Write>(cards: &[CardView], out: &mut W) -> Result<()> {
    if cards.is_empty() {
        writeln!(out, "No books in library. Use 'add' to look one up.")?;
        return Ok(());
    }

    writeln!(out, "\n{} Books in Library", style(cards.len()).bold().cyan())?;
    writeln!(out, "{}", "=".repeat(60))?;

    for card in cards {
        let mark = if card.read {
            style("✓ read").green()
        } else {
            style("unread").dim()
        };
        writeln!(out, "{}  {}", style(&card.title).bold(), mark)?;
        writeln!(out, "  by {}", card.author)?;
        writeln!(out, "  ISBN: {} | Pages: {}", card.isbn, card.pages)?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", style("Commands").bold().cyan())?;
    writeln!(out, "  add            look up a book and add it")?;
    writeln!(out, "  toggle <isbn>  flip a book between read and unread")?;
    writeln!(out, "  remove <isbn>  remove a book")?;
    writeln!(out, "  list           show every book")?;
    writeln!(out, "  stats          show reading totals")?;
    writeln!(out, "  help           show this list")?;
    writeln!(out, "  quit           leave")?;
    Ok(())
}
