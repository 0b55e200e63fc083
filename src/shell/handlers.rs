//! Menu handlers
//!
//! A handler returns `Ok(Flow::Exit)` when input ends in the middle of a
//! dialog. Errors from the persisted file are reported here; validation,
//! position and input errors bubble up to the loop.

use log::warn;

use crate::core::error::{Error, Result};
use crate::core::models::NewItem;
use crate::core::ports::{Console, ItemRepository};

use super::render;
use super::{Flow, Shell};

/// Leave the handler with `Flow::Exit` when the console has no more input
macro_rules! or_exit {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Outcome of asking the user for a position
enum Pick {
    /// The user typed a number (not yet range-checked)
    Position(i64),
    /// There was nothing to pick from
    EmptyList,
    /// Input ended before an answer
    InputClosed,
}

impl<C: Console, P: ItemRepository> Shell<C, P> {
    pub(super) fn add(&mut self) -> Result<Flow> {
        self.say("\n=== AGGIUNGI ARTICOLO ===")?;
        let name = or_exit!(self.console.prompt("Nome articolo: "));
        let category = or_exit!(self.console.prompt("Categoria: "));
        let unit_price = or_exit!(self.prompt_price("Prezzo unitario: "));
        let quantity = or_exit!(self.console.prompt_parsed::<i64>("Quantità: "));

        self.store.add(NewItem::new(name.trim(), category.trim(), unit_price, quantity))?;
        self.ok("Articolo aggiunto!")?;
        Ok(Flow::Continue)
    }

    pub(super) fn list(&mut self) -> Result<Flow> {
        let lines =
            render::list(self.store.list(), &self.store.summary(), &self.options.currency);
        self.say_all(&lines)?;
        Ok(Flow::Continue)
    }

    pub(super) fn remove(&mut self) -> Result<Flow> {
        self.say("\n=== RIMUOVI ARTICOLO ===")?;
        let position = match self.pick_position("Quale articolo rimuovere? (numero): ")? {
            Pick::Position(position) => position,
            Pick::EmptyList => return Ok(Flow::Continue),
            Pick::InputClosed => return Ok(Flow::Exit),
        };

        let removed = self.store.remove_at(position)?;
        self.ok(&format!("\"{}\" rimosso dalla lista", removed.name()))?;
        Ok(Flow::Continue)
    }

    pub(super) fn search(&mut self) -> Result<Flow> {
        self.say("\n=== CERCA ARTICOLO ===")?;
        let query = or_exit!(self.console.prompt("Cosa cerchi? "));

        let mut lines = Vec::new();
        for (position, item) in self.store.search(query.trim()) {
            lines.extend(render::item(position, item, &self.options.currency));
            lines.push(String::new());
        }

        if lines.is_empty() {
            self.fail("Nessun articolo trovato")?;
        } else {
            self.ok("Trovato!")?;
            self.say_all(&lines)?;
        }
        Ok(Flow::Continue)
    }

    pub(super) fn toggle_purchased(&mut self) -> Result<Flow> {
        self.say("\n=== MARCA COME ACQUISTATO ===")?;
        let position = match self.pick_position("Quale articolo hai acquistato? (numero): ")? {
            Pick::Position(position) => position,
            Pick::EmptyList => return Ok(Flow::Continue),
            Pick::InputClosed => return Ok(Flow::Exit),
        };

        let item = self.store.toggle_purchased(position)?;
        let state = if item.purchased() { "acquistato" } else { "non acquistato" };
        let message = format!("\"{}\" segnato come {state}", item.name());
        self.ok(&message)?;
        Ok(Flow::Continue)
    }

    pub(super) fn totals(&mut self) -> Result<Flow> {
        let lines = render::totals(&self.store.summary(), &self.options.currency);
        self.say_all(&lines)?;
        Ok(Flow::Continue)
    }

    pub(super) fn save(&mut self) -> Result<Flow> {
        self.say("\n=== SALVA SU FILE ===")?;
        let location = self.repo.location().display().to_string();
        match self.repo.save(self.store.items()) {
            Ok(()) => {
                self.ok(&format!("Lista salvata in \"{location}\"!"))?;
                self.say(&format!("({} articoli salvati)", self.store.len()))?;
            },
            Err(e) => self.fail(&format!("Errore durante il salvataggio: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    pub(super) fn load(&mut self) -> Result<Flow> {
        self.say("\n=== CARICA DA FILE ===")?;
        let location = self.repo.location().display().to_string();
        match self.repo.load() {
            Ok(items) => {
                let count = self.store.replace(items);
                self.ok(&format!("Lista caricata da \"{location}\"!"))?;
                self.say(&format!("({count} articoli caricati)"))?;
            },
            Err(e @ Error::NotFound(_)) => {
                self.fail(&format!("Errore durante il caricamento: {e}"))?;
                self.say("(Il file potrebbe non esistere)")?;
            },
            Err(e) => self.fail(&format!("Errore durante il caricamento: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    pub(super) fn clear(&mut self) -> Result<Flow> {
        self.say("\n=== SVUOTA LISTA ===")?;
        if self.store.is_empty() {
            self.say("⚠ La lista è già vuota!")?;
            return Ok(Flow::Continue);
        }
        if !self.console.confirm("⚠ Sei sicuro di voler svuotare la lista?")? {
            self.cancel("Operazione annullata")?;
            return Ok(Flow::Continue);
        }

        let removed = self.store.clear();
        if self.options.reset_file_on_clear
            && let Err(e) = self.repo.save(&[])
        {
            warn!("list cleared in memory but {} was not reset: {e}", self.repo.location().display());
            self.ok("Lista in memoria svuotata!")?;
            self.say(&format!("⚠ Attenzione: errore durante la pulizia del file: {e}"))?;
            return Ok(Flow::Continue);
        }
        self.ok("Lista svuotata con successo!")?;
        self.say(&format!("({removed} articoli eliminati)"))?;
        Ok(Flow::Continue)
    }

    pub(super) fn exit(&mut self) -> Result<Flow> {
        if self.console.confirm("\nVuoi salvare prima di uscire?")? {
            self.save()?;
        }
        self.ok("Grazie per aver usato il gestionale!")?;
        Ok(Flow::Exit)
    }

    /// Show the compact list and ask for a position
    fn pick_position(&mut self, question: &str) -> Result<Pick> {
        if self.store.is_empty() {
            self.say(render::EMPTY_LIST)?;
            return Ok(Pick::EmptyList);
        }
        let lines: Vec<String> =
            self.store.list().map(|(position, item)| render::compact_item(position, item)).collect();
        self.say_all(&lines)?;
        self.say("")?;
        Ok(self
            .console
            .prompt_parsed::<i64>(question)?
            .map_or(Pick::InputClosed, Pick::Position))
    }

    /// Ask for a price, accepting either `.` or `,` as decimal separator
    fn prompt_price(&mut self, question: &str) -> Result<Option<f64>> {
        let Some(answer) = self.console.prompt(question)? else {
            return Ok(None);
        };
        let trimmed = answer.trim();
        trimmed
            .replace(',', ".")
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidInput(trimmed.to_string()))
    }
}
