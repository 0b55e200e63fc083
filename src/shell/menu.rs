//! Menu selections

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add an item
    Add,
    /// Show the list with a summary footer
    List,
    /// Remove an item by position
    Remove,
    /// Search by name or category
    Search,
    /// Toggle the purchased flag by position
    TogglePurchased,
    /// Show the totals panel
    Totals,
    /// Write the list to the file
    Save,
    /// Replace the list with the file contents
    Load,
    /// Empty the list
    Clear,
    /// Leave the program
    Exit,
}

impl MenuChoice {
    /// Every entry, in menu order
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::List,
        Self::Remove,
        Self::Search,
        Self::TogglePurchased,
        Self::Totals,
        Self::Save,
        Self::Load,
        Self::Clear,
        Self::Exit,
    ];

    /// Number the user types to pick this entry
    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            Self::Add => 1,
            Self::List => 2,
            Self::Remove => 3,
            Self::Search => 4,
            Self::TogglePurchased => 5,
            Self::Totals => 6,
            Self::Save => 7,
            Self::Load => 8,
            Self::Clear => 9,
            Self::Exit => 10,
        }
    }

    /// Entry for a typed number, if any
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == number)
    }

    /// Text shown in the menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Aggiungi articolo",
            Self::List => "Visualizza lista",
            Self::Remove => "Rimuovi articolo",
            Self::Search => "Cerca articolo",
            Self::TogglePurchased => "Marca come acquistato",
            Self::Totals => "Calcola totale spesa",
            Self::Save => "Salva su file",
            Self::Load => "Carica da file",
            Self::Clear => "Svuota lista",
            Self::Exit => "Esci",
        }
    }
}
