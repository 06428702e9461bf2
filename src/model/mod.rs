//! Pure Application Model
//!
//! Cloneable state, organized into focused sub-models:
//!
//! - **CardsModel**: the registered cards mapping
//! - **LibraryModel**: the folder-listing fetch machine
//! - **NavigationModel**: the route stack
//! - **UiModel**: filter input, selection mode, toast, quit flag
//!
//! All I/O lives outside the model; these types only hold and transform
//! state, which keeps them usable from the integration tests.

pub mod cards;
pub mod library;
pub mod navigation;
pub mod ui;

pub use cards::CardsModel;
pub use library::{FetchState, LibraryModel};
pub use navigation::{NavigationModel, Route};
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Debug, Clone)]
pub struct Model {
    pub cards: CardsModel,
    pub library: LibraryModel,
    pub navigation: NavigationModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            cards: CardsModel::new(),
            library: LibraryModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Card currently selected in the cards list (if any)
    pub fn selected_card(&self) -> Option<(&String, &crate::api::Card)> {
        self.cards
            .selected
            .and_then(|idx| self.cards.get_by_index(idx))
    }

    /// Whether music selection mode is active
    pub fn is_selecting(&self) -> bool {
        self.ui.selecting_for.is_some()
    }
}
