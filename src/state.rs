use crate::content::{ContentBundle, Language};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCloseSource {
    Button,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleTheme,
    ToggleLanguage,
    OpenPanel,
    ClosePanel(PanelCloseSource),
}

/// Viewer-controlled toggles. Lives for the page session only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub language: Language,
    pub panel_open: bool,
}

impl UiState {
    pub fn content(&self) -> &'static ContentBundle {
        self.language.content()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self, source: PanelCloseSource) {
        if self.panel_open {
            log::debug!("live panel closed via {source:?}");
        }
        self.panel_open = false;
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::ToggleTheme => self.toggle_theme(),
            UiAction::ToggleLanguage => self.toggle_language(),
            UiAction::OpenPanel => self.open_panel(),
            UiAction::ClosePanel(source) => self.close_panel(source),
        }
    }

    pub fn with(mut self, action: UiAction) -> Self {
        self.apply(action);
        self
    }
}
