/// Keys the page-navigation layer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
    Home,
}

/// What a key press asks the page to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavCommand {
    NextSection,
    PrevSection,
    FirstSection,
}

/// Maps navigation keys to commands. The embedder should suppress the
/// platform's default handling for any key it forwards here.
pub fn nav_command(key: Key) -> NavCommand {
    match key {
        Key::ArrowDown | Key::PageDown => NavCommand::NextSection,
        Key::ArrowUp | Key::PageUp => NavCommand::PrevSection,
        Key::Home => NavCommand::FirstSection,
    }
}
