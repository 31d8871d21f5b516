use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Setup,
    #[at("/play")]
    Play,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Which route a given screen belongs on.
    #[must_use]
    pub const fn for_screen(screen: crate::app::Screen) -> Self {
        match screen {
            crate::app::Screen::Setup => Self::Setup,
            crate::app::Screen::Play => Self::Play,
        }
    }
}
