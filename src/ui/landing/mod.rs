//! Sections of the FinBud landing page, composed top to bottom by
//! [`crate::ui::app::App`].

pub mod chat_panel;
pub mod footer;
pub mod header;
pub mod hero;

pub use chat_panel::ChatPanel;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
